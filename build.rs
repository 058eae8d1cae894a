//! Captures the compiler version and target for `compilerAndVersion`.

use std::env;
use std::process::Command;

fn main() {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| "rustc unknown".to_string());

    let target = env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=HOSTBIND_RUSTC_VERSION={version}");
    println!("cargo:rustc-env=HOSTBIND_TARGET={target}");
    println!("cargo:rerun-if-env-changed=RUSTC");
}
