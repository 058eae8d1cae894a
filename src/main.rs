#[cfg(not(target_arch = "wasm32"))]
mod msg;

#[cfg(not(target_arch = "wasm32"))]
use std::io::{self, Write};
#[cfg(not(target_arch = "wasm32"))]
use std::sync::mpsc;
#[cfg(not(target_arch = "wasm32"))]
use std::thread;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Result;
#[cfg(not(target_arch = "wasm32"))]
use hostbind::host::LocalHost;
#[cfg(not(target_arch = "wasm32"))]
use hostbind::model::config::ShimConfig;
#[cfg(not(target_arch = "wasm32"))]
use msg::Msg;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<()> {
    let (config, source) = ShimConfig::load()?;
    let _guard = hostbind::logging::init(&config.logging.filter)?;

    tracing::info!("hostbind starting");
    tracing::info!("config loaded from {source}");

    let mut host = LocalHost::new();
    hostbind::register_callbacks(&mut host, &config)?;

    run(&host)
}

// On wasm32 the library's start function does the work.
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Serves host calls until the process is killed. Never returns `Ok`.
#[cfg(not(target_arch = "wasm32"))]
fn run(host: &LocalHost) -> Result<()> {
    // `tx` stays alive here, so `recv` blocks forever once input stops.
    let (tx, rx) = mpsc::channel::<Msg>();

    // Input thread — reads call lines from stdin and forwards as Msg
    let tx_input = tx.clone();
    thread::spawn(move || {
        if let Err(err) = msg::forward_lines(io::stdin().lock(), &tx_input) {
            tracing::warn!("stdin read failed: {err}");
        }
    });

    let mut stdout = io::stdout();
    loop {
        match rx.recv()? {
            Msg::Call(call) => match host.invoke(&call.target, &call.args) {
                Ok(value) => writeln!(stdout, "{value}")?,
                Err(err) => {
                    tracing::warn!("call {} failed: {err}", call.target);
                    writeln!(stdout, "error: {err}")?;
                }
            },
            Msg::Rejected(err) => writeln!(stdout, "error: {err}")?,
            Msg::InputClosed => {
                tracing::info!("input closed; bindings stay published");
            }
        }
        stdout.flush()?;
    }
}
