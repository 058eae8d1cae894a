use std::io::{self, BufRead};
use std::sync::mpsc;

use hostbind::host::call::HostCall;

/// Messages delivered to the main thread.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// A parsed call to dispatch into the published globals.
    Call(HostCall),
    /// A line that could not be parsed; reported back as an error.
    Rejected(String),
    /// The stdin driver reached end of input.
    InputClosed,
}

impl Msg {
    /// Translates one raw input line. Blank and comment lines yield `None`.
    pub fn from_line(raw: &[u8]) -> Option<Self> {
        let Ok(line) = std::str::from_utf8(raw) else {
            return Some(Msg::Rejected("call line is not valid UTF-8".to_string()));
        };
        match HostCall::parse(line) {
            Ok(Some(call)) => Some(Msg::Call(call)),
            Ok(None) => None,
            Err(err) => Some(Msg::Rejected(err.to_string())),
        }
    }
}

/// Forwards every line of `input` to `tx` until end of input or a read error.
///
/// A bad line is answered with `Msg::Rejected` and reading continues.
pub fn forward_lines(mut input: impl BufRead, tx: &mpsc::Sender<Msg>) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                let _ = tx.send(Msg::InputClosed);
                return Err(err);
            }
        }

        if let Some(msg) = Msg::from_line(&buf) {
            if tx.send(msg).is_err() {
                return Ok(());
            }
        }
    }

    let _ = tx.send(Msg::InputClosed);
    Ok(())
}
