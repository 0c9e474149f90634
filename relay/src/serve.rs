use std::io::{BufRead, Write};

use goban::{Request, Response};
use tracing::{trace, warn};

use crate::Relay;

/// Answers one JSON request per input line with one JSON response per output
/// line, until the input is closed.
///
/// A line that is not a request gets an error notice in its place. Only I/O
/// errors end the loop early.
pub fn serve<R: BufRead, W: Write>(relay: &Relay, mut input: R, mut output: W) -> anyhow::Result<()> {
    let mut buf = Vec::new();

    loop {
        buf.clear(); // because read_until() appends to the buffer
        let num_bytes_read = input.read_until(b'\n', &mut buf)?;
        if num_bytes_read == 0 {
            // EOF - the front-end has exited.
            break Ok(());
        }

        let resp = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let line = line.trim_end();
                if line.is_empty() {
                    continue;
                }
                trace!(name: "Received request", request = %line);
                match serde_json::from_str::<Request>(line) {
                    Ok(req) => relay.handle(req),
                    Err(err) => {
                        warn!("Unparseable request: {}", err);
                        error_notice(err)
                    }
                }
            }
            Err(err) => {
                warn!("Request is not valid UTF-8: {}", err);
                error_notice(err)
            }
        };

        let resp_json = serde_json::to_string(&resp)?;
        trace!(name: "Sending response", response = %resp_json);
        writeln!(output, "{}", resp_json)?;
        output.flush()?;
    }
}

fn error_notice(err: impl std::fmt::Display) -> Response {
    Response::Ephemeral {
        content: format!("Error: {}", err),
    }
}
