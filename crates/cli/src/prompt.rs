//! Interactive input loop: read one JSON request per line and retry on
//! malformed or invalid surfaces, up to a fixed number of attempts.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use surfclass::reduce::ReductionCfg;
use surfclass::{report_with, Report};

use crate::input::SurfaceInput;

const PROMPT: &str = "surface json> ";

/// Read requests from `input` until one classifies.
///
/// Parse errors and validation faults are written to `output` and cost one
/// attempt each; algorithm faults abort immediately.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    attempts: u32,
    cfg: ReductionCfg,
) -> Result<Report> {
    let mut line = String::new();
    for attempt in 1..=attempts {
        write!(output, "{PROMPT}")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line).context("reading surface request")? == 0 {
            bail!("input closed after {} attempt(s)", attempt - 1);
        }
        let fault = match serde_json::from_str::<SurfaceInput>(line.trim()) {
            Ok(req) => match req.to_surface() {
                Ok(surface) => return Ok(report_with(&surface, cfg)?),
                Err(fault) => fault.to_string(),
            },
            Err(err) => format!("not a surface request: {err}"),
        };
        tracing::warn!(attempt, attempts, %fault, "rejected");
        writeln!(output, "error: {fault}")?;
    }
    bail!("no valid surface after {attempts} attempt(s)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const RP2: &str = r#"{"vertices": 2, "edges": [[0, 1], [1, 0]], "pairs": [[[0, 1], [1, 0]]]}"#;

    #[test]
    fn retries_until_valid() {
        let text = format!("not json\n{{\"vertices\": 3, \"edges\": [], \"pairs\": []}}\n{RP2}\n");
        let mut out = Vec::new();
        let r = run(Cursor::new(text), &mut out, 3, ReductionCfg::default()).unwrap();
        assert_eq!(r.name, "This is a projective plane");
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown.matches(PROMPT).count(), 3);
        assert!(shown.contains("not a surface request"));
        assert!(shown.contains("even positive integer, got 3"));
    }

    #[test]
    fn gives_up_after_attempts() {
        let text = "{}\n{}\n".to_string() + RP2;
        let err = run(Cursor::new(text), Vec::new(), 2, ReductionCfg::default()).unwrap_err();
        assert!(err.to_string().contains("after 2 attempt"));
    }

    #[test]
    fn stops_at_end_of_input() {
        let err = run(Cursor::new(""), Vec::new(), 3, ReductionCfg::default()).unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }
}
