pub mod decode;
pub mod demo;
pub mod encode;
pub mod schemes;

use anyhow::Result;
use linecode_codec::{CodecStrategy, Signal};

use crate::args::OutputArgs;
use crate::printing::{step_trace, CodecRecord};

/// Result of running one input through a codec.
#[derive(Debug)]
pub struct Converted {
    /// Text printed as the result.
    pub output: String,
    /// Signal drawn when `--plot` is set.
    pub trace: Signal,
}

/// Print per-input results in input order and fail if any input failed.
///
/// Failures are reported individually on stderr so the remaining inputs are
/// still shown.
pub fn report(
    strategy: CodecStrategy,
    inputs: &[String],
    results: Vec<Result<Converted>>,
    opts: OutputArgs,
) -> Result<()> {
    let failures = results.iter().filter(|r| r.is_err()).count();

    if opts.json {
        let records: Vec<CodecRecord> = inputs
            .iter()
            .zip(&results)
            .map(|(input, result)| CodecRecord {
                input,
                scheme: strategy.to_string(),
                output: result.as_ref().ok().map(|c| c.output.clone()),
                error: result.as_ref().err().map(|e| format!("{e:#}")),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for (input, result) in inputs.iter().zip(&results) {
            match result {
                Ok(converted) => {
                    println!("{input} -> {}", converted.output);
                    if opts.plot {
                        let width = usize::from(opts.unit_width);
                        println!("{}\n", step_trace(&converted.trace, width));
                    }
                }
                Err(e) => eprintln!("✗ {input}: {e:#}"),
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} inputs failed", inputs.len());
    }
    Ok(())
}
