use linecode_codec::{Level, Signal};
use serde::Serialize;

/// Render `signal` as a two-row step trace.
///
/// Each symbol spans exactly `unit_width` columns. High runs are drawn on the
/// `H` row and low runs on the `L` row; a level change draws its `|` edge in
/// the first column of the new run, so edges stay on symbol boundaries and
/// consecutive equal symbols read as one flat run:
///
/// ```text
/// H    ___
/// L __|   |_
/// ```
pub fn step_trace(signal: &Signal, unit_width: usize) -> String {
    if signal.is_empty() {
        return String::new();
    }

    let width = unit_width.max(1);
    let mut high_row = String::from("H ");
    let mut low_row = String::from("L ");

    for (i, (level, run)) in signal.runs().into_iter().enumerate() {
        let mut columns = run * width;
        if i > 0 {
            high_row.push(' ');
            low_row.push('|');
            columns -= 1;
        }
        let (high, low) = match level {
            Level::High => ('_', ' '),
            Level::Low => (' ', '_'),
        };
        high_row.extend(std::iter::repeat(high).take(columns));
        low_row.extend(std::iter::repeat(low).take(columns));
    }

    format!("{}\n{}", high_row.trim_end(), low_row.trim_end())
}

/// One line of machine-readable output.
#[derive(Debug, Serialize)]
pub struct CodecRecord<'a> {
    pub input: &'a str,
    pub scheme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
