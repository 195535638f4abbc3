use std::io::{self, Write};

pub const LOW_COUNT_WARNING: &str =
    "Warning: unusually low count. Check your network or the selector logic.";

pub fn is_low_count(count: usize, min_expected: usize) -> bool {
    count < min_expected
}

/// Prints the count summary to `out` and, below `min_expected`, the advisory warning to `err`.
/// The warning never fails the run.
pub fn summarize(
    count: usize,
    min_expected: usize,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{count} institutions found")?;
    if is_low_count(count, min_expected) {
        log::warn!("only {count} institutions found, expected at least {min_expected}");
        writeln!(err, "{LOW_COUNT_WARNING}")?;
    }
    Ok(())
}
