//! Count formatting for log lines.

/// Format a count with its noun, adding "s" unless the count is exactly one.
///
/// `plural_count(1, "pixel")` is `"1 pixel"`, `plural_count(0, "pixel")` is `"0 pixels"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
