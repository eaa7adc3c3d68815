//! Clock formatting shared by the front ends.

/// Formats a second count as "m:ss". Minutes are not zero padded.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
