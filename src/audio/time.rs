/// Format milliseconds as `M:SS`. Minutes are not capped, so an hour renders
/// as `60:00`.
pub fn format_duration(ms: u64) -> String {
    let total_secs = ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}
