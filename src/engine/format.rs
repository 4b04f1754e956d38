/// Format seconds as `M:SS`.
///
/// Non-finite input (the pre-metadata duration) and negative input render as
/// `0:00`. Minutes are not capped, so an hour reads `60:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Percentage of `duration` covered by `elapsed`, clamped to `0..=100`.
///
/// Zero while the duration is unknown.
pub fn progress_percent(elapsed: f64, duration: f64) -> f64 {
    if !(duration.is_finite() && duration > 0.0) || !elapsed.is_finite() {
        return 0.0;
    }
    (elapsed / duration * 100.0).clamp(0.0, 100.0)
}
