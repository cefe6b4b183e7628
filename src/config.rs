use crate::diagnostics::LogLevel;

pub const HERO_CYCLE_MS: u32 = 3_000;
pub const SKILLS_CYCLE_MS: u32 = 3_000;
pub const TOAST_VISIBLE_MS: u32 = 4_000;
pub const OVERLAY_TRANSITION_MS: f64 = 300.0;
pub const HERO_TEXT_FADE_MS: f64 = 500.0;
pub const CARD_FADE_MS: f64 = 450.0;
pub const PROGRESS_FILL_MS: f64 = 900.0;
pub const HERO_SCROLL_FADE_PX: f64 = 600.0;

pub const PARTICLE_COUNT: usize = 1_000;
pub const PARTICLE_SPREAD: f32 = 10.0;
pub const SHAPE_COUNT: usize = 5;
pub const SHAPE_SPREAD: f32 = 8.0;
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1_000.0;
pub const CAMERA_DISTANCE: f32 = 2.0;
pub const FALLBACK_VIEWPORT: (f32, f32) = (1_280.0, 720.0);

pub const CONTACT_SUCCESS_MESSAGE: &str = "Message Sent Successfully!";
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
pub const LOG_LEVEL_ATTRIBUTE: &str = "data-log-level";

pub fn parse_log_level(value: Option<&str>, default: LogLevel) -> LogLevel {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(LogLevel::from_str)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_parses_case_insensitively() {
        assert_eq!(parse_log_level(Some(" DEBUG "), LogLevel::Info), LogLevel::Debug);
        assert_eq!(parse_log_level(Some("warn"), LogLevel::Info), LogLevel::Warn);
    }

    #[test]
    fn log_level_falls_back_on_unknown_or_missing() {
        assert_eq!(parse_log_level(Some("verbose"), LogLevel::Info), LogLevel::Info);
        assert_eq!(parse_log_level(Some(""), LogLevel::Warn), LogLevel::Warn);
        assert_eq!(parse_log_level(None, DEFAULT_LOG_LEVEL), LogLevel::Info);
    }
}
