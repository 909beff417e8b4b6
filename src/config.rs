use crate::telemetry::LogLevel;
use std::time::Duration;

const DEFAULT_SCROLL_THRESHOLD_PX: u32 = 50;
const DEFAULT_LOOKAHEAD_OFFSET_PX: u32 = 150;
const DEFAULT_NAV_OFFSET_PX: u32 = 80;
const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 5_000;
const DEFAULT_RESUME_PATH: &str = "/resume.pdf";
const DEFAULT_RESUME_FILE_NAME: &str = "resume.pdf";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const SCROLL_THRESHOLD_PX_BOUNDS: (u32, u32) = (0, 1_000);
const LOOKAHEAD_OFFSET_PX_BOUNDS: (u32, u32) = (0, 2_000);
const NAV_OFFSET_PX_BOUNDS: (u32, u32) = (0, 500);
const CAROUSEL_INTERVAL_MS_BOUNDS: (u64, u64) = (1_000, 60_000);

/// Raw build-time overrides, one slot per `PORTFOLIO_*` variable.
#[derive(Clone, Copy, Default)]
pub struct RawOverrides<'a> {
    pub scroll_threshold_px: Option<&'a str>,
    pub lookahead_offset_px: Option<&'a str>,
    pub nav_offset_px: Option<&'a str>,
    pub carousel_interval_ms: Option<&'a str>,
    pub resume_path: Option<&'a str>,
    pub resume_file_name: Option<&'a str>,
    pub log_level: Option<&'a str>,
}

impl RawOverrides<'static> {
    /// A static page has no runtime environment, so overrides are baked in
    /// when the wasm bundle is compiled.
    pub fn from_build_env() -> Self {
        Self {
            scroll_threshold_px: option_env!("PORTFOLIO_SCROLL_THRESHOLD_PX"),
            lookahead_offset_px: option_env!("PORTFOLIO_LOOKAHEAD_OFFSET_PX"),
            nav_offset_px: option_env!("PORTFOLIO_NAV_OFFSET_PX"),
            carousel_interval_ms: option_env!("PORTFOLIO_CAROUSEL_INTERVAL_MS"),
            resume_path: option_env!("PORTFOLIO_RESUME_PATH"),
            resume_file_name: option_env!("PORTFOLIO_RESUME_FILE_NAME"),
            log_level: option_env!("PORTFOLIO_LOG_LEVEL"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub scroll_threshold_px: f64,
    pub lookahead_offset_px: f64,
    pub nav_offset_px: f64,
    pub carousel_interval: Duration,
    pub resume_path: String,
    pub resume_file_name: String,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_overrides(RawOverrides::default())
    }
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self::from_overrides(RawOverrides::from_build_env())
    }

    pub fn from_overrides(raw: RawOverrides<'_>) -> Self {
        let scroll_threshold_px = parse_u32_with_bounds(
            raw.scroll_threshold_px,
            DEFAULT_SCROLL_THRESHOLD_PX,
            SCROLL_THRESHOLD_PX_BOUNDS,
        );
        let lookahead_offset_px = parse_u32_with_bounds(
            raw.lookahead_offset_px,
            DEFAULT_LOOKAHEAD_OFFSET_PX,
            LOOKAHEAD_OFFSET_PX_BOUNDS,
        );
        let nav_offset_px =
            parse_u32_with_bounds(raw.nav_offset_px, DEFAULT_NAV_OFFSET_PX, NAV_OFFSET_PX_BOUNDS);
        let carousel_interval_ms = parse_u64_with_bounds(
            raw.carousel_interval_ms,
            DEFAULT_CAROUSEL_INTERVAL_MS,
            CAROUSEL_INTERVAL_MS_BOUNDS,
        );
        let resume_path = parse_non_empty_string(raw.resume_path)
            .unwrap_or_else(|| DEFAULT_RESUME_PATH.to_string());
        let resume_file_name = parse_non_empty_string(raw.resume_file_name)
            .unwrap_or_else(|| DEFAULT_RESUME_FILE_NAME.to_string());
        let log_level = parse_log_level(raw.log_level, DEFAULT_LOG_LEVEL);

        Self {
            scroll_threshold_px: f64::from(scroll_threshold_px),
            lookahead_offset_px: f64::from(lookahead_offset_px),
            nav_offset_px: f64::from(nav_offset_px),
            carousel_interval: Duration::from_millis(carousel_interval_ms),
            resume_path,
            resume_file_name,
            log_level,
        }
    }
}

fn parse_u32_with_bounds(raw: Option<&str>, default: u32, bounds: (u32, u32)) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_u64_with_bounds(raw: Option<&str>, default: u64, bounds: (u64, u64)) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(raw: Option<&str>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(raw: Option<&str>, default: LogLevel) -> LogLevel {
    parse_non_empty_string(raw)
        .and_then(|value| LogLevel::from_str(&value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = SiteConfig::default();

        assert_eq!(config.scroll_threshold_px, 50.0);
        assert_eq!(config.lookahead_offset_px, 150.0);
        assert_eq!(config.nav_offset_px, 80.0);
        assert_eq!(config.carousel_interval, Duration::from_millis(5_000));
        assert_eq!(config.resume_path, "/resume.pdf");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn overrides_within_bounds_are_applied() {
        let config = SiteConfig::from_overrides(RawOverrides {
            lookahead_offset_px: Some(" 200 "),
            carousel_interval_ms: Some("8000"),
            resume_path: Some("/files/cv.pdf"),
            log_level: Some("DEBUG"),
            ..RawOverrides::default()
        });

        assert_eq!(config.lookahead_offset_px, 200.0);
        assert_eq!(config.carousel_interval, Duration::from_millis(8_000));
        assert_eq!(config.resume_path, "/files/cv.pdf");
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_bounds_or_garbage_falls_back_to_default() {
        let config = SiteConfig::from_overrides(RawOverrides {
            nav_offset_px: Some("9000"),
            carousel_interval_ms: Some("10"),
            scroll_threshold_px: Some("fifty"),
            resume_file_name: Some("   "),
            log_level: Some("verbose"),
            ..RawOverrides::default()
        });

        assert_eq!(config.nav_offset_px, 80.0);
        assert_eq!(config.carousel_interval, Duration::from_millis(5_000));
        assert_eq!(config.scroll_threshold_px, 50.0);
        assert_eq!(config.resume_file_name, "resume.pdf");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn default_resume_path_is_shipped_with_the_bundle() {
        let config = SiteConfig::default();
        let asset = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("assets")
            .join(config.resume_path.trim_start_matches('/'));

        let bytes = std::fs::read(&asset).expect("resume asset is present");
        assert!(bytes.starts_with(b"%PDF"));

        let index = std::fs::read_to_string(
            std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("index.html"),
        )
        .expect("index.html is present");
        assert!(index.contains(r#"rel="copy-file" href="assets/resume.pdf""#));
    }
}
