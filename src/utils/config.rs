//! API location and form defaults

pub const DEFAULT_SATIRE_LEVEL: i64 = 50;
pub const SATIRE_RANGE: std::ops::RangeInclusive<i64> = 0..=100;

/// The editor is served by the same backend it edits, so the default
/// (empty) base resolves every endpoint against the page origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
}

impl AppConfig {
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}
