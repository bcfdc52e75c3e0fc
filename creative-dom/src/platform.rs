//! Browser and device sniffing over the host's navigator strings.
//!
//! These are heuristics, not capability detection: a spoofed or unusual
//! user agent simply answers `false`.

use std::sync::LazyLock;

use regex::Regex;

static LEGACY_IE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Trident.*rv:11\.").expect("valid regex"));

static MOBILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)iPhone|iPad|iPod|Android").expect("valid regex"));

/// Snapshot of the navigator strings the detectors read.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UserAgent {
    pub user_agent: String,
    pub vendor: String,
    pub app_version: String,
}

impl UserAgent {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Default::default()
        }
    }

    pub fn vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self
    }

    pub fn app_version(mut self, app_version: impl Into<String>) -> Self {
        self.app_version = app_version.into();
        self
    }

    /// Chrome and other Google-vendored Chromium builds.
    pub fn is_chromium(&self) -> bool {
        self.user_agent.contains("Chrome") && self.vendor.contains("Google Inc")
    }

    pub fn is_firefox(&self) -> bool {
        self.user_agent.to_lowercase().contains("firefox")
    }

    /// Internet Explorer up to 11 (`MSIE ` tokens or the Trident engine).
    pub fn is_legacy_ie(&self) -> bool {
        let msie = matches!(self.user_agent.find("MSIE "), Some(index) if index > 0);
        msie || LEGACY_IE.is_match(&self.user_agent)
    }

    pub fn is_safari_vendor(&self) -> bool {
        self.vendor.contains("Apple")
    }

    pub fn is_mac_platform(&self) -> bool {
        self.app_version.contains("Mac")
    }

    /// iOS device families and Android.
    pub fn is_mobile_device(&self) -> bool {
        MOBILE.is_match(&self.user_agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msie_token_at_start_is_ignored() {
        assert!(!UserAgent::new("MSIE 10.0").is_legacy_ie());
        assert!(UserAgent::new("Mozilla/5.0 (compatible; MSIE 10.0)").is_legacy_ie());
    }

    #[test]
    fn test_empty_agent_matches_nothing() {
        let ua = UserAgent::default();
        assert!(!ua.is_chromium());
        assert!(!ua.is_firefox());
        assert!(!ua.is_legacy_ie());
        assert!(!ua.is_safari_vendor());
        assert!(!ua.is_mac_platform());
        assert!(!ua.is_mobile_device());
    }
}
