use chrono::NaiveDate;

pub const DEFAULT_RELAY_BASE: &str = "https://api.allorigins.win/get?url=";
pub const DEFAULT_PROFILE_URL: &str = "https://dmoj.ca/user/Dwin2020";

// Synthetic fallback range and per-day ceiling
pub const SYNTHETIC_START: (i32, u32, u32) = (2020, 1, 1);
pub const SYNTHETIC_MAX_COUNT: u32 = 5;

/// Where the heatmap gets its data from and how the fallback looks.
///
/// Always built from the hardcoded defaults; the page has no way to change it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeatmapConfig {
    /// Relay endpoint; the encoded profile URL is appended to it.
    pub relay_base: String,
    pub profile_url: String,
    pub synthetic_start: NaiveDate,
    pub synthetic_max_count: u32,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        let (y, m, d) = SYNTHETIC_START;
        Self {
            relay_base: DEFAULT_RELAY_BASE.to_string(),
            profile_url: DEFAULT_PROFILE_URL.to_string(),
            synthetic_start: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            synthetic_max_count: SYNTHETIC_MAX_COUNT,
        }
    }
}

impl HeatmapConfig {
    /// Full request URL: relay base followed by the percent-encoded profile.
    pub fn relay_url(&self) -> String {
        format!(
            "{}{}",
            self.relay_base,
            urlencoding::encode(&self.profile_url)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_url_encodes_profile() {
        let cfg = HeatmapConfig::default();
        assert_eq!(
            cfg.relay_url(),
            "https://api.allorigins.win/get?url=https%3A%2F%2Fdmoj.ca%2Fuser%2FDwin2020"
        );
    }

    #[test]
    fn defaults_are_the_hardcoded_values() {
        let cfg = HeatmapConfig::default();
        assert_eq!(cfg.relay_base, DEFAULT_RELAY_BASE);
        assert_eq!(cfg.profile_url, DEFAULT_PROFILE_URL);
        assert_eq!(cfg.synthetic_start, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(cfg.synthetic_max_count, 5);
    }
}
