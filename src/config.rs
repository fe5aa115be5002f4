use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{constants::PAGE_DEFAULTS, domain::SectionId, error::Result, storage};

/// Tunables of the page, read from `config.json`. Missing keys keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub header_height: u32,
    pub visibility_threshold: f32,
    pub page_size: usize,
    pub default_section: SectionId,
    pub scroll_step: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_height: PAGE_DEFAULTS.header_height,
            visibility_threshold: PAGE_DEFAULTS.visibility_threshold,
            page_size: PAGE_DEFAULTS.page_size,
            default_section: SectionId::new(PAGE_DEFAULTS.default_section),
            scroll_step: PAGE_DEFAULTS.scroll_step,
        }
    }
}

impl PageConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let config: PageConfig = storage::read_json(path)?;
        info!(path = %path.display(), "loaded page config");
        Ok(config.sanitized())
    }

    /// A zero page size would make "load more" a no-op.
    fn sanitized(mut self) -> Self {
        if self.page_size == 0 {
            self.page_size = PAGE_DEFAULTS.page_size;
        }
        self.visibility_threshold = self.visibility_threshold.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf, time::SystemTime};

    use super::*;

    fn unique_path(prefix: &str) -> PathBuf {
        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        PathBuf::from(format!("/tmp/{}_{}.json", prefix, now))
    }

    #[test]
    fn test_defaults_match_page_constants() {
        let config = PageConfig::default();
        assert_eq!(config.header_height, 64);
        assert_eq!(config.visibility_threshold, 0.5);
        assert_eq!(config.page_size, 6);
        assert_eq!(config.default_section.as_str(), "inicio");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = unique_path("folio_config_partial");
        fs::write(&path, r#"{ "pageSize": 3 }"#).unwrap();

        let config = PageConfig::load(&path).unwrap();
        assert_eq!(config.page_size, 3);
        assert_eq!(config.header_height, 64);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_zero_page_size_falls_back() {
        let path = unique_path("folio_config_zero");
        fs::write(&path, r#"{ "pageSize": 0, "visibilityThreshold": 4.0 }"#).unwrap();

        let config = PageConfig::load(&path).unwrap();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.visibility_threshold, 1.0);

        fs::remove_file(path).ok();
    }
}
