use crate::error::PaginationError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;
const OPTIONS_FILENAME: &str = "options.json";

/// Everything about a pagination control that is configuration rather than
/// state: sizing, style classes and glyphs.
///
/// Every field has a default, so a partial JSON file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationOptions {
    pub page_size: usize,
    pub max_visible_pages: usize,
    pub class_name: String,
    pub button_class_name: String,
    pub active_button_class_name: String,
    pub disabled_button_class_name: String,
    pub prev_label: String,
    pub next_label: String,
    pub ellipsis_label: String,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            class_name: String::new(),
            button_class_name: String::new(),
            active_button_class_name: String::new(),
            disabled_button_class_name: String::new(),
            prev_label: "<".to_string(),
            next_label: ">".to_string(),
            ellipsis_label: crate::window::ELLIPSIS.to_string(),
        }
    }
}

impl PaginationOptions {
    /// Class list for a page button: the button class, a space, then the
    /// active class or nothing. Inactive buttons keep the trailing space.
    pub fn page_button_classes(&self, active: bool) -> String {
        let active_class = if active {
            self.active_button_class_name.as_str()
        } else {
            ""
        };
        format!("{} {}", self.button_class_name, active_class)
    }

    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.page_size == 0 {
            return Err(PaginationError::InvalidOption(
                "page_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_json(content: &str) -> Result<Self, PaginationError> {
        let options: PaginationOptions = serde_json::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON file
    pub fn load(path: &Path) -> Result<Self, PaginationError> {
        let content = fs::read_to_string(path)?;
        let options = Self::from_json(&content)?;
        log::debug!("Loaded pagination options from {}", path.display());
        Ok(options)
    }

    /// Load options from the platform config directory, or defaults if no
    /// options file exists there
    pub fn load_or_default() -> Result<Self, PaginationError> {
        match default_options_path() {
            Some(path) if path.exists() => Self::load(&path),
            Some(_) => Ok(Self::default()),
            None => {
                log::warn!("Could not determine config directory, using default options");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PaginationError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Where `load_or_default` looks for the options file
pub fn default_options_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pagebar").map(|dirs| dirs.config_dir().join(OPTIONS_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("pagebar-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_defaults() {
        let options = PaginationOptions::default();
        assert_eq!(options.page_size, 10);
        assert_eq!(options.max_visible_pages, 5);
        assert_eq!(options.class_name, "");
        assert_eq!(options.prev_label, "<");
        assert_eq!(options.next_label, ">");
        assert_eq!(options.ellipsis_label, "...");
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let options =
            PaginationOptions::from_json(r#"{"page_size": 25, "button_class_name": "btn"}"#)
                .unwrap();
        assert_eq!(options.page_size, 25);
        assert_eq!(options.button_class_name, "btn");
        assert_eq!(options.max_visible_pages, 5);
        assert_eq!(options.next_label, ">");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = PaginationOptions::from_json(r#"{"page_size": 0}"#).unwrap_err();
        assert!(matches!(err, PaginationError::InvalidOption(_)));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = PaginationOptions::from_json("{not json").unwrap_err();
        assert!(matches!(err, PaginationError::Json(_)));
    }

    #[test]
    fn test_page_button_classes() {
        let options = PaginationOptions {
            button_class_name: "btn".to_string(),
            active_button_class_name: "active".to_string(),
            ..Default::default()
        };
        assert_eq!(options.page_button_classes(false), "btn ");
        assert_eq!(options.page_button_classes(true), "btn active");
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip/options.json");
        let options = PaginationOptions {
            max_visible_pages: 3,
            class_name: "pager".to_string(),
            ..Default::default()
        };
        options.save(&path).unwrap();
        let loaded = PaginationOptions::load(&path).unwrap();
        assert_eq!(loaded, options);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PaginationOptions::load(&temp_path("does-not-exist.json")).unwrap_err();
        assert!(matches!(err, PaginationError::Io(_)));
    }
}
