//! Per-screen list configuration
//!
//! Each list screen declares which fields take part in free-text search,
//! which fields back the dropdown filters (and their "match all" value),
//! and which page sizes the paginator offers.

use super::error::ConfigError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Значение фильтра "Все", которое не ограничивает выборку
pub const ALL_SENTINEL: &str = "all";

pub const DEFAULT_PAGE_SIZE: usize = 10;

pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

fn default_all_value() -> String {
    ALL_SENTINEL.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    DEFAULT_PAGE_SIZE_OPTIONS.to_vec()
}

/// Поле, по которому строится выпадающий фильтр точного совпадения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactFilterField {
    pub field: String,
    #[serde(default = "default_all_value")]
    pub all_value: String,
}

impl ExactFilterField {
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
            all_value: default_all_value(),
        }
    }
}

/// Настройки одной списочной формы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default)]
    pub search_fields: Vec<String>,
    #[serde(default)]
    pub exact_filter_fields: Vec<ExactFilterField>,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            search_fields: Vec::new(),
            exact_filter_fields: Vec::new(),
            page_size_options: default_page_size_options(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListConfig {
    pub fn new(search_fields: &[&str]) -> Self {
        Self {
            search_fields: search_fields.iter().map(|f| f.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_exact_filter(mut self, field: &str) -> Self {
        self.exact_filter_fields.push(ExactFilterField::new(field));
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size;
        self
    }

    /// Значение "Все" для поля (по умолчанию `"all"`)
    pub fn sentinel_for(&self, field: &str) -> &str {
        self.exact_filter_fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.all_value.as_str())
            .unwrap_or(ALL_SENTINEL)
    }

    /// Пустое значение, `"all"` или собственное значение "Все" поля не фильтруют
    pub fn is_match_all(&self, field: &str, value: &str) -> bool {
        value.is_empty() || value == ALL_SENTINEL || value == self.sentinel_for(field)
    }

    pub fn validate(&self, screen: &str) -> Result<(), ConfigError> {
        if self.default_page_size == 0 || self.page_size_options.contains(&0) {
            return Err(ConfigError::ZeroPageSize {
                screen: screen.to_string(),
            });
        }
        Ok(())
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[members]
search_fields = ["name", "email", "mobile", "businessName"]
exact_filter_fields = [{ field = "chapterName" }, { field = "status" }]

[chapters]
search_fields = ["chapterName", "city", "region"]
exact_filter_fields = [{ field = "region" }, { field = "status" }]

[bdm]
search_fields = ["memberName", "metWith", "chapterName"]
exact_filter_fields = [{ field = "chapterName" }, { field = "mode" }]

[business_given]
search_fields = ["memberName", "counterpartName", "chapterName"]
exact_filter_fields = [{ field = "chapterName" }, { field = "businessType" }]

[business_received]
search_fields = ["memberName", "counterpartName", "chapterName"]
exact_filter_fields = [{ field = "chapterName" }, { field = "businessType" }]

[referrals]
search_fields = ["referralName", "referredBy", "referredTo"]
exact_filter_fields = [{ field = "chapterName" }, { field = "status" }]

[visitors]
search_fields = ["visitorName", "invitedBy", "businessName"]
exact_filter_fields = [{ field = "chapterName" }, { field = "status" }]

[schedules]
search_fields = ["title", "venue", "chapterName"]
exact_filter_fields = [{ field = "chapterName" }, { field = "scheduleType" }, { field = "status" }]

[creatives]
search_fields = ["title", "category"]
exact_filter_fields = [{ field = "category" }, { field = "status" }]
page_size_options = [12, 24, 48]
default_page_size = 12

[monthly_rewards]
search_fields = ["memberName", "chapterName"]
exact_filter_fields = [{ field = "chapterName" }, { field = "month" }, { field = "tier" }]
"#;

/// Разбирает TOML с настройками списков (таблица на каждую форму)
pub fn load_list_configs(source: &str) -> Result<BTreeMap<String, ListConfig>, ConfigError> {
    let configs: BTreeMap<String, ListConfig> = toml::from_str(source)?;
    for (screen, config) in &configs {
        config.validate(screen)?;
    }
    Ok(configs)
}

static LIST_CONFIGS: Lazy<BTreeMap<String, ListConfig>> =
    Lazy::new(|| match load_list_configs(DEFAULT_CONFIG) {
        Ok(configs) => configs,
        Err(e) => {
            log::error!("Embedded list config is invalid: {}", e);
            BTreeMap::new()
        }
    });

/// Настройки списочной формы по ее ключу.
///
/// Для неизвестного ключа возвращаются настройки по умолчанию.
pub fn list_config(screen: &str) -> ListConfig {
    match LIST_CONFIGS.get(screen) {
        Some(config) => config.clone(),
        None => {
            log::warn!("No list config for screen '{}', using defaults", screen);
            ListConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let configs = load_list_configs(DEFAULT_CONFIG);
        assert!(configs.is_ok());
        let configs = configs.unwrap();
        assert_eq!(configs.len(), 10);

        let members = &configs["members"];
        assert_eq!(members.search_fields, vec!["name", "email", "mobile", "businessName"]);
        assert_eq!(members.default_page_size, 10);
        assert_eq!(members.page_size_options, vec![10, 25, 50, 100]);
        assert_eq!(members.exact_filter_fields[0].all_value, "all");
    }

    #[test]
    fn test_screen_overrides_page_size() {
        let creatives = list_config("creatives");
        assert_eq!(creatives.default_page_size, 12);
        assert_eq!(creatives.page_size_options, vec![12, 24, 48]);
    }

    #[test]
    fn test_unknown_screen_falls_back_to_default() {
        assert_eq!(list_config("no_such_screen"), ListConfig::default());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let source = r#"
[broken]
search_fields = ["name"]
default_page_size = 0
"#;
        let err = load_list_configs(source).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPageSize { ref screen } if screen == "broken"));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(matches!(
            load_list_configs("[members\nsearch_fields = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_custom_sentinel() {
        let source = r#"
[members]
exact_filter_fields = [{ field = "status", all_value = "any" }]
"#;
        let configs = load_list_configs(source).unwrap();
        let members = &configs["members"];
        assert_eq!(members.sentinel_for("status"), "any");
        assert!(members.is_match_all("status", "any"));
        assert!(members.is_match_all("status", "all"));
        assert!(members.is_match_all("status", ""));
        assert!(!members.is_match_all("status", "active"));
        assert_eq!(members.sentinel_for("chapterName"), "all");
    }
}
