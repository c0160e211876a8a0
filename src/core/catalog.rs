// ContactDeck - core/catalog.rs
//
// Dataset catalog: parsing, validation, and the runtime configuration
// types that drive normalization, filtering, and display.
// Core layer: accepts TOML strings, never touches the filesystem.

use crate::util::constants;
use crate::util::error::CatalogError;
use regex::Regex;
use serde::Deserialize;

// =============================================================================
// TOML deserialization structures (raw input)
// =============================================================================

/// Raw TOML catalog as deserialized from `datasets/catalog.toml`.
/// This is validated and compiled into a `Catalog` for runtime use.
#[derive(Debug, Deserialize)]
pub struct CatalogDefinition {
    #[serde(default, rename = "dataset")]
    pub datasets: Vec<DatasetDef>,
}

#[derive(Debug, Deserialize)]
pub struct DatasetDef {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub email_cols: Vec<String>,
    #[serde(default)]
    pub filter_cols: Vec<String>,
    #[serde(default)]
    pub display_cols: Vec<String>,
    #[serde(default)]
    pub dedupe_cols: Vec<String>,
    #[serde(default)]
    pub numeric_cols: Vec<String>,
    #[serde(default)]
    pub range_col: Option<String>,
    #[serde(default)]
    pub social: Option<SocialDef>,
}

#[derive(Debug, Deserialize)]
pub struct SocialDef {
    pub handle_col: String,
    pub url_col: String,
    pub url_template: String,
    #[serde(default)]
    pub url_pattern: Option<String>,
}

// =============================================================================
// Runtime configuration types
// =============================================================================

/// Handle/URL column pairing for a social-media dataset.
#[derive(Debug, Clone)]
pub struct SocialColumns {
    /// Column holding the account handle (with or without a leading "@").
    pub handle_col: String,

    /// Column holding the profile URL.
    pub url_col: String,

    /// Prefix prepended to a handle to synthesize a missing URL
    /// (e.g. `https://x.com/`).
    pub url_template: String,

    /// Compiled pattern whose first capture group extracts the handle from
    /// a profile URL. `None` means handles are never derived from URLs.
    pub url_pattern: Option<Regex>,
}

/// Runtime configuration for one dataset (sheet) after validation.
#[derive(Debug, Clone)]
pub struct DatasetConfig {
    /// Sheet name in the workbook; unique catalog key.
    pub id: String,

    /// Human-readable name shown in the sidebar.
    pub display_name: String,

    /// Short description shown under the dataset heading.
    pub description: String,

    /// Sidebar grouping label.
    pub category: String,

    /// Ordered email-bearing column names (may be empty).
    pub email_cols: Vec<String>,

    /// Ordered categorical filter column names.
    pub filter_cols: Vec<String>,

    /// Ordered display projection; empty means all columns.
    pub display_cols: Vec<String>,

    /// Key-column subset for keep-first de-duplication; empty disables it.
    pub dedupe_cols: Vec<String>,

    /// Numeric-as-text columns cleaned and parsed by the normalizer.
    pub numeric_cols: Vec<String>,

    /// Numeric column driving the range filter, when present.
    pub range_col: Option<String>,

    /// Handle/URL derivation columns, when the dataset is social-media data.
    pub social: Option<SocialColumns>,
}

/// The validated dataset catalog, in definition order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub datasets: Vec<DatasetConfig>,
}

impl Catalog {
    /// Look up a dataset by id.
    pub fn get(&self, id: &str) -> Option<&DatasetConfig> {
        self.datasets.iter().find(|d| d.id == id)
    }

    /// Id of the first dataset (the default selection).
    pub fn first_id(&self) -> Option<&str> {
        self.datasets.first().map(|d| d.id.as_str())
    }

    /// Datasets grouped by category, both in definition order.
    pub fn grouped(&self) -> Vec<(&str, Vec<&DatasetConfig>)> {
        let mut groups: Vec<(&str, Vec<&DatasetConfig>)> = Vec::new();
        for ds in &self.datasets {
            match groups.iter_mut().find(|(cat, _)| *cat == ds.category) {
                Some((_, members)) => members.push(ds),
                None => groups.push((ds.category.as_str(), vec![ds])),
            }
        }
        groups
    }
}

// =============================================================================
// Catalog validation and compilation
// =============================================================================

/// Parse a TOML string into a `CatalogDefinition`.
pub fn parse_catalog_toml(toml_content: &str) -> Result<CatalogDefinition, CatalogError> {
    toml::from_str(toml_content).map_err(|e| CatalogError::TomlParse { source: e })
}

/// Validate a `CatalogDefinition` and compile it into a runtime `Catalog`.
///
/// Validates:
/// - Required fields are present and non-empty
/// - Dataset ids are unique and within the count limit
/// - Social url_pattern regexes are valid and within size limits
pub fn validate_and_compile(def: CatalogDefinition) -> Result<Catalog, CatalogError> {
    if def.datasets.len() > constants::MAX_DATASETS {
        return Err(CatalogError::TooManyDatasets {
            count: def.datasets.len(),
            max: constants::MAX_DATASETS,
        });
    }

    let mut datasets: Vec<DatasetConfig> = Vec::with_capacity(def.datasets.len());

    for ds in def.datasets {
        if ds.id.is_empty() {
            return Err(CatalogError::MissingField {
                dataset_id: "(empty)".to_string(),
                field: "id",
            });
        }
        if ds.display_name.is_empty() {
            return Err(CatalogError::MissingField {
                dataset_id: ds.id.clone(),
                field: "display_name",
            });
        }
        if ds.category.is_empty() {
            return Err(CatalogError::MissingField {
                dataset_id: ds.id.clone(),
                field: "category",
            });
        }
        if datasets.iter().any(|d| d.id == ds.id) {
            return Err(CatalogError::DuplicateId { id: ds.id });
        }

        let social = match ds.social {
            Some(s) => Some(compile_social(&ds.id, s)?),
            None => None,
        };

        datasets.push(DatasetConfig {
            id: ds.id,
            display_name: ds.display_name,
            description: ds.description,
            category: ds.category,
            email_cols: ds.email_cols,
            filter_cols: ds.filter_cols,
            display_cols: ds.display_cols,
            dedupe_cols: ds.dedupe_cols,
            numeric_cols: ds.numeric_cols,
            range_col: ds.range_col,
            social,
        });
    }

    Ok(Catalog { datasets })
}

fn compile_social(dataset_id: &str, def: SocialDef) -> Result<SocialColumns, CatalogError> {
    if def.handle_col.is_empty() {
        return Err(CatalogError::MissingField {
            dataset_id: dataset_id.to_string(),
            field: "social.handle_col",
        });
    }
    if def.url_col.is_empty() {
        return Err(CatalogError::MissingField {
            dataset_id: dataset_id.to_string(),
            field: "social.url_col",
        });
    }
    if def.url_template.is_empty() {
        return Err(CatalogError::MissingField {
            dataset_id: dataset_id.to_string(),
            field: "social.url_template",
        });
    }

    let url_pattern = match def.url_pattern {
        Some(pattern) => {
            if pattern.len() > constants::MAX_REGEX_PATTERN_LENGTH {
                return Err(CatalogError::RegexTooLong {
                    dataset_id: dataset_id.to_string(),
                    length: pattern.len(),
                    max_length: constants::MAX_REGEX_PATTERN_LENGTH,
                });
            }
            Some(
                Regex::new(&pattern).map_err(|e| CatalogError::InvalidRegex {
                    dataset_id: dataset_id.to_string(),
                    pattern,
                    source: e,
                })?,
            )
        }
        None => None,
    };

    Ok(SocialColumns {
        handle_col: def.handle_col,
        url_col: def.url_col,
        url_template: def.url_template,
        url_pattern,
    })
}

// =============================================================================
// Built-in catalog (embedded at compile time)
// =============================================================================

/// Embedded TOML content for the built-in catalog.
pub const BUILTIN_CATALOG_TOML: &str = include_str!("../../datasets/catalog.toml");

/// Load and validate the built-in catalog.
///
/// The content is compiled into the binary, so a failure here is a
/// packaging bug, not a user error.
pub fn load_builtin_catalog() -> Result<Catalog, CatalogError> {
    let catalog = validate_and_compile(parse_catalog_toml(BUILTIN_CATALOG_TOML)?)?;
    tracing::info!(datasets = catalog.datasets.len(), "Loaded built-in catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = load_builtin_catalog().expect("built-in catalog must validate");
        assert_eq!(catalog.datasets.len(), 8);

        for id in [
            "EU_MEPs_All_2024_2029",
            "Riksdag_SeatHolders_349",
            "Sweden_Gov_Ministers",
            "Sweden_Gov_Deputies_Links",
            "Sweden_Embassies_All",
            "Influencers_IG_Top1000",
            "Top_100_TikTok",
            "Top_200_X",
        ] {
            assert!(catalog.get(id).is_some(), "missing dataset '{id}'");
        }

        // The X dataset derives handles from URLs; TikTok only derives URLs.
        let x = catalog.get("Top_200_X").unwrap();
        assert!(x.social.as_ref().unwrap().url_pattern.is_some());
        let tiktok = catalog.get("Top_100_TikTok").unwrap();
        assert!(tiktok.social.as_ref().unwrap().url_pattern.is_none());
    }

    #[test]
    fn test_grouped_preserves_definition_order() {
        let catalog = load_builtin_catalog().unwrap();
        let groups = catalog.grouped();
        let labels: Vec<&str> = groups.iter().map(|(cat, _)| *cat).collect();
        assert_eq!(labels, vec!["Europe", "Sweden", "International"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let toml = r#"
            [[dataset]]
            id = "a"
            display_name = "A"
            category = "X"

            [[dataset]]
            id = "a"
            display_name = "A again"
            category = "X"
        "#;
        let result = validate_and_compile(parse_catalog_toml(toml).unwrap());
        assert!(matches!(result, Err(CatalogError::DuplicateId { .. })));
    }

    #[test]
    fn test_missing_display_name_rejected() {
        let toml = r#"
            [[dataset]]
            id = "a"
            display_name = ""
            category = "X"
        "#;
        let result = validate_and_compile(parse_catalog_toml(toml).unwrap());
        assert!(matches!(
            result,
            Err(CatalogError::MissingField {
                field: "display_name",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_url_pattern_rejected() {
        let toml = r#"
            [[dataset]]
            id = "a"
            display_name = "A"
            category = "X"

            [dataset.social]
            handle_col = "Handle"
            url_col = "URL"
            url_template = "https://example.com/"
            url_pattern = "[unclosed"
        "#;
        let result = validate_and_compile(parse_catalog_toml(toml).unwrap());
        assert!(matches!(result, Err(CatalogError::InvalidRegex { .. })));
    }
}
