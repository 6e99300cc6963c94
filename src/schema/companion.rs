use serde::{Deserialize, Serialize};
use std::path::Path;

use super::SpecError;

/// Input record for companion rendering. List fields default to empty,
/// which selects the region placeholders at render time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanionSpec {
    pub title: String,
    #[serde(default)]
    pub bulk_lists: Vec<String>,
    #[serde(default)]
    pub formulas: Vec<String>,
    #[serde(default)]
    pub relations: Vec<String>,
    #[serde(default)]
    pub stanzas: Vec<String>,
    #[serde(default)]
    pub provenance: Option<String>,
}

impl CompanionSpec {
    /// Spec carrying only a title; every region renders its placeholder.
    pub fn titled(title: &str) -> CompanionSpec {
        CompanionSpec {
            title: title.to_string(),
            ..CompanionSpec::default()
        }
    }

    /// Load a companion spec from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<CompanionSpec, SpecError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a companion spec from a RON string.
    pub fn parse_ron(input: &str) -> Result<CompanionSpec, SpecError> {
        Ok(ron::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_title_only_record() {
        let spec = CompanionSpec::parse_ron(r#"(title: "Day 3 Recap")"#).unwrap();
        assert_eq!(spec.title, "Day 3 Recap");
        assert!(spec.bulk_lists.is_empty());
        assert!(spec.stanzas.is_empty());
        assert!(spec.provenance.is_none());
    }

    #[test]
    fn parse_full_record() {
        let spec = CompanionSpec::parse_ron(
            r#"(
                title: "Day 3 Recap",
                bulk_lists: ["item"],
                formulas: ["x = y"],
                relations: ["\"a\" → \"b\""],
                stanzas: ["From storm's eye we hyperlink back"],
                provenance: Some("hash123"),
            )"#,
        )
        .unwrap();
        assert_eq!(spec.bulk_lists, ["item"]);
        assert_eq!(spec.provenance.as_deref(), Some("hash123"));
    }

    #[test]
    fn titled_spec_is_otherwise_empty() {
        let spec = CompanionSpec::titled("t");
        assert_eq!(spec.title, "t");
        assert!(spec.formulas.is_empty());
        assert!(spec.relations.is_empty());
    }
}
