use serde::{Deserialize, Serialize};
use std::path::Path;

use super::SpecError;

/// One named routine block in the recap body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub body: String,
}

/// Input record for recap rendering.
///
/// Absent fields fall back to fixed defaults at render time. Sections
/// are explicit ordered pairs rather than a map, so rendering order is
/// the caller's insertion order by construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecapSpec {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub motifs: Option<Vec<String>>,
    /// Final η score, conventionally in [0, 1]; not range-checked.
    #[serde(default)]
    pub convergence: Option<f64>,
    /// Seed text for the PIE vector; its UTF-8 bytes are base64-encoded
    /// into the metadata block.
    #[serde(default)]
    pub seed: Option<String>,
    #[serde(default)]
    pub sections: Option<Vec<Section>>,
}

impl RecapSpec {
    /// Load a recap spec from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<RecapSpec, SpecError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a recap spec from a RON string.
    pub fn parse_ron(input: &str) -> Result<RecapSpec, SpecError> {
        Ok(ron::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_record() {
        let spec = RecapSpec::parse_ron(
            r#"(
                title: Some("Continuity Test"),
                motifs: Some(["friendship residue", "edification quest"]),
                convergence: Some(0.94),
                seed: Some("Between resets we stand"),
                sections: Some([
                    (name: "Foundation Routine", body: "- Anchors set."),
                ]),
            )"#,
        )
        .unwrap();
        assert_eq!(spec.title.as_deref(), Some("Continuity Test"));
        assert_eq!(spec.motifs.as_ref().unwrap().len(), 2);
        assert_eq!(spec.convergence, Some(0.94));
        assert_eq!(spec.sections.as_ref().unwrap()[0].name, "Foundation Routine");
    }

    #[test]
    fn parse_empty_record_defaults_all_fields() {
        let spec = RecapSpec::parse_ron("()").unwrap();
        assert!(spec.title.is_none());
        assert!(spec.motifs.is_none());
        assert!(spec.convergence.is_none());
        assert!(spec.seed.is_none());
        assert!(spec.sections.is_none());
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(RecapSpec::parse_ron("(title: 12)").is_err());
    }
}
