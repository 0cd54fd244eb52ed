//! Export configuration resolved before a generation pass.

use crate::error::PipelineError;
use cascade_css::{CategoryTaggedAssembler, ConventionAssembler, TypographyAssembler};
use serde::Deserialize;

/// Which typography assembly strategy to use when composite values are
/// synthesized from sibling primitives.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[derive(Default)]
pub enum AssemblerKind {
    #[default]
    Convention,
    CategoryTagged,
}

impl AssemblerKind {
    pub fn build(&self) -> Box<dyn TypographyAssembler> {
        match self {
            AssemblerKind::Convention => Box::new(ConventionAssembler::default()),
            AssemblerKind::CategoryTagged => Box::new(CategoryTaggedAssembler::new()),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportConfig {
    /// Prepend the generated-file disclaimer comment to every sheet.
    pub disclaimer: bool,
    /// Synthesize composite typography tokens from sibling primitives
    /// before generating the typography sheet.
    pub assemble_typography: bool,
    pub assembler: AssemblerKind,
    /// Substring marking a dark variant on theme code names, for
    /// repositories that do not tag theme roles yet.
    pub dark_marker: String,
    /// File stem of the default (un-themed) sheet.
    pub default_theme_file_stem: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            disclaimer: true,
            assemble_typography: false,
            assembler: AssemblerKind::Convention,
            dark_marker: "dark".to_string(),
            default_theme_file_stem: "light".to_string(),
        }
    }
}

impl ExportConfig {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert!(config.disclaimer);
        assert!(!config.assemble_typography);
        assert_eq!(config.assembler, AssemblerKind::Convention);
        assert_eq!(config.dark_marker, "dark");
        assert_eq!(config.default_theme_file_stem, "light");
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = ExportConfig::from_json(
            r#"{ "disclaimer": false, "assembler": "categoryTagged" }"#,
        )
        .unwrap();
        assert!(!config.disclaimer);
        assert_eq!(config.assembler, AssemblerKind::CategoryTagged);
        // Untouched keys keep their defaults.
        assert_eq!(config.dark_marker, "dark");
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(ExportConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_assembler_kind_builds_matching_strategy() {
        assert_eq!(AssemblerKind::Convention.build().name(), "ConventionAssembler");
        assert_eq!(AssemblerKind::CategoryTagged.build().name(), "CategoryTaggedAssembler");
    }
}
