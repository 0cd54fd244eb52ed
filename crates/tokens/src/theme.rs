//! Themes: named override sets producing alternate effective token values.

use crate::token::{Token, TokenValue};
use cascade_types::{ThemeId, TokenId};
use serde::Serialize;
use std::collections::HashMap;

/// Explicit theme role tag. Repositories that cannot supply one yet fall
/// back to the code-name substring match in [`Theme::is_dark_variant`].
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ThemeRole {
    Light,
    Dark,
}

/// A named set of per-token value overrides. Applying a theme to a base
/// token collection yields a new collection of the same shape with the
/// overridden values substituted in; the base is never mutated.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: ThemeId,
    pub name: String,
    pub code_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ThemeRole>,
    pub overrides: HashMap<TokenId, TokenValue>,
}

impl Theme {
    pub fn new(
        id: impl Into<ThemeId>,
        name: impl Into<String>,
        code_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code_name: code_name.into(),
            role: None,
            overrides: HashMap::new(),
        }
    }

    pub fn with_role(mut self, role: ThemeRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_override(mut self, token_id: impl Into<TokenId>, value: TokenValue) -> Self {
        self.overrides.insert(token_id.into(), value);
        self
    }

    /// Whether this theme is selected for dark-variant sheet generation.
    /// The explicit role tag wins; untagged themes keep the legacy
    /// code-name substring behavior (`marker` is typically `"dark"`).
    pub fn is_dark_variant(&self, marker: &str) -> bool {
        match self.role {
            Some(ThemeRole::Dark) => true,
            Some(_) => false,
            None => self.code_name.contains(marker),
        }
    }

    /// Computes the effective token set under this theme. Identity (id,
    /// category, group) is preserved; only overridden values change.
    pub fn apply_to(&self, tokens: &[Token]) -> Vec<Token> {
        tokens
            .iter()
            .map(|token| {
                let mut effective = token.clone();
                if let Some(value) = self.overrides.get(&token.id) {
                    effective.value = value.clone();
                }
                effective
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::TokenCategory;
    use crate::token::ColorValue;
    use cascade_types::Color;

    fn color_token(id: &str, hex: Color) -> Token {
        Token::new(id, id, TokenCategory::Color, "g1", TokenValue::Color(ColorValue::literal(hex)))
    }

    #[test]
    fn test_dark_variant_role_tag_wins() {
        let tagged_dark = Theme::new("t1", "Midnight", "midnight").with_role(ThemeRole::Dark);
        let tagged_light = Theme::new("t2", "Dark Paper", "dark-paper").with_role(ThemeRole::Light);

        assert!(tagged_dark.is_dark_variant("dark"));
        assert!(!tagged_light.is_dark_variant("dark"));
    }

    #[test]
    fn test_dark_variant_code_name_fallback() {
        let untagged = Theme::new("t1", "Dark", "dark-contrast");
        assert!(untagged.is_dark_variant("dark"));
        assert!(!Theme::new("t2", "Sepia", "sepia").is_dark_variant("dark"));
    }

    #[test]
    fn test_apply_to_is_pure_and_preserves_identity() {
        let base = vec![
            color_token("c1", Color::rgb(0, 0, 0)),
            color_token("c2", Color::rgb(255, 255, 255)),
        ];
        let theme = Theme::new("t1", "Dark", "dark").with_override(
            "c1",
            TokenValue::Color(ColorValue::literal(Color::rgb(10, 10, 10))),
        );

        let effective = theme.apply_to(&base);

        assert_eq!(effective.len(), 2);
        assert_eq!(effective[0].id, base[0].id);
        assert_eq!(effective[0].category, base[0].category);
        assert_eq!(effective[0].parent_group_id, base[0].parent_group_id);
        assert_ne!(effective[0].value, base[0].value);
        // Untouched token and the base itself are unchanged.
        assert_eq!(effective[1], base[1]);
        match &base[0].value {
            TokenValue::Color(v) => {
                assert_eq!(v.color.as_ref().unwrap().to_hex_string(), "#000000")
            }
            other => panic!("expected color value, got {other:?}"),
        }
    }
}
