//! Derives canonical, collision-resistant variable names from a token's
//! group ancestry.

use crate::error::CssError;
use cascade_tokens::{Token, TokenGroup, find_group};
use cascade_types::{GroupId, TokenId};
use std::collections::{HashMap, HashSet};

/// Converts a design name to a CSS-identifier-safe lower-kebab-case segment.
/// CamelCase humps become separators; runs of non-alphanumerics collapse to
/// a single dash.
pub fn kebab_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    let mut prev_lower_or_digit = false;
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if ch.is_ascii_uppercase() {
                if prev_lower_or_digit {
                    out.push('-');
                }
                out.push(ch.to_ascii_lowercase());
                prev_lower_or_digit = false;
            } else {
                out.push(ch);
                prev_lower_or_digit = true;
            }
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
            prev_lower_or_digit = false;
        }
    }
    out.trim_end_matches('-').to_string()
}

/// Derives the variable name for a token from its group ancestry and its own
/// name: ancestor names root→leaf (root groups excluded), then the token
/// name, each kebab-cased and joined with `-`.
///
/// The result is a pure function of the token name, the ancestor path, and
/// the case convention, so the same token names the same variable in the
/// default sheet and in every theme sheet.
pub fn variable_name(token: &Token, groups: &[TokenGroup]) -> Result<String, CssError> {
    let mut segments: Vec<&str> = Vec::new();
    let mut next = Some(&token.parent_group_id);
    let mut seen: HashSet<&GroupId> = HashSet::new();
    while let Some(group_id) = next {
        // Group chains are trees; a repeated id means malformed input that
        // would otherwise loop forever.
        if !seen.insert(group_id) {
            break;
        }
        let group = find_group(groups, group_id).ok_or_else(|| CssError::GroupNotFound {
            group_id: group_id.clone(),
            token: token.name.clone(),
        })?;
        if !group.is_root {
            segments.push(group.name.as_str());
        }
        next = group.parent_group_id.as_ref();
    }
    segments.reverse();

    let mut parts: Vec<String> =
        segments.into_iter().map(kebab_case).filter(|part| !part.is_empty()).collect();
    let own = kebab_case(&token.name);
    if !own.is_empty() {
        parts.push(own);
    }
    Ok(parts.join("-"))
}

/// Resolved variable names for one sheet. Building the table surfaces name
/// collisions instead of letting a later declaration silently overwrite an
/// earlier one.
#[derive(Debug, Default)]
pub struct NameTable {
    names: HashMap<TokenId, String>,
}

impl NameTable {
    pub fn build<'a, I>(tokens: I, groups: &[TokenGroup]) -> Result<Self, CssError>
    where
        I: IntoIterator<Item = &'a Token>,
    {
        let mut names: HashMap<TokenId, String> = HashMap::new();
        let mut owners: HashMap<String, TokenId> = HashMap::new();
        for token in tokens {
            let name = variable_name(token, groups)?;
            if let Some(first) = owners.get(&name) {
                log::warn!(
                    "Variable name '{}' is derived from both token '{}' and token '{}'.",
                    name,
                    first,
                    token.id
                );
                return Err(CssError::NameCollision {
                    name,
                    first: first.clone(),
                    second: token.id.clone(),
                });
            }
            owners.insert(name.clone(), token.id.clone());
            names.insert(token.id.clone(), name);
        }
        Ok(Self { names })
    }

    pub fn name_of(&self, id: &TokenId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_tokens::{ColorValue, TokenCategory, TokenValue};
    use cascade_types::Color;

    fn color_token(id: &str, name: &str, group: &str) -> Token {
        Token::new(
            id,
            name,
            TokenCategory::Color,
            group,
            TokenValue::Color(ColorValue::literal(Color::rgb(0, 0, 0))),
        )
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("Brand Bg"), "brand-bg");
        assert_eq!(kebab_case("BrandBg"), "brand-bg");
        assert_eq!(kebab_case("Body-01"), "body-01");
        assert_eq!(kebab_case("spacing_04"), "spacing-04");
        assert_eq!(kebab_case("  Heading  03  "), "heading-03");
    }

    #[test]
    fn test_variable_name_walks_ancestry() {
        let groups = vec![
            TokenGroup::root("g0", "Colors"),
            TokenGroup::new("g1", "Brand").with_parent("g0"),
            TokenGroup::new("g2", "Primary").with_parent("g1"),
        ];
        let token = color_token("c1", "Bg", "g2");
        assert_eq!(variable_name(&token, &groups).unwrap(), "brand-primary-bg");
    }

    #[test]
    fn test_variable_name_skips_root_group() {
        let groups = vec![
            TokenGroup::root("g0", "Colors"),
            TokenGroup::new("g1", "Brand").with_parent("g0"),
        ];
        let token = color_token("c1", "Bg", "g1");
        assert_eq!(variable_name(&token, &groups).unwrap(), "brand-bg");
    }

    #[test]
    fn test_variable_name_is_deterministic() {
        let groups = vec![TokenGroup::new("g1", "Brand")];
        let token = color_token("c1", "Bg", "g1");
        let first = variable_name(&token, &groups).unwrap();
        let second = variable_name(&token, &groups).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_variable_name_missing_group() {
        let token = color_token("c1", "Bg", "missing");
        let err = variable_name(&token, &[]).unwrap_err();
        assert!(matches!(err, CssError::GroupNotFound { .. }));
    }

    #[test]
    fn test_variable_name_survives_group_cycle() {
        let groups = vec![
            TokenGroup::new("g1", "A").with_parent("g2"),
            TokenGroup::new("g2", "B").with_parent("g1"),
        ];
        let token = color_token("c1", "Bg", "g1");
        // Malformed ancestry must not hang or panic.
        assert!(variable_name(&token, &groups).is_ok());
    }

    #[test]
    fn test_name_table_detects_collision() {
        let groups = vec![TokenGroup::new("g1", "Brand")];
        let a = color_token("c1", "Bg Alt", "g1");
        let b = color_token("c2", "bg-alt", "g1");
        let err = NameTable::build([&a, &b], &groups).unwrap_err();
        match err {
            CssError::NameCollision { name, first, second } => {
                assert_eq!(name, "brand-bg-alt");
                assert_eq!(first.as_str(), "c1");
                assert_eq!(second.as_str(), "c2");
            }
            other => panic!("expected name collision, got {other:?}"),
        }
    }

    #[test]
    fn test_name_table_lookup() {
        let groups = vec![TokenGroup::new("g1", "Brand")];
        let a = color_token("c1", "Bg", "g1");
        let table = NameTable::build([&a], &groups).unwrap();
        assert_eq!(table.name_of(&cascade_types::TokenId::from("c1")), Some("brand-bg"));
        assert_eq!(table.len(), 1);
    }
}
