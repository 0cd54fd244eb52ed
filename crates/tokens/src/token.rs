//! The token entity and its typed value payloads.

use crate::category::TokenCategory;
use cascade_types::{Color, GroupId, Measurement, TokenId};
use serde::{Deserialize, Deserializer, Serialize, de};

/// Color payload. When `referenced_token_id` is set the literal color is
/// ignored and the value resolves through the referenced token.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ColorValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referenced_token_id: Option<TokenId>,
}

impl ColorValue {
    pub fn literal(color: Color) -> Self {
        Self { color: Some(color), referenced_token_id: None }
    }

    pub fn reference(id: impl Into<TokenId>) -> Self {
        Self { color: None, referenced_token_id: Some(id.into()) }
    }
}

/// Unit-qualified scalar payload for dimension-like tokens.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DimensionValue {
    #[serde(flatten)]
    pub measurement: Option<Measurement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referenced_token_id: Option<TokenId>,
}

impl DimensionValue {
    pub fn literal(measurement: Measurement) -> Self {
        Self { measurement: Some(measurement), referenced_token_id: None }
    }

    pub fn reference(id: impl Into<TokenId>) -> Self {
        Self { measurement: None, referenced_token_id: Some(id.into()) }
    }
}

/// Plain text payload (font weight names, decoration keywords, families).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referenced_token_id: Option<TokenId>,
}

impl TextValue {
    pub fn literal(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), referenced_token_id: None }
    }
}

/// Composite typography payload aggregating the primitive sub-values.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyValue {
    pub font_family: TextValue,
    pub font_weight: TextValue,
    pub font_size: DimensionValue,
    pub text_decoration: TextValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_case: Option<TextValue>,
    pub letter_spacing: DimensionValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<DimensionValue>,
    pub paragraph_indent: DimensionValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph_spacing: Option<DimensionValue>,
}

/// Typed value payload of a token. Serialization is untagged (the payload
/// shape on the wire is determined by the owning token's category, never by
/// an enum tag), which is why tokens carry a custom `Deserialize` impl.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum TokenValue {
    Color(ColorValue),
    Dimension(DimensionValue),
    Text(TextValue),
    Typography(TypographyValue),
}

impl TokenValue {
    /// The reference carried by a scalar payload, if any. Composite
    /// typography values hold references per sub-field instead.
    pub fn referenced_token_id(&self) -> Option<&TokenId> {
        match self {
            TokenValue::Color(v) => v.referenced_token_id.as_ref(),
            TokenValue::Dimension(v) => v.referenced_token_id.as_ref(),
            TokenValue::Text(v) => v.referenced_token_id.as_ref(),
            TokenValue::Typography(_) => None,
        }
    }

    /// Deserializes a raw payload into the shape the category dictates.
    pub fn from_category(
        category: TokenCategory,
        value: serde_json::Value,
    ) -> Result<Self, String> {
        let mismatch = |e: serde_json::Error| format!("invalid {category:?} payload: {e}");
        match category {
            TokenCategory::Color => {
                serde_json::from_value::<ColorValue>(value).map(TokenValue::Color).map_err(mismatch)
            }
            TokenCategory::Typography => serde_json::from_value::<TypographyValue>(value)
                .map(TokenValue::Typography)
                .map_err(mismatch),
            TokenCategory::FontWeight
            | TokenCategory::FontFamily
            | TokenCategory::TextDecoration
            | TokenCategory::TextCase => {
                serde_json::from_value::<TextValue>(value).map(TokenValue::Text).map_err(mismatch)
            }
            _ => serde_json::from_value::<DimensionValue>(value)
                .map(TokenValue::Dimension)
                .map_err(mismatch),
        }
    }
}

/// A named, typed design value owned by exactly one group.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: TokenId,
    pub name: String,
    pub category: TokenCategory,
    pub parent_group_id: GroupId,
    pub value: TokenValue,
}

impl Token {
    pub fn new(
        id: impl Into<TokenId>,
        name: impl Into<String>,
        category: TokenCategory,
        parent_group_id: impl Into<GroupId>,
        value: TokenValue,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            parent_group_id: parent_group_id.into(),
            value,
        }
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RawToken {
            id: TokenId,
            name: String,
            category: TokenCategory,
            parent_group_id: GroupId,
            value: serde_json::Value,
        }

        let raw = RawToken::deserialize(deserializer)?;
        let value =
            TokenValue::from_category(raw.category, raw.value).map_err(de::Error::custom)?;
        Ok(Token {
            id: raw.id,
            name: raw.name,
            category: raw.category,
            parent_group_id: raw.parent_group_id,
            value,
        })
    }
}
