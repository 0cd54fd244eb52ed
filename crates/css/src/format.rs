//! Per-category value formatters and declaration-line assembly.

use crate::error::CssError;
use crate::naming::variable_name;
use crate::reference::{ReferenceRenderer, TokenIndex};
use cascade_tokens::{ColorValue, DimensionValue, TextValue, Token, TokenCategory, TokenGroup, TokenValue};

fn malformed(token: &Token, message: impl Into<String>) -> CssError {
    CssError::MalformedValue {
        token: token.name.clone(),
        category: token.category,
        message: message.into(),
    }
}

/// Renders a token's own literal value, ignoring any reference it carries.
/// Used by renderers that inline referenced values.
pub fn literal_value(token: &Token) -> Result<String, CssError> {
    match &token.value {
        TokenValue::Color(v) => v
            .color
            .as_ref()
            .map(|color| color.to_hex_string())
            .ok_or_else(|| malformed(token, "missing literal color")),
        TokenValue::Dimension(v) => v
            .measurement
            .as_ref()
            .map(|measurement| measurement.to_css())
            .ok_or_else(|| malformed(token, "missing literal measurement")),
        TokenValue::Text(v) => {
            v.text.clone().ok_or_else(|| malformed(token, "missing literal text"))
        }
        TokenValue::Typography(_) => {
            Err(malformed(token, "composite typography has no scalar literal"))
        }
    }
}

/// Formats a color payload: normalized hex when literal, the renderer's
/// output when referenced.
pub fn color_value(
    token: &Token,
    value: &ColorValue,
    index: &TokenIndex<'_>,
    renderer: &dyn ReferenceRenderer,
) -> Result<String, CssError> {
    match &value.referenced_token_id {
        Some(id) => {
            let target = index.get(id).ok_or_else(|| CssError::UnresolvedReference {
                token: token.name.clone(),
                reference: id.clone(),
            })?;
            renderer.render(target)
        }
        None => value
            .color
            .as_ref()
            .map(|color| color.to_hex_string())
            .ok_or_else(|| malformed(token, "missing literal color")),
    }
}

/// Formats a dimension-like payload: `<measure><suffix>` when literal, the
/// renderer's output when referenced.
pub fn dimension_value(
    token: &Token,
    value: &DimensionValue,
    index: &TokenIndex<'_>,
    renderer: &dyn ReferenceRenderer,
) -> Result<String, CssError> {
    match &value.referenced_token_id {
        Some(id) => {
            let target = index.get(id).ok_or_else(|| CssError::UnresolvedReference {
                token: token.name.clone(),
                reference: id.clone(),
            })?;
            renderer.render(target)
        }
        None => value
            .measurement
            .as_ref()
            .map(|measurement| measurement.to_css())
            .ok_or_else(|| malformed(token, "missing literal measurement")),
    }
}

/// Formats a font-weight payload: the raw text verbatim. Font-weight tokens
/// are terminal text at this layer; no indirection is applied.
pub fn font_weight_value(token: &Token, value: &TextValue) -> Result<String, CssError> {
    value.text.clone().ok_or_else(|| malformed(token, "missing literal text"))
}

/// Produces one custom-property declaration line for a scalar token:
/// two leading spaces, `--<name>: <value>;`.
///
/// The declared category decides which formatter applies; a payload that
/// does not match it is a malformed-input error, never silently tolerated.
pub fn declaration(
    token: &Token,
    groups: &[TokenGroup],
    index: &TokenIndex<'_>,
    renderer: &dyn ReferenceRenderer,
) -> Result<String, CssError> {
    let name = variable_name(token, groups)?;
    let value = match (token.category, &token.value) {
        (TokenCategory::Color, TokenValue::Color(v)) => color_value(token, v, index, renderer)?,
        (category, TokenValue::Dimension(v)) if category.is_dimension_like() => {
            dimension_value(token, v, index, renderer)?
        }
        (TokenCategory::FontWeight, TokenValue::Text(v)) => font_weight_value(token, v)?,
        _ => return Err(malformed(token, "value payload does not match declared category")),
    };
    Ok(format!("  --{name}: {value};"))
}
