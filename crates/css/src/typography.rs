//! Composite typography: utility-class emission and assembly of composite
//! values from sibling primitive tokens.

use crate::error::CssError;
use crate::naming::{kebab_case, variable_name};
use cascade_tokens::{
    DimensionValue, TextValue, Token, TokenCategory, TokenGroup, TokenValue, TypographyValue,
};
use cascade_types::{GroupId, Measurement, TokenId, Unit, format_measure};

/// Serializes a letter-spacing measurement with the percent→em correction.
///
/// The upstream token source encodes letter spacing in percent of font
/// size, which CSS interprets differently; percent values are reinterpreted
/// as em by dividing by 100. No font-size-relative conversion is attempted.
pub fn letter_spacing_css(measurement: &Measurement) -> String {
    if measurement.measure == 0.0 {
        return "0".to_string();
    }
    if measurement.unit != Unit::Percent {
        return format!("{:.3}{}", measurement.measure, measurement.unit.css_suffix());
    }
    format!("{:.4}em", measurement.measure / 100.0)
}

fn malformed(token: &Token, message: impl Into<String>) -> CssError {
    CssError::MalformedValue {
        token: token.name.clone(),
        category: token.category,
        message: message.into(),
    }
}

/// Produces the CSS class block for a typography token, named after the
/// token rather than declared as a custom property.
///
/// Field order is fixed: font-family, font-weight, font-size,
/// text-decoration, letter-spacing, line-height (only if present),
/// text-indent. Measurements render literally; sub-field references are
/// assumed resolved at token-authoring time for this category.
pub fn class_block(token: &Token, groups: &[TokenGroup]) -> Result<String, CssError> {
    let name = variable_name(token, groups)?;
    let TokenValue::Typography(value) = &token.value else {
        return Err(malformed(token, "value payload does not match declared category"));
    };

    let family = value
        .font_family
        .text
        .as_deref()
        .ok_or_else(|| malformed(token, "missing font-family text"))?;
    let weight = value
        .font_weight
        .text
        .as_deref()
        .ok_or_else(|| malformed(token, "missing font-weight text"))?;
    let size = value
        .font_size
        .measurement
        .ok_or_else(|| malformed(token, "missing font-size measurement"))?;
    let decoration = value
        .text_decoration
        .text
        .as_deref()
        .ok_or_else(|| malformed(token, "missing text-decoration text"))?;
    let letter_spacing = value
        .letter_spacing
        .measurement
        .ok_or_else(|| malformed(token, "missing letter-spacing measurement"))?;
    let indent = value
        .paragraph_indent
        .measurement
        .ok_or_else(|| malformed(token, "missing paragraph-indent measurement"))?;

    let mut lines = vec![
        format!(".{name} {{"),
        format!("  font-family: \"{family}\";"),
        format!("  font-weight: {weight};"),
        format!("  font-size: {};", size.to_css()),
        format!("  text-decoration: {decoration};"),
        format!("  letter-spacing: {};", letter_spacing_css(&letter_spacing)),
    ];
    if let Some(line_height) = value.line_height.as_ref().and_then(|v| v.measurement) {
        lines.push(format!("  line-height: {};", line_height.to_css()));
    }
    lines.push(format!("  text-indent: {};", indent.to_css()));
    lines.push("}\n".to_string());
    Ok(lines.join("\n"))
}

/// Assembles composite typography tokens from primitive sibling tokens.
///
/// Two strategies exist because the upstream source does not reliably tag
/// typography sub-tokens by category: [`ConventionAssembler`] locates them
/// by a fixed name convention within a curated list of style groups, and
/// [`CategoryTaggedAssembler`] trusts category tags. Assembly produces new
/// token values; persisting them back to a store is not the engine's job.
pub trait TypographyAssembler: Send + Sync {
    fn assemble(
        &self,
        tokens: &[Token],
        groups: &[TokenGroup],
    ) -> Result<Vec<Token>, CssError>;

    /// Returns a human-readable name for this assembler (for logging).
    fn name(&self) -> &'static str;
}

/// The curated typography style names recognized by the convention-based
/// assembler. The upstream source creates two different groups for the same
/// style, so membership cannot be derived from parent ids alone.
pub const TYPOGRAPHY_STYLE_NAMES: &[&str] = &[
    "Body-01",
    "Body-02",
    "Body-Compact-01",
    "Body-Compact-02",
    "Code-01",
    "Code-02",
    "Label-01",
    "Heading-01",
    "Heading-02",
    "Heading-03",
    "Heading-04",
    "Heading-05",
    "Heading-06",
    "Heading-07",
    "Heading-compat-01",
    "Heading-compact-02",
    "Helper-text-01",
    "Helper-text-02",
    "Legal-01",
    "Legal-02",
];

/// Sub-token names the convention assembler looks for within a style group.
const SUB_TOKEN_NAMES: [&str; 8] = [
    "font-family",
    "font-weight",
    "font-size",
    "text-decoration",
    "text-case",
    "letter-spacing",
    "line-height",
    "paragraph-spacing",
];

fn text_of(token: &Token) -> Option<String> {
    match &token.value {
        TokenValue::Text(v) => v.text.clone(),
        _ => None,
    }
}

fn measurement_of(token: &Token) -> Option<Measurement> {
    match &token.value {
        TokenValue::Dimension(v) => v.measurement,
        _ => None,
    }
}

/// Font-weight sub-tokens arrive as numbers; stringify the measure so it can
/// be matched back against the named font-weight tokens.
fn weight_text_of(token: &Token) -> Option<String> {
    match &token.value {
        TokenValue::Dimension(v) => v.measurement.map(|m| format_measure(m.measure)),
        TokenValue::Text(v) => v.text.clone(),
        _ => None,
    }
}

fn weight_reference(font_weights: &[&Token], weight: &str) -> Option<TokenId> {
    font_weights
        .iter()
        .find(|token| text_of(token).as_deref() == Some(weight))
        .map(|token| token.id.clone())
}

fn typography_parent<'a>(groups: &'a [TokenGroup]) -> Result<&'a TokenGroup, CssError> {
    groups.iter().find(|group| group.name == "Typography").ok_or_else(|| {
        CssError::GroupNotFound {
            group_id: GroupId::from("Typography"),
            token: "typography styles".to_string(),
        }
    })
}

fn existing_composite<'a>(tokens: &'a [Token], style_name: &str) -> Option<&'a Token> {
    tokens
        .iter()
        .find(|token| token.name == style_name && token.category == TokenCategory::Typography)
}

fn composite_token(
    existing: Option<&Token>,
    style_name: &str,
    parent: &TokenGroup,
    value: TypographyValue,
) -> Token {
    match existing {
        Some(token) => Token { value: TokenValue::Typography(value), ..token.clone() },
        None => Token::new(
            format!("typography-{}", kebab_case(style_name)),
            style_name,
            TokenCategory::Typography,
            parent.id.clone(),
            TokenValue::Typography(value),
        ),
    }
}

/// Locates sub-tokens by the fixed name convention within groups matched by
/// the curated style-name list. Brittle by construction; it exists because
/// the upstream source does not reliably tag these sub-tokens by category.
#[derive(Debug, Clone)]
pub struct ConventionAssembler {
    style_names: Vec<String>,
}

impl Default for ConventionAssembler {
    fn default() -> Self {
        Self {
            style_names: TYPOGRAPHY_STYLE_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl ConventionAssembler {
    pub fn new(style_names: Vec<String>) -> Self {
        Self { style_names }
    }
}

impl TypographyAssembler for ConventionAssembler {
    fn assemble(
        &self,
        tokens: &[Token],
        groups: &[TokenGroup],
    ) -> Result<Vec<Token>, CssError> {
        let parent = typography_parent(groups)?;
        let font_weights: Vec<&Token> =
            tokens.iter().filter(|token| token.category == TokenCategory::FontWeight).collect();

        let mut assembled = Vec::new();
        for style_name in &self.style_names {
            // The same style may be split across several groups; pool their
            // members before looking up sub-tokens.
            let member_ids: Vec<&TokenId> = groups
                .iter()
                .filter(|group| &group.name == style_name)
                .flat_map(|group| group.token_ids.iter())
                .collect();
            if member_ids.is_empty() {
                continue;
            }
            let members: Vec<&Token> =
                tokens.iter().filter(|token| member_ids.contains(&&token.id)).collect();
            let by_name =
                |name: &str| members.iter().find(|token| token.name == name).copied();

            let existing = existing_composite(tokens, style_name);
            let mut value = match existing.map(|token| &token.value) {
                Some(TokenValue::Typography(v)) => v.clone(),
                _ => TypographyValue::default(),
            };

            if let Some(token) = by_name(SUB_TOKEN_NAMES[0])
                && let Some(text) = text_of(token)
            {
                value.font_family = TextValue::literal(text);
            }
            if let Some(token) = by_name(SUB_TOKEN_NAMES[1])
                && let Some(weight) = weight_text_of(token)
            {
                let referenced_token_id = weight_reference(&font_weights, &weight);
                value.font_weight = TextValue { text: Some(weight), referenced_token_id };
            }
            if let Some(token) = by_name(SUB_TOKEN_NAMES[2])
                && let Some(measurement) = measurement_of(token)
            {
                value.font_size = DimensionValue::literal(measurement);
            }
            if let Some(token) = by_name(SUB_TOKEN_NAMES[3])
                && let Some(text) = text_of(token)
            {
                value.text_decoration = TextValue::literal(text);
            }
            if let Some(token) = by_name(SUB_TOKEN_NAMES[4])
                && let Some(text) = text_of(token)
            {
                value.text_case = Some(TextValue::literal(text));
            }
            if let Some(token) = by_name(SUB_TOKEN_NAMES[5])
                && let Some(measurement) = measurement_of(token)
            {
                value.letter_spacing = DimensionValue::literal(measurement);
            }
            if let Some(token) = by_name(SUB_TOKEN_NAMES[6])
                && let Some(measurement) = measurement_of(token)
            {
                value.line_height = Some(DimensionValue::literal(measurement));
            }
            if let Some(token) = by_name(SUB_TOKEN_NAMES[7])
                && let Some(measurement) = measurement_of(token)
            {
                value.paragraph_spacing = Some(DimensionValue::literal(measurement));
            }

            assembled.push(composite_token(existing, style_name, parent, value));
        }
        Ok(assembled)
    }

    fn name(&self) -> &'static str {
        "ConventionAssembler"
    }
}

/// Locates sub-tokens by their declared category within each style group.
/// This is the future-correct strategy for sources that tag typography
/// primitives properly.
#[derive(Debug, Clone, Default)]
pub struct CategoryTaggedAssembler;

impl CategoryTaggedAssembler {
    pub fn new() -> Self {
        Self
    }
}

impl TypographyAssembler for CategoryTaggedAssembler {
    fn assemble(
        &self,
        tokens: &[Token],
        groups: &[TokenGroup],
    ) -> Result<Vec<Token>, CssError> {
        let parent = typography_parent(groups)?;
        let font_weights: Vec<&Token> =
            tokens.iter().filter(|token| token.category == TokenCategory::FontWeight).collect();

        let mut assembled = Vec::new();
        for group in groups {
            if group.is_root || group.id == parent.id {
                continue;
            }
            let members: Vec<&Token> =
                tokens.iter().filter(|token| group.contains(&token.id)).collect();
            let by_category = |category: TokenCategory| {
                members.iter().find(|token| token.category == category).copied()
            };
            // A style group is recognized by carrying a tagged font size.
            if by_category(TokenCategory::FontSize).is_none() {
                continue;
            }

            let existing = existing_composite(tokens, &group.name);
            let mut value = match existing.map(|token| &token.value) {
                Some(TokenValue::Typography(v)) => v.clone(),
                _ => TypographyValue::default(),
            };

            if let Some(token) = by_category(TokenCategory::FontFamily)
                && let Some(text) = text_of(token)
            {
                value.font_family = TextValue::literal(text);
            }
            if let Some(token) = by_category(TokenCategory::FontWeight)
                && let Some(weight) = weight_text_of(token)
            {
                let referenced_token_id = weight_reference(&font_weights, &weight);
                value.font_weight = TextValue { text: Some(weight), referenced_token_id };
            }
            if let Some(token) = by_category(TokenCategory::FontSize)
                && let Some(measurement) = measurement_of(token)
            {
                value.font_size = DimensionValue::literal(measurement);
            }
            if let Some(token) = by_category(TokenCategory::TextDecoration)
                && let Some(text) = text_of(token)
            {
                value.text_decoration = TextValue::literal(text);
            }
            if let Some(token) = by_category(TokenCategory::TextCase)
                && let Some(text) = text_of(token)
            {
                value.text_case = Some(TextValue::literal(text));
            }
            if let Some(token) = by_category(TokenCategory::LetterSpacing)
                && let Some(measurement) = measurement_of(token)
            {
                value.letter_spacing = DimensionValue::literal(measurement);
            }
            if let Some(token) = by_category(TokenCategory::LineHeight)
                && let Some(measurement) = measurement_of(token)
            {
                value.line_height = Some(DimensionValue::literal(measurement));
            }
            if let Some(token) = by_category(TokenCategory::ParagraphSpacing)
                && let Some(measurement) = measurement_of(token)
            {
                value.paragraph_spacing = Some(DimensionValue::literal(measurement));
            }
            if let Some(token) = by_category(TokenCategory::ParagraphIndent)
                && let Some(measurement) = measurement_of(token)
            {
                value.paragraph_indent = DimensionValue::literal(measurement);
            }

            assembled.push(composite_token(existing, &group.name, parent, value));
        }
        Ok(assembled)
    }

    fn name(&self) -> &'static str {
        "CategoryTaggedAssembler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typography_value() -> TypographyValue {
        TypographyValue {
            font_family: TextValue::literal("IBM Plex Sans"),
            font_weight: TextValue::literal("400"),
            font_size: DimensionValue::literal(Measurement::new(14.0, Unit::Pixel)),
            text_decoration: TextValue::literal("none"),
            letter_spacing: DimensionValue::literal(Measurement::new(150.0, Unit::Percent)),
            paragraph_indent: DimensionValue::literal(Measurement::new(0.0, Unit::Pixel)),
            ..TypographyValue::default()
        }
    }

    #[test]
    fn test_letter_spacing_zero_is_literal_zero() {
        // Unit does not matter for an exact zero.
        assert_eq!(letter_spacing_css(&Measurement::new(0.0, Unit::Percent)), "0");
        assert_eq!(letter_spacing_css(&Measurement::new(0.0, Unit::Pixel)), "0");
    }

    #[test]
    fn test_letter_spacing_percent_becomes_em() {
        assert_eq!(letter_spacing_css(&Measurement::new(150.0, Unit::Percent)), "1.5000em");
        assert_eq!(letter_spacing_css(&Measurement::new(-4.0, Unit::Percent)), "-0.0400em");
    }

    #[test]
    fn test_letter_spacing_non_percent_keeps_unit() {
        assert_eq!(letter_spacing_css(&Measurement::new(2.0, Unit::Pixel)), "2.000px");
        assert_eq!(letter_spacing_css(&Measurement::new(0.16, Unit::Em)), "0.160em");
    }

    #[test]
    fn test_class_block_field_order() {
        let groups = vec![TokenGroup::root("g0", "Typography root"), TokenGroup::new("g1", "Typography")];
        let token = Token::new(
            "t1",
            "Body-01",
            TokenCategory::Typography,
            "g1",
            TokenValue::Typography(typography_value()),
        );

        let block = class_block(&token, &groups).unwrap();
        assert_eq!(
            block,
            ".typography-body-01 {\n  font-family: \"IBM Plex Sans\";\n  font-weight: 400;\n  font-size: 14px;\n  text-decoration: none;\n  letter-spacing: 1.5000em;\n  text-indent: 0px;\n}\n"
        );
    }

    #[test]
    fn test_class_block_emits_line_height_only_if_present() {
        let groups = vec![TokenGroup::new("g1", "Typography")];
        let mut value = typography_value();
        value.line_height = Some(DimensionValue::literal(Measurement::new(110.0, Unit::Percent)));
        let token = Token::new(
            "t1",
            "Body-01",
            TokenCategory::Typography,
            "g1",
            TokenValue::Typography(value),
        );

        let block = class_block(&token, &groups).unwrap();
        assert!(block.contains("  line-height: 110%;\n  text-indent: 0px;"));
    }

    #[test]
    fn test_class_block_missing_field_is_malformed() {
        let groups = vec![TokenGroup::new("g1", "Typography")];
        let mut value = typography_value();
        value.font_size = DimensionValue::default();
        let token = Token::new(
            "t1",
            "Body-01",
            TokenCategory::Typography,
            "g1",
            TokenValue::Typography(value),
        );

        assert!(matches!(
            class_block(&token, &groups).unwrap_err(),
            CssError::MalformedValue { .. }
        ));
    }

    fn style_fixture() -> (Vec<Token>, Vec<TokenGroup>) {
        let tokens = vec![
            Token::new(
                "p1",
                "font-family",
                TokenCategory::FontFamily,
                "g2",
                TokenValue::Text(TextValue::literal("IBM Plex Sans")),
            ),
            Token::new(
                "p2",
                "font-weight",
                TokenCategory::FontWeight,
                "g2",
                TokenValue::Dimension(DimensionValue::literal(Measurement::new(400.0, Unit::Raw))),
            ),
            Token::new(
                "p3",
                "font-size",
                TokenCategory::FontSize,
                "g2",
                TokenValue::Dimension(DimensionValue::literal(Measurement::new(14.0, Unit::Pixel))),
            ),
            Token::new(
                "p4",
                "text-decoration",
                TokenCategory::TextDecoration,
                "g2",
                TokenValue::Text(TextValue::literal("none")),
            ),
            Token::new(
                "p5",
                "letter-spacing",
                TokenCategory::LetterSpacing,
                "g2",
                TokenValue::Dimension(DimensionValue::literal(Measurement::new(
                    150.0,
                    Unit::Percent,
                ))),
            ),
            Token::new(
                "w1",
                "Regular",
                TokenCategory::FontWeight,
                "g3",
                TokenValue::Text(TextValue::literal("400")),
            ),
        ];
        let groups = vec![
            TokenGroup::new("g1", "Typography"),
            TokenGroup::new("g2", "Body-01").with_tokens([
                TokenId::from("p1"),
                TokenId::from("p2"),
                TokenId::from("p3"),
                TokenId::from("p4"),
                TokenId::from("p5"),
            ]),
            TokenGroup::new("g3", "Font weights").with_tokens([TokenId::from("w1")]),
        ];
        (tokens, groups)
    }

    #[test]
    fn test_convention_assembler_builds_composite() {
        let (tokens, groups) = style_fixture();
        let assembled = ConventionAssembler::default().assemble(&tokens, &groups).unwrap();

        assert_eq!(assembled.len(), 1);
        let token = &assembled[0];
        assert_eq!(token.name, "Body-01");
        assert_eq!(token.category, TokenCategory::Typography);
        assert_eq!(token.parent_group_id, GroupId::from("g1"));
        match &token.value {
            TokenValue::Typography(value) => {
                assert_eq!(value.font_family.text.as_deref(), Some("IBM Plex Sans"));
                // The numeric weight is stringified and matched back to the
                // named font-weight token by value.
                assert_eq!(value.font_weight.text.as_deref(), Some("400"));
                assert_eq!(
                    value.font_weight.referenced_token_id,
                    Some(TokenId::from("w1"))
                );
                assert_eq!(
                    value.letter_spacing.measurement,
                    Some(Measurement::new(150.0, Unit::Percent))
                );
            }
            other => panic!("expected typography value, got {other:?}"),
        }
    }

    #[test]
    fn test_convention_assembler_skips_absent_styles() {
        let (tokens, groups) = style_fixture();
        let assembler =
            ConventionAssembler::new(vec!["Body-01".to_string(), "Heading-07".to_string()]);
        let assembled = assembler.assemble(&tokens, &groups).unwrap();
        assert_eq!(assembled.len(), 1);
    }

    #[test]
    fn test_convention_assembler_requires_typography_group() {
        let (tokens, mut groups) = style_fixture();
        groups.remove(0);
        assert!(matches!(
            ConventionAssembler::default().assemble(&tokens, &groups).unwrap_err(),
            CssError::GroupNotFound { .. }
        ));
    }

    #[test]
    fn test_category_tagged_assembler_builds_composite() {
        let (tokens, groups) = style_fixture();
        let assembled = CategoryTaggedAssembler::new().assemble(&tokens, &groups).unwrap();

        assert_eq!(assembled.len(), 1);
        match &assembled[0].value {
            TokenValue::Typography(value) => {
                assert_eq!(value.font_size.measurement, Some(Measurement::new(14.0, Unit::Pixel)));
                assert_eq!(value.font_weight.referenced_token_id, Some(TokenId::from("w1")));
            }
            other => panic!("expected typography value, got {other:?}"),
        }
    }

    #[test]
    fn test_assembler_updates_existing_composite_in_place() {
        let (mut tokens, groups) = style_fixture();
        tokens.push(Token::new(
            "t1",
            "Body-01",
            TokenCategory::Typography,
            "g1",
            TokenValue::Typography(TypographyValue {
                paragraph_indent: DimensionValue::literal(Measurement::new(0.0, Unit::Pixel)),
                ..TypographyValue::default()
            }),
        ));

        let assembled = ConventionAssembler::default().assemble(&tokens, &groups).unwrap();
        assert_eq!(assembled.len(), 1);
        // Identity of the existing token is preserved; located fields are
        // merged over it and untouched fields survive.
        assert_eq!(assembled[0].id, TokenId::from("t1"));
        match &assembled[0].value {
            TokenValue::Typography(value) => {
                assert_eq!(value.font_family.text.as_deref(), Some("IBM Plex Sans"));
                assert_eq!(
                    value.paragraph_indent.measurement,
                    Some(Measurement::new(0.0, Unit::Pixel))
                );
            }
            other => panic!("expected typography value, got {other:?}"),
        }
    }
}
