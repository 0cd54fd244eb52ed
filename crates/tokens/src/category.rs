use serde::{Deserialize, Serialize};

/// Category tag of a token. The declared category is the authority for which
/// formatter applies to a token and which output file it lands in.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TokenCategory {
    Color,
    Size,
    Spacing,
    Radius,
    BorderWidth,
    FontSize,
    LetterSpacing,
    FontWeight,
    Typography,
    // Typography primitives. These never map to an output file of their own;
    // they tag sub-tokens so composite typography values can be assembled
    // from correctly-categorized sources.
    FontFamily,
    TextDecoration,
    TextCase,
    LineHeight,
    ParagraphSpacing,
    ParagraphIndent,
}

impl TokenCategory {
    /// Categories whose values are unit-qualified scalars rendered as
    /// `<measure><suffix>`.
    pub fn is_dimension_like(&self) -> bool {
        matches!(
            self,
            TokenCategory::Size
                | TokenCategory::Spacing
                | TokenCategory::Radius
                | TokenCategory::BorderWidth
                | TokenCategory::FontSize
                | TokenCategory::LetterSpacing
        )
    }

    /// Categories that can appear as sub-tokens of a composite typography
    /// style.
    pub fn is_typography_primitive(&self) -> bool {
        matches!(
            self,
            TokenCategory::FontFamily
                | TokenCategory::FontWeight
                | TokenCategory::FontSize
                | TokenCategory::TextDecoration
                | TokenCategory::TextCase
                | TokenCategory::LetterSpacing
                | TokenCategory::LineHeight
                | TokenCategory::ParagraphSpacing
                | TokenCategory::ParagraphIndent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_like_partition() {
        assert!(TokenCategory::Size.is_dimension_like());
        assert!(TokenCategory::Spacing.is_dimension_like());
        assert!(TokenCategory::Radius.is_dimension_like());
        assert!(TokenCategory::BorderWidth.is_dimension_like());
        assert!(TokenCategory::FontSize.is_dimension_like());
        assert!(TokenCategory::LetterSpacing.is_dimension_like());

        assert!(!TokenCategory::Color.is_dimension_like());
        assert!(!TokenCategory::FontWeight.is_dimension_like());
        assert!(!TokenCategory::Typography.is_dimension_like());
    }

    #[test]
    fn test_serde_names() {
        let c: TokenCategory = serde_json::from_str("\"borderWidth\"").unwrap();
        assert_eq!(c, TokenCategory::BorderWidth);
        assert_eq!(serde_json::to_string(&TokenCategory::FontSize).unwrap(), "\"fontSize\"");
    }
}
