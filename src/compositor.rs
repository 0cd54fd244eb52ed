//! Theme composition: computing the effective token set for a theme and
//! selecting which themes get a generated sheet.

use cascade_tokens::{Theme, Token};

/// Computes the token set as it would appear under `theme`: same ids,
/// categories, and group memberships, with overridden values substituted
/// in. The base collection is never mutated.
pub fn effective_tokens(base: &[Token], theme: &Theme) -> Vec<Token> {
    theme.apply_to(base)
}

/// Selects the themes that receive a generated sheet, in input order.
pub fn dark_variants<'a>(themes: &'a [Theme], marker: &str) -> Vec<&'a Theme> {
    themes.iter().filter(|theme| theme.is_dark_variant(marker)).collect()
}
