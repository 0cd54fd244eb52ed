//! Assembles formatted declarations into CSS sheet text.

use crate::error::CssError;
use crate::format::declaration;
use crate::naming::NameTable;
use crate::reference::{TokenIndex, VariableRenderer};
use crate::typography::class_block;
use cascade_tokens::{Token, TokenCategory, TokenGroup};
use itertools::Itertools;

/// Provenance comment prepended to generated files when enabled.
pub const DISCLAIMER: &str = "/* This file was generated by cascade, don't change by hand */";

/// Wraps declaration lines in a `:root { … }` block.
pub fn root_sheet(lines: &[String], with_disclaimer: bool) -> String {
    let block = format!(":root {{\n{}\n}}", lines.join("\n"));
    if with_disclaimer { format!("{DISCLAIMER}\n{block}") } else { block }
}

/// Concatenates class blocks into a sheet.
pub fn class_sheet(blocks: &[String], with_disclaimer: bool) -> String {
    let body = blocks.join("\n");
    if with_disclaimer { format!("{DISCLAIMER}\n{body}") } else { body }
}

/// Generates the `:root` custom-property sheet for one scalar category from
/// a token snapshot. Tokens of other categories participate only as
/// reference targets.
pub fn category_sheet(
    tokens: &[Token],
    groups: &[TokenGroup],
    category: TokenCategory,
    with_disclaimer: bool,
) -> Result<String, CssError> {
    let selected: Vec<&Token> =
        tokens.iter().filter(|token| token.category == category).collect();
    // Surfaces colliding names before any line is emitted.
    NameTable::build(selected.iter().copied(), groups)?;

    let index = TokenIndex::new(tokens);
    let renderer = VariableRenderer::new(groups);
    let lines: Vec<String> = selected
        .iter()
        .map(|token| declaration(token, groups, &index, &renderer))
        .try_collect()?;
    Ok(root_sheet(&lines, with_disclaimer))
}

/// Generates the utility-class sheet for typography tokens.
pub fn typography_class_sheet(
    tokens: &[Token],
    groups: &[TokenGroup],
    with_disclaimer: bool,
) -> Result<String, CssError> {
    let selected: Vec<&Token> =
        tokens.iter().filter(|token| token.category == TokenCategory::Typography).collect();
    NameTable::build(selected.iter().copied(), groups)?;

    let blocks: Vec<String> =
        selected.iter().map(|token| class_block(token, groups)).try_collect()?;
    Ok(class_sheet(&blocks, with_disclaimer))
}
