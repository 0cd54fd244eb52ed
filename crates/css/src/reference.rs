//! Reference rendering strategies.
//!
//! A token value that points at another token can be emitted either as a
//! `var()` indirection or as the referenced token's literal value. The
//! caller picks the policy by passing a renderer; the formatters stay
//! agnostic.

use crate::error::CssError;
use crate::format::literal_value;
use crate::naming::variable_name;
use cascade_tokens::{Token, TokenGroup};
use cascade_types::TokenId;
use std::collections::HashMap;

/// Reference chains are expected to be acyclic; this bounds traversal so
/// malformed input cannot hang a generation pass.
const MAX_REFERENCE_HOPS: usize = 64;

/// Maps token id → token for dereferencing.
#[derive(Debug)]
pub struct TokenIndex<'a> {
    map: HashMap<&'a TokenId, &'a Token>,
}

impl<'a> TokenIndex<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { map: tokens.iter().map(|token| (&token.id, token)).collect() }
    }

    pub fn get(&self, id: &TokenId) -> Option<&'a Token> {
        self.map.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Strategy for emitting a referenced token.
pub trait ReferenceRenderer {
    fn render(&self, token: &Token) -> Result<String, CssError>;
}

/// Emits `var(--<name>)` indirections. This is the production policy for
/// custom-property sheets: the referenced token keeps its own declaration
/// and consumers follow the variable.
#[derive(Debug)]
pub struct VariableRenderer<'a> {
    groups: &'a [TokenGroup],
}

impl<'a> VariableRenderer<'a> {
    pub fn new(groups: &'a [TokenGroup]) -> Self {
        Self { groups }
    }
}

impl ReferenceRenderer for VariableRenderer<'_> {
    fn render(&self, token: &Token) -> Result<String, CssError> {
        Ok(format!("var(--{})", variable_name(token, self.groups)?))
    }
}

/// Inlines the referenced token's literal value, following chains until a
/// literal is reached. Useful for flat output targets that cannot express
/// indirection.
#[derive(Debug)]
pub struct InlineRenderer<'a> {
    index: &'a TokenIndex<'a>,
}

impl<'a> InlineRenderer<'a> {
    pub fn new(index: &'a TokenIndex<'a>) -> Self {
        Self { index }
    }
}

impl ReferenceRenderer for InlineRenderer<'_> {
    fn render(&self, token: &Token) -> Result<String, CssError> {
        let mut current = token;
        for _ in 0..MAX_REFERENCE_HOPS {
            match current.value.referenced_token_id() {
                Some(id) => {
                    current = self.index.get(id).ok_or_else(|| CssError::UnresolvedReference {
                        token: current.name.clone(),
                        reference: id.clone(),
                    })?;
                }
                None => return literal_value(current),
            }
        }
        Err(CssError::MalformedValue {
            token: token.name.clone(),
            category: token.category,
            message: format!("reference chain exceeds {MAX_REFERENCE_HOPS} hops"),
        })
    }
}
