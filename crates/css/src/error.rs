//! Error types for the generation core. None of these are recovered
//! locally; a generation pass fails fast rather than emitting
//! partially-correct CSS.

use cascade_tokens::TokenCategory;
use cascade_types::{GroupId, TokenId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CssError {
    #[error("Token group '{group_id}' not found (required by '{token}')")]
    GroupNotFound { group_id: GroupId, token: String },

    #[error("Token '{token}' references unknown token '{reference}'")]
    UnresolvedReference { token: String, reference: TokenId },

    #[error("Malformed {category:?} value on token '{token}': {message}")]
    MalformedValue { token: String, category: TokenCategory, message: String },

    #[error("Variable name '{name}' is derived from both token '{first}' and token '{second}'")]
    NameCollision { name: String, first: TokenId, second: TokenId },
}
