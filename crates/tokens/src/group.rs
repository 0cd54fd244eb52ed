//! Token group tree nodes, used to derive stable, scoped variable names.

use cascade_types::{GroupId, TokenId};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenGroup {
    pub id: GroupId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_group_id: Option<GroupId>,
    /// Root (category) groups are excluded from derived variable names.
    #[serde(default)]
    pub is_root: bool,
    #[serde(default)]
    pub token_ids: Vec<TokenId>,
}

impl TokenGroup {
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_group_id: None,
            is_root: false,
            token_ids: Vec::new(),
        }
    }

    pub fn root(id: impl Into<GroupId>, name: impl Into<String>) -> Self {
        Self { is_root: true, ..Self::new(id, name) }
    }

    pub fn with_parent(mut self, parent: impl Into<GroupId>) -> Self {
        self.parent_group_id = Some(parent.into());
        self
    }

    pub fn with_tokens(mut self, token_ids: impl IntoIterator<Item = TokenId>) -> Self {
        self.token_ids = token_ids.into_iter().collect();
        self
    }

    pub fn contains(&self, token_id: &TokenId) -> bool {
        self.token_ids.contains(token_id)
    }
}

/// Looks up a group by id within a snapshot.
pub fn find_group<'a>(groups: &'a [TokenGroup], id: &GroupId) -> Option<&'a TokenGroup> {
    groups.iter().find(|group| &group.id == id)
}
