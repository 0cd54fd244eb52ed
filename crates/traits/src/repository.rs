//! TokenRepository trait for abstracting token store access.
//!
//! This trait allows the engine to read token, group, and theme snapshots
//! without being tied to a remote token store or its transport.

use cascade_tokens::{Theme, Token, TokenGroup};
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// Error type for token store operations.
#[derive(Error, Debug, Clone)]
pub enum RepositoryError {
    #[error("Fetch from token store failed: {0}")]
    FetchFailed(String),

    #[error("Not found in token store: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::Io(err.to_string())
    }
}

/// Identifies the (design system, version) pair a snapshot was fetched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotVersion {
    pub design_system_id: String,
    pub version_id: String,
}

impl SnapshotVersion {
    pub fn new(design_system_id: impl Into<String>, version_id: impl Into<String>) -> Self {
        Self { design_system_id: design_system_id.into(), version_id: version_id.into() }
    }
}

impl std::fmt::Display for SnapshotVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.design_system_id, self.version_id)
    }
}

/// A trait for reading a versioned design-system snapshot.
///
/// This abstraction allows the engine to work with token data from:
/// - A remote token management store
/// - In-memory fixtures
/// - Serialized snapshots on disk
///
/// All three collections are read-only for the duration of one generation
/// pass. Failures propagate unchanged; any retry policy belongs to the
/// implementation, not to the engine.
pub trait TokenRepository: Send + Sync + Debug {
    /// The (design system, version) pair this repository reads from, when
    /// the backing store is versioned.
    fn version(&self) -> Option<SnapshotVersion> {
        None
    }

    /// Fetch all tokens in the snapshot.
    fn tokens(&self) -> Result<Vec<Token>, RepositoryError>;

    /// Fetch all token groups in the snapshot.
    fn token_groups(&self) -> Result<Vec<TokenGroup>, RepositoryError>;

    /// Fetch all themes defined for the snapshot.
    fn themes(&self) -> Result<Vec<Theme>, RepositoryError>;

    /// Compute the effective token set under a theme.
    ///
    /// The default implementation applies the theme's overrides locally;
    /// a remote repository may delegate this to its own resolution.
    fn apply_theme(&self, tokens: &[Token], theme: &Theme) -> Result<Vec<Token>, RepositoryError> {
        Ok(theme.apply_to(tokens))
    }

    /// Returns a human-readable name for this repository (for logging).
    fn name(&self) -> &'static str;
}

#[derive(Debug, Default)]
struct Snapshot {
    tokens: Vec<Token>,
    groups: Vec<TokenGroup>,
    themes: Vec<Theme>,
}

/// An in-memory token repository.
///
/// The snapshot is stored in memory and must be pre-populated before use.
/// This is the simplest repository and backs every test in the workspace.
#[derive(Debug, Default)]
pub struct InMemoryTokenRepository {
    snapshot: RwLock<Snapshot>,
    version: Option<SnapshotVersion>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: SnapshotVersion) -> Self {
        self.version = Some(version);
        self
    }

    /// Replaces the token collection.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::FetchFailed` if the internal lock is poisoned.
    pub fn set_tokens(&self, tokens: Vec<Token>) -> Result<(), RepositoryError> {
        let mut snapshot = self.lock_mut()?;
        snapshot.tokens = tokens;
        Ok(())
    }

    /// Replaces the group collection.
    pub fn set_groups(&self, groups: Vec<TokenGroup>) -> Result<(), RepositoryError> {
        let mut snapshot = self.lock_mut()?;
        snapshot.groups = groups;
        Ok(())
    }

    /// Replaces the theme collection.
    pub fn set_themes(&self, themes: Vec<Theme>) -> Result<(), RepositoryError> {
        let mut snapshot = self.lock_mut()?;
        snapshot.themes = themes;
        Ok(())
    }

    fn lock_mut(&self) -> Result<std::sync::RwLockWriteGuard<'_, Snapshot>, RepositoryError> {
        self.snapshot
            .write()
            .map_err(|_| RepositoryError::FetchFailed("snapshot lock poisoned".to_string()))
    }

    fn lock(&self) -> Result<std::sync::RwLockReadGuard<'_, Snapshot>, RepositoryError> {
        self.snapshot
            .read()
            .map_err(|_| RepositoryError::FetchFailed("snapshot lock poisoned".to_string()))
    }
}

impl TokenRepository for InMemoryTokenRepository {
    fn version(&self) -> Option<SnapshotVersion> {
        self.version.clone()
    }

    fn tokens(&self) -> Result<Vec<Token>, RepositoryError> {
        Ok(self.lock()?.tokens.clone())
    }

    fn token_groups(&self) -> Result<Vec<TokenGroup>, RepositoryError> {
        Ok(self.lock()?.groups.clone())
    }

    fn themes(&self) -> Result<Vec<Theme>, RepositoryError> {
        Ok(self.lock()?.themes.clone())
    }

    fn name(&self) -> &'static str {
        "InMemoryTokenRepository"
    }
}
