pub mod repository;
pub mod sink;

pub use repository::{InMemoryTokenRepository, RepositoryError, SnapshotVersion, TokenRepository};
pub use sink::{FileSink, FilesystemFileSink, InMemoryFileSink, OutputFile, SinkError};
