mod document;
mod file;
mod manager;
mod position;

pub use document::DocumentId;
pub use file::SourceFile;
pub use manager::SourceManager;
pub use position::{Position, PositionEncoding, Range};
