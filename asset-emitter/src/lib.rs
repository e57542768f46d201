mod catalog;
pub mod emitter;

pub use catalog::standard_assets;
pub use emitter::{emit_all, ensure_directory, write_asset, BatchAborted, FilesystemError};

/// A named unit of textual content destined for exactly one output file.
///
/// The emitter never looks inside `content`; it only moves bytes to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub content: String,
}

impl Asset {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Asset {
            name: name.into(),
            content: content.into(),
        }
    }
}
