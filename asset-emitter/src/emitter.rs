use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Asset;

/// The only failures this tool can hit: the filesystem saying no.
#[derive(Debug, Error)]
pub enum FilesystemError {
    #[error("could not create output directory `{}`", path.display())]
    CreateDir {
        path: PathBuf,
        source: io::Error,
    },
    #[error("output path `{}` exists but is not a directory", path.display())]
    NotADirectory { path: PathBuf },
    #[error("could not write `{}`", path.display())]
    WriteFile {
        path: PathBuf,
        source: io::Error,
    },
}

impl FilesystemError {
    /// The path the failure was about.
    pub fn path(&self) -> &Path {
        match self {
            FilesystemError::CreateDir { path, .. }
            | FilesystemError::NotADirectory { path }
            | FilesystemError::WriteFile { path, .. } => path,
        }
    }
}

/// A batch that stopped partway. Files named in `written` made it to disk
/// before the failure and are left in place; a rerun overwrites them
/// consistently.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct BatchAborted {
    pub written: Vec<String>,
    pub source: FilesystemError,
}

/// Creates `path` (and any missing parents) if absent. A pre-existing
/// directory is fine; a pre-existing non-directory is not.
pub fn ensure_directory(path: impl AsRef<Path>) -> Result<(), FilesystemError> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(FilesystemError::NotADirectory {
            path: path.to_path_buf(),
        }),
        Err(_) => {
            tracing::debug!("creating output directory {}", path.display());
            fs::create_dir_all(path).map_err(|source| FilesystemError::CreateDir {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

/// Whole-file write of one asset into `directory`, overwriting any previous
/// file of the same name.
pub fn write_asset(
    directory: impl AsRef<Path>,
    name: &str,
    content: &str,
) -> Result<(), FilesystemError> {
    let path = directory.as_ref().join(name);
    tracing::debug!("writing {} ({} bytes)", path.display(), content.len());
    fs::write(&path, content).map_err(|source| FilesystemError::WriteFile { path, source })
}

/// Writes every asset into `directory` in order, creating the directory
/// first. Not transactional: the first failure aborts the rest of the batch,
/// and whatever was already written stays on disk (reported via the error).
pub fn emit_all(assets: &[Asset], directory: impl AsRef<Path>) -> Result<Vec<String>, BatchAborted> {
    let directory = directory.as_ref();
    ensure_directory(directory).map_err(|source| BatchAborted {
        written: Vec::new(),
        source,
    })?;

    let mut written = Vec::with_capacity(assets.len());
    for asset in assets {
        if let Err(source) = write_asset(directory, &asset.name, &asset.content) {
            return Err(BatchAborted { written, source });
        }
        written.push(asset.name.clone());
    }
    Ok(written)
}
