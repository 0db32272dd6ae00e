//! Persisting the generated feed
//!
//! The document is written to a sibling temp file and renamed over the
//! target, so a failed write leaves any existing file as it was.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use grc_atom::Feed;

/// Extension appended when the output path has none
pub const XML_EXTENSION: &str = "xml";

/// Errors for writing the feed to disk
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("output file {} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("checking output file {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Append `.xml` when `path` has no extension.
///
/// Any dot in the file name counts as an extension, so `.hidden` and
/// `name.` are kept as written.
pub fn ensure_xml_extension(path: &Path) -> PathBuf {
    let has_extension = path
        .file_name()
        .map_or(false, |name| name.to_string_lossy().contains('.'));
    if has_extension {
        path.to_path_buf()
    } else {
        path.with_extension(XML_EXTENSION)
    }
}

/// Serialize `feed` and write it to `path`, returning the path written.
///
/// Refuses to replace an existing file unless `overwrite` is set.
pub fn write(path: &Path, feed: &Feed, overwrite: bool) -> Result<PathBuf, WriteError> {
    let path = ensure_xml_extension(path);
    check_overwrite(&path, overwrite)?;

    let xml = feed.to_xml();
    write_atomic(&path, xml.as_bytes()).map_err(|source| WriteError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

/// Fail if `path` exists and may not be replaced
pub fn check_overwrite(path: &Path, overwrite: bool) -> Result<(), WriteError> {
    match fs::metadata(path) {
        Ok(_) if overwrite => Ok(()),
        Ok(_) => Err(WriteError::AlreadyExists(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(WriteError::Stat {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    replace_via_temp(path, |temp_path| fs::write(temp_path, bytes))
}

/// Write the temp file with `write_temp`, then rename it over `path`.
///
/// The temp file is removed if either step fails.
fn replace_via_temp<F>(path: &Path, write_temp: F) -> io::Result<()>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    let temp_path = temp_path_for(path);

    let result = write_temp(&temp_path).and_then(|()| fs::rename(&temp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", file_name))
}
