use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Expands a leading `~` to the user's home directory.
///
/// Anything else is returned as-is; a missing home directory leaves the
/// input untouched.
pub fn expand_tilde(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~") {
        if rest.is_empty() || rest.starts_with('/') {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest.trim_start_matches('/'));
            }
        }
    }
    PathBuf::from(input)
}

/// Ensures the output directory does not exist yet.
///
/// Called before any prompt runs so the user never answers a full prompt
/// sequence only to hit an existing directory at the end.
pub fn get_output_dir<P: AsRef<Path>>(output_dir: P) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

/// Creates the output directory itself, failing if it appeared in the
/// meantime.
pub fn create_fresh_dir<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir(dest_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            Error::OutputDirectoryExistsError {
                output_dir: dest_path.display().to_string(),
            }
        } else {
            Error::IoError(e)
        }
    })
}

pub fn create_dir<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir(dest_path.as_ref()).map_err(Error::IoError)
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    std::fs::write(dest_path.as_ref(), content).map_err(Error::IoError)
}

pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(
    source_path: P,
    dest_path: Q,
) -> Result<()> {
    std::fs::copy(source_path.as_ref(), dest_path.as_ref())
        .map(|_| ())
        .map_err(Error::IoError)
}

/// Recursively copies `source` into `dest`. `dest` must not exist yet.
pub fn copy_dir_all<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<()> {
    let source = source.as_ref();
    let dest = dest.as_ref();
    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| {
            Error::IoError(e.into_io_error().unwrap_or_else(|| {
                std::io::Error::other("walkdir entry without io error")
            }))
        })?;
        let rel = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::ValidationError(e.to_string()))?;
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            copy_file(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Removes a directory tree if it exists.
pub fn remove_dir_if_exists<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        std::fs::remove_dir_all(path)?;
    }
    Ok(())
}

/// Lists the top-level entries of `dir`, hidden ones included, sorted by
/// name. Directories get a trailing slash.
pub fn list_entries<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type()?.is_dir() {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort();
    Ok(entries)
}
