//! Input reading with memory mapping for large files.
//!
//! Small files are read directly; files at or above [`MMAP_THRESHOLD`] are
//! memory mapped. A path of `-` (or no path) reads standard input.

// Memory mapping requires unsafe but is well-documented and safe for read-only access
#![allow(unsafe_code)]

use crate::error::{CommandError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Files at or above this size (1MB) are memory mapped.
pub const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Maximum input size accepted (1GB).
const MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Reader for a single input file.
///
/// # Examples
///
/// ```no_run
/// use extkit::io::InputReader;
///
/// let reader = InputReader::open("payload.bin").unwrap();
/// let bytes = reader.read_to_bytes().unwrap();
/// ```
#[derive(Debug)]
pub struct InputReader {
    file: File,
    size: u64,
    path: String,
}

impl InputReader {
    /// Opens `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::ReadFailed`] if the file is missing, cannot be
    /// opened or exceeds the size limit.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        let file = File::open(path_ref).map_err(|e| read_failed(&path_str, &e))?;
        let size = file
            .metadata()
            .map_err(|e| read_failed(&path_str, &e))?
            .len();

        if size > MAX_FILE_SIZE {
            return Err(CommandError::ReadFailed {
                path: path_str,
                reason: format!("file too large: {size} bytes (max: {MAX_FILE_SIZE} bytes)"),
            }
            .into());
        }

        Ok(Self {
            file,
            size,
            path: path_str,
        })
    }

    /// Reads the whole file.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::ReadFailed`] if reading or mapping fails.
    pub fn read_to_bytes(&self) -> Result<Vec<u8>> {
        if self.size >= MMAP_THRESHOLD {
            self.read_mmap()
        } else {
            self.read_direct()
        }
    }

    fn read_mmap(&self) -> Result<Vec<u8>> {
        tracing::debug!(path = %self.path, size = self.size, "memory mapping input");
        // Safety: the mapping is read-only and dropped before returning
        let mmap = unsafe { Mmap::map(&self.file).map_err(|e| read_failed(&self.path, &e))? };
        Ok(mmap.to_vec())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn read_direct(&self) -> Result<Vec<u8>> {
        let mut file = &self.file;
        let mut buffer = Vec::with_capacity(self.size as usize);
        file.read_to_end(&mut buffer)
            .map_err(|e| read_failed(&self.path, &e))?;
        Ok(buffer)
    }
}

/// Reads all input bytes from `path`, or from standard input when `path` is
/// `None` or `-`.
///
/// # Errors
///
/// Returns [`CommandError::ReadFailed`] if the input cannot be read.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new(STDIN_PATH) => InputReader::open(path)?.read_to_bytes(),
        _ => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .map_err(|e| read_failed(STDIN_PATH, &e))?;
            Ok(buffer)
        }
    }
}

/// Reads input as UTF-8 text.
///
/// # Errors
///
/// Returns [`CommandError::ReadFailed`] if the input cannot be read or is
/// not valid UTF-8.
pub fn read_input_text(path: Option<&Path>) -> Result<String> {
    let bytes = read_input(path)?;
    String::from_utf8(bytes).map_err(|e| {
        CommandError::ReadFailed {
            path: display_path(path),
            reason: format!("invalid UTF-8: {e}"),
        }
        .into()
    })
}

/// Writes `content` to `path`, creating parent directories if needed.
///
/// # Errors
///
/// Returns [`CommandError::WriteFailed`] if directory creation or writing
/// fails.
pub fn write_output<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if let Some(parent) = path_ref.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| CommandError::WriteFailed {
            path: parent.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;
    }

    std::fs::write(path_ref, content).map_err(|e| CommandError::WriteFailed {
        path: path_str,
        reason: e.to_string(),
    })?;

    Ok(())
}

fn display_path(path: Option<&Path>) -> String {
    path.map_or_else(|| STDIN_PATH.to_string(), |p| p.to_string_lossy().to_string())
}

fn read_failed(path: &str, err: &std::io::Error) -> crate::error::Error {
    CommandError::ReadFailed {
        path: path.to_string(),
        reason: err.to_string(),
    }
    .into()
}
