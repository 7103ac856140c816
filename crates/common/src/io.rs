//! File input and payload output for the binaries.
//!
//! Inputs are read whole but never past a limit: an oversize file is an
//! error, not a silent truncation.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use sealmsg::{OneTimeKey, KEY_LEN};
use tracing::{debug, warn};
use zeroize::Zeroize;

use crate::error::AppError;

/// Input size limit used when none (or an unparseable one) is configured.
pub const DEFAULT_MAX_SIZE: u64 = 1_048_576;

/// Read the whole file at `path`, which must not exceed `limit` bytes.
///
/// # Errors
///
/// Returns [`AppError::Io`] if the file cannot be opened or read.
/// Returns [`AppError::InputTooLarge`] if it holds more than `limit` bytes.
pub fn read_limited(path: &Path, limit: u64) -> Result<Vec<u8>, AppError> {
    let buf = read_at_most(path, limit.saturating_add(1))?;
    if buf.len() as u64 > limit {
        return Err(AppError::InputTooLarge {
            path: path.to_path_buf(),
            limit,
        });
    }
    Ok(buf)
}

/// Load raw key material from `path` as a [`OneTimeKey`].
///
/// The file must contain exactly [`KEY_LEN`] bytes. The intermediate buffer
/// is zeroed before returning.
///
/// # Errors
///
/// Returns [`AppError::Io`] if the file cannot be read, or
/// [`sealmsg::SealError::InvalidKeyLength`] (wrapped) for any other length.
pub fn load_key(path: &Path) -> Result<OneTimeKey, AppError> {
    let mut raw = read_at_most(path, KEY_LEN as u64 + 1)?;
    let key = OneTimeKey::from_slice(&raw);
    raw.zeroize();
    Ok(key?)
}

/// Parse a configured size limit, falling back to [`DEFAULT_MAX_SIZE`] when
/// it is absent or not a valid byte count.
pub fn max_size_or_default(raw: Option<&str>) -> u64 {
    let Some(s) = raw else {
        return DEFAULT_MAX_SIZE;
    };
    match s.trim().parse::<u64>() {
        Ok(n) => n,
        Err(e) => {
            warn!(value = s, error = %e, default = DEFAULT_MAX_SIZE, "invalid size limit; using default");
            DEFAULT_MAX_SIZE
        }
    }
}

/// Write `bytes` to `out` (stdout in the binaries) and flush.
///
/// # Errors
///
/// Returns [`AppError::Output`] if the sink is closed or the write fails.
pub fn write_output<W: Write>(mut out: W, bytes: &[u8]) -> Result<(), AppError> {
    out.write_all(bytes).map_err(AppError::Output)?;
    out.flush().map_err(AppError::Output)
}

fn read_at_most(path: &Path, max: u64) -> Result<Vec<u8>, AppError> {
    let io_err = |source| AppError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let mut buf = Vec::new();
    file.take(max).read_to_end(&mut buf).map_err(io_err)?;
    debug!(path = %path.display(), bytes = buf.len(), "input read");
    Ok(buf)
}
