//! Application error type shared by both binaries.

use std::path::PathBuf;

use sealmsg::SealError;
use thiserror::Error;

/// Top-level application error type.
///
/// Variants map to process exit codes (sysexits-style):
/// - [`AppError::Io`], [`AppError::Output`] → 74
/// - [`AppError::InputTooLarge`] and rejected data or keys → 65
/// - [`SealError::RandomSourceFailure`] → 70
#[derive(Debug, Error)]
pub enum AppError {
    /// An input file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file holds more bytes than the configured limit.
    #[error("{} exceeds the {limit}-byte limit", path.display())]
    InputTooLarge { path: PathBuf, limit: u64 },

    /// Sealing or opening failed.
    #[error(transparent)]
    Seal(#[from] SealError),

    /// The result could not be written to stdout.
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl AppError {
    /// Returns the process exit code that should be used for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Io { .. } | AppError::Output(_) => 74,
            AppError::InputTooLarge { .. } => 65,
            AppError::Seal(SealError::RandomSourceFailure) => 70,
            AppError::Seal(_) => 65,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        let io = || std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(
            AppError::Io { path: "k".into(), source: io() }.exit_code(),
            74
        );
        assert_eq!(AppError::Output(io()).exit_code(), 74);
        assert_eq!(
            AppError::InputTooLarge { path: "p".into(), limit: 1 }.exit_code(),
            65
        );
        assert_eq!(AppError::from(SealError::AuthenticationFailure).exit_code(), 65);
        assert_eq!(AppError::from(SealError::EnvelopeTooShort { len: 3 }).exit_code(), 65);
        assert_eq!(AppError::from(SealError::InvalidKeyLength { len: 3 }).exit_code(), 65);
        assert_eq!(AppError::from(SealError::RandomSourceFailure).exit_code(), 70);
    }

    #[test]
    fn display_includes_path() {
        let e = AppError::InputTooLarge { path: "/tmp/plain.txt".into(), limit: 1024 };
        let msg = e.to_string();
        assert!(msg.contains("/tmp/plain.txt"));
        assert!(msg.contains("1024"));
    }

    #[test]
    fn seal_errors_display_unchanged() {
        let inner = SealError::EnvelopeTooShort { len: 27 };
        assert_eq!(AppError::from(inner).to_string(), inner.to_string());
    }
}
