//! Error taxonomy for the sealing core.

use thiserror::Error;

use crate::crypto::KEY_LEN;
use crate::envelope::MIN_ENVELOPE_LEN;

/// Errors produced while sealing or opening an envelope.
///
/// None of the variants carry key material or plaintext. Every operation is
/// all-or-nothing: when one of these is returned no partial output exists.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SealError {
    /// The combined data is shorter than nonce + tag.
    #[error("too short combined message: {len} bytes (need at least {MIN_ENVELOPE_LEN})")]
    EnvelopeTooShort {
        /// Length of the rejected input.
        len: usize,
    },

    /// Key material is not exactly [`KEY_LEN`] bytes.
    #[error("invalid key length: expected {KEY_LEN} bytes, got {len}")]
    InvalidKeyLength {
        /// Length of the rejected key material.
        len: usize,
    },

    /// Tag verification failed. Key, nonce, ciphertext and tag are
    /// mutually inconsistent or were tampered with.
    #[error("message authentication failed")]
    AuthenticationFailure,

    /// The operating system could not supply a random nonce.
    #[error("secure random source unavailable")]
    RandomSourceFailure,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_lengths() {
        let e = SealError::EnvelopeTooShort { len: 27 };
        assert!(e.to_string().contains("27"));
        assert!(e.to_string().contains("28"));

        let e = SealError::InvalidKeyLength { len: 16 };
        assert!(e.to_string().contains("16"));
        assert!(e.to_string().contains("32"));
    }
}
