//! The two entry points the rest of an application calls.
//!
//! `seal`: AEAD seal with a random nonce, then encode as `nonce || ct || tag`.
//! `open`: decode, then verify and decrypt.

use tracing::debug;

use crate::crypto::cipher;
use crate::envelope::{self, CombinedData};
use crate::error::SealError;
use crate::key::OneTimeKey;

/// Seal `plaintext` under a one-time key.
///
/// The key is consumed: it is meant for this single seal.
///
/// # Errors
///
/// Returns [`SealError::RandomSourceFailure`] if no nonce could be drawn.
/// Returns [`SealError::InvalidKeyLength`] if the cipher rejects the key.
pub fn seal(key: OneTimeKey, plaintext: &[u8]) -> Result<CombinedData, SealError> {
    let sealed = cipher::seal(key.as_bytes(), plaintext)?;
    let combined = envelope::encode(&sealed.nonce, &sealed.ciphertext, &sealed.tag);
    debug!(envelope_len = combined.len(), "envelope sealed");
    Ok(combined)
}

/// Open an envelope produced by [`seal`] with the same key bytes.
///
/// # Errors
///
/// Returns [`SealError::EnvelopeTooShort`] if `data` is under 28 bytes.
/// Returns [`SealError::AuthenticationFailure`] if verification fails.
/// Returns [`SealError::InvalidKeyLength`] if the cipher rejects the key.
pub fn open(key: &OneTimeKey, data: &CombinedData) -> Result<Vec<u8>, SealError> {
    let msg = envelope::decode(data)?;
    let plaintext = cipher::open(key.as_bytes(), &msg.nonce, &msg.ciphertext, &msg.tag)?;
    debug!(envelope_len = data.len(), "envelope opened");
    Ok(plaintext)
}
