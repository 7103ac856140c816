//! Flat wire encoding of a sealed message.
//!
//! | offset   | length   | field      |
//! |----------|----------|------------|
//! | 0        | 12       | nonce      |
//! | 12       | len - 28 | ciphertext |
//! | len - 16 | 16       | tag        |
//!
//! Decoding is a structural split only. Authenticity is checked later by
//! [`crate::crypto::cipher::open`].

use bytes::{BufMut, Bytes, BytesMut};

use crate::crypto::{NONCE_LEN, TAG_LEN};
use crate::error::SealError;

/// Smallest valid envelope: nonce + tag around an empty ciphertext.
pub const MIN_ENVELOPE_LEN: usize = NONCE_LEN + TAG_LEN;

/// A decoded envelope.
///
/// `ciphertext` is a view into the [`CombinedData`] it was decoded from; the
/// underlying buffer is immutable, so the view stays valid for as long as it
/// is held.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedMessage {
    pub nonce: [u8; NONCE_LEN],
    pub ciphertext: Bytes,
    pub tag: [u8; TAG_LEN],
}

/// The flat `nonce || ciphertext || tag` byte sequence.
///
/// This is the only representation that is stored, transmitted or handed to
/// callers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CombinedData(Bytes);

impl CombinedData {
    /// Raw envelope bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the envelope and return the shared buffer.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }

    /// Split this envelope into its parts. See [`decode`].
    ///
    /// # Errors
    ///
    /// Returns [`SealError::EnvelopeTooShort`] if fewer than
    /// [`MIN_ENVELOPE_LEN`] bytes are present.
    pub fn to_sealed(&self) -> Result<SealedMessage, SealError> {
        decode(self)
    }
}

impl From<Vec<u8>> for CombinedData {
    fn from(v: Vec<u8>) -> Self {
        Self(Bytes::from(v))
    }
}

impl From<Bytes> for CombinedData {
    fn from(b: Bytes) -> Self {
        Self(b)
    }
}

impl From<&[u8]> for CombinedData {
    fn from(s: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(s))
    }
}

impl AsRef<[u8]> for CombinedData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Concatenate `nonce || ciphertext || tag`.
pub fn encode(nonce: &[u8; NONCE_LEN], ciphertext: &[u8], tag: &[u8; TAG_LEN]) -> CombinedData {
    let mut buf = BytesMut::with_capacity(MIN_ENVELOPE_LEN + ciphertext.len());
    buf.put_slice(nonce);
    buf.put_slice(ciphertext);
    buf.put_slice(tag);
    CombinedData(buf.freeze())
}

/// Split an envelope into nonce (first 12 bytes), tag (last 16 bytes) and
/// the ciphertext between them. The ciphertext is not copied.
///
/// # Errors
///
/// Returns [`SealError::EnvelopeTooShort`] if `data` is shorter than
/// [`MIN_ENVELOPE_LEN`].
pub fn decode(data: &CombinedData) -> Result<SealedMessage, SealError> {
    let len = data.len();
    if len < MIN_ENVELOPE_LEN {
        return Err(SealError::EnvelopeTooShort { len });
    }

    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(&data.0[..NONCE_LEN]);
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&data.0[len - TAG_LEN..]);

    Ok(SealedMessage {
        nonce,
        ciphertext: data.0.slice(NONCE_LEN..len - TAG_LEN),
        tag,
    })
}
