//! Key roles over the same 32 bytes of secret material.
//!
//! - [`SymmetricKey`]: general-purpose key material. Cloneable.
//! - [`OneTimeKey`]: material meant for exactly one seal. It is not `Clone`
//!   and [`OneTimeKey::seal`] takes it by value, so the same value cannot
//!   seal twice. Opening borrows the key and may be repeated freely.
//!
//! Nothing counts uses at runtime. Deriving two one-time keys from the same
//! [`SymmetricKey`] and sealing with both is possible; the random nonce keeps
//! each ciphertext sound, but the pattern defeats the point of the role.

use std::fmt;

use zeroize::Zeroize;

use crate::crypto::KEY_LEN;
use crate::envelope::CombinedData;
use crate::error::SealError;
use crate::seal;

/// 32 bytes of AES-256 key material.
///
/// The bytes are overwritten with zeroes on drop and are never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SymmetricKey([u8; KEY_LEN]);

impl SymmetricKey {
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a key from a slice of exactly [`KEY_LEN`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::InvalidKeyLength`] for any other length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SealError> {
        let arr: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|_| SealError::InvalidKeyLength { len: bytes.len() })?;
        Ok(Self(arr))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Derive a [`OneTimeKey`] carrying a copy of these bytes, for a single
    /// encryption session.
    pub fn one_time(&self) -> OneTimeKey {
        OneTimeKey(self.clone())
    }
}

impl Drop for SymmetricKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey([REDACTED])")
    }
}

/// Key material intended for one [`seal`](OneTimeKey::seal) over its
/// lifetime and any number of [`open`](OneTimeKey::open) calls.
#[derive(PartialEq, Eq)]
pub struct OneTimeKey(SymmetricKey);

impl OneTimeKey {
    /// # Errors
    ///
    /// Returns [`SealError::InvalidKeyLength`] unless `bytes` is exactly
    /// [`KEY_LEN`] long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SealError> {
        SymmetricKey::from_slice(bytes).map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        self.0.as_bytes()
    }

    /// Seal `plaintext`, consuming the key. See [`seal::seal`].
    pub fn seal(self, plaintext: &[u8]) -> Result<CombinedData, SealError> {
        seal::seal(self, plaintext)
    }

    /// Open an envelope sealed under this key. See [`seal::open`].
    pub fn open(&self, data: &CombinedData) -> Result<Vec<u8>, SealError> {
        seal::open(self, data)
    }
}

impl From<SymmetricKey> for OneTimeKey {
    fn from(key: SymmetricKey) -> Self {
        Self(key)
    }
}

impl fmt::Debug for OneTimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OneTimeKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_accepts_exact_length() {
        let key = SymmetricKey::from_slice(&[0x42u8; KEY_LEN]).unwrap();
        assert_eq!(key.as_bytes(), &[0x42u8; KEY_LEN]);
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        assert_eq!(
            SymmetricKey::from_slice(&[0u8; 16]).unwrap_err(),
            SealError::InvalidKeyLength { len: 16 }
        );
        assert_eq!(
            OneTimeKey::from_slice(&[0u8; 33]).unwrap_err(),
            SealError::InvalidKeyLength { len: 33 }
        );
        assert_eq!(
            OneTimeKey::from_slice(&[]).unwrap_err(),
            SealError::InvalidKeyLength { len: 0 }
        );
    }

    #[test]
    fn equality_is_byte_equality() {
        assert_eq!(SymmetricKey::new([1u8; KEY_LEN]), SymmetricKey::new([1u8; KEY_LEN]));
        assert_ne!(SymmetricKey::new([1u8; KEY_LEN]), SymmetricKey::new([2u8; KEY_LEN]));
    }

    #[test]
    fn one_time_key_shares_bytes_with_its_source() {
        let key = SymmetricKey::new([7u8; KEY_LEN]);
        assert_eq!(key.one_time().as_bytes(), key.as_bytes());
        assert_eq!(OneTimeKey::from(key.clone()), key.one_time());
    }

    #[test]
    fn keys_redacted_in_debug() {
        let key = SymmetricKey::new([0xFFu8; KEY_LEN]);
        let dbg = format!("{key:?} {:?}", key.one_time());
        assert!(dbg.contains("REDACTED"));
        assert!(!dbg.contains("255"));
    }
}
