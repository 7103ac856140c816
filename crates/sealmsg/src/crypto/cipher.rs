//! AES-256-GCM encryption and decryption with a random 96-bit nonce.
//!
//! **Nonce policy:** every [`seal`] draws a fresh nonce from the OS CSPRNG.
//! If no randomness is available the seal is aborted with
//! [`SealError::RandomSourceFailure`]. A zero or counter nonce is never
//! substituted; GCM nonce reuse under one key breaks both confidentiality
//! and authentication.

use aes_gcm::{
    aead::{rand_core::RngCore, AeadInPlace, KeyInit, OsRng},
    Aes256Gcm, Nonce, Tag,
};
use tracing::debug;

use crate::error::SealError;

/// Byte length of an AES-256 key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of an AES-GCM nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of an AES-GCM authentication tag (16 bytes = 128 bits).
pub const TAG_LEN: usize = 16;

/// Output of a single [`seal`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed {
    /// Randomly generated nonce.
    pub nonce: [u8; NONCE_LEN],
    /// Ciphertext, same length as the plaintext.
    pub ciphertext: Vec<u8>,
    /// Authentication tag over the ciphertext.
    pub tag: [u8; TAG_LEN],
}

/// Supplier of fresh nonces.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait NonceSource {
    /// Fill `nonce` with unpredictable bytes.
    fn fill(&self, nonce: &mut [u8; NONCE_LEN]) -> Result<(), SealError>;
}

/// Nonces from the operating system CSPRNG. Stateless, so safe to use from
/// any number of threads at once.
pub(crate) struct OsNonceSource;

impl NonceSource for OsNonceSource {
    fn fill(&self, nonce: &mut [u8; NONCE_LEN]) -> Result<(), SealError> {
        OsRng
            .try_fill_bytes(nonce)
            .map_err(|_| SealError::RandomSourceFailure)
    }
}

/// Encrypt `plaintext` under `key` with a freshly generated nonce and no
/// associated data.
///
/// # Errors
///
/// Returns [`SealError::InvalidKeyLength`] if `key` is not [`KEY_LEN`] bytes.
/// Returns [`SealError::RandomSourceFailure`] if no nonce could be drawn.
pub fn seal(key: &[u8], plaintext: &[u8]) -> Result<Sealed, SealError> {
    seal_with(&OsNonceSource, key, plaintext)
}

pub(crate) fn seal_with(
    source: &dyn NonceSource,
    key: &[u8],
    plaintext: &[u8],
) -> Result<Sealed, SealError> {
    let cipher = build_cipher(key)?;

    let mut nonce = [0u8; NONCE_LEN];
    source.fill(&mut nonce)?;

    let mut ciphertext = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(&nonce), b"", &mut ciphertext)
        // Only reachable for plaintexts beyond the GCM limit of ~64 GiB.
        .map_err(|_| SealError::AuthenticationFailure)?;

    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(&tag);

    debug!(plaintext_len = plaintext.len(), "sealed");
    Ok(Sealed {
        nonce,
        ciphertext,
        tag: tag_bytes,
    })
}

/// Verify `tag` over `ciphertext` and decrypt it under `key` and `nonce`.
///
/// Verification happens before any plaintext is released; on failure the
/// working buffer is dropped and nothing is returned.
///
/// # Errors
///
/// Returns [`SealError::InvalidKeyLength`] if `key` is not [`KEY_LEN`] bytes.
/// Returns [`SealError::AuthenticationFailure`] on a wrong key, wrong nonce,
/// or tampered ciphertext or tag.
pub fn open(
    key: &[u8],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
    tag: &[u8; TAG_LEN],
) -> Result<Vec<u8>, SealError> {
    let cipher = build_cipher(key)?;

    let mut buffer = ciphertext.to_vec();
    cipher
        .decrypt_in_place_detached(Nonce::from_slice(nonce), b"", &mut buffer, Tag::from_slice(tag))
        .map_err(|_| SealError::AuthenticationFailure)?;

    debug!(ciphertext_len = ciphertext.len(), "opened");
    Ok(buffer)
}

fn build_cipher(key: &[u8]) -> Result<Aes256Gcm, SealError> {
    if key.len() != KEY_LEN {
        return Err(SealError::InvalidKeyLength { len: key.len() });
    }
    Aes256Gcm::new_from_slice(key).map_err(|_| SealError::InvalidKeyLength { len: key.len() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn random_key() -> Vec<u8> {
        let mut key = vec![0u8; KEY_LEN];
        OsRng.fill_bytes(&mut key);
        key
    }

    #[test]
    fn seal_open_round_trip() {
        let key = random_key();
        let plaintext = b"123-45-6789";
        let sealed = seal(&key, plaintext).unwrap();
        let opened = open(&key, &sealed.nonce, &sealed.ciphertext, &sealed.tag).unwrap();
        assert_eq!(opened, plaintext);
    }

    #[test]
    fn ciphertext_length_matches_plaintext() {
        let key = random_key();
        for len in [0usize, 1, 15, 16, 17, 1000] {
            let sealed = seal(&key, &vec![0xAB; len]).unwrap();
            assert_eq!(sealed.ciphertext.len(), len);
        }
    }

    #[test]
    fn empty_plaintext_round_trip() {
        let key = random_key();
        let sealed = seal(&key, b"").unwrap();
        assert!(sealed.ciphertext.is_empty());
        let opened = open(&key, &sealed.nonce, &sealed.ciphertext, &sealed.tag).unwrap();
        assert!(opened.is_empty());
    }

    #[test]
    fn wrong_key_fails_authentication() {
        let sealed = seal(&random_key(), b"secret").unwrap();
        let err = open(&random_key(), &sealed.nonce, &sealed.ciphertext, &sealed.tag).unwrap_err();
        assert_eq!(err, SealError::AuthenticationFailure);
    }

    #[test]
    fn wrong_nonce_fails_authentication() {
        let key = random_key();
        let sealed = seal(&key, b"secret").unwrap();
        let mut nonce = sealed.nonce;
        nonce[0] ^= 0x01;
        let err = open(&key, &nonce, &sealed.ciphertext, &sealed.tag).unwrap_err();
        assert_eq!(err, SealError::AuthenticationFailure);
    }

    #[test]
    fn tampered_ciphertext_fails_authentication() {
        let key = random_key();
        let mut sealed = seal(&key, b"tamper me").unwrap();
        sealed.ciphertext[0] ^= 0xFF;
        let err = open(&key, &sealed.nonce, &sealed.ciphertext, &sealed.tag).unwrap_err();
        assert_eq!(err, SealError::AuthenticationFailure);
    }

    #[test]
    fn tampered_tag_fails_authentication() {
        let key = random_key();
        let mut sealed = seal(&key, b"tamper me").unwrap();
        sealed.tag[TAG_LEN - 1] ^= 0x80;
        let err = open(&key, &sealed.nonce, &sealed.ciphertext, &sealed.tag).unwrap_err();
        assert_eq!(err, SealError::AuthenticationFailure);
    }

    #[test]
    fn invalid_key_length_rejected() {
        let short_key = vec![0u8; 16];
        assert_eq!(
            seal(&short_key, b"x").unwrap_err(),
            SealError::InvalidKeyLength { len: 16 }
        );
        assert_eq!(
            open(&[0u8; 33], &[0u8; NONCE_LEN], b"", &[0u8; TAG_LEN]).unwrap_err(),
            SealError::InvalidKeyLength { len: 33 }
        );
    }

    #[test]
    fn nonce_source_failure_aborts_seal() {
        let mut source = MockNonceSource::new();
        source
            .expect_fill()
            .times(1)
            .returning(|_| Err(SealError::RandomSourceFailure));

        let err = seal_with(&source, &random_key(), b"payload").unwrap_err();
        assert_eq!(err, SealError::RandomSourceFailure);
    }

    #[test]
    fn key_is_checked_before_drawing_a_nonce() {
        let mut source = MockNonceSource::new();
        source.expect_fill().never();

        let err = seal_with(&source, &[0u8; 31], b"payload").unwrap_err();
        assert_eq!(err, SealError::InvalidKeyLength { len: 31 });
    }

    #[test]
    fn nonce_from_source_is_used_verbatim() {
        let mut source = MockNonceSource::new();
        source.expect_fill().returning(|nonce| {
            nonce.copy_from_slice(&[7u8; NONCE_LEN]);
            Ok(())
        });

        let key = random_key();
        let sealed = seal_with(&source, &key, b"payload").unwrap();
        assert_eq!(sealed.nonce, [7u8; NONCE_LEN]);
        assert_eq!(
            open(&key, &sealed.nonce, &sealed.ciphertext, &sealed.tag).unwrap(),
            b"payload"
        );
    }

    #[test]
    fn repeated_seals_use_distinct_nonces() {
        let key = random_key();
        let a = seal(&key, b"same").unwrap();
        let b = seal(&key, b"same").unwrap();
        assert_ne!(a.nonce, b.nonce);
        assert_ne!(a.ciphertext, b.ciphertext);
    }
}
