//! One-time-key authenticated encryption envelope.
//!
//! A plaintext is sealed with AES-256-GCM under a [`OneTimeKey`] and handed
//! back as a flat, self-describing [`CombinedData`] blob:
//!
//! ```text
//! +-----------+------------------------+-----------+
//! | nonce(12) | ciphertext(len - 28)   | tag(16)   |
//! +-----------+------------------------+-----------+
//! ```
//!
//! There is no version tag, length prefix, or associated data. The minimum
//! valid envelope is 28 bytes (empty plaintext).
//!
//! ```rust,ignore
//! use sealmsg::{SymmetricKey, OneTimeKey};
//!
//! let key = SymmetricKey::new([0u8; 32]);
//! let sealed = key.one_time().seal(b"hello")?;
//! let opened = key.one_time().open(&sealed)?;
//! assert_eq!(opened, b"hello");
//! ```

pub mod crypto;
pub mod envelope;
pub mod error;
pub mod key;
pub mod seal;

pub use crypto::{KEY_LEN, NONCE_LEN, TAG_LEN};
pub use envelope::{CombinedData, SealedMessage, MIN_ENVELOPE_LEN};
pub use error::SealError;
pub use key::{OneTimeKey, SymmetricKey};
pub use seal::{open, seal};
