//! AES-256-GCM seal/open primitives.
//!
//! This module works on raw key bytes and knows nothing about key roles or
//! the envelope layout. It hands back (nonce, ciphertext, tag) detached and
//! accepts them detached.
//!
//! Nonces are always drawn from the OS CSPRNG inside [`cipher::seal`]; no
//! public entry point accepts a caller-supplied nonce.

pub mod cipher;

pub use cipher::{KEY_LEN, NONCE_LEN, TAG_LEN};
