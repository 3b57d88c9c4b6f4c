// src/crypto/mod.rs

//! Cryptographic primitives for WinZip AES entry decryption.
//!
//! Thin, audited wrappers over the RustCrypto crates: PBKDF2-HMAC-SHA1 key
//! derivation, HMAC-SHA1 authentication, and the AES-CTR keystream variant
//! the WinZip AE format uses (little-endian counter, starting at 1).

pub mod ctr;
pub mod hmac;
pub mod kdf;

pub use ctr::{apply_keystream, EntryCipher};
pub use hmac::HmacSha1;
pub use kdf::derive_entry_key_material;
