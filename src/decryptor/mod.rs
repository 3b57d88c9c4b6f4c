// src/decryptor/mod.rs

//! High-level archive decryption facade.
//!
//! Core API: `decrypt(archive_bytes, share_code)?` returns the embedded XML
//! record's plaintext bytes.

pub(crate) mod decrypt;

pub use decrypt::decrypt;
