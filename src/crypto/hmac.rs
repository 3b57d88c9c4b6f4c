// src/crypto/hmac.rs

//! HMAC-SHA primitive (re-export from `hmac` + `sha1`).
//!
//! WinZip AES authenticates entry ciphertext with HMAC-SHA1, truncated to
//! its left 10 bytes.

use hmac::Hmac;
use sha1::Sha1;

pub type HmacSha1 = Hmac<Sha1>;
