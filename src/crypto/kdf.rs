// src/crypto/kdf.rs

use crate::aliases::{EntryKeyMaterial, ShareCode};
use crate::consts::WINZIP_PBKDF2_ITERATIONS;
use crate::error::EkycError;

use hmac::Hmac;
use secure_gate::{RevealSecret, RevealSecretMut};
use pbkdf2::pbkdf2;
use sha1::Sha1;

/// Derive WinZip AES entry key material directly into a secure buffer.
///
/// PBKDF2-HMAC-SHA1 with the iteration count fixed by the WinZip AE spec
/// (1000). The output layout is `AES key ‖ HMAC-SHA1 key ‖ password-verify
/// value (2 bytes)`, so `material_len` must be `2 * key_len + 2` for the
/// entry's AES strength; only the first `material_len` bytes of `out` are
/// written.
#[inline(always)]
pub fn derive_entry_key_material(
    share_code: &ShareCode,     // &Dynamic<String>
    salt: &[u8],                // public, read from the entry body
    material_len: usize,        // 2 * key_len + 2
    out: &mut EntryKeyMaterial, // &mut Fixed<[u8; 66]>
) -> Result<(), EkycError> {
    if share_code.expose_secret().is_empty() {
        return Err(EkycError::EmptyShareCode);
    }

    pbkdf2::<Hmac<Sha1>>(
        share_code.expose_secret().as_bytes(),
        salt,
        WINZIP_PBKDF2_ITERATIONS,
        &mut out.expose_secret_mut()[..material_len],
    )
    .map_err(|_| EkycError::DecryptionFailed)?;

    Ok(())
}
