//! src/decryptor/decrypt.rs
//! WinZip AES record-entry decryption.

use crate::aliases::{EntryKeyMaterial, ShareCode};
use crate::archive::{parse_aes_extra_field, AesEntrySpec, ZipArchive};
use crate::consts::{
    AUTH_CODE_LEN, METHOD_AES, METHOD_DEFLATED, METHOD_STORED, PASSWORD_VERIFY_LEN,
};
use crate::crypto::{apply_keystream, derive_entry_key_material, EntryCipher, HmacSha1};
use crate::error::EkycError;

use flate2::read::DeflateDecoder;
use hmac::Mac;
use secure_gate::RevealSecret;
use std::io::Read;

const FLAG_ENCRYPTED: u16 = 0x0001;

/// Decrypt an offline eKYC archive and return the embedded record's bytes.
///
/// Selects the first entry whose name case-insensitively ends with `.xml`
/// and decrypts only that one. Unencrypted record entries (stored or
/// deflated) are read as-is, with the share code ignored, matching what the
/// UIDAI export tooling's readers do.
///
/// # Errors
///
/// - [`EkycError::EmptyShareCode`] — empty share code, decryption not attempted
/// - [`EkycError::Archive`] — the bytes are not a usable ZIP container
/// - [`EkycError::NoRecordFound`] — no `.xml` entry exists
/// - [`EkycError::DecryptionFailed`] — wrong share code **or** corrupted
///   entry body; deliberately indistinguishable so this function cannot be
///   used as a password oracle
pub fn decrypt(archive_bytes: &[u8], share_code: &ShareCode) -> Result<Vec<u8>, EkycError> {
    if share_code.expose_secret().is_empty() {
        return Err(EkycError::EmptyShareCode);
    }

    let archive = ZipArchive::parse(archive_bytes)?;
    let entry = archive.find_record_entry().ok_or(EkycError::NoRecordFound)?;
    let body = archive.entry_data(entry)?;

    match entry.method {
        METHOD_AES => {
            let spec = parse_aes_extra_field(&entry.extra)?;
            let compressed = decrypt_aes_entry(body, share_code, spec)?;
            decompress(&compressed, spec.real_method)
        }
        method if entry.flags & FLAG_ENCRYPTED != 0 => Err(EkycError::Archive(format!(
            "unsupported encryption scheme (method {method})"
        ))),
        method => decompress(body, method),
    }
}

/// Decrypt one WinZip AES entry body:
/// `salt ‖ password-verify (2) ‖ ciphertext ‖ auth code (10)`.
fn decrypt_aes_entry(
    body: &[u8],
    share_code: &ShareCode,
    spec: AesEntrySpec,
) -> Result<Vec<u8>, EkycError> {
    let salt_len = spec.strength.salt_len();
    if body.len() < salt_len + PASSWORD_VERIFY_LEN + AUTH_CODE_LEN {
        // Truncated body is corruption, folded into the opaque failure.
        return Err(EkycError::DecryptionFailed);
    }
    let (salt, rest) = body.split_at(salt_len);
    let (stored_verify, rest) = rest.split_at(PASSWORD_VERIFY_LEN);
    let (ciphertext, auth_code) = rest.split_at(rest.len() - AUTH_CODE_LEN);

    // Key material — secure buffer from birth, zeroized on drop
    let mut material = EntryKeyMaterial::new([0u8; 66]);
    derive_entry_key_material(share_code, salt, spec.strength.material_len(), &mut material)?;

    let key_len = spec.strength.key_len();
    let km = material.expose_secret();
    let aes_key = &km[..key_len];
    let mac_key = &km[key_len..2 * key_len];
    let derived_verify = &km[2 * key_len..2 * key_len + PASSWORD_VERIFY_LEN];

    if derived_verify != stored_verify {
        return Err(EkycError::DecryptionFailed);
    }

    // WinZip AE authenticates the ciphertext, truncated-left to 10 bytes.
    let mut mac = <HmacSha1 as Mac>::new_from_slice(mac_key)
        .expect("HMAC-SHA1 accepts any key length");
    mac.update(ciphertext);
    mac.verify_truncated_left(auth_code)
        .map_err(|_| EkycError::DecryptionFailed)?;

    let cipher = EntryCipher::new(aes_key);
    let mut plaintext = ciphertext.to_vec();
    apply_keystream(&cipher, &mut plaintext);
    Ok(plaintext)
}

fn decompress(data: &[u8], method: u16) -> Result<Vec<u8>, EkycError> {
    match method {
        METHOD_STORED => Ok(data.to_vec()),
        METHOD_DEFLATED => {
            let mut out = Vec::new();
            DeflateDecoder::new(data)
                .read_to_end(&mut out)
                .map_err(|_| EkycError::from("corrupted deflate stream"))?;
            Ok(out)
        }
        method => Err(EkycError::Archive(format!(
            "unsupported compression method: {method}"
        ))),
    }
}
