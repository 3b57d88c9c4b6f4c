//! tests/common.rs
//! Shared constants and a minimal WinZip AES ZIP writer for round-trip tests.
//!
//! The writer produces the same entry framing `pyzipper`-style tooling emits:
//! AE-2 extra field, `salt ‖ password-verify ‖ ciphertext ‖ auth code`
//! bodies, CRC 0. CTR encryption reuses the crate's own keystream (the
//! operation is its own inverse), so round-trips exercise the real
//! decryption path end to end.

use ekyc_verify_rs::aliases::{EntryKeyMaterial, ShareCode};
use ekyc_verify_rs::archive::AesStrength;
use ekyc_verify_rs::crypto::{apply_keystream, derive_entry_key_material, EntryCipher, HmacSha1};

use flate2::write::DeflateEncoder;
use flate2::Compression;
use hmac::Mac;
use secure_gate::RevealSecret;
use std::io::Write;

/// Share code used by most test archives.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_SHARE_CODE: &str = "1234";

/// A representative offline eKYC record.
#[allow(dead_code)] // Used across multiple test files
pub const SAMPLE_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<KycRes>
  <UidData>
    <Poi>
      <Name>Jane Doe</Name>
    </Poi>
    <MaskedAadhaar>XXXX-XXXX-1234</MaskedAadhaar>
  </UidData>
</KycRes>"#;

/// One entry to place in a test archive.
pub struct EntrySpec<'a> {
    pub name: &'a str,
    pub data: &'a [u8],
    pub encrypted: bool,
    pub deflated: bool,
}

/// The single-entry archive most tests start from: AES-256, stored.
#[allow(dead_code)] // Used across multiple test files
pub fn sample_archive(share_code: &str) -> Vec<u8> {
    build_archive(
        &[EntrySpec {
            name: "ekyc.xml",
            data: SAMPLE_XML,
            encrypted: true,
            deflated: false,
        }],
        share_code,
        AesStrength::Aes256,
    )
}

/// Build a complete ZIP archive from entry specs.
#[allow(dead_code)] // Used across multiple test files
pub fn build_archive(entries: &[EntrySpec], share_code: &str, strength: AesStrength) -> Vec<u8> {
    let mut out = Vec::new();
    let mut central = Vec::new();

    for spec in entries {
        let local_offset = out.len() as u32;
        let stored = if spec.deflated {
            deflate(spec.data)
        } else {
            spec.data.to_vec()
        };
        let real_method: u16 = if spec.deflated { 8 } else { 0 };
        let (method, flags, body, extra) = if spec.encrypted {
            (
                99u16,
                1u16,
                encrypt_entry_body(&stored, share_code, strength),
                aes_extra_field(strength, real_method),
            )
        } else {
            (real_method, 0u16, stored, Vec::new())
        };

        // Local file header
        push_u32(&mut out, 0x0403_4b50);
        push_u16(&mut out, 51); // version needed
        push_u16(&mut out, flags);
        push_u16(&mut out, method);
        push_u16(&mut out, 0); // mod time
        push_u16(&mut out, 0); // mod date
        push_u32(&mut out, 0); // crc, 0 per AE-2
        push_u32(&mut out, body.len() as u32);
        push_u32(&mut out, spec.data.len() as u32);
        push_u16(&mut out, spec.name.len() as u16);
        push_u16(&mut out, extra.len() as u16);
        out.extend_from_slice(spec.name.as_bytes());
        out.extend_from_slice(&extra);
        out.extend_from_slice(&body);

        // Central directory header
        push_u32(&mut central, 0x0201_4b50);
        push_u16(&mut central, 51); // version made by
        push_u16(&mut central, 51); // version needed
        push_u16(&mut central, flags);
        push_u16(&mut central, method);
        push_u16(&mut central, 0); // mod time
        push_u16(&mut central, 0); // mod date
        push_u32(&mut central, 0); // crc
        push_u32(&mut central, body.len() as u32);
        push_u32(&mut central, spec.data.len() as u32);
        push_u16(&mut central, spec.name.len() as u16);
        push_u16(&mut central, extra.len() as u16);
        push_u16(&mut central, 0); // comment len
        push_u16(&mut central, 0); // disk number
        push_u16(&mut central, 0); // internal attrs
        push_u32(&mut central, 0); // external attrs
        push_u32(&mut central, local_offset);
        central.extend_from_slice(spec.name.as_bytes());
        central.extend_from_slice(&extra);
    }

    let cd_offset = out.len() as u32;
    let cd_size = central.len() as u32;
    out.extend_from_slice(&central);

    // End of central directory
    push_u32(&mut out, 0x0605_4b50);
    push_u16(&mut out, 0); // this disk
    push_u16(&mut out, 0); // cd start disk
    push_u16(&mut out, entries.len() as u16);
    push_u16(&mut out, entries.len() as u16);
    push_u32(&mut out, cd_size);
    push_u32(&mut out, cd_offset);
    push_u16(&mut out, 0); // comment len
    out
}

/// Encrypt one entry body the WinZip AE way:
/// `salt ‖ password-verify (2) ‖ ciphertext ‖ auth code (10)`.
#[allow(dead_code)] // Used across multiple test files
pub fn encrypt_entry_body(stored: &[u8], share_code: &str, strength: AesStrength) -> Vec<u8> {
    let salt = vec![0xA5u8; strength.salt_len()];
    let code = ShareCode::new(share_code.to_string());
    let mut material = EntryKeyMaterial::new([0u8; 66]);
    derive_entry_key_material(&code, &salt, strength.material_len(), &mut material).unwrap();
    let km = material.expose_secret();
    let key_len = strength.key_len();

    let cipher = EntryCipher::new(&km[..key_len]);
    let mut ciphertext = stored.to_vec();
    apply_keystream(&cipher, &mut ciphertext);

    let mut mac = <HmacSha1 as Mac>::new_from_slice(&km[key_len..2 * key_len]).unwrap();
    mac.update(&ciphertext);
    let tag = mac.finalize().into_bytes();

    let mut body = salt;
    body.extend_from_slice(&km[2 * key_len..2 * key_len + 2]);
    body.extend_from_slice(&ciphertext);
    body.extend_from_slice(&tag[..10]);
    body
}

fn aes_extra_field(strength: AesStrength, real_method: u16) -> Vec<u8> {
    let strength_code: u8 = match strength {
        AesStrength::Aes128 => 1,
        AesStrength::Aes192 => 2,
        AesStrength::Aes256 => 3,
    };
    let mut extra = Vec::with_capacity(11);
    push_u16(&mut extra, 0x9901);
    push_u16(&mut extra, 7);
    push_u16(&mut extra, 2); // AE-2
    extra.extend_from_slice(b"AE");
    extra.push(strength_code);
    push_u16(&mut extra, real_method);
    extra
}

fn deflate(data: &[u8]) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}
