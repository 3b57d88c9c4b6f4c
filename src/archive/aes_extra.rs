//! src/archive/aes_extra.rs
//! WinZip AES extra field (header ID 0x9901) parsing.

use crate::archive::reader::le_u16;
use crate::consts::{AES_EXTRA_FIELD_ID, AES_EXTRA_FIELD_LEN, AES_VENDOR_ID};
use crate::error::EkycError;

/// AES key strength declared by the entry's extra field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AesStrength {
    Aes128,
    Aes192,
    Aes256,
}

impl AesStrength {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(AesStrength::Aes128),
            2 => Some(AesStrength::Aes192),
            3 => Some(AesStrength::Aes256),
            _ => None,
        }
    }

    /// KDF salt length for this strength (half the key length).
    pub fn salt_len(self) -> usize {
        self.key_len() / 2
    }

    /// AES key length in bytes.
    pub fn key_len(self) -> usize {
        match self {
            AesStrength::Aes128 => 16,
            AesStrength::Aes192 => 24,
            AesStrength::Aes256 => 32,
        }
    }

    /// Total PBKDF2 output: AES key + HMAC key + 2 password-verify bytes.
    pub fn material_len(self) -> usize {
        2 * self.key_len() + 2
    }
}

/// Parameters of a WinZip AES entry, decoded from its extra field.
#[derive(Clone, Copy, Debug)]
pub struct AesEntrySpec {
    pub strength: AesStrength,
    /// The real compression method hidden behind method code 99.
    pub real_method: u16,
}

/// Walk the extra-field TLV list and decode the 0x9901 record.
///
/// Method-99 entries without a well-formed AES extra field are a container
/// defect, reported before any key material is derived.
pub fn parse_aes_extra_field(extra: &[u8]) -> Result<AesEntrySpec, EkycError> {
    let mut offset = 0;
    while offset + 4 <= extra.len() {
        let id = le_u16(extra, offset)?;
        let size = le_u16(extra, offset + 2)? as usize;
        let payload = extra
            .get(offset + 4..offset + 4 + size)
            .ok_or_else(|| EkycError::from("truncated extra field"))?;

        if id == AES_EXTRA_FIELD_ID {
            if payload.len() < AES_EXTRA_FIELD_LEN {
                return Err("truncated AES extra field".into());
            }
            // Vendor version 1 = AE-1, 2 = AE-2; both decrypt identically.
            let vendor_version = le_u16(payload, 0)?;
            if vendor_version != 1 && vendor_version != 2 {
                return Err(EkycError::Archive(format!(
                    "unsupported AES vendor version: {vendor_version}"
                )));
            }
            if payload[2..4] != AES_VENDOR_ID {
                return Err("bad AES extra field vendor id".into());
            }
            let strength = AesStrength::from_code(payload[4]).ok_or_else(|| {
                EkycError::Archive(format!("invalid AES strength code: {}", payload[4]))
            })?;
            let real_method = le_u16(payload, 5)?;
            return Ok(AesEntrySpec {
                strength,
                real_method,
            });
        }

        offset += 4 + size;
    }
    Err("encrypted entry is missing its AES extra field".into())
}
