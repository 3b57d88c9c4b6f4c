// src/crypto/ctr.rs

//! WinZip AES-CTR keystream.
//!
//! Not the standard big-endian CTR mode: WinZip encrypts a 16-byte
//! **little-endian** block counter that starts at 1, with no nonce, and XORs
//! the result into the data. Encryption and decryption are the same
//! operation, which the test archive builder relies on.

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128Enc, Aes192Enc, Aes256Enc, Block as AesBlock};

/// AES block cipher at the strength declared by the entry's extra field.
pub enum EntryCipher {
    Aes128(Aes128Enc),
    Aes192(Aes192Enc),
    Aes256(Aes256Enc),
}

impl EntryCipher {
    /// Build the cipher for a raw key of 16, 24, or 32 bytes.
    ///
    /// The key slice always comes out of
    /// [`derive_entry_key_material`](crate::crypto::derive_entry_key_material)
    /// sized by [`AesStrength`](crate::archive::AesStrength), so any other
    /// length is a bug, not an input condition.
    pub fn new(key: &[u8]) -> Self {
        match key.len() {
            16 => EntryCipher::Aes128(
                Aes128Enc::new_from_slice(key).expect("key is exactly 16 bytes"),
            ),
            24 => EntryCipher::Aes192(
                Aes192Enc::new_from_slice(key).expect("key is exactly 24 bytes"),
            ),
            32 => EntryCipher::Aes256(
                Aes256Enc::new_from_slice(key).expect("key is exactly 32 bytes"),
            ),
            n => unreachable!("AES strength validated in extra-field parse, got {n}-byte key"),
        }
    }

    #[inline(always)]
    fn encrypt_block(&self, block: &mut AesBlock) {
        match self {
            EntryCipher::Aes128(c) => c.encrypt_block(block),
            EntryCipher::Aes192(c) => c.encrypt_block(block),
            EntryCipher::Aes256(c) => c.encrypt_block(block),
        }
    }
}

/// XOR the WinZip CTR keystream into `data` in place.
#[inline(always)]
pub fn apply_keystream(cipher: &EntryCipher, data: &mut [u8]) {
    let mut counter: u128 = 1;
    for chunk in data.chunks_mut(16) {
        let mut block = AesBlock::from(counter.to_le_bytes());
        cipher.encrypt_block(&mut block);
        for (byte, key_byte) in chunk.iter_mut().zip(block.iter()) {
            *byte ^= key_byte;
        }
        counter = counter.wrapping_add(1);
    }
}
