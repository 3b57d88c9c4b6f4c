//! src/archive/reader.rs
//! End-of-central-directory scan, central directory walk, local header parse.

use crate::consts::{
    CENTRAL_DIR_HEADER_LEN, CENTRAL_DIR_HEADER_SIG, EOCD_MIN_LEN, EOCD_SIG, LOCAL_FILE_HEADER_LEN,
    LOCAL_FILE_HEADER_SIG, MAX_COMMENT_LEN, RECORD_EXTENSION,
};
use crate::error::EkycError;

/// One central directory entry, with just the fields the decryptor needs.
pub struct CentralEntry {
    /// Entry name, lossily decoded (selection only compares the extension).
    pub name: String,
    /// General purpose bit flags. Bit 0 marks an encrypted entry.
    pub flags: u16,
    /// Compression method; 99 marks a WinZip AES entry.
    pub method: u16,
    /// Size of the entry body as stored, including any AES framing.
    pub compressed_size: u32,
    /// Extra field bytes, holding the AES extra field for method-99 entries.
    pub extra: Vec<u8>,
    local_header_offset: u32,
}

/// A parsed ZIP container borrowing the caller's archive bytes.
pub struct ZipArchive<'a> {
    data: &'a [u8],
    entries: Vec<CentralEntry>,
}

impl<'a> ZipArchive<'a> {
    /// Parse the container structure without touching any entry body.
    pub fn parse(data: &'a [u8]) -> Result<Self, EkycError> {
        let eocd = find_eocd(data)?;

        let total_entries = le_u16(data, eocd + 10)? as usize;
        let cd_offset = le_u32(data, eocd + 16)? as usize;
        if total_entries == 0xFFFF || cd_offset == 0xFFFF_FFFF {
            return Err("Zip64 archives are not supported".into());
        }
        let disk = le_u16(data, eocd + 4)?;
        if disk != 0 {
            return Err("multi-disk archives are not supported".into());
        }

        let mut entries = Vec::with_capacity(total_entries);
        let mut offset = cd_offset;
        for _ in 0..total_entries {
            let (entry, next) = parse_central_entry(data, offset)?;
            entries.push(entry);
            offset = next;
        }

        Ok(Self { data, entries })
    }

    /// First entry whose name case-insensitively ends with `.xml`.
    pub fn find_record_entry(&self) -> Option<&CentralEntry> {
        self.entries
            .iter()
            .find(|e| e.name.to_lowercase().ends_with(RECORD_EXTENSION))
    }

    /// Resolve an entry's raw (still encrypted/compressed) body.
    ///
    /// Reads the entry's local file header to skip its variable-length name
    /// and extra field; the body size comes from the central directory, which
    /// is authoritative even when the writer deferred sizes to a data
    /// descriptor.
    pub fn entry_data(&self, entry: &CentralEntry) -> Result<&'a [u8], EkycError> {
        let header = entry.local_header_offset as usize;
        if le_u32(self.data, header)? != LOCAL_FILE_HEADER_SIG {
            return Err("bad local file header signature".into());
        }
        let name_len = le_u16(self.data, header + 26)? as usize;
        let extra_len = le_u16(self.data, header + 28)? as usize;

        let start = header + LOCAL_FILE_HEADER_LEN + name_len + extra_len;
        let end = start + entry.compressed_size as usize;
        self.data
            .get(start..end)
            .ok_or_else(|| "entry data extends past end of archive".into())
    }
}

fn parse_central_entry(data: &[u8], offset: usize) -> Result<(CentralEntry, usize), EkycError> {
    if le_u32(data, offset)? != CENTRAL_DIR_HEADER_SIG {
        return Err("bad central directory header signature".into());
    }

    let flags = le_u16(data, offset + 8)?;
    let method = le_u16(data, offset + 10)?;
    let compressed_size = le_u32(data, offset + 20)?;
    let name_len = le_u16(data, offset + 28)? as usize;
    let extra_len = le_u16(data, offset + 30)? as usize;
    let comment_len = le_u16(data, offset + 32)? as usize;
    let local_header_offset = le_u32(data, offset + 42)?;
    if compressed_size == 0xFFFF_FFFF || local_header_offset == 0xFFFF_FFFF {
        return Err("Zip64 archives are not supported".into());
    }

    let name_start = offset + CENTRAL_DIR_HEADER_LEN;
    let name_bytes = data
        .get(name_start..name_start + name_len)
        .ok_or_else(|| EkycError::from("truncated central directory entry"))?;
    let extra_start = name_start + name_len;
    let extra = data
        .get(extra_start..extra_start + extra_len)
        .ok_or_else(|| EkycError::from("truncated central directory entry"))?
        .to_vec();

    let entry = CentralEntry {
        name: String::from_utf8_lossy(name_bytes).into_owned(),
        flags,
        method,
        compressed_size,
        extra,
        local_header_offset,
    };
    Ok((entry, extra_start + extra_len + comment_len))
}

/// Scan backwards from the tail for the EOCD record signature.
///
/// The record is 22 bytes plus a trailing comment of up to 65535 bytes, so
/// the scan window is bounded regardless of archive size.
fn find_eocd(data: &[u8]) -> Result<usize, EkycError> {
    if data.len() < EOCD_MIN_LEN {
        return Err("archive too small to be a ZIP file".into());
    }
    let floor = data
        .len()
        .saturating_sub(EOCD_MIN_LEN + MAX_COMMENT_LEN);
    let mut offset = data.len() - EOCD_MIN_LEN;
    loop {
        if le_u32(data, offset)? == EOCD_SIG {
            return Ok(offset);
        }
        if offset == floor {
            return Err("end of central directory record not found".into());
        }
        offset -= 1;
    }
}

pub(crate) fn le_u16(data: &[u8], offset: usize) -> Result<u16, EkycError> {
    data.get(offset..offset + 2)
        .map(|b| u16::from_le_bytes([b[0], b[1]]))
        .ok_or_else(|| "unexpected end of archive".into())
}

pub(crate) fn le_u32(data: &[u8], offset: usize) -> Result<u32, EkycError> {
    data.get(offset..offset + 4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or_else(|| "unexpected end of archive".into())
}
