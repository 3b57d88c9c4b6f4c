// src/lib.rs

pub mod aliases;
pub mod archive;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod error;
pub mod extractor;
pub mod matcher;
pub mod utils;
pub mod verdict;
pub mod verify;

// High-level API — this is what 99% of users import
pub use verify::{verify, VerifyOptions};
pub use error::EkycError;
pub use verdict::{Verdict, VerdictStatus};

// Stage APIs — public so hosts can run individual stages (e.g. extract-only
// preview flows) and so the pieces stay independently testable
pub use aliases::ShareCode;
pub use decryptor::decrypt;
pub use extractor::{extract, ExtractedAttributes};
pub use matcher::{match_attributes, token_sort_similarity, ExpectedAttributes, MatchResult};
pub use verdict::decide;

pub use utils::sha256_hex;
