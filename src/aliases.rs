//! # Secure-Gate Type Aliases
//!
//! Type aliases for secret material using [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! All types zeroize on drop and require explicit `.expose_secret()` /
//! `.expose_secret_mut()` access, so no secret leaks through `Debug`, clones,
//! or forgotten buffers.
//!
//! - [`ShareCode`] — the caller-supplied archive password
//! - [`EntryKeyMaterial`] — PBKDF2 output for one entry
//!   (AES key ‖ HMAC key ‖ password-verify value)

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(pub ShareCode, String);

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size secrets
// ─────────────────────────────────────────────────────────────────────────────

// Largest derivation: AES-256 → 32 + 32 + 2 bytes. Weaker strengths use a
// prefix of the buffer.
fixed_alias!(pub EntryKeyMaterial, 66);
