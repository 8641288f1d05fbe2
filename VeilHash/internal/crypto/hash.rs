//! Compile-time and runtime string digests.
//!
//! One mixing core, two evaluation times. The `digest_bytes`/`digest_wide`
//! slice functions are `const fn` and fold to a bare constant wherever the
//! input is known at the call site; the cursor functions scan a
//! zero-terminated sequence on the fly. Every entry point feeds the same
//! `mix`/`avalanche` routines, so a digest baked into the binary always
//! matches the digest of the same text computed at runtime within that
//! build.

use crate::internal::seed::BUILD_SEED;

/// Multiplier of the finalization pass.
const AVALANCHE_MULT: u64 = 0x27D4_EB2D;

/// Folds one character unit into the running state.
#[inline(always)]
const fn mix(hash: u64, unit: u64) -> u64 {
    hash.wrapping_mul(31) ^ unit
}

/// Final shift/multiply/shift pass spreading bit influence across the digest.
#[inline(always)]
const fn avalanche(mut hash: u64) -> u64 {
    hash ^= hash >> 16;
    hash = hash.wrapping_mul(AVALANCHE_MULT);
    hash ^= hash >> 16;
    hash
}

/// Digest of a byte sequence under an explicit seed.
///
/// Consumes the full slice, excluding a single trailing zero byte if one is
/// present (so a C-style literal like `b"name\0"` digests the same as
/// `b"name"`). Interior zero bytes are mixed like any other unit.
pub const fn digest_bytes_seeded(s: &[u8], seed: u64) -> u64 {
    let mut len = s.len();
    if len > 0 && s[len - 1] == 0 {
        len -= 1;
    }

    let mut hash = seed;
    let mut i = 0;
    while i < len {
        hash = mix(hash, s[i] as u64);
        i += 1;
    }
    avalanche(hash)
}

/// Digest of a wide (UTF-16 code unit) sequence under an explicit seed.
///
/// Each unit is mixed as its full unsigned 16-bit value, zero-extended.
/// Trailing-terminator handling matches [`digest_bytes_seeded`].
pub const fn digest_wide_seeded(s: &[u16], seed: u64) -> u64 {
    let mut len = s.len();
    if len > 0 && s[len - 1] == 0 {
        len -= 1;
    }

    let mut hash = seed;
    let mut i = 0;
    while i < len {
        hash = mix(hash, s[i] as u64);
        i += 1;
    }
    avalanche(hash)
}

/// Digest of a byte sequence under the build seed.
///
/// Usable in constant contexts; pair with [`static_digest!`](crate::static_digest)
/// to guarantee the literal never survives into the artifact.
#[inline(always)]
pub const fn digest_bytes(s: &[u8]) -> u64 {
    digest_bytes_seeded(s, BUILD_SEED)
}

/// Digest of a wide sequence under the build seed.
#[inline(always)]
pub const fn digest_wide(s: &[u16]) -> u64 {
    digest_wide_seeded(s, BUILD_SEED)
}

/// Digest of a zero-terminated byte sequence under an explicit seed.
///
/// Stops at the first zero byte; the terminator itself is not mixed, so the
/// result equals [`digest_bytes_seeded`] over the same text.
///
/// # Safety
/// - `cursor` must point to initialized bytes ending in a zero byte
///   reachable by linear scan. An unterminated sequence is undefined
///   behavior; no bound is checked.
#[inline(always)]
pub unsafe fn digest_cstr_seeded(mut cursor: *const u8, seed: u64) -> u64 {
    debug_assert!(!cursor.is_null(), "null digest cursor");

    let mut hash = seed;
    while *cursor != 0 {
        hash = mix(hash, *cursor as u64);
        cursor = cursor.add(1);
    }
    avalanche(hash)
}

/// Digest of a zero-terminated wide sequence under an explicit seed.
///
/// # Safety
/// - `cursor` must point to initialized, aligned `u16` units ending in a
///   zero unit reachable by linear scan. An unterminated sequence is
///   undefined behavior; no bound is checked.
#[inline(always)]
pub unsafe fn digest_wstr_seeded(mut cursor: *const u16, seed: u64) -> u64 {
    debug_assert!(!cursor.is_null(), "null digest cursor");

    let mut hash = seed;
    while *cursor != 0 {
        hash = mix(hash, *cursor as u64);
        cursor = cursor.add(1);
    }
    avalanche(hash)
}

/// Digest of a zero-terminated byte sequence under the build seed.
///
/// # Safety
/// - Same contract as [`digest_cstr_seeded`].
#[inline(always)]
pub unsafe fn digest_cstr(cursor: *const u8) -> u64 {
    digest_cstr_seeded(cursor, BUILD_SEED)
}

/// Digest of a zero-terminated wide sequence under the build seed.
///
/// # Safety
/// - Same contract as [`digest_wstr_seeded`].
#[inline(always)]
pub unsafe fn digest_wstr(cursor: *const u16) -> u64 {
    digest_wstr_seeded(cursor, BUILD_SEED)
}

/// Runtime digest of a name under the build seed.
#[inline(always)]
pub fn hash_name(name: &str) -> u64 {
    digest_bytes_seeded(name.as_bytes(), BUILD_SEED)
}

/// Digests a string literal in a forced constant context.
///
/// Expands to a `const`, so the literal participates only in constant
/// evaluation and its plaintext is not carried into the binary.
///
/// # Example
/// ```ignore
/// const TARGET: u64 = static_digest!("NtOpenProcess");
///
/// let probe = unsafe { digest_cstr(export_name_ptr) };
/// if probe == TARGET { /* resolved */ }
/// ```
#[macro_export]
macro_rules! static_digest {
    ($s:expr) => {{
        const DIGEST: u64 = $crate::digest_bytes($s.as_bytes());
        DIGEST
    }};
}
