//! VeilHash — compile-time & runtime string hashing for symbol obfuscation.
//!
//! Replaces literal symbol names with opaque 64-bit digests: hash the name
//! in a constant context so only the number lands in the artifact, then
//! compare it against digests computed at runtime from whatever text turns
//! up (export tables, loader structures, user input).
//!
//! - Narrow (`u8`) and wide (`u16`) code units
//! - One mixing core shared by both evaluation times, so the two paths
//!   always agree within a single build
//! - Build-unique seed: digests shift on every rebuild, so harvested
//!   constants do not transfer between artifacts

mod internal;

pub use internal::crypto::hash::{
    digest_bytes, digest_bytes_seeded, digest_cstr, digest_cstr_seeded, digest_wide,
    digest_wide_seeded, digest_wstr, digest_wstr_seeded, hash_name,
};
pub use internal::seed::BUILD_SEED;
