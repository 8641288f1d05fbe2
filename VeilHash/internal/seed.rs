//! Per-build seed material baked in by the build script.

/// Raw seed bytes emitted into `OUT_DIR` by `build.rs`.
const SEED_BYTES: &[u8; 8] = include_bytes!(concat!(env!("OUT_DIR"), "/seed.dat"));

/// Build-unique mixing seed.
///
/// Identical for every digest computed within one build, static or dynamic,
/// and expected to differ between builds. A harvested digest therefore does
/// not transfer to the next artifact. Baked in as a `const` so it remains
/// usable from constant-expression contexts.
pub const BUILD_SEED: u64 = u64::from_ne_bytes(*SEED_BYTES);
