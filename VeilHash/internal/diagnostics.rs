//! Debug-only diagnostics for VeilHash.
//!
//! The digest paths never log or validate on their own; the only runtime
//! guard is a `debug_assert!` null check on the dynamic entry points, which
//! compiles out of release builds. `printdev!` is the module-tagged debug
//! print used by the bench binary.

/// Conditional debug-print macro for internal logging.
///
/// Only active in `debug_assertions` builds. Automatically tags the log
/// line with the last segment of the current `module_path!()`.
///
/// # Example
/// ```ignore
/// printdev!("build seed = 0x{:016X}", BUILD_SEED);
/// ```
/// Output:
/// ```text
/// [VH:VEILBENCH] build seed = 0x48E1F65A30010000
/// ```
#[macro_export]
macro_rules! printdev {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            let module_path = module_path!();
            let tag = module_path.split("::").last().unwrap_or("UNKNOWN");
            println!("[VH:{}] {}", tag.to_uppercase(), format!($($arg)*));
        }
    };
}
