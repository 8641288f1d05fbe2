use std::time::Instant;

use veilhash::{digest_wstr, hash_name, static_digest};

/// Export names representative of a resolver workload.
const NAMES: [&str; 8] = [
    "NtAllocateVirtualMemory",
    "NtProtectVirtualMemory",
    "NtQueryVirtualMemory",
    "NtWriteVirtualMemory",
    "NtCreateThreadEx",
    "LdrLoadDll",
    "LdrGetProcedureAddress",
    "RtlInitUnicodeString",
];

/// Digest every runtime probe is compared against. The name itself never
/// leaves constant evaluation.
const TARGET: u64 = static_digest!("NtQueryVirtualMemory");

/// Entry point for the VeilHash digest benchmarking executable.
///
/// Demonstrates:
/// - Constant-folded digests via `static_digest!`
/// - Runtime digests over the same names via `hash_name`
/// - Timing comparison for narrow and wide dynamic scans
fn main() {
    veilhash::printdev!("build seed = 0x{:016X}", veilhash::BUILD_SEED);

    const ROUNDS: usize = 100_000;

    // Narrow runtime pass over the corpus
    let start_n = Instant::now();
    let mut checksum_n = 0u64;
    for _ in 0..ROUNDS {
        for name in NAMES {
            checksum_n = checksum_n.wrapping_add(hash_name(name));
        }
    }
    let narrow_elapsed = start_n.elapsed();

    // Wide runtime pass, zero-terminated UTF-16 buffers
    let wide: Vec<Vec<u16>> = NAMES
        .iter()
        .map(|n| n.encode_utf16().chain(std::iter::once(0)).collect())
        .collect();

    let start_w = Instant::now();
    let mut checksum_w = 0u64;
    for _ in 0..ROUNDS {
        for units in &wide {
            checksum_w = checksum_w.wrapping_add(unsafe { digest_wstr(units.as_ptr()) });
        }
    }
    let wide_elapsed = start_w.elapsed();

    let probe = hash_name("NtQueryVirtualMemory");

    println!("================= DIGEST BENCH =================");
    println!("[hash_name / narrow]");
    println!("  → Names Hashed     : {}", ROUNDS * NAMES.len());
    println!("  → Checksum         : 0x{:016X}", checksum_n);
    println!("  → Elapsed Time     : {:?}", narrow_elapsed);
    println!();

    println!("[digest_wstr / wide]");
    println!("  → Names Hashed     : {}", ROUNDS * NAMES.len());
    println!("  → Checksum         : 0x{:016X}", checksum_w);
    println!("  → Elapsed Time     : {:?}", wide_elapsed);
    println!();

    println!("[static vs runtime]");
    println!("  → Baked Digest     : 0x{:016X}", TARGET);
    println!("  → Runtime Digest   : 0x{:016X}", probe);
    println!("  → Match            : {}", probe == TARGET);
    println!("================================================");
}
