//! Public-surface tests: evaluation-time equivalence, sensitivity, widths.

use pretty_assertions::{assert_eq, assert_ne};
use rustc_hash::FxHashSet;
use veilhash::{
    digest_bytes, digest_bytes_seeded, digest_cstr, digest_cstr_seeded, digest_wide,
    digest_wide_seeded, digest_wstr, digest_wstr_seeded, hash_name, static_digest, BUILD_SEED,
};

fn wide_units(name: &str) -> Vec<u16> {
    name.encode_utf16().collect()
}

fn wide_terminated(name: &str) -> Vec<u16> {
    name.encode_utf16().chain(std::iter::once(0)).collect()
}

#[test]
fn narrow_static_matches_dynamic() {
    for name in ["SomeString", "NtOpenProcess", "x", ""] {
        let mut terminated = name.as_bytes().to_vec();
        terminated.push(0);

        let fixed = digest_bytes(name.as_bytes());
        let scanned = unsafe { digest_cstr(terminated.as_ptr()) };
        assert_eq!(fixed, scanned, "narrow paths disagree for {name:?}");
    }
}

#[test]
fn wide_static_matches_dynamic() {
    for name in ["SomeString", "LdrLoadDll", ""] {
        let units = wide_units(name);
        let terminated = wide_terminated(name);

        let fixed = digest_wide(&units);
        let scanned = unsafe { digest_wstr(terminated.as_ptr()) };
        assert_eq!(fixed, scanned, "wide paths disagree for {name:?}");
    }
}

#[test]
fn seeded_paths_agree() {
    let terminated = b"SomeString\0";

    let fixed = digest_bytes_seeded(b"SomeString", 0x1);
    let scanned = unsafe { digest_cstr_seeded(terminated.as_ptr(), 0x1) };
    assert_eq!(fixed, scanned);

    let units = wide_units("SomeString");
    let wide_term = wide_terminated("SomeString");

    let wide_fixed = digest_wide_seeded(&units, 0x1);
    let wide_scanned = unsafe { digest_wstr_seeded(wide_term.as_ptr(), 0x1) };
    assert_eq!(wide_fixed, wide_scanned);
}

#[test]
fn macro_digest_matches_runtime() {
    const DIGEST: u64 = static_digest!("GetProcAddress");

    assert_eq!(DIGEST, hash_name("GetProcAddress"));
    assert_eq!(DIGEST, digest_bytes_seeded(b"GetProcAddress", BUILD_SEED));
}

#[test]
fn seed_isolation() {
    let units = wide_units("SomeString");

    assert_ne!(
        digest_bytes_seeded(b"SomeString", 0x1),
        digest_bytes_seeded(b"SomeString", 0x2)
    );
    assert_ne!(
        digest_wide_seeded(&units, 0x1),
        digest_wide_seeded(&units, 0x2)
    );
}

#[test]
fn single_character_sensitivity() {
    let base = b"NtCreateThreadEx";
    let base_digest = digest_bytes_seeded(base, 0x1);

    let mut seen = FxHashSet::default();
    seen.insert(base_digest);

    for pos in 0..base.len() {
        for sub in b'a'..=b'z' {
            if sub == base[pos] {
                continue;
            }
            let mut perturbed = base.to_vec();
            perturbed[pos] = sub;

            let digest = digest_bytes_seeded(&perturbed, 0x1);
            assert_ne!(digest, base_digest, "perturbation at {pos} collided with base");
            seen.insert(digest);
        }
    }

    let expected = 1 + base
        .iter()
        .map(|&c| 26 - (c.is_ascii_lowercase() as usize))
        .sum::<usize>();
    assert_eq!(seen.len(), expected, "perturbed digests collided with each other");
}

#[test]
fn long_input_no_panic() {
    let long: Vec<u8> = (0..10_000).map(|i| b'a' + (i % 26) as u8).collect();
    let mut terminated = long.clone();
    terminated.push(0);

    let fixed = digest_bytes(&long);
    let scanned = unsafe { digest_cstr(terminated.as_ptr()) };
    assert_eq!(fixed, scanned);
}
