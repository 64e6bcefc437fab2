#![no_main]

use libfuzzer_sys::fuzz_target;
use prime_shamir::{PRIME_32, PRIME_64, PrimeField, Share, reconstruct};

// Fuzzing target for reconstruct
//
// Arbitrary shares may carry zero or duplicate points, coordinates outside
// the field, or a threshold above the share count. Reconstruction has to
// answer with a Result every time and never panic.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    // First byte picks the field, second the threshold
    let modulus = match data[0] % 3 {
        0 => 257,
        1 => PRIME_32,
        _ => PRIME_64,
    };
    let field = match PrimeField::new(modulus) {
        Ok(field) => field,
        Err(_) => return,
    };
    let threshold = (data[1] % 16) as usize;

    // Remaining bytes become (x, y) pairs of 8 bytes each
    let shares: Vec<Share> = data[2..]
        .chunks_exact(16)
        .map(|chunk| {
            let mut x = [0u8; 8];
            let mut y = [0u8; 8];
            x.copy_from_slice(&chunk[..8]);
            y.copy_from_slice(&chunk[8..]);
            Share::new(u64::from_le_bytes(x), u64::from_le_bytes(y))
        })
        .collect();

    if let Ok(secret) = reconstruct(&field, &shares, threshold) {
        assert!(secret < field.modulus());
    }
});
