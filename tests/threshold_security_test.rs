use prime_shamir::{PRIME_32, PrimeField, ShamirError, ShamirShare, generate_shares, reconstruct};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

#[test]
fn test_below_threshold_is_rejected() {
    let field = PrimeField::new(PRIME_32).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(1);

    for threshold in 2..=8 {
        let shares = generate_shares(&field, threshold + 2, threshold, 99, &mut rng).unwrap();
        assert_eq!(
            reconstruct(&field, &shares[..threshold - 1], threshold),
            Err(ShamirError::InsufficientShares {
                needed: threshold,
                got: threshold - 1
            })
        );
    }
}

#[test]
fn test_below_threshold_does_not_leak_secret() {
    // Interpolating t - 1 shares as if they were enough lands on an
    // unrelated value that changes with every fresh polynomial
    let field = PrimeField::new(PRIME_32).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let secret = 69;
    let threshold = 3;
    let trials = 64;

    let mut hits = 0;
    let mut guesses = Vec::with_capacity(trials);
    for _ in 0..trials {
        let shares = generate_shares(&field, 5, threshold, secret, &mut rng).unwrap();
        let guess = reconstruct(&field, &shares[1..threshold], threshold - 1).unwrap();
        if guess == secret {
            hits += 1;
        }
        guesses.push(guess);
    }

    assert!(hits < trials, "t - 1 shares recovered the secret every time");
    guesses.sort_unstable();
    guesses.dedup();
    assert!(guesses.len() > trials / 2);
}

#[test]
fn test_single_share_is_uniform_across_secrets() {
    // With t = 2 the share at x = 1 is secret + a for uniform a, so in a small
    // field every residue shows up for either secret
    let field = PrimeField::new(7).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(3);

    for secret in [0, 5] {
        let mut seen = [false; 7];
        for _ in 0..500 {
            let shares = generate_shares(&field, 2, 2, secret, &mut rng).unwrap();
            seen[shares[0].y as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "secret {secret}: {seen:?}");
    }
}

#[test]
fn test_duplicate_points_never_return_a_value() {
    let mut shamir = ShamirShare::builder(6, 3).with_seed(4).build().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let shares = shamir.split(1234).unwrap();

    for _ in 0..20 {
        let mut subset = shares[..4].to_vec();
        let i = rng.random_range(0..subset.len());
        let mut j = rng.random_range(0..subset.len());
        if i == j {
            j = (j + 1) % subset.len();
        }
        subset[j].x = subset[i].x;
        subset[j].y = rng.random_range(0..shamir.field().modulus());

        assert_eq!(
            shamir.reconstruct(&subset),
            Err(ShamirError::DuplicatePoint(subset[i].x))
        );
    }
}
