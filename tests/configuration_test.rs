use prime_shamir::{Config, PRIME_32, PRIME_64, ShamirError, ShamirShare, SplitMode};

#[test]
fn test_builder_defaults() {
    let mut shamir = ShamirShare::builder(5, 3).build().unwrap();
    assert_eq!(shamir.field().modulus(), PRIME_64);

    let shares = shamir.split(PRIME_64 - 1).unwrap();
    assert_eq!(shamir.reconstruct(&shares[..3]).unwrap(), PRIME_64 - 1);
}

#[test]
fn test_builder_with_custom_modulus() {
    let config = Config::new().with_modulus(PRIME_32).unwrap();
    let mut shamir = ShamirShare::builder(5, 3)
        .with_config(config)
        .build()
        .unwrap();

    let shares = shamir.split(42).unwrap();
    assert!(shares.iter().all(|s| s.y < PRIME_32));
    assert_eq!(shamir.reconstruct(&shares[2..]).unwrap(), 42);
}

#[test]
fn test_secret_reduced_into_small_field() {
    let config = Config::new().with_modulus(257).unwrap();
    let mut shamir = ShamirShare::builder(4, 2)
        .with_config(config)
        .build()
        .unwrap();

    let shares = shamir.split(300).unwrap();
    assert_eq!(shamir.reconstruct(&shares[1..3]).unwrap(), 300 % 257);
}

#[test]
fn test_share_count_bounded_by_modulus() {
    let config = Config::new().with_modulus(11).unwrap();
    assert!(ShamirShare::builder(10, 3)
        .with_config(config.clone())
        .build()
        .is_ok());
    assert!(matches!(
        ShamirShare::builder(11, 3).with_config(config).build(),
        Err(ShamirError::InvalidParameters {
            threshold: 3,
            total_shares: 11
        })
    ));
}

#[test]
fn test_composite_modulus_rejected() {
    assert!(matches!(
        Config::new().with_modulus(PRIME_32 + 2),
        Err(ShamirError::InvalidConfig(_))
    ));
}

#[test]
fn test_seeded_schemes_are_reproducible() {
    let mut a = ShamirShare::builder(5, 3).with_seed(99).build().unwrap();
    let mut b = ShamirShare::builder(5, 3).with_seed(99).build().unwrap();
    assert_eq!(a.split(8).unwrap(), b.split(8).unwrap());

    let mut c = ShamirShare::builder(5, 3).with_seed(100).build().unwrap();
    assert_ne!(a.split(8).unwrap(), c.split(8).unwrap());
}

#[test]
fn test_parallel_mode_roundtrip() {
    let config = Config::new().with_mode(SplitMode::Parallel);
    let mut shamir = ShamirShare::builder(100, 40)
        .with_config(config)
        .build()
        .unwrap();

    let shares = shamir.split(31_415_926).unwrap();
    assert_eq!(shares.len(), 100);
    assert_eq!(shamir.reconstruct(&shares[60..]).unwrap(), 31_415_926);
}
