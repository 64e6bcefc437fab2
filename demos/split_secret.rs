//! Splits a secret from the command line and recovers it again
//!
//! ```text
//! cargo run --example split_secret -- <n shares> <t threshold> <secret>
//! ```

use anyhow::{Context, bail};
use prime_shamir::{Config, PRIME_32, ShamirShare};
use tracing::{Level, info};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [n, t, s] = args.as_slice() else {
        bail!("usage: split_secret <n shares> <t threshold> <secret>");
    };
    let total_shares: usize = n.parse().context("n must be a non-negative integer")?;
    let threshold: usize = t.parse().context("t must be a non-negative integer")?;
    let secret: u64 = s.parse().context("secret must be a 64-bit unsigned integer")?;

    let config = Config::new().with_modulus(PRIME_32)?;
    let mut shamir = ShamirShare::builder(total_shares, threshold)
        .with_config(config)
        .build()?;

    println!("=== Shamir Secret Sharing over GF({PRIME_32}) ===\n");
    println!("n shares: {total_shares}");
    println!("t threshold shares: {threshold}\n");

    let shares = shamir.split(secret)?;
    for (i, share) in shares.iter().enumerate() {
        println!("share {i}: {share}");
    }

    // Recover from the last t shares so the first ones are never used
    let subset = &shares[shares.len() - threshold..];
    let recovered = shamir.reconstruct(subset)?;
    info!(used = subset.len(), "recovered secret");
    println!("\nrecovered secret: {recovered}");

    Ok(())
}
