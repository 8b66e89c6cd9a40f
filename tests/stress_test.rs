//! Stress tests for the stable-matching engine.
//!
//! These tests verify:
//! 1. Large markets solve well inside the N² proposal bound
//! 2. Results stay stable at scale
//! 3. Determinism is preserved across runs
//!
//! ## Running Stress Tests
//!
//! ```bash
//! cargo test --release --test stress_test -- --nocapture
//! ```

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stable_marriage::engine::stability::is_stable;
use stable_marriage::StableMatcher;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Market size for the large stress test
const STRESS_MARKET_SIZE: usize = 1_500;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Generate a deterministic random market.
///
/// Uses a seeded RNG for reproducibility. Same seed = same preferences.
fn generate_market(n: usize, seed: u64) -> (Vec<Vec<usize>>, Vec<Vec<usize>>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let proposers = generate_table(&mut rng, n);
    let receivers = generate_table(&mut rng, n);
    (proposers, receivers)
}

/// N shuffled copies of `[1, n]`
fn generate_table(rng: &mut ChaCha8Rng, n: usize) -> Vec<Vec<usize>> {
    let mut table = Vec::with_capacity(n);
    for _ in 0..n {
        let mut row: Vec<usize> = (1..=n).collect();
        row.shuffle(rng);
        table.push(row);
    }
    table
}

// ============================================================================
// STRESS TESTS
// ============================================================================

#[test]
fn stress_large_market() {
    println!("\n=== STRESS TEST: {} x {} market ===\n", STRESS_MARKET_SIZE, STRESS_MARKET_SIZE);

    let (proposers, receivers) = generate_market(STRESS_MARKET_SIZE, 42);

    let start = Instant::now();
    let outcome = StableMatcher::new()
        .solve(STRESS_MARKET_SIZE, &proposers, &receivers)
        .expect("well-formed market must solve");
    let elapsed = start.elapsed();

    let receipt = &outcome.receipt;
    println!("  Proposals:         {:>12}", receipt.proposals);
    println!("  Rejections:        {:>12}", receipt.rejections);
    println!("  Displacements:     {:>12}", receipt.displacements);
    println!("  Elapsed time:      {:>12.2?}", elapsed);
    println!("  Matching root:     {}", receipt.matching_root_hex());

    assert!(outcome.matching.is_perfect());
    assert!(receipt.is_balanced());
    // Random preferences need about N ln N proposals, far below N²
    assert!(receipt.proposals < (STRESS_MARKET_SIZE * STRESS_MARKET_SIZE / 10) as u64);
    assert!(is_stable(&outcome.matching, &proposers, &receivers).unwrap());
}

/// Same market, same root.
#[test]
fn verify_determinism() {
    const SIZE: usize = 500;
    const SEED: u64 = 12345;

    let (proposers, receivers) = generate_market(SIZE, SEED);
    let root1 = StableMatcher::new().solve(SIZE, &proposers, &receivers).unwrap().receipt.matching_root;
    let root2 = StableMatcher::new().solve(SIZE, &proposers, &receivers).unwrap().receipt.matching_root;

    println!("  Run 1 matching root: {}", hex::encode(root1));
    println!("  Run 2 matching root: {}", hex::encode(root2));
    assert_eq!(root1, root2, "Matching roots must match for determinism");

    let (proposers, receivers) = generate_market(SIZE, SEED + 1);
    let root3 = StableMatcher::new().solve(SIZE, &proposers, &receivers).unwrap().receipt.matching_root;
    assert_ne!(root1, root3, "Different seeds should produce different roots");
}

/// Test varying market sizes to show scaling.
#[test]
fn stress_scaling() {
    println!("\n=== SCALING TEST ===\n");
    println!("{:>8} {:>12} {:>12} {:>12}", "N", "Time", "Proposals", "Per N");
    println!("{:-<8} {:-<12} {:-<12} {:-<12}", "", "", "", "");

    for &size in &[10, 100, 500, 1_000] {
        let (proposers, receivers) = generate_market(size, 7);

        let start = Instant::now();
        let receipt = StableMatcher::new().solve(size, &proposers, &receivers).unwrap().receipt;
        let elapsed = start.elapsed();

        println!(
            "{:>8} {:>12.2?} {:>12} {:>12.2}",
            size,
            elapsed,
            receipt.proposals,
            receipt.proposals as f64 / size as f64
        );
        assert!(receipt.proposals <= (size * size) as u64);
    }
}
