//! `for all (key, seed)` style properties checked with `quickcheck`, and
//! avalanche/statistical-flavor spot checks using `rand`-generated samples.

use quickcheck_macros::quickcheck;
use rand::Rng;

#[quickcheck]
fn hash64_is_deterministic_for_any_input(key: Vec<u8>, seed: u64) -> bool {
    mum_hash::hash64(&key, seed) == mum_hash::hash64(&key, seed)
}

#[quickcheck]
fn hash64_seed_change_usually_changes_digest(key: Vec<u8>, seed: u64) -> bool {
    let other_seed = seed ^ 0xFFFF_FFFF_FFFF_FFFF;
    if seed == other_seed {
        return true;
    }
    mum_hash::hash64(&key, seed) != mum_hash::hash64(&key, other_seed)
}

#[quickcheck]
fn hash64_appending_a_byte_usually_changes_digest(key: Vec<u8>, seed: u64, extra: u8) -> bool {
    let mut longer = key.clone();
    longer.push(extra);
    mum_hash::hash64(&key, seed) != mum_hash::hash64(&longer, seed)
}

#[quickcheck]
fn hash512_is_deterministic_for_any_input(key: Vec<u8>, seed: u64) -> bool {
    mum_hash::hash512(&key, [seed, seed]) == mum_hash::hash512(&key, [seed, seed])
}

#[quickcheck]
fn hash512_appending_a_byte_usually_changes_digest(key: Vec<u8>, seed: u64, extra: u8) -> bool {
    let mut longer = key.clone();
    longer.push(extra);
    mum_hash::hash512(&key, [seed, seed]) != mum_hash::hash512(&longer, [seed, seed])
}

#[test]
fn single_bit_flip_changes_roughly_half_the_output_bits() {
    // Coarse avalanche check: flipping one random bit of a random key
    // should not leave the 64-bit digest looking anything like the
    // original -- specifically its Hamming distance should land somewhere
    // in a broad, non-degenerate band, not near 0 or 64.
    let mut rng = rand::rng();
    let mut distances = Vec::new();

    for _ in 0..256 {
        let len = rng.random_range(1..128);
        let mut key: Vec<u8> = (0..len).map(|_| rng.random::<u8>()).collect();
        let seed = rng.random::<u64>();
        let base = mum_hash::hash64(&key, seed);

        let bit = rng.random_range(0..(len * 8));
        key[bit / 8] ^= 1 << (bit % 8);
        let flipped = mum_hash::hash64(&key, seed);

        distances.push((base ^ flipped).count_ones());
    }

    let avg = f64::from(distances.iter().sum::<u32>()) / distances.len() as f64;
    assert!(
        (16.0..48.0).contains(&avg),
        "average Hamming distance {avg} outside the expected avalanche band"
    );
}

#[test]
fn hash64_output_is_not_biased_toward_zero_bytes() {
    // Sanity check against a degenerate mixer that would leave whole bytes
    // of the 64-bit state untouched: collect the low byte of many digests
    // over random keys and require a reasonably even spread, not a single
    // dominant value.
    let mut rng = rand::rng();
    let mut low_bytes = std::collections::HashMap::new();

    for _ in 0..2000 {
        let len = rng.random_range(0..64);
        let key: Vec<u8> = (0..len).map(|_| rng.random::<u8>()).collect();
        let digest = mum_hash::hash64(&key, rng.random());
        *low_bytes.entry(digest as u8).or_insert(0u32) += 1;
    }

    let max_count = *low_bytes.values().max().unwrap_or(&0);
    assert!(
        max_count < 200,
        "low byte value dominates with {max_count} of 2000 samples"
    );
}
