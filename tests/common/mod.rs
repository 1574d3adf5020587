//! Helpers shared by the integration tests

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use sha2::{Digest, Sha256};

/// `count` random shares sorted by namespace, reproducible from `seed`
pub fn random_shares(
    count: usize,
    namespace_size: usize,
    share_size: usize,
    seed: u64,
) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut shares: Vec<Vec<u8>> = (0..count)
        .map(|_| {
            let mut ns = vec![0u8; namespace_size];
            rng.fill_bytes(&mut ns);
            ns
        })
        .collect();
    shares.sort();
    for share in &mut shares {
        let mut payload = vec![0u8; share_size];
        rng.fill_bytes(&mut payload);
        share.extend_from_slice(&payload);
    }
    shares
}

/// Reference namespaced Merkle tree root, computed top-down by recursive
/// halving. Returns the serialized `min || max || hash`.
pub fn reference_root(shares: &[Vec<u8>], namespace_size: usize) -> Vec<u8> {
    if shares.len() == 1 {
        return reference_leaf(&shares[0], namespace_size);
    }
    let (left, right) = shares.split_at(shares.len() / 2);
    let left = reference_root(left, namespace_size);
    let right = reference_root(right, namespace_size);

    let mut hasher = Sha256::new();
    hasher.update([1u8]);
    hasher.update(&left);
    hasher.update(&right);

    let mut out = Vec::new();
    out.extend_from_slice(&left[..namespace_size]);
    out.extend_from_slice(&right[namespace_size..2 * namespace_size]);
    out.extend_from_slice(&hasher.finalize());
    out
}

/// Reference leaf digest: `ns || ns || sha256(0x00 || payload)`
pub fn reference_leaf(share: &[u8], namespace_size: usize) -> Vec<u8> {
    let (ns, payload) = share.split_at(namespace_size);
    let mut hasher = Sha256::new();
    hasher.update([0u8]);
    hasher.update(payload);

    let mut out = Vec::new();
    out.extend_from_slice(ns);
    out.extend_from_slice(ns);
    out.extend_from_slice(&hasher.finalize());
    out
}

/// Route library logs to the test output; filter with `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
