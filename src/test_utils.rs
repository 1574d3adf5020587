//! Share generators shared by unit tests

use crate::config::InputEncoding;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// `count` random shares sorted by namespace, reproducible from `seed`
pub(crate) fn random_shares(count: usize, encoding: &InputEncoding, seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut namespaces: Vec<Vec<u8>> = (0..count)
        .map(|_| {
            let mut ns = vec![0u8; encoding.namespace_size];
            rng.fill_bytes(&mut ns);
            ns
        })
        .collect();
    namespaces.sort();

    namespaces
        .into_iter()
        .map(|mut share| {
            let mut payload = vec![0u8; encoding.share_size];
            rng.fill_bytes(&mut payload);
            share.extend_from_slice(&payload);
            share
        })
        .collect()
}

pub(crate) fn concat_shares(shares: &[Vec<u8>]) -> Vec<u8> {
    shares.concat()
}
