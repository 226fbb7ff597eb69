use crypto_bigint::NonZero;
use sha2::{Digest, Sha256};

use crate::uint::Uint;

/// Wraps the hash function used to turn claim material into integers, for easier replacement.
///
/// The digest is always 256 bits wide, so it maps onto [`Uint`] without truncation.
pub(crate) struct Hash(Sha256);

impl Hash {
    pub fn new() -> Self {
        Self(Sha256::new())
    }

    /// Hash raw bytes.
    ///
    /// Note that no length prefix is added, so `H(AB|CD) == H(ABC|D)`;
    /// only chain a single item per hash.
    pub fn chain_raw_bytes(self, bytes: &(impl AsRef<[u8]> + ?Sized)) -> Self {
        let mut digest = self.0;
        digest.update(bytes.as_ref());
        Self(digest)
    }

    /// Interprets the digest as a big-endian integer and reduces it modulo `modulus`.
    pub fn finalize_to_uint(self, modulus: &NonZero<Uint>) -> Uint {
        let digest = self.0.finalize();
        Uint::from_be_slice(digest.as_slice()) % *modulus
    }
}
