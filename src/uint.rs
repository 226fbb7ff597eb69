mod public_uint;

use crypto_bigint::nlimbs;

pub use public_uint::{ParseUintError, PublicUint};

/// The number of limbs in [`Uint`].
pub(crate) const LIMBS: usize = nlimbs!(256);

/// The integer type used for group elements and exponents.
///
/// 256 bits leave room for a group of production strength (order of at least `2^224`).
pub type Uint = crypto_bigint::Uint<LIMBS>;
