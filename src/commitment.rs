//! Publication of the value a proof is checked against.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::group::Group;
use crate::uint::{PublicUint, Uint};
use crate::witness::Witness;

/// The public value `X = g^x mod p` for a witness `x` (~ verifying key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicKey(PublicUint);

impl PublicKey {
    /// Publishes the public value for `witness`.
    ///
    /// Deterministic: the same witness always yields the same key.
    pub fn publish(group: &Group, witness: &Witness) -> Self {
        Self(group.power_of_generator(witness.expose_secret()).into())
    }

    /// Wraps an already published value, e.g. one received from a prover.
    pub fn from_public(value: PublicUint) -> Self {
        Self(value)
    }

    /// Returns the public value.
    pub fn value(&self) -> PublicUint {
        self.0
    }

    pub(crate) fn as_uint(&self) -> &Uint {
        self.0.as_ref()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
