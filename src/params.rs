//! Configuration of the public parameters and of the proof runs.

pub mod demo;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::group::Group;
use crate::uint::PublicUint;

/// The default number of protocol rounds per proof.
pub const DEFAULT_ROUNDS: usize = 3;

/// Serializable description of the group parameters.
///
/// Integers can be given either as numbers or as decimal strings,
/// the latter being required for values above `u64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// The prime modulus `p`.
    pub modulus: PublicUint,
    /// The generator `g`.
    pub generator: PublicUint,
}

impl GroupConfig {
    /// Validates the configuration and builds the group.
    pub fn build(&self) -> Result<Group, DomainError> {
        Group::new(self.modulus.inner(), self.generator.inner())
    }
}

impl TryFrom<GroupConfig> for Group {
    type Error = DomainError;

    fn try_from(config: GroupConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}

impl From<Group> for GroupConfig {
    fn from(group: Group) -> Self {
        Self {
            modulus: (*group.modulus()).into(),
            generator: (*group.generator()).into(),
        }
    }
}

/// Settings of a proof run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProofConfigRepr", into = "ProofConfigRepr")]
pub struct ProofConfig {
    rounds: usize,
}

#[derive(Serialize, Deserialize)]
struct ProofConfigRepr {
    rounds: usize,
}

impl ProofConfig {
    /// Creates a configuration running `rounds` rounds per proof.
    ///
    /// A cheating prover passes each round with probability about `1/q`,
    /// so more rounds only matter for small groups.
    pub fn new(rounds: usize) -> Result<Self, DomainError> {
        if rounds == 0 {
            return Err(DomainError::NoRounds);
        }
        Ok(Self { rounds })
    }

    /// The number of rounds per proof.
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}

impl Default for ProofConfig {
    fn default() -> Self {
        Self { rounds: DEFAULT_ROUNDS }
    }
}

impl TryFrom<ProofConfigRepr> for ProofConfig {
    type Error = DomainError;

    fn try_from(repr: ProofConfigRepr) -> Result<Self, Self::Error> {
        Self::new(repr.rounds)
    }
}

impl From<ProofConfig> for ProofConfigRepr {
    fn from(config: ProofConfig) -> Self {
        Self { rounds: config.rounds }
    }
}
