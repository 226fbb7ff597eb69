use crate::commitment::PublicKey;
use crate::error::Error;
use crate::group::Group;
use crate::uint::PublicUint;
use crate::witness::derive_password;

/// The verifier's record of a registered password.
///
/// Only the public key derived from the password is kept, along with the parameters
/// of the group it was derived in; the password itself and its witness are dropped after setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordClaimContext {
    public_key: PublicKey,
    parameters: (PublicUint, PublicUint, PublicUint),
}

impl PasswordClaimContext {
    /// Registers `password` and publishes its public key.
    pub fn setup(group: &Group, password: &str) -> Result<Self, Error> {
        let witness = derive_password(group, password)?;
        Ok(Self::from_public_key(group, PublicKey::publish(group, &witness)))
    }

    /// Restores a context from a key previously published in `group`.
    pub fn from_public_key(group: &Group, public_key: PublicKey) -> Self {
        Self {
            public_key,
            parameters: group.public_parameters(),
        }
    }

    /// The public key password claims are checked against.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Returns `true` if the key was published in `group`.
    pub fn belongs_to(&self, group: &Group) -> bool {
        self.parameters == group.public_parameters()
    }
}

#[cfg(test)]
mod tests {
    use super::PasswordClaimContext;
    use crate::error::{ClaimInvalid, Error};
    use crate::group::Group;
    use crate::params::demo::demo_group;
    use crate::uint::{PublicUint, Uint};

    #[test]
    fn setup() {
        let group = demo_group();
        let context = PasswordClaimContext::setup(&group, "SecurePassword123").unwrap();
        assert_eq!(context.public_key().value(), PublicUint::from_u64(4578));
        assert_eq!(
            PasswordClaimContext::from_public_key(&group, *context.public_key()),
            context
        );
        assert_eq!(
            PasswordClaimContext::setup(&group, ""),
            Err(Error::ClaimInvalid(ClaimInvalid::EmptyPassword))
        );
    }

    #[test]
    fn remembers_its_group() {
        let group = demo_group();
        let other = Group::new(Uint::from_u64(10007), Uint::from_u64(7)).unwrap();
        let context = PasswordClaimContext::setup(&group, "SecurePassword123").unwrap();
        assert!(context.belongs_to(&group));
        assert!(!context.belongs_to(&other));
    }
}
