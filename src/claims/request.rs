use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ClaimInvalid, Error};

/// The supported claim types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimKind {
    /// Knowledge of the registered password.
    Password,
    /// Being at least the minimum age.
    Age,
    /// Knowing the secret number within the range.
    Range,
    /// Being the designated member of the group.
    Membership,
}

impl ClaimKind {
    /// All claim kinds, in menu order.
    pub const ALL: [ClaimKind; 4] = [Self::Password, Self::Age, Self::Range, Self::Membership];

    /// The name used for the claim type on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Age => "age",
            Self::Range => "range",
            Self::Membership => "membership",
        }
    }
}

impl fmt::Display for ClaimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnsupportedClaim(s.into()))
    }
}

/// A claim submitted for evaluation.
///
/// On the wire, the claim type is given by the `claim` tag.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "claim", rename_all = "snake_case")]
pub enum ClaimRequest {
    /// "I know the registered password."
    Password {
        /// The password attempt.
        password: String,
    },
    /// "I am old enough."
    Age {
        /// The claimant's birth year.
        birth_year: i32,
    },
    /// "I know the secret number, and it is within the range."
    Range {
        /// The number the claimant asserts.
        claimed_number: u64,
    },
    /// "I am the designated member of the group."
    Membership {
        /// The identity the claimant asserts.
        claimed_member: String,
    },
}

impl ClaimRequest {
    /// Builds a request from a claim type name and a raw payload, as received by a shell.
    ///
    /// Unknown claim types fail with [`Error::UnsupportedClaim`],
    /// unparseable payloads with [`ClaimInvalid::MalformedPayload`].
    pub fn parse(kind: &str, payload: &str) -> Result<Self, Error> {
        let kind = kind.trim().to_ascii_lowercase().parse::<ClaimKind>()?;
        let malformed = || ClaimInvalid::MalformedPayload {
            payload: payload.to_string(),
        };
        let request = match kind {
            ClaimKind::Password => Self::Password {
                password: payload.into(),
            },
            ClaimKind::Age => Self::Age {
                birth_year: payload.trim().parse().map_err(|_| malformed())?,
            },
            ClaimKind::Range => Self::Range {
                claimed_number: payload.trim().parse().map_err(|_| malformed())?,
            },
            ClaimKind::Membership => Self::Membership {
                claimed_member: payload.trim().into(),
            },
        };
        Ok(request)
    }

    /// The type of the claim.
    pub fn kind(&self) -> ClaimKind {
        match self {
            Self::Password { .. } => ClaimKind::Password,
            Self::Age { .. } => ClaimKind::Age,
            Self::Range { .. } => ClaimKind::Range,
            Self::Membership { .. } => ClaimKind::Membership,
        }
    }
}

impl fmt::Debug for ClaimRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Password { .. } => f.debug_struct("Password").finish_non_exhaustive(),
            Self::Age { birth_year } => f.debug_struct("Age").field("birth_year", birth_year).finish(),
            Self::Range { claimed_number } => f
                .debug_struct("Range")
                .field("claimed_number", claimed_number)
                .finish(),
            Self::Membership { claimed_member } => f
                .debug_struct("Membership")
                .field("claimed_member", claimed_member)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use serde_json::json;

    use super::{ClaimKind, ClaimRequest};
    use crate::error::{ClaimInvalid, Error};

    #[test]
    fn kind_names() {
        for kind in ClaimKind::ALL {
            assert_eq!(kind.as_str().parse::<ClaimKind>(), Ok(kind));
        }
        assert_eq!(
            "fingerprint".parse::<ClaimKind>(),
            Err(Error::UnsupportedClaim("fingerprint".into()))
        );
    }

    #[test]
    fn parse_requests() {
        assert_eq!(
            ClaimRequest::parse("password", "SecurePassword123"),
            Ok(ClaimRequest::Password {
                password: "SecurePassword123".into()
            })
        );
        assert_eq!(
            ClaimRequest::parse("Age", " 1990 "),
            Ok(ClaimRequest::Age { birth_year: 1990 })
        );
        assert_eq!(
            ClaimRequest::parse("range", "3500"),
            Ok(ClaimRequest::Range { claimed_number: 3500 })
        );
        assert_eq!(
            ClaimRequest::parse("membership", "Charlie"),
            Ok(ClaimRequest::Membership {
                claimed_member: "Charlie".into()
            })
        );
        assert_eq!(ClaimRequest::parse("range", "3500").map(|r| r.kind()), Ok(ClaimKind::Range));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            ClaimRequest::parse("retina", "x"),
            Err(Error::UnsupportedClaim("retina".into()))
        );
        assert_eq!(
            ClaimRequest::parse("age", "nineteen ninety"),
            Err(Error::ClaimInvalid(ClaimInvalid::MalformedPayload {
                payload: "nineteen ninety".into()
            }))
        );
        assert_eq!(
            ClaimRequest::parse("range", "-5"),
            Err(Error::ClaimInvalid(ClaimInvalid::MalformedPayload { payload: "-5".into() }))
        );
    }

    #[test]
    fn debug_hides_password() {
        let request = ClaimRequest::Password {
            password: "hunter2".into(),
        };
        assert!(!format!("{request:?}").contains("hunter2"));
    }

    #[test]
    fn wire_format() {
        let request: ClaimRequest = serde_json::from_value(json!({ "claim": "age", "birth_year": 1990 })).unwrap();
        assert_eq!(request, ClaimRequest::Age { birth_year: 1990 });

        let requests = [
            ClaimRequest::Password {
                password: "SecurePassword123".into(),
            },
            ClaimRequest::Range { claimed_number: 3500 },
            ClaimRequest::Membership {
                claimed_member: "Charlie".into(),
            },
        ];
        for request in requests {
            let value = serde_json::to_value(&request).unwrap();
            assert_eq!(value["claim"], json!(request.kind().as_str()));
            assert_eq!(serde_json::from_value::<ClaimRequest>(value).unwrap(), request);
        }

        assert!(serde_json::from_value::<ClaimRequest>(json!({ "claim": "retina", "scan": "x" })).is_err());
        assert_eq!(serde_json::to_value(ClaimKind::Membership).unwrap(), json!("membership"));
    }
}
