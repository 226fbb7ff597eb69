use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crypto_bigint::{CheckedAdd, CheckedMul, Encoding, NonZero};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::Uint;

/// `10^78 > 2^256`, so this many decimal digits always suffice.
const MAX_DIGITS: usize = 78;

fn ten() -> Option<NonZero<Uint>> {
    NonZero::new(Uint::from_u8(10)).into()
}

/// A non-secret integer: a group parameter, a public key, or a transcript value.
///
/// Displayed, parsed and serialized in decimal so that shells can render it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PublicUint(Uint);

impl PublicUint {
    /// Creates a value from a machine integer.
    pub const fn from_u64(value: u64) -> Self {
        Self(Uint::from_u64(value))
    }

    /// Returns the wrapped integer.
    pub fn inner(self) -> Uint {
        self.0
    }
}

impl From<Uint> for PublicUint {
    fn from(source: Uint) -> Self {
        Self(source)
    }
}

impl From<u64> for PublicUint {
    fn from(source: u64) -> Self {
        Self::from_u64(source)
    }
}

impl AsRef<Uint> for PublicUint {
    fn as_ref(&self) -> &Uint {
        &self.0
    }
}

impl fmt::Display for PublicUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ten = ten().ok_or(fmt::Error)?;
        let mut digits = [0u8; MAX_DIGITS];
        let mut len = 0;
        let mut value = self.0;

        loop {
            let digit = (value % ten).to_be_bytes().last().copied().unwrap_or(0);
            let slot = digits.get_mut(len).ok_or(fmt::Error)?;
            *slot = b'0' + digit;
            len += 1;
            value = value / ten;
            if value == Uint::ZERO {
                break;
            }
        }

        let digits = digits.get(..len).ok_or(fmt::Error)?;
        for digit in digits.iter().rev() {
            write!(f, "{}", char::from(*digit))?;
        }
        Ok(())
    }
}

/// An error returned when parsing a [`PublicUint`] from a string.
#[derive(displaydoc::Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseUintError {
    /// the string is empty
    Empty,
    /// the string contains a character that is not a decimal digit
    InvalidDigit,
    /// the value does not fit into 256 bits
    Overflow,
}

impl core::error::Error for ParseUintError {}

impl FromStr for PublicUint {
    type Err = ParseUintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseUintError::Empty);
        }

        let ten = Uint::from_u8(10);
        let mut value = Uint::ZERO;
        for c in s.chars() {
            let digit = c.to_digit(10).ok_or(ParseUintError::InvalidDigit)?;
            let shifted: Option<Uint> = value.checked_mul(&ten).into();
            let shifted = shifted.ok_or(ParseUintError::Overflow)?;
            let next: Option<Uint> = shifted.checked_add(&Uint::from_u32(digit)).into();
            value = next.ok_or(ParseUintError::Overflow)?;
        }
        Ok(Self(value))
    }
}

impl Serialize for PublicUint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct PublicUintVisitor;

impl de::Visitor<'_> for PublicUintVisitor {
    type Value = PublicUint;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a non-negative integer or a decimal string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(PublicUint::from_u64(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}

impl<'de> Deserialize<'de> for PublicUint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PublicUintVisitor)
    }
}
