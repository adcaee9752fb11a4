use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Length in bytes of a git object identifier (SHA-1).
pub const OID_LEN: usize = 20;

/// Number of hex characters in a short (abbreviated) object id.
const SHORT_HEX_LEN: usize = 7;

/// Identifier of a git object.
///
/// An `Oid` is opaque to diff consumers: two sides of a comparison carrying
/// the same `Oid` have identical content, which is all the delta model relies
/// on (for example to recognise a pure rename). The all-zero id is the
/// conventional "no object" value reported for a side that does not exist.
///
/// Serialized as a 40-character lowercase hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Oid([u8; OID_LEN]);

impl Oid {
    /// Create an `Oid` from raw bytes.
    pub const fn from_raw(bytes: [u8; OID_LEN]) -> Self {
        Self(bytes)
    }

    /// The zero object id.
    pub const fn zero() -> Self {
        Self([0u8; OID_LEN])
    }

    /// Returns `true` if every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; OID_LEN]
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8; OID_LEN] {
        &self.0
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Abbreviated hex representation, as printed by `git log --oneline`.
    pub fn short_hex(&self) -> String {
        let mut s = self.to_hex();
        s.truncate(SHORT_HEX_LEN);
        s
    }

    /// Parse from a full-length hex string.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        let arr: [u8; OID_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| TypeError::InvalidLength {
                expected: OID_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }
}

impl Default for Oid {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self.short_hex())
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Oid {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Oid {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Oid> for String {
    fn from(id: Oid) -> Self {
        id.to_hex()
    }
}

impl From<[u8; OID_LEN]> for Oid {
    fn from(bytes: [u8; OID_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Oid> for [u8; OID_LEN] {
    fn from(id: Oid) -> Self {
        id.0
    }
}
