//! Shared scalar types used across requests and responses.

pub mod request;
pub mod response;

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// The lobby type of a game.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameType {
    Private,
    Public,
    Singleplayer,
}

/// A value the API encodes as a decimal string, upgraded to an exact
/// arbitrary-precision number when big-integer normalization is requested.
///
/// Counters and identifiers that can exceed 2^53 (gold totals, conquest
/// counts, persistent ids) arrive from the API as digit strings. Without
/// normalization they decode as [`MaybeBigInt::Text`]; with
/// `use_big_int` set on the request they decode as [`MaybeBigInt::Int`]
/// carrying every digit exactly (see [`crate::bigint::normalize`]).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MaybeBigInt {
    Int(Number),
    Text(String),
}

// Not a derived untagged Deserialize: serde's untagged content buffer cannot
// replay arbitrary-precision numbers beyond the native integer range, so a
// normalized value past u64::MAX would fail to decode. Going through `Value`
// keeps every digit.
impl<'de> Deserialize<'de> for MaybeBigInt {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => Ok(Self::Int(n)),
            Value::String(s) => Ok(Self::Text(s)),
            other => Err(de::Error::custom(format!(
                "expected string or number, got {other}"
            ))),
        }
    }
}

impl MaybeBigInt {
    /// Returns the un-normalized string form, if this value was not converted.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// Returns the normalized number, if this value was converted.
    #[must_use]
    pub fn as_int(&self) -> Option<&Number> {
        match self {
            Self::Int(n) => Some(n),
            Self::Text(_) => None,
        }
    }

    /// The decimal digits of the value regardless of representation.
    #[must_use]
    pub fn digits(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for MaybeBigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => n.fmt(f),
            Self::Text(s) => s.fmt(f),
        }
    }
}
