//! Shared newtypes and utilities used across all domain modules.
//!
//! The id newtypes are serialization-transparent: they serialize as the raw
//! string the backend sends, and accept either a JSON string or a JSON number
//! on input (the service uses UUIDs, fixtures often use integers).

pub mod fmt;
pub mod latest;
pub mod serde_util;

pub use latest::{Latest, Ticket};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Id newtypes ─────────────────────────────────────────────────────────────

struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = String;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a string or integer identifier")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }
}

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                Self(n.to_string())
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(IdVisitor).map(Self)
            }
        }
    };
}

id_newtype!(
    /// Commodity identifier (a UUID string on the wire).
    CommodityId
);
id_newtype!(
    /// Market identifier.
    MarketId
);
id_newtype!(
    /// Price record identifier.
    RecordId
);

// ─── DateRange ───────────────────────────────────────────────────────────────

/// Chart window selector.
///
/// Each range maps to a point *count*, not a calendar span: the history
/// endpoint returns the latest `limit()` reports whatever dates they carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateRange {
    #[serde(rename = "24h", alias = "1d")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

impl DateRange {
    pub const ALL: [DateRange; 5] = [
        DateRange::Day,
        DateRange::Week,
        DateRange::Month,
        DateRange::Quarter,
        DateRange::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "24h",
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
            Self::Year => "1y",
        }
    }

    /// Number of history points requested for this range.
    pub fn limit(&self) -> u32 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }

    /// Human-readable label for a range selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "24 hours",
            Self::Week => "7 days",
            Self::Month => "30 days",
            Self::Quarter => "90 days",
            Self::Year => "1 year",
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unknown date-range token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown date range: {0}")]
pub struct UnknownDateRange(pub String);

impl FromStr for DateRange {
    type Err = UnknownDateRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "24h" | "1d" => Ok(Self::Day),
            "7d" => Ok(Self::Week),
            "30d" => Ok(Self::Month),
            "90d" => Ok(Self::Quarter),
            "1y" => Ok(Self::Year),
            other => Err(UnknownDateRange(other.to_string())),
        }
    }
}

// ─── Synthetic ───────────────────────────────────────────────────────────────

/// A value fabricated for visualization, not sourced from the service.
///
/// Chart volumes and ticker change percentages are placeholders. Wrapping them
/// keeps that fact in the type, and the serialized form carries an explicit
/// `"synthetic": true` flag so downstream consumers cannot mistake them for data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Synthetic<T>(T);

impl<T> Synthetic<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }

    /// Always `true`; present so serialized and in-memory forms read the same.
    pub fn is_synthetic(&self) -> bool {
        true
    }
}

impl<T: Serialize> Serialize for Synthetic<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Synthetic", 2)?;
        s.serialize_field("value", &self.0)?;
        s.serialize_field("synthetic", &true)?;
        s.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Synthetic<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr<T> {
            value: T,
        }
        Repr::<T>::deserialize(deserializer).map(|r| Synthetic(r.value))
    }
}
