use std::{
    fmt,
    str::FromStr,
};

use anyhow::Error;
use serde::{
    Deserialize,
    Serialize,
    Serializer,
    de::Visitor,
};

/// The base accuracy of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    /// The percent chance, from 0 to 100, for the move to hit.
    Chance(u8),
    /// The move is exempt from accuracy checks.
    Exempt,
}

impl Accuracy {
    pub fn percentage(&self) -> Option<u8> {
        match self {
            Self::Chance(n) => Some(*n),
            Self::Exempt => None,
        }
    }
}

impl Default for Accuracy {
    fn default() -> Self {
        Self::Chance(100)
    }
}

impl From<u8> for Accuracy {
    fn from(value: u8) -> Self {
        Self::Chance(value)
    }
}

impl FromStr for Accuracy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exempt" => Ok(Self::Exempt),
            _ => Err(Error::msg(format!("invalid accuracy \"{s}\""))),
        }
    }
}

impl Serialize for Accuracy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Chance(n) => serializer.serialize_u8(*n),
            Self::Exempt => serializer.collect_str("exempt"),
        }
    }
}

struct AccuracyVisitor;

impl<'de> Visitor<'de> for AccuracyVisitor {
    type Value = Accuracy;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an integer between 0 and 100 or \"exempt\"")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        match u8::try_from(v) {
            Ok(v) if v <= 100 => Ok(Self::Value::from(v)),
            _ => Err(E::invalid_value(serde::de::Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        match u64::try_from(v) {
            Ok(v) => self.visit_u64(v),
            Err(_) => Err(E::invalid_value(serde::de::Unexpected::Signed(v), &self)),
        }
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::from_str(v).map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Accuracy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(AccuracyVisitor)
    }
}
