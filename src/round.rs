//! Round outcome records and their on-disk JSON shape.

use core::fmt;

use chrono::NaiveDateTime;
use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Terminal status of a round.
///
/// The numeric codes are part of the on-disk format and must stay stable
/// so existing history files keep reading back correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    /// The player lost the bet.
    Loss = 0,
    /// The round was a tie; the bet is returned.
    Push = 1,
    /// The player won the bet.
    Win = 2,
    /// The player surrendered, forfeiting half the bet.
    Surrender = 3,
}

impl RoundStatus {
    /// All statuses, in code order.
    pub const ALL: [Self; 4] = [Self::Loss, Self::Push, Self::Win, Self::Surrender];

    /// The stable on-disk code of the status.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks a status up by its on-disk code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Loss),
            1 => Some(Self::Push),
            2 => Some(Self::Win),
            3 => Some(Self::Surrender),
            _ => None,
        }
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Loss => "LOSS",
            Self::Push => "PUSH",
            Self::Win => "WIN",
            Self::Surrender => "SURRENDER",
        };
        f.write_str(name)
    }
}

impl Serialize for RoundStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for RoundStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Self::from_code(code)
            .ok_or_else(|| D::Error::custom(format!("unknown round status code {code}")))
    }
}

/// Timestamp (de)serialization in the legacy `%m/%d/%Y %H:%M:%S` format.
pub(crate) mod timestamp {
    use chrono::NaiveDateTime;
    use serde::de::{Deserializer, Error as _};
    use serde::ser::Serializer;
    use serde::Deserialize;

    /// The fixed textual timestamp pattern used by both history stores.
    pub const FORMAT: &str = "%m/%d/%Y %H:%M:%S";

    pub fn serialize<S: Serializer>(
        time: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, FORMAT).map_err(D::Error::custom)
    }
}

/// One finished round: outcome, completion time, and signed profit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// The terminal status of the round.
    #[serde(rename = "STATUS")]
    pub status: RoundStatus,
    /// When the round was settled (local wall-clock time).
    #[serde(rename = "TIME", with = "timestamp")]
    pub time: NaiveDateTime,
    /// The signed profit of the round, insurance included.
    #[serde(rename = "PROFIT")]
    pub profit: f64,
}
