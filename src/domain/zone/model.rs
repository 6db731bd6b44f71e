//! Zone domain entity

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::error::{PricingError, PricingResult};

/// Pricing zone. Each zone has its own column in the rate sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZoneId {
    /// United Kingdom and Ireland
    Zone1,
    /// West Africa
    Zone2,
    /// Canada, USA and Mexico
    Zone3,
    /// Australia and Oceania
    Zone4,
}

impl ZoneId {
    pub const fn all() -> [ZoneId; 4] {
        [Self::Zone1, Self::Zone2, Self::Zone3, Self::Zone4]
    }

    /// Human-readable region label, as shown in the rate sheet header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Zone1 => "UK (Zone 1)",
            Self::Zone2 => "West Africa (Zone 2)",
            Self::Zone3 => "Canada & USA (Zone 3)",
            Self::Zone4 => "Australia (Zone 4)",
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Self::Zone1 => 1,
            Self::Zone2 => 2,
            Self::Zone3 => 3,
            Self::Zone4 => 4,
        }
    }

    /// Column position in a rate row.
    pub(crate) fn index(&self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl TryFrom<u8> for ZoneId {
    type Error = PricingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Zone1),
            2 => Ok(Self::Zone2),
            3 => Ok(Self::Zone3),
            4 => Ok(Self::Zone4),
            other => Err(PricingError::InvalidZone(other.to_string())),
        }
    }
}

impl FromStr for ZoneId {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| PricingError::InvalidZone(s.to_string()))
            .and_then(ZoneId::try_from)
    }
}

impl Serialize for ZoneId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ZoneId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ZoneVisitor;

        impl<'de> Visitor<'de> for ZoneVisitor {
            type Value = ZoneId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a zone number 1-4")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ZoneId, E> {
                u8::try_from(v)
                    .map_err(|_| PricingError::InvalidZone(v.to_string()))
                    .and_then(ZoneId::try_from)
                    .map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ZoneId, E> {
                u8::try_from(v)
                    .map_err(|_| PricingError::InvalidZone(v.to_string()))
                    .and_then(ZoneId::try_from)
                    .map_err(E::custom)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ZoneId, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(ZoneVisitor)
    }
}

/// Normalize a country name for lookup: trimmed and lower-cased.
pub fn normalize_country(name: &str) -> String {
    name.trim().to_lowercase()
}

const DEFAULT_ALIASES: &[(&str, ZoneId)] = &[
    // Zone 1
    ("uk", ZoneId::Zone1),
    ("united kingdom", ZoneId::Zone1),
    ("greatbritain", ZoneId::Zone1),
    ("great britain", ZoneId::Zone1),
    ("england", ZoneId::Zone1),
    ("scotland", ZoneId::Zone1),
    ("wales", ZoneId::Zone1),
    ("northern ireland", ZoneId::Zone1),
    ("ireland", ZoneId::Zone1),
    // Zone 2
    ("cameroon", ZoneId::Zone2),
    ("ghana", ZoneId::Zone2),
    ("senegal", ZoneId::Zone2),
    ("côte d'ivoire", ZoneId::Zone2),
    ("ivory coast", ZoneId::Zone2),
    ("benin", ZoneId::Zone2),
    ("togo", ZoneId::Zone2),
    // domestic origin, but it can still receive from other zones
    ("nigeria", ZoneId::Zone2),
    ("burkinafaso", ZoneId::Zone2),
    ("burkina faso", ZoneId::Zone2),
    ("mali", ZoneId::Zone2),
    ("niger", ZoneId::Zone2),
    ("gambia", ZoneId::Zone2),
    ("sierra leone", ZoneId::Zone2),
    ("sierraleone", ZoneId::Zone2),
    ("liberia", ZoneId::Zone2),
    ("equatorialguinea", ZoneId::Zone2),
    ("equatorial guinea", ZoneId::Zone2),
    ("gabon", ZoneId::Zone2),
    ("congo", ZoneId::Zone2),
    // Zone 3
    ("usa", ZoneId::Zone3),
    ("united states", ZoneId::Zone3),
    ("united states of america", ZoneId::Zone3),
    ("unitedstates", ZoneId::Zone3),
    ("america", ZoneId::Zone3),
    ("canada", ZoneId::Zone3),
    ("mexico", ZoneId::Zone3),
    // Zone 4
    ("australia", ZoneId::Zone4),
    ("new zealand", ZoneId::Zone4),
    ("newzealand", ZoneId::Zone4),
    ("fiji", ZoneId::Zone4),
    ("papua new guinea", ZoneId::Zone4),
    ("papuanewguinea", ZoneId::Zone4),
    ("samoa", ZoneId::Zone4),
    ("solomon islands", ZoneId::Zone4),
    ("solomonislands", ZoneId::Zone4),
];

/// Country name → zone lookup.
///
/// Keys are stored normalized (see [`normalize_country`]); queries are
/// normalized the same way before lookup.
#[derive(Debug, Clone, Default)]
pub struct CountryZoneMap {
    aliases: HashMap<String, ZoneId>,
}

impl CountryZoneMap {
    /// An empty map. Every lookup misses until aliases are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in alias list.
    pub fn with_defaults() -> Self {
        let aliases = DEFAULT_ALIASES
            .iter()
            .map(|(name, zone)| (normalize_country(name), *zone))
            .collect();
        Self { aliases }
    }

    /// Add or replace an alias. Returns the zone it previously pointed at.
    pub fn insert(&mut self, alias: &str, zone: ZoneId) -> PricingResult<Option<ZoneId>> {
        let key = normalize_country(alias);
        if key.is_empty() {
            return Err(PricingError::EmptyAlias);
        }
        Ok(self.aliases.insert(key, zone))
    }

    /// Resolve a free-text country name. `None` means the destination is
    /// unsupported, including empty or whitespace-only input.
    pub fn resolve(&self, country: &str) -> Option<ZoneId> {
        let key = normalize_country(country);
        if key.is_empty() {
            return None;
        }
        self.aliases.get(&key).copied()
    }

    /// Sorted aliases that map to `zone`.
    pub fn countries_in(&self, zone: ZoneId) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .aliases
            .iter()
            .filter(|(_, z)| **z == zone)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

// ── Tests ──────────────────────────────────────────────────────
