//! Closed enumerations shared by the request and the rule engine.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Strictness tier requested by the caller.
///
/// Tiers are ordered: a check enabled at some tier stays enabled at every
/// higher tier, and a check that escalates to an error at some tier stays an
/// error above it. The numeric ordinals match the historic validation levels
/// (`0`, `20`, `30`, `31`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidationLevel {
    /// Only the checks needed to process the model at all.
    Minimal,
    /// Legacy tier: what 2.x builds tolerated.
    Maven20,
    /// Modern tier.
    Maven30,
    /// Forward-looking tier; promotes hygiene warnings to errors.
    Maven31,
}

impl ValidationLevel {
    /// The tier used when the caller asks for strict validation.
    pub const STRICT: ValidationLevel = ValidationLevel::Maven30;

    /// The tier tolerated for models authored for 2.x builds.
    pub const LEGACY: ValidationLevel = ValidationLevel::Maven20;

    pub const ALL: [ValidationLevel; 4] = [
        ValidationLevel::Minimal,
        ValidationLevel::Maven20,
        ValidationLevel::Maven30,
        ValidationLevel::Maven31,
    ];

    pub fn ordinal(self) -> u8 {
        match self {
            ValidationLevel::Minimal => 0,
            ValidationLevel::Maven20 => 20,
            ValidationLevel::Maven30 => 30,
            ValidationLevel::Maven31 => 31,
        }
    }

    pub fn from_ordinal(ordinal: u64) -> Option<Self> {
        match ordinal {
            0 => Some(ValidationLevel::Minimal),
            20 => Some(ValidationLevel::Maven20),
            30 => Some(ValidationLevel::Maven30),
            31 => Some(ValidationLevel::Maven31),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValidationLevel::Minimal => "minimal",
            ValidationLevel::Maven20 => "maven-2.0",
            ValidationLevel::Maven30 => "maven-3.0",
            ValidationLevel::Maven31 => "maven-3.1",
        }
    }
}

impl Default for ValidationLevel {
    fn default() -> Self {
        ValidationLevel::STRICT
    }
}

impl fmt::Display for ValidationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a validation level name or ordinal is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown validation level '{0}' (expected minimal, maven-2.0, maven-3.0, maven-3.1, strict or 0/20/30/31)")]
pub struct UnknownLevel(pub String);

impl FromStr for ValidationLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "minimal" => Ok(ValidationLevel::Minimal),
            "maven-2.0" | "maven20" | "legacy" => Ok(ValidationLevel::Maven20),
            "maven-3.0" | "maven30" | "strict" => Ok(ValidationLevel::Maven30),
            "maven-3.1" | "maven31" => Ok(ValidationLevel::Maven31),
            other => other
                .parse::<u64>()
                .ok()
                .and_then(ValidationLevel::from_ordinal)
                .ok_or_else(|| UnknownLevel(trimmed.to_string())),
        }
    }
}

impl Serialize for ValidationLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Accepts either a tier name (`"maven-3.0"`, `"strict"`) or a numeric
/// ordinal (`30`).
impl<'de> Deserialize<'de> for ValidationLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match &value {
            Value::String(s) => s.parse().map_err(serde::de::Error::custom),
            Value::Number(n) => n
                .as_u64()
                .and_then(ValidationLevel::from_ordinal)
                .ok_or_else(|| serde::de::Error::custom(UnknownLevel(n.to_string()))),
            _ => Err(serde::de::Error::custom(
                "validation level must be a string or an integer",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered() {
        assert!(ValidationLevel::Minimal < ValidationLevel::LEGACY);
        assert!(ValidationLevel::LEGACY < ValidationLevel::STRICT);
        assert!(ValidationLevel::STRICT < ValidationLevel::Maven31);
    }

    #[test]
    fn parses_names_and_ordinals() {
        assert_eq!("strict".parse(), Ok(ValidationLevel::Maven30));
        assert_eq!("Maven-2.0".parse(), Ok(ValidationLevel::Maven20));
        assert_eq!("31".parse(), Ok(ValidationLevel::Maven31));
        assert_eq!("0".parse(), Ok(ValidationLevel::Minimal));
        assert!("25".parse::<ValidationLevel>().is_err());
        assert!("lenient".parse::<ValidationLevel>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for level in ValidationLevel::ALL {
            assert_eq!(level.to_string().parse(), Ok(level));
        }
    }

    #[test]
    fn deserializes_from_integer() {
        let level: ValidationLevel = serde_json::from_str("20").unwrap();
        assert_eq!(level, ValidationLevel::Maven20);
        assert!(serde_json::from_str::<ValidationLevel>("21").is_err());
        assert!(serde_json::from_str::<ValidationLevel>("true").is_err());
    }
}
