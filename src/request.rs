use serde::{Deserialize, Serialize};

use crate::enums::ValidationLevel;

/// Options for one validation call.
///
/// Deserializable so callers can keep it alongside the rest of their build
/// configuration:
///
/// ```
/// let request: pomcheck::ValidationRequest =
///     serde_json::from_str(r#"{ "level": "maven-2.0" }"#).unwrap();
/// assert_eq!(request.level, pomcheck::ValidationLevel::LEGACY);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRequest {
    pub level: ValidationLevel,
}

impl ValidationRequest {
    /// A request at [`ValidationLevel::STRICT`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self::new().with_level(ValidationLevel::STRICT)
    }

    pub fn legacy() -> Self {
        Self::new().with_level(ValidationLevel::LEGACY)
    }

    pub fn with_level(mut self, level: ValidationLevel) -> Self {
        self.level = level;
        self
    }
}
