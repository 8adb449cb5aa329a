//! Balance values for the resolver.
//!
//! Loaded from JSON the same way content bundles are, then threaded into
//! every resolution call instead of living in a global.

use serde::{Deserialize, Serialize};

use super::error::{CollisionError, Result};

/// Max pixel height an actor walks up without being stopped by the wall
pub const DEFAULT_SLOPE_MAX_HEIGHT: i32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollisionConfig {
    #[serde(default = "default_slope_max_height")]
    pub slope_max_height: i32,
}

fn default_slope_max_height() -> i32 {
    DEFAULT_SLOPE_MAX_HEIGHT
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self { slope_max_height: DEFAULT_SLOPE_MAX_HEIGHT }
    }
}

impl CollisionConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CollisionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<()> {
        if self.slope_max_height < 0 {
            return Err(CollisionError::InvalidConfig(format!(
                "slopeMaxHeight must be >= 0, got {}",
                self.slope_max_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = CollisionConfig::from_json("{}").unwrap();
        assert_eq!(config, CollisionConfig::default());
        assert_eq!(config.slope_max_height, 8);
    }

    #[test]
    fn camel_case_keys() {
        let config = CollisionConfig::from_json(r#"{"slopeMaxHeight": 12}"#).unwrap();
        assert_eq!(config.slope_max_height, 12);
        assert_eq!(config.to_json(), r#"{"slopeMaxHeight":12}"#);
    }

    #[test]
    fn negative_slope_is_rejected() {
        let err = CollisionConfig::from_json(r#"{"slopeMaxHeight": -1}"#).unwrap_err();
        assert!(matches!(err, CollisionError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = CollisionConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, CollisionError::Json(_)));
    }
}
