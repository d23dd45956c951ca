//! Tree Configuration
//!
//! Stopping rules and post-processing options used when growing a tree.
use crate::errors::ArborError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_min_gain() -> f64 {
    0.0
}
fn default_max_depth() -> Option<usize> {
    None
}
fn default_prune() -> bool {
    false
}

/// Options for [`crate::Tree::fit`].
///
/// The defaults grow the tree until every leaf is pure or no attribute
/// has positive information gain, and do not prune.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TreeConfig {
    /// A node is split only if the best gain is strictly greater than this.
    #[serde(default = "default_min_gain")]
    pub min_gain: f64,
    /// Nodes at this depth are not split any further.
    #[serde(default = "default_max_depth")]
    pub max_depth: Option<usize>,
    /// Run reduced-error pruning on the training counts once the tree is grown.
    #[serde(default = "default_prune")]
    pub prune: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            min_gain: default_min_gain(),
            max_depth: default_max_depth(),
            prune: default_prune(),
        }
    }
}

impl TreeConfig {
    pub fn set_min_gain(mut self, min_gain: f64) -> Self {
        self.min_gain = min_gain;
        self
    }

    pub fn set_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn set_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    pub fn validate(&self) -> Result<(), ArborError> {
        if !self.min_gain.is_finite() || self.min_gain < 0. {
            return Err(ArborError::InvalidParameter(
                "min_gain".to_string(),
                "a finite value >= 0".to_string(),
                self.min_gain.to_string(),
            ));
        }
        Ok(())
    }

    /// Load a configuration from a json string, missing fields take their defaults.
    pub fn from_json(json_str: &str) -> Result<Self, ArborError> {
        let config: TreeConfig = serde_json::from_str(json_str).map_err(|e| ArborError::UnableToRead(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn json_dump(&self) -> Result<String, ArborError> {
        serde_json::to_string(self).map_err(|e| ArborError::UnableToWrite(e.to_string()))
    }

    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, ArborError> {
        let json_str = fs::read_to_string(path).map_err(|e| ArborError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }

    pub fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<(), ArborError> {
        fs::write(path, self.json_dump()?).map_err(|e| ArborError::UnableToWrite(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = TreeConfig::from_json(r#"{"max_depth": 3}"#).unwrap();
        assert_eq!(config, TreeConfig::default().set_max_depth(Some(3)));
        let config = TreeConfig::from_json("{}").unwrap();
        assert_eq!(config, TreeConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let config = TreeConfig::default().set_min_gain(0.25).set_prune(true);
        let s = config.json_dump().unwrap();
        assert_eq!(TreeConfig::from_json(&s).unwrap(), config);
    }

    #[test]
    fn test_invalid_min_gain() {
        assert!(matches!(
            TreeConfig::default().set_min_gain(-0.5).validate(),
            Err(ArborError::InvalidParameter(..))
        ));
        assert!(TreeConfig::default().set_min_gain(f64::NAN).validate().is_err());
        assert!(TreeConfig::from_json(r#"{"min_gain": -1.0}"#).is_err());
        assert!(matches!(TreeConfig::from_json("not json"), Err(ArborError::UnableToRead(_))));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join("arbor_test_config.json");
        let config = TreeConfig::default().set_max_depth(Some(2));
        config.save_config(&path).unwrap();
        assert_eq!(TreeConfig::load_config(&path).unwrap(), config);
        fs::remove_file(&path).unwrap();
        assert!(TreeConfig::load_config(&path).is_err());
    }
}
