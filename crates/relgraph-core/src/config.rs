//! Relation derivation options.

use crate::error::{Error, Result};
use crate::naming::{BuiltinRelationNameFunction, CaseType, NameStrategy, RelationNameFunction};
use crate::relation::BridgeDetectionPolicy;
use serde::{Deserialize, Serialize};

/// Options for [`crate::compute_relations`].
#[derive(Debug, Clone, Default)]
pub struct RelationOptions {
    /// Naming strategy.
    pub name_strategy: NameStrategy,
    /// Case of generated names.
    pub case_type: CaseType,
    /// How join tables are recognised.
    pub bridge_detection: BridgeDetectionPolicy,
}

impl RelationOptions {
    /// Create options with defaults: short names, camelCase, strict junctions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the naming strategy.
    pub fn with_name_strategy(mut self, strategy: impl Into<NameStrategy>) -> Self {
        self.name_strategy = strategy.into();
        self
    }

    /// Use a custom naming function.
    pub fn with_name_function(mut self, f: RelationNameFunction) -> Self {
        self.name_strategy = NameStrategy::Custom(f);
        self
    }

    /// Set the case type.
    pub fn with_case_type(mut self, case_type: CaseType) -> Self {
        self.case_type = case_type;
        self
    }

    /// Set the bridge detection policy.
    pub fn with_bridge_detection(mut self, policy: BridgeDetectionPolicy) -> Self {
        self.bridge_detection = policy;
        self
    }
}

/// Serializable subset of [`RelationOptions`], as found in config files.
///
/// ```json
/// { "relationNameFunction": "descriptive", "caseType": "snakeCase" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelationConfig {
    /// Built-in naming strategy.
    pub relation_name_function: BuiltinRelationNameFunction,
    /// Case of generated names.
    pub case_type: CaseType,
    /// How join tables are recognised.
    pub bridge_detection: BridgeDetectionPolicy,
}

impl RelationConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Deserialization(e.to_string()))
    }
}

impl From<RelationConfig> for RelationOptions {
    fn from(config: RelationConfig) -> Self {
        RelationOptions {
            name_strategy: NameStrategy::Builtin(config.relation_name_function),
            case_type: config.case_type,
            bridge_detection: config.bridge_detection,
        }
    }
}
