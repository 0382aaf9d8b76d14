//! Structured Flutter package manifest (pubspec) handling.
//!
//! Parsing and serialization go through `serde_yml`; dependency values stay
//! as raw YAML values because pub allows both plain version strings and
//! maps (`sdk:`, `path:`, `git:`).

use crate::error::Result;
use crate::naming::to_snake_case;
use serde::{Deserialize, Serialize};
use serde_yml::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub sdk: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlutterSection {
    #[serde(
        default,
        rename = "uses-material-design",
        skip_serializing_if = "Option::is_none"
    )]
    pub uses_material_design: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fonts: Vec<Value>,
}

/// A parsed `pubspec.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PubspecData {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: String,
    pub environment: Environment,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dev_dependencies: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flutter: Option<FlutterSection>,
}

/// Add/remove operations over [`PubspecData`] plus the default manifest.
pub struct FlutterPackageManager;

impl FlutterPackageManager {
    /// Parse pubspec text.
    ///
    /// # Errors
    /// [`crate::CodegenError::PubspecParse`] for malformed YAML — upstream
    /// configuration errors, not user-input edge cases.
    pub fn parse(text: &str) -> Result<PubspecData> {
        Ok(serde_yml::from_str(text)?)
    }

    /// Serialize back to YAML text.
    pub fn serialize(pubspec: &PubspecData) -> Result<String> {
        Ok(serde_yml::to_string(pubspec)?)
    }

    pub fn add_dependency(pubspec: &mut PubspecData, name: &str, version: &str) {
        pubspec
            .dependencies
            .insert(name.to_string(), Value::String(version.to_string()));
    }

    pub fn add_dev_dependency(pubspec: &mut PubspecData, name: &str, version: &str) {
        pubspec
            .dev_dependencies
            .insert(name.to_string(), Value::String(version.to_string()));
    }

    /// Remove a dependency from both tables; reports whether anything was
    /// actually removed.
    pub fn remove_dependency(pubspec: &mut PubspecData, name: &str) -> bool {
        let in_deps = pubspec.dependencies.remove(name).is_some();
        let in_dev = pubspec.dev_dependencies.remove(name).is_some();
        in_deps || in_dev
    }

    /// Default manifest for a fresh Flutter app. The package name is the
    /// snake_cased project name.
    pub fn create_default_pubspec(project_name: &str) -> PubspecData {
        let mut dependencies = BTreeMap::new();
        dependencies.insert("flutter".to_string(), sdk_dependency());
        dependencies.insert(
            "cupertino_icons".to_string(),
            Value::String("^1.0.8".to_string()),
        );

        let mut dev_dependencies = BTreeMap::new();
        dev_dependencies.insert("flutter_test".to_string(), sdk_dependency());
        dev_dependencies.insert(
            "flutter_lints".to_string(),
            Value::String("^4.0.0".to_string()),
        );

        PubspecData {
            name: to_snake_case(project_name),
            description: Some("A new Flutter project.".to_string()),
            version: "1.0.0+1".to_string(),
            environment: Environment {
                sdk: ">=3.0.0 <4.0.0".to_string(),
            },
            dependencies,
            dev_dependencies,
            flutter: Some(FlutterSection {
                uses_material_design: Some(true),
                assets: Vec::new(),
                fonts: Vec::new(),
            }),
        }
    }
}

fn sdk_dependency() -> Value {
    let mut map = serde_yml::Mapping::new();
    map.insert(
        Value::String("sdk".to_string()),
        Value::String("flutter".to_string()),
    );
    Value::Mapping(map)
}
