//! Manifest data structures and invariant checks.
//!
//! Keys of [`FileManifest::files`] are project-relative paths and must be
//! unique (enforced by the map). Every file referenced from the component
//! tree must exist in `files`; [`FileManifest::validate`] checks this.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Semantic tag for a tracked file.
///
/// Keep the set closed; the classifier and resolvers branch on these values
/// and unknown tags would silently fall through.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    Component,
    Page,
    Style,
    Config,
    Utility,
    Layout,
    Hook,
    Context,
    FlutterWidget,
    FlutterScreen,
    FlutterConfig,
}

impl Display for FileType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FileType::Component => "component",
            FileType::Page => "page",
            FileType::Style => "style",
            FileType::Config => "config",
            FileType::Utility => "utility",
            FileType::Layout => "layout",
            FileType::Hook => "hook",
            FileType::Context => "context",
            FileType::FlutterWidget => "flutter_widget",
            FileType::FlutterScreen => "flutter_screen",
            FileType::FlutterConfig => "flutter_config",
        })
    }
}

impl FileType {
    /// Best-effort detection from a project-relative path.
    ///
    /// Conservative by design: anything unrecognized lands in `Utility` so
    /// callers never see a missing tag.
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_lowercase();
        let name = lower.rsplit('/').next().unwrap_or(&lower);
        if lower.ends_with(".css") || lower.ends_with(".scss") {
            return FileType::Style;
        }
        if name == "pubspec.yaml" || name == "pubspec.yml" {
            return FileType::FlutterConfig;
        }
        if lower.ends_with(".dart") {
            if lower.contains("screens/") || lower.contains("pages/") {
                return FileType::FlutterScreen;
            }
            return FileType::FlutterWidget;
        }
        if name == "package.json" || name.ends_with(".config.js") || name == "tsconfig.json" {
            return FileType::Config;
        }
        if lower.ends_with(".jsx") || lower.ends_with(".tsx") {
            if name.contains("layout") {
                return FileType::Layout;
            }
            if name.contains("context") {
                return FileType::Context;
            }
            if name.starts_with("use") {
                return FileType::Hook;
            }
            if lower.contains("pages/") {
                return FileType::Page;
            }
            return FileType::Component;
        }
        FileType::Utility
    }
}

/// React component metadata attached to a file, when known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInfo {
    pub name: String,
    #[serde(default)]
    pub child_components: Vec<String>,
    #[serde(default)]
    pub has_state: bool,
}

/// Flutter widget metadata attached to a file, when known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlutterWidgetInfo {
    pub name: String,
    #[serde(default)]
    pub stateful: bool,
}

/// One tracked file: content plus everything the resolvers search on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    pub content: String,
    pub file_type: FileType,
    #[serde(default)]
    pub exports: Option<Vec<String>>,
    #[serde(default)]
    pub imports: Option<Vec<String>>,
    #[serde(default)]
    pub component_info: Option<ComponentInfo>,
    #[serde(default)]
    pub flutter_widget_info: Option<FlutterWidgetInfo>,
    /// Unix millis of the last observed modification.
    pub last_modified: i64,
    #[serde(default)]
    pub relative_path: String,
}

impl FileInfo {
    /// Minimal constructor; metadata fields start empty and the timestamp is
    /// the current time.
    pub fn new(content: impl Into<String>, file_type: FileType) -> Self {
        Self {
            content: content.into(),
            file_type,
            exports: None,
            imports: None,
            component_info: None,
            flutter_widget_info: None,
            last_modified: Utc::now().timestamp_millis(),
            relative_path: String::new(),
        }
    }
}

/// One page-routing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    pub path: String,
    pub component: String,
    #[serde(default)]
    pub layout: Option<String>,
}

/// Forward-and-reverse import graph entry for one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentTreeNode {
    pub file: String,
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub imported_by: Vec<String>,
    pub file_type: FileType,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("component tree entry '{component}' points at unknown file '{file}'")]
    MissingTreeFile { component: String, file: String },
}

/// Point-in-time snapshot of a project's files and their relationships.
///
/// `files` is a `BTreeMap` so that iteration order (and therefore resolver
/// output) is deterministic for identical inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileManifest {
    pub files: BTreeMap<String, FileInfo>,
    #[serde(default)]
    pub routes: Vec<RouteInfo>,
    #[serde(default)]
    pub component_tree: BTreeMap<String, ComponentTreeNode>,
    /// Canonical bootstrap file; fallback target when nothing else matches.
    pub entry_point: String,
    #[serde(default)]
    pub style_files: Vec<String>,
    /// Unix millis of the snapshot.
    pub timestamp: i64,
}

impl FileManifest {
    pub fn new(entry_point: impl Into<String>) -> Self {
        Self {
            files: BTreeMap::new(),
            routes: Vec::new(),
            component_tree: BTreeMap::new(),
            entry_point: entry_point.into(),
            style_files: Vec::new(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Insert a file, filling `relative_path` from the key when unset.
    pub fn insert_file(&mut self, path: impl Into<String>, mut info: FileInfo) {
        let path = path.into();
        if info.relative_path.is_empty() {
            info.relative_path = path.clone();
        }
        self.files.insert(path, info);
    }

    /// Iterate all tracked paths in deterministic order.
    pub fn file_paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    /// Check the component-tree invariant: every referenced file exists.
    pub fn validate(&self) -> Result<(), ManifestError> {
        for (component, node) in &self.component_tree {
            if !self.files.contains_key(&node.file) {
                return Err(ManifestError::MissingTreeFile {
                    component: component.clone(),
                    file: node.file.clone(),
                });
            }
        }
        Ok(())
    }
}
