//! Intent model: the closed edit-type enumeration and the classifier output.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Closed enumeration of edit operations a prompt can request.
///
/// Wire values keep the upper-snake spelling used by the code-application
/// pipeline that consumes them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditType {
    UpdateComponent,
    AddFeature,
    FixIssue,
    Refactor,
    FullRebuild,
    UpdateStyle,
    AddDependency,
    CreateFlutterWidget,
    CreateFlutterScreen,
    UpdateFlutterWidget,
    AddFlutterNavigation,
    AddFlutterPackage,
}

impl EditType {
    /// Human-readable label used in intent descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            EditType::UpdateComponent => "Update component",
            EditType::AddFeature => "Add feature",
            EditType::FixIssue => "Fix issue",
            EditType::Refactor => "Refactor",
            EditType::FullRebuild => "Full rebuild",
            EditType::UpdateStyle => "Update style",
            EditType::AddDependency => "Add dependency",
            EditType::CreateFlutterWidget => "Create Flutter widget",
            EditType::CreateFlutterScreen => "Create Flutter screen",
            EditType::UpdateFlutterWidget => "Update Flutter widget",
            EditType::AddFlutterNavigation => "Add Flutter navigation",
            EditType::AddFlutterPackage => "Add Flutter package",
        }
    }
}

impl Display for EditType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifier output: which edit to perform, where, and how confident we are.
///
/// Created fresh per classification call and consumed immediately; never
/// persisted. `confidence` is a deterministic heuristic proxy in `[0, 1]`,
/// not a probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditIntent {
    #[serde(rename = "type")]
    pub edit_type: EditType,
    pub target_files: Vec<String>,
    pub confidence: f32,
    pub description: String,
    /// All manifest files except the targets, offered as background context.
    pub suggested_context: Vec<String>,
}
