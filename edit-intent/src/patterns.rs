//! Ordered intent pattern table.
//!
//! Order encodes priority, not registration order: Flutter-specific groups
//! are checked before the general React groups, which are checked before the
//! caller-side default. First pattern group with a matching regex wins; there
//! is no scoring across groups.

use crate::model::EditType;
use crate::resolvers::{self, FileResolver};
use regex::Regex;
use std::sync::LazyLock;

/// One classifier rule: regexes to try against the lowercased prompt, the
/// edit type to report, and the resolver that picks target files.
pub struct IntentPattern {
    pub matchers: Vec<Regex>,
    pub edit_type: EditType,
    pub resolver: FileResolver,
}

static PATTERNS: LazyLock<Vec<IntentPattern>> = LazyLock::new(build_patterns);

/// The shared, compile-once pattern table.
pub fn table() -> &'static [IntentPattern] {
    &PATTERNS
}

fn group(patterns: &[&str], edit_type: EditType, resolver: FileResolver) -> IntentPattern {
    IntentPattern {
        matchers: patterns.iter().map(|p| Regex::new(p).unwrap()).collect(),
        edit_type,
        resolver,
    }
}

fn build_patterns() -> Vec<IntentPattern> {
    vec![
        // -- Flutter groups: must stay ahead of the React groups --
        group(
            &[
                r"\b(?:create|add|make|build)\s+(?:a\s+|an\s+|new\s+)?\w*\s*screen",
                r"new\s+screen",
                r"screen\s+(?:called|named|for)",
            ],
            EditType::CreateFlutterScreen,
            resolvers::find_flutter_screen_files,
        ),
        group(
            &[
                r"\b(?:create|add|make|build)\s+(?:a\s+|an\s+|new\s+)?(?:flutter\s+)?\w*\s*widget",
                r"(?:stateless|stateful)\s+widget",
                r"new\s+widget",
            ],
            EditType::CreateFlutterWidget,
            resolvers::find_flutter_insertion_points,
        ),
        group(
            &[
                r"(?:update|change|modify|edit)\s+(?:the\s+)?\w*\s*widget",
                r"widget\s+(?:color|text|style|size)",
            ],
            EditType::UpdateFlutterWidget,
            resolvers::find_flutter_widget_files,
        ),
        group(
            &[
                r"\b(?:add|create|set\s*up)\s+(?:\w+\s+)?navigation",
                r"navigate\s+to",
                r"(?:bottom\s+navigation|navigation\s+bar)",
            ],
            EditType::AddFlutterNavigation,
            resolvers::find_flutter_navigation_files,
        ),
        group(
            &[
                r"(?:add|install)\s+(?:the\s+)?(?:flutter|dart|pub)\s+package",
                r"\bpubspec\b",
                r"\bpub\s+(?:add|get)\b",
            ],
            EditType::AddFlutterPackage,
            resolvers::find_flutter_package_files,
        ),
        // -- General React groups --
        group(
            &[
                r"(?:update|change|modify|edit|adjust)\s+(?:the\s+)?\w+",
                r"make\s+(?:the\s+)?\w+\s+(?:bigger|smaller|larger|wider|taller)",
                r"(?:remove|delete|hide)\s+(?:the\s+)?\w+",
            ],
            EditType::UpdateComponent,
            resolvers::search_by_content,
        ),
        group(
            &[
                r"\badd\s+(?:a\s+|an\s+|new\s+)?\w+",
                r"\bcreate\s+(?:a\s+|an\s+|new\s+)?\w+",
                r"\bimplement\b",
                r"\bbuild\s+(?:a\s+|an\s+)?\w+",
            ],
            EditType::AddFeature,
            resolvers::find_feature_files,
        ),
        group(
            &[
                r"\bfix\b",
                r"\b(?:error|bug|issue|problem|broken|crash)\b",
                r"not\s+working",
                r"doesn'?t\s+work",
            ],
            EditType::FixIssue,
            resolvers::find_problem_files,
        ),
        group(
            &[
                r"\b(?:style|css|tailwind|theme)\b",
                r"(?:dark|light)\s+mode",
                r"(?:color\s+scheme|background\s+color)",
                r"\bresponsive\b",
            ],
            EditType::UpdateStyle,
            resolvers::find_style_files,
        ),
        group(
            &[
                r"\brefactor\b",
                r"clean\s+up",
                r"\b(?:reorganize|restructure)\b",
                r"\boptimi[sz]e\b",
            ],
            EditType::Refactor,
            resolvers::find_refactor_files,
        ),
        group(
            &[
                r"\b(?:rebuild|recreate)\b",
                r"start\s+over",
                r"from\s+scratch",
                r"completely\s+(?:new|different)",
            ],
            EditType::FullRebuild,
            resolvers::all_files,
        ),
        group(
            &[
                r"\b(?:install|add)\s+(?:the\s+)?(?:npm\s+)?(?:\w+\s+)?(?:package|library|dependency)",
                r"npm\s+install",
                r"yarn\s+add",
            ],
            EditType::AddDependency,
            resolvers::find_package_files,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_type(prompt: &str) -> Option<EditType> {
        let lower = prompt.to_lowercase();
        table()
            .iter()
            .find(|g| g.matchers.iter().any(|re| re.is_match(&lower)))
            .map(|g| g.edit_type)
    }

    #[test]
    fn flutter_groups_win_over_react_groups() {
        // "create" also matches the AddFeature group further down
        assert_eq!(
            match_type("create a login screen"),
            Some(EditType::CreateFlutterScreen)
        );
        assert_eq!(
            match_type("create a counter widget"),
            Some(EditType::CreateFlutterWidget)
        );
        assert_eq!(
            match_type("add bottom navigation"),
            Some(EditType::AddFlutterNavigation)
        );
    }

    #[test]
    fn general_groups_cover_react_prompts() {
        assert_eq!(
            match_type("change the header color"),
            Some(EditType::UpdateComponent)
        );
        assert_eq!(match_type("add a pricing section"), Some(EditType::AddFeature));
        assert_eq!(
            match_type("the page is broken"),
            Some(EditType::FixIssue)
        );
        assert_eq!(match_type("switch to dark mode"), Some(EditType::UpdateStyle));
        assert_eq!(
            match_type("refactor the api layer"),
            Some(EditType::Refactor)
        );
        assert_eq!(
            match_type("rebuild the site from scratch"),
            Some(EditType::FullRebuild)
        );
        assert_eq!(
            match_type("install the axios library"),
            Some(EditType::AddDependency)
        );
    }

    #[test]
    fn unmatched_prompt_yields_no_group() {
        assert_eq!(match_type("hello there"), None);
    }
}
