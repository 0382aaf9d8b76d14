//! First-match-wins classification over the pattern table.

use crate::model::{EditIntent, EditType};
use crate::patterns;
use project_manifest::FileManifest;
use tracing::debug;

/// Classify a free-text prompt against the manifest.
///
/// Matching runs on a lowercased copy of the prompt; the matched group's
/// resolver receives the original-case prompt (name extraction needs real
/// casing). When no group matches, degrades to a low-confidence
/// `UPDATE_COMPONENT` intent targeting the manifest entry point — absence of
/// a match is not an error.
pub fn classify(prompt: &str, manifest: &FileManifest) -> EditIntent {
    let lower = prompt.to_lowercase();

    for pattern in patterns::table() {
        let matched = pattern.matchers.iter().any(|re| re.is_match(&lower));
        if !matched {
            continue;
        }

        let target_files = (pattern.resolver)(prompt, manifest);
        let confidence = score_confidence(prompt, &target_files, true);
        let description = format!(
            "{} affecting {} file(s)",
            pattern.edit_type.label(),
            target_files.len()
        );
        let suggested_context: Vec<String> = manifest
            .files
            .keys()
            .filter(|path| !target_files.contains(path))
            .cloned()
            .collect();

        debug!(
            edit_type = %pattern.edit_type,
            targets = target_files.len(),
            confidence,
            "Classified prompt"
        );

        return EditIntent {
            edit_type: pattern.edit_type,
            target_files,
            confidence,
            description,
            suggested_context,
        };
    }

    debug!("No pattern matched, falling back to entry point");
    EditIntent {
        edit_type: EditType::UpdateComponent,
        target_files: vec![manifest.entry_point.clone()],
        confidence: 0.3,
        description: "General component update".to_string(),
        suggested_context: Vec::new(),
    }
}

/// Deterministic additive score, clamped to `[0, 1]`.
///
/// Not a probability: successful matches bottom out near 0.5-0.9.
fn score_confidence(prompt: &str, targets: &[String], matched: bool) -> f32 {
    let mut score = 0.5_f32;
    let has_targets = !targets.is_empty() && !(targets.len() == 1 && targets[0].is_empty());
    if has_targets {
        score += 0.2;
    }
    if prompt.split_whitespace().count() > 5 {
        score += 0.1;
    }
    if matched {
        score += 0.2;
    }
    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use project_manifest::{FileInfo, FileType};
    use std::collections::BTreeSet;

    fn react_manifest() -> FileManifest {
        let mut m = FileManifest::new("src/main.jsx");
        m.insert_file("src/main.jsx", FileInfo::new("", FileType::Utility));
        m.insert_file("src/App.jsx", FileInfo::new("", FileType::Component));
        m.insert_file("src/Header.jsx", FileInfo::new("", FileType::Component));
        m
    }

    #[test]
    fn flutter_screen_prompt_targets_entry_point_without_dart_files() {
        let m = react_manifest();
        let intent = classify("create a login screen with app bar", &m);
        assert_eq!(intent.edit_type, EditType::CreateFlutterScreen);
        assert_eq!(intent.target_files, vec!["src/main.jsx".to_string()]);
    }

    #[test]
    fn header_color_prompt_resolves_header_file() {
        let m = react_manifest();
        let intent = classify("change the header color", &m);
        assert_eq!(intent.edit_type, EditType::UpdateComponent);
        assert_eq!(intent.target_files, vec!["src/Header.jsx".to_string()]);
    }

    #[test]
    fn unmatched_prompt_degrades_to_default() {
        let m = react_manifest();
        let intent = classify("hello there", &m);
        assert_eq!(intent.edit_type, EditType::UpdateComponent);
        assert_eq!(intent.target_files, vec!["src/main.jsx".to_string()]);
        assert_eq!(intent.confidence, 0.3);
        assert!(intent.suggested_context.is_empty());
    }

    #[test]
    fn context_excludes_targets_and_covers_the_rest() {
        let m = react_manifest();
        let intent = classify("change the header color", &m);
        for target in &intent.target_files {
            assert!(!intent.suggested_context.contains(target));
        }
        let union: BTreeSet<&String> = intent
            .target_files
            .iter()
            .chain(intent.suggested_context.iter())
            .collect();
        let all: BTreeSet<&String> = m.files.keys().collect();
        assert_eq!(union, all);
    }

    #[test]
    fn classification_is_deterministic() {
        let m = react_manifest();
        let a = classify("change the header color", &m);
        let b = classify("change the header color", &m);
        assert_eq!(a, b);
    }

    #[test]
    fn confidence_rewards_targets_and_long_prompts() {
        let m = react_manifest();
        let short = classify("change the header", &m);
        let long = classify("change the header so it looks much nicer please", &m);
        assert!((short.confidence - 0.9).abs() < 1e-3);
        assert!((long.confidence - 1.0).abs() < 1e-3);
    }
}
