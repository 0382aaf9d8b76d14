//! File resolvers: heuristic `(prompt, manifest) -> [path]` policies.
//!
//! Every resolver is pure and deterministic for identical inputs — no
//! randomness, no I/O. The search heuristics are intentionally biased toward
//! precision over recall: when a name search accumulates several candidates,
//! only the first is kept.

use project_manifest::FileManifest;
use regex::Regex;

/// Resolver function signature used by the pattern table.
pub type FileResolver = fn(&str, &FileManifest) -> Vec<String>;

/// Words carrying no component-name information; stripped before name search.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "into", "make", "change", "update", "modify", "edit",
    "fix", "add", "create", "build", "remove", "delete", "hide", "show", "new", "more", "less",
    "please", "can", "you", "this", "that", "section", "component", "page", "file", "style",
    "color", "colour",
];

/// Common UI-element nouns tried as a fallback when no prompt word matches.
const COMMON_ELEMENTS: &[&str] = &[
    "header",
    "footer",
    "nav",
    "sidebar",
    "button",
    "card",
    "modal",
    "hero",
    "banner",
    "about",
    "services",
    "features",
    "testimonials",
    "gallery",
    "contact",
    "team",
    "pricing",
];

/// Flutter-agnostic noise words stripped before widget-name matching.
const FLUTTER_STOP_WORDS: &[&str] = &[
    "the", "flutter", "widget", "update", "change", "modify", "create", "add", "make", "new",
    "screen", "page",
];

/// Common Flutter element nouns tried as a widget-file fallback.
const FLUTTER_ELEMENTS: &[&str] = &[
    "button",
    "card",
    "list",
    "container",
    "column",
    "row",
    "scaffold",
];

fn file_name_lower(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_lowercase()
}

fn file_stem_lower(path: &str) -> String {
    let name = file_name_lower(path);
    match name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => name,
    }
}

fn dedup_preserve_order(paths: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    for p in paths {
        if !seen.contains(&p) {
            seen.push(p);
        }
    }
    seen
}

/// Candidate component words: lowercased prompt tokens minus stop words and
/// short tokens.
fn component_words(prompt: &str) -> Vec<String> {
    prompt
        .to_lowercase()
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|w| w.len() > 2 && !STOP_WORDS.contains(&w.as_str()))
        .collect()
}

/// By-name search: match candidate prompt words against file names and
/// component names, falling back to common UI-element nouns, then to the
/// manifest entry point.
pub fn search_by_name(prompt: &str, manifest: &FileManifest) -> Vec<String> {
    let lower = prompt.to_lowercase();
    let words = component_words(prompt);

    let mut matches = Vec::new();
    for (path, info) in &manifest.files {
        let name = file_name_lower(path);
        for word in &words {
            let in_name = name.contains(word.as_str());
            let in_component = info
                .component_info
                .as_ref()
                .is_some_and(|c| c.name.to_lowercase().contains(word.as_str()));
            if in_name || in_component {
                matches.push(path.clone());
                break;
            }
        }
    }
    // precision over recall: keep only the first accumulated match
    if matches.len() > 1 {
        matches.truncate(1);
    }
    if !matches.is_empty() {
        return matches;
    }

    for element in COMMON_ELEMENTS {
        if !lower.contains(element) {
            continue;
        }
        // exact: file name (minus extension) equals the element
        if let Some(path) = manifest
            .files
            .keys()
            .find(|p| file_stem_lower(p) == *element)
        {
            return vec![path.clone()];
        }
        // partial: file name contains the element
        if let Some(path) = manifest
            .files
            .keys()
            .find(|p| file_name_lower(p).contains(element))
        {
            return vec![path.clone()];
        }
    }

    vec![manifest.entry_point.clone()]
}

/// By-content search: look for quoted prompt substrings (or the object of a
/// remove/delete/hide phrase) inside `.jsx`/`.tsx` file contents. Falls back
/// to [`search_by_name`] when nothing matches.
pub fn search_by_content(prompt: &str, manifest: &FileManifest) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();

    let re_quoted = Regex::new(r#""([^"]+)"|'([^']+)'"#).unwrap();
    for cap in re_quoted.captures_iter(prompt) {
        if let Some(m) = cap.get(1).or_else(|| cap.get(2)) {
            terms.push(m.as_str().to_lowercase());
        }
    }

    let re_removal =
        Regex::new(r"(?:remove|delete|hide)\s+(?:the\s+)?(.+?)\s+(?:button|link|text|element|section)")
            .unwrap();
    if let Some(cap) = re_removal.captures(&prompt.to_lowercase()) {
        terms.push(cap[1].trim().to_string());
    }

    if !terms.is_empty() {
        for (path, info) in &manifest.files {
            if !(path.ends_with(".jsx") || path.ends_with(".tsx")) {
                continue;
            }
            let content = info.content.to_lowercase();
            if terms.iter().any(|t| content.contains(t.as_str())) {
                return vec![path.clone()];
            }
        }
    }

    search_by_name(prompt, manifest)
}

/// Insertion points for a new feature: router files for pages, an explicit
/// "in/to/on/inside <location>" target for components, entry point otherwise.
pub fn find_feature_files(prompt: &str, manifest: &FileManifest) -> Vec<String> {
    let lower = prompt.to_lowercase();
    let mut targets = Vec::new();

    if lower.contains("page") {
        for (path, info) in &manifest.files {
            let is_router = info.content.contains("Route")
                || info.content.contains("createBrowserRouter")
                || path.contains("router")
                || path.contains("routes");
            if is_router {
                targets.push(path.clone());
            }
        }
        // the entry point is where new routes get wired up
        targets.push(manifest.entry_point.clone());
    }

    if lower.contains("component")
        || lower.contains("section")
        || lower.contains("add")
        || lower.contains("create")
    {
        let re_location = Regex::new(r"\b(?:in|to|on|inside)\s+(?:the\s+)?(\w+)").unwrap();
        if let Some(cap) = re_location.captures(&lower) {
            targets.extend(search_by_name(&cap[1], manifest));
        } else {
            for word in component_words(prompt) {
                let found = search_by_name(&word, manifest);
                // a bare entry-point fallback carries no signal here
                if found != [manifest.entry_point.clone()] {
                    targets.extend(found);
                }
            }
        }
    }

    if targets.is_empty() {
        targets.push(manifest.entry_point.clone());
    }
    dedup_preserve_order(targets)
}

/// Files likely involved in a reported problem: the five most recently
/// modified files plus any by-name matches.
pub fn find_problem_files(prompt: &str, manifest: &FileManifest) -> Vec<String> {
    let lower = prompt.to_lowercase();
    let mentions_problem = ["error", "bug", "issue", "problem", "broken"]
        .iter()
        .any(|k| lower.contains(k))
        || lower.contains("not working");

    let mut targets = Vec::new();
    if mentions_problem {
        let mut by_time: Vec<(&String, i64)> = manifest
            .files
            .iter()
            .map(|(path, info)| (path, info.last_modified))
            .collect();
        by_time.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        targets.extend(by_time.into_iter().take(5).map(|(path, _)| path.clone()));
    }
    targets.extend(search_by_name(prompt, manifest));
    dedup_preserve_order(targets)
}

/// All stylesheet files, the Tailwind config if present, and by-name matches.
pub fn find_style_files(prompt: &str, manifest: &FileManifest) -> Vec<String> {
    let mut targets = manifest.style_files.clone();
    if let Some(path) = manifest
        .files
        .keys()
        .find(|p| p.contains("tailwind.config"))
    {
        targets.push(path.clone());
    }
    targets.extend(search_by_name(prompt, manifest));
    dedup_preserve_order(targets)
}

/// Refactor targets: broader intent, same by-name mechanism.
pub fn find_refactor_files(prompt: &str, manifest: &FileManifest) -> Vec<String> {
    search_by_name(prompt, manifest)
}

/// A full rebuild touches every tracked file.
pub fn all_files(_prompt: &str, manifest: &FileManifest) -> Vec<String> {
    manifest.files.keys().cloned().collect()
}

/// JS project configuration files.
pub fn find_package_files(_prompt: &str, manifest: &FileManifest) -> Vec<String> {
    manifest
        .files
        .keys()
        .filter(|p| {
            p.ends_with("package.json") || p.ends_with("vite.config.js") || p.ends_with("tsconfig.json")
        })
        .cloned()
        .collect()
}

/// Insertion point for a new Flutter widget: `main.dart` under `lib/` or
/// `widgets/`, else the first Dart file, else the entry point.
pub fn find_flutter_insertion_points(_prompt: &str, manifest: &FileManifest) -> Vec<String> {
    if let Some(path) = manifest
        .files
        .keys()
        .find(|p| p.ends_with("main.dart") && (p.contains("lib/") || p.contains("widgets/")))
    {
        return vec![path.clone()];
    }
    if let Some(path) = manifest.files.keys().find(|p| p.ends_with(".dart")) {
        return vec![path.clone()];
    }
    vec![manifest.entry_point.clone()]
}

/// Insertion point for a new Flutter screen: prefer `main.dart` then
/// `app.dart` among screen/page/lib files, else the entry point.
pub fn find_flutter_screen_files(_prompt: &str, manifest: &FileManifest) -> Vec<String> {
    let candidates: Vec<&String> = manifest
        .files
        .keys()
        .filter(|p| {
            p.ends_with(".dart")
                && (p.contains("screens/") || p.contains("pages/") || p.contains("lib/"))
        })
        .collect();
    for preferred in ["main.dart", "app.dart"] {
        if let Some(path) = candidates.iter().find(|p| p.ends_with(preferred)) {
            return vec![(*path).clone()];
        }
    }
    vec![manifest.entry_point.clone()]
}

/// Existing widget files to update: widget-name tokens against file and
/// widget names, then common Flutter element nouns, then insertion points.
pub fn find_flutter_widget_files(prompt: &str, manifest: &FileManifest) -> Vec<String> {
    let lower = prompt.to_lowercase();
    let words: Vec<String> = lower
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|w| w.len() > 2 && !FLUTTER_STOP_WORDS.contains(&w.as_str()))
        .collect();

    for (path, info) in &manifest.files {
        if !path.ends_with(".dart") {
            continue;
        }
        let name = file_stem_lower(path);
        for word in &words {
            let in_name = name.contains(word.as_str());
            let in_widget = info
                .flutter_widget_info
                .as_ref()
                .is_some_and(|w| w.name.to_lowercase().contains(word.as_str()));
            if in_name || in_widget {
                return vec![path.clone()];
            }
        }
    }

    for element in FLUTTER_ELEMENTS {
        if !lower.contains(element) {
            continue;
        }
        if let Some(path) = manifest
            .files
            .keys()
            .find(|p| p.ends_with(".dart") && file_name_lower(p).contains(element))
        {
            return vec![path.clone()];
        }
    }

    find_flutter_insertion_points(prompt, manifest)
}

/// Files where navigation is wired: `main.dart`, `app.dart`, `home.dart`, or
/// anything with `navigation` in its path.
pub fn find_flutter_navigation_files(prompt: &str, manifest: &FileManifest) -> Vec<String> {
    let matches: Vec<String> = manifest
        .files
        .keys()
        .filter(|p| {
            p.ends_with(".dart")
                && (p.contains("main.dart")
                    || p.contains("app.dart")
                    || p.contains("home.dart")
                    || p.contains("navigation"))
        })
        .cloned()
        .collect();
    if matches.is_empty() {
        find_flutter_insertion_points(prompt, manifest)
    } else {
        matches
    }
}

/// Where the package manifest lives, tagged by whether it exists yet.
///
/// A `Proposed` target signals "file does not exist, caller should create
/// it" — kept distinct from an existing path so downstream writers never
/// confuse the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PubspecTarget {
    Existing(String),
    Proposed(String),
}

impl PubspecTarget {
    pub fn path(&self) -> &str {
        match self {
            PubspecTarget::Existing(p) | PubspecTarget::Proposed(p) => p,
        }
    }

    pub fn into_path(self) -> String {
        match self {
            PubspecTarget::Existing(p) | PubspecTarget::Proposed(p) => p,
        }
    }
}

/// Locate the first pubspec in the manifest, or propose the conventional
/// path when none exists.
pub fn locate_pubspec(manifest: &FileManifest) -> PubspecTarget {
    match manifest
        .files
        .keys()
        .find(|p| p.ends_with("pubspec.yaml") || p.ends_with("pubspec.yml"))
    {
        Some(path) => PubspecTarget::Existing(path.clone()),
        None => PubspecTarget::Proposed("pubspec.yaml".to_string()),
    }
}

/// All pubspec files, or the proposed conventional path when none exists.
pub fn find_flutter_package_files(_prompt: &str, manifest: &FileManifest) -> Vec<String> {
    let found: Vec<String> = manifest
        .files
        .keys()
        .filter(|p| p.ends_with("pubspec.yaml") || p.ends_with("pubspec.yml"))
        .cloned()
        .collect();
    if found.is_empty() {
        vec![locate_pubspec(manifest).into_path()]
    } else {
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use project_manifest::{FileInfo, FileType};

    fn react_manifest() -> FileManifest {
        let mut m = FileManifest::new("src/main.jsx");
        m.insert_file(
            "src/main.jsx",
            FileInfo::new("import App from './App'", FileType::Utility),
        );
        m.insert_file(
            "src/App.jsx",
            FileInfo::new("<Header /><Footer />", FileType::Component),
        );
        m.insert_file(
            "src/Header.jsx",
            FileInfo::new("export default function Header() {}", FileType::Component),
        );
        m.insert_file(
            "src/Footer.jsx",
            FileInfo::new("the contact us link lives here", FileType::Component),
        );
        m.insert_file("src/index.css", FileInfo::new("body {}", FileType::Style));
        m.style_files.push("src/index.css".to_string());
        m
    }

    #[test]
    fn by_name_finds_component_file() {
        let m = react_manifest();
        assert_eq!(
            search_by_name("change the header color", &m),
            vec!["src/Header.jsx".to_string()]
        );
    }

    #[test]
    fn by_name_falls_back_to_entry_point() {
        let m = react_manifest();
        assert_eq!(
            search_by_name("tweak something vague", &m),
            vec!["src/main.jsx".to_string()]
        );
    }

    #[test]
    fn by_content_matches_quoted_text() {
        let m = react_manifest();
        assert_eq!(
            search_by_content("remove the \"contact us\" part", &m),
            vec!["src/Footer.jsx".to_string()]
        );
    }

    #[test]
    fn by_content_matches_removal_phrase() {
        let m = react_manifest();
        assert_eq!(
            search_by_content("delete the contact us link", &m),
            vec!["src/Footer.jsx".to_string()]
        );
    }

    #[test]
    fn problem_files_are_recency_ordered_and_deduped() {
        let mut m = react_manifest();
        for (i, info) in m.files.values_mut().enumerate() {
            info.last_modified = i as i64;
        }
        let found = find_problem_files("the header is broken", &m);
        assert_eq!(found.len(), 5);
        // most recently modified first
        assert_eq!(found[0], "src/main.jsx");
        assert!(found.contains(&"src/Header.jsx".to_string()));
    }

    #[test]
    fn style_files_always_included() {
        let m = react_manifest();
        let found = find_style_files("make the theme darker", &m);
        assert_eq!(found[0], "src/index.css");
    }

    #[test]
    fn flutter_insertion_prefers_main_dart() {
        let mut m = FileManifest::new("lib/main.dart");
        m.insert_file(
            "lib/widgets/button.dart",
            FileInfo::new("", FileType::FlutterWidget),
        );
        m.insert_file("lib/main.dart", FileInfo::new("", FileType::FlutterWidget));
        assert_eq!(
            find_flutter_insertion_points("add a widget", &m),
            vec!["lib/main.dart".to_string()]
        );
    }

    #[test]
    fn flutter_widget_files_match_element_noun() {
        let mut m = FileManifest::new("lib/main.dart");
        m.insert_file("lib/main.dart", FileInfo::new("", FileType::FlutterWidget));
        m.insert_file(
            "lib/widgets/fancy_button.dart",
            FileInfo::new("", FileType::FlutterWidget),
        );
        assert_eq!(
            find_flutter_widget_files("change the button color", &m),
            vec!["lib/widgets/fancy_button.dart".to_string()]
        );
    }

    #[test]
    fn pubspec_target_is_proposed_when_missing() {
        let m = FileManifest::new("lib/main.dart");
        assert_eq!(
            locate_pubspec(&m),
            PubspecTarget::Proposed("pubspec.yaml".to_string())
        );
        assert_eq!(
            find_flutter_package_files("add a package", &m),
            vec!["pubspec.yaml".to_string()]
        );
    }

    #[test]
    fn pubspec_target_reports_existing_file() {
        let mut m = FileManifest::new("lib/main.dart");
        m.insert_file("pubspec.yaml", FileInfo::new("name: app", FileType::FlutterConfig));
        assert_eq!(
            locate_pubspec(&m),
            PubspecTarget::Existing("pubspec.yaml".to_string())
        );
    }
}
