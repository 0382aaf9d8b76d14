//! High-level Flutter source generation.
//!
//! Prompt dispatch here is deliberately local keyword matching, not the
//! intent classifier: by the time a prompt reaches this crate the caller has
//! already decided to generate Flutter code, and only the artifact kind
//! (screen / widget / project) remains to be picked.

use crate::error::{CodegenError, Result};
use crate::naming::{ensure_suffix, to_pascal_case, to_snake_case};
use crate::template::{TemplateConfig, TemplateStore, TemplateValue};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use tracing::debug;

/// Kind of project a prompt is generated for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    React,
    Flutter,
}

impl Display for ProjectKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ProjectKind::React => "react",
            ProjectKind::Flutter => "flutter",
        })
    }
}

/// One generated artifact, handed to an external file-writer as plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Screen rendering options derived from a prompt or set by the caller.
#[derive(Debug, Clone)]
pub struct ScreenOptions {
    pub name: String,
    pub title: String,
    pub body: String,
    pub app_bar: bool,
    pub fab: bool,
    pub bottom_nav: bool,
}

/// A field of a generated `State` class.
#[derive(Debug, Clone)]
pub struct StateField {
    pub field_type: String,
    pub name: String,
    pub initial: String,
}

/// Template-backed Dart/Flutter code generator.
pub struct FlutterCodeGenerator {
    store: TemplateStore,
}

impl Default for FlutterCodeGenerator {
    fn default() -> Self {
        Self::new(TemplateStore::with_builtins())
    }
}

impl FlutterCodeGenerator {
    pub fn new(store: TemplateStore) -> Self {
        Self { store }
    }

    /// Render the app entry point (`lib/main.dart`).
    pub fn generate_main_dart(&self, app_name: &str, home_title: &str) -> Result<String> {
        let app_class = ensure_suffix(&to_pascal_case(app_name), "App");
        let config = config_of([
            ("app_class", app_class.as_str().into()),
            ("app_title", to_pascal_case(app_name).into()),
            ("seed_color", "deepPurple".into()),
            ("home_class", "HomeScreen".into()),
            ("home_title", home_title.into()),
            ("home_message", format!("Welcome to {home_title}").into()),
        ]);
        self.store.render("main.dart.template", &config)
    }

    pub fn generate_stateless_widget(
        &self,
        widget_name: &str,
        widget_body: &str,
    ) -> Result<String> {
        let config = config_of([
            ("widget_name", widget_name.into()),
            ("widget_body", widget_body.into()),
        ]);
        self.store.render("stateless-widget.template", &config)
    }

    pub fn generate_stateful_widget(
        &self,
        widget_name: &str,
        widget_body: &str,
        state_fields: &[StateField],
    ) -> Result<String> {
        let fields: Vec<BTreeMap<String, String>> = state_fields
            .iter()
            .map(|f| {
                BTreeMap::from([
                    ("field_type".to_string(), f.field_type.clone()),
                    ("field_name".to_string(), f.name.clone()),
                    ("field_initial".to_string(), f.initial.clone()),
                ])
            })
            .collect();
        let config = config_of([
            ("widget_name", widget_name.into()),
            ("widget_body", widget_body.into()),
            ("state_fields", TemplateValue::List(fields)),
        ]);
        self.store.render("stateful-widget.template", &config)
    }

    pub fn generate_screen(&self, options: &ScreenOptions) -> Result<String> {
        let config = config_of([
            ("screen_name", options.name.as_str().into()),
            ("screen_title", options.title.as_str().into()),
            ("screen_body", options.body.as_str().into()),
            ("has_app_bar", options.app_bar.into()),
            ("has_fab", options.fab.into()),
            ("has_bottom_nav", options.bottom_nav.into()),
            (
                "nav_items",
                TemplateValue::List(vec![
                    BTreeMap::from([
                        ("icon".to_string(), "home".to_string()),
                        ("label".to_string(), "Home".to_string()),
                    ]),
                    BTreeMap::from([
                        ("icon".to_string(), "settings".to_string()),
                        ("label".to_string(), "Settings".to_string()),
                    ]),
                ]),
            ),
        ]);
        self.store.render("screen.template", &config)
    }

    /// Render a `pubspec.yaml` from the template with extra dependencies.
    pub fn generate_pubspec_yaml(
        &self,
        project_name: &str,
        description: &str,
        extra_dependencies: &[(String, String)],
    ) -> Result<String> {
        let deps: Vec<BTreeMap<String, String>> = extra_dependencies
            .iter()
            .map(|(name, version)| {
                BTreeMap::from([
                    ("name".to_string(), name.clone()),
                    ("version".to_string(), version.clone()),
                ])
            })
            .collect();
        let config = config_of([
            ("project_name", to_snake_case(project_name).into()),
            ("project_description", description.into()),
            ("sdk_constraint", ">=3.0.0 <4.0.0".into()),
            ("dependencies", TemplateValue::List(deps)),
            ("has_assets", false.into()),
        ]);
        self.store.render("pubspec.yaml.template", &config)
    }

    /// Generate a full starter project file set.
    pub fn generate_flutter_project(&self, project_name: &str) -> Result<Vec<GeneratedFile>> {
        let title = to_pascal_case(project_name);
        Ok(vec![
            GeneratedFile {
                path: "pubspec.yaml".to_string(),
                content: self.generate_pubspec_yaml(
                    project_name,
                    "A new Flutter project.",
                    &[],
                )?,
            },
            GeneratedFile {
                path: "lib/main.dart".to_string(),
                content: self.generate_main_dart(project_name, &title)?,
            },
        ])
    }

    /// Generate Flutter code straight from a prompt.
    ///
    /// Dispatches by keyword in priority order — screen, widget, project —
    /// and otherwise falls back to a minimal stateless widget embedding the
    /// prompt text.
    ///
    /// # Errors
    /// [`CodegenError::UnsupportedProjectType`] when called for a
    /// non-Flutter project; this generator has no React responsibility.
    pub fn generate_flutter_code_from_prompt(
        &self,
        prompt: &str,
        kind: ProjectKind,
    ) -> Result<String> {
        if kind != ProjectKind::Flutter {
            return Err(CodegenError::UnsupportedProjectType(kind.to_string()));
        }
        let lower = prompt.to_lowercase();

        if lower.contains("screen") || lower.contains("page") {
            debug!("Prompt dispatched to screen generation");
            return self.screen_from_prompt(prompt, &lower);
        }
        if lower.contains("widget") || lower.contains("component") {
            debug!("Prompt dispatched to widget generation");
            return self.widget_from_prompt(prompt, &lower);
        }
        if lower.contains("project") || lower.contains("app") {
            debug!("Prompt dispatched to project generation");
            return self.project_from_prompt(prompt, &lower);
        }

        let body = format!("Text('{}')", escape_single_quotes(prompt));
        self.generate_stateless_widget("GeneratedWidget", &body)
    }

    fn screen_from_prompt(&self, prompt: &str, lower: &str) -> Result<String> {
        let raw = extract_name(prompt, "screen").unwrap_or_else(|| "Home".to_string());
        let title = to_pascal_case(&raw);
        let name = ensure_suffix(&title, "Screen");
        let options = ScreenOptions {
            body: format!("const Center(\n        child: Text('{title}'),\n      )"),
            name,
            title,
            app_bar: lower.contains("app bar") || lower.contains("appbar"),
            fab: lower.contains("floating action") || lower.contains("fab"),
            bottom_nav: lower.contains("bottom navigation") || lower.contains("tab"),
        };
        self.generate_screen(&options)
    }

    fn widget_from_prompt(&self, prompt: &str, lower: &str) -> Result<String> {
        let raw = extract_name(prompt, "widget").unwrap_or_else(|| "Custom".to_string());
        let name = ensure_suffix(&to_pascal_case(&raw), "Widget");
        let stateful = lower.contains("stateful")
            || lower.contains("state")
            || lower.contains("interactive");
        if stateful {
            let fields = [StateField {
                field_type: "int".to_string(),
                name: "_counter".to_string(),
                initial: "0".to_string(),
            }];
            self.generate_stateful_widget(&name, "Container()", &fields)
        } else {
            self.generate_stateless_widget(&name, "Container()")
        }
    }

    fn project_from_prompt(&self, prompt: &str, lower: &str) -> Result<String> {
        let raw = extract_name(prompt, if lower.contains("project") { "project" } else { "app" })
            .unwrap_or_else(|| "My".to_string());
        let suffix = if lower.contains("project") { "Project" } else { "App" };
        let name = ensure_suffix(&to_pascal_case(&raw), suffix);
        let files = self.generate_flutter_project(&name)?;
        // lib/main.dart is the representative artifact for a whole project
        Ok(files
            .into_iter()
            .find(|f| f.path == "lib/main.dart")
            .map(|f| f.content)
            .unwrap_or_default())
    }
}

/// Extract the name word next to `keyword` ("create a login screen",
/// "screen called settings", ...). Returns the original-case word.
fn extract_name(prompt: &str, keyword: &str) -> Option<String> {
    let patterns = [
        format!(r"(?i)create\s+(?:a\s+|an\s+|new\s+)?(\w+)\s+{keyword}"),
        format!(r"(?i)(\w+)\s+{keyword}"),
        format!(r"(?i){keyword}\s+(?:called\s+|named\s+)?(\w+)"),
    ];
    for pattern in patterns {
        let re = Regex::new(&pattern).unwrap();
        if let Some(cap) = re.captures(prompt) {
            let word = cap[1].to_string();
            // articles sneak through the looser patterns
            if !matches!(word.to_lowercase().as_str(), "a" | "an" | "the" | "new") {
                return Some(word);
            }
        }
    }
    None
}

fn escape_single_quotes(text: &str) -> String {
    text.replace('\'', r"\'")
}

fn config_of<const N: usize>(entries: [(&str, TemplateValue); N]) -> TemplateConfig {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stateless_widget_contains_class_and_body() {
        let generator = FlutterCodeGenerator::default();
        let code = generator
            .generate_stateless_widget("TestWidget", "Container()")
            .unwrap();
        assert!(code.contains("class TestWidget extends StatelessWidget"));
        assert!(code.contains("Container()"));
    }

    #[test]
    fn stateful_widget_renders_state_fields() {
        let generator = FlutterCodeGenerator::default();
        let fields = [StateField {
            field_type: "int".to_string(),
            name: "_count".to_string(),
            initial: "0".to_string(),
        }];
        let code = generator
            .generate_stateful_widget("CounterWidget", "Container()", &fields)
            .unwrap();
        assert!(code.contains("class CounterWidget extends StatefulWidget"));
        assert!(code.contains("class _CounterWidgetState extends State<CounterWidget>"));
        assert!(code.contains("int _count = 0;"));
    }

    #[test]
    fn rejects_non_flutter_projects() {
        let generator = FlutterCodeGenerator::default();
        let err = generator
            .generate_flutter_code_from_prompt("create a login screen", ProjectKind::React)
            .unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedProjectType(_)));
    }

    #[test]
    fn screen_prompt_derives_name_and_app_bar() {
        let generator = FlutterCodeGenerator::default();
        let code = generator
            .generate_flutter_code_from_prompt(
                "create a login screen with app bar",
                ProjectKind::Flutter,
            )
            .unwrap();
        assert!(code.contains("class LoginScreen extends StatelessWidget"));
        assert!(code.contains("appBar: AppBar("));
        assert!(!code.contains("floatingActionButton"));
    }

    #[test]
    fn widget_prompt_picks_stateful_when_asked() {
        let generator = FlutterCodeGenerator::default();
        let code = generator
            .generate_flutter_code_from_prompt(
                "create a stateful counter widget",
                ProjectKind::Flutter,
            )
            .unwrap();
        assert!(code.contains("extends StatefulWidget"));
        assert!(code.contains("CounterWidget"));
    }

    #[test]
    fn project_prompt_returns_main_dart() {
        let generator = FlutterCodeGenerator::default();
        let code = generator
            .generate_flutter_code_from_prompt("build a todo app", ProjectKind::Flutter)
            .unwrap();
        assert!(code.contains("void main()"));
        assert!(code.contains("runApp(const TodoApp())"));
    }

    #[test]
    fn fallback_embeds_prompt_text() {
        let generator = FlutterCodeGenerator::default();
        let code = generator
            .generate_flutter_code_from_prompt("something nice", ProjectKind::Flutter)
            .unwrap();
        assert!(code.contains("class GeneratedWidget extends StatelessWidget"));
        assert!(code.contains("Text('something nice')"));
    }

    #[test]
    fn project_files_include_pubspec_and_main() {
        let generator = FlutterCodeGenerator::default();
        let files = generator.generate_flutter_project("My Shop").unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["pubspec.yaml", "lib/main.dart"]);
        let pubspec = &files[0].content;
        assert!(pubspec.contains("name: my_shop"));
        assert!(pubspec.contains("uses-material-design: true"));
    }
}
