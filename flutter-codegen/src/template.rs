//! Template loading and the substitution grammar.
//!
//! Grammar, applied in this order:
//! 1. Block tags `{{#key}}...{{/key}}`. A list value repeats the block once
//!    per item with the item's fields substituted; any other truthy value
//!    includes the block once; falsy/absent renders as empty. Loop and
//!    conditional share the same tag syntax on purpose — behavior keys off
//!    the runtime [`TemplateValue`] variant.
//! 2. Variables `{{key}}`, replaced by the stringified value; left unchanged
//!    when the key is absent.
//!
//! Block scanning is a manual string walk (the regex crate has no
//! backreferences to pair open/close tags) and recurses into included block
//! bodies, so blocks may nest as long as names differ.

use crate::error::{CodegenError, Result};
use regex::{Captures, Regex};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

/// A value bound to a template key.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateValue {
    Scalar(String),
    Bool(bool),
    List(Vec<BTreeMap<String, String>>),
}

impl TemplateValue {
    fn is_truthy(&self) -> bool {
        match self {
            TemplateValue::Scalar(s) => !s.is_empty(),
            TemplateValue::Bool(b) => *b,
            TemplateValue::List(items) => !items.is_empty(),
        }
    }
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        TemplateValue::Scalar(value.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        TemplateValue::Scalar(value)
    }
}

impl From<bool> for TemplateValue {
    fn from(value: bool) -> Self {
        TemplateValue::Bool(value)
    }
}

/// Flat key → value configuration for one render call.
pub type TemplateConfig = BTreeMap<String, TemplateValue>;

/// Render a template string against a configuration.
pub fn render_str(template: &str, config: &TemplateConfig) -> String {
    let expanded = render_blocks(template, config);
    substitute_vars(&expanded, config)
}

fn render_blocks(input: &str, config: &TemplateConfig) -> String {
    let mut out = String::new();
    let mut rest = input;

    loop {
        let Some(start) = rest.find("{{#") else { break };
        let after_open = &rest[start + 3..];
        let Some(name_len) = after_open.find("}}") else { break };
        let name = &after_open[..name_len];
        let body_start = start + 3 + name_len + 2;
        let close_tag = format!("{{{{/{name}}}}}");
        let Some(close_rel) = rest[body_start..].find(&close_tag) else {
            // unbalanced block: leave the rest untouched
            break;
        };

        out.push_str(&rest[..start]);

        let mut body = &rest[body_start..body_start + close_rel];
        // standalone tags sit on their own line; swallow that line break
        if let Some(stripped) = body.strip_prefix('\n') {
            body = stripped;
        }

        match config.get(name) {
            Some(TemplateValue::List(items)) => {
                for item in items {
                    let mut rendered = body.to_string();
                    for (key, value) in item {
                        rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
                    }
                    out.push_str(&render_blocks(&rendered, config));
                }
            }
            Some(value) if value.is_truthy() => {
                out.push_str(&render_blocks(body, config));
            }
            _ => {}
        }

        rest = &rest[body_start + close_rel + close_tag.len()..];
        if let Some(stripped) = rest.strip_prefix('\n') {
            rest = stripped;
        }
    }

    out.push_str(rest);
    out
}

fn substitute_vars(input: &str, config: &TemplateConfig) -> String {
    let re_var = Regex::new(r"\{\{(\w+)\}\}").unwrap();
    re_var
        .replace_all(input, |caps: &Captures| match config.get(&caps[1]) {
            Some(TemplateValue::Scalar(s)) => s.clone(),
            Some(TemplateValue::Bool(b)) => b.to_string(),
            // list keys only make sense as blocks; absent keys stay put
            Some(TemplateValue::List(_)) | None => caps[0].to_string(),
        })
        .into_owned()
}

/// Named-template lookup backed by a directory, with a process-wide
/// read-only cache (templates are static assets; the cache is populated on
/// first load and never invalidated).
pub struct TemplateStore {
    dir: PathBuf,
    cache: RwLock<HashMap<String, String>>,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// A store pre-seeded with the five templates shipped with this crate.
    pub fn with_builtins() -> Self {
        let store = Self::new("templates");
        {
            let mut cache = store.cache.write().expect("template cache lock");
            for (name, text) in [
                (
                    "main.dart.template",
                    include_str!("../templates/main.dart.template"),
                ),
                (
                    "pubspec.yaml.template",
                    include_str!("../templates/pubspec.yaml.template"),
                ),
                (
                    "stateless-widget.template",
                    include_str!("../templates/stateless-widget.template"),
                ),
                (
                    "stateful-widget.template",
                    include_str!("../templates/stateful-widget.template"),
                ),
                (
                    "screen.template",
                    include_str!("../templates/screen.template"),
                ),
            ] {
                cache.insert(name.to_string(), text.to_string());
            }
        }
        store
    }

    /// Load a template's text, caching on first read.
    ///
    /// # Errors
    /// [`CodegenError::TemplateNotFound`] when the file does not exist;
    /// [`CodegenError::TemplateIo`] for any other read failure.
    pub fn load(&self, name: &str) -> Result<String> {
        if let Some(text) = self.cache.read().expect("template cache lock").get(name) {
            return Ok(text.clone());
        }
        let path = self.dir.join(name);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(CodegenError::TemplateNotFound {
                    name: name.to_string(),
                });
            }
            Err(err) => {
                return Err(CodegenError::TemplateIo {
                    name: name.to_string(),
                    source: err,
                });
            }
        };
        self.cache
            .write()
            .expect("template cache lock")
            .insert(name.to_string(), text.clone());
        Ok(text)
    }

    /// Load and render a named template.
    pub fn render(&self, name: &str, config: &TemplateConfig) -> Result<String> {
        Ok(render_str(&self.load(name)?, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(entries: &[(&str, TemplateValue)]) -> TemplateConfig {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn variable_substitution_and_absent_keys() {
        let cfg = config(&[("name", "World".into())]);
        assert_eq!(render_str("Hello {{name}}!", &cfg), "Hello World!");
        assert_eq!(render_str("Hello {{missing}}!", &cfg), "Hello {{missing}}!");
    }

    #[test]
    fn bool_block_includes_or_omits() {
        let template = "a\n{{#flag}}\nb\n{{/flag}}\nc\n";
        let on = config(&[("flag", true.into())]);
        let off = config(&[("flag", false.into())]);
        assert_eq!(render_str(template, &on), "a\nb\nc\n");
        assert_eq!(render_str(template, &off), "a\nc\n");
        // absent key behaves like falsy
        assert_eq!(render_str(template, &config(&[])), "a\nc\n");
    }

    #[test]
    fn list_block_repeats_with_item_fields() {
        let template = "{{#items}}\n- {{name}}: {{version}}\n{{/items}}\n";
        let items = TemplateValue::List(vec![
            [("name", "http"), ("version", "^1.0.0")]
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .into(),
            [("name", "provider"), ("version", "^6.0.0")]
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .into(),
        ]);
        let cfg = config(&[("items", items)]);
        assert_eq!(
            render_str(template, &cfg),
            "- http: ^1.0.0\n- provider: ^6.0.0\n"
        );
    }

    #[test]
    fn scalar_block_is_conditional_include_with_inner_var() {
        let template = "{{#description}}\n/// {{description}}\n{{/description}}\nclass X {}\n";
        let cfg = config(&[("description", "A widget".into())]);
        assert_eq!(render_str(template, &cfg), "/// A widget\nclass X {}\n");
        assert_eq!(render_str(template, &config(&[])), "class X {}\n");
    }

    #[test]
    fn fully_specified_config_leaves_no_markers() {
        let store = TemplateStore::with_builtins();
        let cfg = config(&[
            ("widget_name", "TestWidget".into()),
            ("widget_body", "Container()".into()),
            ("description", "A test widget".into()),
        ]);
        let out = store.render("stateless-widget.template", &cfg).unwrap();
        assert!(!out.contains("{{"));
        assert!(!out.contains("}}"));
    }

    #[test]
    fn missing_template_is_a_hard_error() {
        let store = TemplateStore::with_builtins();
        let err = store.render("nope.template", &config(&[])).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::TemplateNotFound { ref name } if name == "nope.template"
        ));
    }
}
