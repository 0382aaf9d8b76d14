//! Syntax, Flutter-pattern, best-practice, and structural checks.

use crate::format::format_dart;
use crate::model::{DartValidationError, DartValidationResult, Severity};
use regex::Regex;
use tracing::debug;

/// Widgets we expect to be const-constructible in generated code.
pub(crate) const KNOWN_WIDGETS: &[&str] = &[
    "Container",
    "Text",
    "Center",
    "Column",
    "Row",
    "Scaffold",
    "AppBar",
    "Padding",
    "SizedBox",
    "Icon",
    "Card",
    "ListView",
    "Stack",
    "ElevatedButton",
];

/// Common widget-name typos mapped to their intended spelling.
const WIDGET_TYPOS: &[(&str, &str)] = &[
    ("Stateless", "StatelessWidget"),
    ("Stateful", "StatefulWidget"),
    ("scaffold", "Scaffold"),
    ("appbar", "AppBar"),
    ("materialapp", "MaterialApp"),
    ("Scafold", "Scaffold"),
    ("Containr", "Container"),
    ("Colum", "Column"),
];

/// Validate a Dart source string.
///
/// Line-by-line heuristics produce errors and warnings; code-level
/// structural checks produce hard errors; `formatted_code` carries the
/// re-formatted source. Empty or comment-only input is valid.
pub fn validate(code: &str) -> DartValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    check_syntax(code, &mut errors);
    check_flutter_patterns(code, &mut warnings);
    check_best_practices(code, &mut warnings);
    check_structure(code, &mut errors);

    DartValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        formatted_code: format_dart(code),
    }
}

fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
}

fn check_syntax(code: &str, errors: &mut Vec<DartValidationError>) {
    let re_decl = Regex::new(r"^\s*(?:var|final|const)\s+\w+").unwrap();
    let re_typed = Regex::new(r"^\s*[A-Z]\w*(?:<[^>]*>)?\s+\w+\s*(?:=|$)").unwrap();
    let re_assign = Regex::new(r"^\s*\w+(?:\.\w+)*\s*=[^=>]").unwrap();
    let re_keyword = Regex::new(r"^\s*(?:return\b|throw\b|assert\(|super\()").unwrap();
    let typo_res: Vec<(Regex, &str, &str)> = WIDGET_TYPOS
        .iter()
        .map(|(typo, fix)| (Regex::new(&format!(r"\b{typo}\b")).unwrap(), *typo, *fix))
        .collect();

    for (idx, line) in code.lines().enumerate() {
        let number = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || is_comment(trimmed) || trimmed.starts_with('@') {
            continue;
        }

        // statements continued on the next line are exempt
        let terminated = trimmed.ends_with(';')
            || trimmed.ends_with('{')
            || trimmed.ends_with('}')
            || trimmed.ends_with("=>")
            || trimmed.ends_with('(')
            || trimmed.ends_with(',')
            || trimmed.ends_with('[')
            || trimmed.ends_with(':');
        let looks_like_statement = re_decl.is_match(line)
            || re_typed.is_match(line)
            || re_assign.is_match(line)
            || re_keyword.is_match(line);
        if looks_like_statement && !terminated {
            errors.push(DartValidationError::new(
                number,
                line.len(),
                "Missing semicolon",
                Severity::Error,
                "missing_semicolon",
            ));
        }

        for (re, typo, fix) in &typo_res {
            if let Some(m) = re.find(line) {
                errors.push(DartValidationError::new(
                    number,
                    m.start() + 1,
                    format!("Unknown identifier '{typo}', did you mean '{fix}'?"),
                    Severity::Error,
                    "widget_typo",
                ));
            }
        }
    }
}

fn check_flutter_patterns(code: &str, warnings: &mut Vec<DartValidationError>) {
    let re_return_widget = Regex::new(r"return\s+(\w+)\(").unwrap();
    let re_key_param = Regex::new(r"\{[^}]*\bkey\b[^}]*\}").unwrap();
    let re_lower_class = Regex::new(r"class\s+([a-z]\w*)").unwrap();

    for (idx, line) in code.lines().enumerate() {
        let number = idx + 1;
        let trimmed = line.trim();
        if is_comment(trimmed) {
            continue;
        }

        if let Some(cap) = re_return_widget.captures(line) {
            let widget = &cap[1];
            if KNOWN_WIDGETS.contains(&widget) && !line.contains("const") {
                warnings.push(DartValidationError::new(
                    number,
                    cap.get(0).map(|m| m.start() + 1).unwrap_or(1),
                    format!("Consider 'const {widget}(...)' for better performance"),
                    Severity::Warning,
                    "prefer_const_constructors",
                ));
            }
        }

        if re_key_param.is_match(line) && !line.contains("super.key") {
            warnings.push(DartValidationError::new(
                number,
                1,
                "Use 'super.key' instead of a manual key parameter",
                Severity::Warning,
                "use_super_parameters",
            ));
        }

        if let Some(cap) = re_lower_class.captures(line) {
            warnings.push(DartValidationError::new(
                number,
                1,
                format!("Class name '{}' should be PascalCase", &cap[1]),
                Severity::Warning,
                "camel_case_types",
            ));
        }
    }
}

fn check_best_practices(code: &str, warnings: &mut Vec<DartValidationError>) {
    let re_named_var = Regex::new(r"^\s*(?:var|final|const)\s+(\w+)\s*=").unwrap();
    let re_typed_var = Regex::new(r"^\s*(?:var|final|const)\s+\w+\s+(\w+)\s*=").unwrap();
    let re_long_string = Regex::new(r#"'[^']{21,}'|"[^"]{21,}""#).unwrap();

    for (idx, line) in code.lines().enumerate() {
        let number = idx + 1;
        let trimmed = line.trim();
        if is_comment(trimmed) {
            continue;
        }

        // constructors and extends clauses also look like declarations
        let declaration_line = !line.contains("extends") && !line.contains("class ");
        if declaration_line {
            let name = re_typed_var
                .captures(line)
                .or_else(|| re_named_var.captures(line))
                .map(|cap| cap[1].to_string());
            if let Some(name) = name {
                let camel = name
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_lowercase() || c == '_')
                    && !name.trim_start_matches('_').contains('_');
                if !camel {
                    warnings.push(DartValidationError::new(
                        number,
                        1,
                        format!("Variable '{name}' should be camelCase"),
                        Severity::Warning,
                        "non_constant_identifier_names",
                    ));
                }
            }
        }

        if !trimmed.starts_with("import") && re_long_string.is_match(line) {
            warnings.push(DartValidationError::new(
                number,
                1,
                "Long string literal; consider moving it to a localization file",
                Severity::Info,
                "hardcoded_string",
            ));
        }

        if line.contains("setState") && !line.contains("=>") {
            warnings.push(DartValidationError::new(
                number,
                1,
                "Prefer an arrow function body in setState",
                Severity::Info,
                "setstate_arrow_body",
            ));
        }
    }
}

fn check_structure(code: &str, errors: &mut Vec<DartValidationError>) {
    let has_widget_class =
        code.contains("StatelessWidget") || code.contains("StatefulWidget");
    if has_widget_class && !code.contains("package:flutter/material.dart") {
        debug!("Structural check failed: missing material import");
        errors.push(DartValidationError::new(
            1,
            1,
            "Flutter widgets require `import 'package:flutter/material.dart';`",
            Severity::Error,
            "missing_flutter_import",
        ));
    }

    if code.contains("extends StatefulWidget") && !code.contains("extends State<") {
        debug!("Structural check failed: StatefulWidget without State class");
        errors.push(DartValidationError::new(
            1,
            1,
            "StatefulWidget must be paired with a State<...> class",
            Severity::Error,
            "missing_state_class",
        ));
    }

    let needs_build =
        code.contains("extends StatelessWidget") || code.contains("extends State<");
    let re_build = Regex::new(r"Widget\s+build\(BuildContext\s+context\)").unwrap();
    if needs_build && !re_build.is_match(code) {
        debug!("Structural check failed: missing build method");
        errors.push(DartValidationError::new(
            1,
            1,
            "Widget classes must implement `Widget build(BuildContext context)`",
            Severity::Error,
            "missing_build_method",
        ));
    }
}
