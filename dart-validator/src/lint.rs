//! Style-only lint rules, separate from [`crate::validate`]'s rule set.

use crate::model::{DartValidationError, Severity};
use crate::validate::KNOWN_WIDGETS;
use regex::Regex;

/// Run the lint rules over a Dart source string.
pub fn lint(code: &str) -> Vec<DartValidationError> {
    let widget_names = KNOWN_WIDGETS.join("|");
    let re_widget_call = Regex::new(&format!(r"\b({widget_names}|EdgeInsets)\(")).unwrap();
    let re_double_quoted = Regex::new(r#""([^"]*)""#).unwrap();
    let re_braced_interp = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap();

    let mut findings = Vec::new();
    for (idx, line) in code.lines().enumerate() {
        let number = idx + 1;
        let trimmed = line.trim();
        if trimmed.starts_with("//") || trimmed.starts_with('*') {
            continue;
        }

        if let Some(cap) = re_widget_call.captures(line) {
            let constructible = !line.contains("const") && !line.contains("new") && !line.contains('=');
            if constructible {
                findings.push(DartValidationError::new(
                    number,
                    cap.get(0).map(|m| m.start() + 1).unwrap_or(1),
                    format!("'{}' call could be const", &cap[1]),
                    Severity::Info,
                    "prefer_const_constructors",
                ));
            }
        }

        if line.contains("print(") {
            findings.push(DartValidationError::new(
                number,
                line.find("print(").map(|i| i + 1).unwrap_or(1),
                "Avoid print calls in production code",
                Severity::Info,
                "avoid_print",
            ));
        }

        for cap in re_double_quoted.captures_iter(line) {
            let inner = &cap[1];
            if !inner.contains('\'') && !inner.contains('\\') {
                findings.push(DartValidationError::new(
                    number,
                    cap.get(0).map(|m| m.start() + 1).unwrap_or(1),
                    "Prefer single quotes for string literals",
                    Severity::Info,
                    "prefer_single_quotes",
                ));
            }
        }

        if let Some(cap) = re_braced_interp.captures(line) {
            findings.push(DartValidationError::new(
                number,
                cap.get(0).map(|m| m.start() + 1).unwrap_or(1),
                format!("Braces are unnecessary: use '${}'", &cap[1]),
                Severity::Info,
                "unnecessary_brace_in_string_interps",
            ));
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_constructible_widget_without_const() {
        let findings = lint("child: Text('hi'),");
        assert!(
            findings
                .iter()
                .any(|f| f.code == "prefer_const_constructors")
        );
        // const call is fine
        assert!(lint("child: const Text('hi'),").is_empty());
    }

    #[test]
    fn flags_print_calls() {
        let findings = lint("print('debug');");
        assert!(findings.iter().any(|f| f.code == "avoid_print"));
    }

    #[test]
    fn flags_plain_double_quoted_strings() {
        let findings = lint("var s = \"plain\";");
        assert!(findings.iter().any(|f| f.code == "prefer_single_quotes"));
        // double quotes earn their keep when the content has a single quote
        assert!(
            lint("var s = \"it's fine\";")
                .iter()
                .all(|f| f.code != "prefer_single_quotes")
        );
    }

    #[test]
    fn flags_unnecessary_interpolation_braces() {
        let findings = lint("var s = 'hello ${name}';");
        assert!(
            findings
                .iter()
                .any(|f| f.code == "unnecessary_brace_in_string_interps")
        );
        assert!(
            lint("var s = 'hello ${name.trim()}';")
                .iter()
                .all(|f| f.code != "unnecessary_brace_in_string_interps")
        );
    }

    #[test]
    fn comment_lines_are_skipped() {
        assert!(lint("// print('x') and Text('y')").is_empty());
    }
}
