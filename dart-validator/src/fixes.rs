//! Literal replacement-line suggestions for known finding codes.

use regex::Regex;

/// Suggest replacement lines for a finding `code` on the offending `line`.
///
/// Returns zero or more full-line candidates; an empty vector means no
/// automatic fix is known.
pub fn quick_fixes(code: &str, line: &str) -> Vec<String> {
    match code {
        "prefer_const_constructors" => {
            let re_call = Regex::new(r"\b([A-Z]\w*)\(").unwrap();
            if line.contains("const") {
                return Vec::new();
            }
            match re_call.find(line) {
                Some(m) => {
                    let mut fixed = String::with_capacity(line.len() + 6);
                    fixed.push_str(&line[..m.start()]);
                    fixed.push_str("const ");
                    fixed.push_str(&line[m.start()..]);
                    vec![fixed]
                }
                None => Vec::new(),
            }
        }
        "use_super_parameters" => {
            let mut fixed = line.replace("{Key? key}", "{super.key}");
            fixed = fixed.replace("{key}", "{super.key}");
            fixed = fixed.replace(" : super(key: key)", "");
            if fixed == line {
                Vec::new()
            } else {
                vec![fixed]
            }
        }
        "missing_semicolon" => vec![format!("{};", line.trim_end())],
        "prefer_single_quotes" => {
            let re_double = Regex::new(r#""([^"']*)""#).unwrap();
            let fixed = re_double.replace_all(line, "'$1'").into_owned();
            if fixed == line { Vec::new() } else { vec![fixed] }
        }
        "unnecessary_brace_in_string_interps" => {
            let re_interp = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap();
            let fixed = re_interp.replace_all(line, "$$$1").into_owned();
            if fixed == line { Vec::new() } else { vec![fixed] }
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn const_fix_prefixes_the_constructor() {
        assert_eq!(
            quick_fixes("prefer_const_constructors", "      child: Text('hi'),"),
            vec!["      child: const Text('hi'),".to_string()]
        );
    }

    #[test]
    fn super_key_fix_replaces_key_patterns() {
        assert_eq!(
            quick_fixes("use_super_parameters", "  const Foo({Key? key});"),
            vec!["  const Foo({super.key});".to_string()]
        );
    }

    #[test]
    fn semicolon_fix_appends() {
        assert_eq!(
            quick_fixes("missing_semicolon", "var x = 1"),
            vec!["var x = 1;".to_string()]
        );
    }

    #[test]
    fn quote_fix_swaps_double_for_single() {
        assert_eq!(
            quick_fixes("prefer_single_quotes", "var s = \"plain\";"),
            vec!["var s = 'plain';".to_string()]
        );
    }

    #[test]
    fn interpolation_fix_strips_braces() {
        assert_eq!(
            quick_fixes(
                "unnecessary_brace_in_string_interps",
                "var s = 'hello ${name}';"
            ),
            vec!["var s = 'hello $name';".to_string()]
        );
    }

    #[test]
    fn unknown_codes_have_no_fix() {
        assert!(quick_fixes("missing_flutter_import", "class Foo {}").is_empty());
    }
}
