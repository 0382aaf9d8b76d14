//! Simplistic re-formatter: operator spacing and depth-based re-indentation.

use regex::Regex;

/// Re-format Dart source.
///
/// Adds spaces around binary operators between word characters, ensures a
/// space after commas and statement-separating semicolons, and re-indents
/// with two spaces per bracket-depth level. Strings are not protected —
/// this is a heuristic pass for generated code, not a real formatter.
pub fn format_dart(code: &str) -> String {
    reindent(&space_operators(code))
}

fn space_operators(code: &str) -> String {
    let re_binary = Regex::new(r"(\w)\s*(==|!=|<=|>=|\+|-|\*|/|%|=)\s*(\w)").unwrap();
    let re_comma = Regex::new(r",(\S)").unwrap();
    let re_semi = Regex::new(r";(\S)").unwrap();

    // two passes: adjacent operator pairs overlap on the shared operand
    let pass1 = re_binary.replace_all(code, "$1 $2 $3");
    let pass2 = re_binary.replace_all(&pass1, "$1 $2 $3");
    let commas = re_comma.replace_all(&pass2, ", $1");
    re_semi.replace_all(&commas, "; $1").into_owned()
}

fn reindent(code: &str) -> String {
    let mut depth: usize = 0;
    let mut out = String::with_capacity(code.len());

    for line in code.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            out.push('\n');
            continue;
        }
        if trimmed.starts_with('}') || trimmed.starts_with(')') || trimmed.starts_with(']') {
            depth = depth.saturating_sub(1);
        }
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(trimmed);
        out.push('\n');
        if trimmed.ends_with('{') || trimmed.ends_with('(') || trimmed.ends_with('[') {
            depth += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_binary_operators_and_commas() {
        assert_eq!(format_dart("var x=1+2;"), "var x = 1 + 2;\n");
        assert_eq!(format_dart("f(a,b,c);"), "f(a, b, c);\n");
        assert_eq!(format_dart("var ok=a==b;"), "var ok = a == b;\n");
    }

    #[test]
    fn leaves_arrow_functions_alone() {
        assert_eq!(format_dart("onTap: () => done(),"), "onTap: () => done(),\n");
    }

    #[test]
    fn reindents_by_bracket_depth() {
        let input = "class A {\nWidget build(BuildContext context) {\nreturn Text('x');\n}\n}\n";
        let expected =
            "class A {\n  Widget build(BuildContext context) {\n    return Text('x');\n  }\n}\n";
        assert_eq!(format_dart(input), expected);
    }

    #[test]
    fn closing_line_dedents_before_printing() {
        let input = "f(\na,\n);\n";
        assert_eq!(format_dart(input), "f(\n  a,\n);\n");
    }
}
