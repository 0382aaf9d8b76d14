//! Token-count complexity proxy, not a control-flow-graph measure.

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityReport {
    /// 1 + count of decision-indicating tokens across the whole input.
    pub cyclomatic_complexity: usize,
    /// Non-blank, non-comment-only lines.
    pub lines_of_code: usize,
    /// `name(params) {` signatures, excluding control-flow keywords.
    pub number_of_methods: usize,
    /// Maximum running brace depth across lines.
    pub nesting_depth: usize,
}

/// Analyze a Dart source string.
pub fn analyze_complexity(code: &str) -> ComplexityReport {
    let re_decision = Regex::new(r"\b(?:if|else|for|while|case|catch)\b|&&|\|\||\?").unwrap();
    let cyclomatic_complexity = 1 + re_decision.find_iter(code).count();

    let re_method = Regex::new(r"\b(\w+)\s*\([^)]*\)\s*(?:async\s*)?\{").unwrap();
    let number_of_methods = re_method
        .captures_iter(code)
        .filter(|cap| {
            !matches!(&cap[1], "if" | "for" | "while" | "switch" | "catch")
        })
        .count();

    let mut lines_of_code = 0;
    let mut depth: i64 = 0;
    let mut nesting_depth: i64 = 0;
    for line in code.lines() {
        let trimmed = line.trim();
        let is_comment = trimmed.starts_with("//")
            || trimmed.starts_with("/*")
            || trimmed.starts_with('*');
        if !trimmed.is_empty() && !is_comment {
            lines_of_code += 1;
        }
        for c in line.chars() {
            match c {
                '{' => {
                    depth += 1;
                    nesting_depth = nesting_depth.max(depth);
                }
                '}' => depth -= 1,
                _ => {}
            }
        }
    }

    ComplexityReport {
        cyclomatic_complexity,
        lines_of_code,
        number_of_methods,
        nesting_depth: nesting_depth.max(0) as usize,
    }
}
