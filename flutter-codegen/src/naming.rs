//! Dart name-casing utilities.

/// Strip non-alphanumerics to spaces, capitalize each word, join.
///
/// Already-cased words keep their interior casing: `"MyAwesomeApp"` stays
/// `"MyAwesomeApp"`, `"login form"` becomes `"LoginForm"`.
pub fn to_pascal_case(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(capitalize_first)
        .collect()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-snake a name: `_` before each uppercase letter (lowercased),
/// non-alphanumerics to `_`, repeats collapsed, edges trimmed.
pub fn to_snake_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for c in input.chars() {
        if c.is_uppercase() {
            out.push('_');
            out.extend(c.to_lowercase());
        } else if c.is_alphanumeric() {
            out.push(c);
        } else {
            out.push('_');
        }
    }

    let mut collapsed = String::with_capacity(out.len());
    let mut prev_underscore = false;
    for c in out.chars() {
        if c == '_' {
            if !prev_underscore {
                collapsed.push(c);
            }
            prev_underscore = true;
        } else {
            collapsed.push(c);
            prev_underscore = false;
        }
    }
    collapsed.trim_matches('_').to_string()
}

/// Append `suffix` unless the name already ends with it.
pub fn ensure_suffix(name: &str, suffix: &str) -> String {
    if name.ends_with(suffix) {
        name.to_string()
    } else {
        format!("{name}{suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case() {
        assert_eq!(to_pascal_case("login form"), "LoginForm");
        assert_eq!(to_pascal_case("my-awesome_app"), "MyAwesomeApp");
        assert_eq!(to_pascal_case("MyAwesomeApp"), "MyAwesomeApp");
        assert_eq!(to_pascal_case("  spaced   out  "), "SpacedOut");
    }

    #[test]
    fn snake_case() {
        assert_eq!(to_snake_case("MyAwesomeApp"), "my_awesome_app");
        assert_eq!(to_snake_case("login form"), "login_form");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("Weird--Name!!"), "weird_name");
    }

    #[test]
    fn suffixes() {
        assert_eq!(ensure_suffix("Login", "Screen"), "LoginScreen");
        assert_eq!(ensure_suffix("LoginScreen", "Screen"), "LoginScreen");
    }
}
