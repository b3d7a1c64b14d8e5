//! Shared text utilities for fragment assembly
//!
//! Small string helpers used by every generator: path quoting for generated
//! import statements, public-path slash normalization, identifier casing and
//! the `[name]`-placeholder template filter.

use std::borrow::Cow;
use std::path::Path;

use cow_utils::CowUtils;
use regex::Regex;

use crate::types::FxIndexMap;

/// Line separator placed between fragment lines.
#[cfg(windows)]
pub const EOL: &str = "\r\n";
/// Line separator placed between fragment lines.
#[cfg(not(windows))]
pub const EOL: &str = "\n";

/// Make a module path safe for embedding in a single-quoted import
/// specifier: forward slashes only, embedded quotes escaped.
pub fn ensure_path_quote(path: &str) -> String {
    let normalized = path.cow_replace('\\', "/");
    let quoted = normalized.cow_replace('\'', "\\'");
    quoted.into_owned()
}

/// Normalize a public path to carry a trailing slash, and a leading slash
/// unless it is relative (`.`-led) or carries an http(s) scheme.
pub fn ensure_slash(val: &str) -> String {
    let mut out = String::from(val);
    let has_scheme = val.starts_with("http:") || val.starts_with("https:");
    if !has_scheme
        && let Some(first) = out.chars().next()
        && first != '/'
        && first != '.'
    {
        out.insert(0, '/');
    }
    if let Some(last) = out.chars().last()
        && last != '/'
    {
        out.push('/');
    }
    out
}

/// Strip a single trailing slash.
pub fn remove_slash(val: &str) -> String {
    val.strip_suffix('/').unwrap_or(val).to_owned()
}

/// Uppercase the first character.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Collapse separator characters into camelCase, keeping only characters
/// valid in a source identifier.
pub fn camelize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut boundary = false;
    for ch in s.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' {
            if boundary && !out.is_empty() {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            boundary = false;
        } else {
            boundary = true;
        }
    }
    out
}

/// File name of `path`, optionally without its extension.
pub fn file_base_name(path: &Path, strip_ext: bool) -> String {
    let name = if strip_ext {
        path.file_stem()
    } else {
        path.file_name()
    };
    name.map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Substitute `[name]`-style placeholders in `input` from `data`.
///
/// A backslash before either delimiter escapes the span: `\[name]` renders
/// as `[name]`, `[name\]` is left untouched. Unknown names substitute as
/// the empty string. `pattern` overrides the delimiter pair.
pub fn filter(
    input: &str,
    data: &FxIndexMap<String, String>,
    pattern: Option<(char, char)>,
    ignore_case: bool,
) -> String {
    let (open, close) = pattern.unwrap_or(('[', ']'));
    let re = Regex::new(&format!(
        r"(.?){open}\s*(.*?)\s*(\\?){close}",
        open = regex::escape(&open.to_string()),
        close = regex::escape(&close.to_string()),
    ))
    .expect("escaped delimiter pattern is valid");

    let lowered: FxIndexMap<String, String>;
    let data = if ignore_case {
        lowered = data
            .iter()
            .map(|(k, v)| (k.cow_to_ascii_lowercase().into_owned(), v.clone()))
            .collect();
        &lowered
    } else {
        data
    };

    re.replace_all(input, |caps: &regex::Captures<'_>| {
        let whole = caps.get(0).map_or("", |m| m.as_str());
        let lead = caps.get(1).map_or("", |m| m.as_str());
        let name = caps.get(2).map_or("", |m| m.as_str());
        let trail = caps.get(3).map_or("", |m| m.as_str());
        if lead == "\\" {
            // escaped open delimiter: drop the backslash, keep the span
            whole[1..].to_owned()
        } else if trail == "\\" {
            whole.to_owned()
        } else if name.is_empty() {
            lead.to_owned()
        } else {
            let key = if ignore_case {
                name.cow_to_ascii_lowercase()
            } else {
                Cow::Borrowed(name)
            };
            let value = data.get(key.as_ref()).map_or("", String::as_str);
            format!("{lead}{value}")
        }
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    fn data(pairs: &[(&str, &str)]) -> FxIndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn ensure_path_quote_normalizes_separators_and_quotes() {
        assert_eq!(ensure_path_quote(r"C:\app\x.js"), "C:/app/x.js");
        assert_eq!(ensure_path_quote("src/it's.js"), r"src/it\'s.js");
        assert_eq!(ensure_path_quote("src/main.js"), "src/main.js");
    }

    #[test]
    fn ensure_slash_handles_relative_and_scheme_paths() {
        assert_eq!(ensure_slash("static"), "/static/");
        assert_eq!(ensure_slash("/assets"), "/assets/");
        assert_eq!(ensure_slash("./rel"), "./rel/");
        assert_eq!(ensure_slash("https://cdn.example.com/a"), "https://cdn.example.com/a/");
        assert_eq!(ensure_slash(""), "");
    }

    #[test]
    fn remove_slash_strips_one_trailing_slash() {
        assert_eq!(remove_slash("/a/"), "/a");
        assert_eq!(remove_slash("/a"), "/a");
    }

    #[test]
    fn upper_first_and_camelize() {
        assert_eq!(upper_first("mock"), "Mock");
        assert_eq!(upper_first(""), "");
        assert_eq!(camelize("my-page"), "myPage");
        assert_eq!(camelize("nav.bar"), "navBar");
        assert_eq!(camelize("comp"), "comp");
    }

    #[test]
    fn file_base_name_with_and_without_extension() {
        let path = PathBuf::from("/pkg/lib/plugins/mock.js");
        assert_eq!(file_base_name(&path, true), "mock");
        assert_eq!(file_base_name(&path, false), "mock.js");
    }

    #[test]
    fn filter_substitutes_placeholders() {
        let vars = data(&[("name", "world")]);
        assert_eq!(filter("hello [name]", &vars, None, false), "hello world");
        assert_eq!(filter("hello [missing]", &vars, None, false), "hello ");
        assert_eq!(filter("[name]-[name]", &vars, None, false), "world-world");
    }

    #[test]
    fn filter_honors_escapes() {
        let vars = data(&[("name", "world")]);
        assert_eq!(filter(r"\[name]", &vars, None, false), "[name]");
        assert_eq!(filter(r"[name\]", &vars, None, false), r"[name\]");
        assert_eq!(filter("a[]b", &vars, None, false), "ab");
    }

    #[test]
    fn filter_custom_pattern_and_case() {
        let vars = data(&[("Name", "world")]);
        assert_eq!(filter("hi {name}", &vars, Some(('{', '}')), true), "hi world");
        assert_eq!(filter("hi [NAME]", &vars, None, true), "hi world");
        assert_eq!(filter("hi [name]", &vars, None, false), "hi ");
    }
}
