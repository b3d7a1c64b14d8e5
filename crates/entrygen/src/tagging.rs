//! Quasi-quotation tag tokens
//!
//! The route literal is produced by a generic structured serializer, which
//! (correctly, for data) quotes every string. Code spans — import
//! identifiers, utility references, spread expressions — must come out
//! unquoted. Instead of hand-writing a bespoke serializer, spans that must
//! survive as raw code are wrapped in single-use random delimiter tokens
//! before serialization, then a deterministic text pass keyed on those
//! tokens strips the surrounding quotes back off.
//!
//! Token collision with literal tree content is excluded probabilistically
//! (high-entropy, freshly generated per invocation), not absolutely.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

/// Random numeric sequence below `bound`, used as tag-token entropy.
pub fn random_sequence(bound: u64) -> String {
    rand::rng().random_range(0..bound).to_string()
}

/// A single-use delimiter marking spans that must survive generic quoting.
/// One token per semantic channel, generated fresh per invocation.
#[derive(Debug, Clone)]
pub struct TagToken(String);

impl TagToken {
    /// Mint a fresh token with `bound` as the entropy ceiling.
    pub fn new(bound: u64) -> Self {
        Self(format!("<{}>", random_sequence(bound)))
    }

    /// The raw delimiter text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap `content` in this token on both sides.
    pub fn wrap(&self, content: &str) -> String {
        format!("{0}{1}{0}", self.0, content)
    }
}

static DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\"(.*?)\"").expect("quoted-span pattern is valid"));

/// Strip quoted tagged spans down to their bare content.
///
/// `quotes` lists the quote characters to consider; generated text only
/// ever wraps a given channel's spans in matching quotes, so each quote
/// kind is rewritten in its own pass.
pub fn unquote_tagged(text: &str, tag: &TagToken, quotes: &[char]) -> String {
    let token = regex::escape(tag.as_str());
    let mut out = text.to_owned();
    for quote in quotes {
        let q = regex::escape(&quote.to_string());
        let re = Regex::new(&format!("{q}{token}(.*?){token}{q}"))
            .expect("escaped tag pattern is valid");
        out = re.replace_all(&out, "$1").into_owned();
    }
    out
}

/// Rewrite quoted tagged spans into a spread over the array-coercion
/// utility: `"<tag>x<tag>"` becomes `...toArray(x)`.
pub fn spread_tagged(text: &str, tag: &TagToken, util_name: &str) -> String {
    let token = regex::escape(tag.as_str());
    let replacement = format!("...{util_name}($1)");
    let mut out = text.to_owned();
    for quote in ['\'', '"'] {
        let q = regex::escape(&quote.to_string());
        let re = Regex::new(&format!("{q}{token}(.*?){token}{q}"))
            .expect("escaped tag pattern is valid");
        out = re.replace_all(&out, replacement.as_str()).into_owned();
    }
    out
}

/// Re-wrap a serialized object string so it survives being embedded as a
/// single string value: tagged value spans shift to backticks, remaining
/// double quotes shift to single quotes, and the whole span is wrapped in
/// the raw-object token so post-processing restores literal object syntax.
pub fn escape_object_string(json: &str, tag_object: &TagToken, tag_value: &TagToken) -> String {
    let token = regex::escape(tag_value.as_str());
    let backticked = Regex::new(&format!("\"({token}.*?{token})\""))
        .expect("escaped tag pattern is valid")
        .replace_all(json, "`$1`");
    let singled = DOUBLE_QUOTED.replace_all(&backticked, "'$1'");
    tag_object.wrap(&singled)
}

/// Splice flattened-subtree wrapper objects inline: an object whose sole
/// property is the reserved marker key collapses to its array contents.
pub fn splice_marker_objects(text: &str, marker_key: &str) -> String {
    let key = regex::escape(marker_key);
    let mut out = text.to_owned();
    for quote in ['\'', '"'] {
        let q = regex::escape(&quote.to_string());
        let re = Regex::new(&format!(r"\{{\s*{q}{key}{q}\s*:\s*\[(.*?)\]\s*\}}"))
            .expect("escaped marker pattern is valid");
        out = re.replace_all(&out, "$1").into_owned();
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tokens_are_angle_delimited_and_fresh() {
        let tag = TagToken::new(1_000_000_000);
        assert!(tag.as_str().starts_with('<'));
        assert!(tag.as_str().ends_with('>'));
        assert_eq!(
            tag.wrap("ident"),
            format!("{0}ident{0}", tag.as_str())
        );
    }

    #[test]
    fn unquote_strips_tag_and_quotes() {
        let tag = TagToken::new(1_000_000_000);
        let text = format!("{{\"component\":\"{}\"}}", tag.wrap("index"));
        assert_eq!(
            unquote_tagged(&text, &tag, &['\'', '"', '`']),
            "{\"component\":index}"
        );
    }

    #[test]
    fn unquote_handles_backticked_spans() {
        let tag = TagToken::new(1_000_000_000);
        let text = format!("{{'default':`{}`}}", tag.wrap("layout"));
        assert_eq!(
            unquote_tagged(&text, &tag, &['\'', '"', '`']),
            "{'default':layout}"
        );
    }

    #[test]
    fn spread_rewrites_to_utility_call() {
        let tag = TagToken::new(1_000_000_000);
        let text = format!("[\"{}\"]", tag.wrap("blog"));
        assert_eq!(spread_tagged(&text, &tag, "toArray"), "[...toArray(blog)]");
    }

    #[test]
    fn escape_object_string_shifts_quotes() {
        let tag_object = TagToken::new(1_000_000_000);
        let tag_value = TagToken::new(1_000_000_000);
        let json = format!(
            "{{\"default\":\"{}\",\"sidebar\":\"{}\"}}",
            tag_value.wrap("layout"),
            tag_value.wrap("side")
        );
        let escaped = escape_object_string(&json, &tag_object, &tag_value);
        let expected = tag_object.wrap(&format!(
            "{{'default':`{}`,'sidebar':`{}`}}",
            tag_value.wrap("layout"),
            tag_value.wrap("side")
        ));
        assert_eq!(escaped, expected);
    }

    #[test]
    fn splice_collapses_marker_wrappers() {
        let marker = "<42>[Routes]<42>";
        let text = format!("[{{\"path\":\"/\"}},{{\"{marker}\":[...toArray(blog)]}}]");
        assert_eq!(
            splice_marker_objects(&text, marker),
            "[{\"path\":\"/\"},...toArray(blog)]"
        );
    }
}
