//! Reduction of editor wrapper blocks back to the persisted macro syntax.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// The whole editor wrapper: a `div` whose class carries the
/// `umb-macro-holder` marker, the HTML comment embedding the persisted tag
/// (group 2), and everything through the closing `</div>`. Case-insensitive,
/// non-greedy, spans newlines.
fn editor_wrapper_re() -> &'static Regex {
    static EDITOR_WRAPPER: OnceLock<Regex> = OnceLock::new();
    EDITOR_WRAPPER.get_or_init(|| {
        Regex::new(
            r#"(?is)(<div class=["']umb-macro-holder["'].*?>.*?<!--\s*?)(<\?UMBRACO_MACRO.*?/>)(.*?</div>)"#,
        )
        .expect("invalid editor wrapper regex")
    })
}

/// Collapses every editor wrapper block in `editor_html` back to the bare
/// persisted tag it embeds, dropping the decorative `div`, the comment
/// delimiters, and whatever preview content the editor rendered after the
/// comment. Non-matching regions pass through unchanged; a match missing
/// its tag capture degrades to an empty replacement.
pub fn to_persisted(editor_html: &str) -> String {
    editor_wrapper_re()
        .replace_all(editor_html, |caps: &Captures| {
            caps.get(2)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        })
        .into_owned()
}
