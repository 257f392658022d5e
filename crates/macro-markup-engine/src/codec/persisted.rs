//! The persisted macro syntax and its expansion for the rich-text editor.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// The compact persisted tag: `<?UMBRACO_MACRO macroAlias="x" ... />`.
/// Group 1 captures the alias (word characters only). Case-insensitive,
/// spans newlines.
fn persisted_tag_re() -> &'static Regex {
    static PERSISTED_TAG: OnceLock<Regex> = OnceLock::new();
    PERSISTED_TAG.get_or_init(|| {
        Regex::new(r#"(?is)<\?UMBRACO_MACRO macroAlias=["'](\w+?)["'].*?/>"#)
            .expect("invalid persisted tag regex")
    })
}

/// Expands every persisted tag in `persisted` into the editor wrapper block
/// the rich-text editor renders in its place:
///
/// ```text
/// <div class="umb-macro-holder" data-load-content="false">
/// <!-- <?UMBRACO_MACRO macroAlias="myMacro" /> -->
/// Macro alias: <strong>myMacro</strong></div>
/// ```
///
/// `html_attributes` are appended to the opening `div` in order, values
/// attribute-escaped. The original tag survives verbatim inside the HTML
/// comment, which is what makes the conversion reversible. Non-matching
/// regions pass through unchanged; a match missing its alias capture
/// degrades to an empty replacement.
pub fn to_editor_markup(persisted: &str, html_attributes: &[(String, String)]) -> String {
    persisted_tag_re()
        .replace_all(persisted, |caps: &Captures| {
            let Some(alias) = caps.get(1) else {
                return String::new();
            };
            let mut out = String::from(r#"<div class="umb-macro-holder""#);
            for (name, value) in html_attributes {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                out.push_str(&html_escape::encode_double_quoted_attribute(value));
                out.push('"');
            }
            out.push_str(">\n<!-- ");
            out.push_str(&caps[0]);
            out.push_str(" -->\nMacro alias: <strong>");
            out.push_str(alias.as_str());
            out.push_str("</strong></div>");
            out
        })
        .into_owned()
}

/// Extracts the alias from a persisted tag, or `None` when `tag` doesn't
/// match the persisted syntax.
pub fn extract_alias(tag: &str) -> Option<&str> {
    persisted_tag_re()
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attrs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn wraps_tag_in_editor_block() {
        let markup = to_editor_markup(
            r#"<?UMBRACO_MACRO macroAlias="x"/>"#,
            &attrs(&[("data-load-content", "false")]),
        );
        insta::assert_snapshot!(markup, @r#"
        <div class="umb-macro-holder" data-load-content="false">
        <!-- <?UMBRACO_MACRO macroAlias="x"/> -->
        Macro alias: <strong>x</strong></div>
        "#);
    }

    #[test]
    fn surrounding_text_passes_through() {
        let markup = to_editor_markup(
            r#"<p>before</p><?UMBRACO_MACRO macroAlias="nav" /><p>after</p>"#,
            &[],
        );
        assert!(markup.starts_with("<p>before</p><div class=\"umb-macro-holder\">"));
        assert!(markup.ends_with("Macro alias: <strong>nav</strong></div><p>after</p>"));
    }

    #[test]
    fn every_occurrence_is_wrapped() {
        let markup = to_editor_markup(
            r#"<?UMBRACO_MACRO macroAlias="a" /> mid <?UMBRACO_MACRO macroAlias="b" />"#,
            &[],
        );
        assert_eq!(markup.matches("umb-macro-holder").count(), 2);
        assert!(markup.contains("<strong>a</strong>"));
        assert!(markup.contains("<strong>b</strong>"));
    }

    #[test]
    fn input_without_tags_is_unchanged() {
        let input = "<p>nothing persisted here</p>";
        assert_eq!(to_editor_markup(input, &[]), input);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let markup = to_editor_markup(
            r#"<?UMBRACO_MACRO macroAlias="x" />"#,
            &attrs(&[("title", r#"a "quoted" value"#)]),
        );
        assert!(markup.contains(r#"title="a &quot;quoted&quot; value""#));
    }

    #[test]
    fn matching_is_case_insensitive_and_spans_newlines() {
        let markup = to_editor_markup(
            "<?umbraco_macro macroalias='x'\nfoo='bar' />",
            &[],
        );
        assert!(markup.contains("<strong>x</strong>"));
    }

    #[test]
    fn extract_alias_takes_first_capture() {
        assert_eq!(
            extract_alias(r#"<?UMBRACO_MACRO macroAlias="weather" city="oslo" />"#),
            Some("weather")
        );
    }

    #[test]
    fn extract_alias_rejects_non_word_aliases() {
        assert_eq!(
            extract_alias(r#"<?UMBRACO_MACRO macroAlias="my macro" />"#),
            None
        );
    }

    #[test]
    fn extract_alias_rejects_non_matching_text() {
        assert_eq!(extract_alias("<div>not a macro</div>"), None);
    }
}
