//! Attribute extraction from raw macro tag text.
//!
//! The scanner never parses attributes itself; it hands the raw tag text to
//! an [`AttributeExtractor`]. The default [`RegexAttributeExtractor`] is
//! deliberately permissive (quoted `name="value"` / `name='value'` pairs
//! anywhere in the tag). A stricter XML-grade extractor can be swapped in
//! without touching the scanner.

use regex::Regex;
use std::sync::OnceLock;

/// An insertion-ordered attribute map with ASCII-lowercased keys.
///
/// Attribute names are case-insensitive in both historical macro syntaxes,
/// so keys are normalised on insert and lookup. Values are kept exactly as
/// found. Order is the order of first insertion; re-inserting a name
/// overwrites the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an attribute, lowercasing the name. An existing entry with
    /// the same name keeps its position but takes the new value.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let name = name.to_ascii_lowercase();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.insert(&name, value);
        }
        attrs
    }
}

/// Capability for turning a raw tag's text into its attribute map.
pub trait AttributeExtractor {
    /// Extracts attributes from a single tag's literal text, delimiters
    /// included (e.g. `<?UMBRACO_MACRO macroAlias="x" foo="bar"/>`).
    fn extract(&self, tag: &str) -> Attributes;
}

/// Default extractor: quoted `name="value"` / `name='value'` pairs matched
/// anywhere in the tag text.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexAttributeExtractor;

fn attr_pair_re() -> &'static Regex {
    static ATTR_PAIR: OnceLock<Regex> = OnceLock::new();
    ATTR_PAIR.get_or_init(|| {
        Regex::new(r#"([\w:-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("invalid attribute regex")
    })
}

impl AttributeExtractor for RegexAttributeExtractor {
    fn extract(&self, tag: &str) -> Attributes {
        let mut attrs = Attributes::new();
        for caps in attr_pair_re().captures_iter(tag) {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or_default();
            attrs.insert(&caps[1], value);
        }
        attrs
    }
}
