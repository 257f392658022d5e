use crate::attrs::Attributes;

/// One event of a scan, in input order.
///
/// A scan covers its input exactly: every byte belongs to one `Text` event
/// or to a consumed tag. Empty text segments are emitted, not suppressed;
/// callers that don't care can skip them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacroEvent {
    /// Plain text between tags (possibly empty).
    Text(String),
    /// One recognised macro tag with its extracted attributes.
    Macro(MacroOccurrence),
}

/// A recognised macro tag instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroOccurrence {
    /// The macro's identifier, case preserved as found in the tag.
    pub alias: String,
    /// All attributes of the tag, keys lowercased, insertion order kept.
    pub attributes: Attributes,
}

/// Which of the two recognised opening markers a tag matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSyntax {
    /// `<?umbraco...` (primary).
    ProcessingInstruction,
    /// `<umbraco:macro...` (legacy secondary).
    Element,
}

/// The raw span of a single tag, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSpan {
    pub syntax: TagSyntax,
    /// True when the byte before the final `>` is `/` and the tag carries
    /// at least one space (i.e. has attributes).
    pub self_closing: bool,
    /// The tag's literal text, from `<` through `>` inclusive.
    pub raw: String,
}
