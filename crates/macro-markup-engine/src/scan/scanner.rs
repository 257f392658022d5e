use super::{
    ScanError,
    cursor::Cursor,
    events::{MacroEvent, MacroOccurrence, TagSpan, TagSyntax},
    markers::{ElementTag, ProcessingInstructionTag},
};
use crate::attrs::{AttributeExtractor, RegexAttributeExtractor};

/// Scans `text` into a sequence of [`MacroEvent`]s using the default
/// attribute extractor.
///
/// The returned events cover the entire input in order: every byte is part
/// of exactly one text segment or one consumed tag. Empty text segments
/// (leading, trailing, between adjacent tags) are emitted too.
///
/// On error nothing is returned at all; a caller never observes a partial
/// event stream.
pub fn scan_events(text: &str) -> Result<Vec<MacroEvent>, ScanError> {
    scan_events_with(text, &RegexAttributeExtractor)
}

/// Like [`scan_events`], with a caller-supplied [`AttributeExtractor`].
pub fn scan_events_with(
    text: &str,
    extractor: &dyn AttributeExtractor,
) -> Result<Vec<MacroEvent>, ScanError> {
    let mut cur = Cursor::new(text);
    let mut out = Vec::new();

    loop {
        let Some((offset, syntax)) = find_next_marker(&cur) else {
            out.push(MacroEvent::Text(cur.rest().to_string()));
            return Ok(out);
        };
        out.push(MacroEvent::Text(cur.rest()[..offset].to_string()));
        cur.bump_n(offset);

        let tag = read_tag(&cur, syntax)?;
        let attributes = extractor.extract(&tag.raw);
        let alias = attributes
            .get("macroalias")
            .or_else(|| attributes.get("alias"))
            .ok_or_else(|| ScanError::MissingAlias(tag.raw.clone()))?
            .to_string();

        let consumed = consumed_len(&cur, &tag);
        out.push(MacroEvent::Macro(MacroOccurrence { alias, attributes }));
        cur.bump_n(consumed);
    }
}

/// Callback form of [`scan_events`]: drives `on_text` / `on_macro` in input
/// order. On error no callback is invoked at all.
pub fn scan<T, M>(text: &str, mut on_text: T, mut on_macro: M) -> Result<(), ScanError>
where
    T: FnMut(&str),
    M: FnMut(&MacroOccurrence),
{
    for event in scan_events(text)? {
        match event {
            MacroEvent::Text(t) => on_text(&t),
            MacroEvent::Macro(m) => on_macro(&m),
        }
    }
    Ok(())
}

/// Earliest tag marker in the remainder, as (relative offset, syntax).
///
/// The primary marker is searched over the whole remainder before the
/// secondary marker is consulted, so a later primary tag beats an earlier
/// secondary one (compatibility quirk, see module docs).
fn find_next_marker(cur: &Cursor<'_>) -> Option<(usize, TagSyntax)> {
    if let Some(i) = cur.find_ignore_ascii_case(ProcessingInstructionTag::MARKER) {
        return Some((i, TagSyntax::ProcessingInstruction));
    }
    cur.find_ignore_ascii_case(ElementTag::MARKER)
        .map(|i| (i, TagSyntax::Element))
}

/// Reads the tag span starting at the cursor: everything through the first
/// `>`. A `>` inside a quoted attribute value terminates the span early
/// (preserved limitation of the historical scanner).
fn read_tag(cur: &Cursor<'_>, syntax: TagSyntax) -> Result<TagSpan, ScanError> {
    let Some(gt) = cur.find_byte(b'>') else {
        return Err(ScanError::UnterminatedTag(cur.pos()));
    };
    let raw = cur.rest()[..=gt].to_string();
    let bytes = raw.as_bytes();
    let slash_before_gt = bytes.len() >= 2 && bytes[bytes.len() - 2] == b'/';
    let has_space = raw.contains(' ');
    Ok(TagSpan {
        syntax,
        self_closing: slash_before_gt && has_space,
        raw,
    })
}

/// Bytes to consume for `tag`, counted from the tag's first byte.
///
/// A non-self-closing tag with attributes may wrap editor-inserted preview
/// content (`<?UMBRACO_MACRO ...><img ...></?UMBRACO_MACRO>`); when its
/// literal closing tag occurs later in the input the whole stretch through
/// that closing tag is consumed without being reported. Tags without a
/// space never get children treatment, and a missing closing tag means
/// only the opening span is consumed.
fn consumed_len(cur: &Cursor<'_>, tag: &TagSpan) -> usize {
    if !tag.self_closing
        && let Some(space) = tag.raw.find(' ')
    {
        let closing = format!("</{}>", &tag.raw[1..space]);
        if let Some(at) = cur.rest().find(&closing) {
            return at + closing.len();
        }
    }
    tag.raw.len()
}
