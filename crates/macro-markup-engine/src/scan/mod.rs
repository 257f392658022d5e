//! # Macro Tag Scanning
//!
//! Cursor-based scanning of free-form text for embedded macro tags.
//!
//! ## Architecture
//!
//! The scanner walks the input once, left to right, splitting it into plain
//! text segments and macro occurrences. Two historical tag syntaxes are
//! recognised (see [`markers`]); attribute parsing is delegated to the
//! [`crate::attrs::AttributeExtractor`] capability.
//!
//! ## Modules
//!
//! - **`events`**: `MacroEvent` enum (Text, Macro) plus `MacroOccurrence`
//!   and `TagSpan`
//! - **`markers`**: tag-syntax types owning their opening marker bytes
//! - **`cursor`**: forward-only `Cursor` with case-insensitive marker search
//! - **`scanner`**: `scan_events()` / `scan()` entry points
//!
//! ## Marker Precedence
//!
//! The processing-instruction marker is searched over the whole remaining
//! buffer before the element marker is consulted at all, so a later
//! `<?umbraco` tag wins over an earlier `<umbraco:macro` tag. This is a
//! compatibility quirk inherited from the sequential index-of fallback in
//! the historical implementation. Keep it; do not model new code on it.

pub mod cursor;
pub mod events;
pub mod markers;
pub mod scanner;

pub use events::{MacroEvent, MacroOccurrence, TagSpan, TagSyntax};
pub use scanner::{scan, scan_events, scan_events_with};

use thiserror::Error;

/// Failure modes of a scan. Either aborts the scan before any event is
/// delivered to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// An opening marker was found but no `>` follows it anywhere in the
    /// remaining input.
    #[error("unterminated macro tag at byte {0}: no closing '>' found")]
    UnterminatedTag(usize),

    /// A recognised tag carries neither a `macroalias` nor an `alias`
    /// attribute, so no occurrence can be formed for it.
    #[error("macro tag has neither 'macroalias' nor 'alias' attribute: {0}")]
    MissingAlias(String),
}
