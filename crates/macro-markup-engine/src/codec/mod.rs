//! Conversions between the two textual representations of a macro tag.
//!
//! - [`persisted`]: the compact on-disk syntax
//!   (`<?UMBRACO_MACRO macroAlias="x" ... />`) and its expansion into the
//!   editor-facing wrapper block.
//! - [`editor`]: the wrapper block (`<div class="umb-macro-holder">` with
//!   the persisted tag embedded in an HTML comment) and its reduction back
//!   to the persisted syntax.
//!
//! Both directions are best-effort regex substitutions: regions that don't
//! match pass through untouched, and a structurally deficient match
//! degrades to an empty replacement instead of failing. Neither direction
//! ever errors, so no malformed input can corrupt persisted content.

pub mod editor;
pub mod persisted;
