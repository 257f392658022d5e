pub mod attrs;
pub mod codec;
pub mod scan;

// Re-export key types for easier usage
pub use attrs::{AttributeExtractor, Attributes, RegexAttributeExtractor};
pub use codec::{editor, persisted};
pub use scan::{MacroEvent, MacroOccurrence, ScanError, scan, scan_events, scan_events_with};
