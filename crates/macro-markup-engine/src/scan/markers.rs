//! Tag-syntax types that own their opening marker bytes.
//!
//! All marker constants live here; the scanner never hardcodes `<?umbraco`
//! or `<umbraco:macro`. Both markers are matched ignoring ASCII case.

/// The historical primary syntax, processing-instruction style:
/// `<?UMBRACO_MACRO macroAlias="x" ... />`.
pub struct ProcessingInstructionTag;

impl ProcessingInstructionTag {
    pub const MARKER: &'static [u8] = b"<?umbraco";
}

/// The legacy secondary syntax, element style:
/// `<umbraco:macro alias="x" ...></umbraco:macro>`.
pub struct ElementTag;

impl ElementTag {
    pub const MARKER: &'static [u8] = b"<umbraco:macro";
}
