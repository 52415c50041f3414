//! Attribute renaming.
//!
//! Some IDL attribute names are not legal Dart identifiers (`default`,
//! `final`). The rename table maps those canonical names to their Dart
//! overrides; an explicit `[DartName=...]` directive on the declaration
//! wins over the table. All renaming goes through this module — callers
//! work with the true IDL name until the Dart name is actually needed.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::idl::IdlAttribute;

lazy_static! {
    static ref DART_ATTRIBUTE_RENAMES: RenameTable = RenameTable::new()
        .with_rename("default", "defaultValue")
        .with_rename("final", "finalValue");
}

/// Mapping from canonical IDL names to target-language overrides.
#[derive(Debug, Clone, Default)]
pub struct RenameTable {
    entries: FxHashMap<String, String>,
}

impl RenameTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form: add one rename.
    pub fn with_rename(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.entries.insert(from.into(), to.into());
        self
    }

    /// Look up the override for a canonical name.
    pub fn rename(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// The fixed table for attribute names that are not legal Dart names.
    pub fn dart_attribute_renames() -> &'static RenameTable {
        &DART_ATTRIBUTE_RENAMES
    }
}

/// Return the Dart name for an IDL attribute.
///
/// `attr.id` is the native/JavaScript name; the Dart name applies the
/// fixed rename table and then any explicit `[DartName=...]` directive.
pub fn dart_dom_name_of_attribute(attr: &IdlAttribute) -> String {
    let name = RenameTable::dart_attribute_renames()
        .rename(&attr.id)
        .unwrap_or(&attr.id);
    attr.ext_attrs.dart_name().unwrap_or(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ext_attrs::ExtendedAttributes;

    #[test]
    fn illegal_dart_names_are_renamed() {
        let attr = IdlAttribute::new("default", "boolean").getter();
        assert_eq!(dart_dom_name_of_attribute(&attr), "defaultValue");

        let attr = IdlAttribute::new("final", "boolean").getter();
        assert_eq!(dart_dom_name_of_attribute(&attr), "finalValue");
    }

    #[test]
    fn legal_names_pass_through() {
        let attr = IdlAttribute::new("href", "DOMString").getter();
        assert_eq!(dart_dom_name_of_attribute(&attr), "href");
    }

    #[test]
    fn dart_name_directive_wins_over_table() {
        let attr = IdlAttribute::new("default", "boolean")
            .getter()
            .with_ext_attrs(ExtendedAttributes::new().with_value("DartName", "isDefault"));
        assert_eq!(dart_dom_name_of_attribute(&attr), "isDefault");
    }

    #[test]
    fn custom_table_lookup() {
        let table = RenameTable::new().with_rename("continue", "continueFunction");
        assert_eq!(table.rename("continue"), Some("continueFunction"));
        assert!(table.rename("next").is_none());
    }
}
