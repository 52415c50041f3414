//! Extended-attribute metadata attached to IDL nodes.
//!
//! IDL declarations carry bracketed metadata such as `[Callback]`,
//! `[DartName=continueFunction]`, `[Constructor(in DOMString type)]` or
//! `[NamedConstructor=Audio(in DOMString src)]`. The upstream database
//! surfaces these as a keyed map; this module models the map with a tagged
//! value so callers query through typed accessors instead of probing raw
//! strings.

use rustc_hash::FxHashMap;

use crate::idl::IdlArgument;

/// Keyed extended-attribute metadata for one IDL declaration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtendedAttributes {
    entries: FxHashMap<String, ExtAttrValue>,
}

/// Value of one extended attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtAttrValue {
    /// Bare marker with no payload, e.g. `[Callback]` or `[Constructor]`.
    Marker,
    /// String-valued attribute, e.g. `[DartName=continueFunction]`.
    Value(String),
    /// Function-shaped attribute carrying an argument list, e.g.
    /// `[Constructor(in float x)]` or `[NamedConstructor=Audio(...)]`.
    Function(ExtFunction),
}

/// Function payload of a function-shaped extended attribute.
///
/// `id` is the declared name for named constructors and `None` for the
/// anonymous `[Constructor(...)]` form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtFunction {
    pub id: Option<String>,
    pub arguments: Vec<IdlArgument>,
}

impl ExtFunction {
    /// Create an anonymous function payload.
    pub fn anonymous(arguments: Vec<IdlArgument>) -> Self {
        Self {
            id: None,
            arguments,
        }
    }

    /// Create a named function payload.
    pub fn named(id: impl Into<String>, arguments: Vec<IdlArgument>) -> Self {
        Self {
            id: Some(id.into()),
            arguments,
        }
    }
}

impl ExtendedAttributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, replacing any previous value for the key.
    pub fn insert(&mut self, name: impl Into<String>, value: ExtAttrValue) {
        self.entries.insert(name.into(), value);
    }

    /// Builder form: add a bare marker attribute.
    pub fn with_marker(mut self, name: impl Into<String>) -> Self {
        self.insert(name, ExtAttrValue::Marker);
        self
    }

    /// Builder form: add a string-valued attribute.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, ExtAttrValue::Value(value.into()));
        self
    }

    /// Builder form: add a function-shaped attribute.
    pub fn with_function(mut self, name: impl Into<String>, func: ExtFunction) -> Self {
        self.insert(name, ExtAttrValue::Function(func));
        self
    }

    /// Check whether an attribute is present, regardless of shape.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Get the string payload of an attribute, if it has one.
    pub fn string_value(&self, name: &str) -> Option<&str> {
        match self.entries.get(name) {
            Some(ExtAttrValue::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// Get the function payload of an attribute, if it has one.
    pub fn function_value(&self, name: &str) -> Option<&ExtFunction> {
        match self.entries.get(name) {
            Some(ExtAttrValue::Function(func)) => Some(func),
            _ => None,
        }
    }

    /// The explicit Dart rename directive, if declared.
    ///
    /// This is the one typed accessor for `[DartName=...]`; callers must
    /// not probe the raw map for renames.
    pub fn dart_name(&self) -> Option<&str> {
        self.string_value("DartName")
    }

    /// Number of attributes present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no attributes are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
