//! IDL database boundary objects.
//!
//! The upstream parser/database produces interface, attribute, operation
//! and argument objects; the generator core only reads them. The structs
//! here mirror that surface as plain owned data with builder-style
//! constructors for tests and embedders.
//!
//! Ordering helpers (`attribute_output_order`, `constant_output_order`)
//! define the canonical output order so regenerated bindings are stable
//! across runs regardless of database iteration order.

use std::cmp::Ordering;

use bitflags::bitflags;
use rustc_hash::FxHashSet;

use crate::ext_attrs::ExtendedAttributes;

bitflags! {
    /// Which half of a function-call accessor pair an attribute entry is.
    ///
    /// The database splits attributes into getter and setter entries; the
    /// flags keep the pair membership comparable as one value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AccessorFlags: u8 {
        const GETTER = 1;
        const SETTER = 1 << 1;
    }
}

/// One interface from the IDL database.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdlInterface {
    /// Interface identifier (the native/JavaScript binding name).
    pub id: String,
    /// Ordered parent-type references, used for sequence/typed-array
    /// ancestry detection.
    pub parents: Vec<IdlParent>,
    pub attributes: Vec<IdlAttribute>,
    pub operations: Vec<IdlOperation>,
    pub constants: Vec<IdlConstant>,
    pub ext_attrs: ExtendedAttributes,
    /// Source-annotation tokens used by module filters.
    pub annotations: FxHashSet<String>,
}

impl IdlInterface {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_parent(mut self, type_id: impl Into<String>) -> Self {
        self.parents.push(IdlParent::new(type_id));
        self
    }

    pub fn with_attribute(mut self, attribute: IdlAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_operation(mut self, operation: IdlOperation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn with_constant(mut self, constant: IdlConstant) -> Self {
        self.constants.push(constant);
        self
    }

    pub fn with_ext_attrs(mut self, ext_attrs: ExtendedAttributes) -> Self {
        self.ext_attrs = ext_attrs;
        self
    }

    pub fn with_annotation(mut self, token: impl Into<String>) -> Self {
        self.annotations.insert(token.into());
        self
    }
}

/// A parent-type reference on an interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdlParent {
    pub type_id: String,
}

impl IdlParent {
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
        }
    }
}

/// One operation (method) declaration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdlOperation {
    pub id: String,
    /// Declared return type identifier.
    pub return_type_id: String,
    pub arguments: Vec<IdlArgument>,
    pub ext_attrs: ExtendedAttributes,
    pub annotations: FxHashSet<String>,
}

impl IdlOperation {
    pub fn new(id: impl Into<String>, return_type_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            return_type_id: return_type_id.into(),
            ..Self::default()
        }
    }

    pub fn with_argument(mut self, argument: IdlArgument) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_ext_attrs(mut self, ext_attrs: ExtendedAttributes) -> Self {
        self.ext_attrs = ext_attrs;
        self
    }

    pub fn with_annotation(mut self, token: impl Into<String>) -> Self {
        self.annotations.insert(token.into());
        self
    }
}

/// One argument of an operation or constructor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdlArgument {
    pub id: String,
    pub type_id: String,
    pub is_optional: bool,
    pub ext_attrs: ExtendedAttributes,
}

impl IdlArgument {
    pub fn new(id: impl Into<String>, type_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_id: type_id.into(),
            ..Self::default()
        }
    }

    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    pub fn with_ext_attrs(mut self, ext_attrs: ExtendedAttributes) -> Self {
        self.ext_attrs = ext_attrs;
        self
    }
}

/// One attribute (property) declaration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdlAttribute {
    pub id: String,
    pub type_id: String,
    pub accessors: AccessorFlags,
    pub ext_attrs: ExtendedAttributes,
    pub annotations: FxHashSet<String>,
}

impl IdlAttribute {
    pub fn new(id: impl Into<String>, type_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_id: type_id.into(),
            ..Self::default()
        }
    }

    pub fn getter(mut self) -> Self {
        self.accessors |= AccessorFlags::GETTER;
        self
    }

    pub fn setter(mut self) -> Self {
        self.accessors |= AccessorFlags::SETTER;
        self
    }

    pub fn with_ext_attrs(mut self, ext_attrs: ExtendedAttributes) -> Self {
        self.ext_attrs = ext_attrs;
        self
    }

    /// Check whether this entry is the setter half of its accessor pair.
    pub fn is_setter(&self) -> bool {
        self.accessors.contains(AccessorFlags::SETTER)
    }
}

/// One constant declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdlConstant {
    pub id: String,
    pub type_id: String,
    pub value: String,
}

impl IdlConstant {
    pub fn new(
        id: impl Into<String>,
        type_id: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            type_id: type_id.into(),
            value: value.into(),
        }
    }
}

/// Canonical output ordering for attributes: by id, getters before setters.
pub fn attribute_output_order(a: &IdlAttribute, b: &IdlAttribute) -> Ordering {
    a.id.cmp(&b.id).then(a.is_setter().cmp(&b.is_setter()))
}

/// Canonical output ordering for constants: by id.
pub fn constant_output_order(a: &IdlConstant, b: &IdlConstant) -> Ordering {
    a.id.cmp(&b.id)
}

/// Find the attribute entry on `interface` matching `attr`'s id and
/// accessor-pair half. Ids plus accessor flags are unique per interface,
/// so at most one entry can match.
pub fn find_matching_attribute<'a>(
    interface: &'a IdlInterface,
    attr: &IdlAttribute,
) -> Option<&'a IdlAttribute> {
    let mut matches = interface
        .attributes
        .iter()
        .filter(|other| other.id == attr.id && other.accessors == attr.accessors);
    let found = matches.next();
    debug_assert!(
        matches.next().is_none(),
        "attribute id + accessor flags must be unique within an interface"
    );
    found
}

/// Check whether a declaration passes a source-annotation filter.
///
/// An empty filter accepts everything; otherwise any filter token present
/// in the declaration's annotations accepts it.
pub fn match_source_filter(filter: &[String], annotations: &FxHashSet<String>) -> bool {
    filter.is_empty() || filter.iter().any(|token| annotations.contains(token))
}
