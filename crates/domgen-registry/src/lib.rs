//! Type-mapping registry for the Dart DOM binding generator.
//!
//! This crate maps IDL type identifiers to [`TypeInfo`] descriptors that
//! know their Dart-side name, native representation, ownership hints and
//! conversion expressions, plus the fixed lookup tables (pure interfaces,
//! typed-array factories, native-spec overrides) the generator consults.
//!
//! # Usage pattern
//!
//! The registry is populated once during setup — typically via
//! [`TypeRegistry::with_builtins`] — and is read-only afterwards, so it
//! can be shared freely across resolutions.
//!
//! ```
//! use domgen_registry::TypeRegistry;
//!
//! let registry = TypeRegistry::with_builtins();
//! assert_eq!(registry.dart_type("unsigned long"), "int");
//! assert_eq!(registry.dart_type("sequence<Node>"), "List<Node>");
//! ```

mod registry;
mod tables;
mod type_info;

pub use registry::{
    TypeRegistry, is_dart_collection_type, is_dart_list_type, is_primitive_type,
    maybe_list_element_type, maybe_sequence_element_type, maybe_typed_array_element_type,
};
pub use tables::{
    SVG_SUPPLEMENTAL_INCLUDES, interface_factory_provider, is_pure_interface, make_native_spec,
    native_body_override,
};
pub use type_info::{
    ObjectTypeInfo, PrimitiveTypeInfo, SequenceTypeInfo, TearOffTypeInfo, TypeInfo,
};
