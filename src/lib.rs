//! Dart DOM binding generator core.
//!
//! `domgen` derives the type mappings, naming conventions and
//! call-signature shapes needed to emit Dart bindings from a DOM IDL
//! database. It is the decision-making half of a binding generator: the
//! IDL parser/database upstream and the template/text-emission layer
//! downstream are separate components that consume this crate's pure
//! query surface.
//!
//! The three pieces:
//!
//! - the **type registry** ([`TypeRegistry`]) maps IDL type identifiers
//!   to descriptors with Dart-side names, native representations,
//!   ownership hints and conversion expressions — lookup never fails;
//! - the **overload resolver** ([`analyze_operation`],
//!   [`analyze_constructor`], [`recognize_callback`]) collapses a family
//!   of same-named operation signatures into one canonical signature
//!   with required/optional partitioning;
//! - the **signature formatter** (methods on [`OperationInfo`]) renders
//!   resolved parameter lists as declaration or argument-list text.
//!
//! ```
//! use domgen::prelude::*;
//!
//! let registry = TypeRegistry::with_builtins();
//! let interface = IdlInterface::new("Database");
//! let overloads = vec![
//!     IdlOperation::new("transaction", "void")
//!         .with_argument(IdlArgument::new("callback", "SQLTransactionCallback")),
//!     IdlOperation::new("transaction", "void")
//!         .with_argument(IdlArgument::new("callback", "SQLTransactionCallback"))
//!         .with_argument(IdlArgument::new("errorCallback", "SQLTransactionErrorCallback")),
//! ];
//!
//! let info = analyze_operation(&interface, &overloads, &registry);
//! assert_eq!(
//!     info.parameters_interface_declaration().unwrap(),
//!     "SQLTransactionCallback callback, [SQLTransactionErrorCallback errorCallback]"
//! );
//! ```

pub use domgen_core::{
    AccessorFlags, ExtAttrValue, ExtFunction, ExtendedAttributes, GenerationError,
    GenerationResult, IdlArgument, IdlAttribute, IdlConstant, IdlInterface, IdlOperation,
    IdlParent, RenameTable, attribute_output_order, constant_output_order, dart_dom_name_of_attribute,
    find_matching_attribute, match_source_filter,
};
pub use domgen_registry::{
    ObjectTypeInfo, PrimitiveTypeInfo, SVG_SUPPLEMENTAL_INCLUDES, SequenceTypeInfo,
    TearOffTypeInfo, TypeInfo, TypeRegistry, interface_factory_provider, is_dart_collection_type,
    is_dart_list_type, is_primitive_type, is_pure_interface, make_native_spec,
    maybe_list_element_type, maybe_sequence_element_type, maybe_typed_array_element_type,
    native_body_override,
};
pub use domgen_resolver::{
    CALLBACK_OPERATION_NAME, CallbackRecognition, DART_DYNAMIC, DART_NULL, OperationInfo,
    ParamInfo, analyze_constructor, analyze_operation, format_name_list, indent_text,
    recognize_callback, type_or_nothing, type_or_var,
};

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use domgen_core::{
        ExtFunction, ExtendedAttributes, GenerationError, GenerationResult, IdlArgument,
        IdlAttribute, IdlInterface, IdlOperation,
    };
    pub use domgen_registry::{TypeInfo, TypeRegistry};
    pub use domgen_resolver::{
        CallbackRecognition, OperationInfo, ParamInfo, analyze_constructor, analyze_operation,
        recognize_callback,
    };
}
