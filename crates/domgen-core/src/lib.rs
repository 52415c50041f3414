//! Shared model types for the Dart DOM binding generator.
//!
//! This crate holds the boundary objects handed over by the upstream IDL
//! database — interfaces, attributes, operations, arguments and their
//! extended-attribute metadata — together with the attribute rename table
//! and the error type used across the generator.
//!
//! The IDL database itself (parsing `.idl` files into these objects) and
//! the text-emission layer both live outside this workspace; everything
//! here is plain owned data constructed once per generation pass and read
//! thereafter.

mod error;
mod ext_attrs;
mod idl;
mod rename;

pub use error::{GenerationError, GenerationResult};
pub use ext_attrs::{ExtAttrValue, ExtFunction, ExtendedAttributes};
pub use idl::{
    AccessorFlags, IdlArgument, IdlAttribute, IdlConstant, IdlInterface, IdlOperation, IdlParent,
    attribute_output_order, constant_output_order, find_matching_attribute, match_source_filter,
};
pub use rename::{RenameTable, dart_dom_name_of_attribute};
