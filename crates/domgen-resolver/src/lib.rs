//! Overload resolution and signature rendering for the Dart DOM binding
//! generator.
//!
//! Given a non-empty group of same-named operation declarations, the
//! resolver collapses them into one canonical [`OperationInfo`] whose
//! parameters carry unified names, unified (or widened) types and
//! required/optional partitioning; constructors and callback-shaped
//! interfaces resolve through the same machinery. The resolved operation
//! renders itself as interface-declaration text, implementation
//! declaration text, or a call-forwarding argument list.
//!
//! Resolution is a pure function of the interface objects and the (read
//! only) type registry; nothing here mutates shared state.
//!
//! ```
//! use domgen_core::{IdlArgument, IdlInterface, IdlOperation};
//! use domgen_registry::TypeRegistry;
//! use domgen_resolver::analyze_operation;
//!
//! let registry = TypeRegistry::with_builtins();
//! let interface = IdlInterface::new("CanvasRenderingContext2D");
//! let overloads = vec![
//!     IdlOperation::new("drawImage", "void")
//!         .with_argument(IdlArgument::new("image", "HTMLImageElement")),
//!     IdlOperation::new("drawImage", "void")
//!         .with_argument(IdlArgument::new("image", "HTMLImageElement"))
//!         .with_argument(IdlArgument::new("x", "float")),
//! ];
//!
//! let info = analyze_operation(&interface, &overloads, &registry);
//! assert_eq!(
//!     info.parameters_interface_declaration().unwrap(),
//!     "HTMLImageElement image, [num x]"
//! );
//! ```

mod analyze;
mod operation;
mod text;

pub use analyze::{
    CALLBACK_OPERATION_NAME, CallbackRecognition, analyze_constructor, analyze_operation,
    recognize_callback,
};
pub use operation::{OperationInfo, ParamInfo};
pub use text::{DART_DYNAMIC, DART_NULL, format_name_list, indent_text, type_or_nothing, type_or_var};
