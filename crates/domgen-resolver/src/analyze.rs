//! Overload resolution.
//!
//! Collapses a family of same-named operation declarations into one
//! canonical [`OperationInfo`]: arguments are transposed positionally,
//! each position's name and type are unified across overloads, and a
//! position omitted or marked optional anywhere becomes optional in the
//! merged signature.

use std::collections::BTreeSet;

use tracing::trace;

use domgen_core::{IdlArgument, IdlInterface, IdlOperation};
use domgen_registry::TypeRegistry;

use crate::operation::{OperationInfo, ParamInfo};
use crate::text::{DART_DYNAMIC, DART_NULL};

/// The reserved operation name a callback interface must declare.
pub const CALLBACK_OPERATION_NAME: &str = "handleEvent";

/// Outcome of the callback shape check.
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackRecognition {
    /// The interface is callback-shaped; the payload is the resolved
    /// signature of its single `handleEvent` operation.
    Callback(OperationInfo),
    /// The interface is not a callback.
    NotCallback,
}

/// Derive the calling convention for a set of same-named overloads.
///
/// The declared name, rename directive and return type are taken from the
/// first overload. Return types are deliberately not unified across the
/// set — overload families agree on them in practice, and callers depend
/// on the first overload winning when they do not.
///
/// # Panics
///
/// Panics if `operations` is empty; the upstream database only hands the
/// resolver non-empty overload groups.
pub fn analyze_operation(
    interface: &IdlInterface,
    operations: &[IdlOperation],
    registry: &TypeRegistry,
) -> OperationInfo {
    assert!(
        !operations.is_empty(),
        "overload groups must be non-empty"
    );

    // Transpose the argument lists by position; overloads with fewer
    // arguments contribute an absent value at trailing positions.
    let arg_count = operations
        .iter()
        .map(|op| op.arguments.len())
        .max()
        .unwrap_or(0);
    let param_infos = (0..arg_count)
        .map(|position| {
            let column: Vec<Option<&IdlArgument>> = operations
                .iter()
                .map(|op| op.arguments.get(position))
                .collect();
            unify_arguments(&column, interface, registry)
        })
        .collect();

    let first = &operations[0];
    let declared_name = first.id.clone();
    let name = first
        .ext_attrs
        .dart_name()
        .unwrap_or(&declared_name)
        .to_string();

    OperationInfo {
        overloads: Some(operations.to_vec()),
        idl_args: None,
        declared_name: Some(declared_name.clone()),
        name: Some(name),
        js_name: Some(declared_name),
        type_name: registry.dart_type(&first.return_type_id),
        param_infos,
    }
}

/// Derive the calling convention for an interface's constructor, if it
/// declares one.
///
/// `[Constructor]` and `[Constructor(...)]` yield an unnamed constructor;
/// `[NamedConstructor=Name(...)]` yields a named one. An interface with
/// neither resolves to `None` — absence, not a failure.
pub fn analyze_constructor(
    interface: &IdlInterface,
    registry: &TypeRegistry,
) -> Option<OperationInfo> {
    let (name, idl_args): (Option<String>, Vec<IdlArgument>) =
        if interface.ext_attrs.contains("Constructor") {
            match interface.ext_attrs.function_value("Constructor") {
                Some(func) => (None, func.arguments.clone()),
                // Bare [Constructor] marker: no arguments.
                None => (None, Vec::new()),
            }
        } else {
            let func = interface.ext_attrs.function_value("NamedConstructor")?;
            (func.id.clone(), func.arguments.clone())
        };

    let param_infos = idl_args
        .iter()
        .map(|arg| unify_arguments(&[Some(arg)], interface, registry))
        .collect();

    Some(OperationInfo {
        overloads: None,
        idl_args: Some(idl_args),
        declared_name: name.clone(),
        name: name.clone(),
        js_name: name,
        type_name: interface.id.clone(),
        param_infos,
    })
}

/// Structural check for callback-shaped interfaces.
///
/// An interface is a callback when it carries the `Callback` marker and
/// its operation set is exactly one operation named `handleEvent`; that
/// operation's resolved signature is the callback's signature.
pub fn recognize_callback(
    interface: &IdlInterface,
    registry: &TypeRegistry,
) -> CallbackRecognition {
    if !interface.ext_attrs.contains("Callback") {
        return CallbackRecognition::NotCallback;
    }
    let [handler] = interface.operations.as_slice() else {
        return CallbackRecognition::NotCallback;
    };
    if handler.id != CALLBACK_OPERATION_NAME {
        return CallbackRecognition::NotCallback;
    }
    CallbackRecognition::Callback(analyze_operation(
        interface,
        std::slice::from_ref(handler),
        registry,
    ))
}

/// Unify one argument position across overloads.
///
/// `column` holds the argument each overload declares at this position,
/// `None` where an overload is too short.
fn unify_arguments(
    column: &[Option<&IdlArgument>],
    interface: &IdlInterface,
    registry: &TypeRegistry,
) -> ParamInfo {
    let present: Vec<&IdlArgument> = column.iter().flatten().copied().collect();
    let optional = column
        .iter()
        .any(|arg| arg.is_none_or(|arg| arg.is_optional));

    // Sorted, de-duplicated unions keep the result independent of
    // overload declaration order.
    let names: BTreeSet<&str> = present.iter().map(|arg| arg.id.as_str()).collect();
    let name = names.into_iter().collect::<Vec<_>>().join("_OR_");

    let type_ids: Vec<&str> = present
        .iter()
        .map(|arg| arg.type_id.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let dart_types: Vec<String> = present
        .iter()
        .map(|arg| registry.dart_type(&arg.type_id))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let (type_id, dart_type) = match dart_types.as_slice() {
        [single] => {
            let type_id = match type_ids.as_slice() {
                [only] => Some((*only).to_string()),
                _ => None,
            };
            (type_id, single.clone())
        }
        _ => {
            trace!(
                interface = %interface.id,
                parameter = %name,
                "overload types disagree, widening to {DART_DYNAMIC}"
            );
            (None, DART_DYNAMIC.to_string())
        }
    };

    ParamInfo {
        name,
        type_id,
        dart_type,
        default_value: optional.then(|| DART_NULL.to_string()),
    }
}
