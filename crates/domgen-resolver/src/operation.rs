//! Resolved operation signatures and their rendering.
//!
//! [`OperationInfo`] is the canonical calling convention derived from a
//! set of same-named overloads (or from a constructor declaration). Its
//! rendering methods partition required parameters from the trailing
//! bracketed optional group; a required parameter appearing after an
//! optional one is a structural violation in the upstream IDL and aborts
//! rendering for that operation.

use domgen_core::{GenerationError, GenerationResult, IdlArgument, IdlOperation};

use crate::text::{DART_DYNAMIC, type_or_nothing};

/// One position of a unified operation signature.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamInfo {
    /// Unified name. Where overloads disagree this is the sorted,
    /// de-duplicated union of the original names joined with `_OR_`, so
    /// regenerated output is stable regardless of overload order.
    pub name: String,
    /// The single IDL type shared by all overloads at this position, or
    /// `None` where they disagree.
    pub type_id: Option<String>,
    /// Resolved Dart type; `Dynamic` where overloads disagree.
    pub dart_type: String,
    /// Default-value expression; `None` for a mandatory parameter.
    pub default_value: Option<String>,
}

impl ParamInfo {
    /// Check whether this position must be supplied by every caller.
    pub fn is_required(&self) -> bool {
        self.default_value.is_none()
    }
}

/// Derived calling convention for a set of overloaded operations.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationInfo {
    /// The source overload set; `None` for constructors.
    pub overloads: Option<Vec<IdlOperation>>,
    /// Constructor source arguments; `None` for regular operations.
    pub idl_args: Option<Vec<IdlArgument>>,
    /// Declared IDL name; `None` for an unnamed constructor.
    pub declared_name: Option<String>,
    /// External (Dart) name after any rename directive; `None` for an
    /// unnamed constructor.
    pub name: Option<String>,
    /// JavaScript-side name.
    pub js_name: Option<String>,
    /// Dart return type (interface name for constructors).
    pub type_name: String,
    /// Unified positional parameters.
    pub param_infos: Vec<ParamInfo>,
}

impl OperationInfo {
    /// Parameter list for the interface declaration: every parameter
    /// typed (or type-elided for `Dynamic`), optional parameters
    /// bracketed at the end.
    pub fn parameters_interface_declaration(&self) -> GenerationResult<String> {
        self.format_params(true, |param| {
            type_or_nothing(&param.dart_type, param.type_id.as_deref())
        })
    }

    /// Parameter list for the implementation declaration: as the
    /// interface form, but optional parameters carry their defaults.
    /// A `Dynamic` parameter with a known IDL type keeps that type as an
    /// explanatory comment.
    pub fn parameters_implementation_declaration(&self) -> GenerationResult<String> {
        self.format_params(false, |param| {
            type_or_nothing(&param.dart_type, param.type_id.as_deref())
        })
    }

    /// Implementation declaration with a type-renaming function applied
    /// to each parameter's Dart type, for contexts needing a narrower
    /// internal representation.
    pub fn parameters_implementation_declaration_renamed<F>(
        &self,
        rename_type: F,
    ) -> GenerationResult<String>
    where
        F: Fn(&str) -> String,
    {
        self.format_params(false, |param| {
            type_or_nothing(&rename_type(&param.dart_type), None)
        })
    }

    /// The unified parameter names, comma-joined, for call forwarding.
    pub fn parameters_as_argument_list(&self) -> String {
        self.param_infos
            .iter()
            .map(|param| param.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Check whether any parameter widened to the untyped placeholder.
    pub fn has_dynamic_parameters(&self) -> bool {
        self.param_infos
            .iter()
            .any(|param| param.dart_type == DART_DYNAMIC)
    }

    fn format_params<F>(&self, is_interface: bool, type_fn: F) -> GenerationResult<String>
    where
        F: Fn(&ParamInfo) -> String,
    {
        let format_param = |param: &ParamInfo| {
            let declared_type = type_fn(param);
            match &param.default_value {
                Some(default) if !is_interface => {
                    format!("{declared_type}{} = {default}", param.name)
                }
                _ => format!("{declared_type}{}", param.name),
            }
        };

        let mut required = Vec::new();
        let mut optional = Vec::new();
        for param in &self.param_infos {
            if param.default_value.is_some() {
                optional.push(param);
            } else {
                if !optional.is_empty() {
                    return Err(GenerationError::OptionalBeforeRequired {
                        operation: self.describe(),
                    });
                }
                required.push(param);
            }
        }

        let mut segments: Vec<String> = required.iter().map(|p| format_param(p)).collect();
        if !optional.is_empty() {
            let bracketed = optional
                .iter()
                .map(|p| format_param(p))
                .collect::<Vec<_>>()
                .join(", ");
            segments.push(format!("[{bracketed}]"));
        }
        Ok(segments.join(", "))
    }

    /// Best available name for diagnostics; unnamed constructors fall
    /// back to the constructed type.
    fn describe(&self) -> String {
        self.name
            .as_deref()
            .or(self.declared_name.as_deref())
            .unwrap_or(&self.type_name)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(name: &str, dart_type: &str) -> ParamInfo {
        ParamInfo {
            name: name.to_string(),
            type_id: None,
            dart_type: dart_type.to_string(),
            default_value: None,
        }
    }

    fn optional(name: &str, dart_type: &str) -> ParamInfo {
        ParamInfo {
            default_value: Some("null".to_string()),
            ..required(name, dart_type)
        }
    }

    fn operation(params: Vec<ParamInfo>) -> OperationInfo {
        OperationInfo {
            overloads: None,
            idl_args: None,
            declared_name: Some("drawImage".to_string()),
            name: Some("drawImage".to_string()),
            js_name: Some("drawImage".to_string()),
            type_name: "void".to_string(),
            param_infos: params,
        }
    }

    #[test]
    fn interface_declaration_brackets_optionals() {
        let info = operation(vec![
            required("image", "ImageElement"),
            required("x", "num"),
            optional("width", "num"),
            optional("height", "num"),
        ]);

        assert_eq!(
            info.parameters_interface_declaration().unwrap(),
            "ImageElement image, num x, [num width, num height]"
        );
    }

    #[test]
    fn implementation_declaration_carries_defaults() {
        let info = operation(vec![required("x", "num"), optional("width", "num")]);

        assert_eq!(
            info.parameters_implementation_declaration().unwrap(),
            "num x, [num width = null]"
        );
    }

    #[test]
    fn dynamic_types_are_elided_or_commented() {
        let mut key = required("key", DART_DYNAMIC);
        key.type_id = Some("IDBKey".to_string());
        let info = operation(vec![key, required("value", DART_DYNAMIC)]);

        assert_eq!(
            info.parameters_interface_declaration().unwrap(),
            "/*IDBKey*/ key, value"
        );
        assert!(info.has_dynamic_parameters());
    }

    #[test]
    fn renamed_declaration_applies_rename_without_comments() {
        let mut key = required("key", DART_DYNAMIC);
        key.type_id = Some("IDBKey".to_string());
        let info = operation(vec![key, required("count", "int")]);

        let rendered = info
            .parameters_implementation_declaration_renamed(|dart_type| {
                if dart_type == "int" {
                    "num".to_string()
                } else {
                    dart_type.to_string()
                }
            })
            .unwrap();
        assert_eq!(rendered, "key, num count");
    }

    #[test]
    fn required_after_optional_is_a_hard_error() {
        let info = operation(vec![optional("width", "num"), required("x", "num")]);

        let err = info.parameters_interface_declaration().unwrap_err();
        assert_eq!(
            err,
            GenerationError::OptionalBeforeRequired {
                operation: "drawImage".to_string()
            }
        );
        assert!(info.parameters_implementation_declaration().is_err());
    }

    #[test]
    fn argument_list_matches_declaration_order() {
        let info = operation(vec![
            required("image", "ImageElement"),
            optional("width", "num"),
        ]);

        assert_eq!(info.parameters_as_argument_list(), "image, width");
    }
}
