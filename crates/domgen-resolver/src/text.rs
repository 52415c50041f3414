//! Small text helpers for rendering Dart declarations.

/// The untyped placeholder used where overloads disagree on a type.
pub const DART_DYNAMIC: &str = "Dynamic";

/// The literal standing in for an absent optional argument.
pub const DART_NULL: &str = "null";

/// Declaration fragment for a type in a context where the type may be
/// omitted. The result is empty or carries a trailing space.
///
/// `Dynamic` is elided — `foo(x)` reads better than `foo(Dynamic x)` —
/// but an optional comment keeps the informative IDL type visible, as in
/// `foo(/*T*/ x)`.
pub fn type_or_nothing(dart_type: &str, comment: Option<&str>) -> String {
    if dart_type == DART_DYNAMIC {
        match comment {
            Some(comment) => format!("/*{comment}*/ "),
            None => String::new(),
        }
    } else {
        format!("{dart_type} ")
    }
}

/// Declaration fragment for a type in a context where an omitted type
/// must be spelled `var`, e.g. `var x;` or `var /*T*/ x;`.
pub fn type_or_var(dart_type: &str, comment: Option<&str>) -> String {
    if dart_type == DART_DYNAMIC {
        match comment {
            Some(comment) => format!("var /*{comment}*/"),
            None => "var".to_string(),
        }
    } else {
        dart_type.to_string()
    }
}

/// Re-indent text line by line; blank lines stay blank.
pub fn indent_text(text: &str, indent: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                "\n".to_string()
            } else {
                format!("{indent}{line}\n")
            }
        })
        .collect()
}

/// Render names as a JavaScript array literal, one name per line when
/// there is more than one.
pub fn format_name_list(names: &[&str]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| format!("'{name}'")).collect();
    if quoted.len() <= 1 {
        format!("[{}]", quoted.join(", "))
    } else {
        format!("[\n    {}]", quoted.join(",\n    "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_or_nothing_elides_dynamic() {
        assert_eq!(type_or_nothing("String", None), "String ");
        assert_eq!(type_or_nothing("Dynamic", None), "");
        assert_eq!(type_or_nothing("Dynamic", Some("IDBKey")), "/*IDBKey*/ ");
    }

    #[test]
    fn type_or_var_substitutes_var() {
        assert_eq!(type_or_var("String", None), "String");
        assert_eq!(type_or_var("Dynamic", None), "var");
        assert_eq!(type_or_var("Dynamic", Some("IDBKey")), "var /*IDBKey*/");
    }

    #[test]
    fn indent_preserves_blank_lines() {
        assert_eq!(indent_text("a\n\nb", "  "), "  a\n\n  b\n");
        assert_eq!(indent_text("a\n", "  "), "  a\n\n");
    }

    #[test]
    fn name_lists() {
        assert_eq!(format_name_list(&[]), "[]");
        assert_eq!(format_name_list(&["length"]), "['length']");
        assert_eq!(format_name_list(&["a", "b"]), "[\n    'a',\n    'b']");
    }
}
