//! Type descriptors.
//!
//! Every IDL type resolves to a [`TypeInfo`] describing how values of the
//! type cross the binding boundary: the Dart-side name, the native
//! (WebCore) representation, ownership hints, and the conversion
//! expression from a native value to a Dart value.
//!
//! `TypeInfo` is a single enum wrapping the descriptor kinds for unified
//! storage and dispatch. Most behavior is shared; primitives, sequences
//! and SVG tear-offs override the pieces that differ.

use domgen_core::ExtendedAttributes;

use crate::tables::SVG_SUPPLEMENTAL_INCLUDES;

/// Typed-array types whose headers live under `wtf/`.
const WTF_TYPED_ARRAY_TYPES: &[&str] = &[
    "ArrayBuffer",
    "ArrayBufferView",
    "Float32Array",
    "Float64Array",
    "Int8Array",
    "Int16Array",
    "Int32Array",
    "Uint8Array",
    "Uint16Array",
    "Uint32Array",
    "Uint8ClampedArray",
];

/// SVG tear-off types whose wrapped property is a plain value rather than
/// a ref-counted object.
const SVG_PRIMITIVE_VALUE_TYPES: &[&str] = &[
    "SVGAngle",
    "SVGLength",
    "SVGMatrix",
    "SVGNumber",
    "SVGPoint",
    "SVGRect",
    "SVGTransform",
];

/// Unified type descriptor for registry storage.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeInfo {
    /// Opaque object type backed by a native class (the default kind).
    Object(ObjectTypeInfo),
    /// Scalar/native type (booleans, integers, strings, void, `any`).
    Primitive(PrimitiveTypeInfo),
    /// `sequence<T>` list type over an element descriptor.
    Sequence(SequenceTypeInfo),
    /// SVG tear-off wrapper: a live view over mutable underlying state.
    TearOff(TearOffTypeInfo),
}

impl TypeInfo {
    /// The IDL type identifier.
    pub fn idl_type(&self) -> &str {
        match self {
            TypeInfo::Object(e) => &e.idl_type,
            TypeInfo::Primitive(e) => &e.idl_type,
            TypeInfo::Sequence(e) => &e.idl_type,
            TypeInfo::TearOff(e) => &e.idl_type,
        }
    }

    /// The Dart-side type name used in generated signatures.
    pub fn dart_type(&self) -> String {
        match self {
            TypeInfo::Object(e) => e.dart_type.clone().unwrap_or_else(|| e.idl_type.clone()),
            TypeInfo::Primitive(e) => e.dart_type.clone(),
            TypeInfo::Sequence(e) => format!("List<{}>", e.element.dart_type()),
            TypeInfo::TearOff(e) => e.idl_type.clone(),
        }
    }

    /// The native (WebCore) type name.
    pub fn native_type(&self) -> String {
        match self {
            TypeInfo::Object(e) => e.native_type.clone().unwrap_or_else(|| e.idl_type.clone()),
            TypeInfo::Primitive(e) => e.native_type.clone().unwrap_or_else(|| e.idl_type.clone()),
            TypeInfo::Sequence(e) => e.idl_type.clone(),
            TypeInfo::TearOff(e) => e.native_type(),
        }
    }

    /// Whether the native representation needs shared-ownership handling.
    pub fn is_ref_counted(&self) -> bool {
        match self {
            TypeInfo::Object(e) => e.ref_counted,
            TypeInfo::Primitive(e) => e.ref_counted,
            TypeInfo::Sequence(_) => true,
            TypeInfo::TearOff(e) => e.ref_counted,
        }
    }

    /// Whether a generated `DartX` wrapper class exists for this type.
    ///
    /// False for EventListener/EventTarget-style duck types that never
    /// materialize a wrapper.
    pub fn has_dart_wrapper(&self) -> bool {
        match self {
            TypeInfo::Object(e) => e.has_dart_wrapper,
            _ => true,
        }
    }

    /// Whether the renderer must supply a hand-written conversion instead
    /// of the generated one.
    pub fn custom_to_dart(&self) -> bool {
        match self {
            TypeInfo::Object(e) => e.custom_to_dart,
            _ => false,
        }
    }

    /// Type identifiers whose conversion support must be available
    /// wherever this type's conversion is emitted.
    pub fn conversion_deps(&self) -> Vec<&str> {
        match self {
            TypeInfo::Object(e) => e.conversion_deps.iter().map(String::as_str).collect(),
            TypeInfo::Primitive(_) => Vec::new(),
            TypeInfo::Sequence(e) => e.element.conversion_deps(),
            TypeInfo::TearOff(e) => vec![e.idl_type.as_str()],
        }
    }

    /// Conversion-support headers (`"DartX.h"`) for this type.
    pub fn conversion_includes(&self) -> Vec<String> {
        self.conversion_deps()
            .into_iter()
            .map(|dep| format!("\"Dart{dep}.h\""))
            .collect()
    }

    /// How a value of this type appears in a generated function parameter.
    pub fn parameter_type(&self) -> String {
        match self {
            TypeInfo::Primitive(_) => {
                let native = self.native_type();
                if native == "String" {
                    "const String&".to_string()
                } else {
                    native
                }
            }
            _ => format!("{}*", self.native_type()),
        }
    }

    /// The adapter type a generated parameter is unpacked through, and
    /// the header declaring it (none for primitives).
    pub fn parameter_adapter_info(&self) -> (String, Option<String>) {
        let mut native = self.native_type();
        if self.is_ref_counted() {
            native = format!("RefPtr< {native} >");
        }
        match self {
            TypeInfo::Primitive(_) => (format!("ParameterAdapter< {native} >"), None),
            _ => {
                if self.has_dart_wrapper() {
                    let wrapper = format!("Dart{}", self.idl_type());
                    (
                        format!("ParameterAdapter<{native}, {wrapper}>"),
                        Some(format!("\"{wrapper}.h\"")),
                    )
                } else {
                    (
                        format!("ParameterAdapter< {native} >"),
                        Some(format!("\"{}.h\"", self.idl_type())),
                    )
                }
            }
        }
    }

    /// Native headers declaring this type.
    pub fn webcore_includes(&self) -> Vec<String> {
        let idl_type = self.idl_type();

        if WTF_TYPED_ARRAY_TYPES.contains(&idl_type) {
            return vec![format!("<wtf/{idl_type}.h>")];
        }
        if !idl_type.starts_with("SVG") {
            return vec![format!("\"{idl_type}.h\"")];
        }

        if idl_type == "SVGNumber" || idl_type == "SVGPoint" {
            return Vec::new();
        }
        // SVGPathSeg subtypes share the header of their base segment kind.
        let include = if idl_type.starts_with("SVGPathSeg") {
            idl_type.replace("Abs", "").replace("Rel", "")
        } else {
            idl_type.to_string()
        };
        std::iter::once(format!("\"{include}.h\""))
            .chain(SVG_SUPPLEMENTAL_INCLUDES.iter().map(|s| (*s).to_string()))
            .collect()
    }

    /// Receiver dereference expression used before property access.
    pub fn receiver(&self) -> &'static str {
        match self {
            TypeInfo::TearOff(e) => {
                if e.idl_type.ends_with("List") {
                    "receiver->"
                } else {
                    "receiver->propertyReference()."
                }
            }
            _ => "receiver->",
        }
    }

    /// Build the expression converting a native `value` to a Dart value.
    ///
    /// `interface_name` is the interface owning the converted attribute or
    /// return value; `attributes` is that declaration's metadata.
    pub fn to_dart_conversion(
        &self,
        value: &str,
        interface_name: &str,
        attributes: &ExtendedAttributes,
    ) -> String {
        match self {
            TypeInfo::Primitive(e) => {
                let mut converted = value.to_string();
                if e.needs_static_cast {
                    converted = format!("static_cast<{}>({converted})", self.native_type());
                }
                let mut conversion_arguments = vec![converted];
                if attributes.contains("TreatReturnedNullStringAs") {
                    conversion_arguments.push("ConvertDefaultToNull".to_string());
                }
                format!("toDartValue({})", conversion_arguments.join(", "))
            }
            TypeInfo::TearOff(e) => {
                let native = e.native_type();
                let cast = if interface_name.starts_with("SVGAnimated") {
                    format!("static_cast<{native}*>({value})")
                } else if e.idl_type == "SVGStringList" {
                    format!("{native}::create(receiver, {value})")
                } else if interface_name.ends_with("List") {
                    format!("static_cast<{native}*>({value}.get())")
                } else if SVG_PRIMITIVE_VALUE_TYPES.contains(&e.idl_type.as_str()) {
                    format!("{native}::create({value})")
                } else {
                    format!("static_cast<{native}*>({value})")
                };
                format!("toDartValue({cast})")
            }
            _ => format!("toDartValue({value})"),
        }
    }
}

impl From<ObjectTypeInfo> for TypeInfo {
    fn from(entry: ObjectTypeInfo) -> Self {
        TypeInfo::Object(entry)
    }
}

impl From<PrimitiveTypeInfo> for TypeInfo {
    fn from(entry: PrimitiveTypeInfo) -> Self {
        TypeInfo::Primitive(entry)
    }
}

impl From<SequenceTypeInfo> for TypeInfo {
    fn from(entry: SequenceTypeInfo) -> Self {
        TypeInfo::Sequence(entry)
    }
}

impl From<TearOffTypeInfo> for TypeInfo {
    fn from(entry: TearOffTypeInfo) -> Self {
        TypeInfo::TearOff(entry)
    }
}

/// Descriptor for an opaque object type backed by a native class.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTypeInfo {
    idl_type: String,
    dart_type: Option<String>,
    native_type: Option<String>,
    ref_counted: bool,
    has_dart_wrapper: bool,
    custom_to_dart: bool,
    /// Dependency ids; always ends with the type's own id.
    conversion_deps: Vec<String>,
}

impl ObjectTypeInfo {
    pub fn new(idl_type: impl Into<String>) -> Self {
        let idl_type = idl_type.into();
        let conversion_deps = vec![idl_type.clone()];
        Self {
            idl_type,
            dart_type: None,
            native_type: None,
            ref_counted: true,
            has_dart_wrapper: true,
            custom_to_dart: false,
            conversion_deps,
        }
    }

    pub fn with_dart_type(mut self, dart_type: impl Into<String>) -> Self {
        self.dart_type = Some(dart_type.into());
        self
    }

    pub fn with_native_type(mut self, native_type: impl Into<String>) -> Self {
        self.native_type = Some(native_type.into());
        self
    }

    /// Mark the type as needing a hand-written conversion.
    pub fn with_custom_to_dart(mut self) -> Self {
        self.custom_to_dart = true;
        self
    }

    /// Mark the type as having no generated Dart wrapper class.
    pub fn without_dart_wrapper(mut self) -> Self {
        self.has_dart_wrapper = false;
        self
    }

    /// Add extra conversion dependencies ahead of the type's own id.
    pub fn with_conversion_deps(mut self, deps: &[&str]) -> Self {
        let mut all: Vec<String> = deps.iter().map(|d| (*d).to_string()).collect();
        all.push(self.idl_type.clone());
        self.conversion_deps = all;
        self
    }
}

/// Descriptor for a scalar/native type.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveTypeInfo {
    idl_type: String,
    dart_type: String,
    native_type: Option<String>,
    ref_counted: bool,
    needs_static_cast: bool,
    getter_name: String,
    setter_name: String,
}

impl PrimitiveTypeInfo {
    pub fn new(idl_type: impl Into<String>, dart_type: impl Into<String>) -> Self {
        Self {
            idl_type: idl_type.into(),
            dart_type: dart_type.into(),
            native_type: None,
            ref_counted: false,
            needs_static_cast: false,
            getter_name: "getAttribute".to_string(),
            setter_name: "setAttribute".to_string(),
        }
    }

    pub fn with_native_type(mut self, native_type: impl Into<String>) -> Self {
        self.native_type = Some(native_type.into());
        self
    }

    /// Mark the native representation as ref-counted (rare for scalars).
    pub fn ref_counted(mut self) -> Self {
        self.ref_counted = true;
        self
    }

    /// Conversions must cast explicitly, e.g. where IDL integers map to
    /// native enums.
    pub fn with_static_cast(mut self) -> Self {
        self.needs_static_cast = true;
        self
    }

    /// Override the accessor methods used on the generic attribute store.
    pub fn with_accessors(mut self, getter: impl Into<String>, setter: impl Into<String>) -> Self {
        self.getter_name = getter.into();
        self.setter_name = setter.into();
        self
    }

    /// Accessor method reading this type off the generic attribute store.
    pub fn webcore_getter_name(&self) -> &str {
        &self.getter_name
    }

    /// Accessor method writing this type to the generic attribute store.
    pub fn webcore_setter_name(&self) -> &str {
        &self.setter_name
    }
}

/// Descriptor for a `sequence<T>` type, built on demand during lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceTypeInfo {
    idl_type: String,
    element: Box<TypeInfo>,
}

impl SequenceTypeInfo {
    pub fn new(idl_type: impl Into<String>, element: TypeInfo) -> Self {
        Self {
            idl_type: idl_type.into(),
            element: Box::new(element),
        }
    }

    /// Descriptor of the element type.
    pub fn element(&self) -> &TypeInfo {
        &self.element
    }
}

/// Descriptor for an SVG tear-off wrapper type.
///
/// Tear-offs are live views over a property's underlying native state
/// rather than owned value copies, so both their native representation
/// and their conversion expressions differ from plain object types.
#[derive(Debug, Clone, PartialEq)]
pub struct TearOffTypeInfo {
    idl_type: String,
    native_type: Option<String>,
    ref_counted: bool,
}

impl TearOffTypeInfo {
    pub fn new(idl_type: impl Into<String>) -> Self {
        Self {
            idl_type: idl_type.into(),
            native_type: None,
            ref_counted: true,
        }
    }

    pub fn with_native_type(mut self, native_type: impl Into<String>) -> Self {
        self.native_type = Some(native_type.into());
        self
    }

    pub fn without_ref_counting(mut self) -> Self {
        self.ref_counted = false;
        self
    }

    fn native_type(&self) -> String {
        if let Some(native) = &self.native_type {
            return native.clone();
        }
        let tear_off_type = if self.idl_type.ends_with("List") {
            "SVGListPropertyTearOff"
        } else {
            "SVGPropertyTearOff"
        };
        format!("{tear_off_type}<{}>", self.idl_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_attrs() -> ExtendedAttributes {
        ExtendedAttributes::new()
    }

    #[test]
    fn object_defaults_to_identity_names() {
        let info: TypeInfo = ObjectTypeInfo::new("Node").into();

        assert_eq!(info.idl_type(), "Node");
        assert_eq!(info.dart_type(), "Node");
        assert_eq!(info.native_type(), "Node");
        assert!(info.is_ref_counted());
        assert!(info.has_dart_wrapper());
        assert!(!info.custom_to_dart());
    }

    #[test]
    fn object_conversion_wraps_value() {
        let info: TypeInfo = ObjectTypeInfo::new("Node").into();
        assert_eq!(
            info.to_dart_conversion("result", "Document", &no_attrs()),
            "toDartValue(result)"
        );
    }

    #[test]
    fn object_conversion_includes_carry_extra_deps() {
        let info: TypeInfo = ObjectTypeInfo::new("CSSRule")
            .with_conversion_deps(&["CSSImportRule"])
            .into();
        assert_eq!(
            info.conversion_includes(),
            vec!["\"DartCSSImportRule.h\"", "\"DartCSSRule.h\""]
        );
    }

    #[test]
    fn parameter_shapes() {
        let object: TypeInfo = ObjectTypeInfo::new("Element").into();
        assert_eq!(object.parameter_type(), "Element*");

        let string: TypeInfo = PrimitiveTypeInfo::new("DOMString", "String")
            .with_native_type("String")
            .into();
        assert_eq!(string.parameter_type(), "const String&");

        let int: TypeInfo = PrimitiveTypeInfo::new("int", "int").into();
        assert_eq!(int.parameter_type(), "int");
    }

    #[test]
    fn parameter_adapter_wraps_ref_counted_types() {
        let object: TypeInfo = ObjectTypeInfo::new("Node").into();
        let (adapter, include) = object.parameter_adapter_info();
        assert_eq!(adapter, "ParameterAdapter<RefPtr< Node >, DartNode>");
        assert_eq!(include.as_deref(), Some("\"DartNode.h\""));

        let duck: TypeInfo = ObjectTypeInfo::new("EventListener")
            .without_dart_wrapper()
            .into();
        let (adapter, include) = duck.parameter_adapter_info();
        assert_eq!(adapter, "ParameterAdapter< RefPtr< EventListener > >");
        assert_eq!(include.as_deref(), Some("\"EventListener.h\""));

        let int: TypeInfo = PrimitiveTypeInfo::new("int", "int").into();
        let (adapter, include) = int.parameter_adapter_info();
        assert_eq!(adapter, "ParameterAdapter< int >");
        assert!(include.is_none());
    }

    #[test]
    fn primitive_conversion_casts_and_flags() {
        let boolean: TypeInfo = PrimitiveTypeInfo::new("boolean", "bool")
            .with_native_type("bool")
            .with_static_cast()
            .into();
        assert_eq!(
            boolean.to_dart_conversion("value", "Element", &no_attrs()),
            "toDartValue(static_cast<bool>(value))"
        );

        let string: TypeInfo = PrimitiveTypeInfo::new("DOMString", "String")
            .with_native_type("String")
            .into();
        let attrs = ExtendedAttributes::new().with_value("TreatReturnedNullStringAs", "Null");
        assert_eq!(
            string.to_dart_conversion("value", "Element", &attrs),
            "toDartValue(value, ConvertDefaultToNull)"
        );
    }

    #[test]
    fn primitive_reports_no_conversion_includes() {
        let int: TypeInfo = PrimitiveTypeInfo::new("int", "int").into();
        assert!(int.conversion_includes().is_empty());
    }

    #[test]
    fn primitive_accessor_names() {
        let boolean = PrimitiveTypeInfo::new("boolean", "bool")
            .with_accessors("hasAttribute", "setBooleanAttribute");
        assert_eq!(boolean.webcore_getter_name(), "hasAttribute");
        assert_eq!(boolean.webcore_setter_name(), "setBooleanAttribute");

        let plain = PrimitiveTypeInfo::new("int", "int");
        assert_eq!(plain.webcore_getter_name(), "getAttribute");
        assert_eq!(plain.webcore_setter_name(), "setAttribute");
    }

    #[test]
    fn sequence_dart_type_parametrizes_element() {
        let element: TypeInfo = PrimitiveTypeInfo::new("int", "int").into();
        let info: TypeInfo = SequenceTypeInfo::new("sequence<int>", element).into();

        assert_eq!(info.dart_type(), "List<int>");
        assert_eq!(info.native_type(), "sequence<int>");
        assert!(info.conversion_includes().is_empty());
    }

    #[test]
    fn tear_off_native_type_keys_on_list_suffix() {
        let scalar: TypeInfo = TearOffTypeInfo::new("SVGAngle").into();
        assert_eq!(scalar.native_type(), "SVGPropertyTearOff<SVGAngle>");
        assert_eq!(scalar.receiver(), "receiver->propertyReference().");

        let list: TypeInfo = TearOffTypeInfo::new("SVGLengthList")
            .without_ref_counting()
            .into();
        assert_eq!(list.native_type(), "SVGListPropertyTearOff<SVGLengthList>");
        assert_eq!(list.receiver(), "receiver->");

        let overridden: TypeInfo = TearOffTypeInfo::new("SVGNumber")
            .with_native_type("SVGPropertyTearOff<float>")
            .into();
        assert_eq!(overridden.native_type(), "SVGPropertyTearOff<float>");
    }

    #[test]
    fn tear_off_conversion_categories() {
        let attrs = no_attrs();

        // Animated-property owner takes priority over the value kind.
        let angle: TypeInfo = TearOffTypeInfo::new("SVGAngle").into();
        assert_eq!(
            angle.to_dart_conversion("value", "SVGAnimatedAngle", &attrs),
            "toDartValue(static_cast<SVGPropertyTearOff<SVGAngle>*>(value))"
        );

        // String lists are created off the receiver.
        let strings: TypeInfo = TearOffTypeInfo::new("SVGStringList")
            .with_native_type("SVGStaticListPropertyTearOff<SVGStringList>")
            .without_ref_counting()
            .into();
        assert_eq!(
            strings.to_dart_conversion("value", "SVGTests", &attrs),
            "toDartValue(SVGStaticListPropertyTearOff<SVGStringList>::create(receiver, value))"
        );

        // List owners unwrap the RefPtr before casting.
        let transform: TypeInfo = TearOffTypeInfo::new("SVGTransform").into();
        assert_eq!(
            transform.to_dart_conversion("value", "SVGTransformList", &attrs),
            "toDartValue(static_cast<SVGPropertyTearOff<SVGTransform>*>(value.get()))"
        );

        // Primitive value tear-offs are created fresh.
        assert_eq!(
            transform.to_dart_conversion("value", "SVGSVGElement", &attrs),
            "toDartValue(SVGPropertyTearOff<SVGTransform>::create(value))"
        );

        // Everything else is a plain cast.
        let path_seg_list: TypeInfo = TearOffTypeInfo::new("SVGPathSegList")
            .with_native_type("SVGPathSegListPropertyTearOff")
            .without_ref_counting()
            .into();
        assert_eq!(
            path_seg_list.to_dart_conversion("value", "SVGPathElement", &attrs),
            "toDartValue(static_cast<SVGPathSegListPropertyTearOff*>(value))"
        );
    }

    #[test]
    fn webcore_includes_for_plain_and_wtf_types() {
        let node: TypeInfo = ObjectTypeInfo::new("Node").into();
        assert_eq!(node.webcore_includes(), vec!["\"Node.h\""]);

        let buffer: TypeInfo = ObjectTypeInfo::new("ArrayBuffer").into();
        assert_eq!(buffer.webcore_includes(), vec!["<wtf/ArrayBuffer.h>"]);
    }

    #[test]
    fn webcore_includes_for_svg_types() {
        let number: TypeInfo = TearOffTypeInfo::new("SVGNumber").into();
        assert!(number.webcore_includes().is_empty());

        let seg: TypeInfo = ObjectTypeInfo::new("SVGPathSegArcAbs").into();
        let includes = seg.webcore_includes();
        assert_eq!(includes[0], "\"SVGPathSegArc.h\"");
        assert!(includes.contains(&"\"SVGAnimatedPropertyTearOff.h\"".to_string()));

        let element: TypeInfo = ObjectTypeInfo::new("SVGElement").into();
        let includes = element.webcore_includes();
        assert_eq!(includes[0], "\"SVGElement.h\"");
        assert_eq!(includes.len(), 1 + SVG_SUPPLEMENTAL_INCLUDES.len());
    }
}
