//! TypeRegistry — IDL type identifier to descriptor mapping.
//!
//! The registry is populated once, before any resolution happens, and is
//! read-only thereafter; resolution is a pure query. Lookup never fails:
//! unknown identifiers degrade to an identity descriptor and `sequence<T>`
//! identifiers produce a sequence descriptor on the fly. The upstream IDL
//! database is assumed pre-validated, so availability wins over strict
//! checking here.

use rustc_hash::FxHashMap;

use domgen_core::IdlInterface;

use crate::type_info::{
    ObjectTypeInfo, PrimitiveTypeInfo, SequenceTypeInfo, TearOffTypeInfo, TypeInfo,
};

/// Mapping from IDL type identifier to type descriptor.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: FxHashMap<String, TypeInfo>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under its own IDL type identifier.
    pub fn register(&mut self, info: impl Into<TypeInfo>) {
        let info = info.into();
        self.types.insert(info.idl_type().to_string(), info);
    }

    /// Register a descriptor under an explicit key.
    ///
    /// Used where the IDL name and the native class name diverge, e.g.
    /// `DOMException` backed by `DOMCoreException`.
    pub fn register_as(&mut self, key: impl Into<String>, info: impl Into<TypeInfo>) {
        self.types.insert(key.into(), info.into());
    }

    /// Check whether an identifier has an explicit registration.
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Number of explicit registrations.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check whether the registry has no explicit registrations.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Resolve an identifier to a descriptor. Never fails.
    ///
    /// `sequence<X>` identifiers construct a sequence descriptor over the
    /// recursively resolved element; anything unregistered degrades to an
    /// identity object descriptor so not-yet-cataloged types still bind.
    pub fn resolve(&self, type_name: &str) -> TypeInfo {
        if let Some(element) = maybe_sequence_element_type(type_name) {
            return SequenceTypeInfo::new(type_name, self.resolve(element)).into();
        }
        self.types
            .get(type_name)
            .cloned()
            .unwrap_or_else(|| ObjectTypeInfo::new(type_name).into())
    }

    /// The Dart type name for an identifier.
    pub fn dart_type(&self, type_name: &str) -> String {
        self.resolve(type_name).dart_type()
    }

    /// A registry pre-populated with the full DOM type table.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_builtin_primitives();
        registry.register_builtin_objects();
        registry.register_builtin_tear_offs();
        registry
    }

    fn register_builtin_primitives(&mut self) {
        // There is GC3Dboolean which is not a bool, but unsigned char for
        // OpenGL compatibility.
        self.register(
            PrimitiveTypeInfo::new("boolean", "bool")
                .with_native_type("bool")
                .with_static_cast()
                .with_accessors("hasAttribute", "setBooleanAttribute"),
        );
        // Some IDL shorts are mapped to WebCore C++ enums; cast through
        // int rather than providing overloads for every enum.
        self.register(
            PrimitiveTypeInfo::new("short", "int")
                .with_native_type("int")
                .with_static_cast(),
        );
        self.register(
            PrimitiveTypeInfo::new("unsigned short", "int")
                .with_native_type("int")
                .with_static_cast(),
        );
        self.register(PrimitiveTypeInfo::new("int", "int"));
        self.register(PrimitiveTypeInfo::new("unsigned int", "int").with_native_type("unsigned"));
        self.register(
            PrimitiveTypeInfo::new("long", "int")
                .with_native_type("int")
                .with_accessors("getIntegralAttribute", "setIntegralAttribute"),
        );
        self.register(
            PrimitiveTypeInfo::new("unsigned long", "int")
                .with_native_type("unsigned")
                .with_accessors("getUnsignedIntegralAttribute", "setUnsignedIntegralAttribute"),
        );
        self.register(PrimitiveTypeInfo::new("long long", "int"));
        self.register(PrimitiveTypeInfo::new("unsigned long long", "int"));
        self.register(PrimitiveTypeInfo::new("float", "num").with_native_type("double"));
        self.register(PrimitiveTypeInfo::new("double", "num"));

        self.register(PrimitiveTypeInfo::new("any", "Object"));
        self.register(PrimitiveTypeInfo::new("any[]", "List"));
        self.register(PrimitiveTypeInfo::new("Array", "List"));
        self.register(PrimitiveTypeInfo::new("custom", "Dynamic"));
        self.register(PrimitiveTypeInfo::new("Date", "Date").with_native_type("double"));
        self.register(
            PrimitiveTypeInfo::new("DOMObject", "Object").with_native_type("ScriptValue"),
        );
        self.register(PrimitiveTypeInfo::new("DOMString", "String").with_native_type("String"));
        self.register(PrimitiveTypeInfo::new("Flags", "Object"));
        self.register(PrimitiveTypeInfo::new("DOMTimeStamp", "int"));
        self.register(PrimitiveTypeInfo::new("object", "Object").with_native_type("ScriptValue"));
        // Only a limited subset of serializable values is actually
        // permitted here.
        self.register(PrimitiveTypeInfo::new("SerializedScriptValue", "Dynamic").ref_counted());
        self.register(PrimitiveTypeInfo::new("WebKitFlags", "Object"));

        self.register(PrimitiveTypeInfo::new("DOMStringList", "List<String>"));
        self.register(PrimitiveTypeInfo::new("sequence", "List"));
        self.register(PrimitiveTypeInfo::new("void", "void"));
    }

    fn register_builtin_objects(&mut self) {
        self.register(ObjectTypeInfo::new("CSSRule").with_conversion_deps(&["CSSImportRule"]));
        self.register_as(
            "DOMException",
            ObjectTypeInfo::new("DOMCoreException").with_dart_type("DOMException"),
        );
        self.register(ObjectTypeInfo::new("DOMStringMap").with_dart_type("Map<String, String>"));
        self.register(ObjectTypeInfo::new("DOMWindow").with_custom_to_dart());
        self.register(ObjectTypeInfo::new("Element").with_custom_to_dart());
        self.register(ObjectTypeInfo::new("EventListener").without_dart_wrapper());
        self.register(ObjectTypeInfo::new("EventTarget").without_dart_wrapper());
        self.register(ObjectTypeInfo::new("HTMLElement").with_custom_to_dart());
        self.register(
            ObjectTypeInfo::new("IDBAny")
                .with_dart_type("Dynamic")
                .without_dart_wrapper(),
        );
        self.register(
            ObjectTypeInfo::new("IDBKey")
                .with_dart_type("Dynamic")
                .without_dart_wrapper(),
        );
        self.register(ObjectTypeInfo::new("MediaQueryListListener").without_dart_wrapper());
        self.register(ObjectTypeInfo::new("OptionsObject").without_dart_wrapper());
        self.register(ObjectTypeInfo::new("StyleSheet").with_conversion_deps(&["CSSStyleSheet"]));
        self.register(ObjectTypeInfo::new("SVGElement").with_custom_to_dart());
    }

    fn register_builtin_tear_offs(&mut self) {
        self.register(TearOffTypeInfo::new("SVGAngle"));
        self.register(TearOffTypeInfo::new("SVGLength"));
        self.register(TearOffTypeInfo::new("SVGLengthList").without_ref_counting());
        self.register(TearOffTypeInfo::new("SVGMatrix"));
        self.register(TearOffTypeInfo::new("SVGNumber").with_native_type("SVGPropertyTearOff<float>"));
        self.register(TearOffTypeInfo::new("SVGNumberList").without_ref_counting());
        self.register(
            TearOffTypeInfo::new("SVGPathSegList")
                .with_native_type("SVGPathSegListPropertyTearOff")
                .without_ref_counting(),
        );
        self.register(
            TearOffTypeInfo::new("SVGPoint").with_native_type("SVGPropertyTearOff<FloatPoint>"),
        );
        self.register(TearOffTypeInfo::new("SVGPointList").without_ref_counting());
        self.register(TearOffTypeInfo::new("SVGPreserveAspectRatio"));
        self.register(
            TearOffTypeInfo::new("SVGRect").with_native_type("SVGPropertyTearOff<FloatRect>"),
        );
        self.register(
            TearOffTypeInfo::new("SVGStringList")
                .with_native_type("SVGStaticListPropertyTearOff<SVGStringList>")
                .without_ref_counting(),
        );
        self.register(TearOffTypeInfo::new("SVGTransform"));
        self.register(
            TearOffTypeInfo::new("SVGTransformList")
                .with_native_type("SVGTransformListPropertyTearOff")
                .without_ref_counting(),
        );
    }
}

/// Check whether an identifier names a primitive type.
pub fn is_primitive_type(registry: &TypeRegistry, type_name: &str) -> bool {
    matches!(registry.resolve(type_name), TypeInfo::Primitive(_))
}

/// Returns the element type `T` from an identifier of the form
/// `sequence<T>`, where `T` is a bare word or, recursively, another
/// sequence form. Returns `None` for anything else.
pub fn maybe_sequence_element_type(type_name: &str) -> Option<&str> {
    let inner = type_name.strip_prefix("sequence<")?.strip_suffix('>')?;
    if !inner.is_empty() && inner.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some(inner);
    }
    maybe_sequence_element_type(inner).map(|_| inner)
}

/// Returns the List element type for an interface that implements
/// `sequence<T>` through one of its parents, or `None`.
pub fn maybe_list_element_type(interface: &IdlInterface) -> Option<&str> {
    interface
        .parents
        .iter()
        .find_map(|parent| maybe_sequence_element_type(&parent.type_id))
}

/// Returns the typed-array element type for an interface, or `None` if
/// the interface is not a typed array.
pub fn maybe_typed_array_element_type(interface: &IdlInterface) -> Option<&str> {
    // Typed arrays implement ArrayBufferView and sequence<T>.
    for parent in &interface.parents {
        if parent.type_id == "ArrayBufferView" {
            return maybe_list_element_type(interface);
        }
        if parent.type_id == "Uint8Array" {
            return Some("int");
        }
    }
    None
}

/// Check whether a type identifier maps to a Dart List.
pub fn is_dart_list_type(type_name: &str) -> bool {
    type_name == "List" || type_name.starts_with("sequence<")
}

/// Check whether a type identifier maps to a Dart collection.
pub fn is_dart_collection_type(type_name: &str) -> bool {
    is_dart_list_type(type_name)
}
