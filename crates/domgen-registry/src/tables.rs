//! Fixed lookup tables.
//!
//! These are configuration data, not logic: adding an entry changes
//! generator output without touching any code path. All tables are
//! immutable and process-wide, initialized on first use.

use lazy_static::lazy_static;
use rustc_hash::{FxHashMap, FxHashSet};

lazy_static! {
    /// Interfaces that are capability contracts with no concrete backing
    /// storage. They are rendered without implementation scaffolding.
    static ref PURE_INTERFACES: FxHashSet<&'static str> = [
        "DOMStringList",
        "DOMStringMap",
        "ElementTimeControl",
        "ElementTraversal",
        "MediaQueryListListener",
        "NodeSelector",
        "SVGExternalResourcesRequired",
        "SVGFilterPrimitiveStandardAttributes",
        "SVGFitToViewBox",
        "SVGLangSpace",
        "SVGLocatable",
        "SVGStylable",
        "SVGTests",
        "SVGTransformable",
        "SVGURIReference",
        "SVGViewSpec",
        "SVGZoomAndPan",
        "TimeoutHandler",
    ]
    .into_iter()
    .collect();

    /// Typed-array interfaces whose constructors delegate to a factory
    /// provider in the generated interface library.
    static ref TYPED_ARRAY_FACTORY_PROVIDERS: FxHashMap<&'static str, &'static str> = [
        ("Float32Array", "_TypedArrayFactoryProvider"),
        ("Float64Array", "_TypedArrayFactoryProvider"),
        ("Int8Array", "_TypedArrayFactoryProvider"),
        ("Int16Array", "_TypedArrayFactoryProvider"),
        ("Int32Array", "_TypedArrayFactoryProvider"),
        ("Uint8Array", "_TypedArrayFactoryProvider"),
        ("Uint16Array", "_TypedArrayFactoryProvider"),
        ("Uint32Array", "_TypedArrayFactoryProvider"),
        ("Uint8ClampedArray", "_TypedArrayFactoryProvider"),
    ]
    .into_iter()
    .collect();

    /// Per-type native-spec overrides for the JavaScript-backed binding.
    static ref CUSTOM_NATIVE_SPECS: FxHashMap<&'static str, &'static str> = [
        // Decorate the singleton Console object, if present (workers do
        // not have a console).
        ("Console", "=(typeof console == 'undefined' ? {} : console)"),
        // DOMWindow aliased with global scope.
        ("DOMWindow", "@*DOMWindow"),
    ]
    .into_iter()
    .collect();

    /// Hand-written native bodies for operations whose generated form
    /// would be invalid, keyed by `Interface.operation`.
    static ref CUSTOM_NATIVE_BODIES: FxHashMap<&'static str, &'static str> = [
        // Some JavaScript processors, especially tools like yuicompress
        // and JSCompiler, choke on 'this.continue'.
        (
            "IDBCursor.continueFunction",
            "\n        if (key == null) return this['continue']();\n        return this['continue'](key);\n      ",
        ),
    ]
    .into_iter()
    .collect();
}

/// Headers every SVG tear-off conversion site needs in addition to the
/// type's own header.
pub const SVG_SUPPLEMENTAL_INCLUDES: &[&str] = &[
    "\"SVGAnimatedPropertyTearOff.h\"",
    "\"SVGAnimatedListPropertyTearOff.h\"",
    "\"SVGStaticListPropertyTearOff.h\"",
    "\"SVGAnimatedListPropertyTearOff.h\"",
    "\"SVGTransformListPropertyTearOff.h\"",
    "\"SVGPathSegListPropertyTearOff.h\"",
];

/// Check whether an interface is a pure capability contract.
pub fn is_pure_interface(interface_name: &str) -> bool {
    PURE_INTERFACES.contains(interface_name)
}

/// The factory provider an interface's constructor delegates to, if any.
pub fn interface_factory_provider(interface_name: &str) -> Option<&'static str> {
    TYPED_ARRAY_FACTORY_PROVIDERS.get(interface_name).copied()
}

/// Hand-written native body for `Interface.operation`, if one exists.
pub fn native_body_override(qualified_name: &str) -> Option<&'static str> {
    CUSTOM_NATIVE_BODIES.get(qualified_name).copied()
}

/// Build the native spec for a JavaScript binding name.
///
/// Types without a custom spec are marked hidden (`*Name`) so the class
/// is dynamically patched at runtime; this keeps browser compatibility
/// and lets code linking the binding load in a worker isolate.
pub fn make_native_spec(javascript_binding_name: &str) -> String {
    match CUSTOM_NATIVE_SPECS.get(javascript_binding_name) {
        Some(spec) => (*spec).to_string(),
        None => format!("*{javascript_binding_name}"),
    }
}
