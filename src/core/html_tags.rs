//! Tag and directive tables used to classify template elements.
//!
//! Lookups are case-sensitive, matching how Vue's compiler decides whether a
//! tag is a native element or a component.

/// Elements that never have content or an end tag.
#[inline]
pub fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Native HTML, SVG or MathML element.
#[inline]
pub fn is_native_tag(tag: &str) -> bool {
    is_html_tag(tag) || is_svg_tag(tag) || is_mathml_tag(tag)
}

pub fn is_html_tag(tag: &str) -> bool {
    matches!(
        tag,
        "html"
            | "body"
            | "base"
            | "head"
            | "link"
            | "meta"
            | "style"
            | "title"
            | "address"
            | "article"
            | "aside"
            | "footer"
            | "header"
            | "hgroup"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "nav"
            | "section"
            | "div"
            | "dd"
            | "dl"
            | "dt"
            | "figcaption"
            | "figure"
            | "picture"
            | "hr"
            | "img"
            | "li"
            | "main"
            | "ol"
            | "p"
            | "pre"
            | "ul"
            | "a"
            | "b"
            | "abbr"
            | "bdi"
            | "bdo"
            | "br"
            | "cite"
            | "code"
            | "data"
            | "dfn"
            | "em"
            | "i"
            | "kbd"
            | "mark"
            | "q"
            | "rp"
            | "rt"
            | "ruby"
            | "s"
            | "samp"
            | "small"
            | "span"
            | "strong"
            | "sub"
            | "sup"
            | "time"
            | "u"
            | "var"
            | "wbr"
            | "area"
            | "audio"
            | "map"
            | "track"
            | "video"
            | "embed"
            | "object"
            | "param"
            | "source"
            | "canvas"
            | "script"
            | "noscript"
            | "del"
            | "ins"
            | "caption"
            | "col"
            | "colgroup"
            | "table"
            | "thead"
            | "tbody"
            | "td"
            | "th"
            | "tr"
            | "button"
            | "datalist"
            | "fieldset"
            | "form"
            | "input"
            | "label"
            | "legend"
            | "meter"
            | "optgroup"
            | "option"
            | "output"
            | "progress"
            | "select"
            | "textarea"
            | "details"
            | "dialog"
            | "menu"
            | "summary"
            | "template"
            | "blockquote"
            | "iframe"
            | "tfoot"
    )
}

pub fn is_svg_tag(tag: &str) -> bool {
    matches!(
        tag,
        "svg"
            | "animate"
            | "animateMotion"
            | "animateTransform"
            | "circle"
            | "clipPath"
            | "color-profile"
            | "defs"
            | "desc"
            | "discard"
            | "ellipse"
            | "feBlend"
            | "feColorMatrix"
            | "feComponentTransfer"
            | "feComposite"
            | "feConvolveMatrix"
            | "feDiffuseLighting"
            | "feDisplacementMap"
            | "feDistantLight"
            | "feDropShadow"
            | "feFlood"
            | "feFuncA"
            | "feFuncB"
            | "feFuncG"
            | "feFuncR"
            | "feGaussianBlur"
            | "feImage"
            | "feMerge"
            | "feMergeNode"
            | "feMorphology"
            | "feOffset"
            | "fePointLight"
            | "feSpecularLighting"
            | "feSpotLight"
            | "feTile"
            | "feTurbulence"
            | "filter"
            | "foreignObject"
            | "g"
            | "hatch"
            | "hatchpath"
            | "image"
            | "line"
            | "linearGradient"
            | "marker"
            | "mask"
            | "mesh"
            | "meshgradient"
            | "meshpatch"
            | "meshrow"
            | "metadata"
            | "mpath"
            | "path"
            | "pattern"
            | "polygon"
            | "polyline"
            | "radialGradient"
            | "rect"
            | "set"
            | "solidcolor"
            | "stop"
            | "switch"
            | "symbol"
            | "text"
            | "textPath"
            | "title"
            | "tspan"
            | "unknown"
            | "use"
            | "view"
    )
}

pub fn is_mathml_tag(tag: &str) -> bool {
    matches!(
        tag,
        "annotation"
            | "annotation-xml"
            | "maction"
            | "maligngroup"
            | "malignmark"
            | "math"
            | "menclose"
            | "merror"
            | "mfenced"
            | "mfrac"
            | "mfraction"
            | "mglyph"
            | "mi"
            | "mlabeledtr"
            | "mlongdiv"
            | "mmultiscripts"
            | "mn"
            | "mo"
            | "mover"
            | "mpadded"
            | "mphantom"
            | "mprescripts"
            | "mroot"
            | "mrow"
            | "ms"
            | "mscarries"
            | "mscarry"
            | "msgroup"
            | "msline"
            | "mspace"
            | "msqrt"
            | "msrow"
            | "mstack"
            | "mstyle"
            | "msub"
            | "msubsup"
            | "msup"
            | "mtable"
            | "mtd"
            | "mtext"
            | "mtr"
            | "munder"
            | "munderover"
            | "none"
            | "semantics"
    )
}

/// Components the Vue runtime provides itself.
#[inline]
pub fn is_builtin_component(tag: &str) -> bool {
    matches!(
        tag,
        "Teleport"
            | "teleport"
            | "Suspense"
            | "suspense"
            | "KeepAlive"
            | "keep-alive"
            | "BaseTransition"
            | "base-transition"
            | "Transition"
            | "transition"
            | "TransitionGroup"
            | "transition-group"
    )
}

/// Directives compiled by Vue itself rather than resolved at runtime.
#[inline]
pub fn is_builtin_directive(name: &str) -> bool {
    matches!(
        name,
        "bind"
            | "on"
            | "if"
            | "else"
            | "else-if"
            | "for"
            | "show"
            | "model"
            | "html"
            | "text"
            | "slot"
            | "once"
            | "memo"
            | "cloak"
            | "pre"
            | "is"
    )
}

/// Directives that turn a `<template>` into a fragment wrapper.
#[inline]
pub fn is_structural_directive(name: &str) -> bool {
    matches!(name, "if" | "else" | "else-if" | "for" | "slot")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_tags() {
        assert!(is_native_tag("div"));
        assert!(is_native_tag("button"));
        assert!(is_native_tag("clipPath"));
        assert!(is_native_tag("mrow"));
        assert!(!is_native_tag("b-button"));
        assert!(!is_native_tag("card"));
    }

    #[test]
    fn test_native_tags_are_case_sensitive() {
        assert!(!is_native_tag("Button"));
        assert!(!is_native_tag("DIV"));
        assert!(!is_native_tag("clippath"));
    }

    #[test]
    fn test_builtins() {
        assert!(is_builtin_component("KeepAlive"));
        assert!(is_builtin_component("transition-group"));
        assert!(!is_builtin_component("BTransition"));
        assert!(is_builtin_directive("else-if"));
        assert!(!is_builtin_directive("b-tooltip"));
    }
}
