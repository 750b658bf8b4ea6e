//! Text transforms applied to rendered SVG markup
//!
//! The renderer output is treated as opaque text. These helpers only locate
//! the opening tag of the root `<svg>` element and splice text around it;
//! nothing here parses or validates the rest of the document.

use crate::asset::AssetMetadata;

const ROOT_TAG: &str = "<svg";

/// Byte offset of the root `<svg` opening tag, if any
///
/// Matches `<svg` only when followed by whitespace, `>` or `/`, so that
/// elements such as `<svgfoo>` are not mistaken for the root.
pub fn find_root(markup: &str) -> Option<usize> {
    markup.match_indices(ROOT_TAG).map(|(idx, _)| idx).find(|&idx| {
        match markup[idx + ROOT_TAG.len()..].chars().next() {
            Some(c) => c.is_whitespace() || c == '>' || c == '/',
            None => false,
        }
    })
}

/// Insert an `opacity` attribute into the root element
///
/// The attribute lands directly after the tag name, ahead of every
/// attribute already present. Returns `None` if there is no root element.
pub fn inject_opacity(markup: &str, opacity: f64) -> Option<String> {
    let at = find_root(markup)? + ROOT_TAG.len();

    let mut out = String::with_capacity(markup.len() + 20);
    out.push_str(&markup[..at]);
    out.push_str(&format!(" opacity=\"{}\"", opacity));
    out.push_str(&markup[at..]);
    Some(out)
}

/// Build the metadata comment block for an asset
pub fn metadata_header(tag: &str, meta: &AssetMetadata<'_>) -> String {
    format!(
        "<!-- {tag} generated symbol\n\
         \x20    unit_id: {}\n\
         \x20    label: {}\n\
         \x20    query: {}\n\
         \x20    affiliation: {}\n\
         \x20    confidence: {}\n\
         \x20    weight: {}\n\
         \x20    category: {}\n\
         -->\n",
        meta.unit_id,
        meta.label,
        meta.query,
        meta.affiliation,
        meta.confidence,
        meta.weight,
        meta.category,
    )
}

/// Place a header immediately before the root element
///
/// Anything ahead of the root (an XML prolog, a doctype) stays in front so
/// the document remains well-formed. Without a root the header is prepended.
pub fn attach_header(markup: &str, header: &str) -> String {
    let at = find_root(markup).unwrap_or(0);

    let mut out = String::with_capacity(markup.len() + header.len());
    out.push_str(&markup[..at]);
    out.push_str(header);
    out.push_str(&markup[at..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Affiliation, Confidence, WeightClass, UnitCategory};

    fn meta() -> AssetMetadata<'static> {
        AssetMetadata {
            unit_id: "inf_rifle",
            label: "Rifle infantry",
            query: "friendly infantry",
            affiliation: Affiliation::Friendly,
            confidence: Confidence::Confirmed,
            weight: WeightClass::Light,
            category: UnitCategory::Infantry,
        }
    }

    #[test]
    fn test_find_root_skips_lookalikes() {
        let markup = "<svgx/><svg width=\"1\"/>";
        assert_eq!(find_root(markup), Some(7));
        assert_eq!(find_root("<g></g>"), None);
        assert_eq!(find_root("<svg"), None);
    }

    #[test]
    fn test_inject_opacity_before_attributes() {
        let out = inject_opacity(r#"<svg width="60" height="60"><g/></svg>"#, 0.55).unwrap();
        assert_eq!(out, r#"<svg opacity="0.55" width="60" height="60"><g/></svg>"#);
    }

    #[test]
    fn test_inject_opacity_bare_root() {
        let out = inject_opacity("<svg><g/></svg>", 0.55).unwrap();
        assert_eq!(out, r#"<svg opacity="0.55"><g/></svg>"#);
    }

    #[test]
    fn test_inject_opacity_only_root() {
        let nested = r#"<svg a="1"><svg b="2"/></svg>"#;
        let out = inject_opacity(nested, 0.55).unwrap();
        assert_eq!(out.matches("opacity").count(), 1);
        assert!(out.contains(r#"<svg b="2"/>"#));
    }

    #[test]
    fn test_inject_opacity_without_root() {
        assert!(inject_opacity("no markup here", 0.55).is_none());
    }

    #[test]
    fn test_header_fields() {
        let header = metadata_header("milsym", &meta());
        assert!(header.starts_with("<!-- milsym generated symbol\n"));
        assert!(header.contains("     unit_id: inf_rifle\n"));
        assert!(header.contains("     label: Rifle infantry\n"));
        assert!(header.contains("     query: friendly infantry\n"));
        assert!(header.contains("     affiliation: friendly\n"));
        assert!(header.contains("     confidence: conf\n"));
        assert!(header.contains("     weight: light\n"));
        assert!(header.contains("     category: infantry\n"));
        assert!(header.ends_with("-->\n"));
    }

    #[test]
    fn test_attach_header_after_prolog() {
        let markup = "<?xml version=\"1.0\"?>\n<svg width=\"1\"/>";
        let out = attach_header(markup, "<!-- h -->\n");
        assert_eq!(out, "<?xml version=\"1.0\"?>\n<!-- h -->\n<svg width=\"1\"/>");
    }

    #[test]
    fn test_attach_header_plain() {
        let out = attach_header("<svg/>", "<!-- h -->\n");
        assert_eq!(out, "<!-- h -->\n<svg/>");
    }
}
