//! Same-page fragment link resolution for smooth scrolling.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

/// Target element id named by a same-page link, e.g. `"#resume"` → `"resume"`.
///
/// Returns `None` for links that are not fragments or name no id (`"#"`);
/// those keep the browser's default behavior.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Element families that can take keyboard focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusKind {
    Html,
    Svg,
}

/// Focus family of an element from its namespace URI. Other namespaces
/// (MathML, unknown) cannot be focused.
#[must_use]
pub fn focus_kind(namespace: Option<&str>) -> Option<FocusKind> {
    match namespace {
        Some(HTML_NAMESPACE) => Some(FocusKind::Html),
        Some(SVG_NAMESPACE) => Some(FocusKind::Svg),
        _ => None,
    }
}
