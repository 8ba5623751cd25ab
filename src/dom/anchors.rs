//! Smooth scrolling for same-page fragment links.

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{
    Document, Element, Event, FocusOptions, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    SvgElement,
};

use super::js_error_message;
use crate::anchors::{FocusKind, focus_kind, fragment_target};
use crate::consts::FRAGMENT_LINK_SELECTOR;

pub struct SmoothAnchor {
    _on_click: Closure<dyn FnMut(Event)>,
}

/// Wire every `a[href^="#"]` currently in the document.
pub fn attach_all(document: &Document) -> Vec<SmoothAnchor> {
    let links = match document.query_selector_all(FRAGMENT_LINK_SELECTOR) {
        Ok(links) => links,
        Err(err) => {
            log::warn!("anchors: lookup failed: {}", js_error_message(&err));
            return Vec::new();
        }
    };

    let mut anchors = Vec::new();
    for index in 0..links.length() {
        let Some(node) = links.item(index) else {
            continue;
        };
        let Ok(link) = node.dyn_into::<Element>() else {
            continue;
        };
        if let Some(anchor) = SmoothAnchor::attach(document, link) {
            anchors.push(anchor);
        }
    }
    anchors
}

impl SmoothAnchor {
    fn attach(document: &Document, link: Element) -> Option<Self> {
        let document = document.clone();
        let source = link.clone();
        let on_click = Closure::wrap(Box::new(move |event: Event| {
            let Some(href) = source.get_attribute("href") else {
                return;
            };
            let Some(target) = fragment_target(&href).and_then(|id| document.get_element_by_id(id)) else {
                return;
            };
            event.prevent_default();
            scroll_and_focus(&target);
        }) as Box<dyn FnMut(Event)>);

        if let Err(err) = link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            log::warn!("anchors: cannot listen: {}", js_error_message(&err));
            return None;
        }
        Some(Self { _on_click: on_click })
    }
}

fn scroll_and_focus(target: &Element) {
    let scroll = ScrollIntoViewOptions::new();
    scroll.set_behavior(ScrollBehavior::Smooth);
    scroll.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&scroll);

    let Some(kind) = focus_kind(target.namespace_uri().as_deref()) else {
        return;
    };
    let focus = FocusOptions::new();
    focus.set_prevent_scroll(true);
    let focused = match kind {
        FocusKind::Html => target.unchecked_ref::<HtmlElement>().focus_with_options(&focus),
        FocusKind::Svg => target.unchecked_ref::<SvgElement>().focus_with_options(&focus),
    };
    if let Err(err) = focused {
        log::debug!("anchors: focus failed: {}", js_error_message(&err));
    }
}
