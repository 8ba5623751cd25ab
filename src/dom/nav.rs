//! Mobile navigation toggle synthesized into `.site-header .nav`.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event};

use super::{js_error_message, query, set_attr, set_class};
use crate::consts::{HEADER_SELECTOR, MENU_ICON_SVG, MENU_TOGGLE_CLASS, NAV_OPEN_CLASS, NAV_SELECTOR};
use crate::nav::{NavAria, NavDisclosure};

fn apply_aria(button: &Element, aria: NavAria) {
    set_attr(button, "aria-expanded", aria.expanded);
    set_attr(button, "aria-label", aria.label);
}

pub struct MobileNav {
    _on_toggle: Closure<dyn FnMut()>,
    _on_header_click: Closure<dyn FnMut(Event)>,
}

impl MobileNav {
    /// Insert the menu button and wire its listeners. Skipped unless the page
    /// has a header containing a nav.
    pub fn attach(document: &Document) -> Option<Self> {
        let Some(header) = query(document, HEADER_SELECTOR) else {
            log::debug!("nav: no {HEADER_SELECTOR}");
            return None;
        };
        let nav = match header.query_selector(NAV_SELECTOR) {
            Ok(Some(nav)) => nav,
            Ok(None) => {
                log::debug!("nav: header has no {NAV_SELECTOR}");
                return None;
            }
            Err(err) => {
                log::warn!("nav: lookup failed: {}", js_error_message(&err));
                return None;
            }
        };

        let button = match document.create_element("button") {
            Ok(button) => button,
            Err(err) => {
                log::warn!("nav: cannot create toggle: {}", js_error_message(&err));
                return None;
            }
        };
        button.set_class_name(MENU_TOGGLE_CLASS);
        button.set_inner_html(MENU_ICON_SVG);
        let state = Rc::new(Cell::new(NavDisclosure::default()));
        apply_aria(&button, state.get().aria());

        // Goes after the brand (first child), ahead of the links.
        let reference = nav.first_element_child().and_then(|first| first.next_element_sibling());
        if let Err(err) = nav.insert_before(&button, reference.as_deref()) {
            log::warn!("nav: cannot insert toggle: {}", js_error_message(&err));
            return None;
        }

        let on_toggle = {
            let state = Rc::clone(&state);
            let header = header.clone();
            let button = button.clone();
            Closure::wrap(Box::new(move || {
                let mut disclosure = state.get();
                let aria = disclosure.toggle();
                state.set(disclosure);
                set_class(&header, NAV_OPEN_CLASS, disclosure.is_open());
                apply_aria(&button, aria);
            }) as Box<dyn FnMut()>)
        };

        let on_header_click = {
            let header = header.clone();
            let button = button.clone();
            Closure::wrap(Box::new(move |event: Event| {
                if !clicked_link(&event) {
                    return;
                }
                let mut disclosure = state.get();
                if let Some(aria) = disclosure.close() {
                    state.set(disclosure);
                    set_class(&header, NAV_OPEN_CLASS, false);
                    apply_aria(&button, aria);
                }
            }) as Box<dyn FnMut(Event)>)
        };

        let listened = button
            .add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())
            .and_then(|()| header.add_event_listener_with_callback("click", on_header_click.as_ref().unchecked_ref()));
        if let Err(err) = listened {
            log::warn!("nav: cannot listen: {}", js_error_message(&err));
            return None;
        }

        Some(Self { _on_toggle: on_toggle, _on_header_click: on_header_click })
    }
}

/// Whether the click landed on (or inside) an `<a>`.
fn clicked_link(event: &Event) -> bool {
    let Some(target) = event.target() else {
        return false;
    };
    let Ok(target) = target.dyn_into::<Element>() else {
        return false;
    };
    matches!(target.closest("a"), Ok(Some(_)))
}
