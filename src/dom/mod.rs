//! Browser wiring: connects the core controllers to the live document.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs as the WASM start function. Every feature except the theme is optional
//! and is skipped when its DOM target is missing. Closures and observers are
//! kept in a page-lifetime holder so the browser can keep calling them.

pub mod anchors;
pub mod nav;
pub mod print;
pub mod reveal;
pub mod storage;
pub mod theme;

use std::cell::RefCell;

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, Window};

use crate::config::{ConfigError, SiteConfig};
use crate::consts::CONFIG_ELEMENT_ID;

#[derive(Debug, thiserror::Error)]
pub enum BootError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoRoot,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for BootError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// Handles that must outlive setup.
#[derive(Default)]
struct Site {
    theme_switch: Option<theme::ThemeSwitch>,
    nav: Option<nav::MobileNav>,
    download: Option<print::DownloadButton>,
    anchors: Vec<anchors::SmoothAnchor>,
    reveal: Option<reveal::RevealHandle>,
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = boot() {
        log::error!("site boot failed: {err}");
    }
}

/// Read config, install logging, and run setup once the DOM is parsed.
pub fn boot() -> Result<(), BootError> {
    let window = web_sys::window().ok_or(BootError::NoWindow)?;
    let document = window.document().ok_or(BootError::NoDocument)?;

    let parsed = load_config(&document);
    init_logging(&parsed);
    let config = parsed.unwrap_or_else(|err| {
        log::warn!("ignoring site config: {err}");
        SiteConfig::default()
    });

    if document.ready_state() == "loading" {
        let target = document.clone();
        let on_ready = Closure::once(move || {
            if let Err(err) = setup(&window, &document, &config) {
                log::error!("site setup failed: {err}");
            }
        });
        target.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
        return Ok(());
    }

    setup(&window, &document, &config)
}

fn load_config(document: &Document) -> Result<SiteConfig, ConfigError> {
    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    SiteConfig::from_page(raw.as_deref())
}

fn init_logging(parsed: &Result<SiteConfig, ConfigError>) {
    let level = match parsed {
        Ok(config) => config.log_level().unwrap_or(log::Level::Info),
        Err(_) => log::Level::Info,
    };
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
}

fn setup(window: &Window, document: &Document, config: &SiteConfig) -> Result<(), BootError> {
    let controller = theme::controller(window, document, &config.theme_key)?;
    let initial = controller.load_theme();
    log::info!("theme: starting in {initial}");

    let site = Site {
        theme_switch: theme::ThemeSwitch::attach(document, controller),
        nav: nav::MobileNav::attach(document),
        download: print::DownloadButton::attach(window, document, &config.print_prompt),
        anchors: anchors::attach_all(document),
        reveal: {
            reveal::tag_sections(document, &config.reveal_selectors);
            reveal::observe_page(window, document, config)
        },
    };
    log::debug!(
        "site ready: theme switch {}, nav {}, download {}, {} anchor(s), reveal {}",
        site.theme_switch.is_some(),
        site.nav.is_some(),
        site.download.is_some(),
        site.anchors.len(),
        site.reveal.is_some()
    );
    SITE.with(|slot| *slot.borrow_mut() = Some(site));
    Ok(())
}

pub(crate) fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Add or remove `class` on `el`, logging failures.
pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(err) = result {
        log::warn!("class {class:?} update failed: {}", js_error_message(&err));
    }
}

pub(crate) fn set_attr(el: &Element, name: &str, value: &str) {
    if let Err(err) = el.set_attribute(name, value) {
        log::warn!("attribute {name:?} update failed: {}", js_error_message(&err));
    }
}

/// First element matching `selector` under `document`, or `None`.
pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("bad selector {selector:?}: {}", js_error_message(&err));
            None
        }
    }
}
