//! Theme surface on `<html>` and the `#themeToggle` switch.

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Window};

use super::storage::LocalStorage;
use super::{BootError, js_error_message, set_attr, set_class};
use crate::consts::{DARK_CLASS, PREFERS_DARK_QUERY, THEME_TOGGLE_ID};
use crate::theme::{Theme, ThemeController, ThemeSurface};

/// The `dark` class on the document root.
pub struct RootClass {
    root: Element,
}

impl ThemeSurface for RootClass {
    fn is_dark(&self) -> bool {
        self.root.class_list().contains(DARK_CLASS)
    }

    fn set_dark(&self, dark: bool) {
        set_class(&self.root, DARK_CLASS, dark);
    }
}

pub type DomThemeController = ThemeController<LocalStorage, RootClass, Box<dyn Fn() -> bool>>;

/// `matchMedia("(prefers-color-scheme: dark)")`; false when unsupported.
#[must_use]
pub fn prefers_dark(window: &Window) -> bool {
    match window.match_media(PREFERS_DARK_QUERY) {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(err) => {
            log::debug!("matchMedia failed: {}", js_error_message(&err));
            false
        }
    }
}

pub fn controller(window: &Window, document: &Document, key: &str) -> Result<DomThemeController, BootError> {
    let root = document.document_element().ok_or(BootError::NoRoot)?;
    let media_window = window.clone();
    let ambient: Box<dyn Fn() -> bool> = Box::new(move || prefers_dark(&media_window));
    Ok(ThemeController::with_key(LocalStorage::open(window), RootClass { root }, ambient, key))
}

fn set_pressed(button: &Element, theme: Theme) {
    set_attr(button, "aria-pressed", if theme.is_dark() { "true" } else { "false" });
}

/// Click listener on the theme switch.
pub struct ThemeSwitch {
    _on_click: Closure<dyn FnMut()>,
}

impl ThemeSwitch {
    /// Wire the switch if the page has one. Takes ownership of the controller.
    pub fn attach(document: &Document, controller: DomThemeController) -> Option<Self> {
        let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) else {
            log::debug!("theme: no #{THEME_TOGGLE_ID} control");
            return None;
        };
        set_pressed(&button, controller.current());

        let target = button.clone();
        let on_click = Closure::wrap(Box::new(move || {
            let theme = controller.toggle_theme();
            set_pressed(&target, theme);
        }) as Box<dyn FnMut()>);

        if let Err(err) = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            log::warn!("theme: cannot listen on switch: {}", js_error_message(&err));
            return None;
        }
        Some(Self { _on_click: on_click })
    }
}
