//! `#downloadBtn`: confirm, then open the browser print dialog.

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Window};

use super::js_error_message;
use crate::consts::DOWNLOAD_BUTTON_ID;
use crate::print::{PrintError, PrintHost, PrintOutcome, request_print};

/// `window.confirm` / `window.print`.
pub struct WindowPrint {
    window: Window,
}

impl PrintHost for WindowPrint {
    fn confirm(&self, message: &str) -> bool {
        match self.window.confirm_with_message(message) {
            Ok(accepted) => accepted,
            Err(err) => {
                log::debug!("print: confirm unavailable: {}", js_error_message(&err));
                false
            }
        }
    }

    fn print(&self) -> Result<(), PrintError> {
        self.window.print().map_err(|err| PrintError::Host(js_error_message(&err)))
    }
}

pub struct DownloadButton {
    _on_click: Closure<dyn FnMut()>,
}

impl DownloadButton {
    pub fn attach(window: &Window, document: &Document, prompt: &str) -> Option<Self> {
        let Some(button) = document.get_element_by_id(DOWNLOAD_BUTTON_ID) else {
            log::debug!("print: no download control");
            return None;
        };

        let host = WindowPrint { window: window.clone() };
        let prompt = prompt.to_owned();
        let on_click = Closure::wrap(Box::new(move || match request_print(&host, &prompt) {
            Ok(PrintOutcome::Printed) => log::info!("print: dialog opened"),
            Ok(PrintOutcome::Cancelled) => {}
            Err(err) => log::warn!("{err}"),
        }) as Box<dyn FnMut()>);

        if let Err(err) = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            log::warn!("print: cannot listen: {}", js_error_message(&err));
            return None;
        }
        Some(Self { _on_click: on_click })
    }
}
