//! Mobile navigation disclosure state.
//!
//! The DOM layer mirrors [`NavDisclosure`] onto the header's `nav-open` class
//! and the menu button's ARIA attributes.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{CLOSE_NAV_LABEL, OPEN_NAV_LABEL};

/// ARIA attribute values for the menu button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavAria {
    pub expanded: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavDisclosure {
    open: bool,
}

impl NavDisclosure {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip open/closed.
    pub fn toggle(&mut self) -> NavAria {
        self.open = !self.open;
        self.aria()
    }

    /// Close the menu. Returns `None` when it was already closed.
    pub fn close(&mut self) -> Option<NavAria> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(self.aria())
    }

    #[must_use]
    pub fn aria(self) -> NavAria {
        if self.open {
            NavAria { expanded: "true", label: CLOSE_NAV_LABEL }
        } else {
            NavAria { expanded: "false", label: OPEN_NAV_LABEL }
        }
    }
}
