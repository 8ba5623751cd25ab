//! Light/dark theme state and its persistence.
//!
//! Reads the persisted choice from a [`KeyValueStore`] and mirrors the active
//! theme onto a [`ThemeSurface`] (the `dark` class on `<html>` in the
//! browser). When nothing is stored, the ambient color-scheme preference picks
//! the initial theme without writing it back.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a failed write is logged and dropped, and the
//! visual state still changes. A later reload then falls back to the ambient
//! preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;
use std::fmt;

use crate::consts::THEME_KEY;
use crate::storage::{KeyValueStore, StorageError};

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Persisted string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse one of the two canonical persisted strings.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Lenient conversion: anything other than exactly `"dark"` is light.
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn from_dark_flag(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The display context carrying the dark marker.
pub trait ThemeSurface {
    fn is_dark(&self) -> bool;
    fn set_dark(&self, dark: bool);
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for &T {
    fn is_dark(&self) -> bool {
        (**self).is_dark()
    }

    fn set_dark(&self, dark: bool) {
        (**self).set_dark(dark);
    }
}

/// Headless surface, used off-browser and in tests.
#[derive(Debug, Default)]
pub struct FlagSurface {
    dark: Cell<bool>,
    writes: Cell<usize>,
}

impl FlagSurface {
    #[must_use]
    pub fn new(dark: bool) -> Self {
        Self { dark: Cell::new(dark), writes: Cell::new(0) }
    }

    /// Number of times the marker was actually changed.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ThemeSurface for FlagSurface {
    fn is_dark(&self) -> bool {
        self.dark.get()
    }

    fn set_dark(&self, dark: bool) {
        self.writes.set(self.writes.get() + 1);
        self.dark.set(dark);
    }
}

/// Host-reported "prefers dark color scheme" signal. Never fails.
pub trait AmbientPreference {
    fn prefers_dark(&self) -> bool;
}

impl<F: Fn() -> bool> AmbientPreference for F {
    fn prefers_dark(&self) -> bool {
        self()
    }
}

/// Single authority for the page theme.
pub struct ThemeController<S, V, P> {
    store: S,
    surface: V,
    ambient: P,
    key: String,
}

impl<S: KeyValueStore, V: ThemeSurface, P: AmbientPreference> ThemeController<S, V, P> {
    #[must_use]
    pub fn new(store: S, surface: V, ambient: P) -> Self {
        Self::with_key(store, surface, ambient, THEME_KEY)
    }

    #[must_use]
    pub fn with_key(store: S, surface: V, ambient: P, key: &str) -> Self {
        Self { store, surface, ambient, key: key.to_owned() }
    }

    /// Theme currently shown, derived from the surface marker.
    #[must_use]
    pub fn current(&self) -> Theme {
        Theme::from_dark_flag(self.surface.is_dark())
    }

    /// Resolve the initial theme and apply it.
    ///
    /// A stored value wins over the ambient preference. An unrecognized stored
    /// value is shown as light. The ambient-derived theme is not persisted.
    pub fn load_theme(&self) -> Theme {
        let stored = match self.store.get(&self.key) {
            Ok(stored) => stored,
            Err(err) => {
                log::debug!("theme: reading {:?} failed: {err}", self.key);
                None
            }
        };

        if let Some(raw) = stored.as_deref().filter(|raw| !raw.is_empty()) {
            if Theme::parse(raw).is_none() {
                log::warn!("theme: unknown stored value {raw:?}, using light");
            }
            return self.apply_raw(raw);
        }

        let theme = Theme::from_dark_flag(self.ambient.prefers_dark());
        log::debug!("theme: nothing stored, ambient preference gives {theme}");
        self.apply_theme(theme);
        theme
    }

    /// Set the surface marker to match `theme`. No-op when already matching.
    pub fn apply_theme(&self, theme: Theme) {
        if self.surface.is_dark() != theme.is_dark() {
            self.surface.set_dark(theme.is_dark());
        }
    }

    /// Apply an untyped theme name; anything but `"dark"` clears the marker.
    pub fn apply_raw(&self, raw: &str) -> Theme {
        let theme = Theme::coerce(raw);
        self.apply_theme(theme);
        theme
    }

    /// Flip the theme and try to persist it. Returns the new theme.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.current().toggled();
        self.apply_theme(next);
        if let Err(err) = self.persist(next) {
            log::debug!("theme: persisting {next} failed: {err}");
        }
        next
    }

    /// Write `theme` to the store.
    pub fn persist(&self, theme: Theme) -> Result<(), StorageError> {
        self.store.set(&self.key, theme.as_str())
    }
}
