//! Shared constants for the site behavior layer.

// ── Theme ───────────────────────────────────────────────────────

/// Storage key holding the persisted theme (`"light"` or `"dark"`).
pub const THEME_KEY: &str = "site_theme";

/// Marker class on the root element while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Media query reporting the ambient dark color-scheme preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Id of the optional theme switch control.
pub const THEME_TOGGLE_ID: &str = "themeToggle";

// ── Reveal ──────────────────────────────────────────────────────

/// Fraction of an element's area that must be in the viewport to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Per-element stagger used when no native visibility observer exists.
pub const FALLBACK_STAGGER_MS: u32 = 150;

/// Marker class for elements that animate in on first visibility.
pub const FADE_UP_CLASS: &str = "fade-up";

/// Marker class added once an element has been revealed.
pub const VISIBLE_CLASS: &str = "visible";

/// Data attribute (without the `data-` prefix) holding a reveal delay in ms.
pub const DELAY_DATA_KEY: &str = "delay";

/// Sections tagged revealable at startup when present.
pub const DEFAULT_REVEAL_SELECTORS: [&str; 5] =
    [".hero-text", ".hero-photo", ".profile-card", ".resume-grid", ".highlights"];

// ── Navigation ──────────────────────────────────────────────────

/// Header region that hosts the mobile navigation toggle.
pub const HEADER_SELECTOR: &str = ".site-header";

/// Navigation container inside the header.
pub const NAV_SELECTOR: &str = ".nav";

/// Class on the header while the mobile menu is open.
pub const NAV_OPEN_CLASS: &str = "nav-open";

/// Class of the synthesized menu button.
pub const MENU_TOGGLE_CLASS: &str = "menu-toggle";

pub const OPEN_NAV_LABEL: &str = "Open navigation";
pub const CLOSE_NAV_LABEL: &str = "Close navigation";

/// Hamburger icon rendered inside the menu button.
pub const MENU_ICON_SVG: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" aria-hidden="true"><path d="M3 6h18M3 12h18M3 18h18" stroke="currentColor" stroke-width="1.6" stroke-linecap="round"/></svg>"#;

// ── Print ───────────────────────────────────────────────────────

/// Id of the optional resume download control.
pub const DOWNLOAD_BUTTON_ID: &str = "downloadBtn";

pub const PRINT_PROMPT: &str = "The site will open the print dialog. Choose \"Save as PDF\" (or printer) to download your resume. Proceed?";

// ── Anchors ─────────────────────────────────────────────────────

/// Links that point at a fragment on the current page.
pub const FRAGMENT_LINK_SELECTOR: &str = "a[href^=\"#\"]";

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";
