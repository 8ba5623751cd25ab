//! Client-side behavior layer for a static resume/portfolio site.
//!
//! Compiled to WebAssembly with the `browser` feature, this crate restores the
//! persisted light/dark theme, reveals marked sections as they scroll into
//! view, and wires the small page helpers (mobile nav, print-to-PDF, smooth
//! anchors). The core controllers are plain Rust over capability traits so
//! they build and test natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme state machine and persistence policy |
//! | [`reveal`] | One-shot reveal observer and timer fallback |
//! | [`storage`] | Key-value store capability and in-memory store |
//! | [`nav`] | Mobile navigation disclosure state |
//! | [`print`] | Confirm-then-print flow |
//! | [`anchors`] | Fragment link resolution |
//! | [`config`] | Page-level configuration |
//! | [`consts`] | Keys, class names, selectors, timings |
//! | `dom` | Browser wiring (`browser` feature only) |

pub mod anchors;
pub mod config;
pub mod consts;
pub mod nav;
pub mod print;
pub mod reveal;
pub mod storage;
pub mod theme;

#[cfg(feature = "browser")]
pub mod dom;
