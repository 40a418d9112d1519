// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation module for the Pistolero Express kiosk.
//!
//! Provides a data-driven translation system keyed by ISO 639-1 language
//! codes.
//!
//! ## Supported languages
//!
//! | Code | Language | Native name |
//! |------|----------|-------------|
//! | en   | English  | English     |
//! | es   | Spanish  | Español     |
//!
//! ## Design
//!
//! Translation keys use the site's camelCase names: `"heroTitle"`,
//! `"scheduleService"`, `"errRequired"`. A lookup that misses returns the
//! key string itself (fail-open, never panics). There is no fallback into
//! the other language; see [`catalog`] for the rationale.
//!
//! The catalog is embedded at compile time as static data — no file I/O,
//! no async, no allocator pressure during translation lookups.

mod catalog;
mod export;

pub use catalog::{entries, t, Lang};
pub use export::{CatalogExport, CatalogFormat};
