// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pistolero Kiosk — bilingual terminal storefront for Pistolero Express.
//!
//! This crate renders the fuel transportation company's marketing site as
//! an interactive terminal kiosk: four pages of brochure content, an
//! English/Spanish language toggle, and two lead-capture forms whose
//! submission is simulated locally.
//!
//! LAYERS:
//! 1. **i18n**: Embedded translation catalog; every user-facing string
//!    resolves through a key, per language, with no cross-language
//!    fallback.
//! 2. **content**: The company facts (contacts, service areas, offerings)
//!    that the copy is built from.
//! 3. **forms**: Field specs, draft state, and submit-time validation for
//!    the scheduling and contact forms.
//! 4. **dispatch**: The simulated lead transport that acknowledges a
//!    submission after a fixed delay.
//! 5. **ui**: The crossterm shell — screens, chrome, toasts, and the
//!    event loop.

pub mod content;
pub mod dispatch;
pub mod forms;
pub mod i18n;
pub mod print;
pub mod theme;
pub mod ui;
