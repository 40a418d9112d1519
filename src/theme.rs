// SPDX-License-Identifier: PMPL-1.0-or-later

//! Brand palette and terminal paint helpers.
//!
//! The five Pistolero Express brand colors are the single source of truth
//! for every painted cell in the kiosk. Helpers are named for the role the
//! color plays on screen, not the color itself, so screens never reach for
//! raw RGB values.
//!
//! Truecolor support is assumed; the kiosk targets the shop-floor terminal,
//! not arbitrary dumb TTYs. Status colors (validation errors, success
//! marks) use conventional named colors instead of brand tones.

use colored::{ColoredString, Colorize};

pub const PISTOLERO_BROWN: (u8, u8, u8) = (0x3F, 0x1D, 0x1D);
pub const PISTOLERO_GRAY: (u8, u8, u8) = (0x81, 0x7F, 0x82);
pub const PISTOLERO_MINT: (u8, u8, u8) = (0x59, 0xC9, 0xA5);
pub const PISTOLERO_YELLOW: (u8, u8, u8) = (0xFF, 0xFD, 0x77);
pub const PISTOLERO_GREEN: (u8, u8, u8) = (0x04, 0x2A, 0x2B);

fn tone(text: &str, (r, g, b): (u8, u8, u8)) -> ColoredString {
    text.truecolor(r, g, b)
}

fn on_tone(text: ColoredString, (r, g, b): (u8, u8, u8)) -> ColoredString {
    text.on_truecolor(r, g, b)
}

/// Wordmark and other places the brand name itself appears.
pub fn brand(text: &str) -> ColoredString {
    tone(text, PISTOLERO_MINT).bold()
}

/// Page and section headings.
pub fn heading(text: &str) -> ColoredString {
    tone(text, PISTOLERO_MINT).bold()
}

/// Highlighted copy: prices, phone numbers, key phrases.
pub fn accent(text: &str) -> ColoredString {
    tone(text, PISTOLERO_YELLOW)
}

/// Secondary copy: captions, hints, the help line.
pub fn muted(text: &str) -> ColoredString {
    tone(text, PISTOLERO_GRAY)
}

/// Call-to-action buttons: dark text on the yellow brand fill.
pub fn cta(text: &str) -> ColoredString {
    on_tone(tone(text, PISTOLERO_BROWN).bold(), PISTOLERO_YELLOW)
}

/// The active page in the navigation bar.
pub fn nav_active(text: &str) -> ColoredString {
    tone(text, PISTOLERO_MINT).bold().underline()
}

/// Inactive pages in the navigation bar.
pub fn nav_inactive(text: &str) -> ColoredString {
    tone(text, PISTOLERO_GRAY)
}

/// Hero band rows: light text over the brown brand fill.
pub fn hero(text: &str) -> ColoredString {
    on_tone(text.white(), PISTOLERO_BROWN)
}

/// Success toast rows: dark text over the mint brand fill.
pub fn toast_ok(text: &str) -> ColoredString {
    on_tone(tone(text, PISTOLERO_GREEN).bold(), PISTOLERO_MINT)
}

/// Validation failures and other error text.
pub fn error(text: &str) -> ColoredString {
    text.red()
}

/// Confirmation marks and success copy.
pub fn ok(text: &str) -> ColoredString {
    text.green()
}
