// SPDX-License-Identifier: PMPL-1.0-or-later

//! Hero and logo artwork.
//!
//! The kiosk's stand-in for the site's photography. Art is validated
//! before use; anything malformed silently falls back to a plain
//! placeholder frame, so a bad edit to the artwork can never take a page
//! down or show a visible error.

/// Widest a banner line may be. Narrower terminals clip on render.
pub const MAX_ART_WIDTH: usize = 72;

/// Tanker truck at golden hour, westbound on the 83.
const HERO_ART: &[&str] = &[
    r"                 .                 *                  .",
    r"     *                    ___                    *",
    r"                         (___)",
    r"    ______________________________________________   ________",
    r"   |                                              | |        \",
    r"   |     P I S T O L E R O   E X P R E S S        | |  ___   |",
    r"   |     ------------------------------------     | | |   |  |",
    r"   |      PROFESSIONAL FUEL TRANSPORTATION        | | |___|  |",
    r"   |                                              | |        |",
    r"   |______________________________________________| |________|",
    r"  _|______________________________________________|_|________|_",
    r" |_____________________________________________________O______|",
    r"      (___)   (___)                  (___)   (___)   (___)",
    r"~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
];

/// Small brand mark for the secondary page banners.
const LOGO_ART: &[&str] = &[
    r"   .-'''-.",
    r"  /  P E  \",
    r" |    *    |",
    r"  \  T X  /",
    r"   '-...-'",
];

const PLACEHOLDER: &[&str] = &[
    r" .----------------------------.",
    r" |                            |",
    r" |     PISTOLERO EXPRESS      |",
    r" |                            |",
    r" '----------------------------'",
];

/// The hero banner, or the placeholder if the art fails validation.
pub fn hero_lines() -> &'static [&'static str] {
    art_or_placeholder(HERO_ART)
}

/// The logo mark, or the placeholder if the art fails validation.
pub fn logo_lines() -> &'static [&'static str] {
    art_or_placeholder(LOGO_ART)
}

fn art_or_placeholder(art: &'static [&'static str]) -> &'static [&'static str] {
    if usable(art) {
        art
    } else {
        PLACEHOLDER
    }
}

fn usable(art: &[&str]) -> bool {
    !art.is_empty() && art.iter().all(|line| line.chars().count() <= MAX_ART_WIDTH)
}
