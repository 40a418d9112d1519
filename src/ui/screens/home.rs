// SPDX-License-Identifier: PMPL-1.0-or-later

//! Home page: parallax hero, service cards, about, service areas, closing
//! call to action.

use crate::content::{COMPANY, MAIN_SERVICES, SERVICE_AREAS};
use crate::i18n::{t, Lang};
use crate::theme;
use crate::ui::banner;
use crate::ui::text;

use super::{
    blank, bullet, caption, cta_row, heading_block, paragraph, site_footer, INDENT,
};

/// Rows of the hero band at the top of the page.
pub const PARALLAX_BAND: usize = 8;

/// Which artwork row shows at hero-band row `band_row` for a given body
/// scroll offset.
///
/// The band itself scrolls away with the body; the artwork inside it
/// tracks at half speed, so the picture appears to sink as the visitor
/// scrolls. Rows the artwork has scrolled past are sky.
pub fn parallax_art_row(band_row: usize, scroll: usize) -> Option<&'static str> {
    let art = banner::hero_lines();
    let lag = (scroll - scroll / 2) as isize;
    let index = band_row as isize - lag;
    if index < 0 {
        return None;
    }
    art.get(index as usize).copied()
}

pub fn body(lang: Lang, width: usize, scroll: usize) -> Vec<String> {
    let band_width = width.max(20);
    let mut lines = Vec::new();

    for band_row in 0..PARALLAX_BAND {
        let content = parallax_art_row(band_row, scroll).unwrap_or("");
        let padded = format!("{:<1$}", text::clip(content, band_width), band_width);
        lines.push(format!("{}", theme::hero(&padded)));
    }

    lines.push(blank());
    lines.push(format!(
        "{}{}",
        INDENT,
        theme::brand("PISTOLERO EXPRESS")
    ));
    lines.push(format!("{}{}", INDENT, theme::muted(t(lang, "tagline"))));
    lines.push(blank());
    for line in text::wrap(t(lang, "heroTitle"), width.saturating_sub(4)) {
        lines.push(format!("{}{}", INDENT, theme::heading(&line)));
    }
    lines.extend(paragraph(t(lang, "heroSubtitle"), width));
    lines.push(blank());
    lines.push(cta_row(
        t(lang, "getQuote"),
        Some(&format!("{} · {}", t(lang, "callNow"), COMPANY.phone_display)),
    ));

    lines.extend(heading_block(t(lang, "servicesTitle"), width));
    for service in &MAIN_SERVICES {
        lines.push(blank());
        lines.push(format!(
            "{}{}",
            INDENT,
            theme::accent(t(lang, service.title_key))
        ));
        lines.extend(paragraph(t(lang, service.desc_key), width));
    }

    lines.extend(heading_block(t(lang, "aboutTitle"), width));
    lines.extend(paragraph(t(lang, "aboutBody"), width));
    lines.push(blank());
    for key in ["aboutPoint1", "aboutPoint2", "aboutPoint3"] {
        lines.push(bullet(t(lang, key)));
    }
    lines.push(blank());
    lines.extend(caption(t(lang, "learnMore"), width));

    lines.extend(heading_block(t(lang, "serviceAreasTitle"), width));
    lines.extend(paragraph(t(lang, "serviceAreasDesc"), width));
    lines.push(blank());
    let cities: Vec<&str> = SERVICE_AREAS.iter().map(|a| a.name).collect();
    for row in cities.chunks(3) {
        lines.push(format!("{}{}", INDENT, row.join("  ·  ")));
    }

    lines.extend(heading_block(t(lang, "ctaTitle"), width));
    lines.extend(paragraph(t(lang, "ctaBody"), width));
    lines.push(blank());
    lines.push(cta_row(
        t(lang, "scheduleService"),
        Some(t(lang, "contactUs")),
    ));

    lines.extend(site_footer(lang, width));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::strip_for_tests;

    #[test]
    fn art_tracks_at_half_scroll_speed() {
        // Unscrolled, the band shows the artwork from its first row.
        assert_eq!(parallax_art_row(0, 0), banner::hero_lines().first().copied());
        // After scrolling four rows the viewport top sits at band row 4,
        // which now shows artwork row 2: the picture moved half as far.
        assert_eq!(parallax_art_row(4, 4), banner::hero_lines().get(2).copied());
        // Rows above the slipped artwork are sky.
        assert_eq!(parallax_art_row(0, 4), None);
    }

    #[test]
    fn body_starts_with_the_band_and_ends_with_the_footer() {
        let lines = body(Lang::En, 80, 0);
        assert!(lines.len() > PARALLAX_BAND);
        let plain = strip_for_tests(&lines.join("\n"));
        assert!(plain.contains("PISTOLERO EXPRESS"));
        assert!(plain.contains("All rights reserved"));
    }

    #[test]
    fn body_localizes_with_language() {
        let es = strip_for_tests(&body(Lang::Es, 80, 0).join("\n"));
        assert!(es.contains("Nuestros Servicios"));
        assert!(es.contains("Todos los derechos reservados"));
    }
}
