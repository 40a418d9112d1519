// SPDX-License-Identifier: PMPL-1.0-or-later

//! Contact page: reach-us cards, the message form, hours, service areas
//! with distances, and the emergency banner.

use crate::content::{BUSINESS_HOURS, COMPANY, CONTACT_METHODS, SERVICE_AREAS};
use crate::forms::{FormState, SubmissionStatus};
use crate::i18n::{t, Lang};
use crate::theme;
use crate::ui::text;

use super::{
    blank, caption, form_lines, heading_block, page_hero, paragraph, site_footer, success_card,
    INDENT,
};

pub fn body(lang: Lang, width: usize, form: &FormState, form_active: bool) -> Vec<String> {
    let subtitle = format!(
        "{} - {}",
        t(lang, "contactDesc"),
        t(lang, "contactDescTail")
    );
    let mut lines = page_hero(width, t(lang, "contactTitle"), &subtitle);
    lines.push(blank());

    for method in &CONTACT_METHODS {
        lines.push(format!(
            "{}{}  {}",
            INDENT,
            theme::accent(t(lang, method.title_key)),
            t(lang, method.value_key)
        ));
    }

    if form.status() == SubmissionStatus::Submitted {
        lines.extend(success_card(lang, width, form));
    } else {
        lines.extend(heading_block(t(lang, "sendMessageTitle"), width));
        lines.push(blank());
        lines.extend(form_lines(lang, width, form, form_active));
    }

    lines.extend(heading_block(t(lang, "businessHours"), width));
    let table_width = width.saturating_sub(4).min(44);
    for row in &BUSINESS_HOURS {
        lines.push(format!(
            "{}{}",
            INDENT,
            text::spread(t(lang, row.label_key), t(lang, row.hours_key), table_width)
        ));
    }
    lines.push(blank());
    lines.extend(caption(t(lang, "emergencyAvailable"), width));

    lines.extend(heading_block(t(lang, "serviceAreasTitle"), width));
    for area in &SERVICE_AREAS {
        let row = text::spread(area.name, area.distance, table_width);
        lines.push(format!("{}{}", INDENT, row));
    }

    lines.extend(heading_block(t(lang, "servingTitle"), width));
    lines.extend(paragraph(t(lang, "servingBody"), width));

    lines.extend(heading_block(t(lang, "emergencyServices"), width));
    lines.extend(paragraph(t(lang, "emergencyCtaBody"), width));
    lines.push(blank());
    lines.push(format!(
        "{}{} {}",
        INDENT,
        theme::error(t(lang, "emergencyHotline")),
        theme::error(COMPANY.phone_display)
    ));

    lines.extend(site_footer(lang, width));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::CONTACT_FORM;

    #[test]
    fn shows_contact_methods_and_hours() {
        let form = FormState::new(&CONTACT_FORM);
        let plain = crate::ui::strip_for_tests(&body(Lang::En, 80, &form, false).join("\n"));
        assert!(plain.contains("(555) 123-4567"));
        assert!(plain.contains("info@pistoleroexpress.com"));
        assert!(plain.contains("Monday - Friday"));
        assert!(plain.contains("7:00 AM - 7:00 PM"));
        assert!(plain.contains("Corpus Christi"));
        assert!(plain.contains("90 miles"));
    }

    #[test]
    fn spanish_hours_translate_labels_but_not_clock_times() {
        let form = FormState::new(&CONTACT_FORM);
        let plain = crate::ui::strip_for_tests(&body(Lang::Es, 80, &form, false).join("\n"));
        assert!(plain.contains("Lunes - Viernes"));
        assert!(plain.contains("7:00 AM - 7:00 PM"));
        assert!(plain.contains("Solo Emergencias"));
    }
}
