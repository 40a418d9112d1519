// SPDX-License-Identifier: PMPL-1.0-or-later

//! Scheduling page: the service request form plus the help sidebar,
//! rendered as one column.

use crate::content::{COMPANY, EXPECTATIONS};
use crate::forms::{FormState, SubmissionStatus};
use crate::i18n::{t, Lang};
use crate::theme;

use super::{
    blank, caption, form_lines, heading_block, page_hero, paragraph, site_footer, success_card,
    INDENT,
};

pub fn body(lang: Lang, width: usize, form: &FormState, form_active: bool) -> Vec<String> {
    let subtitle = format!(
        "{} - {}",
        t(lang, "scheduleDesc"),
        t(lang, "scheduleDescTail")
    );
    let mut lines = page_hero(width, t(lang, "scheduleTitle"), &subtitle);
    lines.push(blank());

    if form.status() == SubmissionStatus::Submitted {
        lines.extend(success_card(lang, width, form));
    } else {
        lines.extend(form_lines(lang, width, form, form_active));
    }

    lines.extend(heading_block(t(lang, "needHelp"), width));
    lines.push(format!(
        "{}{}  {}",
        INDENT,
        theme::accent(t(lang, "callNow")),
        COMPANY.phone_display
    ));
    lines.push(format!(
        "{}{}  {}",
        INDENT,
        theme::accent(t(lang, "whatsapp")),
        theme::muted(t(lang, "whatsappQuick"))
    ));

    lines.extend(heading_block(t(lang, "whatToExpect"), width));
    for (step, item) in EXPECTATIONS.iter().enumerate() {
        lines.push(blank());
        lines.push(format!(
            "{}{} {}",
            INDENT,
            theme::heading(&format!("{}.", step + 1)),
            t(lang, item.title_key)
        ));
        lines.extend(caption(t(lang, item.desc_key), width));
    }

    lines.extend(heading_block(t(lang, "emergencyServices"), width));
    lines.extend(paragraph(t(lang, "emergencyNotice"), width));
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
    use crate::forms::SCHEDULING_FORM;

    #[test]
    fn editing_view_shows_fields_and_sidebar() {
        let form = FormState::new(&SCHEDULING_FORM);
        let plain = crate::ui::strip_for_tests(&body(Lang::En, 80, &form, false).join("\n"));
        assert!(plain.contains("Service Type *"));
        assert!(plain.contains("What to Expect"));
        assert!(plain.contains("Press Enter to fill out the form"));
    }

    #[test]
    fn submitted_view_swaps_in_the_success_card() {
        let mut form = FormState::new(&SCHEDULING_FORM);
        force_submitted(&mut form);
        let plain = crate::ui::strip_for_tests(&body(Lang::En, 80, &form, false).join("\n"));
        assert!(plain.contains("Request Submitted!"));
        assert!(plain.contains("Submit Another Request"));
        assert!(!plain.contains("Service Type *"));
    }

    fn force_submitted(form: &mut FormState) {
        use crate::dispatch::SimulatedTransport;
        use std::time::Instant;

        let mut transport = SimulatedTransport::instant();
        for (i, field) in SCHEDULING_FORM.fields.iter().enumerate() {
            if !field.required {
                continue;
            }
            while form.focus() != i {
                form.focus_next();
            }
            if field.options.is_empty() {
                let value = if field.id == "email" { "a@b.co" } else { "x" };
                for ch in value.chars() {
                    form.insert_char(ch);
                }
            } else {
                form.cycle_option(1);
            }
        }
        let now = Instant::now();
        form.submit(now, &mut transport).unwrap();
        assert!(form.tick(now));
    }
}
