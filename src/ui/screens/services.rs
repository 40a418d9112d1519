// SPDX-License-Identifier: PMPL-1.0-or-later

//! Services page: the three flagship service lines with their feature
//! lists, support services, safety credentials, closing call to action.

use crate::content::{ADDITIONAL_SERVICES, MAIN_SERVICES, SAFETY_POINTS};
use crate::i18n::{t, Lang};
use crate::theme;

use super::{
    blank, bullet, caption, cta_row, heading_block, page_hero, paragraph, site_footer, INDENT,
};

pub fn body(lang: Lang, width: usize) -> Vec<String> {
    let mut lines = page_hero(width, t(lang, "servicesTitle"), t(lang, "servicesSubtitle"));

    for service in &MAIN_SERVICES {
        lines.extend(heading_block(t(lang, service.title_key), width));
        lines.extend(paragraph(t(lang, service.desc_key), width));
        lines.push(blank());
        for key in service.feature_keys {
            lines.push(bullet(t(lang, key)));
        }
        lines.push(blank());
        lines.extend(caption(t(lang, "getQuoteService"), width));
    }

    lines.extend(heading_block(t(lang, "additionalServicesTitle"), width));
    lines.extend(paragraph(t(lang, "additionalServicesDesc"), width));
    for item in &ADDITIONAL_SERVICES {
        lines.push(blank());
        lines.push(format!("{}{}", INDENT, theme::accent(t(lang, item.title_key))));
        lines.extend(paragraph(t(lang, item.desc_key), width));
    }

    lines.extend(heading_block(t(lang, "safetyComplianceTitle"), width));
    lines.extend(paragraph(t(lang, "safetyComplianceDesc"), width));
    for item in &SAFETY_POINTS {
        lines.push(blank());
        lines.push(format!("{}{}", INDENT, theme::accent(t(lang, item.title_key))));
        lines.extend(paragraph(t(lang, item.desc_key), width));
    }

    lines.extend(heading_block(t(lang, "readyToStart"), width));
    lines.extend(paragraph(t(lang, "readyToStartDesc"), width));
    lines.push(blank());
    lines.push(cta_row(
        t(lang, "scheduleService"),
        Some(t(lang, "callNow")),
    ));

    lines.extend(site_footer(lang, width));
    lines
}
