// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page body builders.
//!
//! Each screen builds its page as a vector of fully styled lines; the
//! shell owns scrolling and pins the chrome around whatever slice fits
//! the terminal. Layout is computed on plain text first (see
//! [`crate::ui::text`]), then painted, so styling never skews alignment.

pub mod contact;
pub mod home;
pub mod scheduling;
pub mod services;

use colored::Colorize;

use crate::content::{COMPANY, FOOTER_SERVICE_KEYS, SERVICE_AREAS};
use crate::forms::{FieldKind, FormState};
use crate::i18n::{t, Lang};
use crate::theme;
use crate::ui::banner;
use crate::ui::text;

pub(crate) const INDENT: &str = "  ";

/// Plain-text prefix on the focused form stop's row. The shell scans the
/// body for it to keep the focused input scrolled into view.
pub(crate) const FOCUS_PREFIX: &str = "  ▸ ";

/// Blank spacer line.
pub(crate) fn blank() -> String {
    String::new()
}

/// Section heading with an underline rule sized to the title.
pub(crate) fn heading_block(title: &str, width: usize) -> Vec<String> {
    let rule_len = title.chars().count().min(width.saturating_sub(4));
    vec![
        blank(),
        format!("{}{}", INDENT, theme::heading(title)),
        format!("{}{}", INDENT, theme::muted(&text::rule(rule_len))),
    ]
}

/// Wrapped body copy.
pub(crate) fn paragraph(body: &str, width: usize) -> Vec<String> {
    text::wrap(body, width.saturating_sub(4))
        .into_iter()
        .map(|line| format!("{}{}", INDENT, line))
        .collect()
}

/// Wrapped secondary copy.
pub(crate) fn caption(body: &str, width: usize) -> Vec<String> {
    text::wrap(body, width.saturating_sub(4))
        .into_iter()
        .map(|line| format!("{}{}", INDENT, theme::muted(&line)))
        .collect()
}

/// Feature bullet.
pub(crate) fn bullet(label: &str) -> String {
    format!("{}{} {}", INDENT, theme::heading("•"), label)
}

/// Primary call-to-action with an optional plain companion.
pub(crate) fn cta_row(primary: &str, secondary: Option<&str>) -> String {
    let mut line = format!("{}{}", INDENT, theme::cta(&format!("[ {} ]", primary)));
    if let Some(text) = secondary {
        line.push_str("   ");
        line.push_str(&format!("{}", theme::accent(&format!("[ {} ]", text))));
    }
    line
}

/// Brown hero band used by the secondary pages: centered logo, page
/// title, subtitle.
pub(crate) fn page_hero(width: usize, title: &str, subtitle: &str) -> Vec<String> {
    let band_width = width.max(20);
    let mut lines = Vec::new();
    let mut push_band = |content: &str| {
        let padded = format!("{:<1$}", text::clip(content, band_width), band_width);
        lines.push(format!("{}", theme::hero(&padded)));
    };
    push_band("");
    for art in banner::logo_lines() {
        push_band(&text::center(art, band_width));
    }
    push_band("");
    push_band(&text::center(title, band_width));
    for line in text::wrap(subtitle, band_width.saturating_sub(8)) {
        push_band(&text::center(&line, band_width));
    }
    push_band("");
    lines
}

/// The site footer appended to every page.
pub(crate) fn site_footer(lang: Lang, width: usize) -> Vec<String> {
    let w = width.saturating_sub(4);
    let mut lines = vec![blank(), format!("{}{}", INDENT, theme::muted(&text::rule(w)))];
    lines.push(format!("{}{}", INDENT, theme::brand("PISTOLERO EXPRESS")));
    lines.extend(caption(t(lang, "footerDesc"), width));

    let areas: Vec<&str> = SERVICE_AREAS.iter().map(|a| a.name).collect();
    let services: Vec<&str> = FOOTER_SERVICE_KEYS.iter().map(|&k| t(lang, k)).collect();
    let rows = [
        format!("{}: {}", t(lang, "serviceAreasTitle"), areas.join(" · ")),
        format!("{}: {}", t(lang, "services"), services.join(" · ")),
        format!(
            "{}: {} · {} · {}",
            t(lang, "contact"),
            COMPANY.phone_display,
            COMPANY.email,
            COMPANY.region
        ),
    ];
    for row in rows {
        lines.extend(caption(&row, width));
    }
    lines.push(blank());
    lines.extend(caption(
        &format!(
            "© {} {}. {}.",
            COMPANY.copyright_year,
            COMPANY.name,
            t(lang, "allRights")
        ),
        width,
    ));
    lines
}

/// Render a form's fields, one label/value pair per field, with the
/// submit button last. `active` marks whether the shell has handed key
/// input to this form.
pub(crate) fn form_lines(
    lang: Lang,
    width: usize,
    form: &FormState,
    active: bool,
) -> Vec<String> {
    let mut lines = Vec::new();
    if !active {
        lines.extend(caption(t(lang, "pressFormHint"), width));
        lines.push(blank());
    }
    lines.push(format!("{}{}", INDENT, theme::muted(t(lang, "requiredHint"))));
    lines.push(blank());

    for (i, field) in form.spec().fields.iter().enumerate() {
        let focused = active && form.focus() == i;
        let star = if field.required { " *" } else { "" };
        let label = format!("{}{}", t(lang, field.label_key), star);
        let label_line = if focused {
            format!("{}{}", INDENT, theme::accent(&label))
        } else {
            format!("{}{}", INDENT, theme::muted(&label))
        };
        lines.push(label_line);
        lines.push(value_line(lang, width, form, i, focused));
        if let Some(error) = form.error(i) {
            lines.push(format!(
                "{}  {}",
                INDENT,
                theme::error(t(lang, error.message_key()))
            ));
        }
        lines.push(blank());
    }

    let submit_label = format!("[ {} ]", t(lang, form.spec().submit_key));
    let submit_focused = active && form.is_submit_focused();
    let button = if submit_focused {
        format!("{}{}", FOCUS_PREFIX, theme::cta(&submit_label))
    } else {
        format!("{}  {}", INDENT, theme::accent(&submit_label))
    };
    lines.push(button);
    lines
}

fn value_line(lang: Lang, width: usize, form: &FormState, index: usize, focused: bool) -> String {
    let field = &form.spec().fields[index];
    let lead = if focused { FOCUS_PREFIX } else { "    " };
    let raw = form.value(index);
    let budget = width.saturating_sub(8);

    if field.kind == FieldKind::Select {
        let shown = if raw.is_empty() {
            let placeholder = field.placeholder_key.map(|k| t(lang, k)).unwrap_or("");
            return format!("{}{}", lead, theme::muted(&format!("◂ {} ▸", placeholder)));
        } else {
            let label_key = field
                .options
                .iter()
                .find(|o| o.value == raw)
                .map(|o| o.label_key)
                .unwrap_or(raw);
            t(lang, label_key)
        };
        return format!("{}◂ {} ▸", lead, shown);
    }

    let mut shown = text::clip(raw, budget);
    if shown.is_empty() && !focused {
        if let Some(key) = field.placeholder_key {
            return format!("{}{}", lead, theme::muted(t(lang, key)));
        }
    }
    if focused {
        shown.push('▁');
    }
    format!("{}{}", lead, shown)
}

/// Success card shown once a form's submission completes.
pub(crate) fn success_card(lang: Lang, width: usize, form: &FormState) -> Vec<String> {
    let spec = form.spec();
    let mut lines = vec![blank()];
    lines.push(format!(
        "{}{} {}",
        INDENT,
        theme::ok("✔"),
        theme::ok(t(lang, spec.success_title_key)).bold()
    ));
    lines.push(blank());
    lines.extend(paragraph(t(lang, spec.success_body_key), width));
    lines.push(blank());
    lines.extend(caption(
        &format!("{} {}", t(lang, spec.assist_key), COMPANY.phone_display),
        width,
    ));
    lines.push(blank());
    lines.push(format!(
        "{}{}",
        INDENT,
        theme::cta(&format!("[ {} ]", t(lang, spec.another_key)))
    ));
    lines
}
