// SPDX-License-Identifier: PMPL-1.0-or-later

//! Fixed kiosk chrome: the contact bar, the navigation header, and the
//! key-help line. Everything here stays pinned while the page body
//! scrolls between.

use colored::Colorize;

use crate::content::COMPANY;
use crate::i18n::{t, Lang};
use crate::theme;
use crate::ui::text;
use crate::ui::Page;

/// Rows the header occupies.
pub const HEADER_ROWS: usize = 3;

/// Which help line the shell needs right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpMode {
    Browse,
    Form,
    Submitted,
}

impl HelpMode {
    fn key(&self) -> &'static str {
        match self {
            HelpMode::Browse => "helpBrowse",
            HelpMode::Form => "helpForm",
            HelpMode::Submitted => "helpSubmitted",
        }
    }
}

/// Contact bar, brand/navigation row, separator rule.
pub fn header(lang: Lang, page: Page, width: usize) -> Vec<String> {
    let contact_bar = format!(
        "{} · {} · {}",
        COMPANY.phone_display,
        t(lang, "whatsapp"),
        t(lang, "directions")
    );
    let bar = format!(
        "{:<1$}",
        text::center(&text::clip(&contact_bar, width), width),
        width
    );

    vec![
        format!("{}", theme::hero(&bar)),
        nav_row(lang, page, width),
        format!("{}", theme::muted(&text::rule(width))),
    ]
}

fn nav_row(lang: Lang, page: Page, width: usize) -> String {
    let brand_plain = "PISTOLERO EXPRESS";
    let mut left_plain = String::from(brand_plain);
    let mut left = format!("{}", theme::brand(brand_plain));

    for candidate in Page::all() {
        let label = format!("{}·{}", candidate.number(), t(lang, candidate.nav_key()));
        left_plain.push_str("  ");
        left_plain.push_str(&label);
        left.push_str("  ");
        let painted = if *candidate == page {
            theme::nav_active(&label)
        } else {
            theme::nav_inactive(&label)
        };
        left.push_str(&format!("{}", painted));
    }

    let switch_plain = format!("{} │ {}", Lang::En.label(), Lang::Es.label());
    let mut switch = String::new();
    for (i, candidate) in Lang::all().iter().enumerate() {
        if i > 0 {
            switch.push_str(&format!("{}", theme::muted(" │ ")));
        }
        let painted = if *candidate == lang {
            theme::accent(candidate.label()).bold()
        } else {
            theme::muted(candidate.label())
        };
        switch.push_str(&format!("{}", painted));
    }

    let used = left_plain.chars().count() + switch_plain.chars().count();
    let gap = if used < width { width - used } else { 1 };
    format!("{}{}{}", left, " ".repeat(gap), switch)
}

/// Key help for the bottom row.
pub fn help_line(lang: Lang, mode: HelpMode, width: usize) -> String {
    let help = text::clip(t(lang, mode.key()), width);
    format!("{}", theme::muted(&help))
}
