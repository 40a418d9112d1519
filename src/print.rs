// SPDX-License-Identifier: PMPL-1.0-or-later

//! Static page dump for the `print` subcommand.
//!
//! Renders kiosk pages to stdout in navigation order with fresh,
//! inactive forms. Handy for proofreading copy in either language
//! without entering the interactive shell.

use crate::forms::{FormState, CONTACT_FORM, SCHEDULING_FORM};
use crate::i18n::Lang;
use crate::ui::chrome;
use crate::ui::screens;
use crate::ui::Page;

pub struct PagePrinter {
    lang: Lang,
    width: usize,
}

impl PagePrinter {
    pub fn new(lang: Lang, width: usize) -> Self {
        PagePrinter { lang, width }
    }

    /// Print all four pages in navigation order.
    pub fn print_all(&self) {
        for page in Page::all() {
            self.print_page(*page);
            println!();
        }
    }

    /// Print one page: header chrome first, then the full body.
    pub fn print_page(&self, page: Page) {
        for line in chrome::header(self.lang, page, self.width) {
            println!("{}", line);
        }
        for line in self.body(page) {
            println!("{}", line);
        }
    }

    fn body(&self, page: Page) -> Vec<String> {
        match page {
            Page::Home => screens::home::body(self.lang, self.width, 0),
            Page::Services => screens::services::body(self.lang, self.width),
            Page::Scheduling => {
                let form = FormState::new(&SCHEDULING_FORM);
                screens::scheduling::body(self.lang, self.width, &form, false)
            }
            Page::Contact => {
                let form = FormState::new(&CONTACT_FORM);
                screens::contact::body(self.lang, self.width, &form, false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::t;
    use crate::ui::strip_for_tests;

    #[test]
    fn every_page_renders_a_body() {
        for lang in [Lang::En, Lang::Es] {
            let printer = PagePrinter::new(lang, 80);
            for page in Page::all() {
                assert!(!printer.body(*page).is_empty(), "{:?}", page);
            }
        }
    }

    #[test]
    fn printed_forms_are_inactive() {
        let printer = PagePrinter::new(Lang::En, 80);
        let plain = strip_for_tests(&printer.body(Page::Scheduling).join("\n"));
        assert!(plain.contains(t(Lang::En, "pressFormHint")));
    }
}
