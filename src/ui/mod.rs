// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal kiosk shell.
//!
//! The kiosk draws into an alternate screen with a fixed chrome (header,
//! toast row, help line) and a scrollable body between. Screens build
//! their body as a list of pre-styled lines; the shell in [`app`] owns
//! input, scrolling, and the draw loop.

pub mod app;
pub mod banner;
pub mod chrome;
pub mod screens;
pub mod text;
pub mod toast;

pub use app::{run, App};

/// The four kiosk pages, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Services,
    Scheduling,
    Contact,
}

impl Page {
    /// All pages in header order.
    pub fn all() -> &'static [Page] {
        &[Page::Home, Page::Services, Page::Scheduling, Page::Contact]
    }

    /// Catalog key for the navigation label.
    pub fn nav_key(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Services => "services",
            Page::Scheduling => "scheduling",
            Page::Contact => "contact",
        }
    }

    /// Number shown next to the nav label; doubles as the hotkey.
    pub fn number(&self) -> usize {
        match self {
            Page::Home => 1,
            Page::Services => 2,
            Page::Scheduling => 3,
            Page::Contact => 4,
        }
    }

    /// Page for a numeric hotkey, if one is bound.
    pub fn from_number(n: usize) -> Option<Page> {
        Page::all().get(n.wrapping_sub(1)).copied()
    }

    /// Next page in navigation order, wrapping at the end.
    pub fn next(&self) -> Page {
        Page::from_number(self.number() % Page::all().len() + 1).unwrap_or(Page::Home)
    }

    /// Previous page in navigation order, wrapping at the start.
    pub fn prev(&self) -> Page {
        let n = self.number();
        let len = Page::all().len();
        Page::from_number((n + len - 2) % len + 1).unwrap_or(Page::Home)
    }

    /// Whether the page hosts a lead-capture form.
    pub fn has_form(&self) -> bool {
        matches!(self, Page::Scheduling | Page::Contact)
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::Home
    }
}

/// Strip ANSI escape sequences so tests can assert on visible text.
#[cfg(test)]
pub(crate) fn strip_for_tests(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for follow in chars.by_ref() {
                if follow == 'm' {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_order_wraps_both_directions() {
        assert_eq!(Page::Home.next(), Page::Services);
        assert_eq!(Page::Contact.next(), Page::Home);
        assert_eq!(Page::Home.prev(), Page::Contact);
        assert_eq!(Page::Scheduling.prev(), Page::Services);
    }

    #[test]
    fn numeric_hotkeys_cover_exactly_the_four_pages() {
        assert_eq!(Page::from_number(1), Some(Page::Home));
        assert_eq!(Page::from_number(4), Some(Page::Contact));
        assert_eq!(Page::from_number(0), None);
        assert_eq!(Page::from_number(5), None);
    }

    #[test]
    fn only_scheduling_and_contact_host_forms() {
        let with_forms: Vec<_> = Page::all().iter().filter(|p| p.has_form()).collect();
        assert_eq!(with_forms, [&Page::Scheduling, &Page::Contact]);
    }

    #[test]
    fn strip_removes_color_codes_only() {
        let styled = format!("{}", crate::theme::brand("Pistolero"));
        assert_eq!(strip_for_tests(&styled), "Pistolero");
        assert_eq!(strip_for_tests("plain"), "plain");
    }
}
