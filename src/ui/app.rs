// SPDX-License-Identifier: PMPL-1.0-or-later

//! Kiosk shell.
//!
//! Owns the live state (page, language, form drafts, toasts), routes key
//! input, advances pending submissions, and drives the crossterm draw
//! loop. Rendering pins the chrome and slices the active screen's body
//! lines to the viewport; Home is the only page whose body changes with
//! the scroll offset (the art band slips at half speed).

use std::io::{stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};
use tracing::{debug, info, warn};

use crate::dispatch::LeadTransport;
use crate::forms::{FormState, SubmissionStatus, SubmitOutcome, CONTACT_FORM, SCHEDULING_FORM};
use crate::i18n::{t, Lang};
use crate::theme;
use crate::ui::chrome::{self, HelpMode, HEADER_ROWS};
use crate::ui::screens::{self, FOCUS_PREFIX};
use crate::ui::text;
use crate::ui::toast::ToastQueue;
use crate::ui::Page;

/// Fixed rows around the scrolling body: header block, toast row, help
/// line.
const CHROME_ROWS: usize = HEADER_ROWS + 2;

/// Event poll cadence; bounds how late a toast or acknowledgement lands.
const TICK: Duration = Duration::from_millis(200);

/// Who gets the keyboard: the page, or the form on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Browse,
    Form,
}

pub struct App {
    lang: Lang,
    page: Page,
    scroll: usize,
    mode: Mode,
    scheduling: FormState,
    contact: FormState,
    toasts: ToastQueue,
    transport: Box<dyn LeadTransport>,
    quit: bool,
}

impl App {
    pub fn new(lang: Lang, transport: Box<dyn LeadTransport>) -> Self {
        App {
            lang,
            page: Page::default(),
            scroll: 0,
            mode: Mode::Browse,
            scheduling: FormState::new(&SCHEDULING_FORM),
            contact: FormState::new(&CONTACT_FORM),
            toasts: ToastQueue::new(),
            transport,
            quit: false,
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn is_quitting(&self) -> bool {
        self.quit
    }

    /// True while a form owns the keyboard.
    pub fn form_active(&self) -> bool {
        self.mode == Mode::Form
    }

    pub fn scheduling_form(&self) -> &FormState {
        &self.scheduling
    }

    pub fn contact_form(&self) -> &FormState {
        &self.contact
    }

    /// Route one key press. `height` is the terminal height, used to size
    /// page scrolling.
    pub fn handle_key(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        now: Instant,
        height: usize,
    ) {
        // Alt+e / Alt+s switch language from anywhere, even while a field
        // is swallowing plain characters.
        if modifiers.contains(KeyModifiers::ALT) {
            if let KeyCode::Char(c) = code {
                if let Some(lang) = lang_for_hotkey(c) {
                    self.set_lang(lang);
                    return;
                }
            }
        }
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }
        match self.mode {
            Mode::Browse => self.handle_browse_key(code, height),
            Mode::Form => self.handle_form_key(code, now),
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode, height: usize) {
        let step = height.saturating_sub(CHROME_ROWS).max(1);
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('e') => self.set_lang(Lang::En),
            KeyCode::Char('s') => self.set_lang(Lang::Es),
            KeyCode::Char(c @ '1'..='4') => {
                if let Some(page) = c.to_digit(10).and_then(|n| Page::from_number(n as usize)) {
                    self.go_to(page);
                }
            }
            KeyCode::Right => self.go_to(self.page.next()),
            KeyCode::Left => self.go_to(self.page.prev()),
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(step),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(step),
            KeyCode::Home => self.scroll = 0,
            KeyCode::Enter => self.advance(),
            _ => {}
        }
    }

    /// Enter in browse mode follows the page's primary call to action.
    fn advance(&mut self) {
        match self.page {
            Page::Home => self.go_to(Page::Contact),
            Page::Services => self.go_to(Page::Scheduling),
            Page::Scheduling | Page::Contact => self.open_form(),
        }
    }

    fn open_form(&mut self) {
        let form = match self.page {
            Page::Scheduling => &mut self.scheduling,
            Page::Contact => &mut self.contact,
            _ => return,
        };
        if form.status() == SubmissionStatus::Submitted {
            form.submit_another();
        }
        self.mode = Mode::Form;
    }

    fn handle_form_key(&mut self, code: KeyCode, now: Instant) {
        let form = match self.page {
            Page::Scheduling => &mut self.scheduling,
            Page::Contact => &mut self.contact,
            _ => {
                self.mode = Mode::Browse;
                return;
            }
        };
        if form.status() == SubmissionStatus::Submitted {
            match code {
                KeyCode::Enter => form.submit_another(),
                KeyCode::Esc => self.mode = Mode::Browse,
                _ => {}
            }
            return;
        }
        match code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Right => form.cycle_option(1),
            KeyCode::Left => form.cycle_option(-1),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => self.attempt_submit(now),
            KeyCode::Char(c) => form.insert_char(c),
            _ => {}
        }
    }

    fn attempt_submit(&mut self, now: Instant) {
        let lang = self.lang;
        let form = match self.page {
            Page::Scheduling => &mut self.scheduling,
            Page::Contact => &mut self.contact,
            _ => return,
        };
        match form.submit(now, self.transport.as_mut()) {
            Ok(SubmitOutcome::Accepted) => {
                debug!("{} submission accepted, awaiting acknowledgement", form.spec().name);
            }
            Ok(SubmitOutcome::Rejected { first_error }) => {
                debug!("{} submission rejected at field {}", form.spec().name, first_error);
                self.toasts.push(t(lang, "fixFieldsToast"), now);
            }
            Ok(SubmitOutcome::InFlight) => {}
            Err(e) => {
                warn!("Lead dispatch failed: {e:#}");
                self.toasts.push(e.to_string(), now);
            }
        }
    }

    /// Jump to a page, as the `1`-`4` keys do.
    pub fn go_to(&mut self, page: Page) {
        if page == self.page {
            self.scroll = 0;
            return;
        }
        debug!("Navigating to {:?}", page);
        self.page = page;
        self.scroll = 0;
        self.mode = Mode::Browse;
        // Page changes discard drafts, like a real navigation would.
        self.scheduling.reset();
        self.contact.reset();
    }

    fn set_lang(&mut self, lang: Lang) {
        if self.lang != lang {
            info!("Language switched to {}", lang.native_name());
            self.lang = lang;
        }
    }

    /// Advance pending submissions and expire old toasts.
    pub fn tick(&mut self, now: Instant) {
        if self.scheduling.tick(now) {
            self.toasts.push(t(self.lang, SCHEDULING_FORM.toast_key), now);
        }
        if self.contact.tick(now) {
            self.toasts.push(t(self.lang, CONTACT_FORM.toast_key), now);
        }
        self.toasts.prune(now);
    }

    /// Full body of the active page, before viewport slicing.
    pub fn body_lines(&self, width: usize) -> Vec<String> {
        let form_active = self.mode == Mode::Form;
        match self.page {
            Page::Home => screens::home::body(self.lang, width, self.scroll),
            Page::Services => screens::services::body(self.lang, width),
            Page::Scheduling => {
                screens::scheduling::body(self.lang, width, &self.scheduling, form_active)
            }
            Page::Contact => screens::contact::body(self.lang, width, &self.contact, form_active),
        }
    }

    fn active_form(&self) -> Option<&FormState> {
        match self.page {
            Page::Scheduling => Some(&self.scheduling),
            Page::Contact => Some(&self.contact),
            _ => None,
        }
    }

    fn help_mode(&self) -> HelpMode {
        match (self.mode, self.active_form().map(FormState::status)) {
            (Mode::Form, Some(SubmissionStatus::Submitted)) => HelpMode::Submitted,
            (Mode::Form, _) => HelpMode::Form,
            _ => HelpMode::Browse,
        }
    }

    fn toast_line(&self, width: usize) -> String {
        let joined = self.toasts.visible().collect::<Vec<_>>().join("  │  ");
        if joined.is_empty() {
            return String::new();
        }
        let banner = format!(" ✔ {} ", joined);
        format!("{}", theme::toast_ok(&text::clip(&banner, width)))
    }

    /// Draw one frame: header, toast row, body slice, help line.
    pub fn render(&mut self, out: &mut impl Write, width: usize, height: usize) -> Result<()> {
        if width == 0 || height <= CHROME_ROWS {
            return Ok(());
        }
        let view_rows = height - CHROME_ROWS;
        let mut body = self.body_lines(width);

        // In form mode, follow the focused stop (its row carries a plain
        // marker) so tabbing never runs off screen.
        if self.mode == Mode::Form {
            if let Some(row) = body.iter().position(|l| l.starts_with(FOCUS_PREFIX)) {
                if row < self.scroll + 1 || row + 1 >= self.scroll + view_rows {
                    self.scroll = row.saturating_sub(view_rows / 2);
                }
            }
        }
        let max_scroll = body.len().saturating_sub(view_rows);
        if self.scroll > max_scroll {
            self.scroll = max_scroll;
            if self.page == Page::Home {
                // Home's art band depends on the offset; rebuild once clamped.
                body = self.body_lines(width);
            }
        }

        queue!(out, terminal::Clear(ClearType::All))?;
        let mut row: u16 = 0;
        for line in chrome::header(self.lang, self.page, width) {
            queue!(out, cursor::MoveTo(0, row), Print(line))?;
            row += 1;
        }
        queue!(out, cursor::MoveTo(0, row), Print(self.toast_line(width)))?;
        row += 1;
        for i in 0..view_rows {
            let line = body.get(self.scroll + i).map(String::as_str).unwrap_or("");
            queue!(out, cursor::MoveTo(0, row), Print(line))?;
            row += 1;
        }
        let help = chrome::help_line(self.lang, self.help_mode(), width);
        queue!(out, cursor::MoveTo(0, row), Print(help))?;
        out.flush()?;
        Ok(())
    }
}

fn lang_for_hotkey(c: char) -> Option<Lang> {
    match c {
        'e' => Some(Lang::En),
        's' => Some(Lang::Es),
        _ => None,
    }
}

/// Run the kiosk until the visitor quits.
pub fn run(mut app: App) -> Result<()> {
    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
    let result = run_inner(&mut app, &mut out);
    execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run_inner(app: &mut App, out: &mut impl Write) -> Result<()> {
    info!("Kiosk started ({})", app.lang().native_name());
    loop {
        let (width, height) = terminal::size()?;
        app.render(out, width as usize, height as usize)?;
        if event::poll(TICK)? {
            if let Event::Key(KeyEvent {
                code, modifiers, ..
            }) = event::read()?
            {
                app.handle_key(code, modifiers, Instant::now(), height as usize);
            }
        }
        app.tick(Instant::now());
        if app.is_quitting() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::SimulatedTransport;

    fn app() -> App {
        App::new(Lang::En, Box::new(SimulatedTransport::instant()))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE, Instant::now(), 40);
    }

    #[test]
    fn number_keys_and_arrows_navigate() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.page(), Page::Scheduling);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.page(), Page::Contact);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.page(), Page::Home);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.page(), Page::Contact);
    }

    #[test]
    fn enter_opens_the_form_and_esc_leaves_it() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert!(!app.form_active());
        press(&mut app, KeyCode::Enter);
        assert!(app.form_active());
        press(&mut app, KeyCode::Esc);
        assert!(!app.form_active());
        assert!(!app.is_quitting());
    }

    #[test]
    fn typing_in_form_mode_edits_instead_of_navigating() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.page(), Page::Scheduling);
        assert_eq!(app.scheduling_form().value(0), "2");
    }

    #[test]
    fn alt_hotkeys_switch_language_even_inside_a_field() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        app.handle_key(
            KeyCode::Char('s'),
            KeyModifiers::ALT,
            Instant::now(),
            40,
        );
        assert_eq!(app.lang(), Lang::Es);
        // The plain character never reached the field.
        assert_eq!(app.scheduling_form().value(0), "");
    }

    #[test]
    fn navigating_away_discards_the_draft() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('J'));
        assert_eq!(app.scheduling_form().value(0), "J");
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.scheduling_form().value(0), "");
    }

    #[test]
    fn rejected_submit_raises_a_toast() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert!(!app.toasts.is_empty());
        assert_eq!(app.page(), Page::Contact);
    }
}
