// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests driving the kiosk shell through its key handler.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyModifiers};
use pistolero_kiosk::dispatch::SimulatedTransport;
use pistolero_kiosk::forms::SubmissionStatus;
use pistolero_kiosk::i18n::Lang;
use pistolero_kiosk::ui::{App, Page};

fn make_kiosk() -> App {
    App::new(Lang::default(), Box::new(SimulatedTransport::instant()))
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(code, KeyModifiers::NONE, Instant::now(), 40);
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn strip_ansi(text: &str) -> String {
    let mut plain = String::new();
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

fn visible_body(app: &App) -> String {
    strip_ansi(&app.body_lines(80).join("\n"))
}

#[test]
fn test_kiosk_boots_on_home_in_english() {
    let app = make_kiosk();
    assert_eq!(app.page(), Page::Home);
    assert_eq!(app.lang(), Lang::En);
    assert!(visible_body(&app).contains("Our Services"));
}

#[test]
fn test_language_toggle_rewrites_the_page() {
    let mut app = make_kiosk();
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.lang(), Lang::Es);
    assert!(visible_body(&app).contains("Nuestros Servicios"));
    assert_eq!(app.page(), Page::Home);

    press(&mut app, KeyCode::Char('e'));
    assert!(visible_body(&app).contains("Our Services"));
}

#[test]
fn test_services_cta_leads_to_scheduling() {
    let mut app = make_kiosk();
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.page(), Page::Services);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.page(), Page::Scheduling);
    assert!(!app.form_active());
}

#[test]
fn test_esc_quits_browsing_but_only_leaves_a_form() {
    let mut app = make_kiosk();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Enter);
    assert!(app.form_active());

    press(&mut app, KeyCode::Esc);
    assert!(!app.form_active());
    assert!(!app.is_quitting());

    press(&mut app, KeyCode::Esc);
    assert!(app.is_quitting());
}

#[test]
fn test_full_contact_submission_through_the_keyboard() {
    let mut app = make_kiosk();
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Enter);
    assert!(app.form_active());

    type_text(&mut app, "Rosa Elizondo");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "rosa@example.com");
    press(&mut app, KeyCode::Tab); // phone (optional)
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Quote");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Weekly diesel delivery to McAllen?");

    press(&mut app, KeyCode::Enter);
    app.tick(Instant::now());

    assert_eq!(app.contact_form().status(), SubmissionStatus::Submitted);
    let body = visible_body(&app);
    assert!(body.contains("Message Sent!"), "success card not shown");
    // Draft was discarded on completion.
    assert_eq!(app.contact_form().value(0), "");
}

#[test]
fn test_enter_after_success_starts_a_fresh_form() {
    let mut app = make_kiosk();
    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Rosa");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "rosa@example.com");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Quote");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "Hello");
    press(&mut app, KeyCode::Enter);
    app.tick(Instant::now());
    assert_eq!(app.contact_form().status(), SubmissionStatus::Submitted);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.contact_form().status(), SubmissionStatus::Editing);
    assert_eq!(app.contact_form().value(0), "");
    assert!(app.form_active());
}

#[test]
fn test_alt_hotkeys_toggle_language_while_typing() {
    let mut app = make_kiosk();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Jose");
    app.handle_key(KeyCode::Char('s'), KeyModifiers::ALT, Instant::now(), 40);

    assert_eq!(app.lang(), Lang::Es);
    // The draft survived the toggle.
    assert_eq!(app.scheduling_form().value(0), "Jose");
    assert!(visible_body(&app).contains("Programar Servicio"));
}

#[test]
fn test_page_walk_leaves_language_alone() {
    let mut app = make_kiosk();
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.lang(), Lang::Es);

    for key in ['1', '2', '3', '4', '1'] {
        press(&mut app, KeyCode::Char(key));
        assert_eq!(app.lang(), Lang::Es, "language drifted on page {}", key);
    }
    for _ in 0..4 {
        press(&mut app, KeyCode::Right);
    }
    assert_eq!(app.page(), Page::Home);
    assert_eq!(app.lang(), Lang::Es);
}

#[test]
fn test_navigation_resets_scroll_and_draft() {
    let mut app = make_kiosk();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "draft text");
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.scheduling_form().value(0), "");
}
