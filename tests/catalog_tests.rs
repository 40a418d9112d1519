// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for the embedded translation catalog as consumers see it.

use std::collections::BTreeSet;

use pistolero_kiosk::forms::{CONTACT_FORM, SCHEDULING_FORM};
use pistolero_kiosk::i18n::{entries, t, Lang};

#[test]
fn test_known_translations_match_site_copy() {
    assert_eq!(t(Lang::En, "submit"), "Submit Request");
    assert_eq!(t(Lang::Es, "submit"), "Enviar Solicitud");
    assert_eq!(t(Lang::En, "home"), "Home");
    assert_eq!(t(Lang::Es, "home"), "Inicio");
}

#[test]
fn test_missing_key_passes_through_unchanged() {
    assert_eq!(t(Lang::En, "no.such.key"), "no.such.key");
    assert_eq!(t(Lang::Es, "no.such.key"), "no.such.key");
}

#[test]
fn test_catalogs_cover_identical_key_sets() {
    let en: BTreeSet<&str> = entries(Lang::En).iter().map(|(k, _)| *k).collect();
    let es: BTreeSet<&str> = entries(Lang::Es).iter().map(|(k, _)| *k).collect();
    let only_en: Vec<_> = en.difference(&es).collect();
    let only_es: Vec<_> = es.difference(&en).collect();
    assert!(only_en.is_empty(), "missing Spanish entries: {:?}", only_en);
    assert!(only_es.is_empty(), "missing English entries: {:?}", only_es);
}

#[test]
fn test_toggling_is_stateless() {
    let before = t(Lang::En, "heroTitle");
    let _ = t(Lang::Es, "heroTitle");
    let after = t(Lang::En, "heroTitle");
    assert_eq!(before, after);
}

#[test]
fn test_form_labels_resolve_in_both_languages() {
    let en: BTreeSet<&str> = entries(Lang::En).iter().map(|(k, _)| *k).collect();
    for form in [&SCHEDULING_FORM, &CONTACT_FORM] {
        for field in form.fields {
            assert!(
                en.contains(field.label_key),
                "{} label {} missing from catalog",
                form.name,
                field.label_key
            );
            assert_ne!(
                t(Lang::En, field.label_key),
                t(Lang::Es, field.label_key),
                "{} should be translated",
                field.label_key
            );
        }
        for key in [
            form.title_key,
            form.submit_key,
            form.success_title_key,
            form.success_body_key,
            form.assist_key,
            form.another_key,
            form.toast_key,
        ] {
            assert!(en.contains(key), "{} missing from catalog", key);
        }
    }
}

#[test]
fn test_select_option_labels_resolve_or_pass_through() {
    for form in [&SCHEDULING_FORM, &CONTACT_FORM] {
        for field in form.fields {
            for option in field.options {
                let shown = t(Lang::Es, option.label_key);
                assert!(!shown.is_empty(), "{} renders blank", option.label_key);
            }
        }
    }
}
