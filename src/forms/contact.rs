// SPDX-License-Identifier: PMPL-1.0-or-later

//! Contact message form definition.

use crate::forms::{FieldKind, FieldSpec, FormSpec};

pub static CONTACT_FORM: FormSpec = FormSpec {
    name: "contact",
    title_key: "sendMessageTitle",
    submit_key: "sendMessage",
    success_title_key: "messageSent",
    success_body_key: "messageSentBody",
    assist_key: "urgentMatters",
    another_key: "sendAnother",
    toast_key: "contactToast",
    fields: &[
        FieldSpec {
            id: "name",
            label_key: "name",
            kind: FieldKind::Text,
            required: true,
            placeholder_key: None,
            options: &[],
        },
        FieldSpec {
            id: "email",
            label_key: "email",
            kind: FieldKind::Email,
            required: true,
            placeholder_key: None,
            options: &[],
        },
        FieldSpec {
            id: "phone",
            label_key: "phone",
            kind: FieldKind::Tel,
            required: false,
            placeholder_key: None,
            options: &[],
        },
        FieldSpec {
            id: "subject",
            label_key: "subject",
            kind: FieldKind::Text,
            required: true,
            placeholder_key: Some("subjectPlaceholder"),
            options: &[],
        },
        FieldSpec {
            id: "message",
            label_key: "message",
            kind: FieldKind::TextArea,
            required: true,
            placeholder_key: Some("contactMessagePlaceholder"),
            options: &[],
        },
    ],
};
