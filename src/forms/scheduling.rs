// SPDX-License-Identifier: PMPL-1.0-or-later

//! Scheduling request form definition.

use crate::forms::{FieldKind, FieldSpec, FormSpec, SelectOption};

const SERVICE_TYPE_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "Fuel Transportation", label_key: "fuelTransport" },
    SelectOption { value: "Tank Cleaning", label_key: "tankCleaning" },
    SelectOption { value: "Emergency Service", label_key: "emergencyService" },
    SelectOption { value: "Equipment Maintenance", label_key: "equipmentMaintenance" },
    SelectOption { value: "Fuel Monitoring Setup", label_key: "fuelMonitoringSetup" },
];

// City names pass through the catalog unchanged; "Other" localizes.
const AREA_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "Harlingen", label_key: "Harlingen" },
    SelectOption { value: "McAllen", label_key: "McAllen" },
    SelectOption { value: "Laredo", label_key: "Laredo" },
    SelectOption { value: "Eagle Pass", label_key: "Eagle Pass" },
    SelectOption { value: "Del Rio", label_key: "Del Rio" },
    SelectOption { value: "Corpus Christi", label_key: "Corpus Christi" },
    SelectOption { value: "Other", label_key: "areaOther" },
];

const URGENCY_OPTIONS: &[SelectOption] = &[
    SelectOption { value: "standard", label_key: "urgencyStandard" },
    SelectOption { value: "urgent", label_key: "urgencyUrgent" },
    SelectOption { value: "emergency", label_key: "urgencyEmergency" },
];

pub static SCHEDULING_FORM: FormSpec = FormSpec {
    name: "scheduling",
    title_key: "scheduleTitle",
    submit_key: "submit",
    success_title_key: "requestSubmitted",
    success_body_key: "requestSubmittedBody",
    assist_key: "immediateAssistance",
    another_key: "submitAnother",
    toast_key: "schedulingToast",
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
            required: true,
            placeholder_key: None,
            options: &[],
        },
        FieldSpec {
            id: "company",
            label_key: "company",
            kind: FieldKind::Text,
            required: false,
            placeholder_key: None,
            options: &[],
        },
        FieldSpec {
            id: "serviceType",
            label_key: "serviceType",
            kind: FieldKind::Select,
            required: true,
            placeholder_key: Some("selectService"),
            options: SERVICE_TYPE_OPTIONS,
        },
        FieldSpec {
            id: "location",
            label_key: "location",
            kind: FieldKind::Select,
            required: true,
            placeholder_key: Some("selectArea"),
            options: AREA_OPTIONS,
        },
        FieldSpec {
            id: "urgency",
            label_key: "urgency",
            kind: FieldKind::Select,
            required: true,
            placeholder_key: Some("selectUrgency"),
            options: URGENCY_OPTIONS,
        },
        FieldSpec {
            id: "preferredDate",
            label_key: "preferredDate",
            kind: FieldKind::Date,
            required: false,
            placeholder_key: None,
            options: &[],
        },
        FieldSpec {
            id: "message",
            label_key: "message",
            kind: FieldKind::TextArea,
            required: false,
            placeholder_key: Some("schedulingMessagePlaceholder"),
            options: &[],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SERVICE_AREAS;

    #[test]
    fn area_options_track_served_cities() {
        assert_eq!(AREA_OPTIONS.len(), SERVICE_AREAS.len() + 1);
        for (option, area) in AREA_OPTIONS.iter().zip(&SERVICE_AREAS) {
            assert_eq!(option.value, area.name);
        }
        assert_eq!(AREA_OPTIONS.last().unwrap().label_key, "areaOther");
    }

    #[test]
    fn urgency_values_are_stable_identifiers() {
        let values: Vec<&str> = URGENCY_OPTIONS.iter().map(|o| o.value).collect();
        assert_eq!(values, ["standard", "urgent", "emergency"]);
    }

    #[test]
    fn required_fields_match_the_request_form() {
        let required: Vec<&str> = SCHEDULING_FORM
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.id)
            .collect();
        assert_eq!(
            required,
            ["name", "email", "phone", "serviceType", "location", "urgency"]
        );
    }
}
