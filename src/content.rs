// SPDX-License-Identifier: PMPL-1.0-or-later

//! Business facts behind the kiosk pages.
//!
//! Everything a page renders comes from two places: the translation catalog
//! (prose, in [`crate::i18n`]) and this module (structure). Entries here
//! reference catalog keys rather than carrying prose, so a page edit is a
//! data edit and the screens stay dumb.
//!
//! Literal values that have no translation dimension (phone numbers, city
//! names, clock times, URIs) are stored verbatim.

/// Company identity and contact endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Company {
    pub name: &'static str,
    pub phone_display: &'static str,
    pub phone_uri: &'static str,
    pub whatsapp_uri: &'static str,
    pub email: &'static str,
    pub maps_uri: &'static str,
    pub region: &'static str,
    pub copyright_year: u16,
}

pub const COMPANY: Company = Company {
    name: "Pistolero Express",
    phone_display: "(555) 123-4567",
    phone_uri: "tel:+15551234567",
    whatsapp_uri: "https://wa.me/15551234567",
    email: "info@pistoleroexpress.com",
    maps_uri: "https://maps.google.com",
    region: "South Texas",
    copyright_year: 2025,
};

/// A city the company serves, with road distance from the Harlingen yard.
#[derive(Debug, Clone, Copy)]
pub struct ServiceArea {
    pub name: &'static str,
    pub distance: &'static str,
}

pub const SERVICE_AREAS: [ServiceArea; 6] = [
    ServiceArea { name: "Harlingen", distance: "0 miles" },
    ServiceArea { name: "McAllen", distance: "25 miles" },
    ServiceArea { name: "Laredo", distance: "120 miles" },
    ServiceArea { name: "Eagle Pass", distance: "150 miles" },
    ServiceArea { name: "Del Rio", distance: "180 miles" },
    ServiceArea { name: "Corpus Christi", distance: "90 miles" },
];

/// One of the three flagship service lines, with its feature bullets.
#[derive(Debug, Clone, Copy)]
pub struct ServiceOffering {
    pub title_key: &'static str,
    pub desc_key: &'static str,
    pub feature_keys: [&'static str; 4],
}

pub const MAIN_SERVICES: [ServiceOffering; 3] = [
    ServiceOffering {
        title_key: "fuelTransport",
        desc_key: "fuelTransportDesc",
        feature_keys: [
            "fuelTransportFeature1",
            "fuelTransportFeature2",
            "fuelTransportFeature3",
            "fuelTransportFeature4",
        ],
    },
    ServiceOffering {
        title_key: "contractHazmat",
        desc_key: "contractHazmatDesc",
        feature_keys: [
            "contractHazmatFeature1",
            "contractHazmatFeature2",
            "contractHazmatFeature3",
            "contractHazmatFeature4",
        ],
    },
    ServiceOffering {
        title_key: "brokerageDelivery",
        desc_key: "brokerageDeliveryDesc",
        feature_keys: [
            "brokerageDeliveryFeature1",
            "brokerageDeliveryFeature2",
            "brokerageDeliveryFeature3",
            "brokerageDeliveryFeature4",
        ],
    },
];

/// Title/description pair used by several card grids.
#[derive(Debug, Clone, Copy)]
pub struct InfoItem {
    pub title_key: &'static str,
    pub desc_key: &'static str,
}

pub const ADDITIONAL_SERVICES: [InfoItem; 2] = [
    InfoItem { title_key: "fuelMonitoring", desc_key: "fuelMonitoringDesc" },
    InfoItem { title_key: "equipmentMaintenance", desc_key: "equipmentMaintenanceDesc" },
];

pub const SAFETY_POINTS: [InfoItem; 3] = [
    InfoItem { title_key: "dotCertified", desc_key: "dotCertifiedDesc" },
    InfoItem { title_key: "licensedDrivers", desc_key: "licensedDriversDesc" },
    InfoItem { title_key: "insuranceCoverage", desc_key: "insuranceCoverageDesc" },
];

/// Numbered "what happens after you submit" steps on the scheduling page.
pub const EXPECTATIONS: [InfoItem; 3] = [
    InfoItem { title_key: "quickResponse", desc_key: "quickResponseDesc" },
    InfoItem { title_key: "customQuote", desc_key: "customQuoteDesc" },
    InfoItem { title_key: "reliableService", desc_key: "reliableServiceDesc" },
];

/// One way to reach the company, shown as a card row on the contact page.
///
/// `value_key` goes through the catalog; literal values (the phone number,
/// the email address) are not catalog keys and pass through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct ContactMethod {
    pub title_key: &'static str,
    pub value_key: &'static str,
    pub href: &'static str,
}

pub const CONTACT_METHODS: [ContactMethod; 4] = [
    ContactMethod {
        title_key: "phone",
        value_key: "(555) 123-4567",
        href: "tel:+15551234567",
    },
    ContactMethod {
        title_key: "whatsapp",
        value_key: "quickMessaging",
        href: "https://wa.me/15551234567",
    },
    ContactMethod {
        title_key: "email",
        value_key: "info@pistoleroexpress.com",
        href: "mailto:info@pistoleroexpress.com",
    },
    ContactMethod {
        title_key: "directions",
        value_key: "getDirections",
        href: "https://maps.google.com",
    },
];

/// Opening hours row. `hours_key` goes through the catalog like
/// [`ContactMethod::value_key`]; clock ranges are not keys and render
/// unchanged.
#[derive(Debug, Clone, Copy)]
pub struct HoursRow {
    pub label_key: &'static str,
    pub hours_key: &'static str,
}

pub const BUSINESS_HOURS: [HoursRow; 3] = [
    HoursRow { label_key: "monFri", hours_key: "7:00 AM - 7:00 PM" },
    HoursRow { label_key: "saturday", hours_key: "8:00 AM - 5:00 PM" },
    HoursRow { label_key: "sunday", hours_key: "emergencyOnly" },
];

/// Service links listed in the site footer.
pub const FOOTER_SERVICE_KEYS: [&str; 3] = ["fuelTransport", "tankCleaning", "emergency"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{entries, Lang};
    use std::collections::BTreeSet;

    fn key_set(lang: Lang) -> BTreeSet<&'static str> {
        entries(lang).iter().map(|&(k, _)| k).collect()
    }

    #[test]
    fn referenced_keys_exist_in_both_catalogs() {
        let mut referenced: Vec<&str> = Vec::new();
        for svc in &MAIN_SERVICES {
            referenced.push(svc.title_key);
            referenced.push(svc.desc_key);
            referenced.extend(svc.feature_keys);
        }
        for item in ADDITIONAL_SERVICES
            .iter()
            .chain(&SAFETY_POINTS)
            .chain(&EXPECTATIONS)
        {
            referenced.push(item.title_key);
            referenced.push(item.desc_key);
        }
        for method in &CONTACT_METHODS {
            referenced.push(method.title_key);
        }
        for row in &BUSINESS_HOURS {
            referenced.push(row.label_key);
        }
        referenced.extend(FOOTER_SERVICE_KEYS);

        for &lang in Lang::all() {
            let keys = key_set(lang);
            for key in &referenced {
                assert!(keys.contains(key), "{} missing from {:?} catalog", key, lang);
            }
        }
    }

    #[test]
    fn six_cities_with_harlingen_home_base() {
        assert_eq!(SERVICE_AREAS.len(), 6);
        assert_eq!(SERVICE_AREAS[0].name, "Harlingen");
        assert_eq!(SERVICE_AREAS[0].distance, "0 miles");
    }

    #[test]
    fn contact_endpoints_are_consistent() {
        assert!(COMPANY.phone_uri.ends_with("15551234567"));
        assert!(COMPANY.whatsapp_uri.ends_with("15551234567"));
        assert_eq!(CONTACT_METHODS[0].href, COMPANY.phone_uri);
        assert_eq!(CONTACT_METHODS[2].value_key, COMPANY.email);
    }
}
