// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for the `strings` catalog export.
//!
//! Translators review the catalog outside the kiosk. `pistolero strings
//! --lang es --format yaml` hands them the full table in one file; the
//! key order is sorted so diffs between revisions stay stable.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::i18n::{entries, Lang};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            CatalogFormat::Json => "json",
            CatalogFormat::Yaml => "yaml",
        }
    }

    pub fn serialize(&self, export: &CatalogExport) -> Result<String> {
        match self {
            CatalogFormat::Json => Ok(serde_json::to_string_pretty(export)?),
            CatalogFormat::Yaml => Ok(serde_yaml::to_string(export)?),
        }
    }
}

/// One language's catalog, shaped for serialization.
#[derive(Debug, Serialize)]
pub struct CatalogExport {
    pub language: &'static str,
    pub native_name: &'static str,
    pub key_count: usize,
    pub strings: BTreeMap<&'static str, &'static str>,
}

impl CatalogExport {
    pub fn for_lang(lang: Lang) -> Self {
        let strings: BTreeMap<&'static str, &'static str> =
            entries(lang).iter().copied().collect();
        CatalogExport {
            language: lang.code(),
            native_name: lang.native_name(),
            key_count: strings.len(),
            strings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_carries_every_entry() {
        for &lang in Lang::all() {
            let export = CatalogExport::for_lang(lang);
            assert_eq!(export.key_count, entries(lang).len());
            assert_eq!(export.language, lang.code());
        }
    }

    #[test]
    fn json_serialization_contains_known_string() {
        let export = CatalogExport::for_lang(Lang::Es);
        let json = CatalogFormat::Json.serialize(&export).unwrap();
        assert!(json.contains("Enviar Solicitud"));
        assert!(json.contains("\"language\": \"es\""));
    }

    #[test]
    fn yaml_serialization_contains_known_string() {
        let export = CatalogExport::for_lang(Lang::En);
        let yaml = CatalogFormat::Yaml.serialize(&export).unwrap();
        assert!(yaml.contains("Submit Request"));
        assert!(yaml.contains("language: en"));
    }

    #[test]
    fn extension_matches_format() {
        assert_eq!(CatalogFormat::Json.extension(), "json");
        assert_eq!(CatalogFormat::Yaml.extension(), "yaml");
    }
}
