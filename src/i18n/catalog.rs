// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for the Pistolero Express kiosk.
//!
//! Embeds every user-facing string for both display languages as a
//! compile-time static table. Lookup is O(n) on the key list per language,
//! which is fine for the ~130 keys we have — resolution happens once per
//! rendered line, not in a hot loop.
//!
//! ## Lookup policy
//!
//! A key that is missing from the active language's catalog resolves to the
//! key string itself. The miss stays visible on screen instead of rendering
//! as a blank, so an untranslated key is caught the first time anyone looks
//! at the page. There is deliberately no second lookup in the other
//! language: a Spanish miss must not silently render English.
//!
//! ## Adding a language
//!
//! 1. Add a variant to [`Lang`]
//! 2. Add arms to `Lang::code()`, `Lang::from_code()`, `Lang::label()`,
//!    and `Lang::native_name()`
//! 3. Create a `const XX: &[(&str, &str)]` table below
//! 4. Add `Lang::Xx => XX` to the match in `catalog_for()`
//!
//! ## Adding a key
//!
//! Add the entry to both `EN` and `ES`. The key sets must stay identical;
//! the test suite compares them entry for entry.

use serde::{Deserialize, Serialize};

/// Supported display languages for the kiosk.
///
/// Each variant maps to an ISO 639-1 two-letter code. The enum backs the
/// CLI `--lang` flag, the in-kiosk language toggle, and the `strings`
/// catalog export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lang {
    En,
    Es,
}

impl Lang {
    /// ISO 639-1 two-letter code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    /// Parse an ISO 639-1 code into a supported language.
    ///
    /// Returns `None` for unsupported codes. Case-sensitive (codes must be
    /// lowercase per ISO 639-1).
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "es" => Some(Lang::Es),
            _ => None,
        }
    }

    /// All supported languages, in toggle display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Es]
    }

    /// Uppercase toggle label, as shown in the header switcher.
    pub fn label(&self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Es => "ES",
        }
    }

    /// Name of the language in the language itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Es => "Español",
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─── Translation Lookup ─────────────────────────────────────────────

/// Look up a translation key in the specified language.
///
/// If the key is missing from that language's catalog, the key itself is
/// returned unchanged. The lookup never panics, never returns empty text,
/// and never substitutes the other language's value.
///
/// # Examples
///
/// ```
/// use pistolero_kiosk::i18n::{t, Lang};
/// assert_eq!(t(Lang::En, "submit"), "Submit Request");
/// assert_eq!(t(Lang::Es, "submit"), "Enviar Solicitud");
/// assert_eq!(t(Lang::Es, "not.a.key"), "not.a.key");
/// ```
pub fn t<'a>(lang: Lang, key: &'a str) -> &'a str {
    match lookup(catalog_for(lang), key) {
        Some(value) => value,
        None => key,
    }
}

/// Full catalog table for one language, in source order.
///
/// Used by the `strings` export and by the completeness tests.
pub fn entries(lang: Lang) -> &'static [(&'static str, &'static str)] {
    catalog_for(lang)
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    for &(k, v) in catalog {
        if k == key {
            return Some(v);
        }
    }
    None
}

fn catalog_for(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Es => ES,
    }
}

// ─── English ────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    // Navigation
    ("home", "Home"),
    ("services", "Services"),
    ("scheduling", "Scheduling"),
    ("contact", "Contact"),
    // Brand
    ("tagline", "Professional Fuel Transportation"),
    // Hero section
    ("heroTitle", "Professional Fuel Transportation Across South Texas"),
    ("heroSubtitle", "Reliable tanker truck services connecting communities from Harlingen to Corpus Christi"),
    ("getQuote", "Get Quote"),
    ("callNow", "Call Now"),
    // Home about section
    ("aboutTitle", "Professional Excellence Since Day One"),
    ("aboutBody", "At Pistolero Express, we understand that fuel transportation is the backbone of Texas industry. Our experienced team delivers safe, reliable, and timely fuel transportation services across South Texas."),
    ("aboutPoint1", "Licensed and insured professionals"),
    ("aboutPoint2", "24/7 emergency services available"),
    ("aboutPoint3", "Modern fleet with latest safety equipment"),
    ("learnMore", "Learn More About Our Services"),
    // Home closing call to action
    ("ctaTitle", "Ready to Work Together?"),
    ("ctaBody", "Contact us today for reliable fuel transportation services across South Texas."),
    ("contactUs", "Contact Us"),
    // Services
    ("servicesTitle", "Our Services"),
    ("servicesSubtitle", "Comprehensive fuel transportation and logistics solutions tailored for South Texas businesses."),
    ("fuelTransport", "Fuel Transportation"),
    ("fuelTransportDesc", "Reliable gasoline and diesel delivery across South Texas with our modern tanker fleet."),
    ("fuelTransportFeature1", "Gasoline and diesel transport"),
    ("fuelTransportFeature2", "Licensed and insured drivers"),
    ("fuelTransportFeature3", "Real-time tracking"),
    ("fuelTransportFeature4", "Flexible scheduling"),
    ("contractHazmat", "Contract HAZMAT Fleet"),
    ("contractHazmatDesc", "Certified hazardous materials transportation with specialized equipment and trained drivers."),
    ("contractHazmatFeature1", "HAZMAT certified drivers"),
    ("contractHazmatFeature2", "DOT compliant vehicles"),
    ("contractHazmatFeature3", "Emergency response protocols"),
    ("contractHazmatFeature4", "Specialized safety equipment"),
    ("brokerageDelivery", "Brokerage & Delivery"),
    ("brokerageDeliveryDesc", "Strategic logistics coordination connecting suppliers with distributors throughout the region."),
    ("brokerageDeliveryFeature1", "Multi-point delivery coordination"),
    ("brokerageDeliveryFeature2", "Supply chain optimization"),
    ("brokerageDeliveryFeature3", "Route planning and scheduling"),
    ("brokerageDeliveryFeature4", "Real-time logistics tracking"),
    ("getQuoteService", "Get Quote for This Service"),
    ("additionalServicesTitle", "Additional Services"),
    ("additionalServicesDesc", "We offer a comprehensive range of support services to meet all your fuel transportation needs."),
    ("fuelMonitoring", "Fuel Monitoring"),
    ("fuelMonitoringDesc", "Real-time fuel level monitoring and automated inventory management systems."),
    ("equipmentMaintenance", "Equipment Maintenance"),
    ("equipmentMaintenanceDesc", "Professional maintenance and servicing for fuel storage tanks and equipment."),
    ("safetyComplianceTitle", "Safety & Compliance"),
    ("safetyComplianceDesc", "Safety is our top priority. We maintain the highest standards in fuel transportation with comprehensive safety protocols and regulatory compliance."),
    ("dotCertified", "DOT Certified"),
    ("dotCertifiedDesc", "Full Department of Transportation certification and compliance."),
    ("licensedDrivers", "Licensed Drivers"),
    ("licensedDriversDesc", "All drivers hold commercial licenses with hazmat endorsements."),
    ("insuranceCoverage", "Insurance Coverage"),
    ("insuranceCoverageDesc", "Comprehensive insurance protection for all operations."),
    ("readyToStart", "Ready to Get Started?"),
    ("readyToStartDesc", "Contact us today to discuss your fuel transportation needs and get a customized quote."),
    ("scheduleService", "Schedule Service"),
    // Service areas
    ("serviceAreasTitle", "Service Areas"),
    ("serviceAreasDesc", "We proudly serve communities throughout South Texas"),
    // Contact
    ("contactTitle", "Contact Us"),
    ("contactDesc", "Ready to work with you"),
    ("contactDescTail", "Professional fuel transportation across South Texas"),
    ("phone", "Phone"),
    ("whatsapp", "WhatsApp"),
    ("directions", "Directions"),
    ("quickMessaging", "Quick messaging"),
    ("getDirections", "Get directions"),
    ("sendMessageTitle", "Send Us a Message"),
    ("subject", "Subject"),
    ("subjectPlaceholder", "What can we help you with?"),
    ("contactMessagePlaceholder", "Please provide details about your inquiry..."),
    ("sendMessage", "Send Message"),
    ("messageSent", "Message Sent!"),
    ("messageSentBody", "Thank you for contacting Pistolero Express. We'll get back to you within 2 hours."),
    ("urgentMatters", "For urgent matters, call us at"),
    ("sendAnother", "Send Another Message"),
    ("contactToast", "Message sent successfully!"),
    ("businessHours", "Business Hours"),
    ("monFri", "Monday - Friday"),
    ("saturday", "Saturday"),
    ("sunday", "Sunday"),
    ("emergencyOnly", "Emergency Only"),
    ("emergencyAvailable", "Emergency services available 24/7"),
    ("servingTitle", "Serving South Texas"),
    ("servingBody", "From the Rio Grande Valley to the Gulf Coast, we're proud to serve communities across South Texas with reliable fuel transportation services."),
    ("emergencyCtaBody", "Need immediate fuel transportation assistance? We're available 24/7 for emergencies."),
    // Footer
    ("footerDesc", "Professional fuel transportation services across South Texas"),
    ("allRights", "All rights reserved"),
    ("tankCleaning", "Tank Cleaning"),
    ("emergency", "Emergency"),
    // Scheduling
    ("scheduleTitle", "Schedule Service"),
    ("scheduleDesc", "Request fuel transportation services"),
    ("scheduleDescTail", "We'll get back to you within 2 hours"),
    ("name", "Name"),
    ("email", "Email"),
    ("location", "Location"),
    ("serviceType", "Service Type"),
    ("message", "Message"),
    ("submit", "Submit Request"),
    ("company", "Company"),
    ("urgency", "Service Urgency"),
    ("preferredDate", "Preferred Date"),
    ("selectService", "Select a service"),
    ("selectArea", "Select service area"),
    ("selectUrgency", "Select urgency level"),
    ("schedulingMessagePlaceholder", "Please provide any additional details about your service requirements..."),
    ("urgencyStandard", "Standard (3-5 business days)"),
    ("urgencyUrgent", "Urgent (1-2 business days)"),
    ("urgencyEmergency", "Emergency (Same day)"),
    ("emergencyService", "Emergency Service"),
    ("fuelMonitoringSetup", "Fuel Monitoring Setup"),
    ("areaOther", "Other"),
    ("requestSubmitted", "Request Submitted!"),
    ("requestSubmittedBody", "Thank you for choosing Pistolero Express. We'll contact you within 2 hours to confirm your service request."),
    ("immediateAssistance", "For immediate assistance, call us at"),
    ("submitAnother", "Submit Another Request"),
    ("schedulingToast", "Service request submitted successfully!"),
    // Scheduling sidebar
    ("needHelp", "Need Immediate Help?"),
    ("whatsappQuick", "Quick response"),
    ("whatToExpect", "What to Expect"),
    ("quickResponse", "Quick Response"),
    ("quickResponseDesc", "We'll contact you within 2 hours"),
    ("customQuote", "Custom Quote"),
    ("customQuoteDesc", "Tailored pricing for your needs"),
    ("reliableService", "Reliable Service"),
    ("reliableServiceDesc", "Professional execution"),
    ("emergencyServices", "Emergency Services"),
    ("emergencyNotice", "For emergency fuel transportation needs, please call us directly for immediate assistance."),
    ("emergencyHotline", "Emergency Hotline"),
    // Form machinery
    ("requiredHint", "* required"),
    ("errRequired", "This field is required"),
    ("errEmail", "Enter a valid email address"),
    ("errDate", "Use YYYY-MM-DD for the date"),
    ("fixFieldsToast", "Please complete the highlighted fields"),
    // Kiosk chrome
    ("pressFormHint", "Press Enter to fill out the form"),
    ("helpBrowse", "1-4 pages · ←/→ cycle · ↑/↓ scroll · e/s language · Enter select · q quit"),
    ("helpForm", "Tab next field · Shift+Tab previous · ←/→ choose option · Enter submit · Esc leave form"),
    ("helpSubmitted", "Enter submit another · 1-4 pages · q quit"),
];

// ─── Spanish ────────────────────────────────────────────────────────

const ES: &[(&str, &str)] = &[
    // Navigation
    ("home", "Inicio"),
    ("services", "Servicios"),
    ("scheduling", "Programar"),
    ("contact", "Contacto"),
    // Brand
    ("tagline", "Transporte Profesional de Combustible"),
    // Hero section
    ("heroTitle", "Transporte Profesional de Combustible en el Sur de Texas"),
    ("heroSubtitle", "Servicios confiables de camiones cisterna conectando comunidades desde Harlingen hasta Corpus Christi"),
    ("getQuote", "Obtener Cotización"),
    ("callNow", "Llamar Ahora"),
    // Home about section
    ("aboutTitle", "Excelencia Profesional Desde el Primer Día"),
    ("aboutBody", "En Pistolero Express, entendemos que el transporte de combustible es la columna vertebral de la industria de Texas. Nuestro equipo experimentado ofrece servicios de transporte de combustible seguros, confiables y puntuales en todo el sur de Texas."),
    ("aboutPoint1", "Profesionales licenciados y asegurados"),
    ("aboutPoint2", "Servicios de emergencia disponibles 24/7"),
    ("aboutPoint3", "Flota moderna con el equipo de seguridad más reciente"),
    ("learnMore", "Conoce Más Sobre Nuestros Servicios"),
    // Home closing call to action
    ("ctaTitle", "¿Listos para Trabajar Juntos?"),
    ("ctaBody", "Contáctanos hoy para servicios confiables de transporte de combustible en el sur de Texas."),
    ("contactUs", "Contáctanos"),
    // Services
    ("servicesTitle", "Nuestros Servicios"),
    ("servicesSubtitle", "Soluciones integrales de transporte de combustible y logística adaptadas para empresas del sur de Texas."),
    ("fuelTransport", "Transporte de Combustible"),
    ("fuelTransportDesc", "Entrega confiable de gasolina y diesel en todo el sur de Texas con nuestra flota moderna de camiones cisterna."),
    ("fuelTransportFeature1", "Transporte de gasolina y diesel"),
    ("fuelTransportFeature2", "Conductores licenciados y asegurados"),
    ("fuelTransportFeature3", "Seguimiento en tiempo real"),
    ("fuelTransportFeature4", "Programación flexible"),
    ("contractHazmat", "Flota Contratada HAZMAT"),
    ("contractHazmatDesc", "Transporte certificado de materiales peligrosos con equipo especializado y conductores capacitados."),
    ("contractHazmatFeature1", "Conductores certificados HAZMAT"),
    ("contractHazmatFeature2", "Vehículos compatibles con DOT"),
    ("contractHazmatFeature3", "Protocolos de respuesta de emergencia"),
    ("contractHazmatFeature4", "Equipo de seguridad especializado"),
    ("brokerageDelivery", "Corretaje y Entrega"),
    ("brokerageDeliveryDesc", "Coordinación logística estratégica conectando proveedores con distribuidores en toda la región."),
    ("brokerageDeliveryFeature1", "Coordinación de entrega multipunto"),
    ("brokerageDeliveryFeature2", "Optimización de la cadena de suministro"),
    ("brokerageDeliveryFeature3", "Planificación de rutas y programación"),
    ("brokerageDeliveryFeature4", "Seguimiento logístico en tiempo real"),
    ("getQuoteService", "Obtener Cotización para Este Servicio"),
    ("additionalServicesTitle", "Servicios Adicionales"),
    ("additionalServicesDesc", "Ofrecemos una gama completa de servicios de apoyo para satisfacer todas sus necesidades de transporte de combustible."),
    ("fuelMonitoring", "Monitoreo de Combustible"),
    ("fuelMonitoringDesc", "Monitoreo en tiempo real del nivel de combustible y sistemas automatizados de gestión de inventario."),
    ("equipmentMaintenance", "Mantenimiento de Equipo"),
    ("equipmentMaintenanceDesc", "Mantenimiento y servicio profesional para tanques de almacenamiento de combustible y equipo."),
    ("safetyComplianceTitle", "Seguridad y Cumplimiento"),
    ("safetyComplianceDesc", "La seguridad es nuestra máxima prioridad. Mantenemos los más altos estándares en el transporte de combustible con protocolos de seguridad integrales y cumplimiento regulatorio."),
    ("dotCertified", "Certificado DOT"),
    ("dotCertifiedDesc", "Certificación y cumplimiento completo del Departamento de Transporte."),
    ("licensedDrivers", "Conductores Licenciados"),
    ("licensedDriversDesc", "Todos los conductores poseen licencias comerciales con endosos de materiales peligrosos."),
    ("insuranceCoverage", "Cobertura de Seguro"),
    ("insuranceCoverageDesc", "Protección de seguro integral para todas las operaciones."),
    ("readyToStart", "¿Listo para Comenzar?"),
    ("readyToStartDesc", "Contáctanos hoy para discutir tus necesidades de transporte de combustible y obtener una cotización personalizada."),
    ("scheduleService", "Programar Servicio"),
    // Service areas
    ("serviceAreasTitle", "Áreas de Servicio"),
    ("serviceAreasDesc", "Servimos con orgullo a las comunidades de todo el sur de Texas"),
    // Contact
    ("contactTitle", "Contáctanos"),
    ("contactDesc", "Listos para trabajar contigo"),
    ("contactDescTail", "Transporte profesional de combustible en el sur de Texas"),
    ("phone", "Teléfono"),
    ("whatsapp", "WhatsApp"),
    ("directions", "Direcciones"),
    ("quickMessaging", "Mensajería rápida"),
    ("getDirections", "Obtener direcciones"),
    ("sendMessageTitle", "Envíanos un Mensaje"),
    ("subject", "Asunto"),
    ("subjectPlaceholder", "¿En qué podemos ayudarte?"),
    ("contactMessagePlaceholder", "Proporciona detalles sobre tu consulta..."),
    ("sendMessage", "Enviar Mensaje"),
    ("messageSent", "¡Mensaje Enviado!"),
    ("messageSentBody", "Gracias por contactar a Pistolero Express. Te responderemos dentro de 2 horas."),
    ("urgentMatters", "Para asuntos urgentes, llámanos al"),
    ("sendAnother", "Enviar Otro Mensaje"),
    ("contactToast", "¡Mensaje enviado con éxito!"),
    ("businessHours", "Horario de Atención"),
    ("monFri", "Lunes - Viernes"),
    ("saturday", "Sábado"),
    ("sunday", "Domingo"),
    ("emergencyOnly", "Solo Emergencias"),
    ("emergencyAvailable", "Servicios de emergencia disponibles 24/7"),
    ("servingTitle", "Sirviendo al Sur de Texas"),
    ("servingBody", "Desde el Valle del Río Grande hasta la Costa del Golfo, nos enorgullece servir a las comunidades del sur de Texas con servicios confiables de transporte de combustible."),
    ("emergencyCtaBody", "¿Necesitas asistencia inmediata de transporte de combustible? Estamos disponibles 24/7 para emergencias."),
    // Footer
    ("footerDesc", "Servicios profesionales de transporte de combustible en todo el sur de Texas"),
    ("allRights", "Todos los derechos reservados"),
    ("tankCleaning", "Limpieza de Tanques"),
    ("emergency", "Emergencia"),
    // Scheduling
    ("scheduleTitle", "Programar Servicio"),
    ("scheduleDesc", "Solicitar servicios de transporte de combustible"),
    ("scheduleDescTail", "Te responderemos dentro de 2 horas"),
    ("name", "Nombre"),
    ("email", "Correo Electrónico"),
    ("location", "Ubicación"),
    ("serviceType", "Tipo de Servicio"),
    ("message", "Mensaje"),
    ("submit", "Enviar Solicitud"),
    ("company", "Empresa"),
    ("urgency", "Urgencia del Servicio"),
    ("preferredDate", "Fecha Preferida"),
    ("selectService", "Selecciona un servicio"),
    ("selectArea", "Selecciona el área de servicio"),
    ("selectUrgency", "Selecciona el nivel de urgencia"),
    ("schedulingMessagePlaceholder", "Proporciona cualquier detalle adicional sobre tus requisitos de servicio..."),
    ("urgencyStandard", "Estándar (3-5 días hábiles)"),
    ("urgencyUrgent", "Urgente (1-2 días hábiles)"),
    ("urgencyEmergency", "Emergencia (Mismo día)"),
    ("emergencyService", "Servicio de Emergencia"),
    ("fuelMonitoringSetup", "Instalación de Monitoreo de Combustible"),
    ("areaOther", "Otra"),
    ("requestSubmitted", "¡Solicitud Enviada!"),
    ("requestSubmittedBody", "Gracias por elegir Pistolero Express. Te contactaremos dentro de 2 horas para confirmar tu solicitud de servicio."),
    ("immediateAssistance", "Para asistencia inmediata, llámanos al"),
    ("submitAnother", "Enviar Otra Solicitud"),
    ("schedulingToast", "¡Solicitud de servicio enviada con éxito!"),
    // Scheduling sidebar
    ("needHelp", "¿Necesitas Ayuda Inmediata?"),
    ("whatsappQuick", "Respuesta rápida"),
    ("whatToExpect", "Qué Esperar"),
    ("quickResponse", "Respuesta Rápida"),
    ("quickResponseDesc", "Te contactaremos dentro de 2 horas"),
    ("customQuote", "Cotización Personalizada"),
    ("customQuoteDesc", "Precios adaptados a tus necesidades"),
    ("reliableService", "Servicio Confiable"),
    ("reliableServiceDesc", "Ejecución profesional"),
    ("emergencyServices", "Servicios de Emergencia"),
    ("emergencyNotice", "Para necesidades de transporte de combustible de emergencia, llámanos directamente para asistencia inmediata."),
    ("emergencyHotline", "Línea de Emergencia"),
    // Form machinery
    ("requiredHint", "* obligatorio"),
    ("errRequired", "Este campo es obligatorio"),
    ("errEmail", "Ingresa un correo electrónico válido"),
    ("errDate", "Usa AAAA-MM-DD para la fecha"),
    ("fixFieldsToast", "Por favor completa los campos resaltados"),
    // Kiosk chrome
    ("pressFormHint", "Presiona Enter para llenar el formulario"),
    ("helpBrowse", "1-4 páginas · ←/→ cambiar · ↑/↓ desplazar · e/s idioma · Enter seleccionar · q salir"),
    ("helpForm", "Tab siguiente campo · Shift+Tab anterior · ←/→ elegir opción · Enter enviar · Esc salir"),
    ("helpSubmitted", "Enter enviar otra · 1-4 páginas · q salir"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn english_keys_all_resolve() {
        for &(key, value) in EN {
            assert_eq!(t(Lang::En, key), value, "EN key '{}' should resolve", key);
        }
    }

    #[test]
    fn spanish_keys_all_resolve() {
        for &(key, value) in ES {
            assert_eq!(t(Lang::Es, key), value, "ES key '{}' should resolve", key);
        }
    }

    #[test]
    fn known_pairs_match_site_copy() {
        assert_eq!(t(Lang::Es, "submit"), "Enviar Solicitud");
        assert_eq!(
            t(Lang::En, "heroTitle"),
            "Professional Fuel Transportation Across South Texas"
        );
        assert_eq!(t(Lang::Es, "scheduling"), "Programar");
    }

    #[test]
    fn unknown_key_returns_key() {
        assert_eq!(t(Lang::En, "nonexistent.key"), "nonexistent.key");
        assert_eq!(t(Lang::Es, "nonexistent.key"), "nonexistent.key");
    }

    #[test]
    fn no_cross_language_substitution() {
        // Both catalogs define the same keys, so fabricate the miss against
        // the raw lookup helper: a miss must surface the key itself, never
        // the other language's text.
        assert!(lookup(ES, "definitely-missing").is_none());
        assert_eq!(t(Lang::Es, "definitely-missing"), "definitely-missing");
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            let code = lang.code();
            let parsed = Lang::from_code(code).expect("should parse");
            assert_eq!(*lang, parsed);
        }
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code("EN"), None);
    }

    #[test]
    fn catalogs_define_identical_key_sets() {
        let en_keys: BTreeSet<&str> = EN.iter().map(|&(k, _)| k).collect();
        let es_keys: BTreeSet<&str> = ES.iter().map(|&(k, _)| k).collect();
        assert_eq!(en_keys.len(), EN.len(), "duplicate key in EN catalog");
        assert_eq!(es_keys.len(), ES.len(), "duplicate key in ES catalog");
        assert_eq!(en_keys, es_keys, "EN and ES catalogs diverge");
    }

    #[test]
    fn reading_other_language_does_not_disturb_lookup() {
        for &(key, en_value) in EN {
            let _ = t(Lang::Es, key);
            assert_eq!(t(Lang::En, key), en_value, "key '{}' changed after toggle", key);
        }
    }
}
