// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lead hand-off boundary.
//!
//! A submitted form becomes a [`LeadRecord`] and goes through the
//! [`LeadTransport`] trait. The kiosk ships with [`SimulatedTransport`],
//! which accepts every lead and answers with a fixed acknowledgement
//! delay; a real dispatcher (HTTP, message queue, whatever the office
//! lands on) slots in behind the same trait without touching any screen.

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

/// Acknowledgement delay for the simulated transport.
pub const SIMULATED_ACK_DELAY: Duration = Duration::from_millis(1000);

/// A captured lead: which form it came from, when, and the field values.
#[derive(Debug, Clone, Serialize)]
pub struct LeadRecord {
    pub form: &'static str,
    pub captured_at: String,
    pub fields: BTreeMap<&'static str, String>,
}

impl LeadRecord {
    pub fn new(form: &'static str, fields: BTreeMap<&'static str, String>) -> Self {
        LeadRecord {
            form,
            captured_at: Utc::now().to_rfc3339(),
            fields,
        }
    }
}

/// Where submitted leads go.
///
/// `dispatch` hands off one record and returns how long the caller should
/// wait before treating the submission as acknowledged. Errors propagate
/// to the caller; the simulated implementation never produces one.
pub trait LeadTransport {
    fn dispatch(&mut self, record: &LeadRecord) -> Result<Duration>;
}

/// Transport that accepts every lead after a fixed delay.
///
/// No network, no disk. The record is written to the log so a demo run
/// leaves a trace of what was typed.
pub struct SimulatedTransport {
    delay: Duration,
    dispatched: usize,
}

impl SimulatedTransport {
    pub fn new() -> Self {
        Self::with_delay(SIMULATED_ACK_DELAY)
    }

    /// Zero-delay variant for demos and scripted runs (`--instant`).
    pub fn instant() -> Self {
        Self::with_delay(Duration::ZERO)
    }

    pub fn with_delay(delay: Duration) -> Self {
        SimulatedTransport {
            delay,
            dispatched: 0,
        }
    }

    pub fn dispatched(&self) -> usize {
        self.dispatched
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadTransport for SimulatedTransport {
    fn dispatch(&mut self, record: &LeadRecord) -> Result<Duration> {
        self.dispatched += 1;
        info!(
            "Captured {} lead #{} ({} fields)",
            record.form,
            self.dispatched,
            record.fields.len()
        );
        debug!("Lead payload: {}", serde_json::to_string(record)?);
        Ok(self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> LeadRecord {
        let mut fields = BTreeMap::new();
        fields.insert("name", "Rosa Elizondo".to_string());
        fields.insert("email", "rosa@example.com".to_string());
        LeadRecord::new("contact", fields)
    }

    #[test]
    fn simulated_transport_always_accepts() {
        let mut transport = SimulatedTransport::new();
        let delay = transport.dispatch(&sample_record()).unwrap();
        assert_eq!(delay, SIMULATED_ACK_DELAY);
        assert_eq!(transport.dispatched(), 1);
    }

    #[test]
    fn instant_transport_has_no_delay() {
        let mut transport = SimulatedTransport::instant();
        let delay = transport.dispatch(&sample_record()).unwrap();
        assert_eq!(delay, Duration::ZERO);
    }

    #[test]
    fn record_serializes_with_field_map() {
        let json = serde_json::to_string(&sample_record()).unwrap();
        assert!(json.contains("\"form\":\"contact\""));
        assert!(json.contains("\"name\":\"Rosa Elizondo\""));
        assert!(json.contains("captured_at"));
    }
}
