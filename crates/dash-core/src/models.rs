use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One row of the source table as parsed: an unordered mapping from the
/// column name in the export to the raw cell text.
///
/// Column names are untrusted and vary across exports ("Event Name" vs
/// "eventName"); [`crate::schema::Field`] resolves them to the canonical
/// schema. A `RawRow` lives only for the duration of normalization.
pub type RawRow = HashMap<String, String>;

/// A single advertising campaign record in the canonical schema.
///
/// Constructed only during normalization, and only when the resolved event
/// name is non-empty after trimming; numeric fields default to zero when the
/// source cell is missing or unparseable. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Display name of the event/campaign. Non-empty; uniqueness is not
    /// enforced — duplicate names are distinct campaigns.
    pub event_name: String,
    /// Advertising spend as a currency-agnostic magnitude. Non-negative.
    pub ad_spend: f64,
    /// Number of tickets sold (conversions).
    pub tickets_sold: u64,
    /// Number of ad link clicks.
    pub link_clicks: u64,
}

impl EventRecord {
    /// Ad spend divided by tickets sold, or `0.0` when no tickets were sold.
    ///
    /// Never returns a non-finite value.
    pub fn cost_per_conversion(&self) -> f64 {
        if self.tickets_sold == 0 {
            0.0
        } else {
            self.ad_spend / self.tickets_sold as f64
        }
    }
}

/// An [`EventRecord`] together with its computed cost-per-conversion.
///
/// A pure projection: recomputed on demand, never stored independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedEventView {
    pub event_name: String,
    pub ad_spend: f64,
    pub tickets_sold: u64,
    pub link_clicks: u64,
    /// `ad_spend / tickets_sold`, `0.0` when `tickets_sold` is zero.
    pub cost_per_conversion: f64,
}

impl From<&EventRecord> for DerivedEventView {
    fn from(record: &EventRecord) -> Self {
        Self {
            event_name: record.event_name.clone(),
            ad_spend: record.ad_spend,
            tickets_sold: record.tickets_sold,
            link_clicks: record.link_clicks,
            cost_per_conversion: record.cost_per_conversion(),
        }
    }
}

/// Aggregate metrics over a full dataset of [`EventRecord`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    /// Sum of `ad_spend` across all records.
    pub total_ad_spend: f64,
    /// Sum of `tickets_sold` across all records.
    pub total_tickets_sold: u64,
    /// Sum of `link_clicks` across all records.
    pub total_link_clicks: u64,
    /// `total_ad_spend / total_tickets_sold`, `0.0` when no tickets were
    /// sold anywhere. Never NaN or infinite.
    pub average_cost_per_conversion: f64,
}
