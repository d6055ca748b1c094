use serde::{Deserialize, Deserializer, Serialize};

/// Aggregate seat counts for a flight, as delivered by the flights source.
/// Either field may be missing; the seat map generator normalizes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketSummary {
    #[serde(
        default,
        deserialize_with = "count_or_float",
        skip_serializing_if = "Option::is_none"
    )]
    pub total: Option<i64>,
    #[serde(
        default,
        deserialize_with = "count_or_float",
        skip_serializing_if = "Option::is_none"
    )]
    pub remaining: Option<i64>,
}

/// Seat counts arrive as JSON numbers; fractional ones are truncated.
fn count_or_float<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Count>::deserialize(deserializer)?.map(|count| match count {
        Count::Int(n) => n,
        Count::Float(f) => f as i64,
    }))
}

impl TicketSummary {
    pub fn new(total: i64, remaining: i64) -> Self {
        Self {
            total: Some(total),
            remaining: Some(remaining),
        }
    }

    /// Total seats clamped to zero, missing means zero.
    pub fn clamped_total(&self) -> i64 {
        self.total.unwrap_or(0).max(0)
    }

    /// Remaining seats clamped to `[0, total]`, missing means fully available.
    pub fn clamped_remaining(&self) -> i64 {
        let total = self.clamped_total();
        self.remaining.unwrap_or(total).min(total).max(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>, // RFC 3339
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickets: Option<TicketSummary>,
}
