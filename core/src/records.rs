//! The generated entity records.
//!
//! All records are immutable once produced, with one documented
//! exception: the box generator back-fills `ClientRecord::box_serial`
//! after boxes exist. Downstream generators never mutate anything else.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicianRecord {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: Uuid,
    pub agent_id: Uuid,
    /// Unset until the box generator runs; the one late-bound field.
    pub box_serial: Option<String>,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub client_id: Uuid,
    pub submitted_on: NaiveDate,
    pub status: String, // always "submitted"
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallationRecord {
    pub id: Uuid,
    pub submission_id: Uuid,
    pub planned_on: NaiveDate,
    /// Absent signals an unresolved installation; every generated
    /// installation currently resolves same-day or one business day late.
    pub completed_on: Option<NaiveDate>,
    pub called_on: NaiveDate,
}

/// One technician on an installation crew. Two rows per installation
/// in the normal case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewAssignment {
    pub installation_id: Uuid,
    pub technician_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxRecord {
    pub serial: String,
    pub client_id: Uuid,
    pub model: String,
    pub fabricated_on: NaiveDate,
    pub wifi_ssid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub id: Uuid,
    pub client_id: Uuid,
    pub plan_id: i64,
    /// Always the client's single installation, however many
    /// subscription periods run over it.
    pub installation_id: Uuid,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub duration_months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    Initial,
    Renewal,
}

impl PaymentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Renewal => "renewal",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: Uuid,
    pub client_id: Uuid,
    pub subscription_id: Option<Uuid>,
    /// Integer XOF. Fully determined by kind (initial fee) or by
    /// plan price x duration (renewal). Never randomized.
    pub amount: i64,
    pub kind: PaymentKind,
    pub paid_on: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub client_id: Uuid,
    pub installation_id: Uuid,
    pub product_score: i32,
    pub crew_score: i32,
    pub comment: Option<String>,
    pub submitted_on: NaiveDate,
}
