use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Request entered by staff from the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct StaffBloodRequest {
    pub id: Uuid,
    pub patient_name: String,
    pub blood_group: String,
    pub hospital: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub urgency: String,
    pub created_at: DateTime<Utc>,
}

/// Request submitted through the public form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PublicBloodRequest {
    pub id: Uuid,
    pub requester_name: String,
    pub requester_phone: String,
    pub requester_email: String,
    pub patient_name: String,
    pub blood_group: String,
    pub hospital: String,
    pub urgency: String,
    pub additional_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewStaffRequest {
    pub patient_name: String,
    pub blood_group: String,
    pub hospital: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub urgency: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPublicRequest {
    pub requester_name: String,
    pub requester_phone: String,
    #[serde(default)]
    pub requester_email: String,
    pub patient_name: String,
    pub blood_group: String,
    pub hospital: String,
    pub urgency: String,
    pub additional_notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestOrigin {
    Staff,
    Public,
}

/// Either request variant, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum BloodRequest {
    Staff(StaffBloodRequest),
    Public(PublicBloodRequest),
}

/// Canonical display shape shared by both request variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodRequestView {
    pub id: Uuid,
    pub origin: RequestOrigin,
    pub patient_name: String,
    pub blood_group: String,
    pub hospital: String,
    pub urgency: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl BloodRequest {
    pub fn origin(&self) -> RequestOrigin {
        match self {
            BloodRequest::Staff(_) => RequestOrigin::Staff,
            BloodRequest::Public(_) => RequestOrigin::Public,
        }
    }

    pub fn normalize(self) -> BloodRequestView {
        let origin = self.origin();
        match self {
            BloodRequest::Staff(r) => BloodRequestView {
                id: r.id,
                origin,
                patient_name: r.patient_name,
                blood_group: r.blood_group,
                hospital: r.hospital,
                urgency: r.urgency,
                contact_name: r.contact_name,
                contact_phone: r.contact_phone,
                contact_email: None,
                notes: None,
                created_at: r.created_at,
            },
            BloodRequest::Public(r) => BloodRequestView {
                id: r.id,
                origin,
                patient_name: r.patient_name,
                blood_group: r.blood_group,
                hospital: r.hospital,
                urgency: r.urgency,
                contact_name: r.requester_name,
                contact_phone: r.requester_phone,
                contact_email: Some(r.requester_email).filter(|e| !e.is_empty()),
                notes: r.additional_notes.filter(|n| !n.trim().is_empty()),
                created_at: r.created_at,
            },
        }
    }
}

impl From<StaffBloodRequest> for BloodRequest {
    fn from(r: StaffBloodRequest) -> Self {
        BloodRequest::Staff(r)
    }
}

impl From<PublicBloodRequest> for BloodRequest {
    fn from(r: PublicBloodRequest) -> Self {
        BloodRequest::Public(r)
    }
}
