use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub blood_group: String,
    pub phone: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_picture_url: Option<String>,
}

/// Public registration payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMember {
    pub name: String,
    pub blood_group: String,
    pub phone: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_picture_url: Option<String>,
}

/// The fields an admin may change on an existing member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberChanges {
    pub name: String,
    pub blood_group: String,
    pub phone: String,
    pub email: String,
}

/// Partial update as submitted by the dashboard; absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub blood_group: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Member {
    pub fn apply(&mut self, changes: &MemberChanges) {
        self.name = changes.name.clone();
        self.blood_group = changes.blood_group.clone();
        self.phone = changes.phone.clone();
        self.email = changes.email.clone();
    }
}
