//! Record builders shared by unit and router tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crate::models::{Activity, Member, PublicBloodRequest, StaffBloodRequest};

pub fn member(name: &str, blood_group: &str) -> Member {
    Member {
        id: Uuid::new_v4(),
        name: name.to_string(),
        blood_group: blood_group.to_string(),
        phone: "0712345678".to_string(),
        email: format!("{}@example.org", name.to_lowercase()),
        registered_at: Utc.with_ymd_and_hms(2025, 1, 10, 9, 30, 0).unwrap(),
        date_of_birth: None,
        profile_picture_url: None,
    }
}

pub fn member_born(name: &str, blood_group: &str, born: NaiveDate) -> Member {
    Member {
        date_of_birth: Some(born),
        ..member(name, blood_group)
    }
}

pub fn activity(title: &str, date: NaiveDate) -> Activity {
    Activity {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: None,
        date,
        location: Some("Community Hall".to_string()),
        time: None,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap(),
    }
}

pub fn staff(patient: &str, at: DateTime<Utc>) -> StaffBloodRequest {
    StaffBloodRequest {
        id: Uuid::new_v4(),
        patient_name: patient.to_string(),
        blood_group: "A+".to_string(),
        hospital: "Mercy Hospital".to_string(),
        contact_name: "Dispatch".to_string(),
        contact_phone: "0711000000".to_string(),
        urgency: "High".to_string(),
        created_at: at,
    }
}

pub fn public(patient: &str, at: DateTime<Utc>) -> PublicBloodRequest {
    PublicBloodRequest {
        id: Uuid::new_v4(),
        requester_name: "Relative".to_string(),
        requester_phone: "0722000000".to_string(),
        requester_email: "relative@example.org".to_string(),
        patient_name: patient.to_string(),
        blood_group: "O-".to_string(),
        hospital: "County Referral".to_string(),
        urgency: "Critical".to_string(),
        additional_notes: Some("Theatre at 14:00".to_string()),
        created_at: at,
    }
}
