//! Input checks for the public forms and the admin dashboard forms.
//!
//! Each function trims text fields, rejects missing required ones and
//! returns the cleaned payload ready for the store.

use crate::models::{
    BloodType, MemberChanges, NewActivity, NewMember, NewPublicRequest, NewStaffRequest, Urgency,
};
use crate::utils::{AppError, AppResult};

fn required(field: &'static str, value: &str, missing: &mut Vec<&'static str>) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        missing.push(field);
    }
    trimmed.to_string()
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_missing(missing: Vec<&'static str>) -> AppResult<()> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::ValidationError(format!(
            "Please fill in required fields: {}",
            missing.join(", ")
        )))
    }
}

fn check_blood_group(value: &str) -> AppResult<()> {
    value
        .parse::<BloodType>()
        .map(|_| ())
        .map_err(|e| AppError::ValidationError(e.to_string()))
}

fn check_urgency(value: &str) -> AppResult<()> {
    value
        .parse::<Urgency>()
        .map(|_| ())
        .map_err(AppError::ValidationError)
}

fn check_email(value: &str) -> AppResult<()> {
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(AppError::ValidationError(format!(
            "'{}' is not a valid email address",
            value
        ))),
    }
}

pub fn validate_new_member(input: NewMember) -> AppResult<NewMember> {
    let mut missing = Vec::new();
    let member = NewMember {
        name: required("name", &input.name, &mut missing),
        blood_group: required("blood_group", &input.blood_group, &mut missing),
        phone: required("phone", &input.phone, &mut missing),
        email: required("email", &input.email, &mut missing),
        date_of_birth: input.date_of_birth,
        profile_picture_url: optional(input.profile_picture_url),
    };
    if member.date_of_birth.is_none() {
        missing.push("date_of_birth");
    }
    check_missing(missing)?;
    check_blood_group(&member.blood_group)?;
    check_email(&member.email)?;
    Ok(member)
}

pub fn validate_member_changes(input: MemberChanges) -> AppResult<MemberChanges> {
    let mut missing = Vec::new();
    let changes = MemberChanges {
        name: required("name", &input.name, &mut missing),
        blood_group: required("blood_group", &input.blood_group, &mut missing),
        phone: required("phone", &input.phone, &mut missing),
        email: required("email", &input.email, &mut missing),
    };
    check_missing(missing)?;
    check_blood_group(&changes.blood_group)?;
    check_email(&changes.email)?;
    Ok(changes)
}

pub fn validate_staff_request(input: NewStaffRequest) -> AppResult<NewStaffRequest> {
    let mut missing = Vec::new();
    let request = NewStaffRequest {
        patient_name: required("patient_name", &input.patient_name, &mut missing),
        blood_group: required("blood_group", &input.blood_group, &mut missing),
        hospital: required("hospital", &input.hospital, &mut missing),
        contact_name: required("contact_name", &input.contact_name, &mut missing),
        contact_phone: required("contact_phone", &input.contact_phone, &mut missing),
        urgency: required("urgency", &input.urgency, &mut missing),
    };
    check_missing(missing)?;
    check_blood_group(&request.blood_group)?;
    check_urgency(&request.urgency)?;
    Ok(request)
}

pub fn validate_public_request(input: NewPublicRequest) -> AppResult<NewPublicRequest> {
    let mut missing = Vec::new();
    let request = NewPublicRequest {
        requester_name: required("requester_name", &input.requester_name, &mut missing),
        requester_phone: required("requester_phone", &input.requester_phone, &mut missing),
        requester_email: input.requester_email.trim().to_string(),
        patient_name: required("patient_name", &input.patient_name, &mut missing),
        blood_group: required("blood_group", &input.blood_group, &mut missing),
        hospital: required("hospital", &input.hospital, &mut missing),
        urgency: required("urgency", &input.urgency, &mut missing),
        additional_notes: optional(input.additional_notes),
    };
    check_missing(missing)?;
    check_blood_group(&request.blood_group)?;
    check_urgency(&request.urgency)?;
    if !request.requester_email.is_empty() {
        check_email(&request.requester_email)?;
    }
    Ok(request)
}

pub fn validate_new_activity(input: NewActivity) -> AppResult<NewActivity> {
    let mut missing = Vec::new();
    let activity = NewActivity {
        title: required("title", &input.title, &mut missing),
        description: optional(input.description),
        date: input.date,
        location: optional(input.location),
        time: optional(input.time),
    };
    if activity.date.is_none() {
        missing.push("date");
    }
    check_missing(missing)?;
    Ok(activity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn registration() -> NewMember {
        NewMember {
            name: "  Asha Otieno ".to_string(),
            blood_group: "O-".to_string(),
            phone: "0712345678".to_string(),
            email: "asha@example.org".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1994, 8, 2),
            profile_picture_url: Some(String::new()),
        }
    }

    #[test]
    fn test_registration_is_trimmed() {
        let member = validate_new_member(registration()).unwrap();
        assert_eq!(member.name, "Asha Otieno");
        assert_eq!(member.profile_picture_url, None);
    }

    #[test]
    fn test_registration_requires_birth_date() {
        let input = NewMember {
            date_of_birth: None,
            ..registration()
        };
        let err = validate_new_member(input).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(msg) if msg.contains("date_of_birth")));
    }

    #[test]
    fn test_registration_rejects_unknown_blood_group() {
        let input = NewMember {
            blood_group: "O".to_string(),
            ..registration()
        };
        assert!(validate_new_member(input).is_err());
    }

    #[test]
    fn test_registration_rejects_bad_email() {
        let input = NewMember {
            email: "asha.example.org".to_string(),
            ..registration()
        };
        assert!(validate_new_member(input).is_err());
    }

    #[test]
    fn test_staff_request_lists_every_missing_field() {
        let err = validate_staff_request(NewStaffRequest::default()).unwrap_err();
        let AppError::ValidationError(msg) = err else {
            panic!("expected validation error");
        };
        for field in ["patient_name", "blood_group", "hospital", "contact_name", "contact_phone", "urgency"] {
            assert!(msg.contains(field), "{} missing from '{}'", field, msg);
        }
    }

    #[test]
    fn test_public_request_email_is_optional() {
        let request = validate_public_request(NewPublicRequest {
            requester_name: "Relative".to_string(),
            requester_phone: "0722000000".to_string(),
            requester_email: String::new(),
            patient_name: "Yusuf".to_string(),
            blood_group: "B+".to_string(),
            hospital: "County Referral".to_string(),
            urgency: "Medium".to_string(),
            additional_notes: Some("   ".to_string()),
        })
        .unwrap();
        assert_eq!(request.requester_email, "");
        assert_eq!(request.additional_notes, None);
    }

    #[test]
    fn test_public_request_rejects_unknown_urgency() {
        let result = validate_public_request(NewPublicRequest {
            requester_name: "Relative".to_string(),
            requester_phone: "0722000000".to_string(),
            patient_name: "Yusuf".to_string(),
            blood_group: "B+".to_string(),
            hospital: "County Referral".to_string(),
            urgency: "ASAP".to_string(),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_activity_requires_title_and_date() {
        assert!(validate_new_activity(NewActivity::default()).is_err());

        let activity = validate_new_activity(NewActivity {
            title: "Blood drive".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 1),
            location: Some(" ".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(activity.location, None);
    }
}
