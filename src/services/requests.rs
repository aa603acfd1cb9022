//! Unified view over staff-entered and publicly submitted blood requests.

use chrono::{DateTime, Utc};

use crate::models::{BloodRequest, BloodRequestView, PublicBloodRequest, StaffBloodRequest};

/// All requests, normalized and tagged with their origin, newest first.
///
/// Ties on `created_at` keep concatenation order (staff before public).
pub fn merge_and_sort(
    staff: &[StaffBloodRequest],
    public: &[PublicBloodRequest],
) -> Vec<BloodRequestView> {
    let mut merged: Vec<BloodRequestView> = staff
        .iter()
        .cloned()
        .map(BloodRequest::from)
        .chain(public.iter().cloned().map(BloodRequest::from))
        .map(BloodRequest::normalize)
        .collect();

    // sort_by is stable
    merged.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    merged
}

pub fn most_recent_request(
    staff: &[StaffBloodRequest],
    public: &[PublicBloodRequest],
) -> Option<BloodRequestView> {
    merge_and_sort(staff, public).into_iter().next()
}

/// Coarse "how long ago" label shown next to the most recent request.
pub fn time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - created_at).num_hours();

    if hours < 1 {
        return "Less than an hour ago".to_string();
    }
    if hours < 24 {
        return format!("{} hour{} ago", hours, plural(hours));
    }
    let days = hours / 24;
    format!("{} day{} ago", days, plural(days))
}

fn plural(n: i64) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RequestOrigin;
    use crate::test_support::{public, staff};
    use chrono::{Duration, TimeZone};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_inputs() {
        assert!(merge_and_sort(&[], &[]).is_empty());
        assert!(most_recent_request(&[], &[]).is_none());
    }

    #[test]
    fn test_newest_first_across_origins() {
        let staff_requests = vec![staff("S1", at(8)), staff("S2", at(12))];
        let public_requests = vec![public("P1", at(10))];

        let merged = merge_and_sort(&staff_requests, &public_requests);
        let patients: Vec<_> = merged.iter().map(|r| r.patient_name.as_str()).collect();
        assert_eq!(patients, vec!["S2", "P1", "S1"]);
        assert_eq!(merged[1].origin, RequestOrigin::Public);
    }

    #[test]
    fn test_most_recent_prefers_later_public() {
        let recent = most_recent_request(&[staff("S", at(9))], &[public("P", at(10))]).unwrap();
        assert_eq!(recent.patient_name, "P");
        assert_eq!(recent.origin, RequestOrigin::Public);
        assert_eq!(recent.contact_name, "Relative");
    }

    #[test]
    fn test_timestamp_tie_keeps_staff_first() {
        let recent = most_recent_request(&[staff("S", at(9))], &[public("P", at(9))]).unwrap();
        assert_eq!(recent.origin, RequestOrigin::Staff);

        let merged = merge_and_sort(
            &[staff("S1", at(9)), staff("S2", at(9))],
            &[public("P1", at(9))],
        );
        let patients: Vec<_> = merged.iter().map(|r| r.patient_name.as_str()).collect();
        assert_eq!(patients, vec!["S1", "S2", "P1"]);
    }

    #[test]
    fn test_time_ago_labels() {
        let now = at(12);
        assert_eq!(time_ago(now - Duration::minutes(59), now), "Less than an hour ago");
        assert_eq!(time_ago(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(time_ago(now - Duration::hours(23), now), "23 hours ago");
        assert_eq!(time_ago(now - Duration::hours(24), now), "1 day ago");
        assert_eq!(time_ago(now - Duration::hours(73), now), "3 days ago");
    }

    #[test]
    fn test_time_ago_future_timestamp() {
        let now = at(12);
        assert_eq!(time_ago(now + Duration::hours(2), now), "Less than an hour ago");
    }
}
