use std::collections::HashSet;

use serde::Serialize;

use crate::models::{Activity, BloodRequestView, Member, PublicBloodRequest, StaffBloodRequest};
use crate::services::requests::most_recent_request;

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub member_count: usize,
    pub activity_count: usize,
    pub total_request_count: usize,
    pub distinct_blood_group_count: usize,
    pub most_recent_request: Option<BloodRequestView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BloodGroupCount {
    pub blood_group: String,
    pub count: usize,
}

pub fn summarize(
    members: &[Member],
    activities: &[Activity],
    staff: &[StaffBloodRequest],
    public: &[PublicBloodRequest],
) -> Summary {
    let distinct: HashSet<&str> = members.iter().map(|m| m.blood_group.as_str()).collect();

    Summary {
        member_count: members.len(),
        activity_count: activities.len(),
        total_request_count: staff.len() + public.len(),
        distinct_blood_group_count: distinct.len(),
        most_recent_request: most_recent_request(staff, public),
    }
}

/// Member count per blood group, in order of first appearance.
pub fn blood_group_distribution(members: &[Member]) -> Vec<BloodGroupCount> {
    let mut counts: Vec<BloodGroupCount> = Vec::new();
    for member in members {
        match counts
            .iter_mut()
            .find(|c| c.blood_group == member.blood_group)
        {
            Some(entry) => entry.count += 1,
            None => counts.push(BloodGroupCount {
                blood_group: member.blood_group.clone(),
                count: 1,
            }),
        }
    }
    counts
}
