use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::RecordStore;
use crate::models::{
    Activity, Member, MemberChanges, NewActivity, NewMember, NewPublicRequest, NewStaffRequest,
    PublicBloodRequest, StaffBloodRequest,
};
use crate::services::activities::upcoming_activities;
use crate::utils::{AppError, AppResult};

/// Process-local store. Records are kept in insertion order and sorted on read.
#[derive(Default)]
pub struct MemoryStore {
    members: RwLock<Vec<Member>>,
    activities: RwLock<Vec<Activity>>,
    staff_requests: RwLock<Vec<StaffBloodRequest>>,
    public_requests: RwLock<Vec<PublicBloodRequest>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Direct inserts that keep the caller's ids and timestamps.
#[cfg(test)]
impl MemoryStore {
    pub async fn seed_member(&self, member: Member) {
        self.members.write().await.push(member);
    }

    pub async fn seed_activity(&self, activity: Activity) {
        self.activities.write().await.push(activity);
    }

    pub async fn seed_staff_request(&self, request: StaffBloodRequest) {
        self.staff_requests.write().await.push(request);
    }

    pub async fn seed_public_request(&self, request: PublicBloodRequest) {
        self.public_requests.write().await.push(request);
    }
}

fn remove_by_id<T>(
    records: &mut Vec<T>,
    id: Uuid,
    id_of: impl Fn(&T) -> Uuid,
    what: &str,
) -> AppResult<()> {
    let before = records.len();
    records.retain(|r| id_of(r) != id);
    if records.len() == before {
        Err(AppError::NotFound(format!("{} with id '{}' was not found", what, id)))
    } else {
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_members(&self) -> AppResult<Vec<Member>> {
        let mut members = self.members.read().await.clone();
        members.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
        Ok(members)
    }

    async fn find_member(&self, id: Uuid) -> AppResult<Option<Member>> {
        Ok(self
            .members
            .read()
            .await
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn insert_member(&self, member: NewMember) -> AppResult<Member> {
        let created = Member {
            id: Uuid::new_v4(),
            name: member.name,
            blood_group: member.blood_group,
            phone: member.phone,
            email: member.email,
            registered_at: Utc::now(),
            date_of_birth: member.date_of_birth,
            profile_picture_url: member.profile_picture_url,
        };
        self.members.write().await.push(created.clone());
        Ok(created)
    }

    async fn update_member(&self, id: Uuid, changes: MemberChanges) -> AppResult<Member> {
        let mut members = self.members.write().await;
        let member = members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Member with id '{}' was not found", id)))?;
        member.apply(&changes);
        Ok(member.clone())
    }

    async fn delete_member(&self, id: Uuid) -> AppResult<()> {
        remove_by_id(&mut *self.members.write().await, id, |m| m.id, "Member")
    }

    async fn list_activities(&self) -> AppResult<Vec<Activity>> {
        let mut activities = self.activities.read().await.clone();
        activities.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(activities)
    }

    async fn list_upcoming_activities(
        &self,
        from: NaiveDate,
        limit: usize,
    ) -> AppResult<Vec<Activity>> {
        Ok(upcoming_activities(&self.activities.read().await, from, limit))
    }

    async fn insert_activity(&self, activity: NewActivity) -> AppResult<Activity> {
        let date = activity
            .date
            .ok_or_else(|| AppError::ValidationError("Activity date is required".to_string()))?;
        let created = Activity {
            id: Uuid::new_v4(),
            title: activity.title,
            description: activity.description,
            date,
            location: activity.location,
            time: activity.time,
            created_at: Utc::now(),
        };
        self.activities.write().await.push(created.clone());
        Ok(created)
    }

    async fn delete_activity(&self, id: Uuid) -> AppResult<()> {
        remove_by_id(&mut *self.activities.write().await, id, |a| a.id, "Activity")
    }

    async fn list_staff_requests(&self) -> AppResult<Vec<StaffBloodRequest>> {
        let mut requests = self.staff_requests.read().await.clone();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }

    async fn insert_staff_request(
        &self,
        request: NewStaffRequest,
    ) -> AppResult<StaffBloodRequest> {
        let created = StaffBloodRequest {
            id: Uuid::new_v4(),
            patient_name: request.patient_name,
            blood_group: request.blood_group,
            hospital: request.hospital,
            contact_name: request.contact_name,
            contact_phone: request.contact_phone,
            urgency: request.urgency,
            created_at: Utc::now(),
        };
        self.staff_requests.write().await.push(created.clone());
        Ok(created)
    }

    async fn delete_staff_request(&self, id: Uuid) -> AppResult<()> {
        remove_by_id(&mut *self.staff_requests.write().await, id, |r| r.id, "Blood request")
    }

    async fn list_public_requests(&self) -> AppResult<Vec<PublicBloodRequest>> {
        let mut requests = self.public_requests.read().await.clone();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }

    async fn insert_public_request(
        &self,
        request: NewPublicRequest,
    ) -> AppResult<PublicBloodRequest> {
        let created = PublicBloodRequest {
            id: Uuid::new_v4(),
            requester_name: request.requester_name,
            requester_phone: request.requester_phone,
            requester_email: request.requester_email,
            patient_name: request.patient_name,
            blood_group: request.blood_group,
            hospital: request.hospital,
            urgency: request.urgency,
            additional_notes: request.additional_notes,
            created_at: Utc::now(),
        };
        self.public_requests.write().await.push(created.clone());
        Ok(created)
    }

    async fn delete_public_request(&self, id: Uuid) -> AppResult<()> {
        remove_by_id(
            &mut *self.public_requests.write().await,
            id,
            |r| r.id,
            "Public blood request",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{activity, member};
    use chrono::{Duration, TimeZone};

    #[tokio::test]
    async fn test_members_listed_newest_first() {
        let store = MemoryStore::new();
        let mut older = member("Older", "A+");
        older.registered_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut newer = member("Newer", "A+");
        newer.registered_at = older.registered_at + Duration::days(3);
        store.seed_member(older).await;
        store.seed_member(newer).await;

        let names: Vec<_> = store
            .list_members()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Newer", "Older"]);
    }

    #[tokio::test]
    async fn test_update_only_touches_editable_fields() {
        let store = MemoryStore::new();
        let created = store
            .insert_member(NewMember {
                name: "Asha".to_string(),
                blood_group: "O-".to_string(),
                phone: "0700".to_string(),
                email: "asha@example.org".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
                profile_picture_url: Some("/uploads/a.png".to_string()),
            })
            .await
            .unwrap();

        let updated = store
            .update_member(
                created.id,
                MemberChanges {
                    name: "Asha O.".to_string(),
                    blood_group: "O+".to_string(),
                    phone: "0711".to_string(),
                    email: "asha@club.org".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.blood_group, "O+");
        assert_eq!(updated.registered_at, created.registered_at);
        assert_eq!(updated.date_of_birth, created.date_of_birth);
        assert_eq!(updated.profile_picture_url, created.profile_picture_url);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let store = MemoryStore::new();
        let result = store.delete_activity(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_upcoming_activities_from_date() {
        let store = MemoryStore::new();
        let day = |d| NaiveDate::from_ymd_opt(2025, 6, d).unwrap();
        store.seed_activity(activity("Past drive", day(1))).await;
        store.seed_activity(activity("Late drive", day(20))).await;
        store.seed_activity(activity("Same day", day(10))).await;
        store.seed_activity(activity("Soon", day(12))).await;

        let titles: Vec<_> = store
            .list_upcoming_activities(day(10), 2)
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["Same day", "Soon"]);
    }
}
