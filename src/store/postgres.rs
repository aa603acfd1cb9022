use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use super::RecordStore;
use crate::models::{
    Activity, Member, MemberChanges, NewActivity, NewMember, NewPublicRequest, NewStaffRequest,
    PublicBloodRequest, StaffBloodRequest,
};
use crate::utils::{AppError, AppResult};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects and brings the schema up to date.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        tracing::info!("Successfully connected to database");

        sqlx::migrate!().run(&pool).await?;
        tracing::info!("Migrations run successfully");

        Ok(Self::new(pool))
    }
}

fn ensure_deleted(rows_affected: u64, what: &str, id: Uuid) -> AppResult<()> {
    if rows_affected == 0 {
        Err(AppError::NotFound(format!("{} with id '{}' was not found", what, id)))
    } else {
        Ok(())
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn list_members(&self) -> AppResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(
            "SELECT * FROM club_members ORDER BY registered_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(members)
    }

    async fn find_member(&self, id: Uuid) -> AppResult<Option<Member>> {
        let member = sqlx::query_as::<_, Member>("SELECT * FROM club_members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(member)
    }

    async fn insert_member(&self, member: NewMember) -> AppResult<Member> {
        let created = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO club_members (name, blood_group, phone, email, date_of_birth, profile_picture_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&member.name)
        .bind(&member.blood_group)
        .bind(&member.phone)
        .bind(&member.email)
        .bind(member.date_of_birth)
        .bind(&member.profile_picture_url)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update_member(&self, id: Uuid, changes: MemberChanges) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            r#"
            UPDATE club_members
            SET name = $1, blood_group = $2, phone = $3, email = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.blood_group)
        .bind(&changes.phone)
        .bind(&changes.email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Member with id '{}' was not found", id)))
    }

    async fn delete_member(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM club_members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        ensure_deleted(result.rows_affected(), "Member", id)
    }

    async fn list_activities(&self) -> AppResult<Vec<Activity>> {
        let activities = sqlx::query_as::<_, Activity>(
            "SELECT * FROM club_activities ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(activities)
    }

    async fn list_upcoming_activities(
        &self,
        from: NaiveDate,
        limit: usize,
    ) -> AppResult<Vec<Activity>> {
        let activities = sqlx::query_as::<_, Activity>(
            "SELECT * FROM club_activities WHERE date >= $1 ORDER BY date ASC LIMIT $2",
        )
        .bind(from)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;
        Ok(activities)
    }

    async fn insert_activity(&self, activity: NewActivity) -> AppResult<Activity> {
        let date = activity
            .date
            .ok_or_else(|| AppError::ValidationError("Activity date is required".to_string()))?;

        let created = sqlx::query_as::<_, Activity>(
            r#"
            INSERT INTO club_activities (title, description, date, location, time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&activity.title)
        .bind(&activity.description)
        .bind(date)
        .bind(&activity.location)
        .bind(&activity.time)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn delete_activity(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM club_activities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        ensure_deleted(result.rows_affected(), "Activity", id)
    }

    async fn list_staff_requests(&self) -> AppResult<Vec<StaffBloodRequest>> {
        let requests = sqlx::query_as::<_, StaffBloodRequest>(
            "SELECT * FROM blood_requests ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    async fn insert_staff_request(
        &self,
        request: NewStaffRequest,
    ) -> AppResult<StaffBloodRequest> {
        let created = sqlx::query_as::<_, StaffBloodRequest>(
            r#"
            INSERT INTO blood_requests (patient_name, blood_group, hospital, contact_name, contact_phone, urgency)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&request.patient_name)
        .bind(&request.blood_group)
        .bind(&request.hospital)
        .bind(&request.contact_name)
        .bind(&request.contact_phone)
        .bind(&request.urgency)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn delete_staff_request(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM blood_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        ensure_deleted(result.rows_affected(), "Blood request", id)
    }

    async fn list_public_requests(&self) -> AppResult<Vec<PublicBloodRequest>> {
        let requests = sqlx::query_as::<_, PublicBloodRequest>(
            "SELECT * FROM public_blood_requests ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    async fn insert_public_request(
        &self,
        request: NewPublicRequest,
    ) -> AppResult<PublicBloodRequest> {
        let created = sqlx::query_as::<_, PublicBloodRequest>(
            r#"
            INSERT INTO public_blood_requests (
                requester_name, requester_phone, requester_email,
                patient_name, blood_group, hospital, urgency, additional_notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&request.requester_name)
        .bind(&request.requester_phone)
        .bind(&request.requester_email)
        .bind(&request.patient_name)
        .bind(&request.blood_group)
        .bind(&request.hospital)
        .bind(&request.urgency)
        .bind(&request.additional_notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn delete_public_request(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM public_blood_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        ensure_deleted(result.rows_affected(), "Public blood request", id)
    }
}
