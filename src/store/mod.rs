//! Record persistence for the four collections the site works with.
//!
//! Handlers only see `dyn RecordStore`; `PgStore` backs production and
//! `MemoryStore` backs tests and database-less development runs.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{
    Activity, Member, MemberChanges, NewActivity, NewMember, NewPublicRequest, NewStaffRequest,
    PublicBloodRequest, StaffBloodRequest,
};
use crate::utils::AppResult;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Newest registration first.
    async fn list_members(&self) -> AppResult<Vec<Member>>;
    async fn find_member(&self, id: Uuid) -> AppResult<Option<Member>>;
    async fn insert_member(&self, member: NewMember) -> AppResult<Member>;
    /// Only name, blood group, phone and email are touched.
    async fn update_member(&self, id: Uuid, changes: MemberChanges) -> AppResult<Member>;
    async fn delete_member(&self, id: Uuid) -> AppResult<()>;

    /// Newest first by creation time.
    async fn list_activities(&self) -> AppResult<Vec<Activity>>;
    /// Activities dated on or after `from`, earliest first.
    async fn list_upcoming_activities(
        &self,
        from: NaiveDate,
        limit: usize,
    ) -> AppResult<Vec<Activity>>;
    async fn insert_activity(&self, activity: NewActivity) -> AppResult<Activity>;
    async fn delete_activity(&self, id: Uuid) -> AppResult<()>;

    async fn list_staff_requests(&self) -> AppResult<Vec<StaffBloodRequest>>;
    async fn insert_staff_request(&self, request: NewStaffRequest)
        -> AppResult<StaffBloodRequest>;
    async fn delete_staff_request(&self, id: Uuid) -> AppResult<()>;

    async fn list_public_requests(&self) -> AppResult<Vec<PublicBloodRequest>>;
    async fn insert_public_request(
        &self,
        request: NewPublicRequest,
    ) -> AppResult<PublicBloodRequest>;
    async fn delete_public_request(&self, id: Uuid) -> AppResult<()>;
}
