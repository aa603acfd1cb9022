pub mod activity;
pub mod blood_request;
pub mod blood_type;
pub mod member;

pub use activity::{Activity, NewActivity};
pub use blood_request::{
    BloodRequest, BloodRequestView, NewPublicRequest, NewStaffRequest, PublicBloodRequest,
    RequestOrigin, StaffBloodRequest,
};
pub use blood_type::{BloodType, Urgency};
pub use member::{Member, MemberChanges, MemberPatch, NewMember};
