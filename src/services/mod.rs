//! Pure data shaping over record snapshots. Nothing in here touches the
//! store; handlers load fresh collections and call these on every request.

pub mod activities;
pub mod birthdays;
pub mod editor;
pub mod export;
pub mod matching;
pub mod requests;
pub mod summary;
pub mod validation;

pub use birthdays::{upcoming_birthdays, UpcomingBirthday};
pub use matching::find_matching_donors;
pub use requests::{merge_and_sort, most_recent_request};
pub use summary::{summarize, Summary};
