//! Edit-in-place state for member records.
//!
//! Drafts live apart from the committed records and are keyed by member id.
//! `begin_edit` seeds a draft from the stored record; `commit_edit` validates
//! the draft and hands back the changes to persist.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{Member, MemberChanges, MemberPatch};
use crate::services::validation::validate_member_changes;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq)]
pub struct MemberDraft {
    pub name: String,
    pub blood_group: String,
    pub phone: String,
    pub email: String,
}

impl MemberDraft {
    pub fn apply(&mut self, patch: MemberPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(blood_group) = patch.blood_group {
            self.blood_group = blood_group;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

impl From<&Member> for MemberDraft {
    fn from(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            blood_group: member.blood_group.clone(),
            phone: member.phone.clone(),
            email: member.email.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemberEditor {
    drafts: HashMap<Uuid, MemberDraft>,
}

impl MemberEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) editing `member` from its committed values.
    pub fn begin_edit(&mut self, member: &Member) -> &mut MemberDraft {
        self.drafts
            .entry(member.id)
            .and_modify(|draft| *draft = MemberDraft::from(member))
            .or_insert_with(|| MemberDraft::from(member))
    }

    /// Ends the edit. On validation failure the draft is kept so it can be
    /// corrected and committed again.
    pub fn commit_edit(&mut self, id: Uuid) -> AppResult<MemberChanges> {
        let draft = self
            .drafts
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("No edit in progress for member '{}'", id)))?;

        let changes = validate_member_changes(MemberChanges {
            name: draft.name.clone(),
            blood_group: draft.blood_group.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
        })?;

        self.drafts.remove(&id);
        Ok(changes)
    }
}
