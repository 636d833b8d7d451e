//! Shared form state
//!
//! [`FormStore`] holds the drafts of all five sections for one registration
//! session. It performs no validation. Setters on object sections merge the
//! incoming draft into what is already there; list sections are replaced
//! wholesale or edited one entry at a time.

use serde::{Deserialize, Serialize};

use crate::error::{RegistrationError, RegistrationResult};
use crate::models::{
    AcademicInfoDraft, ContactInfoDraft, EmploymentDraft, ParentDraft, PersonalInfoDraft,
};

/// Drafts for every section of a registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormStore {
    #[serde(default)]
    personal_info: PersonalInfoDraft,
    #[serde(default)]
    contact_info: ContactInfoDraft,
    #[serde(default)]
    academic_info: AcademicInfoDraft,
    #[serde(default)]
    family_info: Vec<ParentDraft>,
    #[serde(default)]
    employment_history: Vec<EmploymentDraft>,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Getters

    pub fn personal_info(&self) -> &PersonalInfoDraft {
        &self.personal_info
    }

    pub fn contact_info(&self) -> &ContactInfoDraft {
        &self.contact_info
    }

    pub fn academic_info(&self) -> &AcademicInfoDraft {
        &self.academic_info
    }

    pub fn family_info(&self) -> &[ParentDraft] {
        &self.family_info
    }

    pub fn employment_history(&self) -> &[EmploymentDraft] {
        &self.employment_history
    }

    // Object sections: merge

    /// Merge a partial personal draft; absent fields keep their value
    pub fn set_personal_info(&mut self, patch: PersonalInfoDraft) {
        self.personal_info.merge(patch);
    }

    pub fn set_contact_info(&mut self, patch: ContactInfoDraft) {
        self.contact_info.merge(patch);
    }

    /// Merge the transcript field by field; a non-empty past-school list
    /// replaces the current one
    pub fn set_academic_info(&mut self, patch: AcademicInfoDraft) {
        self.academic_info.merge(patch);
    }

    pub fn replace_personal_info(&mut self, draft: PersonalInfoDraft) {
        self.personal_info = draft;
    }

    pub fn replace_contact_info(&mut self, draft: ContactInfoDraft) {
        self.contact_info = draft;
    }

    pub fn replace_academic_info(&mut self, draft: AcademicInfoDraft) {
        self.academic_info = draft;
    }

    // List sections

    pub fn set_family_info(&mut self, parents: Vec<ParentDraft>) {
        self.family_info = parents;
    }

    pub fn set_employment_history(&mut self, entries: Vec<EmploymentDraft>) {
        self.employment_history = entries;
    }

    /// Append a parent and return its position
    pub fn add_parent(&mut self, parent: ParentDraft) -> usize {
        self.family_info.push(parent);
        self.family_info.len() - 1
    }

    /// Merge a patch into the parent at `index`
    pub fn update_parent(&mut self, index: usize, patch: ParentDraft) -> RegistrationResult<()> {
        let parent = self
            .family_info
            .get_mut(index)
            .ok_or_else(|| RegistrationError::entry_not_found(ParentDraft::SECTION, index))?;
        parent.merge(patch);
        Ok(())
    }

    pub fn remove_parent(&mut self, index: usize) -> RegistrationResult<ParentDraft> {
        if index >= self.family_info.len() {
            return Err(RegistrationError::entry_not_found(ParentDraft::SECTION, index));
        }
        Ok(self.family_info.remove(index))
    }

    /// Append an employment entry and return its position
    pub fn add_employment(&mut self, entry: EmploymentDraft) -> usize {
        self.employment_history.push(entry);
        self.employment_history.len() - 1
    }

    pub fn update_employment(
        &mut self,
        index: usize,
        patch: EmploymentDraft,
    ) -> RegistrationResult<()> {
        let entry = self
            .employment_history
            .get_mut(index)
            .ok_or_else(|| RegistrationError::entry_not_found(EmploymentDraft::SECTION, index))?;
        entry.merge(patch);
        Ok(())
    }

    pub fn remove_employment(&mut self, index: usize) -> RegistrationResult<EmploymentDraft> {
        if index >= self.employment_history.len() {
            return Err(RegistrationError::entry_not_found(
                EmploymentDraft::SECTION,
                index,
            ));
        }
        Ok(self.employment_history.remove(index))
    }

    /// Reset every section to empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when nothing has been entered in any section
    pub fn is_empty(&self) -> bool {
        self.personal_info.is_empty()
            && self.contact_info.is_empty()
            && self.academic_info.is_empty()
            && self.family_info.is_empty()
            && self.employment_history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TranscriptDraft;

    #[test]
    fn test_personal_merge_keeps_other_fields() {
        let mut store = FormStore::new();
        store.set_personal_info(PersonalInfoDraft {
            first_name: Some("Abebe".into()),
            ..Default::default()
        });
        store.set_personal_info(PersonalInfoDraft {
            nationality: Some("Ethiopian".into()),
            ..Default::default()
        });

        let personal = store.personal_info();
        assert_eq!(personal.first_name.as_deref(), Some("Abebe"));
        assert_eq!(personal.nationality.as_deref(), Some("Ethiopian"));
    }

    #[test]
    fn test_replace_discards_old_fields() {
        let mut store = FormStore::new();
        store.set_contact_info(ContactInfoDraft {
            full_name: Some("Almaz Bekele".into()),
            ..Default::default()
        });
        store.replace_contact_info(ContactInfoDraft {
            phone_mobile: Some("0922334455".into()),
            ..Default::default()
        });
        assert_eq!(store.contact_info().full_name, None);
        assert_eq!(store.contact_info().phone_mobile.as_deref(), Some("0922334455"));
    }

    #[test]
    fn test_academic_merges_transcript() {
        let mut store = FormStore::new();
        store.set_academic_info(AcademicInfoDraft {
            transcript: TranscriptDraft {
                english_grade: Some("78".into()),
                ..Default::default()
            },
            past_schools: Vec::new(),
        });
        store.set_academic_info(AcademicInfoDraft {
            transcript: TranscriptDraft {
                maths_grade: Some("85".into()),
                ..Default::default()
            },
            past_schools: Vec::new(),
        });

        let transcript = &store.academic_info().transcript;
        assert_eq!(transcript.english_grade.as_deref(), Some("78"));
        assert_eq!(transcript.maths_grade.as_deref(), Some("85"));
    }

    #[test]
    fn test_list_editing() {
        let mut store = FormStore::new();
        let first = store.add_parent(ParentDraft {
            full_name: Some("Kebede Tesfaye".into()),
            ..Default::default()
        });
        let second = store.add_parent(ParentDraft {
            full_name: Some("Worknesh Alemu".into()),
            ..Default::default()
        });
        assert_eq!((first, second), (0, 1));

        store
            .update_parent(
                0,
                ParentDraft {
                    phone: Some("0933445566".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(store.family_info()[0].full_name.as_deref(), Some("Kebede Tesfaye"));
        assert_eq!(store.family_info()[0].phone.as_deref(), Some("0933445566"));

        let removed = store.remove_parent(0).unwrap();
        assert_eq!(removed.full_name.as_deref(), Some("Kebede Tesfaye"));
        assert_eq!(store.family_info().len(), 1);
    }

    #[test]
    fn test_out_of_range_index() {
        let mut store = FormStore::new();
        let err = store.remove_employment(0).unwrap_err();
        assert!(matches!(
            err,
            RegistrationError::EntryNotFound { index: 0, .. }
        ));
        assert!(store
            .update_employment(3, EmploymentDraft::default())
            .is_err());
    }

    #[test]
    fn test_clear() {
        let mut store = FormStore::new();
        assert!(store.is_empty());
        store.add_employment(EmploymentDraft {
            is_current: Some("Yes".into()),
            ..Default::default()
        });
        store.set_personal_info(PersonalInfoDraft {
            first_name: Some("Abebe".into()),
            ..Default::default()
        });
        assert!(!store.is_empty());

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store, FormStore::default());
    }
}
