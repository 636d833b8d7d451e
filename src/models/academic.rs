//! Academic background (step 3)
//!
//! Secondary-school transcript uploads and grades, plus any number of past
//! post-secondary schools with their supporting documents.

use serde::{Deserialize, Serialize};

use super::draft::define_draft;

define_draft! {
    /// Raw transcript input
    pub struct TranscriptDraft as "transcript" {
        transcript_id => "transcript_id", "Transcript ID", false;
        grade_9_file_path => "grade_9_file_path", "Grade 9 file path", true;
        grade_10_file_path => "grade_10_file_path", "Grade 10 file path", true;
        grade_11_file_path => "grade_11_file_path", "Grade 11 file path", true;
        grade_12_file_path => "grade_12_file_path", "Grade 12 file path", true;
        exam_file_path => "exam_file_path", "Exam file path", true;
        english_grade => "english_grade", "English grade", true;
        maths_grade => "maths_grade", "Maths grade", true;
    }
}

define_draft! {
    /// Raw past-school input
    pub struct PastSchoolDraft as "past school" {
        past_secondary_id => "past_secondary_id", "Past school ID", false;
        file_paths => "file_paths", "Document file paths", false;
    }
}

/// Raw academic-background input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicInfoDraft {
    #[serde(default)]
    pub transcript: TranscriptDraft,
    #[serde(rename = "pastSchools", default)]
    pub past_schools: Vec<PastSchoolDraft>,
}

impl AcademicInfoDraft {
    /// Merge a patch: the transcript field by field, the past-school list
    /// only when the patch carries one
    pub fn merge(&mut self, patch: Self) {
        self.transcript.merge(patch.transcript);
        if !patch.past_schools.is_empty() {
            self.past_schools = patch.past_schools;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty() && self.past_schools.is_empty()
    }
}

/// Validated transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript_id: Option<u32>,
    pub grade_9_file_path: String,
    pub grade_10_file_path: String,
    pub grade_11_file_path: String,
    pub grade_12_file_path: String,
    pub exam_file_path: String,
    pub english_grade: u8,
    pub maths_grade: u8,
}

/// Validated past post-secondary school
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastSchool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_secondary_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_paths: Option<String>,
}

/// Validated academic background
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicInfo {
    pub transcript: Transcript,
    #[serde(rename = "pastSchools")]
    pub past_schools: Vec<PastSchool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_transcript_fields() {
        let mut draft = AcademicInfoDraft::default();
        draft.transcript.english_grade = Some("80".into());
        draft.past_schools.push(PastSchoolDraft::default());

        let mut patch = AcademicInfoDraft::default();
        patch.transcript.maths_grade = Some("75".into());
        draft.merge(patch);

        assert_eq!(draft.transcript.english_grade.as_deref(), Some("80"));
        assert_eq!(draft.transcript.maths_grade.as_deref(), Some("75"));
        assert_eq!(draft.past_schools.len(), 1);
    }

    #[test]
    fn test_merge_replaces_past_schools_when_present() {
        let mut draft = AcademicInfoDraft::default();
        draft.past_schools.push(PastSchoolDraft::default());

        let patch = AcademicInfoDraft {
            transcript: TranscriptDraft::default(),
            past_schools: vec![
                PastSchoolDraft {
                    past_secondary_id: Some("1".into()),
                    file_paths: None,
                },
                PastSchoolDraft::default(),
            ],
        };
        draft.merge(patch);
        assert_eq!(draft.past_schools.len(), 2);
        assert_eq!(draft.past_schools[0].past_secondary_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_draft_wire_shape() {
        let json = r#"{"transcript":{"english_grade":"90"},"pastSchools":[{"file_paths":"x.pdf"}]}"#;
        let draft: AcademicInfoDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.transcript.english_grade.as_deref(), Some("90"));
        assert_eq!(draft.past_schools[0].file_paths.as_deref(), Some("x.pdf"));
    }
}
