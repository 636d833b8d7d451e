//! Academic background validator
//!
//! Errors are reported under `transcript.<key>` and `pastSchools.<i>.<key>`.

use super::check::{finish, Checker};
use super::context::ValidationContext;
use super::errors::FieldErrors;
use crate::models::{
    AcademicInfo, AcademicInfoDraft, PastSchool, PastSchoolDraft, Transcript, TranscriptDraft,
};

const GRADE_RANGE: std::ops::RangeInclusive<i64> = 0..=100;

pub fn validate_academic(
    draft: &AcademicInfoDraft,
    _ctx: &ValidationContext,
) -> Result<AcademicInfo, FieldErrors> {
    let mut errors = FieldErrors::new();

    let transcript = check_transcript(&draft.transcript, &mut errors);
    let past_schools: Vec<PastSchool> = draft
        .past_schools
        .iter()
        .enumerate()
        .map(|(index, school)| check_past_school(index, school, &mut errors))
        .collect();

    let record = transcript.map(|transcript| AcademicInfo {
        transcript,
        past_schools,
    });
    finish(errors, record)
}

fn check_transcript(draft: &TranscriptDraft, errors: &mut FieldErrors) -> Option<Transcript> {
    let mut check = Checker::scoped(errors, TranscriptDraft::FIELDS, "transcript.");

    let transcript_id = check.optional_id("transcript_id", draft.transcript_id.as_deref());
    let grade_9 = check.required("grade_9_file_path", draft.grade_9_file_path.as_deref());
    let grade_10 = check.required("grade_10_file_path", draft.grade_10_file_path.as_deref());
    let grade_11 = check.required("grade_11_file_path", draft.grade_11_file_path.as_deref());
    let grade_12 = check.required("grade_12_file_path", draft.grade_12_file_path.as_deref());
    let exam = check.required("exam_file_path", draft.exam_file_path.as_deref());
    let english = check.required_number("english_grade", draft.english_grade.as_deref(), GRADE_RANGE);
    let maths = check.required_number("maths_grade", draft.maths_grade.as_deref(), GRADE_RANGE);

    Some(Transcript {
        transcript_id,
        grade_9_file_path: grade_9?,
        grade_10_file_path: grade_10?,
        grade_11_file_path: grade_11?,
        grade_12_file_path: grade_12?,
        exam_file_path: exam?,
        english_grade: u8::try_from(english?).ok()?,
        maths_grade: u8::try_from(maths?).ok()?,
    })
}

fn check_past_school(index: usize, draft: &PastSchoolDraft, errors: &mut FieldErrors) -> PastSchool {
    let mut check = Checker::scoped(
        errors,
        PastSchoolDraft::FIELDS,
        format!("pastSchools.{}.", index),
    );

    PastSchool {
        past_secondary_id: check.optional_id("past_secondary_id", draft.past_secondary_id.as_deref()),
        file_paths: check.optional(draft.file_paths.as_deref()),
    }
}
