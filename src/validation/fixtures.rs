//! Known-good drafts for tests

use crate::models::{
    AcademicInfoDraft, ContactInfoDraft, EmploymentDraft, ParentDraft, PersonalInfoDraft,
    TranscriptDraft,
};

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

pub(crate) fn minimal_personal() -> PersonalInfoDraft {
    PersonalInfoDraft {
        student_id: text("STD-4821"),
        first_name: text("Abebe"),
        father_name: text("Kebede"),
        grandfather_name: text("Tesfaye"),
        sex: text("M"),
        nationality: text("Ethiopian"),
        date_of_birth: text("2004-05-17"),
        current_year: text("2026"),
        current_semester: text("I"),
        current_level: text("1"),
        phone_mobile: text("0911223344"),
        department_id: text("animal_health"),
        program_id: text("regular-degree"),
        admission_type_id: text("Regular"),
        registration_date: text("2026-09-01"),
        marital_status: text("SINGLE"),
        ..Default::default()
    }
}

pub(crate) fn minimal_contact() -> ContactInfoDraft {
    ContactInfoDraft {
        full_name: text("Almaz Bekele"),
        phone_mobile: text("0922334455"),
        ..Default::default()
    }
}

pub(crate) fn minimal_academic() -> AcademicInfoDraft {
    AcademicInfoDraft {
        transcript: TranscriptDraft {
            grade_9_file_path: text("uploads/grade9.pdf"),
            grade_10_file_path: text("uploads/grade10.pdf"),
            grade_11_file_path: text("uploads/grade11.pdf"),
            grade_12_file_path: text("uploads/grade12.pdf"),
            exam_file_path: text("uploads/exam.pdf"),
            english_grade: text("78"),
            maths_grade: text("85"),
            ..Default::default()
        },
        past_schools: Vec::new(),
    }
}

pub(crate) fn minimal_parent() -> ParentDraft {
    ParentDraft {
        parent_type: text("FATHER"),
        full_name: text("Kebede Tesfaye"),
        phone: text("0933445566"),
        ..Default::default()
    }
}

pub(crate) fn minimal_employment() -> EmploymentDraft {
    EmploymentDraft {
        is_current: text("No"),
        type_of_job: text("Farm assistant"),
        employer: text("Adama Dairy Cooperative"),
        service_years_from: text("2020"),
        service_years_to: text("2023"),
        ..Default::default()
    }
}
