use serde::{Deserialize, Serialize};

use crate::validation::FieldErrors;

pub const STUDENT_ID_FIELD: &str = "studentId";
pub const FULL_NAME_FIELD: &str = "fullName";

const STUDENT_ID_DIGITS: usize = 10;
const MIN_NAME_CHARS: usize = 2;

/// 加入社团表单的原始输入
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequestForm {
    pub student_id: String,
    pub full_name: String,
}

/// 通过验证的申请人，字段已修剪
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applicant {
    pub student_id: String,
    pub full_name: String,
}

impl JoinRequestForm {
    pub fn new(student_id: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            full_name: full_name.into(),
        }
    }

    /// 逐字段验证，每个字段最多一条错误
    pub fn validate(&self) -> Result<Applicant, FieldErrors> {
        let mut errors = FieldErrors::new();

        let student_id = self.student_id.trim();
        if student_id.is_empty() {
            errors.insert(STUDENT_ID_FIELD, "Student ID is required");
        } else if !is_student_id(student_id) {
            errors.insert(STUDENT_ID_FIELD, "Student ID must be 10 digits");
        }

        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            errors.insert(FULL_NAME_FIELD, "Full name is required");
        } else if full_name.chars().count() < MIN_NAME_CHARS {
            errors.insert(FULL_NAME_FIELD, "Name must be at least 2 characters");
        }

        errors.into_result(Applicant {
            student_id: student_id.to_string(),
            full_name: full_name.to_string(),
        })
    }
}

fn is_student_id(s: &str) -> bool {
    s.len() == STUDENT_ID_DIGITS && s.bytes().all(|b| b.is_ascii_digit())
}
