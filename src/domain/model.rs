use crate::domain::ports::Document;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Collection holding class documents.
pub const CLASSES_COLLECTION: &str = "Classes";

/// Collection holding student documents.
pub const STUDENTS_COLLECTION: &str = "Students";

/// Nested path probed to decide whether a student has submitted
/// the questionnaire.
pub const RESPONSES_CHILD_PATH: &str = "Questionnaire/Responses";

/// Pointer into the student collection. Carries no data of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRef {
    pub id: String,
}

/// A class document: the roster is the ordered `students` list.
/// Read-only to this crate; roster management lives elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub teacher_id: String,
    #[serde(default)]
    pub students: Vec<StudentRef>,
}

impl ClassRecord {
    pub fn from_document(doc: Document) -> Result<Self> {
        let mut record: ClassRecord =
            serde_json::from_value(serde_json::Value::Object(doc.data.into_iter().collect()))?;
        record.id = doc.id;
        Ok(record)
    }

    /// Roster ids in document order. A class with no member list is an
    /// empty roster, not an error.
    pub fn student_ids(&self) -> Vec<String> {
        self.students.iter().map(|s| s.id.clone()).collect()
    }
}

/// A student document as stored. Never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub academic_level: String,
    pub behavior: String,
    pub language: String,
}

impl StudentRecord {
    pub fn from_document(doc: Document) -> Result<Self> {
        let record: StudentRecord =
            serde_json::from_value(serde_json::Value::Object(doc.data.into_iter().collect()))?;
        Ok(record)
    }
}

/// Pipeline output row: the stored record plus the derived
/// submission flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedStudent {
    #[serde(flatten)]
    pub record: StudentRecord,
    pub has_submitted: bool,
}

/// A contiguous chunk of roster ids, sized to fit one membership query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub ids: Vec<String>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn doc(id: &str, value: serde_json::Value) -> Document {
        let map: HashMap<String, serde_json::Value> = match value {
            serde_json::Value::Object(obj) => obj.into_iter().collect(),
            _ => panic!("document body must be an object"),
        };
        Document {
            id: id.to_string(),
            data: map,
        }
    }

    #[test]
    fn test_class_record_from_document() {
        let class = ClassRecord::from_document(doc(
            "class-7a",
            json!({
                "name": "Class 7A",
                "teacherId": "teacher-1",
                "students": [{"id": "s1"}, {"id": "s2"}]
            }),
        ))
        .unwrap();

        assert_eq!(class.id, "class-7a");
        assert_eq!(class.teacher_id, "teacher-1");
        assert_eq!(class.student_ids(), vec!["s1", "s2"]);
    }

    #[test]
    fn test_class_record_missing_students_is_empty_roster() {
        let class = ClassRecord::from_document(doc(
            "class-7b",
            json!({"name": "Class 7B", "teacherId": "teacher-1"}),
        ))
        .unwrap();

        assert!(class.student_ids().is_empty());
    }

    #[test]
    fn test_student_record_from_document() {
        let student = StudentRecord::from_document(doc(
            "s1",
            json!({
                "id": "s1",
                "name": "Amira",
                "age": 12,
                "academicLevel": "Grade 7",
                "behavior": "Good",
                "language": "English"
            }),
        ))
        .unwrap();

        assert_eq!(student.name, "Amira");
        assert_eq!(student.academic_level, "Grade 7");
    }

    #[test]
    fn test_student_record_rejects_malformed_document() {
        let result = StudentRecord::from_document(doc("s1", json!({"id": "s1"})));
        assert!(result.is_err());
    }
}
