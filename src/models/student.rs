//! Student and roster model.
//!
//! Students are the candidates a case's roles are filled from. Each carries
//! a performance score and the set of role types they would like to play.
//! The roster keeps students in the order the loader supplied them; that
//! order decides ties during automatic assignment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::RoleType;

/// Upper bound of [`Student::performance`].
pub const MAX_PERFORMANCE: u8 = 100;

/// A student eligible for role assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Class or cohort label. Filtering by group is the caller's job.
    pub group: String,
    /// Performance score, 0 to 100.
    pub performance: u8,
    /// Role types the student would like to play.
    #[serde(default)]
    pub preferred_role_types: BTreeSet<RoleType>,
}

impl Student {
    /// Creates a student with no name, group, or preferences.
    pub fn new(id: impl Into<String>, performance: u8) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            group: String::new(),
            performance,
            preferred_role_types: BTreeSet::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the group label.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Adds a preferred role type.
    pub fn with_preference(mut self, role_type: RoleType) -> Self {
        self.preferred_role_types.insert(role_type);
        self
    }

    /// Whether the student prefers the given role type.
    pub fn prefers(&self, role_type: RoleType) -> bool {
        self.preferred_role_types.contains(&role_type)
    }
}

/// Ordered collection of students for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Creates a roster, keeping the given order.
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// Appends a student.
    pub fn with_student(mut self, student: Student) -> Self {
        self.students.push(student);
        self
    }

    /// Finds a student by id.
    pub fn get(&self, student_id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == student_id)
    }

    /// Whether a student with this id is on the roster.
    pub fn contains(&self, student_id: &str) -> bool {
        self.get(student_id).is_some()
    }

    /// Students belonging to `group`, in roster order.
    pub fn in_group(&self, group: &str) -> Roster {
        Roster::new(
            self.students
                .iter()
                .filter(|s| s.group == group)
                .cloned()
                .collect(),
        )
    }

    /// Students as a slice, in roster order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Iterates students in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    /// Number of students.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl From<Vec<Student>> for Roster {
    fn from(students: Vec<Student>) -> Self {
        Self::new(students)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_builder() {
        let s = Student::new("S1", 88)
            .with_name("Ana")
            .with_group("3A")
            .with_preference(RoleType::Judge)
            .with_preference(RoleType::Expert)
            .with_preference(RoleType::Judge);

        assert_eq!(s.id, "S1");
        assert_eq!(s.name, "Ana");
        assert_eq!(s.group, "3A");
        assert_eq!(s.performance, 88);
        assert_eq!(s.preferred_role_types.len(), 2);
        assert!(s.prefers(RoleType::Judge));
        assert!(!s.prefers(RoleType::Clerk));
    }

    #[test]
    fn test_roster_lookup() {
        let roster = Roster::new(vec![Student::new("S1", 50), Student::new("S2", 60)]);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get("S2").map(|s| s.performance), Some(60));
        assert!(roster.contains("S1"));
        assert!(!roster.contains("S9"));
        assert!(Roster::default().is_empty());
    }

    #[test]
    fn test_in_group_keeps_order() {
        let roster = Roster::default()
            .with_student(Student::new("S1", 50).with_group("A"))
            .with_student(Student::new("S2", 60).with_group("B"))
            .with_student(Student::new("S3", 70).with_group("A"));

        let a = roster.in_group("A");
        let ids: Vec<&str> = a.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S1", "S3"]);
        assert!(roster.in_group("Z").is_empty());
    }

    #[test]
    fn test_roster_wire_format() {
        let json = r#"[
            {"id":"S1","name":"Ana","group":"3A","performance":85,"preferred_role_types":["judge"]},
            {"id":"S2","name":"Ben","group":"3A","performance":92}
        ]"#;
        let roster: Roster = serde_json::from_str(json).unwrap();
        assert_eq!(roster.len(), 2);
        assert!(roster.students()[0].prefers(RoleType::Judge));
        assert!(roster.students()[1].preferred_role_types.is_empty());
    }
}
