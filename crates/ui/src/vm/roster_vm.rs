use hub_core::model::Student;

/// Age field value for the add-student form. Anything that is not a small
/// whole number maps to 0 and is then rejected by validation.
#[must_use]
pub fn parse_student_age(raw: &str) -> u8 {
    raw.trim().parse().unwrap_or(0)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentRowVm {
    pub id: String,
    pub name: String,
    pub age: String,
    pub course: String,
}

#[must_use]
pub fn map_student_rows(students: &[Student]) -> Vec<StudentRowVm> {
    students
        .iter()
        .map(|student| StudentRowVm {
            id: student.id.to_string(),
            name: student.name.clone(),
            age: student.age.to_string(),
            course: student.course.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::model::Roster;

    #[test]
    fn age_input_falls_back_to_zero() {
        assert_eq!(parse_student_age(" 21 "), 21);
        assert_eq!(parse_student_age(""), 0);
        assert_eq!(parse_student_age("-3"), 0);
        assert_eq!(parse_student_age("300"), 0);
    }

    #[test]
    fn rows_follow_roster_order() {
        let rows = map_student_rows(Roster::seeded().students());
        assert_eq!(rows[0].id, "1");
        assert_eq!(rows[1].name, "Jane Smith");
        assert_eq!(rows[1].age, "22");
    }
}
