mod public;
pub use public::{Home, Login, NotFound, Survey};

mod layout;
pub use layout::{AdminLayout, StaffLayout, StudentLayout, TeacherLayout};

mod admin;
pub use admin::*;

mod staff;
pub use staff::*;

mod teacher;
pub use teacher::*;

mod student;
pub use student::*;

use ui::views::ClassFilters;

/// Class filters as carried in the URL: the teacher ids are comma-separated.
pub(crate) fn class_filters(level: &str, teachers: &str) -> ClassFilters {
    ClassFilters {
        level_id: level.to_string(),
        teacher_ids: teachers
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_filters_from_query() {
        let filters = class_filters("lvl-2", "t1, t2,,");
        assert_eq!(filters.level_id, "lvl-2");
        assert_eq!(filters.teacher_ids, vec!["t1", "t2"]);
        assert!(class_filters("", "").teacher_ids.is_empty());
    }
}
