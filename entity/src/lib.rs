pub mod academic_years;
pub mod attendance;
pub mod course_assignments;
pub mod courses;
pub mod departments;
pub mod enrollments;
pub mod faculty_profiles;
pub mod student_profiles;
pub mod users;
