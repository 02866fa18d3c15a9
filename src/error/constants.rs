use super::const_error;

const_error!(INTERNAL, INTERNAL_SERVER_ERROR, "internal", "internal server error");
const_error!(DATABASE_ERROR, INTERNAL_SERVER_ERROR, "database", "database error");
const_error!(
    JSON_MISSING_FIELDS,
    UNPROCESSABLE_ENTITY,
    "json-missing-fields",
    "missing fields"
);
const_error!(JSON_SYNTAX_ERROR, BAD_REQUEST, "json-syntax", "syntax error");
const_error!(
    JSON_CONTENT_TYPE,
    BAD_REQUEST,
    "json-content-type",
    "missing or wrong content-type"
);
const_error!(JSON_VALIDATE_INVALID, BAD_REQUEST, "json-invalid", "invalid data");
const_error!(
    COULD_NOT_GET_CLAIMS,
    UNAUTHORIZED,
    "no-claims",
    "could not get claims"
);
const_error!(JWT_INVALID_TOKEN, UNAUTHORIZED, "invalid-token", "invalid token");
const_error!(
    WRONG_CREDENTIALS,
    UNAUTHORIZED,
    "wrong-credentials",
    "wrong username or password"
);
const_error!(
    NOT_ENOUGH_PERMISSIONS,
    FORBIDDEN,
    "forbidden",
    "not enough permissions"
);
const_error!(
    STUDENTS_ONLY,
    FORBIDDEN,
    "students-only",
    "only students can access this endpoint"
);
const_error!(
    FACULTY_ONLY,
    FORBIDDEN,
    "faculty-only",
    "only faculty can access this endpoint"
);
const_error!(
    DUPLICATE_USERNAME,
    BAD_REQUEST,
    "duplicate-username",
    "username already exists"
);
const_error!(USER_NOT_FOUND, NOT_FOUND, "user-not-found", "user not found");
const_error!(
    WRONG_USER_ROLE,
    BAD_REQUEST,
    "wrong-user-role",
    "user has the wrong role for this profile"
);
const_error!(
    PROFILE_ALREADY_EXISTS,
    BAD_REQUEST,
    "profile-exists",
    "user already has a profile"
);
const_error!(
    DUPLICATE_STUDENT_ID,
    BAD_REQUEST,
    "duplicate-student-id",
    "student id already exists"
);
const_error!(
    DUPLICATE_EMPLOYEE_ID,
    BAD_REQUEST,
    "duplicate-employee-id",
    "employee id already exists"
);
const_error!(
    STUDENT_PROFILE_NOT_FOUND,
    NOT_FOUND,
    "student-profile-not-found",
    "student profile not found"
);
const_error!(
    FACULTY_PROFILE_NOT_FOUND,
    NOT_FOUND,
    "faculty-profile-not-found",
    "faculty profile not found"
);
const_error!(
    DUPLICATE_DEPARTMENT_NAME,
    BAD_REQUEST,
    "duplicate-department-name",
    "department name already exists"
);
const_error!(
    DUPLICATE_DEPARTMENT_CODE,
    BAD_REQUEST,
    "duplicate-department-code",
    "department code already exists"
);
const_error!(
    DEPARTMENT_NOT_FOUND,
    NOT_FOUND,
    "department-not-found",
    "department not found"
);
const_error!(
    DUPLICATE_ACADEMIC_YEAR,
    BAD_REQUEST,
    "duplicate-academic-year",
    "academic year already exists"
);
const_error!(
    ACADEMIC_YEAR_NOT_FOUND,
    NOT_FOUND,
    "academic-year-not-found",
    "academic year not found"
);
const_error!(
    NO_CURRENT_ACADEMIC_YEAR,
    NOT_FOUND,
    "no-current-academic-year",
    "no current academic year set"
);
const_error!(
    DUPLICATE_COURSE_CODE,
    BAD_REQUEST,
    "duplicate-course-code",
    "course code already exists"
);
const_error!(COURSE_NOT_FOUND, NOT_FOUND, "course-not-found", "course not found");
const_error!(
    DUPLICATE_ENROLLMENT,
    BAD_REQUEST,
    "duplicate-enrollment",
    "student is already enrolled in this course for this academic year"
);
const_error!(
    ENROLLMENT_NOT_FOUND,
    NOT_FOUND,
    "enrollment-not-found",
    "enrollment not found"
);
const_error!(
    DUPLICATE_ASSIGNMENT,
    BAD_REQUEST,
    "duplicate-assignment",
    "faculty is already assigned to this course for this academic year"
);
const_error!(
    ASSIGNMENT_NOT_FOUND,
    NOT_FOUND,
    "assignment-not-found",
    "course assignment not found"
);
const_error!(
    DUPLICATE_ATTENDANCE,
    BAD_REQUEST,
    "duplicate-attendance",
    "attendance is already marked for this student, course and date"
);
const_error!(
    ATTENDANCE_NOT_FOUND,
    NOT_FOUND,
    "attendance-not-found",
    "attendance record not found"
);
const_error!(
    INVALID_REFERENCE,
    BAD_REQUEST,
    "invalid-reference",
    "referenced record does not exist"
);
