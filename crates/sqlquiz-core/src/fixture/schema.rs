//! Sample school dataset: schema and seed rows.

pub const DDL: &str = r#"
CREATE TABLE Students (
    student_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    city TEXT,
    marks INTEGER,
    age INTEGER
);

CREATE TABLE Courses (
    course_id INTEGER PRIMARY KEY AUTOINCREMENT,
    course_name TEXT,
    instructor TEXT
);

CREATE TABLE Enrollments (
    enroll_id INTEGER PRIMARY KEY AUTOINCREMENT,
    student_id INTEGER,
    course_id INTEGER,
    grade TEXT,
    FOREIGN KEY (student_id) REFERENCES Students(student_id),
    FOREIGN KEY (course_id) REFERENCES Courses(course_id)
);
"#;

/// (name, city, marks, age)
pub const STUDENTS: &[(&str, &str, Option<i64>, i64)] = &[
    ("Riya", "Delhi", Some(88), 20),
    ("Aarav", "Mumbai", Some(92), 21),
    ("Neha", "Pune", Some(70), 19),
    ("Kabir", "Delhi", Some(85), 22),
    ("Zara", "Chennai", Some(95), 20),
    ("Anaya", "Pune", None, 21),
    ("Rohit", "Delhi", Some(60), 23),
    ("Maya", "Mumbai", Some(75), 22),
];

/// (course_name, instructor)
pub const COURSES: &[(&str, &str)] = &[
    ("Math", "Dr. Mehta"),
    ("Science", "Prof. Rao"),
    ("English", "Dr. Singh"),
    ("History", "Prof. Das"),
];

/// (student_id, course_id, grade)
pub const ENROLLMENTS: &[(i64, i64, &str)] = &[
    (1, 1, "A"),
    (2, 1, "B"),
    (3, 2, "C"),
    (4, 3, "A"),
    (5, 2, "A"),
    (6, 3, "B"),
    (7, 4, "C"),
    (8, 1, "B"),
];
