use super::Question;

// (id, title, prompt, reference, enforce_order)
#[rustfmt::skip]
const BUILTIN: &[(&str, &str, &str, &str, bool)] = &[
    // Easy
    ("E1", "Names & Cities", "Show all student names and their cities.",
     "SELECT name, city FROM Students;", false),
    ("E2", "Students from Delhi", "Show all students who live in Delhi.",
     "SELECT * FROM Students WHERE city = 'Delhi';", false),
    ("E3", "Marks > 80", "List students whose marks are greater than 80.",
     "SELECT name, marks FROM Students WHERE marks > 80;", false),
    ("E4", "City starts with M", "Find students whose city starts with 'M'.",
     "SELECT * FROM Students WHERE city LIKE 'M%';", false),
    ("E5", "Total students", "Find total number of students.",
     "SELECT COUNT(*) AS total_students FROM Students;", false),
    ("E6", "Average marks", "Find average marks of all students.",
     "SELECT AVG(marks) AS avg_marks FROM Students;", false),
    ("E7", "Max & Min marks", "Find maximum and minimum marks.",
     "SELECT MAX(marks) AS max_marks, MIN(marks) AS min_marks FROM Students;", false),
    ("E8", "Students per city", "Find number of students per city.",
     "SELECT city, COUNT(*) AS total_students FROM Students GROUP BY city;", false),
    ("E9", "Delhi AND marks>80", "Find students who are from Delhi and have marks above 80.",
     "SELECT * FROM Students WHERE city='Delhi' AND marks>80;", false),
    ("E10", "Pune or Mumbai", "Find students who are from either Pune or Mumbai.",
     "SELECT * FROM Students WHERE city IN ('Pune', 'Mumbai');", false),
    ("E11", "Not Delhi", "Find students who are not from Delhi.",
     "SELECT * FROM Students WHERE city <> 'Delhi';", false),
    ("E12", "Marks between 70 and 90", "Find students with marks between 70 and 90.",
     "SELECT * FROM Students WHERE marks BETWEEN 70 AND 90;", false),
    ("E13", "UNION cities & instructors",
     "Get a list of all unique city names and instructor names using UNION.",
     "SELECT city AS name FROM Students UNION SELECT instructor AS name FROM Courses;", false),
    // Advanced
    ("A1", "Cities avg > 80", "Find cities where average marks are above 80.",
     "SELECT city, AVG(marks) AS avg_marks FROM Students GROUP BY city HAVING AVG(marks) > 80;", false),
    ("A2", "NULL marks count", "Find how many students have NULL marks.",
     "SELECT COUNT(*) AS null_marks_count FROM Students WHERE marks IS NULL;", false),
    ("A3", "Students & courses (JOIN)", "Show all students with the courses they enrolled in.",
     "SELECT s.name, c.course_name, e.grade FROM Students s JOIN Enrollments e ON s.student_id = e.student_id JOIN Courses c ON c.course_id = e.course_id;", false),
    ("A4", "Not enrolled (LEFT JOIN)", "Find students who have not enrolled in any course.",
     "SELECT s.name FROM Students s LEFT JOIN Enrollments e ON s.student_id = e.student_id WHERE e.enroll_id IS NULL;", false),
    ("A5", "Distinct names UNION", "Find all distinct names (student + instructor).",
     "SELECT name FROM Students UNION SELECT instructor FROM Courses;", false),
    ("A6", "Count all people",
     "Find total count of all people in both Students and Courses tables combined.",
     "SELECT COUNT(*) FROM (SELECT name FROM Students UNION ALL SELECT instructor FROM Courses) AS all_people;", false),
    ("A7", "Marks > avg",
     "List students with marks greater than the average marks of all students.",
     "SELECT name, marks FROM Students WHERE marks > (SELECT AVG(marks) FROM Students);", false),
    ("A8", "City with most students", "Find the city with the highest number of students.",
     "SELECT city, COUNT(*) AS total FROM Students GROUP BY city ORDER BY total DESC LIMIT 1;", false),
    ("A9", "Top per city", "Find the student(s) who have the highest marks in each city.",
     "SELECT s1.name, s1.city, s1.marks FROM Students s1 WHERE marks = (SELECT MAX(s2.marks) FROM Students s2 WHERE s2.city = s1.city);", false),
    // Mock test
    ("M1", "Marks > 75", "List all students whose marks are more than 75.",
     "SELECT * FROM Students WHERE marks > 75;", false),
    ("M2", "Count per city", "Find how many students are from each city.",
     "SELECT city, COUNT(*) AS total_students FROM Students GROUP BY city;", false),
    ("M3", "City ends with i", "Display students whose city name ends with 'i'.",
     "SELECT * FROM Students WHERE city LIKE '%i';", false),
    ("M4", "Highest & lowest marks", "Find the highest and lowest marks among all students.",
     "SELECT MAX(marks) AS max_mark, MIN(marks) AS min_mark FROM Students;", false),
    ("M5", "Cities avg > 85", "Show all cities where average marks exceed 85.",
     "SELECT city, AVG(marks) FROM Students GROUP BY city HAVING AVG(marks) > 85;", false),
    ("M6", "Enrolled >1 course", "Find students who are enrolled in more than one course.",
     "SELECT student_id, COUNT(*) AS cnt FROM Enrollments GROUP BY student_id HAVING COUNT(*) > 1;", false),
    ("M7", "Students & grades", "List all students and their respective grades using JOIN.",
     "SELECT s.name, c.course_name, e.grade FROM Students s JOIN Enrollments e ON s.student_id=e.student_id JOIN Courses c ON c.course_id=e.course_id;", false),
    ("M8", "Unique people count",
     "Find the total number of unique instructors and students combined.",
     "SELECT COUNT(*) FROM (SELECT name FROM Students UNION SELECT instructor FROM Courses) AS all_people;", false),
    ("M9", "Top performer", "Show the name and marks of the top-performing student(s).",
     "SELECT name, marks FROM Students WHERE marks = (SELECT MAX(marks) FROM Students);", false),
    ("M10", "Count NULL marks", "Display the count of students with NULL marks.",
     "SELECT COUNT(*) FROM Students WHERE marks IS NULL;", false),
];

pub fn builtin_questions() -> Vec<Question> {
    BUILTIN
        .iter()
        .map(|(id, title, prompt, reference, enforce_order)| Question {
            id: id.to_string(),
            title: title.to_string(),
            prompt: prompt.to_string(),
            reference: reference.to_string(),
            enforce_order: *enforce_order,
            group: None,
        })
        .collect()
}
