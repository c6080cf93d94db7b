use super::{date, demo_user, timestamp};
use crate::models::{Request, RequestStatus, RequestType, Role, User};

fn student(id: &str, name: &str, email: &str, student_id: &str, clubs: &[&str]) -> User {
    User {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        student_id: student_id.into(),
        avatar: String::new(),
        role: Role::Student,
        clubs: clubs.iter().map(|c| c.to_string()).collect(),
        created_at: timestamp(2024, 2, 1, 0, 0),
    }
}

pub fn users() -> Vec<User> {
    vec![
        demo_user(Role::Student),
        demo_user(Role::Admin),
        student("user-2", "Carlos Mendez", "carlos.mendez@ub.edu.bz", "2023100245", &["acm", "arts"]),
        student("user-3", "Aisha Flowers", "aisha.flowers@ub.edu.bz", "2022087731", &["acm", "debate"]),
        student("user-4", "Kevin Usher", "kevin.usher@ub.edu.bz", "2024011902", &["robotics"]),
        student("user-5", "Maria Chan", "maria.chan@ub.edu.bz", "2023055418", &["environmental", "arts"]),
    ]
}

fn request(
    id: &str,
    kind: RequestType,
    status: RequestStatus,
    student: (&str, &str),
    club: (&str, &str),
    requested_on: (i32, u32, u32),
) -> Request {
    Request {
        id: id.into(),
        kind,
        status,
        student_id: student.0.into(),
        student_name: student.1.into(),
        student_avatar: String::new(),
        club_id: club.0.into(),
        club_name: club.1.into(),
        request_date: date(requested_on.0, requested_on.1, requested_on.2),
        processed_date: None,
        denial_reason: None,
    }
}

pub fn requests() -> Vec<Request> {
    use RequestStatus::*;
    use RequestType::*;

    vec![
        request(
            "req-1",
            Join,
            Pending,
            ("2024011902", "Kevin Usher"),
            ("acm", "ACM Student Chapter"),
            (2025, 2, 3),
        ),
        request(
            "req-2",
            Join,
            Pending,
            ("2023055418", "Maria Chan"),
            ("debate", "Debate Society"),
            (2025, 2, 10),
        ),
        request(
            "req-3",
            Join,
            Approved,
            ("2022087731", "Aisha Flowers"),
            ("debate", "Debate Society"),
            (2025, 1, 18),
        ),
        request(
            "req-4",
            Update,
            Pending,
            ("2023100245", "Carlos Mendez"),
            ("arts", "Arts & Culture Club"),
            (2025, 2, 14),
        ),
        request(
            "req-5",
            Join,
            Denied,
            ("2024011902", "Kevin Usher"),
            ("environmental", "Eco Warriors"),
            (2025, 1, 9),
        ),
        request(
            "req-6",
            Create,
            Pending,
            ("2025123456", "Jane Doe"),
            ("robotics", "Robotics Club"),
            (2025, 2, 20),
        ),
    ]
}
