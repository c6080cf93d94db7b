/// 种子数据
/// 首次运行和重置时写入存储的固定记录
mod activity;
mod clubs;
mod people;

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{Role, User};

pub use activity::{events, posts};
pub use clubs::clubs;
pub use people::{requests, users};

/// 社团封面占位渐变
pub const CLUB_GRADIENTS: [&str; 8] = [
    "linear-gradient(135deg, #6B2D5B 0%, #8B4D7B 100%)",
    "linear-gradient(135deg, #2196F3 0%, #64B5F6 100%)",
    "linear-gradient(135deg, #4CAF50 0%, #81C784 100%)",
    "linear-gradient(135deg, #FF9800 0%, #FFB74D 100%)",
    "linear-gradient(135deg, #E53935 0%, #EF5350 100%)",
    "linear-gradient(135deg, #9C27B0 0%, #BA68C8 100%)",
    "linear-gradient(135deg, #00BCD4 0%, #4DD0E1 100%)",
    "linear-gradient(135deg, #795548 0%, #A1887F 100%)",
];

/// 登录时可选的演示账号
pub fn demo_user(role: Role) -> User {
    match role {
        Role::Student => User {
            id: "user-1".into(),
            name: "Jane Doe".into(),
            email: "jane.doe@ub.edu.bz".into(),
            student_id: "2025123456".into(),
            avatar: String::new(),
            role: Role::Student,
            clubs: vec!["acm".into(), "robotics".into()],
            created_at: timestamp(2024, 1, 15, 0, 0),
        },
        Role::Admin => User {
            id: "admin-1".into(),
            name: "Admin User".into(),
            email: "admin@ub.edu.bz".into(),
            student_id: "ADMIN001".into(),
            avatar: String::new(),
            role: Role::Admin,
            clubs: Vec::new(),
            created_at: timestamp(2024, 1, 1, 0, 0),
        },
    }
}

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is valid")
}

pub(crate) fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("fixture time is valid")
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_ids<'a>(ids: impl Iterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate fixture id {id}");
        }
    }

    #[test]
    fn fixture_ids_are_unique() {
        assert_unique_ids(clubs().iter().map(|c| c.id.as_str()));
        assert_unique_ids(posts().iter().map(|p| p.id.as_str()));
        assert_unique_ids(requests().iter().map(|r| r.id.as_str()));
        assert_unique_ids(events().iter().map(|e| e.id.as_str()));
        assert_unique_ids(users().iter().map(|u| u.id.as_str()));
    }

    #[test]
    fn references_point_at_seeded_clubs() {
        let club_ids: HashSet<String> = clubs().into_iter().map(|c| c.id).collect();

        for request in requests() {
            assert!(club_ids.contains(&request.club_id), "{}", request.id);
        }
        for event in events() {
            assert!(club_ids.contains(&event.club_id), "{}", event.id);
        }
        for user in users() {
            for club in &user.clubs {
                assert!(club_ids.contains(club), "{} -> {club}", user.id);
            }
        }
    }

    #[test]
    fn demo_profiles_are_seeded_users() {
        let seeded = users();
        for role in [Role::Student, Role::Admin] {
            let demo = demo_user(role);
            assert_eq!(demo.role, role);
            assert!(seeded.contains(&demo));
        }
    }
}
