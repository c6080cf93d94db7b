use super::{CLUB_GRADIENTS, date, timestamp};
use crate::models::{Event, Post, Visibility};

/// 按惯例新帖在前
pub fn posts() -> Vec<Post> {
    vec![
        Post {
            id: "post-1".into(),
            author_id: "user-2".into(),
            author_name: "Carlos Mendez".into(),
            author_role: "President".into(),
            author_avatar: String::new(),
            club_id: Some("acm".into()),
            club_name: "ACM Student Chapter".into(),
            content: "Hackathon registration is now open! Teams of up to four, \
                all skill levels welcome."
                .into(),
            visibility: Visibility::Public,
            image: Some(CLUB_GRADIENTS[0].into()),
            likes: 24,
            is_liked: false,
            comments: 5,
            created_at: timestamp(2025, 2, 18, 15, 30),
        },
        Post {
            id: "post-2".into(),
            author_id: "user-4".into(),
            author_name: "Kevin Usher".into(),
            author_role: "Team Lead".into(),
            author_avatar: String::new(),
            club_id: Some("robotics".into()),
            club_name: "Robotics Club".into(),
            content: "Our rover finished second at the regional robotics challenge. \
                Thanks to everyone who stayed late in the lab!"
                .into(),
            visibility: Visibility::Public,
            image: None,
            likes: 41,
            is_liked: true,
            comments: 12,
            created_at: timestamp(2025, 2, 15, 10, 0),
        },
        Post {
            id: "post-3".into(),
            author_id: "user-5".into(),
            author_name: "Maria Chan".into(),
            author_role: "Coordinator".into(),
            author_avatar: String::new(),
            club_id: Some("environmental".into()),
            club_name: "Eco Warriors".into(),
            content: "Members only: carpool sign-up sheet for Saturday's reef clean-up \
                is pinned in the group chat."
                .into(),
            visibility: Visibility::Private,
            image: None,
            likes: 9,
            is_liked: false,
            comments: 2,
            created_at: timestamp(2025, 2, 12, 8, 45),
        },
        Post {
            id: "post-4".into(),
            author_id: "user-3".into(),
            author_name: "Aisha Flowers".into(),
            author_role: "Captain".into(),
            author_avatar: String::new(),
            club_id: Some("debate".into()),
            club_name: "Debate Society".into(),
            content: "Practice motions for next week have been posted. Come prepared \
                to argue both sides."
                .into(),
            visibility: Visibility::Public,
            image: Some(CLUB_GRADIENTS[4].into()),
            likes: 15,
            is_liked: false,
            comments: 3,
            created_at: timestamp(2025, 2, 5, 19, 20),
        },
    ]
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: "event-1".into(),
            title: "Spring Hackathon".into(),
            club_id: "acm".into(),
            club_name: "ACM Student Chapter".into(),
            date: date(2027, 3, 14),
            time: "9:00 AM".into(),
            location: "ICT Building, Lab 2".into(),
            description: "24 hours of building, mentoring and pizza.".into(),
            attendees: Some(60),
        },
        Event {
            id: "event-2".into(),
            title: "Reef Clean-up Day".into(),
            club_id: "environmental".into(),
            club_name: "Eco Warriors".into(),
            date: date(2025, 3, 1),
            time: "7:30 AM".into(),
            location: "Belize City Seawall".into(),
            description: "Gloves and bags provided. Bring sunscreen.".into(),
            attendees: Some(35),
        },
        Event {
            id: "event-3".into(),
            title: "Robotics Open Lab".into(),
            club_id: "robotics".into(),
            club_name: "Robotics Club".into(),
            date: date(2027, 1, 22),
            time: "4:00 PM".into(),
            location: "Engineering Workshop".into(),
            description: "Drop in and try soldering your first circuit.".into(),
            attendees: None,
        },
        Event {
            id: "event-4".into(),
            title: "Cultural Night".into(),
            club_id: "arts".into(),
            club_name: "Arts & Culture Club".into(),
            date: date(2025, 11, 8),
            time: "6:00 PM".into(),
            location: "Main Auditorium".into(),
            description: "Music, dance and food from across Belize.".into(),
            attendees: Some(120),
        },
        Event {
            id: "event-5".into(),
            title: "Inter-Faculty Debate Cup".into(),
            club_id: "debate".into(),
            club_name: "Debate Society".into(),
            date: date(2026, 12, 4),
            time: "2:00 PM".into(),
            location: "Lecture Hall B".into(),
            description: "Faculties go head to head on this year's motions.".into(),
            attendees: Some(80),
        },
    ]
}
