use super::{CLUB_GRADIENTS, timestamp};
use crate::models::{Club, ClubMember};

fn member(id: &str, name: &str, role: &str) -> ClubMember {
    ClubMember {
        id: id.into(),
        name: name.into(),
        role: role.into(),
        avatar: String::new(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn clubs() -> Vec<Club> {
    vec![
        Club {
            id: "acm".into(),
            name: "ACM Student Chapter".into(),
            short_description: "Computing, competitive programming and tech talks.".into(),
            full_description: "The ACM Student Chapter brings together students who enjoy \
                building software. We host weekly coding sessions, hackathons and talks \
                from local industry professionals."
                .into(),
            image: CLUB_GRADIENTS[0].into(),
            gallery: strings(&[CLUB_GRADIENTS[1], CLUB_GRADIENTS[6]]),
            projects: strings(&["Campus Events App", "Intro to Python Workshops"]),
            members: vec![
                member("user-1", "Jane Doe", "Member"),
                member("user-2", "Carlos Mendez", "President"),
                member("user-3", "Aisha Flowers", "Secretary"),
            ],
            member_count: 42,
            created_at: timestamp(2022, 8, 20, 0, 0),
        },
        Club {
            id: "robotics".into(),
            name: "Robotics Club".into(),
            short_description: "Design, build and program robots for regional contests.".into(),
            full_description: "From line followers to autonomous rovers, the Robotics Club \
                gives members hands-on experience with electronics, mechanics and embedded \
                programming."
                .into(),
            image: CLUB_GRADIENTS[1].into(),
            gallery: strings(&[CLUB_GRADIENTS[2]]),
            projects: strings(&["Autonomous Rover", "Arduino Bootcamp"]),
            members: vec![
                member("user-1", "Jane Doe", "Member"),
                member("user-4", "Kevin Usher", "Team Lead"),
            ],
            member_count: 18,
            created_at: timestamp(2023, 1, 10, 0, 0),
        },
        Club {
            id: "debate".into(),
            name: "Debate Society".into(),
            short_description: "Sharpen your public speaking and critical thinking.".into(),
            full_description: "The Debate Society trains students in parliamentary debate \
                and represents the university at national tournaments."
                .into(),
            image: CLUB_GRADIENTS[4].into(),
            gallery: Vec::new(),
            projects: strings(&["Inter-Faculty Debate Cup"]),
            members: vec![member("user-3", "Aisha Flowers", "Captain")],
            member_count: 25,
            created_at: timestamp(2021, 9, 5, 0, 0),
        },
        Club {
            id: "environmental".into(),
            name: "Eco Warriors".into(),
            short_description: "Protecting Belize's reefs, forests and campus green spaces.".into(),
            full_description: "Eco Warriors organises beach clean-ups, tree planting drives \
                and recycling initiatives across campus."
                .into(),
            image: CLUB_GRADIENTS[2].into(),
            gallery: strings(&[CLUB_GRADIENTS[6], CLUB_GRADIENTS[7]]),
            projects: strings(&["Campus Recycling Program", "Reef Clean-up Day"]),
            members: vec![member("user-5", "Maria Chan", "Coordinator")],
            member_count: 31,
            created_at: timestamp(2022, 3, 22, 0, 0),
        },
        Club {
            id: "arts".into(),
            name: "Arts & Culture Club".into(),
            short_description: "Celebrating Belizean music, dance and visual arts.".into(),
            full_description: "Members showcase Garifuna drumming, painting and theatre at \
                cultural nights held every semester."
                .into(),
            image: CLUB_GRADIENTS[5].into(),
            gallery: strings(&[CLUB_GRADIENTS[3]]),
            projects: strings(&["Cultural Night", "Campus Mural"]),
            members: vec![
                member("user-5", "Maria Chan", "Member"),
                member("user-2", "Carlos Mendez", "Treasurer"),
            ],
            member_count: 27,
            created_at: timestamp(2020, 10, 1, 0, 0),
        },
    ]
}
