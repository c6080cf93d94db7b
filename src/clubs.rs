use crate::models::{Club, User};

/// 按名称或简介搜索社团，不区分大小写，空查询返回全部
pub fn search<'a>(clubs: &'a [Club], query: &str) -> Vec<&'a Club> {
    let query = query.to_lowercase();
    clubs
        .iter()
        .filter(|club| {
            club.name.to_lowercase().contains(&query)
                || club.short_description.to_lowercase().contains(&query)
        })
        .collect()
}

/// 用户所属的社团
pub fn for_user<'a>(clubs: &'a [Club], user: &User) -> Vec<&'a Club> {
    clubs.iter().filter(|club| user.is_member_of(&club.id)).collect()
}

pub fn by_id<'a>(clubs: &'a [Club], club_id: &str) -> Option<&'a Club> {
    clubs.iter().find(|club| club.id == club_id)
}
