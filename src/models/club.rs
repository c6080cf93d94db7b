use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 社团成员，内嵌在社团记录中
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubMember {
    pub id: String,
    pub name: String,
    /// 成员在社团中的职位，例如 "President"
    pub role: String,
    #[serde(default)]
    pub avatar: String,
}

/// 社团数据模型
///
/// `member_count` 是冗余字段，不会根据 `members` 重新计算。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: String,
    pub name: String,
    pub short_description: String,
    pub full_description: String,
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub members: Vec<ClubMember>,
    pub member_count: u32,
    pub created_at: DateTime<Utc>,
}
