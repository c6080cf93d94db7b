use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 帖子可见范围
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// 动态帖子
///
/// 作者和社团字段是发帖时的快照，之后的改名不会回写到历史帖子。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub author_role: String,
    #[serde(default)]
    pub author_avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club_id: Option<String>,
    pub club_name: String,
    pub content: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub likes: u32,
    /// 相对当前浏览者的点赞状态
    #[serde(default)]
    pub is_liked: bool,
    /// 仅用于展示，从不递增
    #[serde(default)]
    pub comments: u32,
    pub created_at: DateTime<Utc>,
}
