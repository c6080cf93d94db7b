use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

impl Role {
    /// 另一个演示角色，用于角色切换
    pub fn other(self) -> Self {
        match self {
            Role::Student => Role::Admin,
            Role::Admin => Role::Student,
        }
    }
}

/// 用户数据模型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub student_id: String,
    #[serde(default)]
    pub avatar: String,
    pub role: Role,
    /// 所属社团ID
    #[serde(default)]
    pub clubs: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_member_of(&self, club_id: &str) -> bool {
        self.clubs.iter().any(|id| id == club_id)
    }
}
