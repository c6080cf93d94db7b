use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    Join,
    Create,
    Update,
}

/// 申请状态
///
/// `Pending` 是唯一的初始状态，`Approved` 和 `Denied` 都是终态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Denied,
}

impl RequestStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

/// 社团申请
///
/// 学生和社团字段是提交时的快照。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RequestType,
    pub status: RequestStatus,
    pub student_id: String,
    pub student_name: String,
    #[serde(default)]
    pub student_avatar: String,
    pub club_id: String,
    pub club_name: String,
    pub request_date: NaiveDate,
    // 保留字段，目前没有任何流程写入
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denial_reason: Option<String>,
}

impl Request {
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}
