use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 社团活动，只读的种子数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub club_id: String,
    pub club_name: String,
    pub date: NaiveDate,
    /// 展示用的时间文本，例如 "6:00 PM"
    pub time: String,
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<u32>,
}
