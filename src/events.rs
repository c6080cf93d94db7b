use chrono::NaiveDate;

use crate::models::Event;

/// 按日期升序排列并分为即将开始和已结束两组
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    pub upcoming: Vec<Event>,
    pub past: Vec<Event>,
}

impl Schedule {
    /// 当天的活动算作即将开始
    pub fn partition(mut events: Vec<Event>, today: NaiveDate) -> Self {
        events.sort_by_key(|e| e.date);
        let (upcoming, past): (Vec<Event>, Vec<Event>) =
            events.into_iter().partition(|e| e.date >= today);
        Self { upcoming, past }
    }
}
