use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::models::{Request, RequestStatus, RequestType};

/// 管理员审核列表的筛选条件
///
/// 空的状态或类型列表表示不过滤，日期范围两端都包含。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    /// 按学生姓名或学号搜索，不区分大小写
    pub search: String,
    pub statuses: Vec<RequestStatus>,
    pub types: Vec<RequestType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl RequestFilter {
    pub fn matches(&self, request: &Request) -> bool {
        if !self.search.is_empty() {
            let query = self.search.to_lowercase();
            let found = request.student_name.to_lowercase().contains(&query)
                || request.student_id.to_lowercase().contains(&query);
            if !found {
                return false;
            }
        }

        if !self.statuses.is_empty() && !self.statuses.contains(&request.status) {
            return false;
        }

        if !self.types.is_empty() && !self.types.contains(&request.kind) {
            return false;
        }

        if self.start_date.is_some_and(|start| request.request_date < start) {
            return false;
        }

        if self.end_date.is_some_and(|end| request.request_date > end) {
            return false;
        }

        true
    }

    /// 保持原有顺序返回匹配的申请
    pub fn apply<'a>(&self, requests: &'a [Request]) -> Vec<&'a Request> {
        requests.iter().filter(|r| self.matches(r)).collect()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// 批量审核的选择集合
///
/// 只有当前筛选结果中的待审核申请可以被全选。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, request_id: &str, checked: bool) {
        if checked {
            self.ids.insert(request_id.to_string());
        } else {
            self.ids.remove(request_id);
        }
    }

    /// 勾选时选中所有可见的待审核申请，取消时清空
    pub fn select_all(&mut self, visible: &[&Request], checked: bool) {
        self.ids = if checked {
            visible
                .iter()
                .filter(|r| r.is_pending())
                .map(|r| r.id.clone())
                .collect()
        } else {
            BTreeSet::new()
        };
    }

    /// 可见的待审核申请非空且全部被选中
    pub fn all_selected(&self, visible: &[&Request]) -> bool {
        let mut pending = visible.iter().filter(|r| r.is_pending()).peekable();
        pending.peek().is_some() && pending.all(|r| self.ids.contains(&r.id))
    }

    /// 部分选中，用于全选框的中间状态
    pub fn partially_selected(&self, visible: &[&Request]) -> bool {
        visible
            .iter()
            .any(|r| r.is_pending() && self.ids.contains(&r.id))
            && !self.all_selected(visible)
    }

    pub fn contains(&self, request_id: &str) -> bool {
        self.ids.contains(request_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// 取出并清空当前选择
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.ids).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ids(requests: &[&Request]) -> Vec<String> {
        requests.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let requests = fixtures::requests();
        assert_eq!(RequestFilter::default().apply(&requests).len(), requests.len());
    }

    #[test]
    fn search_covers_name_and_student_id() {
        let requests = fixtures::requests();
        let by_name = RequestFilter {
            search: "KEVIN".into(),
            ..Default::default()
        };
        assert_eq!(ids(&by_name.apply(&requests)), ["req-1", "req-5"]);

        let by_id = RequestFilter {
            search: "2025123".into(),
            ..Default::default()
        };
        assert_eq!(ids(&by_id.apply(&requests)), ["req-6"]);
    }

    #[test]
    fn status_type_and_date_filters_combine() {
        let requests = fixtures::requests();
        let filter = RequestFilter {
            statuses: vec![RequestStatus::Pending],
            types: vec![RequestType::Join, RequestType::Update],
            start_date: Some(date(2025, 2, 10)),
            end_date: Some(date(2025, 2, 14)),
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(&requests)), ["req-2", "req-4"]);
    }

    #[test]
    fn clear_resets_every_criterion() {
        let mut filter = RequestFilter {
            search: "x".into(),
            statuses: vec![RequestStatus::Denied],
            end_date: Some(date(2025, 1, 1)),
            ..Default::default()
        };
        filter.clear();
        assert_eq!(filter, RequestFilter::default());
    }

    #[test]
    fn select_all_only_takes_visible_pending() {
        let requests = fixtures::requests();
        let visible = RequestFilter::default().apply(&requests);
        let mut selection = Selection::new();

        selection.select_all(&visible, true);
        assert_eq!(selection.len(), 4);
        assert!(!selection.contains("req-3"));
        assert!(selection.all_selected(&visible));
        assert!(!selection.partially_selected(&visible));

        selection.set("req-1", false);
        assert!(!selection.all_selected(&visible));
        assert!(selection.partially_selected(&visible));

        selection.select_all(&visible, false);
        assert!(selection.is_empty());
    }

    #[test]
    fn nothing_pending_means_not_all_selected() {
        let requests = fixtures::requests();
        let decided = RequestFilter {
            statuses: vec![RequestStatus::Approved, RequestStatus::Denied],
            ..Default::default()
        };
        let visible = decided.apply(&requests);
        let selection = Selection::new();
        assert!(!selection.all_selected(&visible));
        assert!(!selection.partially_selected(&visible));
    }

    #[test]
    fn take_drains_selection() {
        let mut selection = Selection::new();
        selection.set("req-2", true);
        selection.set("req-1", true);

        assert_eq!(selection.take(), ["req-1", "req-2"]);
        assert!(selection.is_empty());
    }
}
