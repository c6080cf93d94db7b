use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::form::JoinRequestForm;
use crate::models::{Club, Request, RequestStatus, RequestType};
use crate::storage::DataStore;
use crate::validation::FieldErrors;

/// 管理员对申请的审核结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Deny,
}

impl Decision {
    pub fn status(self) -> RequestStatus {
        match self {
            Decision::Approve => RequestStatus::Approved,
            Decision::Deny => RequestStatus::Denied,
        }
    }
}

/// 申请操作
///
/// 状态机：`pending -> approved`、`pending -> denied`，两个终态不再流转。
/// 审核通过不会修改社团的成员列表或成员数。
pub struct RequestOperations {
    store: DataStore,
}

impl RequestOperations {
    pub fn new(store: DataStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Request> {
        self.store.read()
    }

    pub fn find(&self, request_id: &str) -> Option<Request> {
        self.store.find(request_id)
    }

    pub fn pending_count(&self) -> usize {
        self.list().iter().filter(|r| r.is_pending()).count()
    }

    /// 提交加入社团的申请，日期为当天（UTC）
    pub fn submit_join_request(
        &self,
        club: &Club,
        student_id: &str,
        full_name: &str,
    ) -> Result<Request, FieldErrors> {
        self.submit_join_request_on(club, student_id, full_name, Utc::now().date_naive())
    }

    /// 以指定日期提交申请，验证失败时不写入任何记录
    pub fn submit_join_request_on(
        &self,
        club: &Club,
        student_id: &str,
        full_name: &str,
        request_date: NaiveDate,
    ) -> Result<Request, FieldErrors> {
        let applicant = JoinRequestForm::new(student_id, full_name).validate()?;

        let request = Request {
            id: format!("req-{}", Uuid::new_v4().simple()),
            kind: RequestType::Join,
            status: RequestStatus::Pending,
            student_id: applicant.student_id,
            student_name: applicant.full_name,
            student_avatar: String::new(),
            club_id: club.id.clone(),
            club_name: club.name.clone(),
            request_date,
            processed_date: None,
            denial_reason: None,
        };

        self.store.append(request.clone());
        tracing::info!(
            "Join request {} submitted for club {}",
            request.id,
            request.club_id
        );
        Ok(request)
    }

    /// 审核单个申请，只修改状态字段
    ///
    /// ID不存在或申请已处于终态时什么也不做。
    pub fn set_status(&self, request_id: &str, decision: Decision) {
        let updated = self.store.update(request_id, |request: &mut Request| {
            transition(request, decision);
        });
        if updated.is_none() {
            tracing::debug!("Request {} not found, nothing to update", request_id);
        }
    }

    /// 批量审核，不存在的ID被忽略
    pub fn set_status_bulk<I, S>(&self, request_ids: I, decision: Decision)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let matched = self.store.update_many(request_ids, |request: &mut Request| {
            transition(request, decision);
        });
        tracing::debug!("Bulk {:?} matched {} requests", decision, matched);
    }
}

fn transition(request: &mut Request, decision: Decision) {
    if request.status.is_terminal() {
        tracing::debug!(
            "Request {} is already {:?}, ignoring {:?}",
            request.id,
            request.status,
            decision
        );
        return;
    }
    request.status = decision.status();
}
