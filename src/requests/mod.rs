/// 社团申请
/// 申请的创建、审核状态流转，以及管理员审核列表的筛选和批量选择
mod filter;
mod form;
mod lifecycle;

pub use filter::{RequestFilter, Selection};
pub use form::{Applicant, FULL_NAME_FIELD, JoinRequestForm, STUDENT_ID_FIELD};
pub use lifecycle::{Decision, RequestOperations};
