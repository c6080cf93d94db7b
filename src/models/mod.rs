/// 持久化数据模型
/// 所有记录以 camelCase 字段名序列化为 JSON，与存储中的布局一致
pub mod club;
pub mod event;
pub mod post;
pub mod request;
pub mod user;

pub use club::{Club, ClubMember};
pub use event::Event;
pub use post::{Post, Visibility};
pub use request::{Request, RequestStatus, RequestType};
pub use user::{Role, User};
