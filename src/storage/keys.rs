/// 存储键前缀
const KEY_PREFIX: &str = "ubcms_";

/// 当前会话用户键
pub const CURRENT_USER_KEY: &str = "ubcms_current_user";

/// 初始化标记键
pub const INITIALIZED_KEY: &str = "ubcms_initialized";

/// 以整体读写的五个集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Clubs,
    Posts,
    Requests,
    Events,
    Users,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Clubs,
        Collection::Posts,
        Collection::Requests,
        Collection::Events,
        Collection::Users,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Collection::Clubs => "clubs",
            Collection::Posts => "posts",
            Collection::Requests => "requests",
            Collection::Events => "events",
            Collection::Users => "users",
        }
    }

    /// 生成集合的存储键
    pub fn key(self) -> String {
        format!("{}{}", KEY_PREFIX, self.name())
    }
}
