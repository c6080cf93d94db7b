use crate::fixtures;
use crate::models::{Role, User};
use crate::storage::DataStore;

/// 会话上下文
///
/// 显式持有当前用户和存储，由调用方传递给各个操作，而不是从全局状态读取。
/// 是否登录、是否管理员都由当前用户推导，不单独保存。
#[derive(Debug, Clone)]
pub struct Session {
    store: DataStore,
    user: Option<User>,
}

impl Session {
    /// 从存储恢复上一次的会话用户
    pub fn restore(store: DataStore) -> Self {
        let user = store.session_user();
        if let Some(ref u) = user {
            tracing::debug!("Restored session for {}", u.id);
        }
        Self { store, user }
    }

    /// 注入指定用户，不读取存储
    pub fn with_user(store: DataStore, user: Option<User>) -> Self {
        Self { store, user }
    }

    /// 不接触持久化的会话
    pub fn detached(user: Option<User>) -> Self {
        Self::with_user(DataStore::detached(), user)
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    /// 以演示账号登录并持久化
    pub fn login(&mut self, role: Role) -> &User {
        let user = fixtures::demo_user(role);
        self.store.put_session_user(&user);
        tracing::info!("Signed in as {} ({:?})", user.name, role);
        self.user.insert(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!("Signed out {}", user.id);
        }
        self.store.clear_session_user();
    }

    /// 在两个演示账号之间切换，未登录时不做任何事
    pub fn switch_role(&mut self) -> Option<&User> {
        let role = self.user.as_ref()?.role.other();
        Some(self.login(role))
    }
}
