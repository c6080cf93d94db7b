use crate::models::{Club, Event, Post, Request};
use crate::storage::DataStore;

/// 管理员首页的统计数字
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub pending_requests: usize,
    pub clubs: usize,
    pub posts: usize,
    pub events: usize,
}

impl DashboardStats {
    pub fn collect(store: &DataStore) -> Self {
        Self {
            pending_requests: store
                .read::<Request>()
                .iter()
                .filter(|r| r.is_pending())
                .count(),
            clubs: store.read::<Club>().len(),
            posts: store.read::<Post>().len(),
            events: store.read::<Event>().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::{Decision, RequestOperations};
    use crate::storage::MemoryStore;

    #[test]
    fn counts_seeded_collections() {
        let store = DataStore::new(MemoryStore::new());
        store.initialize();

        let stats = DashboardStats::collect(&store);
        assert_eq!(
            stats,
            DashboardStats {
                pending_requests: 4,
                clubs: 5,
                posts: 4,
                events: 5,
            }
        );

        RequestOperations::new(store.clone()).set_status("req-1", Decision::Approve);
        assert_eq!(DashboardStats::collect(&store).pending_requests, 3);
    }
}
