use super::record::Record;
use super::store::DataStore;

/// 单个集合的读穿缓存
///
/// 视图只从这里读取数据。所有修改通过 [`CollectionView::apply`] 写入存储后
/// 重新加载，渲染的内容始终等于已持久化的内容。
#[derive(Debug, Clone)]
pub struct CollectionView<T> {
    store: DataStore,
    records: Option<Vec<T>>,
}

impl<T: Record> CollectionView<T> {
    pub fn new(store: DataStore) -> Self {
        Self {
            store,
            records: None,
        }
    }

    /// 缓存的记录，首次访问或失效后从存储加载
    pub fn records(&mut self) -> &[T] {
        let store = &self.store;
        self.records.get_or_insert_with(|| {
            tracing::debug!("Loading {} into view", T::COLLECTION.name());
            store.read()
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.records.is_some()
    }

    /// 丢弃缓存，下次访问时重新读取
    pub fn invalidate(&mut self) {
        self.records = None;
    }

    /// 对存储执行修改并使缓存失效，返回修改的结果
    pub fn apply<R>(&mut self, op: impl FnOnce(&DataStore) -> R) -> R {
        let result = op(&self.store);
        self.invalidate();
        result
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }
}
