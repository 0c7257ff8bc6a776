//! InMemory Resource Repository 実装
//!
//! ドメイン層が定義する ResourceRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! ## 技術的負債
//!
//! レコードは id をキーとする HashMap と挿入順の id リストで二重管理して
//! います（id 検索は定数時間、一覧は挿入順）。データはプロセス終了とともに
//! 失われます。将来 PostgreSQL などの DBMS を実装する際は、以下の変換層が
//! 必要になります：
//!
//! ```text
//! DB Row/JSON → RecordData (DTO) → R (ドメインモデル)
//! ```

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    RepositoryError, Resource, ResourceIdFactory, ResourcePredicate, ResourceRepository, Timestamp,
};

/// Record table: id → record mapping plus insertion-order index.
struct ResourceTable<R> {
    by_id: HashMap<String, R>,
    order: Vec<String>,
}

impl<R> ResourceTable<R> {
    fn new() -> Self {
        Self {
            by_id: HashMap::new(),
            order: Vec::new(),
        }
    }
}

/// インメモリ Resource Repository 実装
///
/// HashMap をインメモリ DB として使用する実装。
/// ドメイン層の ResourceRepository trait を実装します（依存性の逆転）。
pub struct InMemoryResourceRepository<R: Resource> {
    table: Arc<Mutex<ResourceTable<R>>>,
}

impl<R: Resource> InMemoryResourceRepository<R> {
    /// 新しい InMemoryResourceRepository を作成（起動時は空）
    pub fn new() -> Self {
        Self {
            table: Arc::new(Mutex::new(ResourceTable::new())),
        }
    }
}

impl<R: Resource> Default for InMemoryResourceRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Resource> ResourceRepository<R> for InMemoryResourceRepository<R> {
    async fn insert(&self, request: R::CreateRequest) -> R {
        let id = ResourceIdFactory::generate();
        let now = Timestamp::now();
        let record = R::from_request(id, now, request);

        let mut table = self.table.lock().await;
        let key = record.id().as_str().to_string();
        table.order.push(key.clone());
        table.by_id.insert(key, record.clone());

        record
    }

    async fn find_all(&self) -> Vec<R> {
        let table = self.table.lock().await;
        table
            .order
            .iter()
            .filter_map(|id| table.by_id.get(id))
            .cloned()
            .collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<R, RepositoryError> {
        let table = self.table.lock().await;
        table
            .by_id
            .get(id)
            .cloned()
            .ok_or(RepositoryError::NotFound(R::DISPLAY_NAME))
    }

    async fn find_matching(&self, predicate: ResourcePredicate<R>) -> Vec<R> {
        let table = self.table.lock().await;
        table
            .order
            .iter()
            .filter_map(|id| table.by_id.get(id))
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    async fn update(&self, id: &str, patch: R::Patch) -> Result<R, RepositoryError> {
        let mut table = self.table.lock().await;
        let record = table
            .by_id
            .get_mut(id)
            .ok_or(RepositoryError::NotFound(R::DISPLAY_NAME))?;

        record.merge(patch);
        // updated_at はフィールドが変化しなくても必ず更新する
        record.touch(Timestamp::now());

        Ok(record.clone())
    }

    async fn remove(&self, id: &str) -> Result<(), RepositoryError> {
        let mut table = self.table.lock().await;
        table
            .by_id
            .remove(id)
            .ok_or(RepositoryError::NotFound(R::DISPLAY_NAME))?;
        table.order.retain(|key| key != id);

        Ok(())
    }
}
