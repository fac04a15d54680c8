//! アートワーク削除ユースケース

use std::sync::Arc;

use tracing::info;

use crate::domain::artwork::ports::ArtworkStore;
use crate::domain::errors::GalleryError;

pub struct RemoveArtworkUseCase {
    store: Arc<dyn ArtworkStore>,
}

impl RemoveArtworkUseCase {
    pub fn new(store: Arc<dyn ArtworkStore>) -> Self {
        Self { store }
    }

    /// 数値IDによる完全削除。失敗しても既存の表示データは保持される
    pub async fn execute(&self, id: i64) -> Result<(), GalleryError> {
        self.store.delete(id).await?;
        info!(id, "Artwork deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::artwork::entities::{Artwork, ArtworkDraft};
    use crate::domain::artwork::errors::BackendError;

    struct RecordingStore {
        deleted: Mutex<Vec<i64>>,
        fail: bool,
    }

    #[async_trait]
    impl ArtworkStore for RecordingStore {
        async fn create(&self, _draft: &ArtworkDraft) -> Result<Artwork, BackendError> {
            unreachable!("delete use case never creates records")
        }

        async fn list(&self) -> Result<Vec<Artwork>, BackendError> {
            unreachable!("delete use case never lists records")
        }

        async fn delete(&self, id: i64) -> Result<(), BackendError> {
            if self.fail {
                return Err(BackendError::Status {
                    status: 404,
                    message: "Not found".to_string(),
                });
            }
            self.deleted.lock().unwrap().push(id);
            Ok(())
        }
    }

    #[test]
    fn test_delete_forwards_numeric_id_to_store() {
        let store = Arc::new(RecordingStore {
            deleted: Mutex::new(Vec::new()),
            fail: false,
        });
        let use_case = RemoveArtworkUseCase::new(store.clone());

        tokio_test::block_on(async {
            use_case.execute(42).await.unwrap();
        });

        assert_eq!(*store.deleted.lock().unwrap(), vec![42]);
    }

    #[test]
    fn test_delete_failure_surfaces_backend_error() {
        let store = Arc::new(RecordingStore {
            deleted: Mutex::new(Vec::new()),
            fail: true,
        });
        let use_case = RemoveArtworkUseCase::new(store.clone());

        let result = tokio_test::block_on(use_case.execute(7));

        assert!(matches!(result, Err(GalleryError::Backend(_))));
        assert!(store.deleted.lock().unwrap().is_empty());
    }
}
