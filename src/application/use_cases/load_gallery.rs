//! ギャラリー読み込みユースケース

use std::sync::Arc;

use tracing::info;

use crate::domain::artwork::entities::Artwork;
use crate::domain::artwork::ports::ArtworkStore;
use crate::domain::artwork::services::sort_newest_first;
use crate::domain::errors::GalleryError;

pub struct LoadGalleryUseCase {
    store: Arc<dyn ArtworkStore>,
}

impl LoadGalleryUseCase {
    pub fn new(store: Arc<dyn ArtworkStore>) -> Self {
        Self { store }
    }

    /// 全作品を新着順で返す
    pub async fn execute(&self) -> Result<Vec<Artwork>, GalleryError> {
        let mut artworks = self.store.list().await?;
        sort_newest_first(&mut artworks);
        info!(count = artworks.len(), "Gallery loaded");
        Ok(artworks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artwork::entities::ArtworkDraft;
    use crate::domain::artwork::errors::BackendError;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    struct FixedStore(Vec<Artwork>);

    #[async_trait]
    impl ArtworkStore for FixedStore {
        async fn create(&self, _draft: &ArtworkDraft) -> Result<Artwork, BackendError> {
            unimplemented!("not used")
        }

        async fn list(&self) -> Result<Vec<Artwork>, BackendError> {
            Ok(self.0.clone())
        }

        async fn delete(&self, _id: i64) -> Result<(), BackendError> {
            Ok(())
        }
    }

    fn artwork(id: &str, year: i32) -> Artwork {
        Artwork {
            id: id.to_string(),
            title: id.to_string(),
            image_url: String::new(),
            artist: None,
            description: None,
            upload_date: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_gallery_is_sorted_newest_first() {
        let store = Arc::new(FixedStore(vec![
            artwork("old", 2022),
            artwork("new", 2025),
            artwork("mid", 2024),
        ]));
        let artworks = LoadGalleryUseCase::new(store).execute().await.unwrap();
        let ids: Vec<&str> = artworks.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }
}
