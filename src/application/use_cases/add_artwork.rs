//! アートワーク追加ユースケース
//!
//! 画像アップロード → 解説文生成 → レコード保存 の3ステップを
//! 1つの論理操作として編成する。各ステップの入力は前ステップの
//! 出力なので厳密に逐次実行される。ロールバックは行わない。

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::artwork::entities::{Artwork, ArtworkDraft, ImageFile};
use crate::domain::artwork::ports::{ArtworkStore, DescriptionGenerator, ImageHost};
use crate::domain::errors::GalleryError;

/// アップロード編成の状態
///
/// Idle → UploadingImage → GeneratingDescription → SavingRecord →
/// Done | Failed の順にのみ遷移する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadPhase {
    Idle,
    UploadingImage,
    GeneratingDescription,
    SavingRecord,
    Done,
    Failed,
}

impl UploadPhase {
    /// ユーザーに提示する進捗メッセージ
    ///
    /// Failed のメッセージはエラー内容を含むため呼び出し側で組み立てる。
    pub fn status_message(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::UploadingImage => Some("Uploading image to gallery..."),
            Self::GeneratingDescription => Some("Generating AI description..."),
            Self::SavingRecord => Some("Saving artwork details..."),
            Self::Done => Some("Artwork added successfully!"),
            Self::Failed => None,
        }
    }
}

/// 状態遷移の通知先
pub trait ProgressObserver: Send + Sync {
    fn phase_changed(&self, phase: UploadPhase);
}

/// 何も通知しないオブザーバ
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn phase_changed(&self, _phase: UploadPhase) {}
}

const DEFAULT_ARTIST: &str = "Brush Of Grace Admin";

pub struct AddArtworkUseCase {
    image_host: Arc<dyn ImageHost>,
    describer: Arc<dyn DescriptionGenerator>,
    store: Arc<dyn ArtworkStore>,
}

impl AddArtworkUseCase {
    pub fn new(
        image_host: Arc<dyn ImageHost>,
        describer: Arc<dyn DescriptionGenerator>,
        store: Arc<dyn ArtworkStore>,
    ) -> Self {
        Self {
            image_host,
            describer,
            store,
        }
    }

    pub async fn execute(
        &self,
        image: ImageFile,
        observer: &dyn ProgressObserver,
    ) -> Result<Artwork, GalleryError> {
        match self.run(image, observer).await {
            Ok(artwork) => {
                observer.phase_changed(UploadPhase::Done);
                Ok(artwork)
            }
            Err(e) => {
                observer.phase_changed(UploadPhase::Failed);
                Err(e)
            }
        }
    }

    async fn run(
        &self,
        image: ImageFile,
        observer: &dyn ProgressObserver,
    ) -> Result<Artwork, GalleryError> {
        let seed_title = image.seed_title();
        info!(title = %seed_title, "Starting artwork processing");

        observer.phase_changed(UploadPhase::UploadingImage);
        let image_url = self.image_host.upload(&image).await?;

        observer.phase_changed(UploadPhase::GeneratingDescription);
        let description = match self.describer.describe(&image, &seed_title).await {
            Ok(text) => text,
            Err(e) => {
                // ホスト済み画像は削除されず孤児として残る
                warn!(%image_url, "Description failed, hosted image is now orphaned");
                return Err(e.into());
            }
        };

        observer.phase_changed(UploadPhase::SavingRecord);
        let draft = ArtworkDraft::new(seed_title, image_url)
            .with_artist(DEFAULT_ARTIST.to_string())
            .with_description(description);
        let artwork = match self.store.create(&draft).await {
            Ok(artwork) => artwork,
            Err(e) => {
                warn!(image_url = %draft.image_url, "Save failed, hosted image is now orphaned");
                return Err(e.into());
            }
        };

        info!(id = %artwork.id, title = %artwork.title, "Artwork added");
        Ok(artwork)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artwork::errors::{BackendError, GenerationError, UploadError};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubHost {
        result: Result<String, ()>,
    }

    #[async_trait]
    impl ImageHost for StubHost {
        async fn upload(&self, _image: &ImageFile) -> Result<String, UploadError> {
            self.result
                .clone()
                .map_err(|_| UploadError::Provider("over capacity".to_string()))
        }
    }

    struct StubDescriber {
        fail: bool,
    }

    #[async_trait]
    impl DescriptionGenerator for StubDescriber {
        async fn describe(
            &self,
            _image: &ImageFile,
            title: &str,
        ) -> Result<String, GenerationError> {
            if self.fail {
                Err(GenerationError::EmptyResponse)
            } else {
                Ok(format!("**{title}**\n\nA luminous study."))
            }
        }
    }

    struct StubStore {
        creates: AtomicUsize,
    }

    impl StubStore {
        fn new() -> Self {
            Self {
                creates: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ArtworkStore for StubStore {
        async fn create(&self, draft: &ArtworkDraft) -> Result<Artwork, BackendError> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            Ok(Artwork {
                id: "42".to_string(),
                title: draft.title.clone(),
                image_url: draft.image_url.clone(),
                artist: draft.artist.clone(),
                description: draft.description.clone(),
                upload_date: draft.upload_date,
            })
        }

        async fn list(&self) -> Result<Vec<Artwork>, BackendError> {
            Ok(vec![])
        }

        async fn delete(&self, _id: i64) -> Result<(), BackendError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct Recorder {
        phases: Mutex<Vec<UploadPhase>>,
    }

    impl ProgressObserver for Recorder {
        fn phase_changed(&self, phase: UploadPhase) {
            self.phases.lock().unwrap().push(phase);
        }
    }

    fn image() -> ImageFile {
        ImageFile::new("harbor-study.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47])
    }

    fn use_case(
        host_ok: bool,
        describe_ok: bool,
    ) -> (AddArtworkUseCase, Arc<StubStore>) {
        let store = Arc::new(StubStore::new());
        let use_case = AddArtworkUseCase::new(
            Arc::new(StubHost {
                result: if host_ok {
                    Ok("https://i.imgur.com/h.png".to_string())
                } else {
                    Err(())
                },
            }),
            Arc::new(StubDescriber { fail: !describe_ok }),
            store.clone(),
        );
        (use_case, store)
    }

    #[tokio::test]
    async fn test_happy_path_walks_all_phases() {
        let (use_case, store) = use_case(true, true);
        let recorder = Recorder::default();

        let artwork = use_case.execute(image(), &recorder).await.unwrap();

        assert_eq!(artwork.id, "42");
        assert_eq!(artwork.title, "harbor-study");
        assert_eq!(store.creates.load(Ordering::SeqCst), 1);
        assert_eq!(
            *recorder.phases.lock().unwrap(),
            vec![
                UploadPhase::UploadingImage,
                UploadPhase::GeneratingDescription,
                UploadPhase::SavingRecord,
                UploadPhase::Done,
            ]
        );
    }

    #[tokio::test]
    async fn test_generation_failure_skips_save() {
        let (use_case, store) = use_case(true, false);
        let recorder = Recorder::default();

        let err = use_case.execute(image(), &recorder).await.unwrap_err();

        assert_eq!(store.creates.load(Ordering::SeqCst), 0);
        let status = format!("Error: {err}");
        assert!(status.starts_with("Error:"));
        assert_eq!(
            *recorder.phases.lock().unwrap(),
            vec![
                UploadPhase::UploadingImage,
                UploadPhase::GeneratingDescription,
                UploadPhase::Failed,
            ]
        );
    }

    #[tokio::test]
    async fn test_upload_failure_stops_chain() {
        let (use_case, store) = use_case(false, true);
        let recorder = Recorder::default();

        let err = use_case.execute(image(), &recorder).await.unwrap_err();

        assert!(err.to_string().contains("over capacity"));
        assert_eq!(store.creates.load(Ordering::SeqCst), 0);
        assert_eq!(
            *recorder.phases.lock().unwrap(),
            vec![UploadPhase::UploadingImage, UploadPhase::Failed]
        );
    }

    #[test]
    fn test_phase_status_messages() {
        assert_eq!(
            UploadPhase::UploadingImage.status_message(),
            Some("Uploading image to gallery...")
        );
        assert_eq!(
            UploadPhase::Done.status_message(),
            Some("Artwork added successfully!")
        );
        assert_eq!(UploadPhase::Idle.status_message(), None);
        assert_eq!(UploadPhase::Failed.status_message(), None);
    }

    #[test]
    fn test_draft_upload_date_is_recent() {
        let draft = ArtworkDraft::new("t".to_string(), "u".to_string());
        assert!((Utc::now() - draft.upload_date).num_seconds() < 5);
    }
}
