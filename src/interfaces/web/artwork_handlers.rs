use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use tracing::{info, warn};

use super::error_response::ErrorResponse;
use super::models::{ApiResponse, ArtworkView, UploadStatusResponse};
use super::status_board::UploadStatusBoard;
use crate::application::use_cases::{
    AddArtworkUseCase, LoadGalleryUseCase, RemoveArtworkUseCase, SendContactMessageUseCase,
};
use crate::config::{AuthPolicy, GalleryConfig};
use crate::domain::artwork::entities::ImageFile;
use crate::domain::artwork::ports::{ArtworkStore, DescriptionGenerator, ImageHost};
use crate::domain::contact::FormRelay;
use crate::infrastructure::clients::{
    GeminiDescriber, ImgurImageHost, NetlifyFormRelay, XanoArtworkStore,
};

/// 受け付ける画像形式
const ACCEPTED_MIME_TYPES: &[&str] = &["image/png", "image/jpeg", "image/gif"];

/// Webハンドラが共有するアプリケーション状態
pub struct GalleryState {
    pub add_artwork: AddArtworkUseCase,
    pub load_gallery: LoadGalleryUseCase,
    pub remove_artwork: RemoveArtworkUseCase,
    pub send_contact: SendContactMessageUseCase,
    pub auth: AuthPolicy,
    pub status: UploadStatusBoard,
}

impl GalleryState {
    /// 設定から本番のクライアント一式を組み立てる
    pub fn from_config(config: &GalleryConfig) -> Self {
        let image_host: Arc<dyn ImageHost> = Arc::new(ImgurImageHost::new(
            config.imgur_upload_url.clone(),
            config.imgur_client_id.clone(),
        ));
        let describer: Arc<dyn DescriptionGenerator> = Arc::new(GeminiDescriber::new(
            config.gemini_base_url.clone(),
            config.gemini_model.clone(),
            config.gemini_api_key.clone(),
        ));
        let store: Arc<dyn ArtworkStore> =
            Arc::new(XanoArtworkStore::new(config.xano_endpoint.clone()));
        let relay: Option<Arc<dyn FormRelay>> = config
            .contact_form_endpoint
            .clone()
            .map(|endpoint| Arc::new(NetlifyFormRelay::new(endpoint)) as Arc<dyn FormRelay>);

        Self {
            add_artwork: AddArtworkUseCase::new(image_host, describer, store.clone()),
            load_gallery: LoadGalleryUseCase::new(store.clone()),
            remove_artwork: RemoveArtworkUseCase::new(store),
            send_contact: SendContactMessageUseCase::new(relay),
            auth: config.auth_policy(),
            status: UploadStatusBoard::new(),
        }
    }
}

/// List all artworks, newest first
pub async fn list_artworks(
    State(state): State<Arc<GalleryState>>,
) -> Result<Json<Vec<ArtworkView>>, ErrorResponse> {
    let artworks = state
        .load_gallery
        .execute()
        .await
        .map_err(|e| ErrorResponse::from(&e))?;
    Ok(Json(artworks.into_iter().map(ArtworkView::from).collect()))
}

/// Upload artwork image and run the three-step chain
pub async fn upload_artwork(
    State(state): State<Arc<GalleryState>>,
    mut multipart: Multipart,
) -> Result<Json<ArtworkView>, ErrorResponse> {
    let mut image: Option<ImageFile> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ErrorResponse::new(StatusCode::BAD_REQUEST, format!("Multipart error: {e}"))
    })? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("").to_string();
        let mime_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| {
                mime_guess::from_path(&filename)
                    .first_or_octet_stream()
                    .to_string()
            });
        let bytes = field
            .bytes()
            .await
            .map_err(|e| {
                ErrorResponse::new(StatusCode::BAD_REQUEST, format!("Read error: {e}"))
            })?
            .to_vec();
        image = Some(ImageFile::new(filename, mime_type, bytes));
    }

    let Some(image) = image else {
        return Err(ErrorResponse::new(
            StatusCode::BAD_REQUEST,
            "Please select a file to upload",
        ));
    };
    if image.bytes.is_empty() {
        return Err(ErrorResponse::new(
            StatusCode::BAD_REQUEST,
            "Image file is empty",
        ));
    }
    if !ACCEPTED_MIME_TYPES.contains(&image.mime_type.as_str()) {
        warn!(mime = %image.mime_type, "Rejected upload with unsupported type");
        return Err(ErrorResponse::new(
            StatusCode::BAD_REQUEST,
            "Only PNG, JPEG and GIF images are accepted",
        ));
    }

    info!(
        filename = %image.filename,
        size = image.bytes.len(),
        "Processing artwork upload"
    );

    match state.add_artwork.execute(image, &state.status).await {
        Ok(artwork) => Ok(Json(ArtworkView::from(artwork))),
        Err(e) => {
            state.status.set_error(&e);
            Err(ErrorResponse::from(&e))
        }
    }
}

/// Current orchestrator status string, if any
pub async fn upload_status(State(state): State<Arc<GalleryState>>) -> Json<UploadStatusResponse> {
    Json(UploadStatusResponse {
        message: state.status.current(),
    })
}

/// Delete an artwork by its numeric store id
pub async fn delete_artwork(
    State(state): State<Arc<GalleryState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse>, ErrorResponse> {
    state
        .remove_artwork
        .execute(id)
        .await
        .map_err(|e| ErrorResponse::from(&e))?;

    Ok(Json(ApiResponse {
        success: true,
        message: "Artwork deleted successfully".to_string(),
    }))
}
