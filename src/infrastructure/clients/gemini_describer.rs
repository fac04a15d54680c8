//! Gemini 解説文生成クライアント
//!
//! 画像をインラインの base64 データとしてプロンプトと共に送信し、
//! ギャラリー向けの解説文を生成する。

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::artwork::entities::ImageFile;
use crate::domain::artwork::errors::GenerationError;
use crate::domain::artwork::ports::DescriptionGenerator;

fn gallery_prompt(title: &str) -> String {
    format!(
        "Describe this artwork titled \"{title}\". Focus on its visual elements, \
         style, potential mood, and theme. Provide a concise yet evocative \
         description suitable for a gallery."
    )
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<ContentPart>,
}

/// リクエストの1パート。`inline_data` か `text` のどちらかを持つ
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
}

impl GenerateContentResponse {
    /// 最初の候補のテキスト部分を連結して返す
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

pub struct GeminiDescriber {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiDescriber {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl DescriptionGenerator for GeminiDescriber {
    async fn describe(&self, image: &ImageFile, title: &str) -> Result<String, GenerationError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    ContentPart {
                        inline_data: Some(InlineData {
                            mime_type: image.mime_type.clone(),
                            data: BASE64.encode(&image.bytes),
                        }),
                        ..Default::default()
                    },
                    ContentPart {
                        text: Some(gallery_prompt(title)),
                        ..Default::default()
                    },
                ],
            }],
        };

        debug!(model = %self.model, title, "Requesting artwork description");

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini request failed: {}", e);
                GenerationError::Network(e.to_string())
            })?;

        let status = response.status();
        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = body
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| status.to_string());
            error!("Gemini API error: {}", message);
            return Err(GenerationError::Provider(message));
        }

        let description = body.text();
        if description.trim().is_empty() {
            error!("Gemini API returned no text description");
            return Err(GenerationError::EmptyResponse);
        }
        Ok(description.trim().to_string())
    }
}
