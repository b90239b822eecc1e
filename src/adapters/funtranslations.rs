use crate::adapters::http::{join_segments, parse_base_url};
use crate::domain::errors::{TranslationError, TranslationFailure};
use crate::domain::model::TranslationStyle;
use crate::domain::ports::TranslationService;
use crate::utils::error::Result;
use crate::utils::sanitizer::replace_control_chars;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
struct TranslationResponse {
    contents: TranslationContents,
}

#[derive(Debug, Deserialize)]
struct TranslationContents {
    translated: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// [`TranslationService`] backed by https://funtranslations.com.
///
/// The public API allows 10 requests per hour. Nothing is retried here; a 429
/// comes back as [`TranslationError::RateLimited`] for the caller to handle.
#[derive(Debug, Clone)]
pub struct FunTranslationsApi {
    client: Client,
    base_url: Url,
}

impl FunTranslationsApi {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url("upstream.funtranslations_base_url", base_url)?,
        })
    }

    fn translate_url(&self, style: TranslationStyle, text: &str) -> Url {
        let endpoint = format!("{}.json", style.as_str());
        let mut url = join_segments(&self.base_url, &["translate", endpoint.as_str()]);
        // the upstream rejects unprintable characters; spaces go out as %20
        let encoded = urlencoding::encode(&replace_control_chars(text)).into_owned();
        url.set_query(Some(&format!("text={}", encoded)));
        url
    }
}

fn parse_error_body(body: &[u8]) -> std::result::Result<ErrorDetail, TranslationFailure> {
    serde_json::from_slice::<ErrorResponse>(body)
        .map(|response| response.error)
        .map_err(|e| TranslationFailure::MalformedResponse(format!("error body: {}", e)))
}

/// The upstream phrases throttling as "<what happened>. <when to retry>."; the
/// second sentence is handed to the client as is.
fn retry_hint(message: &str) -> String {
    message
        .split('.')
        .nth(1)
        .map(str::trim)
        .filter(|hint| !hint.is_empty())
        .unwrap_or_else(|| message.trim())
        .to_string()
}

#[async_trait]
impl TranslationService for FunTranslationsApi {
    async fn translate(
        &self,
        style: TranslationStyle,
        text: &str,
    ) -> std::result::Result<String, TranslationError> {
        let url = self.translate_url(style, text);
        tracing::debug!("Requesting {} translation ({} chars)", style, text.len());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TranslationFailure::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!("FunTranslations response status: {}", status);

        let body = response
            .bytes()
            .await
            .map_err(|e| TranslationFailure::Transport(e.to_string()))?;

        match status {
            StatusCode::OK => {
                let parsed: TranslationResponse = serde_json::from_slice(&body)
                    .map_err(|e| TranslationFailure::MalformedResponse(e.to_string()))?;

                let translated = parsed.contents.translated;
                if translated.is_empty() {
                    return Err(TranslationFailure::MalformedResponse(
                        "translated text is empty".to_string(),
                    )
                    .into());
                }
                Ok(translated)
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let error = parse_error_body(&body)?;
                Err(TranslationError::RateLimited {
                    retry_in: retry_hint(&error.message),
                })
            }
            other => {
                let error = parse_error_body(&body)?;
                Err(TranslationFailure::UnexpectedStatus {
                    code: other.as_u16(),
                    message: error.message,
                }
                .into())
            }
        }
    }
}
