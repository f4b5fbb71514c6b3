use std::env;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use quiz_core::{GradeReport, Quiz};

use crate::error::QuizApiError;
use crate::quiz_api::{
    ErrorBody, GenerateQuizRequest, GenerateQuizResponse, QuizApi, SubmitQuizRequest,
};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizApiConfig {
    pub base_url: String,
}

impl QuizApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Reads `QUIZ_API_URL`, falling back to a local backend.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("QUIZ_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        Self::new(base_url)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for QuizApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// `QuizApi` over HTTP with JSON bodies. One attempt per call.
#[derive(Clone)]
pub struct HttpQuizApi {
    client: Client,
    config: QuizApiConfig,
}

impl HttpQuizApi {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(QuizApiConfig::from_env())
    }

    #[must_use]
    pub fn new(config: QuizApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, QuizApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "posting quiz request");

        let response = self.client.post(url.as_str()).json(body).send().await?;
        let status = response.status();
        tracing::debug!(%url, %status, "quiz backend responded");

        if !status.is_success() {
            return Err(error_from_response(response).await);
        }
        response.json().await.map_err(|err| {
            if err.is_decode() {
                tracing::warn!(%url, error = %err, "quiz backend sent an unreadable body");
                QuizApiError::Decode(err)
            } else {
                QuizApiError::Http(err)
            }
        })
    }
}

async fn error_from_response(response: Response) -> QuizApiError {
    let status = response.status();
    let body = response.json::<ErrorBody>().await.unwrap_or_default();
    match body.error.filter(|message| !message.trim().is_empty()) {
        Some(message) => {
            tracing::warn!(%status, %message, "quiz backend reported an error");
            QuizApiError::Server { status, message }
        }
        None => {
            tracing::warn!(%status, "quiz backend failed without a message");
            QuizApiError::HttpStatus(status)
        }
    }
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn generate_quiz(&self, request: &GenerateQuizRequest) -> Result<Quiz, QuizApiError> {
        let body: GenerateQuizResponse = self.post("generate_quiz", request).await?;
        body.into_quiz(request)
    }

    async fn submit_quiz(&self, request: &SubmitQuizRequest) -> Result<GradeReport, QuizApiError> {
        self.post("submit_quiz", request).await
    }
}
