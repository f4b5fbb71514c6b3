#![forbid(unsafe_code)]

pub mod error;
pub mod http_quiz_api;
pub mod quiz_api;

pub use error::QuizApiError;
pub use reqwest::StatusCode;
pub use http_quiz_api::{HttpQuizApi, QuizApiConfig};
pub use quiz_api::{
    ErrorBody, GenerateQuizRequest, GenerateQuizResponse, QuizApi, SubmitQuizRequest,
};
