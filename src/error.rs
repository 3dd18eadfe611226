use actix_web::body::BoxBody;
use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use anyhow::anyhow;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("An unspecified internal error ocurred: {0}")]
    InternalError(#[from] anyhow::Error),
    #[error("Resource not found")]
    NotFound,
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
    #[error("Referenced row does not exist: {0}")]
    ReferentialIntegrity(String),
    #[error("An unspecified internal error ocurred")]
    DatabaseError(#[from] BlockingError),
}

impl ApiError {
    fn get_error_code(&self) -> String {
        match self {
            ApiError::InternalError(_) => "IE-00500".to_string(),
            ApiError::NotFound => "NF-00404".to_string(),
            ApiError::DuplicateKey(_) => "DK-00409".to_string(),
            ApiError::ReferentialIntegrity(_) => "RI-00422".to_string(),
            ApiError::DatabaseError(_) => "DE-00500".to_string(),
        }
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(value: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};
        match value {
            Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                ApiError::DuplicateKey(info.message().to_string())
            }
            Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                ApiError::ReferentialIntegrity(info.message().to_string())
            }
            e => ApiError::InternalError(anyhow!("{}", e)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    pub message: String,
    pub status: u16,
    pub timestamp: NaiveDateTime,
    pub internal_code: String,
}

impl From<&ApiError> for ApiErrorResponse {
    fn from(value: &ApiError) -> Self {
        Self {
            message: value.to_string(),
            status: value.status_code().as_u16(),
            timestamp: chrono::Utc::now().naive_utc(),
            internal_code: value.get_error_code(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::DuplicateKey(_) => StatusCode::CONFLICT,
            ApiError::ReferentialIntegrity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code()).json(ApiErrorResponse::from(self))
    }
}
