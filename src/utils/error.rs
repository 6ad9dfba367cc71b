use thiserror::Error;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::Request;
use rocket::Response;
use rocket::http::ContentType;
use std::io::Cursor;
use serde_json::json;
use serde::Serialize;
use rocket_okapi::JsonSchema;

#[derive(Error, Debug, Serialize, JsonSchema)]
pub enum AppError {
    #[error("Format error: {0}")]
    FormatError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Data source error: {0}")]
    DataSource(String),
}

// Snapshot file is not valid JSON
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DataSource(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

// Define a type alias for the result type
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> Status {
        match self {
            // Durations are parsed while sorting, which absorbs format errors
            AppError::FormatError(_) | AppError::ValidationError(_) | AppError::BadRequest(_) => {
                Status::BadRequest
            }
            AppError::NotFound(_) => Status::NotFound,
            AppError::DataSource(_) => Status::InternalServerError,
        }
    }
}

// Format all errors from the route level as a JSON response
#[rocket::async_trait]
impl<'r> Responder<'r, 'static> for AppError {
    fn respond_to(self, _: &'r Request<'_>) -> rocket::response::Result<'static> {
        let status = self.status();
        if status == Status::InternalServerError {
            tracing::error!("{}", self);
        }

        let json = json!({
            "error": self.to_string()
        });

        Response::build()
            .status(status)
            .header(ContentType::JSON)
            .sized_body(None, Cursor::new(json.to_string()))
            .ok()
    }
}
