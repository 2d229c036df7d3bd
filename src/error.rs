use diesel::result::{DatabaseErrorKind, Error as DieselError};
use rocket::response::{Responder, Response};
use rocket::{
    http::{ContentType, Status},
    response,
    serde::json::Json,
    Request,
};
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Serialize, Debug)]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub(crate) fn new(message: String) -> ApiError {
        ApiError { message }
    }
}

#[derive(Debug)]
pub struct ErrorResponse<T = ApiError> {
    json: Json<T>,
    status: Status,
}

impl ErrorResponse<ApiError> {
    pub(crate) fn new(status: Status, message: String) -> ErrorResponse<ApiError> {
        ErrorResponse {
            json: Json(ApiError { message }),
            status,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.json.message
    }
}

impl<'r, 'o: 'r, T: Serialize> Responder<'r, 'o> for ErrorResponse<T> {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'o> {
        Response::build_from(self.json.respond_to(req)?)
            .status(self.status)
            .header(ContentType::JSON)
            .ok()
    }
}

/// Failure raised anywhere below the route handlers.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Database(#[from] DieselError),
}

impl ServiceError {
    pub fn status(&self) -> Status {
        match self {
            ServiceError::NotFound(_) => Status::NotFound,
            ServiceError::BadRequest(_) => Status::BadRequest,
            ServiceError::Conflict(_) => Status::Conflict,
            ServiceError::Database(DieselError::NotFound) => Status::NotFound,
            ServiceError::Database(DieselError::DatabaseError(kind, _)) => match kind {
                DatabaseErrorKind::UniqueViolation | DatabaseErrorKind::ForeignKeyViolation => {
                    Status::Conflict
                }
                DatabaseErrorKind::CheckViolation => Status::BadRequest,
                _ => Status::InternalServerError,
            },
            ServiceError::Database(_) => Status::InternalServerError,
        }
    }

    fn message(&self) -> String {
        match self {
            ServiceError::NotFound(msg)
            | ServiceError::BadRequest(msg)
            | ServiceError::Conflict(msg) => msg.clone(),
            ServiceError::Database(DieselError::NotFound) => "Entity not found".to_string(),
            ServiceError::Database(DieselError::DatabaseError(kind, info)) => match kind {
                DatabaseErrorKind::UniqueViolation => {
                    format!("Conflicting data: {}", info.message())
                }
                DatabaseErrorKind::ForeignKeyViolation => {
                    format!("Entity is still referenced: {}", info.message())
                }
                DatabaseErrorKind::CheckViolation => {
                    format!("Invalid data: {}", info.message())
                }
                _ => "Internal server error".to_string(),
            },
            ServiceError::Database(_) => "Internal server error".to_string(),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::BadRequest(format!("Validation failed: {}", errors))
    }
}

impl From<ServiceError> for ErrorResponse {
    fn from(err: ServiceError) -> Self {
        let status = err.status();
        if status.code >= 500 {
            tracing::error!(error = %err, "request failed");
        } else {
            tracing::warn!(status = status.code, error = %err, "request rejected");
        }

        ErrorResponse::new(status, err.message())
    }
}

/// Message a request guard leaves behind for the catcher.
#[derive(Debug, Default)]
pub(crate) struct GuardFailure(pub(crate) Option<String>);

#[catch(default)]
pub(crate) fn default_catcher(status: Status, req: &Request<'_>) -> ErrorResponse {
    // Rocket reports bodies and query values it can't bind as 422
    let status = if status == Status::UnprocessableEntity {
        Status::BadRequest
    } else {
        status
    };

    let message = req
        .local_cache(GuardFailure::default)
        .0
        .clone()
        .unwrap_or_else(|| match status.code {
            404 => format!("No route for {} {}", req.method(), req.uri()),
            400 => "Malformed request".to_string(),
            _ => status.reason().unwrap_or("Unknown error").to_string(),
        });

    ErrorResponse::new(status, message)
}
