use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use shared::{errors::ErrorResponse, validation::ValidateRequest};

/// JSON body extractor that runs the request's rule table after decoding.
/// Malformed bodies and rule violations both reject with 400 before the
/// handler runs, so no partial mutation can occur.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + ValidateRequest + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Invalid request body")),
            )
                .into_response()
        })?;

        let errors = value.validate();
        if !errors.is_empty() {
            return Err(shared::errors::HttpError::Validation(errors).into_response());
        }

        Ok(Self(value))
    }
}
