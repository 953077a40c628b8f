//! Hash generation handler.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use hashgen_types::hash::{HashRequest, HashResult};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/hash - Validate the input and return its hash.
///
/// The body is decoded as JSON whatever the `Content-Type` header says.
pub async fn generate_hash(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<HashResult>, AppError> {
    let request: HashRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "rejected hash request body");
        AppError::InvalidBody
    })?;

    let result = state.hash_service.generate(&request.input)?;
    Ok(Json(result))
}
