use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::server::auth::BearerCredential;
use crate::server::state::AppState;
use crate::types::api::{ProcessMatrixRequest, ProcessingOutcome};
use crate::{Error, Result};

/// POST /matrix/process - Validate, rotate, factorize and enrich a matrix
///
/// Responds 200 even when the stats service is unavailable; the body then
/// carries an `error` note in place of `nodeStats`.
pub async fn process_matrix(
    State(state): State<AppState>,
    credential: BearerCredential,
    payload: std::result::Result<Json<ProcessMatrixRequest>, JsonRejection>,
) -> Result<Json<ProcessingOutcome>> {
    let Json(request) =
        payload.map_err(|e| Error::InvalidRequest(format!("invalid JSON body: {}", e.body_text())))?;

    let outcome = state
        .pipeline()
        .process(request.matrix, credential.as_str())
        .await?;

    Ok(Json(outcome))
}
