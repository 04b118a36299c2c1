use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    dto::user_dto::{RegisterUserPayload, UserCreatedResponse},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user_id = state.user_service.register(payload).await?;
    Ok((StatusCode::CREATED, Json(UserCreatedResponse { user_id })))
}
