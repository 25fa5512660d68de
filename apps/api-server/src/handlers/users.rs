//! User handlers.

use actix_web::{HttpResponse, web};

use board_shared::Validate;
use board_shared::dto::CreateUserRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/users
pub async fn find_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;

    if users.is_empty() {
        return Ok(HttpResponse::NoContent().finish());
    }

    Ok(HttpResponse::Ok().json(users))
}

/// POST /api/v1/users
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let new_user = body.into_inner().validate()?;
    let user = state.users.create(new_user).await?;

    Ok(HttpResponse::Created().json(user))
}
