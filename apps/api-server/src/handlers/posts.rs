//! Post handlers.

use actix_web::{HttpResponse, web};

use board_shared::Validate;
use board_shared::dto::{CreatePostRequest, PageQuery, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/posts?page=&size=&sort=
pub async fn find(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let request = query.into_inner().validate()?;
    let page = state.posts.get_page(request).await?;

    if page.is_empty {
        return Ok(HttpResponse::NoContent().finish());
    }

    Ok(HttpResponse::Ok().json(page))
}

/// POST /api/v1/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let new_post = body.into_inner().validate()?;
    let post = state.posts.create(new_post).await?;

    Ok(HttpResponse::Created().json(post))
}

/// GET /api/v1/posts/{id}
pub async fn find_by_id(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let post = state.posts.find_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// PUT /api/v1/posts/{id}
pub async fn update_by_id(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let changes = body.into_inner().validate()?;
    let post = state.posts.update_by_id(path.into_inner(), changes).await?;

    Ok(HttpResponse::Ok().json(post))
}
