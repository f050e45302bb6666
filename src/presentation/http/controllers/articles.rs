// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleView},
    queries::articles::GetArticleByIdQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
    http::{StatusCode, header::LOCATION},
};

type Payload = Result<Json<ArticleView>, JsonRejection>;

/// A body that is missing or cannot be read as an article counts as absent.
fn into_view(payload: Payload) -> Option<ArticleView> {
    match payload {
        Ok(Json(view)) => Some(view),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "article payload unreadable");
            None
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = String, Path, description = "Article identifier (UUID)")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    security(()),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    tracing::info!(article_id = %id, "articles: get article");

    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = ArticleView,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto,
            headers(("Location" = String, description = "Path of the new article"))),
        (status = 400, description = "Validation failed.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    payload: Payload,
) -> HttpResult<(StatusCode, [(axum::http::HeaderName, String); 1], Json<ArticleDto>)> {
    let payload = into_view(payload);
    tracing::info!(actor = user.display_name(), payload = ?payload, "articles: create article");

    let created = state
        .services
        .article_commands
        .create_article(&user, CreateArticleCommand { payload })
        .await
        .into_http()?;

    let location = format!("/api/articles/{}", created.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    params(("id" = String, Path, description = "Article identifier (UUID)")),
    request_body = ArticleView,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 400, description = "Validation failed, malformed id, or update refused.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = ErrorResponse),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    payload: Payload,
) -> HttpResult<Json<ArticleDto>> {
    let payload = into_view(payload);
    tracing::info!(
        actor = user.display_name(),
        article_id = %id,
        payload = ?payload,
        "articles: put article"
    );

    state
        .services
        .article_commands
        .update_article(&user, UpdateArticleCommand { id, payload })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = String, Path, description = "Article identifier (UUID)")),
    responses(
        (status = 200, description = "Article deleted.", body = StatusResponse),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token.", body = ErrorResponse),
        (status = 404, description = "No article with this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<StatusResponse>> {
    tracing::info!(actor = user.display_name(), article_id = %id, "articles: delete article");

    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
