use crate::{
    abstract_trait::DynCategoryService,
    domain::{
        requests::{CreateCategoryRequest, FindAllRequest, UpdateCategoryRequest},
        response::{ApiResponse, ApiResponsePagination, Metadata},
    },
    middleware::ValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::errors::HttpError;
use std::sync::Arc;

fn parse_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, HttpError> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(_) => Err(HttpError::BadRequest("Invalid Request".to_string())),
    }
}

pub async fn get_categories(
    Extension(service): Extension<DynCategoryService>,
    Query(params): Query<FindAllRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let (page, page_size) = params.normalize();

    let (categories, total) = service.find_all(page, page_size).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponsePagination::success(
            "Categories found",
            categories,
            Metadata::new(total, page, page_size),
        )),
    ))
}

pub async fn get_category(
    Extension(service): Extension<DynCategoryService>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(id)?;

    let category = service.find_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Category found", category)),
    ))
}

pub async fn create_category(
    Extension(service): Extension<DynCategoryService>,
    ValidatedJson(body): ValidatedJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let category = service.create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Category created successfully",
            category,
        )),
    ))
}

pub async fn update_category(
    Extension(service): Extension<DynCategoryService>,
    id: Result<Path<i32>, PathRejection>,
    ValidatedJson(body): ValidatedJson<UpdateCategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(id)?;

    let category = service.update(id, &body).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Category updated successfully",
            category,
        )),
    ))
}

pub async fn delete_category(
    Extension(service): Extension<DynCategoryService>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(id)?;

    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Category deleted successfully")),
    ))
}

pub fn category_routes(app_state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/api/categories", get(get_categories))
        .route("/api/categories", post(create_category))
        .route("/api/categories/{id}", get(get_category))
        .route("/api/categories/{id}", put(update_category))
        .route("/api/categories/{id}", delete(delete_category))
        .layer(Extension(app_state.di_container.category_service.clone()))
}
