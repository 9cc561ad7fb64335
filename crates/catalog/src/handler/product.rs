use crate::{
    abstract_trait::DynProductService,
    domain::{
        requests::{CreateProductRequest, FindAllRequest, UpdateProductRequest},
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

pub async fn get_products(
    Extension(service): Extension<DynProductService>,
    Query(params): Query<FindAllRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let (page, page_size) = params.normalize();

    let (products, total) = service.find_all(page, page_size).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponsePagination::success(
            "Products found",
            products,
            Metadata::new(total, page, page_size),
        )),
    ))
}

pub async fn get_product(
    Extension(service): Extension<DynProductService>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(id)?;

    let product = service.find_by_id(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Product found", product)),
    ))
}

pub async fn create_product(
    Extension(service): Extension<DynProductService>,
    ValidatedJson(body): ValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let product = service.create(&body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Product created successfully", product)),
    ))
}

pub async fn update_product(
    Extension(service): Extension<DynProductService>,
    id: Result<Path<i32>, PathRejection>,
    ValidatedJson(body): ValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(id)?;

    let product = service.update(id, &body).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Product updated successfully", product)),
    ))
}

pub async fn delete_product(
    Extension(service): Extension<DynProductService>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(id)?;

    service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Product deleted successfully")),
    ))
}

pub fn product_routes(app_state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/api/products", get(get_products))
        .route("/api/products", post(create_product))
        .route("/api/products/{id}", get(get_product))
        .route("/api/products/{id}", put(update_product))
        .route("/api/products/{id}", delete(delete_product))
        .layer(Extension(app_state.di_container.product_service.clone()))
}
