use crate::api::parse_id;
use crate::error::ApiError;
use crate::model::product::{Product, ProductPatch};
use crate::state::AppState;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "Galvanized Steel Pipe")]
    pub name: String,
    #[schema(example = 49.99)]
    pub price: f64,
    #[schema(example = 50)]
    pub quantity: u32,
    #[schema(example = "Pipes")]
    pub category: String,
    pub sku: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    #[schema(example = 5)]
    pub total_products: usize,
    #[schema(example = 400)]
    pub total_stock: u64,
    /// Sum of price times stock over the whole catalog.
    #[schema(example = 12345.67)]
    pub total_value: f64,
}

/// List Products
#[utoipa::path(
    get,
    path = "/api/products",
    responses((status = 200, description = "All products", body = [Product])),
    tag = "Catalog"
)]
pub async fn list_products(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(state.products.list()?))
}

/// Get Product by ID
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id", Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found")
    ),
    tag = "Catalog"
)]
pub async fn get_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, "Product")?;
    Ok(HttpResponse::Ok().json(state.products.get(id)?))
}

/// Create Product
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid field value")
    ),
    tag = "Catalog"
)]
pub async fn create_product(
    state: web::Data<AppState>,
    payload: web::Json<CreateProduct>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let product = Product::new(
        payload.name,
        payload.price,
        payload.quantity,
        payload.category,
        payload.sku,
        payload.image,
        payload.description,
    )?;
    let saved = state.products.create(product)?;
    Ok(HttpResponse::Created().json(saved))
}

/// Update Product
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id", Path, description = "Product ID")),
    request_body = ProductPatch,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 404, description = "Product not found")
    ),
    tag = "Catalog"
)]
pub async fn update_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<ProductPatch>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, "Product")?;
    Ok(HttpResponse::Ok().json(state.products.update(id, payload.into_inner())?))
}

/// Delete Product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id", Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found")
    ),
    tag = "Catalog"
)]
pub async fn delete_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path, "Product")?;
    state.products.delete(id)?;
    Ok(HttpResponse::Ok().json(json!({
        "message": "Product deleted successfully"
    })))
}

/// Catalog Stats
#[utoipa::path(
    get,
    path = "/api/products/stats",
    responses((status = 200, description = "Catalog totals", body = CatalogStats)),
    tag = "Catalog"
)]
pub async fn catalog_stats(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let products = state.products.list()?;
    let stats = CatalogStats {
        total_products: products.len(),
        total_stock: products.iter().map(|p| p.quantity as u64).sum(),
        total_value: products
            .iter()
            .map(|p| p.price * p.quantity as f64)
            .sum(),
    };
    Ok(HttpResponse::Ok().json(stats))
}
