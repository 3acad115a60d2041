use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": "2d4f8a1c-9b3e-4f6a-8c7d-5e2b1a0f9d8c",
        "name": "Galvanized Steel Pipe",
        "price": 49.99,
        "quantity": 50,
        "category": "Pipes",
        "sku": "HP-001",
        "image": "https://example.com/pipe.jpg",
        "description": "Durable galvanized steel pipe."
    })
)]
pub struct Product {
    pub id: Uuid,

    #[schema(example = "Galvanized Steel Pipe")]
    pub name: String,

    #[schema(example = 49.99)]
    pub price: f64,

    /// Units in stock.
    #[schema(example = 50)]
    pub quantity: u32,

    #[schema(example = "Pipes")]
    pub category: String,

    #[schema(example = "HP-001", nullable = true)]
    pub sku: Option<String>,

    #[schema(nullable = true)]
    pub image: Option<String>,

    #[schema(nullable = true)]
    pub description: Option<String>,
}

impl Product {
    pub fn new(
        name: String,
        price: f64,
        quantity: u32,
        category: String,
        sku: Option<String>,
        image: Option<String>,
        description: Option<String>,
    ) -> Result<Self, ApiError> {
        if name.trim().is_empty() {
            return Err(ApiError::validation("Product name is required"));
        }
        if !(price >= 0.0) {
            return Err(ApiError::validation("Price must be non-negative"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            price,
            quantity,
            category,
            sku,
            image,
            description,
        })
    }
}

/// Partial update applied onto an existing product.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<u32>,
    pub category: Option<String>,
    pub sku: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
}

impl ProductPatch {
    pub fn apply(self, product: &mut Product) -> Result<(), ApiError> {
        if let Some(name) = self.name {
            if name.trim().is_empty() {
                return Err(ApiError::validation("Product name is required"));
            }
            product.name = name;
        }
        if let Some(price) = self.price {
            if !(price >= 0.0) {
                return Err(ApiError::validation("Price must be non-negative"));
            }
            product.price = price;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(sku) = self.sku {
            product.sku = Some(sku);
        }
        if let Some(image) = self.image {
            product.image = Some(image);
        }
        if let Some(description) = self.description {
            product.description = Some(description);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_price() {
        let result = Product::new("Pipe".into(), -0.01, 1, "Pipes".into(), None, None, None);
        assert!(result.is_err());
    }
}
