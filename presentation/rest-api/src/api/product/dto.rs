use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;
use business::domain::product::value_objects::Gender;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum GenderDto {
    #[oai(rename = "men")]
    Men,
    #[oai(rename = "women")]
    Women,
    #[oai(rename = "kid")]
    Kid,
    #[oai(rename = "unisex")]
    Unisex,
}

impl From<Gender> for GenderDto {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Men => GenderDto::Men,
            Gender::Women => GenderDto::Women,
            Gender::Kid => GenderDto::Kid,
            Gender::Unisex => GenderDto::Unisex,
        }
    }
}

impl From<GenderDto> for Gender {
    fn from(dto: GenderDto) -> Self {
        match dto {
            GenderDto::Men => Gender::Men,
            GenderDto::Women => Gender::Women,
            GenderDto::Kid => Gender::Kid,
            GenderDto::Unisex => Gender::Unisex,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product title (cannot be empty)
    pub title: String,
    /// Price, defaults to 0
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Long description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Lookup slug; derived from the title when omitted
    #[oai(skip_serializing_if_is_none)]
    pub slug: Option<String>,
    /// Units in stock, defaults to 0
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<i32>,
    /// Available sizes
    pub sizes: Vec<String>,
    /// Target audience
    pub gender: GenderDto,
    /// Search tags
    #[oai(skip_serializing_if_is_none)]
    pub tags: Option<Vec<String>>,
    /// Image URLs (each at least 3 characters)
    #[oai(skip_serializing_if_is_none)]
    pub images: Option<Vec<String>>,
}

/// Partial update. Omitted fields keep their stored values; `images` omitted
/// keeps the stored collection, `[]` clears it, a list replaces it.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product title (cannot be empty)
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
    /// Price
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    /// Long description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Lookup slug, normalized before merge
    #[oai(skip_serializing_if_is_none)]
    pub slug: Option<String>,
    /// Units in stock
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<i32>,
    /// Available sizes
    #[oai(skip_serializing_if_is_none)]
    pub sizes: Option<Vec<String>>,
    /// Target audience
    #[oai(skip_serializing_if_is_none)]
    pub gender: Option<GenderDto>,
    /// Search tags
    #[oai(skip_serializing_if_is_none)]
    pub tags: Option<Vec<String>>,
    /// Image URLs (each at least 3 characters)
    #[oai(skip_serializing_if_is_none)]
    pub images: Option<Vec<String>>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product title
    pub title: String,
    /// Price
    pub price: f64,
    /// Long description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Lookup slug
    pub slug: String,
    /// Units in stock
    pub stock: i32,
    /// Available sizes
    pub sizes: Vec<String>,
    /// Target audience
    pub gender: GenderDto,
    /// Search tags
    pub tags: Vec<String>,
    /// Image URLs, always flat strings
    pub images: Vec<String>,
    /// Id of the user the product is attributed to
    #[oai(skip_serializing_if_is_none)]
    pub user_id: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let images = product.image_urls();
        Self {
            id: product.id.to_string(),
            title: product.title,
            price: product.price,
            description: product.description,
            slug: product.slug,
            stock: product.stock,
            sizes: product.sizes,
            gender: product.gender.into(),
            tags: product.tags,
            images,
            user_id: product.user_id.map(|id| id.to_string()),
        }
    }
}
