use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::{Product, ProductImage};
use business::domain::product::value_objects::Gender;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub title: String,
    pub price: f64,
    pub description: Option<String>,
    pub slug: String,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub gender: String,
    pub tags: Vec<String>,
    pub user_id: Option<Uuid>,
}

impl ProductEntity {
    pub fn into_domain(self, images: Vec<ProductImage>) -> Product {
        Product::from_repository(
            self.id,
            self.title,
            self.price,
            self.description,
            self.slug,
            self.stock,
            self.sizes,
            self.gender.parse::<Gender>().unwrap_or(Gender::Unisex),
            self.tags,
            images,
            self.user_id,
        )
    }
}

/// Owned image row. Queries order by the table's `position` column, since
/// UUID keys carry no insertion order.
#[derive(Debug, FromRow)]
pub struct ProductImageEntity {
    pub id: Uuid,
    pub url: String,
    pub product_id: Uuid,
}

impl ProductImageEntity {
    pub fn into_domain(self) -> ProductImage {
        ProductImage::from_repository(self.id, self.url)
    }
}
