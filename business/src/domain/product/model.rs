use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::Gender;

pub const MIN_IMAGE_URL_LEN: usize = 3;

/// Image reference owned by exactly one product. Rows never outlive their
/// product and are never shared across products.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductImage {
    pub id: Uuid,
    pub url: String,
}

impl ProductImage {
    pub fn new(url: impl Into<String>) -> Result<Self, ProductError> {
        let url = url.into();
        if url.trim().len() < MIN_IMAGE_URL_LEN {
            return Err(ProductError::ImageUrlTooShort);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            url,
        })
    }

    /// Constructor for rows already persisted in the repository (no validation).
    pub fn from_repository(id: Uuid, url: String) -> Self {
        Self { id, url }
    }
}

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub price: f64,
    pub description: Option<String>,
    pub slug: String,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub gender: Gender,
    pub tags: Vec<String>,
    pub images: Vec<ProductImage>,
    pub user_id: Option<Uuid>,
}

pub struct NewProductProps {
    pub title: String,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub stock: Option<i32>,
    pub sizes: Vec<String>,
    pub gender: Gender,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub user_id: Option<Uuid>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.title.trim().is_empty() {
            return Err(ProductError::TitleEmpty);
        }

        // A missing slug falls back to the title, normalized the same way.
        let slug = normalize_slug(props.slug.as_deref().unwrap_or(&props.title));

        let images = props
            .images
            .into_iter()
            .map(ProductImage::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: Uuid::new_v4(),
            title: props.title,
            price: props.price.unwrap_or(0.0),
            description: props.description,
            slug,
            stock: props.stock.unwrap_or(0),
            sizes: props.sizes,
            gender: props.gender,
            tags: props.tags,
            images,
            user_id: props.user_id,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        title: String,
        price: f64,
        description: Option<String>,
        slug: String,
        stock: i32,
        sizes: Vec<String>,
        gender: Gender,
        tags: Vec<String>,
        images: Vec<ProductImage>,
        user_id: Option<Uuid>,
    ) -> Self {
        Self {
            id,
            title,
            price,
            description,
            slug,
            stock,
            sizes,
            gender,
            tags,
            images,
            user_id,
        }
    }

    /// Flat list of image URLs, the only image shape callers ever see.
    pub fn image_urls(&self) -> Vec<String> {
        self.images.iter().map(|image| image.url.clone()).collect()
    }
}

/// Canonical slug form: lower-cased, spaces become underscores, apostrophes
/// are dropped.
pub fn normalize_slug(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_").replace('\'', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_normalize_slug_casing_spaces_and_apostrophes() {
        assert_eq!(normalize_slug("Kid's Shirt"), "kids_shirt");
        assert_eq!(normalize_slug("  Men Hoodie  "), "men_hoodie");
        assert_eq!(normalize_slug("plain_slug"), "plain_slug");
    }

    #[test]
    fn should_derive_slug_from_title_when_missing() {
        let product = Product::new(NewProductProps {
            title: "Cybertruck Cap".to_string(),
            price: Some(25.0),
            description: None,
            slug: None,
            stock: Some(3),
            sizes: vec!["M".to_string()],
            gender: Gender::Unisex,
            tags: vec![],
            images: vec![],
            user_id: None,
        })
        .unwrap();

        assert_eq!(product.slug, "cybertruck_cap");
        assert_eq!(product.price, 25.0);
    }

    #[test]
    fn should_normalize_provided_slug() {
        let product = Product::new(NewProductProps {
            title: "Cap".to_string(),
            price: None,
            description: None,
            slug: Some("Women's Cap".to_string()),
            stock: None,
            sizes: vec![],
            gender: Gender::Women,
            tags: vec![],
            images: vec![],
            user_id: None,
        })
        .unwrap();

        assert_eq!(product.slug, "womens_cap");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn should_reject_product_when_title_is_empty() {
        let result = Product::new(NewProductProps {
            title: "   ".to_string(),
            price: None,
            description: None,
            slug: None,
            stock: None,
            sizes: vec![],
            gender: Gender::Men,
            tags: vec![],
            images: vec![],
            user_id: None,
        });

        assert!(matches!(result.unwrap_err(), ProductError::TitleEmpty));
    }

    #[test]
    fn should_reject_image_url_shorter_than_minimum() {
        let result = ProductImage::new("ab");
        assert!(matches!(result.unwrap_err(), ProductError::ImageUrlTooShort));

        let result = Product::new(NewProductProps {
            title: "Shirt".to_string(),
            price: None,
            description: None,
            slug: None,
            stock: None,
            sizes: vec![],
            gender: Gender::Men,
            tags: vec![],
            images: vec!["a.jpg".to_string(), "x".to_string()],
            user_id: None,
        });
        assert!(matches!(result.unwrap_err(), ProductError::ImageUrlTooShort));
    }

    #[test]
    fn should_expose_images_as_flat_urls() {
        let product = Product::new(NewProductProps {
            title: "Shirt".to_string(),
            price: Some(10.0),
            description: None,
            slug: None,
            stock: None,
            sizes: vec![],
            gender: Gender::Men,
            tags: vec![],
            images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
            user_id: None,
        })
        .unwrap();

        assert_eq!(product.image_urls(), vec!["a.jpg", "b.jpg"]);
    }
}
