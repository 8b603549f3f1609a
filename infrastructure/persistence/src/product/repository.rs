use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductImage};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::pagination::{Pagination, SortDirection};

use crate::error::map_sqlx_error;

use super::entity::{ProductEntity, ProductImageEntity};

const PRODUCT_COLUMNS: &str =
    "id, title, price, description, slug, stock, sizes, gender, tags, user_id";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_images(&self, product_id: Uuid) -> Result<Vec<ProductImage>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductImageEntity>(
            "SELECT id, url, product_id FROM product_images WHERE product_id = $1 ORDER BY position ASC, id ASC",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("product_images.load", e))?;

        Ok(rows.into_iter().map(|row| row.into_domain()).collect())
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self, page: &Pagination) -> Result<Vec<Product>, RepositoryError> {
        // Ties on price are broken by id so identical pages stay identical.
        let sql = match page.direction {
            SortDirection::Ascending => format!(
                "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY price ASC, id ASC LIMIT $1 OFFSET $2"
            ),
            SortDirection::Descending => format!(
                "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY price DESC, id ASC LIMIT $1 OFFSET $2"
            ),
        };

        let entities = sqlx::query_as::<_, ProductEntity>(&sql)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("products.get_all", e))?;

        let ids: Vec<Uuid> = entities.iter().map(|entity| entity.id).collect();
        let image_rows = sqlx::query_as::<_, ProductImageEntity>(
            "SELECT id, url, product_id FROM product_images WHERE product_id = ANY($1) ORDER BY position ASC, id ASC",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("product_images.load", e))?;

        let mut images_by_product: HashMap<Uuid, Vec<ProductImage>> = HashMap::new();
        for row in image_rows {
            images_by_product
                .entry(row.product_id)
                .or_default()
                .push(row.into_domain());
        }

        Ok(entities
            .into_iter()
            .map(|entity| {
                let images = images_by_product.remove(&entity.id).unwrap_or_default();
                entity.into_domain(images)
            })
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("products.get_by_id", e))?
        .ok_or(RepositoryError::NotFound)?;

        let images = self.load_images(entity.id).await?;
        Ok(entity.into_domain(images))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("products.get_by_slug", e))?
        .ok_or(RepositoryError::NotFound)?;

        let images = self.load_images(entity.id).await?;
        Ok(entity.into_domain(images))
    }

    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        // Product row and image rows land together or not at all.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("products.insert", e))?;

        sqlx::query(
            r#"INSERT INTO products (id, title, price, description, slug, stock, sizes, gender, tags, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)"#,
        )
        .bind(product.id)
        .bind(&product.title)
        .bind(product.price)
        .bind(&product.description)
        .bind(&product.slug)
        .bind(product.stock)
        .bind(&product.sizes)
        .bind(product.gender.to_string())
        .bind(&product.tags)
        .bind(product.user_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("products.insert", e))?;

        for (position, image) in product.images.iter().enumerate() {
            sqlx::query(
                "INSERT INTO product_images (id, url, position, product_id) VALUES ($1, $2, $3, $4)",
            )
            .bind(image.id)
            .bind(&image.url)
            .bind(position as i32)
            .bind(product.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("product_images.insert", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("products.insert", e))?;

        Ok(())
    }

    async fn update(
        &self,
        product: &Product,
        images: Option<Vec<String>>,
    ) -> Result<Product, RepositoryError> {
        // Single transaction around the scalar row and the image collection.
        // Every early return drops `tx`, which rolls back and releases the
        // connection, so no partial state is ever observable.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("products.update", e))?;

        let result = sqlx::query(
            r#"UPDATE products
            SET title = $2, price = $3, description = $4, slug = $5,
                stock = $6, sizes = $7, gender = $8, tags = $9
            WHERE id = $1"#,
        )
        .bind(product.id)
        .bind(&product.title)
        .bind(product.price)
        .bind(&product.description)
        .bind(&product.slug)
        .bind(product.stock)
        .bind(&product.sizes)
        .bind(product.gender.to_string())
        .bind(&product.tags)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("products.update", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        if let Some(urls) = &images {
            // Full replacement: drop every owned row, then stage the new
            // collection in caller order. An empty list only drops.
            sqlx::query("DELETE FROM product_images WHERE product_id = $1")
                .bind(product.id)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_sqlx_error("product_images.delete", e))?;

            for (position, url) in urls.iter().enumerate() {
                sqlx::query(
                    "INSERT INTO product_images (id, url, position, product_id) VALUES ($1, $2, $3, $4)",
                )
                .bind(Uuid::new_v4())
                .bind(url)
                .bind(position as i32)
                .bind(product.id)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_sqlx_error("product_images.insert", e))?;
            }
        }

        // Final image set as visible inside the transaction; when the patch
        // omitted images this is the untouched stored collection.
        let image_rows = sqlx::query_as::<_, ProductImageEntity>(
            "SELECT id, url, product_id FROM product_images WHERE product_id = $1 ORDER BY position ASC, id ASC",
        )
        .bind(product.id)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("product_images.load", e))?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("products.update", e))?;

        let mut updated = product.clone();
        updated.images = image_rows.into_iter().map(|row| row.into_domain()).collect();
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        // Image rows go with the product via ON DELETE CASCADE.
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("products.delete", e))?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("products.delete_all", e))?;

        Ok(result.rows_affected())
    }
}
