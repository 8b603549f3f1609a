use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::find_one::{
    FindOneProductParams, FindOneProductUseCase,
};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::pagination::PageQuery;
use business::domain::user::model::ROLE_ADMIN;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::api::security::{JwtBearer, has_required_role};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    find_one_use_case: Arc<dyn FindOneProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        find_one_use_case: Arc<dyn FindOneProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            find_one_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn forbidden() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "Forbidden".to_string(),
        message: "auth.missing_role".to_string(),
    })
}

/// Product catalog API
///
/// Endpoints for creating, reading, updating, and deleting catalog products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Requires an admin account. The image list is stored as owned rows of
    /// the new product.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        auth: JwtBearer,
        body: Json<CreateProductRequest>,
    ) -> CreateProductResponse {
        if !has_required_role(&auth.0, &[ROLE_ADMIN]) {
            return CreateProductResponse::Forbidden(forbidden());
        }

        let params = CreateProductParams {
            title: body.0.title,
            price: body.0.price,
            description: body.0.description,
            slug: body.0.slug,
            stock: body.0.stock,
            sizes: body.0.sizes,
            gender: body.0.gender.into(),
            tags: body.0.tags.unwrap_or_default(),
            images: body.0.images.unwrap_or_default(),
            user_id: Some(auth.0.id),
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products
    ///
    /// Paginated listing ordered by price. `sort` accepts `asc`/`desc` or the
    /// numeric codes `1`/`-1`.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        /// Page size, a positive integer (default 10)
        take: Query<Option<u32>>,
        /// Rows to skip, a positive integer (default 0)
        skip: Query<Option<u32>>,
        /// Sort direction: asc, desc, 1 or -1
        sort: Query<Option<String>>,
    ) -> GetAllProductsResponse {
        let query = PageQuery {
            take: take.0,
            skip: skip.0,
            sort: sort.0,
        };

        match self.get_all_use_case.execute(query).await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by id or slug
    ///
    /// A term shaped like a UUID is looked up by id, anything else by slug.
    #[oai(path = "/products/:term", method = "get", tag = "ApiTags::Products")]
    async fn find_one_product(&self, term: Path<String>) -> FindOneProductResponse {
        match self
            .find_one_use_case
            .execute(FindOneProductParams { term: term.0 })
            .await
        {
            Ok(product) => FindOneProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => FindOneProductResponse::NotFound(json),
                    _ => FindOneProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Requires an admin account. Scalar fields merge; an `images` list fully
    /// replaces the stored collection, omitting it leaves the collection
    /// untouched.
    #[oai(path = "/products/:term", method = "patch", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        auth: JwtBearer,
        /// Product id (UUID); slugs are not accepted on updates
        term: Path<String>,
        body: Json<UpdateProductRequest>,
    ) -> UpdateProductResponse {
        if !has_required_role(&auth.0, &[ROLE_ADMIN]) {
            return UpdateProductResponse::Forbidden(forbidden());
        }

        let uuid = match Uuid::parse_str(&term.0) {
            Ok(uuid) => uuid,
            Err(_) => {
                return UpdateProductResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "product.invalid_id".to_string(),
                }));
            }
        };

        let params = UpdateProductParams {
            id: uuid,
            title: body.0.title,
            price: body.0.price,
            description: body.0.description,
            slug: body.0.slug,
            stock: body.0.stock,
            sizes: body.0.sizes,
            gender: body.0.gender.map(|g| g.into()),
            tags: body.0.tags,
            images: body.0.images,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product by id or slug
    ///
    /// Requires an admin account. The term resolves exactly like the read
    /// path; owned images are removed with the product.
    #[oai(path = "/products/:term", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, auth: JwtBearer, term: Path<String>) -> DeleteProductResponse {
        if !has_required_role(&auth.0, &[ROLE_ADMIN]) {
            return DeleteProductResponse::Forbidden(forbidden());
        }

        match self
            .delete_use_case
            .execute(DeleteProductParams { term: term.0 })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FindOneProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
