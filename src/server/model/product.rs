//! Product domain models and parameters.

use crate::{
    model::product::{CreateProductDto, ProductDto, UpdateProductDto},
    server::util::slug::slugify,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub description: String,
    /// Price in the smallest currency unit.
    pub price: i64,
    pub slug: String,
    pub image_id: Option<i32>,
}

impl Product {
    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            product_id: self.product_id,
            product_name: self.name,
            product_description: self.description,
            product_price: self.price,
            product_slug: self.slug,
            image_id: self.image_id,
        }
    }

    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            product_id: entity.product_id,
            name: entity.product_name,
            description: entity.product_description,
            price: entity.product_price,
            slug: entity.product_slug,
            image_id: entity.image_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProductParams {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub slug: String,
    pub image_id: Option<i32>,
}

impl CreateProductParams {
    /// Converts the request DTO, deriving the slug from the name when none was given.
    pub fn from_dto(dto: CreateProductDto) -> Self {
        let slug = dto
            .product_slug
            .unwrap_or_else(|| slugify(&dto.product_name));

        Self {
            name: dto.product_name,
            description: dto.product_description,
            price: dto.product_price,
            slug,
            image_id: dto.image_id,
        }
    }
}

/// Partial product update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub slug: Option<String>,
    pub image_id: Option<i32>,
}

impl UpdateProductParams {
    pub fn from_dto(dto: UpdateProductDto) -> Self {
        Self {
            name: dto.product_name,
            description: dto.product_description,
            price: dto.product_price,
            slug: dto.product_slug,
            image_id: dto.image_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_slug_from_name() {
        let params = CreateProductParams::from_dto(CreateProductDto {
            product_name: "Linen Shirt".to_string(),
            product_description: "Breathable".to_string(),
            product_price: 2500,
            product_slug: None,
            image_id: None,
        });

        assert_eq!(params.slug, "linen-shirt");
    }

    #[test]
    fn keeps_explicit_slug() {
        let params = CreateProductParams::from_dto(CreateProductDto {
            product_name: "Linen Shirt".to_string(),
            product_description: "Breathable".to_string(),
            product_price: 2500,
            product_slug: Some("shirt-linen".to_string()),
            image_id: None,
        });

        assert_eq!(params.slug, "shirt-linen");
    }

    #[test]
    fn converts_entity_to_dto() {
        let product = Product::from_entity(test_utils::fixture::product::entity());

        let dto = product.into_dto();

        assert_eq!(dto.product_name, test_utils::fixture::product::DEFAULT_NAME);
        assert_eq!(dto.product_price, test_utils::fixture::product::DEFAULT_PRICE);
        assert_eq!(dto.image_id, None);
    }
}
