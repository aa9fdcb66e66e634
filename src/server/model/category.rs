//! Category domain models and parameters.

use crate::{
    model::category::{CategoryDto, CategoryProductDto, CreateCategoryDto},
    server::util::slug::slugify,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub category_id: i32,
    pub name: String,
    pub description: String,
    pub slug: String,
}

impl Category {
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            category_id: self.category_id,
            category_name: self.name,
            category_description: self.description,
            category_slug: self.slug,
        }
    }

    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            category_id: entity.category_id,
            name: entity.category_name,
            description: entity.category_description,
            slug: entity.category_slug,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
    pub description: String,
    pub slug: String,
}

impl CreateCategoryParams {
    /// Converts the request DTO, deriving the slug from the name when none was given.
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        let slug = dto
            .category_slug
            .unwrap_or_else(|| slugify(&dto.category_name));

        Self {
            name: dto.category_name,
            description: dto.category_description,
            slug,
        }
    }
}

/// Link between a category and one of its products.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryProduct {
    pub category_id: i32,
    pub product_id: i32,
}

impl CategoryProduct {
    pub fn into_dto(self) -> CategoryProductDto {
        CategoryProductDto {
            category_id: self.category_id,
            product_id: self.product_id,
        }
    }

    pub fn from_entity(entity: entity::category_product::Model) -> Self {
        Self {
            category_id: entity.category_id,
            product_id: entity.product_id,
        }
    }
}
