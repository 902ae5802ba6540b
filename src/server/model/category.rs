use crate::model::category::{CategoryDto, CategoryFormDto, SubcategoryDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Subcategory {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
}

impl Subcategory {
    pub fn from_entity(entity: entity::subcategory::Model) -> Self {
        Self {
            id: entity.id,
            category_id: entity.category_id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> SubcategoryDto {
        SubcategoryDto {
            id: self.id,
            category_id: self.category_id,
            name: self.name,
        }
    }
}

/// A top-level catalogue category with its subcategories.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    pub fn from_entity(
        entity: entity::category::Model,
        subcategories: Vec<entity::subcategory::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            image_url: entity.image_url,
            subcategories: subcategories
                .into_iter()
                .map(Subcategory::from_entity)
                .collect(),
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            image_url: self.image_url,
            subcategories: self
                .subcategories
                .into_iter()
                .map(Subcategory::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CategoryParams {
    pub name: String,
    pub image_url: Option<String>,
}

impl CategoryParams {
    pub fn from_dto(dto: CategoryFormDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            image_url: dto.image_url,
        }
    }
}
