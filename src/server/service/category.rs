use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{Category, CategoryParams, Subcategory},
    util::validate::require_non_empty,
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    /// # Returns
    /// - `Ok(Category)` - Created category
    /// - `Err(AppError::Conflict)` - A category with that name exists
    pub async fn create_category(&self, mut params: CategoryParams) -> Result<Category, AppError> {
        params.name = require_non_empty("Category name", &params.name)?;

        CategoryRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| AppError::from_db_conflict(e, "Category name already exists"))
    }

    pub async fn update_category(
        &self,
        id: i32,
        mut params: CategoryParams,
    ) -> Result<Category, AppError> {
        params.name = require_non_empty("Category name", &params.name)?;
        let repo = CategoryRepository::new(self.db);

        let updated = repo
            .update(id, params)
            .await
            .map_err(|e| AppError::from_db_conflict(e, "Category name already exists"))?;
        if !updated {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// # Returns
    /// - `Ok(())` - Category and its subcategories deleted
    /// - `Err(AppError::Conflict)` - Products or events still use the category
    pub async fn delete_category(&self, id: i32) -> Result<(), AppError> {
        let deleted = CategoryRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|e| AppError::from_db_conflict(e, "Category is still in use"))?;

        if !deleted {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        Ok(())
    }

    pub async fn create_subcategory(
        &self,
        category_id: i32,
        name: &str,
    ) -> Result<Subcategory, AppError> {
        let name = require_non_empty("Subcategory name", name)?;
        let repo = CategoryRepository::new(self.db);

        if repo.find_by_id(category_id).await?.is_none() {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        Ok(repo.create_subcategory(category_id, name).await?)
    }

    pub async fn delete_subcategory(&self, id: i32) -> Result<(), AppError> {
        if !CategoryRepository::new(self.db)
            .delete_subcategory(id)
            .await?
        {
            return Err(AppError::NotFound("Subcategory not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests that duplicate names and in-use deletes map to 409.
    ///
    /// Expected: Err(AppError::Conflict) for both
    #[tokio::test]
    async fn maps_constraint_violations_to_conflict() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_shop, category, _product) =
            factory::helpers::create_product_with_dependencies(db).await?;
        let service = CategoryService::new(db);

        let duplicate = service
            .create_category(CategoryParams {
                name: category.name.clone(),
                image_url: None,
            })
            .await;
        assert!(matches!(duplicate, Err(AppError::Conflict(_))));

        let in_use = service.delete_category(category.id).await;
        assert!(matches!(in_use, Err(AppError::Conflict(_))));

        Ok(())
    }

    /// Tests adding a subcategory to a missing category.
    ///
    /// Expected: Err(AppError::NotFound)
    #[tokio::test]
    async fn subcategory_requires_category() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = CategoryService::new(db)
            .create_subcategory(77, "Citrus")
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }
}
