use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::category::{Category, CategoryParams, Subcategory};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every category with its subcategories, both sorted by name.
    pub async fn get_all(&self) -> Result<Vec<Category>, DbErr> {
        let results = entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .find_with_related(entity::prelude::Subcategory)
            .order_by_asc(entity::subcategory::Column::Name)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(category, subcategories)| Category::from_entity(category, subcategories))
            .collect())
    }

    /// Gets a category with its subcategories.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let Some(category) = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let subcategories = entity::prelude::Subcategory::find()
            .filter(entity::subcategory::Column::CategoryId.eq(id))
            .order_by_asc(entity::subcategory::Column::Name)
            .all(self.db)
            .await?;

        Ok(Some(Category::from_entity(category, subcategories)))
    }

    /// # Returns
    /// - `Ok(Category)` - Created category without subcategories
    /// - `Err(DbErr)` - Database error, including a unique violation on name
    pub async fn create(&self, params: CategoryParams) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            image_url: ActiveValue::Set(params.image_url),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity, Vec::new()))
    }

    /// # Returns
    /// - `Ok(true)` - Category updated
    /// - `Ok(false)` - No category with that ID
    pub async fn update(&self, id: i32, params: CategoryParams) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::update_many()
            .filter(entity::category::Column::Id.eq(id))
            .col_expr(
                entity::category::Column::Name,
                sea_orm::sea_query::Expr::value(params.name),
            )
            .col_expr(
                entity::category::Column::ImageUrl,
                sea_orm::sea_query::Expr::value(params.image_url),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a category and its subcategories.
    ///
    /// Fails with a foreign key violation while products or events still use it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn create_subcategory(
        &self,
        category_id: i32,
        name: String,
    ) -> Result<Subcategory, DbErr> {
        let entity = entity::subcategory::ActiveModel {
            category_id: ActiveValue::Set(category_id),
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Subcategory::from_entity(entity))
    }

    pub async fn find_subcategory(&self, id: i32) -> Result<Option<Subcategory>, DbErr> {
        let entity = entity::prelude::Subcategory::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Subcategory::from_entity))
    }

    /// Deletes a subcategory; products referencing it lose the reference.
    pub async fn delete_subcategory(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Subcategory::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
