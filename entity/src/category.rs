use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub category_id: i32,
    #[sea_orm(unique)]
    pub category_name: String,
    pub category_description: String,
    #[sea_orm(unique)]
    pub category_slug: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::category_product::Entity")]
    CategoryProduct,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        super::category_product::Relation::Product.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::category_product::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
