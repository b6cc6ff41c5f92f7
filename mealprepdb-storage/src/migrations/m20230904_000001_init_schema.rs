use mealprepdb_api_types::{IngredientType, MealType};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reference table naming ingredients
        manager
            .create_table(
                Table::create()
                    .table(Ingredient::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ingredient::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Ingredient::Name)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Ingredient::Type)
                            .string_len(64)
                            .check(
                                Expr::col(Ingredient::Type)
                                    .is_in(IngredientType::variants().iter().copied()),
                            ),
                    )
                    .col(
                        ColumnDef::new(Ingredient::UpdatedOn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(IngredientInInventory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IngredientInInventory::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(IngredientInInventory::IngredientId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(IngredientInInventory::FromWhere).string_len(255))
                    .col(ColumnDef::new(IngredientInInventory::Brand).string_len(255))
                    .col(ColumnDef::new(IngredientInInventory::Price).double())
                    .col(ColumnDef::new(IngredientInInventory::Quantity).double())
                    .col(ColumnDef::new(IngredientInInventory::Unit).string_len(64))
                    .col(ColumnDef::new(IngredientInInventory::PurchasedOn).date())
                    .col(ColumnDef::new(IngredientInInventory::FinishedOn).date())
                    .col(
                        ColumnDef::new(IngredientInInventory::UpdatedOn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk__ingredient_in_inventory__ingredient_id")
                            .from(
                                IngredientInInventory::Table,
                                IngredientInInventory::IngredientId,
                            )
                            .to(Ingredient::Table, Ingredient::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Dish::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Dish::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Dish::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Dish::ParentDishId).big_integer())
                    .col(ColumnDef::new(Dish::CreatedOn).date())
                    .col(
                        ColumnDef::new(Dish::UpdatedOn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk__dish__parent_dish_id")
                            .from(Dish::Table, Dish::ParentDishId)
                            .to(Dish::Table, Dish::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DishIngredient::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DishIngredient::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DishIngredient::DishId).big_integer().not_null())
                    .col(
                        ColumnDef::new(DishIngredient::IngredientId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(DishIngredient::Quantity).double())
                    .col(ColumnDef::new(DishIngredient::Unit).string_len(64))
                    .col(
                        ColumnDef::new(DishIngredient::UpdatedOn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk__dish_ingredient__dish_id")
                            .from(DishIngredient::Table, DishIngredient::DishId)
                            .to(Dish::Table, Dish::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk__dish_ingredient__ingredient_id")
                            .from(DishIngredient::Table, DishIngredient::IngredientId)
                            .to(IngredientInInventory::Table, IngredientInInventory::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Meal::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Meal::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Meal::Type)
                            .string_len(64)
                            .check(Expr::col(Meal::Type).is_in(MealType::variants().iter().copied())),
                    )
                    .col(ColumnDef::new(Meal::Description).string_len(255))
                    .col(ColumnDef::new(Meal::ConsumedOn).date().not_null())
                    .col(
                        ColumnDef::new(Meal::UpdatedOn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MealDish::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MealDish::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MealDish::MealId).big_integer().not_null())
                    .col(ColumnDef::new(MealDish::DishId).big_integer().not_null())
                    .col(ColumnDef::new(MealDish::Quantity).double())
                    .col(ColumnDef::new(MealDish::Unit).string_len(64))
                    .col(
                        ColumnDef::new(MealDish::UpdatedOn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk__meal_dish__meal_id")
                            .from(MealDish::Table, MealDish::MealId)
                            .to(Meal::Table, Meal::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk__meal_dish__dish_id")
                            .from(MealDish::Table, MealDish::DishId)
                            .to(Dish::Table, Dish::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MealIngredient::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MealIngredient::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MealIngredient::MealId).big_integer().not_null())
                    .col(
                        ColumnDef::new(MealIngredient::IngredientId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(MealIngredient::Quantity).double())
                    .col(ColumnDef::new(MealIngredient::Unit).string_len(64))
                    .col(
                        ColumnDef::new(MealIngredient::UpdatedOn)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk__meal_ingredient__meal_id")
                            .from(MealIngredient::Table, MealIngredient::MealId)
                            .to(Meal::Table, Meal::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk__meal_ingredient__ingredient_id")
                            .from(MealIngredient::Table, MealIngredient::IngredientId)
                            .to(IngredientInInventory::Table, IngredientInInventory::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique pairs on the join tables
        manager
            .create_index(
                Index::create()
                    .name("uq__dish_ingredient")
                    .table(DishIngredient::Table)
                    .col(DishIngredient::DishId)
                    .col(DishIngredient::IngredientId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq__meal_dish")
                    .table(MealDish::Table)
                    .col(MealDish::DishId)
                    .col(MealDish::MealId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq__meal_ingredient")
                    .table(MealIngredient::Table)
                    .col(MealIngredient::IngredientId)
                    .col(MealIngredient::MealId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Indexes on frequently-filtered columns
        manager
            .create_index(
                Index::create()
                    .name("idx__ingredient_in_inventory__purchased_on")
                    .table(IngredientInInventory::Table)
                    .col(IngredientInInventory::PurchasedOn)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx__ingredient_in_inventory__ingredient_id_purchased_on")
                    .table(IngredientInInventory::Table)
                    .col(IngredientInInventory::IngredientId)
                    .col(IngredientInInventory::PurchasedOn)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx__meal_ingredient__meal_id")
                    .table(MealIngredient::Table)
                    .col(MealIngredient::MealId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx__meal_ingredient__ingredient_id")
                    .table(MealIngredient::Table)
                    .col(MealIngredient::IngredientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx__dish_ingredient__ingredient_id")
                    .table(DishIngredient::Table)
                    .col(DishIngredient::IngredientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx__dish_ingredient__dish_id")
                    .table(DishIngredient::Table)
                    .col(DishIngredient::DishId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx__dish__created_on")
                    .table(Dish::Table)
                    .col(Dish::CreatedOn)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx__meal__consumed_on")
                    .table(Meal::Table)
                    .col(Meal::ConsumedOn)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MealIngredient::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MealDish::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Meal::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DishIngredient::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Dish::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IngredientInInventory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Ingredient::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Ingredient {
    Table,
    Id,
    Name,
    Type,
    UpdatedOn,
}

#[derive(DeriveIden)]
enum IngredientInInventory {
    Table,
    Id,
    IngredientId,
    FromWhere,
    Brand,
    Price,
    Quantity,
    Unit,
    PurchasedOn,
    FinishedOn,
    UpdatedOn,
}

#[derive(DeriveIden)]
enum Dish {
    Table,
    Id,
    Name,
    ParentDishId,
    CreatedOn,
    UpdatedOn,
}

#[derive(DeriveIden)]
enum DishIngredient {
    Table,
    Id,
    DishId,
    IngredientId,
    Quantity,
    Unit,
    UpdatedOn,
}

#[derive(DeriveIden)]
enum Meal {
    Table,
    Id,
    Type,
    Description,
    ConsumedOn,
    UpdatedOn,
}

#[derive(DeriveIden)]
enum MealDish {
    Table,
    Id,
    MealId,
    DishId,
    Quantity,
    Unit,
    UpdatedOn,
}

#[derive(DeriveIden)]
enum MealIngredient {
    Table,
    Id,
    MealId,
    IngredientId,
    Quantity,
    Unit,
    UpdatedOn,
}
