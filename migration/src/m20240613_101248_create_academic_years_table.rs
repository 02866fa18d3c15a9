use entity::academic_years::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(academic_years::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(academic_years::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(academic_years::Column::Year)
                            .string_len(9)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(academic_years::Column::StartDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(academic_years::Column::EndDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(academic_years::Column::IsCurrent)
                            .boolean()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_ACADEMIC_YEARS)
                            .col(academic_years::Column::Id),
                    )
                    .index(
                        Index::create()
                            .name(UC_ACADEMIC_YEARS_YEAR)
                            .col(academic_years::Column::Year)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        // sea-query's index builder cannot express a partial index, so the
        // single-current-year constraint goes in as raw SQL.
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "CREATE UNIQUE INDEX \"{UC_ACADEMIC_YEARS_CURRENT}\" \
                 ON \"academic_years\" (\"is_current\") WHERE \"is_current\""
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(academic_years::Entity).to_owned())
            .await
    }
}
