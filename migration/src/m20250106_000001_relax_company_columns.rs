use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden, Clone, Copy)]
enum Companies {
    Table,
    NameCn,
    IndustryPrimary,
    LocationHeadquarters,
    Description,
    Stage,
    ContactName,
    ContactEmail,
}

/// Columns the application now treats as optional. The live table still
/// carries NOT NULL constraints from the first schema sync.
const RELAXED_COLUMNS: [Companies; 7] = [
    Companies::NameCn,
    Companies::IndustryPrimary,
    Companies::LocationHeadquarters,
    Companies::Description,
    Companies::Stage,
    Companies::ContactName,
    Companies::ContactEmail,
];

fn column_def(column: Companies) -> ColumnDef {
    let mut def = ColumnDef::new(column);
    match column {
        Companies::Description => def.text(),
        Companies::Stage => def.string_len(20),
        _ => def.string(),
    };
    def
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in RELAXED_COLUMNS {
            manager
                .alter_table(
                    Table::alter()
                        .table(Companies::Table)
                        .modify_column(column_def(column).null())
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Restoring the constraints fails if any row has since stored a
        // NULL in one of these columns; that is the correct signal to
        // clean the data up first.
        for column in RELAXED_COLUMNS {
            manager
                .alter_table(
                    Table::alter()
                        .table(Companies::Table)
                        .modify_column(column_def(column).not_null())
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}
