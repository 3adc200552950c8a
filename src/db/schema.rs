//! Startup schema creation.
//!
//! Every statement is `IF NOT EXISTS`, so running it against an existing
//! database file is a no-op. Reference columns carry indexes but no foreign
//! key constraints: removing a manager leaves `manager_id` pointing at a
//! missing row rather than failing or cascading.

use sea_orm::sea_query::{ColumnDef, Expr, Index, IndexCreateStatement, Table, TableCreateStatement};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, DeriveIden};
use tracing::debug;

use crate::models::{EMAIL_MAX_LEN, NAME_MAX_LEN};

#[derive(DeriveIden)]
enum Teams {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
    Name,
    Email,
    Title,
    ManagerId,
    TeamId,
}

fn teams_table() -> TableCreateStatement {
    Table::create()
        .table(Teams::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Teams::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Teams::Name).string_len(NAME_MAX_LEN as u32).not_null())
        .to_owned()
}

fn employees_table() -> TableCreateStatement {
    Table::create()
        .table(Employees::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Employees::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Employees::Name).string_len(NAME_MAX_LEN as u32).not_null())
        .col(ColumnDef::new(Employees::Email).string_len(EMAIL_MAX_LEN as u32).not_null())
        .col(
            ColumnDef::new(Employees::Title)
                .string_len(NAME_MAX_LEN as u32)
                .not_null()
                .default(Expr::value("")),
        )
        .col(ColumnDef::new(Employees::ManagerId).integer().null())
        .col(ColumnDef::new(Employees::TeamId).integer().null())
        .to_owned()
}

fn indexes() -> Vec<IndexCreateStatement> {
    vec![
        Index::create()
            .if_not_exists()
            .name("idx_teams_name")
            .table(Teams::Table)
            .col(Teams::Name)
            .unique()
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_employees_email")
            .table(Employees::Table)
            .col(Employees::Email)
            .unique()
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_employees_manager_id")
            .table(Employees::Table)
            .col(Employees::ManagerId)
            .to_owned(),
        Index::create()
            .if_not_exists()
            .name("idx_employees_team_id")
            .table(Employees::Table)
            .col(Employees::TeamId)
            .to_owned(),
    ]
}

/// Create the `teams` and `employees` tables and their indexes.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    for table in [teams_table(), employees_table()] {
        db.execute(backend.build(&table)).await?;
    }
    for index in indexes() {
        db.execute(backend.build(&index)).await?;
    }

    debug!("Database schema is up to date");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{connect, get_table_counts};

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let db = connect("sqlite::memory:", 1).await.unwrap();
        migrate(&db).await.unwrap();
        migrate(&db).await.unwrap();

        let counts = get_table_counts(&db).await.unwrap();
        assert_eq!(counts.teams, 0);
        assert_eq!(counts.employees, 0);
    }

    #[tokio::test]
    async fn test_file_database_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orgchart.db");
        let url = format!("sqlite://{}?mode=rwc", path.display());

        let db = connect(&url, 2).await.unwrap();
        migrate(&db).await.unwrap();
        assert!(path.exists());

        let version = crate::db::get_version(&db).await.unwrap();
        assert!(version.starts_with('3'));
    }
}
