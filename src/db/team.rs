//! Team repository.

use crate::entities::{prelude::*, teams};
use crate::models::CreateTeam;
use sea_orm::*;

/// List all teams ordered by name.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<teams::Model>, DbErr> {
    Teams::find().order_by_asc(teams::Column::Name).all(db).await
}

/// Get team by ID.
pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<teams::Model>, DbErr> {
    Teams::find_by_id(id).one(db).await
}

/// Create a new team.
pub async fn create(db: &DatabaseConnection, data: CreateTeam) -> Result<teams::Model, DbErr> {
    let model = teams::ActiveModel {
        name: Set(data.name),
        ..Default::default()
    };
    model.insert(db).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{connect, migrate};

    async fn setup() -> DatabaseConnection {
        let db = connect("sqlite::memory:", 1).await.unwrap();
        migrate(&db).await.unwrap();
        db
    }

    fn team(name: &str) -> CreateTeam {
        CreateTeam { name: name.to_string() }
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let db = setup().await;
        let created = create(&db, team("Eng")).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(get_by_id(&db, created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_list_orders_by_name() {
        let db = setup().await;
        for name in ["Sales", "Eng", "Ops"] {
            create(&db, team(name)).await.unwrap();
        }

        let names: Vec<String> = list_all(&db).await.unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Eng", "Ops", "Sales"]);
    }

    #[tokio::test]
    async fn test_duplicate_name_fails() {
        let db = setup().await;
        create(&db, team("Eng")).await.unwrap();

        let err = create(&db, team("Eng")).await.unwrap_err();
        assert!(matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))));
        assert_eq!(list_all(&db).await.unwrap().len(), 1);
    }
}
