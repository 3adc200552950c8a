//! Employee repository with CRUD operations and hierarchy lookups.

use std::collections::HashMap;

use crate::entities::employees::ManagerLink;
use crate::entities::{employees, prelude::*, teams};
use crate::models::{CreateEmployee, EmployeeView, UpdateEmployee};
use sea_orm::*;

/// Load the teams referenced by `employees` in a single query.
async fn teams_for(
    db: &DatabaseConnection,
    employees: &[(employees::Model, Option<employees::Model>)],
) -> Result<HashMap<i32, teams::Model>, DbErr> {
    let mut ids: Vec<i32> = employees.iter().filter_map(|(e, _)| e.team_id).collect();
    ids.sort_unstable();
    ids.dedup();

    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let teams = Teams::find().filter(teams::Column::Id.is_in(ids)).all(db).await?;
    Ok(teams.into_iter().map(|t| (t.id, t)).collect())
}

/// List all employees with their team and manager expanded.
pub async fn list_all_expanded(db: &DatabaseConnection) -> Result<Vec<EmployeeView>, DbErr> {
    let rows = Employees::find()
        .find_also_linked(ManagerLink)
        .order_by_asc(employees::Column::Id)
        .all(db)
        .await?;

    let teams = teams_for(db, &rows).await?;

    Ok(rows
        .into_iter()
        .map(|(employee, manager)| {
            let team = employee.team_id.and_then(|id| teams.get(&id).cloned());
            EmployeeView::expanded(employee, team, manager)
        })
        .collect())
}

/// Get one employee with team and manager expanded.
pub async fn get_expanded(db: &DatabaseConnection, id: i32) -> Result<Option<EmployeeView>, DbErr> {
    let Some((employee, manager)) = Employees::find_by_id(id).find_also_linked(ManagerLink).one(db).await? else {
        return Ok(None);
    };

    let team = match employee.team_id {
        Some(team_id) => Teams::find_by_id(team_id).one(db).await?,
        None => None,
    };

    Ok(Some(EmployeeView::expanded(employee, team, manager)))
}

/// Get one employee with only the team expanded.
pub async fn get_with_team(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<(employees::Model, Option<teams::Model>)>, DbErr> {
    Employees::find_by_id(id).find_also_related(Teams).one(db).await
}

/// Direct reports of `manager_id`, each with its team, in ascending id order.
pub async fn list_subordinates(
    db: &DatabaseConnection,
    manager_id: i32,
) -> Result<Vec<(employees::Model, Option<teams::Model>)>, DbErr> {
    Employees::find()
        .filter(employees::Column::ManagerId.eq(manager_id))
        .find_also_related(Teams)
        .order_by_asc(employees::Column::Id)
        .all(db)
        .await
}

/// Check whether an employee with `id` exists.
pub async fn exists(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
    let count = Employees::find_by_id(id).count(db).await?;
    Ok(count > 0)
}

/// Create a new employee.
pub async fn create(db: &DatabaseConnection, data: CreateEmployee) -> Result<employees::Model, DbErr> {
    let model = employees::ActiveModel {
        name: Set(data.name),
        email: Set(data.email),
        title: Set(data.title),
        manager_id: Set(data.manager_id),
        team_id: Set(data.team_id),
        ..Default::default()
    };
    model.insert(db).await
}

/// Update the fields present in `data`.
///
/// Returns `None` when no employee has `id`.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    data: UpdateEmployee,
) -> Result<Option<employees::Model>, DbErr> {
    let existing = Employees::find_by_id(id).one(db).await?;

    match existing {
        Some(model) => {
            let mut active: employees::ActiveModel = model.into();

            if let Some(name) = data.name {
                active.name = Set(name);
            }
            if let Some(email) = data.email {
                active.email = Set(email);
            }
            if let Some(title) = data.title {
                active.title = Set(title);
            }
            if let Some(manager_id) = data.manager_id {
                active.manager_id = Set(manager_id);
            }
            if let Some(team_id) = data.team_id {
                active.team_id = Set(team_id);
            }

            if !active.is_changed() {
                return Ok(Some(active.try_into_model()?));
            }

            let updated = active.update(db).await?;
            Ok(Some(updated))
        }
        None => Ok(None),
    }
}

/// Delete an employee by ID. Subordinates keep their `manager_id`.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
    let result = Employees::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
