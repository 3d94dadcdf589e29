//! Backend helpers for reading and writing tasks and mapping entity rows
//! into the core `Task` domain model.
use crate::server::entities::tasks;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, QueryOrder};
use taskboard_core::{NewTask, Task};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error("Task with id {0} not found")]
    TaskNotFound(u32),
}

impl From<tasks::Model> for Task {
    fn from(model: tasks::Model) -> Self {
        Task {
            id: model.id as u32,
            title: model.title,
            description: model.description,
            completed: model.completed,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

/// Inserts a new task row and returns the stored record.
///
/// Both timestamps are set to the same instant so a fresh task always has
/// `created_at == updated_at`.
#[tracing::instrument(skip(db))]
pub async fn create_task(db: &DatabaseConnection, new_task: NewTask) -> Result<Task, Error> {
    let now = Utc::now().fixed_offset();
    let created_model = tasks::ActiveModel {
        title: Set(new_task.title().to_string()),
        description: Set(new_task.description().map(str::to_string)),
        completed: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(Task::from(created_model))
}

/// Fetches every task, most recently created first. Rows created at the same
/// instant keep their insertion order.
#[tracing::instrument(skip(db))]
pub async fn get_tasks(db: &DatabaseConnection) -> Result<Vec<Task>, Error> {
    let models = tasks::Entity::find()
        .order_by_desc(tasks::Column::CreatedAt)
        .order_by_asc(tasks::Column::Id)
        .all(db)
        .await?;
    Ok(models.into_iter().map(Task::from).collect())
}

/// Sets a task's completion status and bumps `updated_at`.
///
/// `updated_at` advances even when the status did not change. A missing id
/// is an error, unlike [`delete_task`].
#[tracing::instrument(skip(db))]
pub async fn update_task_completion(
    db: &DatabaseConnection,
    id: u32,
    completed: bool,
) -> Result<Task, Error> {
    let task_to_update = tasks::Entity::find_by_id(id as i32)
        .one(db)
        .await?
        .ok_or(Error::TaskNotFound(id))?;

    let mut active_model: tasks::ActiveModel = task_to_update.into();
    active_model.completed = Set(completed);
    active_model.updated_at = Set(Utc::now().fixed_offset());
    let updated_model = active_model.update(db).await?;

    Ok(Task::from(updated_model))
}

/// Deletes a task row if present. Deleting an id that does not exist is
/// deliberately not an error.
#[tracing::instrument(skip(db))]
pub async fn delete_task(db: &DatabaseConnection, id: u32) -> Result<(), Error> {
    tasks::Entity::delete_by_id(id as i32).exec(db).await?;
    Ok(())
}
