/// Task model and database operations
///
/// This module provides the Task model, the primary resource tracked by the
/// service, together with its CRUD operations and the paginated, filtered
/// listing used by the task collection endpoint.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     username TEXT NOT NULL,
///     email TEXT NOT NULL,
///     text TEXT,
///     complete BOOLEAN NOT NULL DEFAULT FALSE
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use tasktrack_shared::models::task::{Task, CreateTask, TaskFilter, PAGE_SIZE};
/// use tasktrack_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(&pool, CreateTask {
///     username: "bob".to_string(),
///     email: "b@x.com".to_string(),
///     text: Some("buy milk".to_string()),
/// }).await?;
///
/// let page = Task::paginate(&pool, &TaskFilter::default(), 1, PAGE_SIZE).await?;
/// assert_eq!(page.total_items, 1);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Fixed page size for the task listing
pub const PAGE_SIZE: i64 = 3;

/// Completion filter accepted by the task listing
///
/// `All` applies no completion constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Only tasks with `complete = true`
    Completed,

    /// Only tasks with `complete = false`
    InProgress,

    /// No completion filter
    #[default]
    All,
}

impl TaskStatus {
    /// Converts status to string form used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "completed",
            TaskStatus::InProgress => "inprogress",
            TaskStatus::All => "all",
        }
    }

    /// The `complete` column value this status constrains to, if any
    pub fn completion_filter(&self) -> Option<bool> {
        match self {
            TaskStatus::Completed => Some(true),
            TaskStatus::InProgress => Some(false),
            TaskStatus::All => None,
        }
    }
}

/// Task model representing a tracked task record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task id (autoincrement)
    pub id: i64,

    /// Name of the person the task belongs to (informational, not a foreign key)
    pub username: String,

    /// Contact email (informational, not a foreign key)
    pub email: String,

    /// Free-form task text, up to 500 characters
    pub text: Option<String>,

    /// Whether the task has been completed
    pub complete: bool,
}

/// Input for creating a new task
///
/// `username` and `email` are required; presence is enforced at the handler
/// boundary, not here. New tasks always start with `complete = false`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Task owner name
    pub username: String,

    /// Task owner email
    pub email: String,

    /// Optional task text
    pub text: Option<String>,
}

/// Input for updating a task
///
/// Both fields are optional. `text` replaces the stored value only when the
/// new value is non-empty. `completed` sets the flag only when the new value
/// is `true`; a `false` value is treated as "no change", so the flag cannot
/// be cleared through this operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New task text (ignored when empty)
    pub text: Option<String>,

    /// New completion flag (ignored unless `true`)
    pub completed: Option<bool>,
}

impl UpdateTask {
    fn effective_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    fn marks_complete(&self) -> bool {
        self.completed == Some(true)
    }
}

/// Optional exact-match filters for the task listing
///
/// Only the fields that are set constrain the result; all set fields are
/// combined as a conjunction.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Filter on the `complete` flag
    pub complete: Option<bool>,

    /// Exact match on `username`
    pub username: Option<String>,

    /// Exact match on `email`
    pub email: Option<String>,
}

impl TaskFilter {
    /// Appends the WHERE clause for the set filters to `sql`
    ///
    /// Bind order is fixed: complete, username, email. Callers must bind in
    /// the same order via [`bind_to`](Self::bind_to).
    fn push_where_clause(&self, sql: &mut String) {
        let mut conditions = Vec::new();
        if self.complete.is_some() {
            conditions.push("complete = ?");
        }
        if self.username.is_some() {
            conditions.push("username = ?");
        }
        if self.email.is_some() {
            conditions.push("email = ?");
        }

        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
    }

    /// Binds the set filter values in clause order
    fn bind_to<'q, O>(
        &self,
        mut query: sqlx::query::QueryAs<'q, sqlx::Sqlite, O, sqlx::sqlite::SqliteArguments<'q>>,
    ) -> sqlx::query::QueryAs<'q, sqlx::Sqlite, O, sqlx::sqlite::SqliteArguments<'q>> {
        if let Some(complete) = self.complete {
            query = query.bind(complete);
        }
        if let Some(username) = self.username.clone() {
            query = query.bind(username);
        }
        if let Some(email) = self.email.clone() {
            query = query.bind(email);
        }
        query
    }
}

/// One page of the filtered task collection
///
/// Produced by [`Task::paginate`]. An out-of-range page yields an empty
/// `tasks` list with metadata still describing the full collection.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPage {
    /// Tasks on this page, in id order
    pub tasks: Vec<Task>,

    /// Total number of pages for the filtered collection
    pub total_pages: i64,

    /// Total number of matching tasks
    pub total_items: i64,

    /// The 1-based page number that was requested
    pub current_page: i64,

    /// Whether a previous page exists
    pub has_prev: bool,

    /// Whether a next page exists
    pub has_next: bool,
}

impl Task {
    /// Creates a new task with `complete = false`
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn create(pool: &SqlitePool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (username, email, text)
            VALUES (?, ?, ?)
            RETURNING id, username, email, text, complete
            "#,
        )
        .bind(data.username)
        .bind(data.email)
        .bind(data.text)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by id
    ///
    /// Returns the task if found, None otherwise.
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, username, email, text, complete
            FROM tasks
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Updates a task by id
    ///
    /// Applies the [`UpdateTask`] replacement rules: empty text and a falsy
    /// completion flag are both "no change". When nothing applies the stored
    /// row is returned untouched.
    ///
    /// Returns the updated task if found, None if the id does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        let new_text = data.effective_text().map(str::to_owned);
        let marks_complete = data.marks_complete();

        if new_text.is_none() && !marks_complete {
            return Self::find_by_id(pool, id).await;
        }

        // Build the SET list from the fields that actually change
        let mut assignments = Vec::new();
        if new_text.is_some() {
            assignments.push("text = ?");
        }
        if marks_complete {
            assignments.push("complete = TRUE");
        }

        let sql = format!(
            "UPDATE tasks SET {} WHERE id = ? RETURNING id, username, email, text, complete",
            assignments.join(", ")
        );

        let mut query = sqlx::query_as::<_, Task>(&sql);
        if let Some(text) = new_text {
            query = query.bind(text);
        }
        query = query.bind(id);

        let task = query.fetch_optional(pool).await?;

        Ok(task)
    }

    /// Deletes a task by id
    ///
    /// Returns true if a task was deleted, false if the id does not exist.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Lists tasks matching `filter` with limit/offset, ordered by id
    pub async fn list(
        pool: &SqlitePool,
        filter: &TaskFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let mut sql = String::from("SELECT id, username, email, text, complete FROM tasks");
        filter.push_where_clause(&mut sql);
        sql.push_str(" ORDER BY id ASC LIMIT ? OFFSET ?");

        let query = filter
            .bind_to(sqlx::query_as::<_, Task>(&sql))
            .bind(limit)
            .bind(offset);

        let tasks = query.fetch_all(pool).await?;

        Ok(tasks)
    }

    /// Counts tasks matching `filter`
    pub async fn count(pool: &SqlitePool, filter: &TaskFilter) -> Result<i64, sqlx::Error> {
        let mut sql = String::from("SELECT COUNT(*) FROM tasks");
        filter.push_where_clause(&mut sql);

        let (count,): (i64,) = filter
            .bind_to(sqlx::query_as(&sql))
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Fetches one page of the filtered collection
    ///
    /// `page` is 1-based; values below 1 are clamped to 1. A page past the
    /// end returns an empty list rather than an error, with metadata
    /// (`total_pages`, `total_items`, `has_prev`, `has_next`) still
    /// describing the full collection.
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails
    pub async fn paginate(
        pool: &SqlitePool,
        filter: &TaskFilter,
        page: i64,
        per_page: i64,
    ) -> Result<TaskPage, sqlx::Error> {
        let page = page.max(1);

        let total_items = Self::count(pool, filter).await?;
        let total_pages = (total_items + per_page - 1) / per_page;

        // Page comes straight from the query string; saturate instead of
        // overflowing on absurd values
        let offset = page.saturating_sub(1).saturating_mul(per_page);
        let tasks = Self::list(pool, filter, per_page, offset).await?;

        Ok(TaskPage {
            tasks,
            total_pages,
            total_items,
            current_page: page,
            has_prev: page > 1,
            has_next: page < total_pages,
        })
    }
}
