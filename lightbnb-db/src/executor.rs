//! Query executor seam
//!
//! Repositories talk to storage only through [`QueryExecutor`], so the
//! PostgreSQL binding can be swapped for a test double. Rows come back as
//! [`Record`]s (column name to JSON value) and are shaped into domain types
//! with [`decode`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{DbError, Result};
use crate::query::Statement;

/// One result row: column name to value
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Executes statements against a storage engine.
///
/// Implementations hold no per-call state; every method may be called
/// concurrently from many tasks.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// All rows, in the order the storage engine returns them.
    async fn fetch_many(&self, statement: &Statement) -> Result<Vec<Record>>;

    /// First row, or `None` when nothing matched. Extra rows are ignored.
    async fn fetch_one(&self, statement: &Statement) -> Result<Option<Record>> {
        Ok(self.fetch_many(statement).await?.into_iter().next())
    }

    /// Run an `INSERT ... RETURNING` and yield the created row.
    async fn insert_returning(&self, table: &'static str, statement: &Statement) -> Result<Record> {
        self.fetch_one(statement)
            .await?
            .ok_or(DbError::MissingReturning { table })
    }
}

/// Shape a record into a domain type; `target` names the type in errors.
pub fn decode<T: DeserializeOwned>(target: &'static str, record: Record) -> Result<T> {
    serde_json::from_value(serde_json::Value::Object(record)).map_err(|e| DbError::decode(target, e))
}

/// Shape every record, failing on the first that does not fit.
pub fn decode_all<T: DeserializeOwned>(target: &'static str, records: Vec<Record>) -> Result<Vec<T>> {
    records.into_iter().map(|r| decode(target, r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{record, RecordingExecutor};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i32,
    }

    fn stmt() -> Statement {
        Statement::new("SELECT id FROM t", vec![])
    }

    #[tokio::test]
    async fn fetch_one_takes_first_row() {
        let executor = RecordingExecutor::new();
        executor.push_rows(vec![record(json!({"id": 1})), record(json!({"id": 2}))]);

        let row = executor.fetch_one(&stmt()).await.unwrap().unwrap();
        assert_eq!(row.get("id"), Some(&json!(1)));
    }

    #[tokio::test]
    async fn fetch_one_is_none_on_empty() {
        let executor = RecordingExecutor::new();
        executor.push_rows(vec![]);

        assert!(executor.fetch_one(&stmt()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_returning_without_row_fails() {
        let executor = RecordingExecutor::new();
        executor.push_rows(vec![]);

        let err = executor.insert_returning("t", &stmt()).await.unwrap_err();
        assert!(matches!(err, DbError::MissingReturning { table: "t" }));
    }

    #[tokio::test]
    async fn errors_propagate() {
        let executor = RecordingExecutor::new();
        executor.push_error(DbError::Connectivity(sqlx::Error::PoolClosed));

        let err = executor.fetch_many(&stmt()).await.unwrap_err();
        assert!(err.is_connectivity());
    }

    #[test]
    fn decode_reports_target() {
        let err = decode::<Row>("row", record(json!({"id": "x"}))).unwrap_err();
        assert!(err.to_string().starts_with("failed to decode row record"));

        let rows: Vec<Row> = decode_all("row", vec![record(json!({"id": 5}))]).unwrap();
        assert_eq!(rows, vec![Row { id: 5 }]);
    }
}
