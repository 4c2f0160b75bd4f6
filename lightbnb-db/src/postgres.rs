//! PostgreSQL binding for [`QueryExecutor`]
//!
//! Binds [`SqlValue`]s positionally and converts each `PgRow` into a
//! [`Record`] by column type. Averages and other NUMERIC results must be
//! cast (e.g. `::float8`) in SQL; NUMERIC itself is not decoded.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use sqlx::postgres::{PgArguments, PgColumn, PgRow};
use sqlx::query::Query;
use sqlx::{Column, PgPool, Postgres, Row, TypeInfo};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{DbError, Result};
use crate::executor::{QueryExecutor, Record};
use crate::query::{SqlValue, Statement};

/// Executor backed by a shared `PgPool`. Cloning shares the pool.
#[derive(Debug, Clone)]
pub struct PgExecutor {
    pool: PgPool,
}

impl PgExecutor {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueryExecutor for PgExecutor {
    async fn fetch_many(&self, statement: &Statement) -> Result<Vec<Record>> {
        log_statement(statement);

        let rows = bind_params(statement)
            .fetch_all(&self.pool)
            .await
            .map_err(classify)?;

        rows.iter().map(to_record).collect()
    }

    async fn fetch_one(&self, statement: &Statement) -> Result<Option<Record>> {
        log_statement(statement);

        let row = bind_params(statement)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify)?;

        row.as_ref().map(to_record).transpose()
    }
}

fn log_statement(statement: &Statement) {
    // Parameter values stay out of logs; they include password hashes.
    debug!(
        sql = %statement.sql(),
        params = statement.params().len(),
        "executing statement"
    );
}

fn classify(err: sqlx::Error) -> DbError {
    let err = DbError::from(err);
    warn!(kind = err.kind(), error = %err, "statement failed");
    err
}

fn bind_params(statement: &Statement) -> Query<'_, Postgres, PgArguments> {
    let mut query = sqlx::query(statement.sql());
    for param in statement.params() {
        query = match param {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Bool(v) => query.bind(*v),
            SqlValue::Int(v) => query.bind(*v),
            SqlValue::Float(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.as_str()),
        };
    }
    query
}

fn to_record(row: &PgRow) -> Result<Record> {
    let mut record = Record::new();
    for column in row.columns() {
        // Later columns win on duplicate names; statements alias to avoid it.
        record.insert(column.name().to_owned(), column_value(row, column)?);
    }
    Ok(record)
}

fn column_value(row: &PgRow, column: &PgColumn) -> Result<Value> {
    let idx = column.ordinal();
    let value = match column.type_info().name() {
        "BOOL" => row.try_get::<Option<bool>, _>(idx)?.map(Value::from),
        "INT2" => row.try_get::<Option<i16>, _>(idx)?.map(Value::from),
        "INT4" => row.try_get::<Option<i32>, _>(idx)?.map(Value::from),
        "INT8" => row.try_get::<Option<i64>, _>(idx)?.map(Value::from),
        "FLOAT4" => row.try_get::<Option<f32>, _>(idx)?.map(Value::from),
        "FLOAT8" => row.try_get::<Option<f64>, _>(idx)?.map(Value::from),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => {
            row.try_get::<Option<String>, _>(idx)?.map(Value::from)
        }
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(idx)?
            .map(|d| Value::String(d.to_string())),
        "TIMESTAMP" => row
            .try_get::<Option<NaiveDateTime>, _>(idx)?
            .map(|d| Value::String(d.format("%Y-%m-%dT%H:%M:%S%.f").to_string())),
        "TIMESTAMPTZ" => row
            .try_get::<Option<DateTime<Utc>>, _>(idx)?
            .map(|d| Value::String(d.to_rfc3339())),
        "UUID" => row
            .try_get::<Option<Uuid>, _>(idx)?
            .map(|u| Value::String(u.to_string())),
        other => {
            return Err(DbError::UnsupportedColumn {
                column: column.name().to_owned(),
                type_name: other.to_owned(),
            })
        }
    };
    Ok(value.unwrap_or(Value::Null))
}
