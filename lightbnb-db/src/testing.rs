//! Test double for [`QueryExecutor`]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{DbError, Result};
use crate::executor::{QueryExecutor, Record};
use crate::query::Statement;

/// Captures every executed statement and answers with queued results.
/// An empty queue answers with zero rows.
#[derive(Default)]
pub struct RecordingExecutor {
    responses: Mutex<VecDeque<Result<Vec<Record>>>>,
    captured: Mutex<Vec<Statement>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_rows(&self, rows: Vec<Record>) {
        self.responses.lock().unwrap().push_back(Ok(rows));
    }

    pub fn push_error(&self, err: DbError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub fn last_statement(&self) -> Statement {
        self.captured
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no statement executed")
    }
}

#[async_trait]
impl QueryExecutor for RecordingExecutor {
    async fn fetch_many(&self, statement: &Statement) -> Result<Vec<Record>> {
        self.captured.lock().unwrap().push(statement.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Build a record from a JSON object literal.
pub fn record(value: serde_json::Value) -> Record {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("record must be a JSON object, got {other}"),
    }
}
