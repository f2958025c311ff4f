use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::QueryExecutor;
use crate::types::{RawRow, SqlValue};

/// A recorded query execution for verification.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedQuery {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

/// An in-memory query executor for testing.
///
/// Allows configuring expected responses and verifying executed queries.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use rsdbc::drivers::{InMemoryResponseBuilder, InMemoryTestExecutor};
/// use rsdbc::types::SqlValue;
///
/// let executor = Arc::new(
///     InMemoryTestExecutor::new().with_response(
///         InMemoryResponseBuilder::new()
///             .row(&[("id", SqlValue::Number(1.0)), ("name", SqlValue::Text("Alice".into()))])
///             .build(),
///     ),
/// );
/// ```
pub struct InMemoryTestExecutor {
    responses: Mutex<VecDeque<Vec<RawRow>>>,
    recorded_queries: Mutex<Vec<RecordedQuery>>,
    end_calls: Mutex<usize>,
    default_response: Vec<RawRow>,
}

impl InMemoryTestExecutor {
    /// Create a new in-memory test executor with no pre-configured responses.
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            recorded_queries: Mutex::new(Vec::new()),
            end_calls: Mutex::new(0),
            default_response: Vec::new(),
        }
    }

    /// Add a response to be returned by the next query.
    /// Responses are returned in FIFO order.
    pub fn with_response(self, response: Vec<RawRow>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Add multiple responses to be returned by subsequent queries.
    pub fn with_responses(self, responses: impl IntoIterator<Item = Vec<RawRow>>) -> Self {
        let mut queue = self.responses.lock().unwrap();
        for response in responses {
            queue.push_back(response);
        }
        drop(queue);
        self
    }

    /// Set a default response to use when no queued responses remain.
    pub fn with_default_response(mut self, response: Vec<RawRow>) -> Self {
        self.default_response = response;
        self
    }

    /// Get all recorded queries that have been executed.
    pub fn recorded_queries(&self) -> Vec<RecordedQuery> {
        self.recorded_queries.lock().unwrap().clone()
    }

    /// Get the last recorded query, if any.
    pub fn last_query(&self) -> Option<RecordedQuery> {
        self.recorded_queries.lock().unwrap().last().cloned()
    }

    /// Clear all recorded queries.
    pub fn clear_recorded_queries(&self) {
        self.recorded_queries.lock().unwrap().clear();
    }

    /// Number of times `end` has been called.
    pub fn end_calls(&self) -> usize {
        *self.end_calls.lock().unwrap()
    }

    /// Assert that the last query matches the expected SQL and parameters.
    pub fn assert_last_query(&self, expected_sql: &str, expected_params: &[SqlValue]) {
        let last = self.last_query().expect("No queries were recorded");
        assert_eq!(
            last.sql, expected_sql,
            "SQL mismatch.\nExpected: {}\nActual: {}",
            expected_sql, last.sql
        );
        assert_eq!(
            last.params, expected_params,
            "Parameters mismatch.\nExpected: {:?}\nActual: {:?}",
            expected_params, last.params
        );
    }

    /// Assert that exactly n queries were executed.
    pub fn assert_query_count(&self, expected: usize) {
        let actual = self.recorded_queries.lock().unwrap().len();
        assert_eq!(
            actual, expected,
            "Query count mismatch. Expected: {}, Actual: {}",
            expected, actual
        );
    }
}

impl Default for InMemoryTestExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryExecutor for InMemoryTestExecutor {
    async fn query(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<RawRow>> {
        // Record the query
        self.recorded_queries.lock().unwrap().push(RecordedQuery {
            sql: sql.to_string(),
            params: params.to_vec(),
        });

        // Return next queued response or default
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.default_response.clone());

        Ok(response)
    }

    async fn end(&self) -> Result<()> {
        *self.end_calls.lock().unwrap() += 1;
        Ok(())
    }
}

/// Builder for creating test responses easily.
pub struct InMemoryResponseBuilder {
    rows: Vec<RawRow>,
}

impl InMemoryResponseBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a row of labeled values.
    pub fn row(mut self, values: &[(&str, SqlValue)]) -> Self {
        self.rows.push(
            values
                .iter()
                .map(|(label, value)| (label.to_string(), value.clone()))
                .collect(),
        );
        self
    }

    /// Build the response rows.
    pub fn build(self) -> Vec<RawRow> {
        self.rows
    }
}

impl Default for InMemoryResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}
