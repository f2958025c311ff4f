use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tokio::task::JoinHandle;
use tokio_postgres::{types::ToSql, Client, NoTls};
use tracing::error;

use crate::error::{Result, RsdbcError};
use crate::traits::QueryExecutor;
use crate::types::{RawRow, SqlValue};

/// PostgreSQL executor implementation using tokio-postgres.
pub struct TokioPostgresExecutor {
    client: Client,
    connection_task: Mutex<Option<JoinHandle<()>>>,
}

impl TokioPostgresExecutor {
    /// Connect to a PostgreSQL database.
    pub async fn connect(connection_string: &str) -> Result<Self> {
        let (client, connection) = tokio_postgres::connect(connection_string, NoTls)
            .await
            .map_err(|e| RsdbcError::ConnectionFailed(e.to_string()))?;

        // Spawn the connection handler
        let connection_task = tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("PostgreSQL connection error: {}", e);
            }
        });

        Ok(Self {
            client,
            connection_task: Mutex::new(Some(connection_task)),
        })
    }
}

#[async_trait]
impl QueryExecutor for TokioPostgresExecutor {
    async fn query(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<RawRow>> {
        // Convert SqlValue params to tokio-postgres compatible types
        let converted_params: Vec<Box<dyn ToSql + Sync + Send>> =
            params.iter().map(sql_value_to_tosql).collect();

        let param_refs: Vec<&(dyn ToSql + Sync)> = converted_params
            .iter()
            .map(|b| b.as_ref() as &(dyn ToSql + Sync))
            .collect();

        let rows = self
            .client
            .query(sql, &param_refs)
            .await
            .map_err(|e| RsdbcError::QueryFailed(e.to_string()))?;

        Ok(rows.iter().map(row_to_raw).collect())
    }

    async fn end(&self) -> Result<()> {
        // Stopping the connection task closes the socket; a second call
        // finds the slot empty and does nothing.
        if let Some(task) = self.connection_task.lock().unwrap().take() {
            task.abort();
        }
        Ok(())
    }
}

/// Convert a SqlValue to a boxed ToSql trait object.
fn sql_value_to_tosql(value: &SqlValue) -> Box<dyn ToSql + Sync + Send> {
    match value {
        SqlValue::Null => Box::new(None::<String>),
        SqlValue::Text(s) => Box::new(s.clone()),
        SqlValue::Number(n) => Box::new(*n),
        SqlValue::Bool(b) => Box::new(*b),
        SqlValue::Timestamp(ts) => Box::new(*ts),
        SqlValue::Other(v) => Box::new(v.clone()),
    }
}

/// Convert one result row into a raw label/value mapping.
fn row_to_raw(row: &tokio_postgres::Row) -> RawRow {
    row.columns()
        .iter()
        .enumerate()
        .map(|(index, column)| (column.name().to_string(), row_value(row, index)))
        .collect()
}

/// Convert a row value at a given index to a SqlValue.
///
/// Tries the common types in turn, reading through Option so SQL NULL maps
/// to SqlValue::Null whatever the column type. Values of any other type
/// come through the json bridge as SqlValue::Other.
fn row_value(row: &tokio_postgres::Row, index: usize) -> SqlValue {
    if let Ok(value) = row.try_get::<_, Option<bool>>(index) {
        return value.map(SqlValue::Bool).unwrap_or(SqlValue::Null);
    }

    if let Ok(value) = row.try_get::<_, Option<i32>>(index) {
        return value
            .map(|v| SqlValue::Number(v.into()))
            .unwrap_or(SqlValue::Null);
    }

    if let Ok(value) = row.try_get::<_, Option<i64>>(index) {
        return value
            .map(|v| SqlValue::Number(v as f64))
            .unwrap_or(SqlValue::Null);
    }

    if let Ok(value) = row.try_get::<_, Option<f32>>(index) {
        return value
            .map(|v| SqlValue::Number(v.into()))
            .unwrap_or(SqlValue::Null);
    }

    if let Ok(value) = row.try_get::<_, Option<f64>>(index) {
        return value.map(SqlValue::Number).unwrap_or(SqlValue::Null);
    }

    if let Ok(value) = row.try_get::<_, Option<String>>(index) {
        return value.map(SqlValue::Text).unwrap_or(SqlValue::Null);
    }

    if let Ok(value) = row.try_get::<_, Option<NaiveDateTime>>(index) {
        return value.map(SqlValue::Timestamp).unwrap_or(SqlValue::Null);
    }

    if let Ok(value) = row.try_get::<_, Option<NaiveDate>>(index) {
        return value
            .map(|v| SqlValue::Timestamp(v.and_time(NaiveTime::MIN)))
            .unwrap_or(SqlValue::Null);
    }

    if let Ok(value) = row.try_get::<_, Option<DateTime<Utc>>>(index) {
        return value
            .map(|v| SqlValue::Timestamp(v.naive_utc()))
            .unwrap_or(SqlValue::Null);
    }

    if let Ok(value) = row.try_get::<_, Option<serde_json::Value>>(index) {
        return value.map(SqlValue::Other).unwrap_or(SqlValue::Null);
    }

    SqlValue::Null
}
