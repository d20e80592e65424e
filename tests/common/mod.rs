#![allow(dead_code)]

pub mod schema;

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::{Value, json};
use sorm::{Client, Connector, SormConfig};

/// Error produced by [`MockClient`] and [`MockConnector`].
#[derive(Debug)]
pub struct MockError(pub String);

impl std::fmt::Display for MockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for MockError {}

/// In-memory client that records statements and replays queued responses.
///
/// With nothing queued it answers `[{ "status": "OK", "result": [] }]`.
#[derive(Debug, Default)]
pub struct MockClient {
    statements: Mutex<Vec<String>>,
    responses: Mutex<VecDeque<Result<Value, MockError>>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn respond(self, response: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queues `rows` wrapped in the status envelope.
    pub fn rows(self, rows: Value) -> Self {
        self.respond(json!([{ "status": "OK", "time": "1ms", "result": rows }]))
    }

    /// Queues a transport failure.
    pub fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(MockError(message.to_string())));
        self
    }

    pub fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    pub fn last(&self) -> String {
        self.statements.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

impl Client for MockClient {
    type Error = MockError;

    async fn execute(&self, statement: &str) -> Result<Value, MockError> {
        self.statements.lock().unwrap().push(statement.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!([{ "status": "OK", "result": [] }])))
    }
}

/// Connector that refuses `refused://` endpoints.
pub struct MockConnector;

impl Connector for MockConnector {
    type Client = MockClient;
    type Error = MockError;

    async fn connect(&self, config: &SormConfig) -> Result<MockClient, MockError> {
        if config.endpoint.starts_with("refused://") {
            Err(MockError(format!("connection refused: {}", config.endpoint)))
        } else {
            Ok(MockClient::new())
        }
    }
}
