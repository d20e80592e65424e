//! The database client seam.
//!
//! sorm never talks to the network itself. A [`Client`] executes statement
//! text and hands back the raw JSON response; a [`Connector`] opens one.

use std::future::Future;

use serde_json::Value as Json;

use crate::config::SormConfig;

/// Executes SurrealQL text.
///
/// The response is passed through
/// [`unwrap_response`](crate::response::unwrap_response), so any of the
/// envelopes it accepts may be returned.
pub trait Client: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn execute(&self, statement: &str) -> impl Future<Output = Result<Json, Self::Error>> + Send;
}

/// Opens a [`Client`] for a configured target.
pub trait Connector {
    type Client: Client;
    type Error: std::error::Error + Send + Sync + 'static;

    fn connect(
        &self,
        config: &SormConfig,
    ) -> impl Future<Output = Result<Self::Client, Self::Error>> + Send;
}

impl<C: Client> Client for std::sync::Arc<C> {
    type Error = C::Error;

    fn execute(&self, statement: &str) -> impl Future<Output = Result<Json, Self::Error>> + Send {
        (**self).execute(statement)
    }
}
