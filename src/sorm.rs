//! The `Sorm` handle: statement generation plus execution through an
//! injected [`Client`].

use serde_json::Value as Json;

use sorm_core::query::{
    BuildStore, FetchedRow, FindMany, FromJsonValue, QueryTable, RenderIncludes, ResolveSelect,
    SelectColumns,
};
use sorm_core::{
    CreateOptions, DeleteOptions, Result, ResultShape, SelectOneOptions, SelectOptions, SormError,
    UpdateOptions, statement,
};

use crate::client::{Client, Connector};
use crate::config::{QueryDefaults, SormConfig};
use crate::response::{first_row, unwrap_response};

/// Record mapper over a database client.
///
/// Owns its client. After [`Sorm::close`] every call fails with
/// [`SormError::NotConnected`].
///
/// ```ignore
/// let db = Sorm::connect(&connector, &SormConfig::load()?).await?;
/// let users = db
///     .find_many("user", &SelectOptions::new().filter("active", true).limit(10))
///     .await?;
/// ```
#[derive(Debug)]
pub struct Sorm<C> {
    client: Option<C>,
    defaults: QueryDefaults,
}

impl<C: Client> Sorm<C> {
    /// Wraps an already connected client.
    pub fn new(client: C) -> Self {
        Self {
            client: Some(client),
            defaults: QueryDefaults::default(),
        }
    }

    /// Wraps a client with query defaults from `config`.
    pub fn with_config(client: C, config: &SormConfig) -> Self {
        Self {
            client: Some(client),
            defaults: config.query.clone(),
        }
    }

    /// Connects through `connector` using `config`.
    pub async fn connect<K>(connector: &K, config: &SormConfig) -> Result<Self>
    where
        K: Connector<Client = C>,
    {
        let client = connector
            .connect(config)
            .await
            .map_err(|e| SormError::Connection(e.to_string()))?;
        Ok(Self::with_config(client, config))
    }

    /// Gets a reference to the underlying client
    pub fn client(&self) -> Result<&C> {
        self.client.as_ref().ok_or(SormError::NotConnected)
    }

    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    /// Releases the client and returns it.
    pub fn close(&mut self) -> Option<C> {
        self.client.take()
    }

    /// Executes raw statement text.
    pub async fn query(&self, statement: &str) -> Result<Json> {
        self.run(statement, None).await
    }

    pub async fn find_many(&self, table: &str, options: &SelectOptions) -> Result<Json> {
        self.client()?;
        let sql = statement::select_many(table, options)?;
        self.run(&sql, options.shape).await
    }

    /// Selects one row. Unwrapped, the row itself or `null`.
    pub async fn find_one(&self, table: &str, options: &SelectOneOptions) -> Result<Json> {
        self.client()?;
        let sql = statement::select_one(table, options)?;
        let shape = self.shape(options.shape);
        let payload = self.run(&sql, Some(shape)).await?;
        Ok(match shape {
            ResultShape::Unwrapped => first_row(payload),
            ResultShape::Raw => payload,
        })
    }

    pub async fn create(&self, table: &str, options: &CreateOptions) -> Result<Json> {
        self.client()?;
        let sql = statement::create(table, options)?;
        self.run(&sql, options.shape).await
    }

    pub async fn update(&self, table: &str, options: &UpdateOptions) -> Result<Json> {
        self.client()?;
        let sql = statement::update(table, options)?;
        self.run(&sql, options.shape).await
    }

    pub async fn delete(&self, table: &str, options: &DeleteOptions) -> Result<Json> {
        self.client()?;
        let sql = statement::delete(table, options)?;
        self.run(&sql, options.shape).await
    }

    /// Runs a typed query and decodes every row.
    pub async fn fetch_many<T, Rels, Cols>(
        &self,
        query: FindMany<T, Rels, Cols>,
    ) -> Result<Vec<FetchedRow<T, Rels, Cols>>>
    where
        T: QueryTable,
        Rels: RenderIncludes + BuildStore,
        Cols: SelectColumns + ResolveSelect<T>,
        FetchedRow<T, Rels, Cols>: FromJsonValue,
    {
        self.client()?;
        let sql = query.to_sql()?;
        let rows = self.run(&sql, Some(ResultShape::Unwrapped)).await?;
        Vec::from_json_value(rows)
    }

    /// Runs a typed query for a single row.
    pub async fn fetch_one<T, Rels, Cols>(
        &self,
        query: FindMany<T, Rels, Cols>,
    ) -> Result<Option<FetchedRow<T, Rels, Cols>>>
    where
        T: QueryTable,
        Rels: RenderIncludes + BuildStore,
        Cols: SelectColumns + ResolveSelect<T>,
        FetchedRow<T, Rels, Cols>: FromJsonValue,
    {
        self.client()?;
        let sql = query.to_sql_one()?;
        let rows = self.run(&sql, Some(ResultShape::Unwrapped)).await?;
        Option::from_json_value(first_row(rows))
    }

    fn shape(&self, requested: Option<ResultShape>) -> ResultShape {
        requested.unwrap_or(self.defaults.shape)
    }

    async fn run(&self, sql: &str, shape: Option<ResultShape>) -> Result<Json> {
        let client = self.client()?;
        let raw = client.execute(sql).await.map_err(|e| {
            sorm_core::sorm_trace_error!(sql, e);
            SormError::client(e)
        })?;
        unwrap_response(raw, self.shape(shape)).inspect_err(|_err| {
            sorm_core::sorm_trace_error!(sql, _err);
        })
    }
}
