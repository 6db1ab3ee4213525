//! Neo4j connection client.

use neo4rs::{ConfigBuilder, Graph, Query};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::time::{sleep, Duration};
use tracing::warn;

use moviechain_core::{ChainError, ChainResult};

const RETRY_ATTEMPTS: u32 = 3;
const RETRY_BASE_DELAY: Duration = Duration::from_millis(250);

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "moviechain_dev".to_string(),
        }
    }
}

impl GraphConfig {
    /// Read connection parameters from `NEO4J_URI`, `NEO4J_USER` and
    /// `NEO4J_PASSWORD`, falling back to the local defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            uri: std::env::var("NEO4J_URI").unwrap_or(defaults.uri),
            user: std::env::var("NEO4J_USER").unwrap_or(defaults.user),
            password: std::env::var("NEO4J_PASSWORD").unwrap_or(defaults.password),
        }
    }
}

/// Client for graph store operations.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Create a new GraphClient from config.
    ///
    /// Note: neo4rs uses a lazy deadpool — `Graph::connect` only creates
    /// the pool object and does NOT establish a real bolt connection
    /// yet. We run a cheap `RETURN 1` ping immediately so that callers
    /// can wrap this in a timeout and get a fast failure when Neo4j is
    /// unreachable instead of hanging silently.
    pub async fn connect(config: &GraphConfig) -> ChainResult<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db("neo4j")
            .max_connections(8)
            .fetch_size(200)
            .build()
            .map_err(classify_store_error)?;

        let graph = Graph::connect(neo4j_config).await.map_err(classify_store_error)?;

        graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .map_err(classify_store_error)?;

        Ok(Self { graph })
    }

    /// Create a new GraphClient from environment configuration.
    pub async fn connect_env() -> ChainResult<Self> {
        Self::connect(&GraphConfig::from_env()).await
    }

    /// Execute a Cypher query that returns no results.
    pub async fn execute(&self, query: Query) -> ChainResult<()> {
        self.graph.run(query).await.map_err(classify_store_error)
    }

    /// Execute a Cypher query and return results as rows.
    ///
    /// Stream errors propagate; a failed result set must never look
    /// like an empty one to the caller.
    pub async fn query(&self, query: Query) -> ChainResult<Vec<neo4rs::Row>> {
        let mut result = self.graph.execute(query).await.map_err(classify_store_error)?;

        let mut rows = Vec::new();
        while let Some(row) = result.next().await.map_err(classify_store_error)? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a read query, retrying a bounded number of times with
    /// doubling backoff when the failure is transport-level. Rejected
    /// queries are never retried.
    pub async fn query_with_retry(&self, query: Query) -> ChainResult<Vec<neo4rs::Row>> {
        let mut delay = RETRY_BASE_DELAY;
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.query(query.clone()).await {
                Ok(rows) => return Ok(rows),
                Err(err) if err.is_retryable() && attempt < RETRY_ATTEMPTS => {
                    warn!(attempt, error = %err, "transport error, retrying query");
                    sleep(delay).await;
                    delay *= 2;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Execute a Cypher query and return a single scalar value.
    pub async fn query_scalar<T: DeserializeOwned>(
        &self,
        query: Query,
        field: &str,
    ) -> ChainResult<Option<T>> {
        let rows = self.query(query).await?;
        if let Some(row) = rows.into_iter().next() {
            let val: T = row
                .get(field)
                .map_err(|e| ChainError::Query(format!("failed to get field '{field}': {e:?}")))?;
            Ok(Some(val))
        } else {
            Ok(None)
        }
    }

    /// Get node and relationship counts for status display.
    pub async fn get_counts(&self) -> ChainResult<GraphCounts> {
        let node_query = Query::new("MATCH (n) RETURN count(n) as count".to_string());
        let rel_query = Query::new("MATCH ()-[r]->() RETURN count(r) as count".to_string());

        let node_count: i64 = self.query_scalar(node_query, "count").await?.unwrap_or(0);
        let rel_count: i64 = self.query_scalar(rel_query, "count").await?.unwrap_or(0);

        Ok(GraphCounts {
            nodes: node_count as usize,
            relationships: rel_count as usize,
        })
    }

    /// Get a reference to the underlying neo4rs Graph.
    pub fn inner(&self) -> &Graph {
        &self.graph
    }
}

/// Node and relationship counts.
#[derive(Debug, Clone)]
pub struct GraphCounts {
    pub nodes: usize,
    pub relationships: usize,
}

/// Split driver errors along the retryability line callers depend on:
/// transport and auth failures become `Connection`; everything else
/// (bad Cypher, constraint violations, deserialization) is `Query`.
pub fn classify_store_error(err: neo4rs::Error) -> ChainError {
    use neo4rs::Error as Neo;
    match &err {
        Neo::ConnectionError | Neo::IoError(_) | Neo::AuthenticationError(_) => {
            ChainError::Connection(err.to_string())
        }
        _ => ChainError::Query(err.to_string()),
    }
}
