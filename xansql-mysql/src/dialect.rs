//! The MySQL dialect handed to the host framework

use crate::config::{defaults, DialectConfig, FileConfig};
use crate::error::Result;
use crate::mysql::{self, MySqlPool};
use crate::schema::SchemaSnapshot;
use crate::traits::{Dialect, ExecuteResult};
use async_trait::async_trait;

/// MySQL dialect: raw statement execution and schema introspection over one
/// shared connection pool.
///
/// Cloning is cheap and every clone shares the same pool.
///
/// # Example
///
/// ```ignore
/// use xansql_mysql::{DialectConfig, MysqlDialect};
///
/// let dialect = MysqlDialect::new(DialectConfig::from_uri("mysql://root@localhost/app"))?;
/// let inserted = dialect.execute("INSERT INTO users (email) VALUES ('a@b.com')").await?;
/// assert_eq!(inserted.affected_rows, 1);
///
/// let schema = dialect.get_schema().await?;
/// dialect.disconnect().await?;
/// ```
#[derive(Debug, Clone)]
pub struct MysqlDialect {
    pool: MySqlPool,
    file: Option<FileConfig>,
}

impl MysqlDialect {
    /// Engine tag reported to the host.
    pub const ENGINE: &'static str = defaults::ENGINE;

    /// Build the dialect. No connection is opened until the first call.
    pub fn new(config: DialectConfig) -> Result<Self> {
        let pool = MySqlPool::from_config(&config.pool)?;
        Ok(Self {
            pool,
            file: config.file,
        })
    }

    /// Wrap an existing pool.
    pub fn with_pool(pool: MySqlPool, file: Option<FileConfig>) -> Self {
        Self { pool, file }
    }

    pub fn engine(&self) -> &'static str {
        Self::ENGINE
    }

    /// Execute one raw SQL statement. See [`mysql::execute`].
    pub async fn execute(&self, sql: &str) -> Result<ExecuteResult> {
        mysql::execute(&self.pool, sql).await
    }

    /// Describe every table of the active database. See [`mysql::get_schema`].
    pub async fn get_schema(&self) -> Result<SchemaSnapshot> {
        mysql::get_schema(&self.pool).await
    }

    pub fn file(&self) -> Option<&FileConfig> {
        self.file.as_ref()
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Close every pooled connection.
    ///
    /// Other clones of this dialect cannot acquire connections afterwards.
    pub async fn disconnect(self) -> Result<()> {
        self.pool.disconnect().await
    }
}

#[async_trait]
impl Dialect for MysqlDialect {
    fn engine(&self) -> &'static str {
        MysqlDialect::engine(self)
    }

    async fn execute(&self, sql: &str) -> Result<ExecuteResult> {
        MysqlDialect::execute(self, sql).await
    }

    async fn get_schema(&self) -> Result<SchemaSnapshot> {
        MysqlDialect::get_schema(self).await
    }

    fn file(&self) -> Option<&FileConfig> {
        MysqlDialect::file(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectionOptions;
    use serde_json::json;

    #[tokio::test]
    async fn test_construction_is_lazy() {
        // Nothing listens on port 1; construction must still succeed.
        let dialect = MysqlDialect::new(DialectConfig::from_options(ConnectionOptions {
            host: Some("127.0.0.1".into()),
            port: Some(1),
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(dialect.engine(), "mysql");
    }

    #[tokio::test]
    async fn test_file_passes_through() {
        let file = FileConfig(json!({ "upload_dir": "/tmp/uploads" }));
        let dialect = MysqlDialect::new(
            DialectConfig::from_uri("mysql://root@127.0.0.1:1/app").with_file(file.clone()),
        )
        .unwrap();
        assert_eq!(dialect.file(), Some(&file));

        let as_trait: Box<dyn Dialect> = Box::new(dialect);
        assert_eq!(as_trait.file(), Some(&file));
        assert_eq!(as_trait.engine(), MysqlDialect::ENGINE);
    }

    #[tokio::test]
    async fn test_unreachable_server_fails_on_first_use() {
        let dialect = MysqlDialect::new(DialectConfig::from_uri("mysql://root@127.0.0.1:1/app"))
            .unwrap();
        assert!(dialect.execute("SELECT 1").await.is_err());
    }
}
