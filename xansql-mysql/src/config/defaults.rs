//! Default configuration values - single source of truth

/// Engine tag reported to the host framework
pub const ENGINE: &str = "mysql";

/// Default server host
pub const HOST: &str = "localhost";

/// Default server port
pub const PORT: u16 = 3306;

/// Default maximum number of pooled connections
pub const CONNECTION_LIMIT: usize = 10;

/// Pool size used for `connectionLimit = 0`, which means "no limit". Far
/// above the server's default `max_connections`, so the server is what
/// actually caps the pool.
pub const UNBOUNDED_CONNECTION_LIMIT: usize = 4096;

/// Default minimum number of idle connections the pool keeps
pub const MIN_CONNECTIONS: usize = 0;

/// Prefix for environment variable overrides (`XANSQL_MYSQL_HOST`, ...)
pub const ENV_PREFIX: &str = "XANSQL_MYSQL";

/// Config file looked up when no explicit path is given (any supported extension)
pub const CONFIG_FILE: &str = "xansql-mysql";
