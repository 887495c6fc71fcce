use clap::builder::TypedValueParser as _;
use clap::Parser;
use log::LevelFilter;

/// Infrastructure configuration shared by the maintenance binaries.
///
/// Every value can come from the command line or the environment (the
/// binaries load `.env` before parsing). The database URL has no default
/// on purpose: credentials are injected at process start and never live
/// in source.
#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Sets the Postgresql database URL to connect to
    #[arg(short, long, env)]
    database_url: String,

    /// Maximum number of database connections in the pool
    #[arg(long, env, default_value_t = 5)]
    pub db_max_connections: u32,

    /// Minimum number of idle database connections to maintain
    #[arg(long, env, default_value_t = 1)]
    pub db_min_connections: u32,

    /// Timeout in seconds for establishing a new database connection
    #[arg(long, env, default_value_t = 8)]
    pub db_connect_timeout_secs: u64,

    /// Timeout in seconds for acquiring a connection from the pool
    #[arg(long, env, default_value_t = 8)]
    pub db_acquire_timeout_secs: u64,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Config {
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_url_is_required() {
        // Parsed in a vacuum (no env), a missing URL must be an error
        // rather than some embedded default credential.
        let result = Config::try_parse_from(["config"]);
        if std::env::var("DATABASE_URL").is_err() {
            assert!(result.is_err());
        }
    }

    #[test]
    fn pool_sizing_has_small_defaults() {
        let config =
            Config::try_parse_from(["config", "--database-url", "postgres://localhost/app"])
                .expect("parse failed");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.db_min_connections, 1);
        assert_eq!(config.log_level_filter, LevelFilter::Info);
    }
}
