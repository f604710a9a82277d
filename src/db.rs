//! Database connection management
//!
//! Every request opens its own connection through [`ConnectionFactory`] and
//! drops it when the handler finishes. There is no pooling.

pub mod queries;
pub mod repository;

use crate::config::DatabaseConfig;
use crate::error::AppError;
use tokio_postgres::{Client, Config, NoTls};
use tracing::{debug, error};

pub use repository::PgRepository;

/// Opens fresh PostgreSQL connections from the configured parameters
#[derive(Clone)]
pub struct ConnectionFactory {
    config: Config,
    require_tls: bool,
}

impl ConnectionFactory {
    pub fn new(db: &DatabaseConfig) -> Self {
        let mut config = Config::new();
        config
            .host(&db.host)
            .port(db.port)
            .user(&db.user)
            .password(&db.password)
            .dbname(&db.database)
            .connect_timeout(db.connect_timeout)
            .application_name(env!("CARGO_PKG_NAME"));

        Self {
            config,
            require_tls: db.require_tls,
        }
    }

    /// Open a new connection.
    ///
    /// The connection driver runs on its own task and ends once the returned
    /// client is dropped.
    pub async fn connect(&self) -> Result<Client, AppError> {
        let client = if self.require_tls {
            let (client, connection) = self
                .config
                .connect(make_tls_connector())
                .await
                .map_err(|e| AppError::Connection(e.to_string()))?;
            tokio::spawn(async move {
                if let Err(e) = connection.await {
                    error!("Database connection error: {}", e);
                }
            });
            client
        } else {
            let (client, connection) = self
                .config
                .connect(NoTls)
                .await
                .map_err(|e| AppError::Connection(e.to_string()))?;
            tokio::spawn(async move {
                if let Err(e) = connection.await {
                    error!("Database connection error: {}", e);
                }
            });
            client
        };

        debug!("Opened database connection (TLS: {})", self.require_tls);
        Ok(client)
    }

    /// Open a connection and run a trivial query against it
    pub async fn ping(&self) -> Result<(), AppError> {
        let client = self.connect().await?;
        client.query_one(queries::PING, &[]).await?;
        Ok(())
    }
}

/// TLS connector backed by the platform's native root certificates
fn make_tls_connector() -> tokio_postgres_rustls::MakeRustlsConnect {
    let certs = rustls_native_certs::load_native_certs();
    let mut root_store = rustls::RootCertStore::empty();
    for cert in certs.certs {
        root_store.add(cert).ok();
    }

    let tls_config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    tokio_postgres_rustls::MakeRustlsConnect::new(tls_config)
}
