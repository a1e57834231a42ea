pub mod models;
pub mod queries;

use anyhow::{Result, Context};
use mongodb::options::{ClientOptions, Credential, Tls, TlsOptions};
use mongodb::{Client, Database};

use crate::config::Config;

/// Create MongoDB connection
pub async fn create_client(config: &Config) -> Result<Client> {
    let uri = format!("mongodb://{}:{}", config.hostname, config.port);
    let mut options = ClientOptions::parse(&uri)
        .await
        .context("Failed to parse MongoDB connection string")?;

    options.credential = Some(
        Credential::builder()
            .username(config.user.clone())
            .password(config.password.clone())
            .source(config.db_name.clone())
            .build(),
    );

    // TLS is always on; a custom CA bundle is optional.
    let tls_options = match &config.tls_ca_file {
        Some(path) => TlsOptions::builder().ca_file_path(path.clone()).build(),
        None => TlsOptions::default(),
    };
    options.tls = Some(Tls::Enabled(tls_options));

    let client = Client::with_options(options).context("Failed to build MongoDB client")?;

    // Ping to verify connection
    client
        .database("admin")
        .run_command(mongodb::bson::doc! {"ping": 1})
        .await
        .context("Failed to ping MongoDB")?;

    tracing::info!("Successfully connected to MongoDB");
    Ok(client)
}

/// Get database handle
pub fn get_database(client: &Client, db_name: &str) -> Database {
    client.database(db_name)
}
