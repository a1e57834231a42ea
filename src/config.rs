use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use base64::{Engine, engine::general_purpose::STANDARD};

/// Connection and server settings resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub hostname: String,
    pub port: u16,
    pub db_name: String,
    pub user: String,
    /// Decoded password, ready to hand to the driver.
    pub password: String,
    pub tls_ca_file: Option<PathBuf>,
    pub server_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let hostname = env::var("MONGO_HOSTNAME").unwrap_or_else(|_| "localhost".to_string());

        let port = env::var("MONGO_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(27017);

        let db_name = env::var("MONGO_DBNAME").unwrap_or_else(|_| "testdb".to_string());

        let user = env::var("MONGO_USER")
            .map_err(|_| anyhow::anyhow!("MONGO_USER not set"))?;

        let encoded = resolve_encoded_password(
            env::var("MONGO_PASS_FILE").ok(),
            env::var("MONGO_PASS_ENCODED").ok(),
        )?;
        let password = decode_password(&encoded)?;

        let tls_ca_file = env::var("MONGO_TLS_CA_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let server_addr =
            env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:9080".to_string());

        Ok(Self {
            hostname,
            port,
            db_name,
            user,
            password,
            tls_ca_file,
            server_addr,
        })
    }
}

/// Pick the password source: a configured file wins over the inline value.
fn resolve_encoded_password(
    pass_file: Option<String>,
    encoded_pass: Option<String>,
) -> Result<String> {
    if let Some(path) = pass_file.filter(|p| !p.is_empty()) {
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read Mongo password from file: {}", path))?;
        return Ok(contents.trim().to_string());
    }

    match encoded_pass {
        Some(value) if !value.is_empty() => Ok(value),
        _ => bail!("Neither MONGO_PASS_FILE nor MONGO_PASS_ENCODED are defined"),
    }
}

/// Reverse the at-rest obfuscation. Not a security boundary.
fn decode_password(encoded: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(encoded)
        .context("Mongo password is not valid base64")?;

    String::from_utf8(bytes).context("Decoded Mongo password is not valid UTF-8")
}
