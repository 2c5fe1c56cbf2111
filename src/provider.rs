//! Import provider subprocess protocol.
//!
//! This module handles communication with external import provider binaries
//! (e.g., `annum-provider-gcal`) using JSON over stdin/stdout.
//!
//! The protocol is language-agnostic: any executable that speaks the JSON
//! protocol can be a provider. Providers manage their own credentials and
//! tokens; the CLI just passes provider-specific parameters from the
//! `[import]` config section.

use anyhow::{Context, Result};
use annum_core::protocol::{Command as ProviderCommand, Request, Response};
use annum_core::Event;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::Command;

/// A client for communicating with a provider subprocess.
///
/// Providers are discovered by looking for executables named
/// `annum-provider-{name}` in PATH.
pub struct Provider {
    binary_path: PathBuf,
}

impl Provider {
    /// Create a new provider client.
    pub fn new(name: &str) -> Result<Self> {
        let binary_name = format!("annum-provider-{}", name);
        let binary_path = which::which(&binary_name).with_context(|| {
            format!(
                "Provider '{}' not found. Install it with:\n  cargo install {}",
                name, binary_name
            )
        })?;

        Ok(Self { binary_path })
    }

    /// Call a provider command and return the result.
    async fn call<R: DeserializeOwned>(
        &self,
        command: ProviderCommand,
        params: serde_json::Value,
    ) -> Result<R> {
        let request = Request { command, params };

        let request_json =
            serde_json::to_string(&request).context("Failed to serialize provider request")?;

        let mut child = Command::new(&self.binary_path)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::inherit()) // Let provider errors show in terminal
            .spawn()
            .with_context(|| format!("Failed to spawn provider: {}", self.binary_path.display()))?;

        // Write request to stdin, then drop it to signal EOF
        {
            let mut stdin = child.stdin.take().context("Provider stdin unavailable")?;
            stdin
                .write_all(request_json.as_bytes())
                .await
                .context("Failed to write to provider stdin")?;
            stdin
                .write_all(b"\n")
                .await
                .context("Failed to write newline to provider stdin")?;
            stdin.flush().await.context("Failed to flush provider stdin")?;
        }

        // Read the one-line JSON response from stdout
        let stdout = child.stdout.take().context("Provider stdout unavailable")?;
        let mut reader = BufReader::new(stdout);
        let mut line = String::new();
        reader
            .read_line(&mut line)
            .await
            .context("Failed to read provider response")?;

        if line.is_empty() {
            anyhow::bail!("Provider returned no response");
        }

        let status = child.wait().await.context("Failed to wait for provider")?;
        if !status.success() {
            anyhow::bail!("Provider exited with status: {}", status.code().unwrap_or(-1));
        }

        let response: Response<R> = serde_json::from_str(&line)
            .with_context(|| format!("Failed to parse provider response: {}", line))?;

        match response {
            Response::Success { data } => Ok(data),
            Response::Error { error } => Err(anyhow::anyhow!("{}", error)),
        }
    }

    /// Authenticate with the provider.
    ///
    /// Provider handles the full auth flow (OAuth, etc.) and stores
    /// credentials/tokens in its own config directory.
    ///
    /// Returns the account identifier (e.g., email for Google).
    pub async fn authenticate(&self) -> Result<String> {
        self.call(ProviderCommand::Authenticate, serde_json::json!(null))
            .await
    }

    /// Fetch events from the provider for one year.
    pub async fn fetch_events(&self, params: serde_json::Value) -> Result<Vec<Event>> {
        self.call(ProviderCommand::ListEvents, params).await
    }
}

/// Convert import config params to JSON and merge with additional params.
pub fn build_params(
    config_params: &HashMap<String, toml::Value>,
    additional: &[(&str, serde_json::Value)],
) -> serde_json::Value {
    let mut params = serde_json::Map::new();

    for (key, value) in config_params {
        if let Ok(json_value) = serde_json::to_value(value) {
            params.insert(key.clone(), json_value);
        }
    }

    for (key, value) in additional {
        params.insert((*key).to_string(), value.clone());
    }

    serde_json::Value::Object(params)
}
