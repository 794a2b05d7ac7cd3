use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Port of the cluster's API endpoint, used when an endpoint doesn't include one.
pub const DEFAULT_PORT: u16 = 9020;

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Name of the current context, or None if no context is selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<String>,
    /// Contexts, keyed on their name.
    #[serde(default)]
    pub contexts: BTreeMap<String, Context>,
}

/// Context is the information needed to connect to a cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    /// Endpoint of the cluster API, as `host:port`.
    pub endpoint: String,
    // Bearer token presented to the cluster, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Whether to connect using TLS.
    #[serde(default)]
    pub secure: bool,
    // PEM of a CA certificate which verifies the cluster, if it's not publicly trusted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<String>,
    /// Path of a kubeconfig of the Kubernetes cluster which runs the cluster, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubeconfig: Option<PathBuf>,
}

impl Config {
    /// Path of the configuration file within the user's configuration directory.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let dir = dirs::config_dir().context("couldn't determine the user's config directory")?;
        Ok(dir.join("pxctl").join("config.yaml"))
    }

    /// Load the Config at `path`, or return an empty Config if it doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = match std::fs::read(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file doesn't exist");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read config {}", path.display()))
            }
        };

        serde_yaml::from_slice(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Write the Config to `path`, creating its parent directories as needed.
    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config directory {}", parent.display()))?;
        }
        let content = serde_yaml::to_string(self).context("failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("failed to write config {}", path.display()))?;

        tracing::debug!(path = %path.display(), "wrote config file");
        Ok(())
    }

    /// Insert or replace the named context, returning true if it replaced an existing one.
    /// The context becomes current if no context is current.
    pub fn upsert(&mut self, name: &str, context: Context) -> bool {
        if self.current.is_none() {
            self.current = Some(name.to_string());
        }
        self.contexts.insert(name.to_string(), context).is_some()
    }

    /// Select the current context, which must exist.
    pub fn set_current(&mut self, name: &str) -> anyhow::Result<()> {
        if !self.contexts.contains_key(name) {
            anyhow::bail!("context {name:?} does not exist");
        }
        self.current = Some(name.to_string());
        Ok(())
    }

    pub fn unset_current(&mut self) {
        self.current = None;
    }

    /// Remove the named context. If it's current, no context remains current.
    pub fn remove(&mut self, name: &str) -> anyhow::Result<Context> {
        let context = self
            .contexts
            .remove(name)
            .with_context(|| format!("context {name:?} does not exist"))?;

        if self.current.as_deref() == Some(name) {
            self.current = None;
        }
        Ok(context)
    }

    /// Returns the `name` context if Some, or the current context otherwise.
    pub fn selected<'s>(&'s self, name: Option<&'s str>) -> anyhow::Result<(&'s str, &'s Context)> {
        let Some(name) = name.or(self.current.as_deref()) else {
            anyhow::bail!("no context is selected: create one with `pxctl context create`, or select one with `pxctl context use`");
        };
        let context = self
            .contexts
            .get(name)
            .with_context(|| format!("context {name:?} does not exist"))?;

        Ok((name, context))
    }
}

/// Validate an endpoint of the form `host[:port]`, returning it with
/// its port, which is DEFAULT_PORT if not provided.
pub fn validate_endpoint(endpoint: &str) -> anyhow::Result<String> {
    if endpoint.is_empty() {
        anyhow::bail!("endpoint cannot be empty");
    }
    if endpoint.contains("://") {
        anyhow::bail!("endpoint {endpoint:?} must not include a scheme");
    }

    // Parse using a non-special scheme, which has no default port
    // and so preserves any port which is explicitly given.
    let url = url::Url::parse(&format!("endpoint://{endpoint}"))
        .with_context(|| format!("invalid endpoint {endpoint:?}"))?;

    let host = match url.host_str() {
        Some(host) if !host.is_empty() => host,
        _ => anyhow::bail!("endpoint {endpoint:?} is missing a host"),
    };
    if !url.path().is_empty()
        || url.query().is_some()
        || url.fragment().is_some()
        || !url.username().is_empty()
    {
        anyhow::bail!("endpoint {endpoint:?} must be of the form `host[:port]`");
    }

    Ok(format!("{host}:{}", url.port().unwrap_or(DEFAULT_PORT)))
}
