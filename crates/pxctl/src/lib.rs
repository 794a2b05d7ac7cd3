use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

mod config;
mod connect;
mod context;
mod get;
mod output;

use output::{Output, OutputType};

/// A command-line tool for working with Portworx clusters.
#[derive(Debug, clap::Parser)]
#[clap(author, about, version)]
pub struct Cli {
    /// Path of the configuration file which holds contexts.
    ///
    /// Defaults to `pxctl/config.yaml` within the user's configuration directory.
    #[clap(long, global = true, env = "PXCTL_CONFIG")]
    config: Option<PathBuf>,

    /// Context to use instead of the current context.
    #[clap(long, global = true, env = "PXCTL_CONTEXT")]
    context: Option<String>,

    /// Deadline of each request to the cluster, such as `30s` or `2m`.
    #[clap(long, global = true, default_value = "30s", value_parser = humantime::parse_duration)]
    timeout: Duration,

    #[clap(subcommand)]
    cmd: Command,

    #[clap(flatten)]
    output: Output,
}

#[derive(Debug, clap::Subcommand)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Get information about cluster resources.
    Get(get::Get),
    /// Manage contexts, which are the connection information of clusters.
    ///
    /// A context is the information needed to connect to a cluster:
    /// its endpoint, and optionally an auth token and TLS material.
    /// Contexts are saved to the pxctl configuration file.
    Context(context::Contexts),
}

#[derive(Debug)]
pub struct CliContext {
    config: config::Config,
    config_path: PathBuf,
    config_dirty: bool,
    context: Option<String>,
    timeout: Duration,
    output: output::Output,
}

impl CliContext {
    pub fn config(&self) -> &config::Config {
        &self.config
    }

    /// Mutable access to the configuration, which is written back upon success.
    pub fn config_mut(&mut self) -> &mut config::Config {
        self.config_dirty = true;
        &mut self.config
    }

    pub fn config_path(&self) -> &std::path::Path {
        &self.config_path
    }

    /// Returns a client of the alerts service of the selected context.
    pub async fn alerts_client(&self) -> anyhow::Result<alerts::Client> {
        let (name, context) = self.config.selected(self.context.as_deref())?;
        tracing::debug!(%name, endpoint = %context.endpoint, "connecting to cluster");

        let client = connect::connect(context)
            .await
            .with_context(|| format!("failed to connect using context {name:?}"))?;

        Ok(client.with_timeout(self.timeout))
    }

    pub fn write_all<I, T>(&mut self, items: I, table_alt: T::TableAlt) -> anyhow::Result<()>
    where
        T: output::CliOutput,
        I: IntoIterator<Item = T>,
    {
        match self.get_output_type() {
            OutputType::Json => output::print_json(items),
            OutputType::Yaml => output::print_yaml(items),
            OutputType::Table | OutputType::Wide => output::print_table(table_alt, items),
        }
    }

    pub fn get_output_type(&self) -> OutputType {
        use crossterm::tty::IsTty;

        if let Some(ty) = self.output.output {
            ty
        } else {
            if std::io::stdout().is_tty() {
                OutputType::Table
            } else {
                OutputType::Yaml
            }
        }
    }
}

impl Cli {
    pub async fn run(&self) -> anyhow::Result<()> {
        let config_path = match &self.config {
            Some(path) => path.clone(),
            None => config::Config::default_path()?,
        };
        let config = config::Config::load(&config_path)?;

        let mut context = CliContext {
            config,
            config_path,
            config_dirty: false,
            context: self.context.clone(),
            timeout: self.timeout,
            output: self.output.clone(),
        };

        match &self.cmd {
            Command::Get(get) => get.run(&mut context).await,
            Command::Context(contexts) => contexts.run(&mut context).await,
        }?;

        if context.config_dirty {
            context.config().write(context.config_path())?;
        }

        Ok(())
    }
}

// new_table builds a comfy_table with UTF8 styling.
fn new_table(headers: Vec<&str>) -> comfy_table::Table {
    let mut table = comfy_table::Table::new();
    table
        .load_preset(comfy_table::presets::UTF8_FULL)
        .apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS)
        .apply_modifier(comfy_table::modifiers::UTF8_SOLID_INNER_BORDERS);

    table.set_header(headers);
    table
}

/// Timestamp displays an optional point in time at second precision,
/// or as empty if there isn't one.
#[derive(Debug, Clone, Copy)]
pub struct Timestamp(Option<time::OffsetDateTime>);

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(ts) = self.0 else {
            return Ok(());
        };
        let ts = ts
            .replace_nanosecond(0)
            .map_err(|_| std::fmt::Error)?
            .format(&time::format_description::well_known::Rfc3339)
            .map_err(|_| std::fmt::Error)?;

        f.write_str(&ts)
    }
}

#[cfg(test)]
mod test {
    use super::Timestamp;
    use time::macros::datetime;

    #[test]
    fn test_timestamp_display() {
        assert_eq!(
            Timestamp(Some(datetime!(2024-02-29 13:14:15.987 UTC))).to_string(),
            "2024-02-29T13:14:15Z"
        );
        assert_eq!(Timestamp(None).to_string(), "");
    }
}
