use crate::output::{CliOutput, OutputType};
use crate::Timestamp;
use serde::Serialize;

#[derive(Debug, clap::Args)]
#[clap(rename_all = "kebab-case")]
pub struct Get {
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, clap::Subcommand)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Get alerts of cluster resources, ordered on when they were last seen.
    Alerts(Alerts),
}

#[derive(Debug, clap::Args)]
#[clap(rename_all = "kebab-case")]
pub struct Alerts {
    /// Resource type of alerts to get.
    #[clap(
        long = "type",
        short = 't',
        default_value = "all",
        value_parser = clap::builder::PossibleValuesParser::new(alerts::filter::FILTERS.iter().copied()),
    )]
    resource_type: String,
}

impl Get {
    pub async fn run(&self, ctx: &mut crate::CliContext) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Alerts(alerts) => do_get_alerts(ctx, alerts).await,
        }
    }
}

async fn do_get_alerts(
    ctx: &mut crate::CliContext,
    Alerts { resource_type }: &Alerts,
) -> anyhow::Result<()> {
    let client = ctx.alerts_client().await?;
    let result = alerts::fetch_alerts(&client, resource_type).await?;

    render_alerts(ctx, &result, &mut std::io::stdout().lock())
}

/// Render the alerts of `result`, and then fail if `result` is partial.
/// Notices meant for a reader of a table, rather than rows, go to `notices`.
fn render_alerts(
    ctx: &mut crate::CliContext,
    result: &alerts::AggregationResult,
    notices: &mut impl std::io::Write,
) -> anyhow::Result<()> {
    let output_type = ctx.get_output_type();
    let wide = output_type == OutputType::Wide;
    let rows = rows(result);

    if rows.is_empty() && matches!(output_type, OutputType::Table | OutputType::Wide) {
        writeln!(notices, "No alerts found")?;
    } else {
        ctx.write_all(rows, wide)?;
    }

    for failure in &result.failures {
        tracing::warn!(
            resource = %failure.resource,
            received = failure.received,
            error = %failure.error,
            status = ?std::error::Error::source(&failure.error),
            "alerts of resource type are incomplete"
        );
    }
    if result.is_partial() {
        anyhow::bail!(
            "alerts of {} resource type(s) could not be fully fetched",
            result.failures.len()
        );
    }
    Ok(())
}

fn rows(result: &alerts::AggregationResult) -> Vec<AlertRow<'_>> {
    result
        .alerts
        .iter()
        .map(|alert| AlertRow {
            alert_type_name: result.alert_type_name(alert),
            alert,
        })
        .collect()
}

/// AlertRow is an Alert along with the display name of its alert type.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AlertRow<'a> {
    alert_type_name: &'static str,
    #[serde(flatten)]
    alert: &'a alerts::Alert,
}

impl<'a> CliOutput for AlertRow<'a> {
    // Whether to include the additional columns of `--output wide`.
    type TableAlt = bool;
    type CellValue = String;

    fn table_headers(wide: Self::TableAlt) -> Vec<&'static str> {
        if wide {
            vec![
                "Type",
                "Id",
                "Resource",
                "Severity",
                "Count",
                "LastSeen",
                "FirstSeen",
                "Description",
            ]
        } else {
            vec![
                "Id",
                "Severity",
                "Count",
                "LastSeen",
                "FirstSeen",
                "Description",
            ]
        }
    }

    fn into_table_row(self, wide: Self::TableAlt) -> Vec<Self::CellValue> {
        let AlertRow {
            alert_type_name,
            alert,
        } = self;

        let mut row = Vec::with_capacity(8);
        if wide {
            row.push(alert.resource.to_string());
        }
        row.push(alert_type_name.to_string());
        if wide {
            row.push(alert.resource_id.clone());
        }
        row.extend([
            alert.severity.to_string(),
            alert.count.to_string(),
            Timestamp(alert.timestamp).to_string(),
            Timestamp(alert.first_seen).to_string(),
            alert.message.clone(),
        ]);
        row
    }
}
