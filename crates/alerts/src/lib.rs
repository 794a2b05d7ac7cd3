mod alert;
pub use alert::{Alert, ResourceType, Severity};

pub mod catalog;
pub use catalog::Catalog;

pub mod filter;

mod merge;
pub use merge::merge;

pub mod query;
pub use query::{AlertsService, Client};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("connection to the alerts service is not usable")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("alerts query was cancelled")]
    Cancelled(#[source] tonic::Status),
    #[error("failed to query {resource} alerts")]
    Query {
        resource: ResourceType,
        #[source]
        status: tonic::Status,
    },
    #[error("alert has an invalid timestamp (seconds: {seconds}, nanos: {nanos})")]
    InvalidTimestamp { seconds: i64, nanos: i32 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// QueryFailure records a resource type whose query didn't run to completion.
/// Alerts received before the failure are retained in the AggregationResult.
#[derive(Debug)]
pub struct QueryFailure {
    pub resource: ResourceType,
    /// Number of alerts received before the failure.
    pub received: usize,
    pub error: Error,
}

/// AggregationResult is the outcome of a single fetch_alerts() pass.
#[derive(Debug)]
pub struct AggregationResult {
    /// Alerts of all queried resource types, ordered on ascending timestamp.
    pub alerts: Vec<Alert>,
    /// Catalog for resolving alert type names.
    pub catalog: Catalog,
    /// Resource types whose query failed, in the order they were queried.
    pub failures: Vec<QueryFailure>,
}

impl AggregationResult {
    /// Returns true if any resource type failed to be fully queried.
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Display name of the alert type of `alert`.
    pub fn alert_type_name(&self, alert: &Alert) -> &'static str {
        self.catalog.name(alert.alert_type)
    }
}

/// Fetch alerts of the resource types matched by `filter`,
/// merged into a single sequence ordered by ascending timestamp.
///
/// Resource types are queried concurrently. A failed query of one resource
/// type doesn't fail the call: alerts it returned before failing are kept,
/// and the failure is recorded in AggregationResult::failures.
/// An unusable `service` or a cancelled query fails the entire call.
pub async fn fetch_alerts<S: AlertsService>(service: &S, filter: &str) -> Result<AggregationResult> {
    let catalog = Catalog::build();

    service.ready().await?;

    let resources = filter::expand(filter);
    if resources.is_empty() {
        tracing::debug!(%filter, "filter matches no resource types");

        return Ok(AggregationResult {
            alerts: Vec::new(),
            catalog,
            failures: Vec::new(),
        });
    }

    // Batches are yielded in `resources` order, regardless of completion order.
    let batches = futures::future::try_join_all(
        resources
            .iter()
            .map(|resource| query::query(service, *resource)),
    )
    .await?;

    let mut failures = Vec::new();
    let mut parts = Vec::with_capacity(batches.len());

    for query::Batch {
        resource,
        alerts,
        failure,
    } in batches
    {
        if let Some(error) = failure {
            tracing::warn!(%resource, received = alerts.len(), ?error, "alerts query failed");

            failures.push(QueryFailure {
                resource,
                received: alerts.len(),
                error,
            });
        }
        parts.push((resource, alerts));
    }

    let alerts = merge(parts);
    tracing::debug!(%filter, alerts = alerts.len(), failures = failures.len(), "fetched alerts");

    Ok(AggregationResult {
        alerts,
        catalog,
        failures,
    })
}
