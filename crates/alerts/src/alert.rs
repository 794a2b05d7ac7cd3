use proto_openstorage::alerts as proto;
use time::OffsetDateTime;

/// ResourceType is the category of cluster object against which an Alert is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Volume,
    Node,
    Cluster,
    Drive,
}

impl ResourceType {
    /// All resource types, in the order they're queried.
    pub const ALL: &'static [ResourceType] = &[
        ResourceType::Volume,
        ResourceType::Node,
        ResourceType::Cluster,
        ResourceType::Drive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Volume => "VOLUME",
            ResourceType::Node => "NODE",
            ResourceType::Cluster => "CLUSTER",
            ResourceType::Drive => "DRIVE",
        }
    }

    pub fn to_proto(self) -> proto::ResourceType {
        match self {
            ResourceType::Volume => proto::ResourceType::Volume,
            ResourceType::Node => proto::ResourceType::Node,
            ResourceType::Cluster => proto::ResourceType::Cluster,
            ResourceType::Drive => proto::ResourceType::Drive,
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of an Alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    None,
    Alarm,
    Warning,
    Notify,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "NONE",
            Severity::Alarm => "ALARM",
            Severity::Warning => "WARNING",
            Severity::Notify => "NOTIFY",
        }
    }
}

impl From<proto::SeverityType> for Severity {
    fn from(value: proto::SeverityType) -> Self {
        match value {
            proto::SeverityType::None => Severity::None,
            proto::SeverityType::Alarm => Severity::Alarm,
            proto::SeverityType::Warning => Severity::Warning,
            proto::SeverityType::Notify => Severity::Notify,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert is a discrete event raised against a cluster resource,
/// as received from the alerts service.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: i64,
    /// Resource type of the scoped query which returned this Alert.
    pub resource: ResourceType,
    pub resource_id: String,
    pub alert_type: i64,
    pub severity: Severity,
    /// Number of times the Alert has been raised.
    pub count: i64,
    #[serde(with = "time::serde::rfc3339::option")]
    pub first_seen: Option<OffsetDateTime>,
    /// Time at which the Alert was last raised.
    #[serde(with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,
    pub message: String,
    pub cleared: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub unique_tag: String,
}

impl Alert {
    /// Map a wire Alert returned by a query scoped to `resource`.
    pub fn from_proto(resource: ResourceType, alert: proto::Alert) -> crate::Result<Self> {
        let severity = proto::SeverityType::try_from(alert.severity)
            .unwrap_or(proto::SeverityType::None)
            .into();

        Ok(Self {
            id: alert.id,
            resource,
            resource_id: alert.resource_id,
            alert_type: alert.alert_type,
            severity,
            count: alert.count,
            first_seen: alert.first_seen.as_ref().map(to_datetime).transpose()?,
            timestamp: alert.timestamp.as_ref().map(to_datetime).transpose()?,
            message: alert.message,
            cleared: alert.cleared,
            unique_tag: alert.unique_tag,
        })
    }
}

fn to_datetime(ts: &pbjson_types::Timestamp) -> crate::Result<OffsetDateTime> {
    let nanos = ts.seconds as i128 * 1_000_000_000 + ts.nanos as i128;

    OffsetDateTime::from_unix_timestamp_nanos(nanos).map_err(|_| crate::Error::InvalidTimestamp {
        seconds: ts.seconds,
        nanos: ts.nanos,
    })
}
