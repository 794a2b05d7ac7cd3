use crate::{Alert, Error, ResourceType};
use futures::TryStreamExt;
use proto_openstorage::alerts as proto;
use std::future::Future;
use tonic::transport::Channel;

/// AlertsService is the capability of the remote alerts service
/// which is used to fetch alerts.
pub trait AlertsService: Send + Sync {
    /// Stream of response chunks of an enumeration, which ends with `None`
    /// upon a clean end-of-stream, or an error upon a broken one.
    type Stream: futures::Stream<Item = tonic::Result<proto::SdkAlertsEnumerateWithFiltersResponse>>
        + Send
        + Unpin;

    /// Resolve once the service is able to accept requests,
    /// or fail with Error::Connection if it never will be.
    fn ready(&self) -> impl Future<Output = crate::Result<()>> + Send + '_;

    /// Start a server-streaming enumeration of alerts matching the request.
    fn enumerate_with_filters(
        &self,
        req: proto::SdkAlertsEnumerateWithFiltersRequest,
    ) -> impl Future<Output = tonic::Result<Self::Stream>> + Send + '_;
}

// SubClient is the alerts client over an intercepted Channel.
type SubClient = proto::open_storage_alerts_client::OpenStorageAlertsClient<
    tonic::service::interceptor::InterceptedService<Channel, proto_openstorage::Metadata>,
>;

/// Client is an AlertsService backed by a gRPC Channel.
#[derive(Clone, Debug)]
pub struct Client {
    channel: Channel,
    metadata: proto_openstorage::Metadata,
    timeout: Option<std::time::Duration>,
}

impl Client {
    /// Build a Client which dispatches requests over `channel`,
    /// attaching the given Metadata to each.
    pub fn new(channel: Channel, metadata: proto_openstorage::Metadata) -> Self {
        Self {
            channel,
            metadata,
            timeout: None,
        }
    }

    /// Bound each request to the given deadline, which is propagated to the service.
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn subclient(&self) -> SubClient {
        proto::open_storage_alerts_client::OpenStorageAlertsClient::with_interceptor(
            self.channel.clone(),
            self.metadata.clone(),
        )
    }
}

impl AlertsService for Client {
    type Stream = tonic::Streaming<proto::SdkAlertsEnumerateWithFiltersResponse>;

    fn ready(&self) -> impl Future<Output = crate::Result<()>> + Send + '_ {
        async move {
            use tower::ServiceExt;

            let mut channel = self.channel.clone();
            ServiceExt::<tonic::codegen::http::Request<tonic::body::BoxBody>>::ready(&mut channel)
                .await
                .map_err(|err| Error::Connection(Box::new(err)))?;

            Ok(())
        }
    }

    fn enumerate_with_filters(
        &self,
        req: proto::SdkAlertsEnumerateWithFiltersRequest,
    ) -> impl Future<Output = tonic::Result<Self::Stream>> + Send + '_ {
        async move {
            let mut req = tonic::Request::new(req);
            if let Some(timeout) = self.timeout {
                req.set_timeout(timeout);
            }
            Ok(self
                .subclient()
                .enumerate_with_filters(req)
                .await?
                .into_inner())
        }
    }
}

/// Batch is the outcome of querying a single resource type.
#[derive(Debug)]
pub struct Batch {
    pub resource: ResourceType,
    /// Alerts in the order they were received.
    pub alerts: Vec<Alert>,
    /// Failure which stopped the query before its clean end-of-stream.
    pub failure: Option<Error>,
}

/// Query alerts of a single resource type, draining the response stream.
///
/// A failure to start the query, a broken stream, or an alert which can't be
/// mapped ends the drain and is returned as Batch::failure alongside the
/// alerts received before it. Only cancellation is returned as an Err.
pub async fn query<S: AlertsService>(
    service: &S,
    resource: ResourceType,
) -> crate::Result<Batch> {
    let req =
        proto::SdkAlertsEnumerateWithFiltersRequest::for_resource_type(resource.to_proto());
    tracing::debug!(%resource, "starting alerts query");

    let mut batch = Batch {
        resource,
        alerts: Vec::new(),
        failure: None,
    };

    let mut stream = match service.enumerate_with_filters(req).await {
        Ok(stream) => stream,
        Err(status) => {
            batch.failure = Some(query_failure(resource, status)?);
            return Ok(batch);
        }
    };

    loop {
        let resp = match stream.try_next().await {
            Ok(Some(resp)) => resp,
            Ok(None) => break,
            Err(status) => {
                batch.failure = Some(query_failure(resource, status)?);
                break;
            }
        };

        for alert in resp.alerts {
            match Alert::from_proto(resource, alert) {
                Ok(alert) => batch.alerts.push(alert),
                Err(err) => {
                    batch.failure = Some(err);
                    return Ok(batch);
                }
            }
        }
    }

    tracing::debug!(
        %resource,
        alerts = batch.alerts.len(),
        failed = batch.failure.is_some(),
        "drained alerts query"
    );
    Ok(batch)
}

// Map a query status into its recorded failure, or an Err if the query was cancelled.
fn query_failure(resource: ResourceType, status: tonic::Status) -> crate::Result<Error> {
    match status.code() {
        tonic::Code::Cancelled | tonic::Code::DeadlineExceeded => Err(Error::Cancelled(status)),
        _ => Ok(Error::Query { resource, status }),
    }
}

#[cfg(test)]
mod test {
    use super::{query, AlertsService};
    use crate::{Error, ResourceType};
    use proto_openstorage::alerts as proto;
    use std::future::Future;
    use std::sync::Mutex;

    type Chunk = tonic::Result<proto::SdkAlertsEnumerateWithFiltersResponse>;

    // Scripted service which records the requests it receives.
    struct Scripted {
        start: Mutex<Option<tonic::Result<Vec<Chunk>>>>,
        requests: Mutex<Vec<proto::SdkAlertsEnumerateWithFiltersRequest>>,
    }

    impl Scripted {
        fn new(start: tonic::Result<Vec<Chunk>>) -> Self {
            Self {
                start: Mutex::new(Some(start)),
                requests: Mutex::default(),
            }
        }
    }

    impl AlertsService for Scripted {
        type Stream = futures::stream::Iter<std::vec::IntoIter<Chunk>>;

        fn ready(&self) -> impl Future<Output = crate::Result<()>> + Send + '_ {
            async { Ok(()) }
        }

        fn enumerate_with_filters(
            &self,
            req: proto::SdkAlertsEnumerateWithFiltersRequest,
        ) -> impl Future<Output = tonic::Result<Self::Stream>> + Send + '_ {
            self.requests.lock().unwrap().push(req);
            let start = self.start.lock().unwrap().take().unwrap();
            async move { start.map(futures::stream::iter) }
        }
    }

    fn chunk(stamps: &[i64]) -> Chunk {
        Ok(proto::SdkAlertsEnumerateWithFiltersResponse {
            alerts: stamps
                .iter()
                .map(|seconds| proto::Alert {
                    id: *seconds,
                    timestamp: Some(pbjson_types::Timestamp {
                        seconds: *seconds,
                        nanos: 0,
                    }),
                    ..Default::default()
                })
                .collect(),
        })
    }

    fn ids(batch: &super::Batch) -> Vec<i64> {
        batch.alerts.iter().map(|a| a.id).collect()
    }

    #[tokio::test]
    async fn test_drains_all_chunks_in_arrival_order() {
        let service = Scripted::new(Ok(vec![chunk(&[3, 1]), chunk(&[]), chunk(&[2])]));
        let batch = query(&service, ResourceType::Cluster).await.unwrap();

        assert_eq!(ids(&batch), vec![3, 1, 2]);
        assert!(batch.failure.is_none());
        assert!(batch.alerts.iter().all(|a| a.resource == ResourceType::Cluster));

        let requests = service.requests.lock().unwrap();
        assert_eq!(
            *requests,
            vec![proto::SdkAlertsEnumerateWithFiltersRequest::for_resource_type(
                proto::ResourceType::Cluster
            )]
        );
    }

    #[tokio::test]
    async fn test_broken_stream_keeps_drained_alerts() {
        let service = Scripted::new(Ok(vec![
            chunk(&[1]),
            Err(tonic::Status::unavailable("connection reset")),
            chunk(&[2]),
        ]));
        let batch = query(&service, ResourceType::Drive).await.unwrap();

        assert_eq!(ids(&batch), vec![1]);
        assert!(matches!(
            batch.failure,
            Some(Error::Query { resource: ResourceType::Drive, ref status })
                if status.code() == tonic::Code::Unavailable
        ));
    }

    #[tokio::test]
    async fn test_rejected_query_is_recorded() {
        let service = Scripted::new(Err(tonic::Status::permission_denied("nope")));
        let batch = query(&service, ResourceType::Volume).await.unwrap();

        assert!(batch.alerts.is_empty());
        assert!(matches!(batch.failure, Some(Error::Query { .. })));
    }

    #[tokio::test]
    async fn test_cancellation_is_an_error() {
        let service = Scripted::new(Ok(vec![
            chunk(&[1]),
            Err(tonic::Status::deadline_exceeded("too slow")),
        ]));
        let err = query(&service, ResourceType::Node).await.unwrap_err();
        assert!(matches!(err, Error::Cancelled(_)));

        let service = Scripted::new(Err(tonic::Status::cancelled("stop")));
        let err = query(&service, ResourceType::Node).await.unwrap_err();
        assert!(matches!(err, Error::Cancelled(_)));
    }

    #[tokio::test]
    async fn test_invalid_timestamp_ends_the_drain() {
        let mut bad = chunk(&[2]).unwrap();
        bad.alerts[0].timestamp.as_mut().unwrap().seconds = i64::MIN;

        let service = Scripted::new(Ok(vec![chunk(&[1]), Ok(bad), chunk(&[3])]));
        let batch = query(&service, ResourceType::Volume).await.unwrap();

        assert_eq!(ids(&batch), vec![1]);
        assert!(matches!(batch.failure, Some(Error::InvalidTimestamp { .. })));
    }
}
