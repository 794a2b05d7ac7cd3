mod api;

// The `openstorage.api` package is publicly exported as `alerts`,
// as only its alerts surface is compiled here.
pub mod alerts {
    pub use crate::api::*;
}

/// Metadata is a tonic Interceptor which authorizes each request
/// with a bearer token, if one is configured.
#[derive(Clone, Debug, Default)]
pub struct Metadata {
    authorization: Option<tonic::metadata::AsciiMetadataValue>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bearer_token(self, token: &str) -> tonic::Result<Self> {
        let mut authorization: tonic::metadata::AsciiMetadataValue = format!("Bearer {token}")
            .parse()
            .map_err(|_| tonic::Status::invalid_argument("bearer token is not valid ASCII metadata"))?;
        authorization.set_sensitive(true);

        Ok(Self {
            authorization: Some(authorization),
        })
    }
}

impl tonic::service::Interceptor for Metadata {
    fn call(&mut self, mut request: tonic::Request<()>) -> tonic::Result<tonic::Request<()>> {
        if let Some(authorization) = &self.authorization {
            request
                .metadata_mut()
                .insert("authorization", authorization.clone());
        }
        Ok(request)
    }
}

impl alerts::SdkAlertsEnumerateWithFiltersRequest {
    /// Build a request which is scoped to exactly one resource type.
    pub fn for_resource_type(resource_type: alerts::ResourceType) -> Self {
        Self {
            queries: vec![alerts::SdkAlertsQuery {
                query: Some(alerts::sdk_alerts_query::Query::ResourceTypeQuery(
                    alerts::SdkAlertsResourceTypeQuery {
                        resource_type: resource_type as i32,
                    },
                )),
            }],
        }
    }
}
