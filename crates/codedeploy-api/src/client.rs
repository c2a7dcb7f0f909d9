// Async client for the CodeDeploy JSON 1.1 API.
//
// Every call is a POST of the encoded input shape to the service endpoint.
// Typed calls go through `send::<O>()`; `send_raw()` forwards an already
// encoded body for callers that only know the operation by name.

use std::collections::HashSet;
use std::sync::Arc;

use codedeploy_model::operations::{
    BatchGetDeploymentTargets, ContinueDeployment, CreateDeployment, GetApplication, GetDeployment,
    GetDeploymentGroup, GetDeploymentTarget, ListApplications, ListDeploymentGroups,
    ListDeploymentTargets, ListDeployments, StopDeployment,
};
use codedeploy_model::{
    ApplicationInfo, BatchGetDeploymentTargetsRequest, ContinueDeploymentRequest,
    CreateDeploymentRequest, DeploymentGroupInfo, DeploymentInfo, DeploymentTarget,
    DeploymentWaitType, GetApplicationRequest, GetDeploymentGroupRequest, GetDeploymentRequest,
    GetDeploymentTargetRequest, ListApplicationsRequest, ListDeploymentGroupsRequest,
    ListDeploymentTargetsRequest, ListDeploymentsRequest, ModelError, Operation, Paginated,
    StopDeploymentRequest, StopDeploymentResponse, Validate, ValidationMode, codec,
};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, warn};
use url::Url;

use crate::Error;
use crate::protocol;
use crate::signer::{RequestSigner, SignableRequest, Unsigned};
use crate::transport::TransportConfig;

// ── Configuration ───────────────────────────────────────────────────

/// Where and how to reach the service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub region: Option<String>,
    pub transport: TransportConfig,
    pub validation: ValidationMode,
}

impl ClientConfig {
    /// The public regional endpoint, `https://codedeploy.<region>.amazonaws.com/`.
    pub fn for_region(region: &str) -> Result<Self, Error> {
        let endpoint = Url::parse(&format!("https://codedeploy.{region}.amazonaws.com/"))?;
        Ok(Self {
            endpoint,
            region: Some(region.to_owned()),
            transport: TransportConfig::default(),
            validation: ValidationMode::default(),
        })
    }

    /// An explicit endpoint, e.g. a local emulator.
    pub fn for_endpoint(endpoint: &str) -> Result<Self, Error> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            region: None,
            transport: TransportConfig::default(),
            validation: ValidationMode::default(),
        })
    }
}

// ── Client ──────────────────────────────────────────────────────────

/// Async client for AWS CodeDeploy.
///
/// Cheap to share behind a reference; calls are independent of each other.
#[derive(Debug, Clone)]
pub struct CodeDeployClient {
    http: reqwest::Client,
    endpoint: Url,
    signer: Arc<dyn RequestSigner>,
    validation: ValidationMode,
}

impl CodeDeployClient {
    // ── Constructors ────────────────────────────────────────────────

    /// Build an unsigned client from a [`ClientConfig`].
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let http = config.transport.build_client()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            signer: Arc::new(Unsigned),
            validation: config.validation,
        })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(endpoint: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            endpoint: Url::parse(endpoint)?,
            signer: Arc::new(Unsigned),
            validation: ValidationMode::default(),
        })
    }

    pub fn with_signer(mut self, signer: impl RequestSigner + 'static) -> Self {
        self.signer = Arc::new(signer);
        self
    }

    pub fn with_validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    // ── Generic calls ───────────────────────────────────────────────

    /// Invoke `O` with a typed input and decode its typed output.
    pub async fn send<O: Operation>(&self, input: &O::Input) -> Result<O::Output, Error> {
        self.check(O::NAME, input)?;
        let body = codec::to_payload(input)?;
        let raw = self.execute(O::NAME, body).await?;
        Ok(codec::from_payload(&raw)?)
    }

    /// Invoke an operation by name with a pre-encoded JSON body.
    ///
    /// The name is matched case-insensitively against the registry. The
    /// body is sent unchanged and the raw response body is returned.
    pub async fn send_raw(&self, operation: &str, body: Vec<u8>) -> Result<Vec<u8>, Error> {
        let info = codedeploy_model::operation::find(operation)?;
        self.execute(info.name, body).await
    }

    /// Drain every page of a paginated operation.
    ///
    /// Stops when the service returns no token, an empty token, or a token
    /// it already returned once.
    pub async fn paginate_all<O, T, F>(&self, input: &O::Input, mut extract: F) -> Result<Vec<T>, Error>
    where
        O: Paginated,
        F: FnMut(O::Output) -> Vec<T>,
    {
        let mut all = Vec::new();
        let mut request = input.clone();
        let mut seen: HashSet<String> = HashSet::new();

        loop {
            let page = self.send::<O>(&request).await?;
            let next = O::next_token(&page)
                .filter(|token| !token.is_empty())
                .map(str::to_owned);
            all.extend(extract(page));

            match next {
                Some(token) if seen.insert(token.clone()) => {
                    request = O::with_next_token(&request, &token);
                }
                Some(token) => {
                    warn!(operation = O::NAME, %token, "pagination token repeated; stopping");
                    break;
                }
                None => break,
            }
        }

        Ok(all)
    }

    // ── Applications ────────────────────────────────────────────────

    pub async fn list_applications(&self) -> Result<Vec<String>, Error> {
        self.paginate_all::<ListApplications, _, _>(
            &ListApplicationsRequest::default(),
            |page| page.applications().map(<[String]>::to_vec).unwrap_or_default(),
        )
        .await
    }

    pub async fn get_application(&self, name: &str) -> Result<Option<ApplicationInfo>, Error> {
        let request = GetApplicationRequest::builder().application_name(name).build();
        let response = self.send::<GetApplication>(&request).await?;
        Ok(response.application().cloned())
    }

    // ── Deployment groups ───────────────────────────────────────────

    pub async fn list_deployment_groups(&self, application: &str) -> Result<Vec<String>, Error> {
        let request = ListDeploymentGroupsRequest::builder()
            .application_name(application)
            .build();
        self.paginate_all::<ListDeploymentGroups, _, _>(&request, |page| {
            page.deployment_groups()
                .map(<[String]>::to_vec)
                .unwrap_or_default()
        })
        .await
    }

    pub async fn get_deployment_group(
        &self,
        application: &str,
        group: &str,
    ) -> Result<Option<DeploymentGroupInfo>, Error> {
        let request = GetDeploymentGroupRequest::builder()
            .application_name(application)
            .deployment_group_name(group)
            .build();
        let response = self.send::<GetDeploymentGroup>(&request).await?;
        Ok(response.deployment_group_info().cloned())
    }

    // ── Deployments ─────────────────────────────────────────────────

    /// Start a deployment and return its id.
    pub async fn create_deployment(
        &self,
        request: &CreateDeploymentRequest,
    ) -> Result<Option<String>, Error> {
        let response = self.send::<CreateDeployment>(request).await?;
        Ok(response.deployment_id().map(str::to_owned))
    }

    pub async fn get_deployment(&self, deployment_id: &str) -> Result<Option<DeploymentInfo>, Error> {
        let request = GetDeploymentRequest::builder()
            .deployment_id(deployment_id)
            .build();
        let response = self.send::<GetDeployment>(&request).await?;
        Ok(response.deployment_info().cloned())
    }

    pub async fn stop_deployment(
        &self,
        deployment_id: &str,
        auto_rollback: Option<bool>,
    ) -> Result<StopDeploymentResponse, Error> {
        let request = StopDeploymentRequest::builder()
            .deployment_id(deployment_id)
            .set_auto_rollback_enabled(auto_rollback)
            .build();
        self.send::<StopDeployment>(&request).await
    }

    /// Let a blue/green deployment past the step named by `wait_type`.
    pub async fn continue_deployment(
        &self,
        deployment_id: &str,
        wait_type: DeploymentWaitType,
    ) -> Result<(), Error> {
        let request = ContinueDeploymentRequest::builder()
            .deployment_id(deployment_id)
            .deployment_wait_type(wait_type)
            .build();
        self.send::<ContinueDeployment>(&request).await?;
        Ok(())
    }

    /// Every deployment id matching `request`, across all pages.
    pub async fn list_deployments(&self, request: &ListDeploymentsRequest) -> Result<Vec<String>, Error> {
        self.paginate_all::<ListDeployments, _, _>(request, |page| {
            page.deployments().map(<[String]>::to_vec).unwrap_or_default()
        })
        .await
    }

    // ── Targets ─────────────────────────────────────────────────────

    pub async fn list_deployment_targets(&self, deployment_id: &str) -> Result<Vec<String>, Error> {
        let request = ListDeploymentTargetsRequest::builder()
            .deployment_id(deployment_id)
            .build();
        self.paginate_all::<ListDeploymentTargets, _, _>(&request, |page| {
            page.target_ids().map(<[String]>::to_vec).unwrap_or_default()
        })
        .await
    }

    pub async fn get_deployment_target(
        &self,
        deployment_id: &str,
        target_id: &str,
    ) -> Result<Option<DeploymentTarget>, Error> {
        let request = GetDeploymentTargetRequest::builder()
            .deployment_id(deployment_id)
            .target_id(target_id)
            .build();
        let response = self.send::<GetDeploymentTarget>(&request).await?;
        Ok(response.deployment_target().cloned())
    }

    /// Fetch targets in batches of the service maximum (25 per call).
    pub async fn batch_get_deployment_targets(
        &self,
        deployment_id: &str,
        target_ids: &[String],
    ) -> Result<Vec<DeploymentTarget>, Error> {
        let mut targets = Vec::with_capacity(target_ids.len());
        for chunk in target_ids.chunks(25) {
            let request = BatchGetDeploymentTargetsRequest::builder()
                .deployment_id(deployment_id)
                .target_ids(chunk.iter().cloned())
                .build();
            let response = self.send::<BatchGetDeploymentTargets>(&request).await?;
            if let Some(batch) = response.deployment_targets() {
                targets.extend_from_slice(batch);
            }
        }
        Ok(targets)
    }

    // ── Internals ───────────────────────────────────────────────────

    fn check<T: Validate>(&self, operation: &str, input: &T) -> Result<(), Error> {
        match self.validation {
            ValidationMode::Off => Ok(()),
            ValidationMode::Warn => {
                if let Err(violations) = input.validate() {
                    warn!(operation, %violations, "request violates documented constraints; sending anyway");
                }
                Ok(())
            }
            ValidationMode::Strict => input.validate().map_err(Error::Validation),
        }
    }

    async fn execute(&self, operation: &str, body: Vec<u8>) -> Result<Vec<u8>, Error> {
        let target = HeaderValue::from_str(&protocol::target_header(operation))
            .map_err(|_| ModelError::UnknownOperation(operation.to_owned()))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(protocol::CONTENT_TYPE));
        headers.insert(protocol::TARGET_HEADER, target);

        self.signer.sign(SignableRequest {
            method: "POST",
            url: &self.endpoint,
            headers: &mut headers,
            body: &body,
        })?;

        debug!(operation, bytes = body.len(), "POST {}", self.endpoint);

        let resp = self
            .http
            .post(self.endpoint.clone())
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let resp_headers = resp.headers().clone();
        let bytes = resp.bytes().await?;
        debug!(operation, %status, bytes = bytes.len(), "response");

        if status.is_success() {
            Ok(bytes.to_vec())
        } else {
            Err(protocol::parse_error(
                status,
                &resp_headers,
                &String::from_utf8_lossy(&bytes),
            ))
        }
    }
}
