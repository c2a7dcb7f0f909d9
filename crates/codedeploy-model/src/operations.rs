// ── Operation catalog ──
//
// One marker type per CodeDeploy action. `REGISTRY` exposes the same list
// at runtime for callers that only know an operation by name.

use crate::shapes::{
    AddTagsToOnPremisesInstancesRequest, AddTagsToOnPremisesInstancesResponse,
    BatchGetApplicationRevisionsRequest, BatchGetApplicationRevisionsResponse,
    BatchGetApplicationsRequest, BatchGetApplicationsResponse, BatchGetDeploymentGroupsRequest,
    BatchGetDeploymentGroupsResponse, BatchGetDeploymentTargetsRequest,
    BatchGetDeploymentTargetsResponse, BatchGetDeploymentsRequest, BatchGetDeploymentsResponse,
    BatchGetOnPremisesInstancesRequest, BatchGetOnPremisesInstancesResponse,
    ContinueDeploymentRequest, ContinueDeploymentResponse, CreateApplicationRequest,
    CreateApplicationResponse, CreateDeploymentConfigRequest, CreateDeploymentConfigResponse,
    CreateDeploymentGroupRequest, CreateDeploymentGroupResponse, CreateDeploymentRequest,
    CreateDeploymentResponse, DeleteApplicationRequest, DeleteApplicationResponse,
    DeleteDeploymentConfigRequest, DeleteDeploymentConfigResponse, DeleteDeploymentGroupRequest,
    DeleteDeploymentGroupResponse, DeleteGitHubAccountTokenRequest,
    DeleteGitHubAccountTokenResponse, DeleteResourcesByExternalIdRequest,
    DeleteResourcesByExternalIdResponse, DeregisterOnPremisesInstanceRequest,
    DeregisterOnPremisesInstanceResponse, GetApplicationRequest, GetApplicationResponse,
    GetApplicationRevisionRequest, GetApplicationRevisionResponse, GetDeploymentConfigRequest,
    GetDeploymentConfigResponse, GetDeploymentGroupRequest, GetDeploymentGroupResponse,
    GetDeploymentRequest, GetDeploymentResponse, GetDeploymentTargetRequest,
    GetDeploymentTargetResponse, GetOnPremisesInstanceRequest, GetOnPremisesInstanceResponse,
    ListApplicationRevisionsRequest, ListApplicationRevisionsResponse, ListApplicationsRequest,
    ListApplicationsResponse, ListDeploymentConfigsRequest, ListDeploymentConfigsResponse,
    ListDeploymentGroupsRequest, ListDeploymentGroupsResponse, ListDeploymentTargetsRequest,
    ListDeploymentTargetsResponse, ListDeploymentsRequest, ListDeploymentsResponse,
    ListGitHubAccountTokenNamesRequest, ListGitHubAccountTokenNamesResponse,
    ListOnPremisesInstancesRequest, ListOnPremisesInstancesResponse, ListTagsForResourceRequest,
    ListTagsForResourceResponse, PutLifecycleEventHookExecutionStatusRequest,
    PutLifecycleEventHookExecutionStatusResponse, RegisterApplicationRevisionRequest,
    RegisterApplicationRevisionResponse, RegisterOnPremisesInstanceRequest,
    RegisterOnPremisesInstanceResponse, RemoveTagsFromOnPremisesInstancesRequest,
    RemoveTagsFromOnPremisesInstancesResponse, StopDeploymentRequest, StopDeploymentResponse,
    TagResourceRequest, TagResourceResponse, UntagResourceRequest, UntagResourceResponse,
    UpdateApplicationRequest, UpdateApplicationResponse, UpdateDeploymentGroupRequest,
    UpdateDeploymentGroupResponse,
};

operations! {
    // Applications
    CreateApplication: CreateApplicationRequest => CreateApplicationResponse;
    GetApplication: GetApplicationRequest => GetApplicationResponse;
    ListApplications: ListApplicationsRequest => ListApplicationsResponse, paginated;
    BatchGetApplications: BatchGetApplicationsRequest => BatchGetApplicationsResponse;
    UpdateApplication: UpdateApplicationRequest => UpdateApplicationResponse;
    DeleteApplication: DeleteApplicationRequest => DeleteApplicationResponse;
    DeleteGitHubAccountToken: DeleteGitHubAccountTokenRequest => DeleteGitHubAccountTokenResponse;
    ListGitHubAccountTokenNames:
        ListGitHubAccountTokenNamesRequest => ListGitHubAccountTokenNamesResponse, paginated;
    DeleteResourcesByExternalId:
        DeleteResourcesByExternalIdRequest => DeleteResourcesByExternalIdResponse;

    // Deployments
    CreateDeployment: CreateDeploymentRequest => CreateDeploymentResponse;
    GetDeployment: GetDeploymentRequest => GetDeploymentResponse;
    BatchGetDeployments: BatchGetDeploymentsRequest => BatchGetDeploymentsResponse;
    StopDeployment: StopDeploymentRequest => StopDeploymentResponse;
    ContinueDeployment: ContinueDeploymentRequest => ContinueDeploymentResponse;
    ListDeployments: ListDeploymentsRequest => ListDeploymentsResponse, paginated;

    // Deployment groups
    CreateDeploymentGroup: CreateDeploymentGroupRequest => CreateDeploymentGroupResponse;
    GetDeploymentGroup: GetDeploymentGroupRequest => GetDeploymentGroupResponse;
    BatchGetDeploymentGroups: BatchGetDeploymentGroupsRequest => BatchGetDeploymentGroupsResponse;
    UpdateDeploymentGroup: UpdateDeploymentGroupRequest => UpdateDeploymentGroupResponse;
    DeleteDeploymentGroup: DeleteDeploymentGroupRequest => DeleteDeploymentGroupResponse;
    ListDeploymentGroups: ListDeploymentGroupsRequest => ListDeploymentGroupsResponse, paginated;

    // Deployment configurations
    CreateDeploymentConfig: CreateDeploymentConfigRequest => CreateDeploymentConfigResponse;
    GetDeploymentConfig: GetDeploymentConfigRequest => GetDeploymentConfigResponse;
    DeleteDeploymentConfig: DeleteDeploymentConfigRequest => DeleteDeploymentConfigResponse;
    ListDeploymentConfigs: ListDeploymentConfigsRequest => ListDeploymentConfigsResponse, paginated;

    // Targets
    ListDeploymentTargets: ListDeploymentTargetsRequest => ListDeploymentTargetsResponse, paginated;
    GetDeploymentTarget: GetDeploymentTargetRequest => GetDeploymentTargetResponse;
    BatchGetDeploymentTargets: BatchGetDeploymentTargetsRequest => BatchGetDeploymentTargetsResponse;

    // Revisions
    ListApplicationRevisions: ListApplicationRevisionsRequest => ListApplicationRevisionsResponse, paginated;
    GetApplicationRevision: GetApplicationRevisionRequest => GetApplicationRevisionResponse;
    RegisterApplicationRevision:
        RegisterApplicationRevisionRequest => RegisterApplicationRevisionResponse;
    BatchGetApplicationRevisions:
        BatchGetApplicationRevisionsRequest => BatchGetApplicationRevisionsResponse;

    // On-premises instances
    RegisterOnPremisesInstance:
        RegisterOnPremisesInstanceRequest => RegisterOnPremisesInstanceResponse;
    DeregisterOnPremisesInstance:
        DeregisterOnPremisesInstanceRequest => DeregisterOnPremisesInstanceResponse;
    GetOnPremisesInstance: GetOnPremisesInstanceRequest => GetOnPremisesInstanceResponse;
    ListOnPremisesInstances:
        ListOnPremisesInstancesRequest => ListOnPremisesInstancesResponse, paginated;
    BatchGetOnPremisesInstances:
        BatchGetOnPremisesInstancesRequest => BatchGetOnPremisesInstancesResponse;
    AddTagsToOnPremisesInstances:
        AddTagsToOnPremisesInstancesRequest => AddTagsToOnPremisesInstancesResponse;
    RemoveTagsFromOnPremisesInstances:
        RemoveTagsFromOnPremisesInstancesRequest => RemoveTagsFromOnPremisesInstancesResponse;

    // Lifecycle hooks
    PutLifecycleEventHookExecutionStatus:
        PutLifecycleEventHookExecutionStatusRequest => PutLifecycleEventHookExecutionStatusResponse;

    // Tagging
    TagResource: TagResourceRequest => TagResourceResponse;
    UntagResource: UntagResourceRequest => UntagResourceResponse;
    ListTagsForResource: ListTagsForResourceRequest => ListTagsForResourceResponse, paginated;
}
