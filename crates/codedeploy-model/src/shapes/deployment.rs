// ── Deployments ──

use super::common::{
    AutoRollbackConfiguration, Ec2TagFilter, Ec2TagSet, ErrorInformation, TimeRange,
};
use super::deployment_group::{BlueGreenDeploymentConfiguration, DeploymentStyle, LoadBalancerInfo};
use super::enums::{
    ComputePlatform, DeploymentCreator, DeploymentStatus, DeploymentWaitType, FileExistsBehavior,
    StopStatus,
};
use super::revision::RevisionLocation;
use crate::scalar::Timestamp;

shape! {
    /// Instance counts per state. The service capitalizes these member names.
    pub struct DeploymentOverview {
        copy pending: i64 => "Pending",
        copy in_progress: i64 => "InProgress",
        copy succeeded: i64 => "Succeeded",
        copy failed: i64 => "Failed",
        copy skipped: i64 => "Skipped",
        copy ready: i64 => "Ready",
    }
}

shape! {
    pub struct RollbackInfo {
        string rollback_deployment_id: String => "rollbackDeploymentId",
        string rollback_triggering_deployment_id: String => "rollbackTriggeringDeploymentId",
        string rollback_message: String => "rollbackMessage",
    }
}

shape! {
    /// Instances a blue/green deployment replaces.
    pub struct TargetInstances {
        list tag_filters: Ec2TagFilter => "tagFilters",
        list auto_scaling_groups: String => "autoScalingGroups",
        value ec2_tag_set: Ec2TagSet => "ec2TagSet",
    }
}

shape! {
    pub struct DeploymentInfo {
        string application_name: String => "applicationName",
        string deployment_group_name: String => "deploymentGroupName",
        string deployment_config_name: String => "deploymentConfigName",
        string deployment_id: String => "deploymentId",
        value previous_revision: RevisionLocation => "previousRevision",
        value revision: RevisionLocation => "revision",
        value status: DeploymentStatus => "status",
        value error_information: ErrorInformation => "errorInformation",
        copy create_time: Timestamp => "createTime",
        copy start_time: Timestamp => "startTime",
        copy complete_time: Timestamp => "completeTime",
        value deployment_overview: DeploymentOverview => "deploymentOverview",
        string description: String => "description",
        value creator: DeploymentCreator => "creator",
        copy ignore_application_stop_failures: bool => "ignoreApplicationStopFailures",
        value auto_rollback_configuration: AutoRollbackConfiguration => "autoRollbackConfiguration",
        copy update_outdated_instances_only: bool => "updateOutdatedInstancesOnly",
        value rollback_info: RollbackInfo => "rollbackInfo",
        value deployment_style: DeploymentStyle => "deploymentStyle",
        value target_instances: TargetInstances => "targetInstances",
        copy instance_termination_wait_time_started: bool => "instanceTerminationWaitTimeStarted",
        value blue_green_deployment_configuration: BlueGreenDeploymentConfiguration
            => "blueGreenDeploymentConfiguration",
        value load_balancer_info: LoadBalancerInfo => "loadBalancerInfo",
        string additional_deployment_status_info: String => "additionalDeploymentStatusInfo",
        value file_exists_behavior: FileExistsBehavior => "fileExistsBehavior",
        list deployment_status_messages: String => "deploymentStatusMessages",
        value compute_platform: ComputePlatform => "computePlatform",
        /// Set when the deployment was started by an external resource.
        string external_id: String => "externalId",
    }
}

// ── Operations ──────────────────────────────────────────────────────

shape! {
    pub struct CreateDeploymentRequest {
        string application_name: String => "applicationName" [required, length 1..=100],
        string deployment_group_name: String => "deploymentGroupName" [length 1..=100],
        value revision: RevisionLocation => "revision",
        string deployment_config_name: String => "deploymentConfigName" [length 1..=100],
        string description: String => "description",
        /// Keep going when the `ApplicationStop` hook fails on an instance.
        copy ignore_application_stop_failures: bool => "ignoreApplicationStopFailures",
        value target_instances: TargetInstances => "targetInstances",
        value auto_rollback_configuration: AutoRollbackConfiguration => "autoRollbackConfiguration",
        copy update_outdated_instances_only: bool => "updateOutdatedInstancesOnly",
        value file_exists_behavior: FileExistsBehavior => "fileExistsBehavior",
    }
}

shape! {
    pub struct CreateDeploymentResponse {
        string deployment_id: String => "deploymentId",
    }
}

shape! {
    /// Start traffic rerouting (`READY_WAIT`) or terminate the original
    /// instances early (`TERMINATION_WAIT`) in a blue/green deployment.
    pub struct ContinueDeploymentRequest {
        string deployment_id: String => "deploymentId",
        value deployment_wait_type: DeploymentWaitType => "deploymentWaitType",
    }
}

shape! {
    pub struct ContinueDeploymentResponse {}
}

shape! {
    pub struct GetDeploymentRequest {
        string deployment_id: String => "deploymentId" [required],
    }
}

shape! {
    pub struct GetDeploymentResponse {
        value deployment_info: DeploymentInfo => "deploymentInfo",
    }
}

shape! {
    pub struct BatchGetDeploymentsRequest {
        list deployment_ids: String => "deploymentIds" [required, items ..=25],
    }
}

shape! {
    pub struct BatchGetDeploymentsResponse {
        list deployments_info: DeploymentInfo => "deploymentsInfo",
    }
}

shape! {
    pub struct StopDeploymentRequest {
        string deployment_id: String => "deploymentId" [required],
        /// Roll back to the last known good revision after stopping.
        copy auto_rollback_enabled: bool => "autoRollbackEnabled",
    }
}

shape! {
    pub struct StopDeploymentResponse {
        value status: StopStatus => "status",
        string status_message: String => "statusMessage",
    }
}

shape! {
    pub struct ListDeploymentsRequest {
        string application_name: String => "applicationName" [length 1..=100],
        string deployment_group_name: String => "deploymentGroupName" [length 1..=100],
        string external_id: String => "externalId",
        list include_only_statuses: DeploymentStatus => "includeOnlyStatuses",
        value create_time_range: TimeRange => "createTimeRange",
        string next_token: String => "nextToken",
    }
}

shape! {
    pub struct ListDeploymentsResponse {
        list deployments: String => "deployments",
        string next_token: String => "nextToken",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::shapes::S3Location;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn request() -> CreateDeploymentRequest {
        CreateDeploymentRequest::builder()
            .application_name("web")
            .deployment_group_name("prod")
            .revision(
                S3Location::builder()
                    .bucket("artifacts")
                    .key("web.zip")
                    .bundle_type("zip")
                    .build(),
            )
            .ignore_application_stop_failures(false)
            .build()
    }

    #[test]
    fn builder_record_round_trips() {
        let original = request();
        let bytes = crate::codec::to_payload(&original).unwrap();
        let decoded: CreateDeploymentRequest = crate::codec::from_payload(&bytes).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn unset_members_have_no_key() {
        let value = crate::codec::to_value(&request()).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "applicationName",
                "deploymentGroupName",
                "ignoreApplicationStopFailures",
                "revision"
            ]
        );
    }

    #[test]
    fn equal_content_means_equal_hash() {
        let a = request();
        let b = request();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = a.to_builder().description("hotfix").build();
        assert_ne!(a, c);
    }

    #[test]
    fn deployment_info_decodes_timestamps_and_overview() {
        let info: DeploymentInfo = serde_json::from_value(json!({
            "deploymentId": "d-ABC123",
            "status": "Succeeded",
            "createTime": 1_700_000_000.5,
            "deploymentOverview": {"Succeeded": 3, "Failed": 0},
            "creator": "user"
        }))
        .unwrap();
        assert_eq!(info.status(), Some(&DeploymentStatus::Succeeded));
        assert_eq!(info.create_time().unwrap().epoch_millis(), 1_700_000_000_500);
        let overview = info.deployment_overview().unwrap();
        assert_eq!(overview.succeeded(), Some(3));
        assert_eq!(overview.failed(), Some(0));
        assert_eq!(overview.pending(), None);
    }

    #[test]
    fn batch_get_limits_are_advisory() {
        use crate::validate::Validate;

        let ids: Vec<String> = (0..30).map(|i| format!("d-{i}")).collect();
        let request = BatchGetDeploymentsRequest::builder()
            .deployment_ids(ids)
            .build();
        assert_eq!(request.deployment_ids().unwrap().len(), 30);
        assert!(request.validate().unwrap_err().has_path("deploymentIds"));
        assert!(
            BatchGetDeploymentsRequest::default()
                .validate()
                .unwrap_err()
                .has_path("deploymentIds")
        );
    }
}
