// ── Deployment targets ──
//
// What a deployment acts on: EC2/on-premises instances, Lambda functions,
// ECS services, or CloudFormation stacks. `DeploymentTarget` carries
// exactly one of these, selected by `deploymentTargetType`.

use super::deployment_group::TargetGroupInfo;
use super::enums::{
    DeploymentTargetType, LifecycleErrorCode, LifecycleEventStatus, TargetFilterName, TargetLabel,
    TargetStatus,
};
use crate::scalar::{Double, Timestamp};

shape! {
    /// Script output for a failed lifecycle event.
    pub struct Diagnostics {
        value error_code: LifecycleErrorCode => "errorCode",
        string script_name: String => "scriptName",
        string message: String => "message",
        /// Last lines of the script's log, at most 4 KB.
        string log_tail: String => "logTail",
    }
}

shape! {
    pub struct LifecycleEvent {
        /// `ApplicationStop`, `BeforeInstall`, `AfterInstall`, and so on.
        string lifecycle_event_name: String => "lifecycleEventName",
        value diagnostics: Diagnostics => "diagnostics",
        copy start_time: Timestamp => "startTime",
        copy end_time: Timestamp => "endTime",
        value status: LifecycleEventStatus => "status",
    }
}

shape! {
    pub struct InstanceTarget {
        string deployment_id: String => "deploymentId",
        string target_id: String => "targetId",
        string target_arn: String => "targetArn",
        value status: TargetStatus => "status",
        copy last_updated_at: Timestamp => "lastUpdatedAt",
        list lifecycle_events: LifecycleEvent => "lifecycleEvents",
        /// Blue (original) or green (replacement) in a blue/green deployment.
        value instance_label: TargetLabel => "instanceLabel",
    }
}

shape! {
    pub struct LambdaFunctionInfo {
        string function_name: String => "functionName",
        string function_alias: String => "functionAlias",
        string current_version: String => "currentVersion",
        string target_version: String => "targetVersion",
        /// Share of traffic routed to the target version.
        copy target_version_weight: Double => "targetVersionWeight",
    }
}

shape! {
    pub struct LambdaTarget {
        string deployment_id: String => "deploymentId",
        string target_id: String => "targetId",
        string target_arn: String => "targetArn",
        value status: TargetStatus => "status",
        copy last_updated_at: Timestamp => "lastUpdatedAt",
        list lifecycle_events: LifecycleEvent => "lifecycleEvents",
        value lambda_function_info: LambdaFunctionInfo => "lambdaFunctionInfo",
    }
}

shape! {
    /// One task set of an ECS blue/green deployment.
    pub struct EcsTaskSet {
        /// The service spells this member `identifer`.
        string identifier: String => "identifer",
        copy desired_count: i64 => "desiredCount",
        copy pending_count: i64 => "pendingCount",
        copy running_count: i64 => "runningCount",
        string status: String => "status",
        copy traffic_weight: Double => "trafficWeight",
        value target_group: TargetGroupInfo => "targetGroup",
        value task_set_label: TargetLabel => "taskSetLabel",
    }
}

shape! {
    pub struct EcsTarget {
        string deployment_id: String => "deploymentId",
        string target_id: String => "targetId",
        string target_arn: String => "targetArn",
        copy last_updated_at: Timestamp => "lastUpdatedAt",
        list lifecycle_events: LifecycleEvent => "lifecycleEvents",
        value status: TargetStatus => "status",
        list task_sets_info: EcsTaskSet => "taskSetsInfo",
    }
}

shape! {
    pub struct CloudFormationTarget {
        string deployment_id: String => "deploymentId",
        string target_id: String => "targetId",
        copy last_updated_at: Timestamp => "lastUpdatedAt",
        list lifecycle_events: LifecycleEvent => "lifecycleEvents",
        value status: TargetStatus => "status",
        /// e.g. `AWS::ECS::Service`.
        string resource_type: String => "resourceType",
        copy target_version_weight: Double => "targetVersionWeight",
    }
}

tagged_union! {
    pub enum DeploymentTarget {
        tag deployment_target_type: DeploymentTargetType => "deploymentTargetType";
        InstanceTarget(InstanceTarget) => instance_target = "instanceTarget",
        LambdaTarget(LambdaTarget) => lambda_target = "lambdaTarget",
        EcsTarget(EcsTarget) => ecs_target = "ecsTarget",
        CloudFormationTarget(CloudFormationTarget) => cloud_formation_target = "cloudFormationTarget",
    }
}

// ── Operations ──────────────────────────────────────────────────────

shape! {
    pub struct ListDeploymentTargetsRequest {
        string deployment_id: String => "deploymentId",
        string next_token: String => "nextToken",
        /// Keyed by [`TargetFilterName`] wire value; each key may appear once.
        map target_filters: Vec<String> => "targetFilters",
    }
}

impl ListDeploymentTargetsRequestBuilder {
    /// Typed form of `target_filters`.
    pub fn target_filter(
        self,
        name: TargetFilterName,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, crate::error::ModelError> {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        self.target_filters(name.as_str(), values)
    }
}

shape! {
    pub struct ListDeploymentTargetsResponse {
        list target_ids: String => "targetIds",
        string next_token: String => "nextToken",
    }
}

shape! {
    pub struct GetDeploymentTargetRequest {
        string deployment_id: String => "deploymentId",
        string target_id: String => "targetId",
    }
}

shape! {
    pub struct GetDeploymentTargetResponse {
        value deployment_target: DeploymentTarget => "deploymentTarget",
    }
}

shape! {
    pub struct BatchGetDeploymentTargetsRequest {
        string deployment_id: String => "deploymentId",
        list target_ids: String => "targetIds" [items ..=25],
    }
}

shape! {
    pub struct BatchGetDeploymentTargetsResponse {
        list deployment_targets: DeploymentTarget => "deploymentTargets",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::error::ModelError;

    fn ecs() -> EcsTarget {
        EcsTarget::builder()
            .deployment_id("d-1")
            .target_id("cluster:service")
            .status(TargetStatus::InProgress)
            .task_sets_info([EcsTaskSet::builder()
                .identifier("ecs-svc/1")
                .traffic_weight(100.0)
                .task_set_label(TargetLabel::Blue)])
            .build()
    }

    #[test]
    fn ecs_variant_hides_other_payloads() {
        let target = DeploymentTarget::from(ecs());
        assert_eq!(target.deployment_target_type(), DeploymentTargetType::EcsTarget);
        assert!(target.ecs_target().is_some());
        assert!(target.instance_target().is_none());
        assert!(target.lambda_target().is_none());
        assert!(target.cloud_formation_target().is_none());
    }

    #[test]
    fn tag_is_matched_without_regard_to_case() {
        let target: DeploymentTarget = serde_json::from_value(json!({
            "deploymentTargetType": "ecsTarget",
            "ecsTarget": {"deploymentId": "d-1", "targetId": "cluster:service"}
        }))
        .unwrap();
        assert_eq!(target.deployment_target_type(), DeploymentTargetType::EcsTarget);
        assert!(target.instance_target().is_none());
        assert!(target.lambda_target().is_none());
        assert!(target.cloud_formation_target().is_none());

        let encoded = serde_json::to_value(&target).unwrap();
        assert_eq!(encoded["deploymentTargetType"], json!("ECSTarget"));
    }

    #[test]
    fn misspelled_task_set_identifier_is_kept() {
        let json = serde_json::to_value(ecs()).unwrap();
        assert_eq!(json["taskSetsInfo"][0]["identifer"], json!("ecs-svc/1"));
        assert_eq!(json["taskSetsInfo"][0]["trafficWeight"], json!(100.0));
    }

    #[test]
    fn unknown_tag_round_trips_whole_object() {
        let raw = json!({
            "deploymentTargetType": "EdgeTarget",
            "edgeTarget": {"deviceId": "dev-9", "weight": 0.25},
            "region": "us-east-1"
        });
        let target: DeploymentTarget = serde_json::from_value(raw.clone()).unwrap();
        assert!(target.is_unknown());
        assert_eq!(target.deployment_target_type().as_str(), "EdgeTarget");
        assert_eq!(serde_json::to_value(&target).unwrap(), raw);
    }

    #[test]
    fn unknown_tag_renders_strings_unquoted() {
        let target: DeploymentTarget = serde_json::from_value(json!({
            "deploymentTargetType": "EdgeTarget",
            "edgeTarget": {"deviceId": "dev-9"},
            "region": "us-east-1"
        }))
        .unwrap();
        assert_eq!(
            target.to_string(),
            r#"{deploymentTargetType: EdgeTarget,edgeTarget: {"deviceId":"dev-9"},region: us-east-1}"#
        );
    }

    #[test]
    fn duplicate_target_filter_is_rejected() {
        let builder = ListDeploymentTargetsRequest::builder()
            .deployment_id("d-1")
            .target_filter(TargetFilterName::TargetStatus, ["Failed"])
            .unwrap();

        let err = builder
            .clone()
            .target_filter(TargetFilterName::TargetStatus, ["Succeeded"])
            .unwrap_err();
        assert!(matches!(err, ModelError::DuplicateKey { ref key } if key == "TargetStatus"));

        let request = builder
            .target_filter(TargetFilterName::ServerInstanceLabel, ["Blue"])
            .unwrap()
            .build();
        let filters = request.target_filters().unwrap();
        assert_eq!(filters.get("TargetStatus").unwrap(), &vec!["Failed".to_owned()]);
        assert_eq!(
            serde_json::to_value(&request).unwrap()["targetFilters"],
            json!({"ServerInstanceLabel": ["Blue"], "TargetStatus": ["Failed"]})
        );
    }

    #[test]
    fn target_renders_nested_records() {
        let target = DeploymentTarget::from(
            InstanceTarget::builder()
                .target_id("i-0abc")
                .status(TargetStatus::Succeeded)
                .build(),
        );
        assert_eq!(
            target.to_string(),
            "{deploymentTargetType: InstanceTarget,instanceTarget: {targetId: i-0abc,status: Succeeded}}"
        );
    }
}
