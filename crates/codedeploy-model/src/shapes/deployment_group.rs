// ── Deployment groups ──

use super::common::{
    AlarmConfiguration, AutoRollbackConfiguration, AutoScalingGroup, Ec2TagFilter, Ec2TagSet,
    OnPremisesTagSet, Tag, TagFilter, TriggerConfig,
};
use super::enums::{
    ComputePlatform, DeploymentOption, DeploymentReadyAction, DeploymentStatus, DeploymentType,
    GreenFleetProvisioningAction, InstanceAction, OutdatedInstancesStrategy,
};
use super::revision::RevisionLocation;
use crate::scalar::Timestamp;

shape! {
    /// In-place or blue/green, with or without a load balancer.
    pub struct DeploymentStyle {
        value deployment_type: DeploymentType => "deploymentType",
        value deployment_option: DeploymentOption => "deploymentOption",
    }
}

shape! {
    pub struct BlueInstanceTerminationOption {
        value action: InstanceAction => "action",
        copy termination_wait_time_in_minutes: i32 => "terminationWaitTimeInMinutes" [range 0..=2880],
    }
}

shape! {
    pub struct DeploymentReadyOption {
        value action_on_timeout: DeploymentReadyAction => "actionOnTimeout",
        copy wait_time_in_minutes: i32 => "waitTimeInMinutes",
    }
}

shape! {
    pub struct GreenFleetProvisioningOption {
        value action: GreenFleetProvisioningAction => "action",
    }
}

shape! {
    pub struct BlueGreenDeploymentConfiguration {
        /// What happens to the original instances once traffic has moved.
        value terminate_blue_instances_on_deployment_success: BlueInstanceTerminationOption
            => "terminateBlueInstancesOnDeploymentSuccess",
        value deployment_ready_option: DeploymentReadyOption => "deploymentReadyOption",
        value green_fleet_provisioning_option: GreenFleetProvisioningOption
            => "greenFleetProvisioningOption",
    }
}

shape! {
    /// A Classic Load Balancer.
    pub struct ElbInfo {
        string name: String => "name",
    }
}

shape! {
    pub struct TargetGroupInfo {
        string name: String => "name",
    }
}

shape! {
    pub struct TrafficRoute {
        list listener_arns: String => "listenerArns" [items ..=1],
    }
}

shape! {
    /// Two target groups and the listeners that shift traffic between them.
    pub struct TargetGroupPairInfo {
        list target_groups: TargetGroupInfo => "targetGroups" [items ..=2],
        value prod_traffic_route: TrafficRoute => "prodTrafficRoute",
        value test_traffic_route: TrafficRoute => "testTrafficRoute",
    }
}

shape! {
    pub struct LoadBalancerInfo {
        list elb_info_list: ElbInfo => "elbInfoList",
        list target_group_info_list: TargetGroupInfo => "targetGroupInfoList",
        list target_group_pair_info_list: TargetGroupPairInfo => "targetGroupPairInfoList",
    }
}

shape! {
    pub struct EcsService {
        string service_name: String => "serviceName",
        string cluster_name: String => "clusterName",
    }
}

shape! {
    pub struct LastDeploymentInfo {
        string deployment_id: String => "deploymentId",
        value status: DeploymentStatus => "status",
        copy end_time: Timestamp => "endTime",
        copy create_time: Timestamp => "createTime",
    }
}

shape! {
    pub struct DeploymentGroupInfo {
        string application_name: String => "applicationName",
        string deployment_group_id: String => "deploymentGroupId",
        string deployment_group_name: String => "deploymentGroupName",
        string deployment_config_name: String => "deploymentConfigName",
        list ec2_tag_filters: Ec2TagFilter => "ec2TagFilters",
        list on_premises_instance_tag_filters: TagFilter => "onPremisesInstanceTagFilters",
        list auto_scaling_groups: AutoScalingGroup => "autoScalingGroups",
        string service_role_arn: String => "serviceRoleArn",
        value target_revision: RevisionLocation => "targetRevision",
        list trigger_configurations: TriggerConfig => "triggerConfigurations",
        value alarm_configuration: AlarmConfiguration => "alarmConfiguration",
        value auto_rollback_configuration: AutoRollbackConfiguration => "autoRollbackConfiguration",
        value deployment_style: DeploymentStyle => "deploymentStyle",
        value outdated_instances_strategy: OutdatedInstancesStrategy => "outdatedInstancesStrategy",
        value blue_green_deployment_configuration: BlueGreenDeploymentConfiguration
            => "blueGreenDeploymentConfiguration",
        value load_balancer_info: LoadBalancerInfo => "loadBalancerInfo",
        value last_successful_deployment: LastDeploymentInfo => "lastSuccessfulDeployment",
        value last_attempted_deployment: LastDeploymentInfo => "lastAttemptedDeployment",
        value ec2_tag_set: Ec2TagSet => "ec2TagSet",
        value on_premises_tag_set: OnPremisesTagSet => "onPremisesTagSet",
        value compute_platform: ComputePlatform => "computePlatform",
        list ecs_services: EcsService => "ecsServices",
    }
}

// ── Operations ──────────────────────────────────────────────────────

shape! {
    pub struct CreateDeploymentGroupRequest {
        string application_name: String => "applicationName" [required, length 1..=100],
        string deployment_group_name: String => "deploymentGroupName" [required, length 1..=100],
        /// Defaults to `CodeDeployDefault.OneAtATime` when unset.
        string deployment_config_name: String => "deploymentConfigName" [length 1..=100],
        list ec2_tag_filters: Ec2TagFilter => "ec2TagFilters",
        list on_premises_instance_tag_filters: TagFilter => "onPremisesInstanceTagFilters",
        list auto_scaling_groups: String => "autoScalingGroups",
        string service_role_arn: String => "serviceRoleArn" [required],
        list trigger_configurations: TriggerConfig => "triggerConfigurations",
        value alarm_configuration: AlarmConfiguration => "alarmConfiguration",
        value auto_rollback_configuration: AutoRollbackConfiguration => "autoRollbackConfiguration",
        value outdated_instances_strategy: OutdatedInstancesStrategy => "outdatedInstancesStrategy",
        value deployment_style: DeploymentStyle => "deploymentStyle",
        value blue_green_deployment_configuration: BlueGreenDeploymentConfiguration
            => "blueGreenDeploymentConfiguration",
        value load_balancer_info: LoadBalancerInfo => "loadBalancerInfo",
        value ec2_tag_set: Ec2TagSet => "ec2TagSet",
        list ecs_services: EcsService => "ecsServices",
        value on_premises_tag_set: OnPremisesTagSet => "onPremisesTagSet",
        list tags: Tag => "tags",
    }
}

shape! {
    pub struct CreateDeploymentGroupResponse {
        string deployment_group_id: String => "deploymentGroupId",
    }
}

shape! {
    pub struct GetDeploymentGroupRequest {
        string application_name: String => "applicationName" [required, length 1..=100],
        string deployment_group_name: String => "deploymentGroupName" [required, length 1..=100],
    }
}

shape! {
    pub struct GetDeploymentGroupResponse {
        value deployment_group_info: DeploymentGroupInfo => "deploymentGroupInfo",
    }
}

shape! {
    pub struct BatchGetDeploymentGroupsRequest {
        string application_name: String => "applicationName" [required, length 1..=100],
        list deployment_group_names: String => "deploymentGroupNames" [required],
    }
}

shape! {
    pub struct BatchGetDeploymentGroupsResponse {
        list deployment_groups_info: DeploymentGroupInfo => "deploymentGroupsInfo",
        string error_message: String => "errorMessage",
    }
}

shape! {
    /// Every member except the two names is replaced only when set.
    pub struct UpdateDeploymentGroupRequest {
        string application_name: String => "applicationName" [required, length 1..=100],
        string current_deployment_group_name: String => "currentDeploymentGroupName"
            [required, length 1..=100],
        string new_deployment_group_name: String => "newDeploymentGroupName" [length 1..=100],
        string deployment_config_name: String => "deploymentConfigName" [length 1..=100],
        list ec2_tag_filters: Ec2TagFilter => "ec2TagFilters",
        list on_premises_instance_tag_filters: TagFilter => "onPremisesInstanceTagFilters",
        list auto_scaling_groups: String => "autoScalingGroups",
        string service_role_arn: String => "serviceRoleArn",
        list trigger_configurations: TriggerConfig => "triggerConfigurations",
        value alarm_configuration: AlarmConfiguration => "alarmConfiguration",
        value auto_rollback_configuration: AutoRollbackConfiguration => "autoRollbackConfiguration",
        value outdated_instances_strategy: OutdatedInstancesStrategy => "outdatedInstancesStrategy",
        value deployment_style: DeploymentStyle => "deploymentStyle",
        value blue_green_deployment_configuration: BlueGreenDeploymentConfiguration
            => "blueGreenDeploymentConfiguration",
        value load_balancer_info: LoadBalancerInfo => "loadBalancerInfo",
        value ec2_tag_set: Ec2TagSet => "ec2TagSet",
        list ecs_services: EcsService => "ecsServices",
        value on_premises_tag_set: OnPremisesTagSet => "onPremisesTagSet",
    }
}

shape! {
    pub struct UpdateDeploymentGroupResponse {
        /// Auto Scaling lifecycle hooks the service could not remove.
        list hooks_not_cleaned_up: AutoScalingGroup => "hooksNotCleanedUp",
    }
}

shape! {
    pub struct DeleteDeploymentGroupRequest {
        string application_name: String => "applicationName" [required, length 1..=100],
        string deployment_group_name: String => "deploymentGroupName" [required, length 1..=100],
    }
}

shape! {
    pub struct DeleteDeploymentGroupResponse {
        list hooks_not_cleaned_up: AutoScalingGroup => "hooksNotCleanedUp",
    }
}

shape! {
    pub struct ListDeploymentGroupsRequest {
        string application_name: String => "applicationName" [required, length 1..=100],
        string next_token: String => "nextToken",
    }
}

shape! {
    pub struct ListDeploymentGroupsResponse {
        string application_name: String => "applicationName",
        list deployment_groups: String => "deploymentGroups",
        string next_token: String => "nextToken",
    }
}
