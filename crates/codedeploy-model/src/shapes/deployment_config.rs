// ── Deployment configurations ──

use super::enums::{ComputePlatform, MinimumHealthyHostsType, TrafficRoutingType};
use crate::scalar::Timestamp;

shape! {
    /// Lower bound on healthy instances while a deployment runs.
    pub struct MinimumHealthyHosts {
        /// Either an absolute count or a fleet percentage.
        value kind: MinimumHealthyHostsType => "type",
        copy value: i32 => "value",
    }
}

shape! {
    pub struct TimeBasedCanary {
        copy canary_percentage: i32 => "canaryPercentage" [range 0..=100],
        copy canary_interval: i32 => "canaryInterval",
    }
}

shape! {
    pub struct TimeBasedLinear {
        copy linear_percentage: i32 => "linearPercentage" [range 0..=100],
        copy linear_interval: i32 => "linearInterval",
    }
}

shape! {
    /// How traffic shifts during a Lambda or ECS deployment.
    pub struct TrafficRoutingConfig {
        value routing_type: TrafficRoutingType => "type",
        value time_based_canary: TimeBasedCanary => "timeBasedCanary",
        value time_based_linear: TimeBasedLinear => "timeBasedLinear",
    }
}

shape! {
    pub struct DeploymentConfigInfo {
        string deployment_config_id: String => "deploymentConfigId",
        string deployment_config_name: String => "deploymentConfigName",
        value minimum_healthy_hosts: MinimumHealthyHosts => "minimumHealthyHosts",
        copy create_time: Timestamp => "createTime",
        value compute_platform: ComputePlatform => "computePlatform",
        value traffic_routing_config: TrafficRoutingConfig => "trafficRoutingConfig",
    }
}

// ── Operations ──────────────────────────────────────────────────────

shape! {
    pub struct CreateDeploymentConfigRequest {
        string deployment_config_name: String => "deploymentConfigName" [required, length 1..=100],
        value minimum_healthy_hosts: MinimumHealthyHosts => "minimumHealthyHosts",
        value traffic_routing_config: TrafficRoutingConfig => "trafficRoutingConfig",
        value compute_platform: ComputePlatform => "computePlatform",
    }
}

shape! {
    pub struct CreateDeploymentConfigResponse {
        string deployment_config_id: String => "deploymentConfigId",
    }
}

shape! {
    pub struct GetDeploymentConfigRequest {
        string deployment_config_name: String => "deploymentConfigName" [required, length 1..=100],
    }
}

shape! {
    pub struct GetDeploymentConfigResponse {
        value deployment_config_info: DeploymentConfigInfo => "deploymentConfigInfo",
    }
}

shape! {
    /// Only custom configurations can be deleted, and only when unused.
    pub struct DeleteDeploymentConfigRequest {
        string deployment_config_name: String => "deploymentConfigName" [required, length 1..=100],
    }
}

shape! {
    pub struct DeleteDeploymentConfigResponse {}
}

shape! {
    pub struct ListDeploymentConfigsRequest {
        string next_token: String => "nextToken",
    }
}

shape! {
    pub struct ListDeploymentConfigsResponse {
        list deployment_configs_list: String => "deploymentConfigsList",
        string next_token: String => "nextToken",
    }
}
