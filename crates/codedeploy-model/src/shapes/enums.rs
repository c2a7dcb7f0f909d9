// ── String enums ──
//
// Every vocabulary the service uses. Values outside these lists decode
// into the `Unknown` variant and re-encode unchanged.

string_enum! {
    pub enum ApplicationRevisionSortBy {
        RegisterTime = "registerTime",
        FirstUsedTime = "firstUsedTime",
        LastUsedTime = "lastUsedTime",
    }
}

string_enum! {
    /// Event that triggers an automatic rollback.
    pub enum AutoRollbackEvent {
        DeploymentFailure = "DEPLOYMENT_FAILURE",
        DeploymentStopOnAlarm = "DEPLOYMENT_STOP_ON_ALARM",
        DeploymentStopOnRequest = "DEPLOYMENT_STOP_ON_REQUEST",
    }
}

string_enum! {
    /// Archive format of an S3 revision.
    pub enum BundleType {
        Tar = "tar",
        Tgz = "tgz",
        Zip = "zip",
        Yaml = "YAML",
        Json = "JSON",
    }
}

string_enum! {
    pub enum ComputePlatform {
        Server = "Server",
        Lambda = "Lambda",
        Ecs = "ECS",
    }
}

string_enum! {
    pub enum DeploymentCreator {
        User = "user",
        Autoscaling = "autoscaling",
        CodeDeployRollback = "codeDeployRollback",
        CodeDeploy = "CodeDeploy",
        CloudFormation = "CloudFormation",
        CloudFormationRollback = "CloudFormationRollback",
    }
}

string_enum! {
    pub enum DeploymentOption {
        WithTrafficControl = "WITH_TRAFFIC_CONTROL",
        WithoutTrafficControl = "WITHOUT_TRAFFIC_CONTROL",
    }
}

string_enum! {
    pub enum DeploymentReadyAction {
        ContinueDeployment = "CONTINUE_DEPLOYMENT",
        StopDeployment = "STOP_DEPLOYMENT",
    }
}

string_enum! {
    pub enum DeploymentStatus {
        Created = "Created",
        Queued = "Queued",
        InProgress = "InProgress",
        Baking = "Baking",
        Succeeded = "Succeeded",
        Failed = "Failed",
        Stopped = "Stopped",
        Ready = "Ready",
    }
}

string_enum! {
    /// Discriminator of [`DeploymentTarget`](super::DeploymentTarget).
    pub enum DeploymentTargetType {
        InstanceTarget = "InstanceTarget",
        LambdaTarget = "LambdaTarget",
        EcsTarget = "ECSTarget",
        CloudFormationTarget = "CloudFormationTarget",
    }
}

string_enum! {
    pub enum DeploymentType {
        InPlace = "IN_PLACE",
        BlueGreen = "BLUE_GREEN",
    }
}

string_enum! {
    /// What `ContinueDeployment` stops waiting for.
    pub enum DeploymentWaitType {
        ReadyWait = "READY_WAIT",
        TerminationWait = "TERMINATION_WAIT",
    }
}

string_enum! {
    /// Deployment failure reason reported in `ErrorInformation`.
    pub enum ErrorCode {
        AgentIssue = "AGENT_ISSUE",
        AlarmActive = "ALARM_ACTIVE",
        ApplicationMissing = "APPLICATION_MISSING",
        AutoscalingValidationError = "AUTOSCALING_VALIDATION_ERROR",
        AutoScalingConfiguration = "AUTO_SCALING_CONFIGURATION",
        AutoScalingIamRolePermissions = "AUTO_SCALING_IAM_ROLE_PERMISSIONS",
        CloudformationStackFailure = "CLOUDFORMATION_STACK_FAILURE",
        CodedeployResourceCannotBeFound = "CODEDEPLOY_RESOURCE_CANNOT_BE_FOUND",
        CustomerApplicationUnhealthy = "CUSTOMER_APPLICATION_UNHEALTHY",
        DeploymentGroupMissing = "DEPLOYMENT_GROUP_MISSING",
        EcsUpdateError = "ECS_UPDATE_ERROR",
        ElasticLoadBalancingInvalid = "ELASTIC_LOAD_BALANCING_INVALID",
        ElbInvalidInstance = "ELB_INVALID_INSTANCE",
        HealthConstraints = "HEALTH_CONSTRAINTS",
        HealthConstraintsInvalid = "HEALTH_CONSTRAINTS_INVALID",
        HookExecutionFailure = "HOOK_EXECUTION_FAILURE",
        IamRoleMissing = "IAM_ROLE_MISSING",
        IamRolePermissions = "IAM_ROLE_PERMISSIONS",
        InternalError = "INTERNAL_ERROR",
        InvalidEcsService = "INVALID_ECS_SERVICE",
        InvalidLambdaConfiguration = "INVALID_LAMBDA_CONFIGURATION",
        InvalidLambdaFunction = "INVALID_LAMBDA_FUNCTION",
        InvalidRevision = "INVALID_REVISION",
        ManualStop = "MANUAL_STOP",
        MissingBlueGreenDeploymentConfiguration = "MISSING_BLUE_GREEN_DEPLOYMENT_CONFIGURATION",
        MissingElbInformation = "MISSING_ELB_INFORMATION",
        MissingGithubToken = "MISSING_GITHUB_TOKEN",
        NoEc2Subscription = "NO_EC2_SUBSCRIPTION",
        NoInstances = "NO_INSTANCES",
        OverMaxInstances = "OVER_MAX_INSTANCES",
        ResourceLimitExceeded = "RESOURCE_LIMIT_EXCEEDED",
        RevisionMissing = "REVISION_MISSING",
        Throttled = "THROTTLED",
        Timeout = "TIMEOUT",
    }
}

string_enum! {
    /// What to do with files already present at the target location.
    pub enum FileExistsBehavior {
        Disallow = "DISALLOW",
        Overwrite = "OVERWRITE",
        Retain = "RETAIN",
    }
}

string_enum! {
    pub enum GreenFleetProvisioningAction {
        DiscoverExisting = "DISCOVER_EXISTING",
        CopyAutoScalingGroup = "COPY_AUTO_SCALING_GROUP",
    }
}

string_enum! {
    pub enum InstanceAction {
        Terminate = "TERMINATE",
        KeepAlive = "KEEP_ALIVE",
    }
}

string_enum! {
    pub enum LifecycleErrorCode {
        Success = "Success",
        ScriptMissing = "ScriptMissing",
        ScriptNotExecutable = "ScriptNotExecutable",
        ScriptTimedOut = "ScriptTimedOut",
        ScriptFailed = "ScriptFailed",
        UnknownError = "UnknownError",
    }
}

string_enum! {
    pub enum LifecycleEventStatus {
        Pending = "Pending",
        InProgress = "InProgress",
        Succeeded = "Succeeded",
        Failed = "Failed",
        Skipped = "Skipped",
        /// The service's own "Unknown" status, distinct from an unrecognized value.
        StatusUnknown = "Unknown",
    }
}

string_enum! {
    pub enum ListStateFilterAction {
        Include = "include",
        Exclude = "exclude",
        Ignore = "ignore",
    }
}

string_enum! {
    pub enum MinimumHealthyHostsType {
        HostCount = "HOST_COUNT",
        FleetPercent = "FLEET_PERCENT",
    }
}

string_enum! {
    pub enum OutdatedInstancesStrategy {
        Update = "UPDATE",
        Ignore = "IGNORE",
    }
}

string_enum! {
    pub enum RegistrationStatus {
        Registered = "Registered",
        Deregistered = "Deregistered",
    }
}

string_enum! {
    /// Discriminator of [`RevisionLocation`](super::RevisionLocation).
    pub enum RevisionLocationType {
        S3 = "S3",
        GitHub = "GitHub",
        String = "String",
        AppSpecContent = "AppSpecContent",
    }
}

string_enum! {
    pub enum SortOrder {
        Ascending = "ascending",
        Descending = "descending",
    }
}

string_enum! {
    pub enum StopStatus {
        Pending = "Pending",
        Succeeded = "Succeeded",
    }
}

string_enum! {
    /// Filter keys accepted by `ListDeploymentTargets`.
    pub enum TargetFilterName {
        TargetStatus = "TargetStatus",
        ServerInstanceLabel = "ServerInstanceLabel",
    }
}

string_enum! {
    pub enum TargetLabel {
        Blue = "Blue",
        Green = "Green",
    }
}

string_enum! {
    pub enum TargetStatus {
        Pending = "Pending",
        InProgress = "InProgress",
        Succeeded = "Succeeded",
        Failed = "Failed",
        Skipped = "Skipped",
        StatusUnknown = "Unknown",
        Ready = "Ready",
    }
}

string_enum! {
    pub enum TagFilterType {
        KeyOnly = "KEY_ONLY",
        ValueOnly = "VALUE_ONLY",
        KeyAndValue = "KEY_AND_VALUE",
    }
}

string_enum! {
    pub enum TrafficRoutingType {
        TimeBasedCanary = "TimeBasedCanary",
        TimeBasedLinear = "TimeBasedLinear",
        AllAtOnce = "AllAtOnce",
    }
}

string_enum! {
    pub enum TriggerEventType {
        DeploymentStart = "DeploymentStart",
        DeploymentSuccess = "DeploymentSuccess",
        DeploymentFailure = "DeploymentFailure",
        DeploymentStop = "DeploymentStop",
        DeploymentRollback = "DeploymentRollback",
        DeploymentReady = "DeploymentReady",
        InstanceStart = "InstanceStart",
        InstanceSuccess = "InstanceSuccess",
        InstanceFailure = "InstanceFailure",
        InstanceReady = "InstanceReady",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_string_round_trips() {
        for raw in ["IN_PLACE", "in_place", "CANARY_FLEET", ""] {
            assert_eq!(DeploymentType::from(raw).as_str(), raw);
        }
    }

    #[test]
    fn known_strings_never_land_in_unknown() {
        for raw in ComputePlatform::VALUES {
            assert!(ComputePlatform::from(*raw).is_known(), "{raw}");
        }
        assert_eq!(ComputePlatform::from("ECS"), ComputePlatform::Ecs);
        assert!(!ComputePlatform::from("Fargate").is_known());
    }

    #[test]
    fn service_unknown_status_is_a_known_value() {
        let status = LifecycleEventStatus::from("Unknown");
        assert_eq!(status, LifecycleEventStatus::StatusUnknown);
        assert!(status.is_known());
    }

    #[test]
    fn lenient_parse_folds_case_for_known_values() {
        assert_eq!(
            <DeploymentTargetType as crate::enumeration::StringEnum>::parse_lenient("ecsTarget"),
            DeploymentTargetType::EcsTarget
        );
        assert_eq!(
            <DeploymentTargetType as crate::enumeration::StringEnum>::parse_lenient("QuantumTarget").as_str(),
            "QuantumTarget"
        );
    }

    #[test]
    fn serde_uses_the_raw_string() {
        let json = serde_json::to_string(&BundleType::Yaml).unwrap_or_default();
        assert_eq!(json, "\"YAML\"");
        let back: BundleType = serde_json::from_str("\"rar\"").unwrap_or(BundleType::Zip);
        assert_eq!(back.as_str(), "rar");
    }
}
