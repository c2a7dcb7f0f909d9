// ── On-premises instances ──
//
// Servers outside EC2 registered with CodeDeploy under an IAM identity,
// selected by deployment groups through their tags.

use super::common::{Tag, TagFilter};
use super::enums::RegistrationStatus;
use crate::scalar::Timestamp;

shape! {
    pub struct InstanceInfo {
        string instance_name: String => "instanceName",
        string iam_session_arn: String => "iamSessionArn",
        string iam_user_arn: String => "iamUserArn",
        string instance_arn: String => "instanceArn",
        copy register_time: Timestamp => "registerTime",
        /// Set once the instance has been deregistered.
        copy deregister_time: Timestamp => "deregisterTime",
        list tags: Tag => "tags",
    }
}

// ── Operations ──────────────────────────────────────────────────────

shape! {
    /// Exactly one of `iamSessionArn` and `iamUserArn` is expected.
    pub struct RegisterOnPremisesInstanceRequest {
        string instance_name: String => "instanceName" [required],
        string iam_session_arn: String => "iamSessionArn",
        string iam_user_arn: String => "iamUserArn",
    }
}

shape! {
    pub struct RegisterOnPremisesInstanceResponse {}
}

shape! {
    pub struct DeregisterOnPremisesInstanceRequest {
        string instance_name: String => "instanceName" [required],
    }
}

shape! {
    pub struct DeregisterOnPremisesInstanceResponse {}
}

shape! {
    pub struct GetOnPremisesInstanceRequest {
        string instance_name: String => "instanceName" [required],
    }
}

shape! {
    pub struct GetOnPremisesInstanceResponse {
        value instance_info: InstanceInfo => "instanceInfo",
    }
}

shape! {
    pub struct ListOnPremisesInstancesRequest {
        value registration_status: RegistrationStatus => "registrationStatus",
        list tag_filters: TagFilter => "tagFilters",
        string next_token: String => "nextToken",
    }
}

shape! {
    pub struct ListOnPremisesInstancesResponse {
        list instance_names: String => "instanceNames",
        string next_token: String => "nextToken",
    }
}

shape! {
    pub struct BatchGetOnPremisesInstancesRequest {
        list instance_names: String => "instanceNames" [required, items ..=100],
    }
}

shape! {
    pub struct BatchGetOnPremisesInstancesResponse {
        list instance_infos: InstanceInfo => "instanceInfos",
    }
}

shape! {
    pub struct AddTagsToOnPremisesInstancesRequest {
        list tags: Tag => "tags" [required],
        list instance_names: String => "instanceNames" [required],
    }
}

shape! {
    pub struct AddTagsToOnPremisesInstancesResponse {}
}

shape! {
    pub struct RemoveTagsFromOnPremisesInstancesRequest {
        list tags: Tag => "tags" [required],
        list instance_names: String => "instanceNames" [required],
    }
}

shape! {
    pub struct RemoveTagsFromOnPremisesInstancesResponse {}
}
