// ── Applications ──

use super::common::Tag;
use super::enums::{ComputePlatform, LifecycleEventStatus};
use crate::scalar::Timestamp;

shape! {
    pub struct ApplicationInfo {
        string application_id: String => "applicationId",
        string application_name: String => "applicationName",
        copy create_time: Timestamp => "createTime",
        /// True if the user has authenticated with GitHub for this application.
        copy linked_to_git_hub: bool => "linkedToGitHub",
        string git_hub_account_name: String => "gitHubAccountName",
        value compute_platform: ComputePlatform => "computePlatform",
    }
}

shape! {
    pub struct CreateApplicationRequest {
        string application_name: String => "applicationName" [required, length 1..=100],
        value compute_platform: ComputePlatform => "computePlatform",
        list tags: Tag => "tags",
    }
}

shape! {
    pub struct CreateApplicationResponse {
        string application_id: String => "applicationId",
    }
}

shape! {
    pub struct GetApplicationRequest {
        string application_name: String => "applicationName" [required, length 1..=100],
    }
}

shape! {
    pub struct GetApplicationResponse {
        value application: ApplicationInfo => "application",
    }
}

shape! {
    pub struct ListApplicationsRequest {
        string next_token: String => "nextToken",
    }
}

shape! {
    pub struct ListApplicationsResponse {
        list applications: String => "applications",
        string next_token: String => "nextToken",
    }
}

shape! {
    pub struct BatchGetApplicationsRequest {
        list application_names: String => "applicationNames" [required, items ..=100],
    }
}

shape! {
    pub struct BatchGetApplicationsResponse {
        list applications_info: ApplicationInfo => "applicationsInfo",
    }
}

shape! {
    pub struct UpdateApplicationRequest {
        string application_name: String => "applicationName" [length 1..=100],
        string new_application_name: String => "newApplicationName" [length 1..=100],
    }
}

shape! {
    pub struct UpdateApplicationResponse {}
}

shape! {
    pub struct DeleteApplicationRequest {
        string application_name: String => "applicationName" [required, length 1..=100],
    }
}

shape! {
    pub struct DeleteApplicationResponse {}
}

shape! {
    /// Report the result of a validation hook (Lambda and ECS deployments).
    pub struct PutLifecycleEventHookExecutionStatusRequest {
        string deployment_id: String => "deploymentId",
        string lifecycle_event_hook_execution_id: String => "lifecycleEventHookExecutionId",
        value status: LifecycleEventStatus => "status",
    }
}

shape! {
    pub struct PutLifecycleEventHookExecutionStatusResponse {
        string lifecycle_event_hook_execution_id: String => "lifecycleEventHookExecutionId",
    }
}

// ── GitHub connections and external resources ──────────────────────

shape! {
    pub struct DeleteGitHubAccountTokenRequest {
        string token_name: String => "tokenName",
    }
}

shape! {
    pub struct DeleteGitHubAccountTokenResponse {
        string token_name: String => "tokenName",
    }
}

shape! {
    pub struct ListGitHubAccountTokenNamesRequest {
        string next_token: String => "nextToken",
    }
}

shape! {
    pub struct ListGitHubAccountTokenNamesResponse {
        list token_name_list: String => "tokenNameList",
        string next_token: String => "nextToken",
    }
}

shape! {
    /// Remove resources linked to an external ID, e.g. a CloudFormation stack.
    pub struct DeleteResourcesByExternalIdRequest {
        string external_id: String => "externalId",
    }
}

shape! {
    pub struct DeleteResourcesByExternalIdResponse {}
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::validate::Validate;

    #[test]
    fn tags_append_and_render() {
        let request = CreateApplicationRequest::builder()
            .application_name("web")
            .compute_platform(ComputePlatform::Server)
            .tags([Tag::builder().key("team").value("payments")])
            .tags([Tag::builder().key("env").value("prod")])
            .build();

        insta::assert_snapshot!(
            request.to_string(),
            @"{applicationName: web,computePlatform: Server,tags: [{Key: team,Value: payments}, {Key: env,Value: prod}]}"
        );
    }

    #[test]
    fn invalid_tag_is_located_inside_the_list() {
        let request = CreateApplicationRequest::builder()
            .application_name("web")
            .tags([Tag::builder().key("ok")])
            .tags([Tag::builder().key("")])
            .build();
        let violations = request.validate().unwrap_err();
        assert_eq!(violations.len(), 1);
        assert!(violations.has_path("tags[1].Key"));
    }

    #[test]
    fn hook_status_round_trips_service_unknown_value() {
        let request = PutLifecycleEventHookExecutionStatusRequest::builder()
            .deployment_id("d-1")
            .lifecycle_event_hook_execution_id("hook-1")
            .status(LifecycleEventStatus::StatusUnknown)
            .build();
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""status":"Unknown""#));
        let back: PutLifecycleEventHookExecutionStatusRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status(), Some(&LifecycleEventStatus::StatusUnknown));
    }
}
