// ── Application revisions ──
//
// Where a revision lives (S3, GitHub, inline) and what the service knows
// about it. `RevisionLocation` is a tagged union on `revisionType`.

use super::enums::{
    ApplicationRevisionSortBy, BundleType, ListStateFilterAction, RevisionLocationType, SortOrder,
};
use crate::scalar::Timestamp;

shape! {
    pub struct S3Location {
        string bucket: String => "bucket",
        string key: String => "key",
        value bundle_type: BundleType => "bundleType",
        /// Object version; the latest version is used when unset.
        string version: String => "version",
        string e_tag: String => "eTag",
    }
}

shape! {
    pub struct GitHubLocation {
        /// `account/repository`.
        string repository: String => "repository",
        string commit_id: String => "commitId",
    }
}

shape! {
    /// An AppSpec file given inline as a string (Lambda and ECS deployments).
    pub struct RawString {
        string content: String => "content",
        string sha256: String => "sha256",
    }
}

shape! {
    pub struct AppSpecContent {
        string content: String => "content",
        string sha256: String => "sha256",
    }
}

tagged_union! {
    /// Location of an application revision.
    pub enum RevisionLocation {
        tag revision_type: RevisionLocationType => "revisionType";
        S3(S3Location) => s3_location = "s3Location",
        GitHub(GitHubLocation) => git_hub_location = "gitHubLocation",
        String(RawString) => string = "string",
        AppSpecContent(AppSpecContent) => app_spec_content = "appSpecContent",
    }
}

shape! {
    pub struct GenericRevisionInfo {
        string description: String => "description",
        list deployment_groups: String => "deploymentGroups",
        copy first_used_time: Timestamp => "firstUsedTime",
        copy last_used_time: Timestamp => "lastUsedTime",
        copy register_time: Timestamp => "registerTime",
    }
}

shape! {
    pub struct RevisionInfo {
        value revision_location: RevisionLocation => "revisionLocation",
        value generic_revision_info: GenericRevisionInfo => "genericRevisionInfo",
    }
}

// ── Operations ──────────────────────────────────────────────────────

shape! {
    pub struct ListApplicationRevisionsRequest {
        string application_name: String => "applicationName" [required, length 1..=100],
        value sort_by: ApplicationRevisionSortBy => "sortBy",
        value sort_order: SortOrder => "sortOrder",
        string s3_bucket: String => "s3Bucket",
        string s3_key_prefix: String => "s3KeyPrefix",
        /// Whether to list revisions that were deployed to a deployment group.
        value deployed: ListStateFilterAction => "deployed",
        string next_token: String => "nextToken",
    }
}

shape! {
    pub struct ListApplicationRevisionsResponse {
        list revisions: RevisionLocation => "revisions",
        string next_token: String => "nextToken",
    }
}

shape! {
    pub struct GetApplicationRevisionRequest {
        string application_name: String => "applicationName" [required, length 1..=100],
        value revision: RevisionLocation => "revision" [required],
    }
}

shape! {
    pub struct GetApplicationRevisionResponse {
        string application_name: String => "applicationName",
        value revision: RevisionLocation => "revision",
        value revision_info: GenericRevisionInfo => "revisionInfo",
    }
}

shape! {
    pub struct RegisterApplicationRevisionRequest {
        string application_name: String => "applicationName" [required, length 1..=100],
        string description: String => "description",
        value revision: RevisionLocation => "revision" [required],
    }
}

shape! {
    pub struct RegisterApplicationRevisionResponse {}
}

shape! {
    pub struct BatchGetApplicationRevisionsRequest {
        string application_name: String => "applicationName" [required, length 1..=100],
        list revisions: RevisionLocation => "revisions" [required, items ..=25],
    }
}

shape! {
    pub struct BatchGetApplicationRevisionsResponse {
        string application_name: String => "applicationName",
        string error_message: String => "errorMessage",
        list revisions: RevisionInfo => "revisions",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn s3() -> S3Location {
        S3Location::builder()
            .bucket("artifacts")
            .key("app.zip")
            .bundle_type(BundleType::Zip)
            .build()
    }

    #[test]
    fn s3_revision_encodes_tag_and_payload() {
        let location = RevisionLocation::from(s3());
        assert_eq!(
            serde_json::to_value(&location).unwrap(),
            json!({
                "revisionType": "S3",
                "s3Location": {"bucket": "artifacts", "key": "app.zip", "bundleType": "zip"}
            })
        );
    }

    #[test]
    fn tag_picks_payload_and_ignores_the_rest() {
        let location: RevisionLocation = serde_json::from_value(json!({
            "revisionType": "GitHub",
            "gitHubLocation": {"repository": "acme/web", "commitId": "abc123"},
            "s3Location": {"bucket": "stale"}
        }))
        .unwrap();
        assert_eq!(location.revision_type(), RevisionLocationType::GitHub);
        assert_eq!(location.git_hub_location().unwrap().commit_id(), Some("abc123"));
        assert!(location.s3_location().is_none());
    }

    #[test]
    fn missing_tag_is_inferred_from_single_payload() {
        let location: RevisionLocation =
            serde_json::from_value(json!({"string": {"content": "version: 0.0"}})).unwrap();
        assert_eq!(location.revision_type(), RevisionLocationType::String);
        assert_eq!(location.string().unwrap().content(), Some("version: 0.0"));
    }

    #[test]
    fn tag_without_its_payload_is_an_error() {
        let err = serde_json::from_value::<RevisionLocation>(json!({
            "revisionType": "S3",
            "gitHubLocation": {"repository": "acme/web"}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("s3Location"));
    }

    #[test]
    fn ambiguous_or_empty_untagged_objects_are_errors() {
        assert!(serde_json::from_value::<RevisionLocation>(json!({})).is_err());
        assert!(
            serde_json::from_value::<RevisionLocation>(json!({
                "s3Location": {"bucket": "a"},
                "gitHubLocation": {"repository": "b"}
            }))
            .is_err()
        );
    }

    #[test]
    fn revision_renders_tag_then_payload() {
        let location = RevisionLocation::from(s3());
        assert_eq!(
            location.to_string(),
            "{revisionType: S3,s3Location: {bucket: artifacts,key: app.zip,bundleType: zip}}"
        );
    }
}
