// ── Resource tagging ──
//
// These operations use capitalized member names on the wire.

use super::common::Tag;

shape! {
    pub struct TagResourceRequest {
        string resource_arn: String => "ResourceArn" [required],
        list tags: Tag => "Tags" [required],
    }
}

shape! {
    pub struct TagResourceResponse {}
}

shape! {
    pub struct UntagResourceRequest {
        string resource_arn: String => "ResourceArn" [required],
        list tag_keys: String => "TagKeys" [required],
    }
}

shape! {
    pub struct UntagResourceResponse {}
}

shape! {
    pub struct ListTagsForResourceRequest {
        string resource_arn: String => "ResourceArn" [required],
        string next_token: String => "NextToken",
    }
}

shape! {
    pub struct ListTagsForResourceResponse {
        list tags: Tag => "Tags",
        string next_token: String => "NextToken",
    }
}
