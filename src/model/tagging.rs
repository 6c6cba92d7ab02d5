use super::common::Tag;

shape! {
    /// Adds or overwrites tags on a topic.
    pub struct TagResourceRequest {
        resource_arn: text = "ResourceArn" { set_resource_arn, with_resource_arn },
        tags: list(Tag) = "Tags" { set_tags, with_tags, tags_mut, push_tags },
    }
}

shape! {
    pub struct UntagResourceRequest {
        resource_arn: text = "ResourceArn" { set_resource_arn, with_resource_arn },
        tag_keys: list(String) = "TagKeys" { set_tag_keys, with_tag_keys, tag_keys_mut, push_tag_keys },
    }
}

shape! {
    pub struct ListTagsForResourceRequest {
        resource_arn: text = "ResourceArn" { set_resource_arn, with_resource_arn },
    }
}

impl ListTagsForResourceRequest {
    pub fn new(resource_arn: impl Into<String>) -> Self {
        Self::default().with_resource_arn(resource_arn)
    }
}

shape! {
    pub struct ListTagsForResourceResult {
        tags: list(Tag) = "Tags" { set_tags, with_tags, tags_mut, push_tags },
    }
}
