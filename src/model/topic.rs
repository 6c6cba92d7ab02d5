use super::common::Tag;

shape! {
    /// Creates a topic, or returns the ARN of the existing topic with the same
    /// name and attributes.
    pub struct CreateTopicRequest {
        /// Up to 256 characters; FIFO topic names end in `.fifo`.
        name: text = "Name" { set_name, with_name },
        /// Topic attributes keyed by name, see [`crate::attributes::topic`].
        attributes: map(String) = "Attributes" {
            set_attributes, with_attributes, attributes_mut,
            add_attributes_entry, clear_attributes_entries
        },
        tags: list(Tag) = "Tags" { set_tags, with_tags, tags_mut, push_tags },
    }
}

impl CreateTopicRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self::default().with_name(name)
    }
}

shape! {
    pub struct CreateTopicResult {
        topic_arn: text = "TopicArn" { set_topic_arn, with_topic_arn },
    }
}

shape! {
    /// Deletes a topic and all its subscriptions.
    pub struct DeleteTopicRequest {
        topic_arn: text = "TopicArn" { set_topic_arn, with_topic_arn },
    }
}

impl DeleteTopicRequest {
    pub fn new(topic_arn: impl Into<String>) -> Self {
        Self::default().with_topic_arn(topic_arn)
    }
}

shape! {
    pub struct GetTopicAttributesRequest {
        topic_arn: text = "TopicArn" { set_topic_arn, with_topic_arn },
    }
}

impl GetTopicAttributesRequest {
    pub fn new(topic_arn: impl Into<String>) -> Self {
        Self::default().with_topic_arn(topic_arn)
    }
}

shape! {
    pub struct GetTopicAttributesResult {
        attributes: map(String) = "Attributes" {
            set_attributes, with_attributes, attributes_mut,
            add_attributes_entry, clear_attributes_entries
        },
    }
}

shape! {
    /// Sets one topic attribute.
    pub struct SetTopicAttributesRequest {
        topic_arn: text = "TopicArn" { set_topic_arn, with_topic_arn },
        attribute_name: text = "AttributeName" { set_attribute_name, with_attribute_name },
        /// The new value; absent unsets the attribute on the service side.
        attribute_value: text = "AttributeValue" { set_attribute_value, with_attribute_value },
    }
}

impl SetTopicAttributesRequest {
    pub fn new(
        topic_arn: impl Into<String>,
        attribute_name: impl Into<String>,
        attribute_value: impl Into<String>,
    ) -> Self {
        Self::default()
            .with_topic_arn(topic_arn)
            .with_attribute_name(attribute_name)
            .with_attribute_value(attribute_value)
    }
}

shape! {
    pub struct ListTopicsRequest {
        next_token: text = "NextToken" { set_next_token, with_next_token },
    }
}

impl ListTopicsRequest {
    pub fn new(next_token: impl Into<String>) -> Self {
        Self::default().with_next_token(next_token)
    }
}

shape! {
    pub struct ListTopicsResult {
        topics: list(Topic) = "Topics" { set_topics, with_topics, topics_mut, push_topics },
        /// Present when more topics remain.
        next_token: text = "NextToken" { set_next_token, with_next_token },
    }
}

shape! {
    pub struct Topic {
        topic_arn: text = "TopicArn" { set_topic_arn, with_topic_arn },
    }
}

impl Topic {
    pub fn new(topic_arn: impl Into<String>) -> Self {
        Self::default().with_topic_arn(topic_arn)
    }
}
