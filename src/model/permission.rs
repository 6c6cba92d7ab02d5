shape! {
    /// Adds a statement to a topic's access control policy.
    pub struct AddPermissionRequest {
        topic_arn: text = "TopicArn" { set_topic_arn, with_topic_arn },
        /// Unique identifier of the new policy statement.
        label: text = "Label" { set_label, with_label },
        /// Account ids of the principals being granted access.
        aws_account_ids: list(String) = "AWSAccountId" {
            set_aws_account_ids, with_aws_account_ids, aws_account_ids_mut, push_aws_account_ids
        },
        /// Action names such as `Publish`.
        action_names: list(String) = "ActionName" {
            set_action_names, with_action_names, action_names_mut, push_action_names
        },
    }
}

impl AddPermissionRequest {
    pub fn new<A, N>(
        topic_arn: impl Into<String>,
        label: impl Into<String>,
        aws_account_ids: impl IntoIterator<Item = A>,
        action_names: impl IntoIterator<Item = N>,
    ) -> Self
    where
        A: Into<String>,
        N: Into<String>,
    {
        Self::default()
            .with_topic_arn(topic_arn)
            .with_label(label)
            .with_aws_account_ids(aws_account_ids)
            .with_action_names(action_names)
    }
}

shape! {
    /// Removes the statement with the given label from a topic's policy.
    pub struct RemovePermissionRequest {
        topic_arn: text = "TopicArn" { set_topic_arn, with_topic_arn },
        label: text = "Label" { set_label, with_label },
    }
}

impl RemovePermissionRequest {
    pub fn new(topic_arn: impl Into<String>, label: impl Into<String>) -> Self {
        Self::default().with_topic_arn(topic_arn).with_label(label)
    }
}
