/// Delivery protocols accepted by `Subscribe`.
pub mod protocol {
    pub const HTTP: &str = "http";
    pub const HTTPS: &str = "https";
    pub const EMAIL: &str = "email";
    pub const EMAIL_JSON: &str = "email-json";
    pub const SMS: &str = "sms";
    pub const SQS: &str = "sqs";
    pub const APPLICATION: &str = "application";
    pub const LAMBDA: &str = "lambda";
    pub const FIREHOSE: &str = "firehose";
}

shape! {
    /// Subscribes an endpoint to a topic.
    ///
    /// Endpoints other than `sqs`, `lambda` and `firehose` must confirm the
    /// subscription before messages are delivered.
    pub struct SubscribeRequest {
        topic_arn: text = "TopicArn" { set_topic_arn, with_topic_arn },
        /// One of the [`protocol`] names.
        protocol: text = "Protocol" { set_protocol, with_protocol },
        /// Protocol dependent: a URL, an address, a phone number or an ARN.
        endpoint: text = "Endpoint" { set_endpoint, with_endpoint },
        attributes: map(String) = "Attributes" {
            set_attributes, with_attributes, attributes_mut,
            add_attributes_entry, clear_attributes_entries
        },
        /// Return the subscription ARN even while confirmation is pending.
        return_subscription_arn: flag = "ReturnSubscriptionArn" {
            set_return_subscription_arn, with_return_subscription_arn
        },
    }
}

impl SubscribeRequest {
    pub fn new(
        topic_arn: impl Into<String>,
        protocol: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self::default()
            .with_topic_arn(topic_arn)
            .with_protocol(protocol)
            .with_endpoint(endpoint)
    }
}

shape! {
    pub struct SubscribeResult {
        subscription_arn: text = "SubscriptionArn" { set_subscription_arn, with_subscription_arn },
    }
}

shape! {
    /// Confirms a subscription with the token sent to the endpoint.
    pub struct ConfirmSubscriptionRequest {
        topic_arn: text = "TopicArn" { set_topic_arn, with_topic_arn },
        token: text = "Token" { set_token, with_token },
        /// `"true"` restricts unsubscribing to authenticated callers.
        authenticate_on_unsubscribe: text = "AuthenticateOnUnsubscribe" {
            set_authenticate_on_unsubscribe, with_authenticate_on_unsubscribe
        },
    }
}

impl ConfirmSubscriptionRequest {
    pub fn new(topic_arn: impl Into<String>, token: impl Into<String>) -> Self {
        Self::default().with_topic_arn(topic_arn).with_token(token)
    }
}

shape! {
    pub struct ConfirmSubscriptionResult {
        subscription_arn: text = "SubscriptionArn" { set_subscription_arn, with_subscription_arn },
    }
}

shape! {
    pub struct UnsubscribeRequest {
        subscription_arn: text = "SubscriptionArn" { set_subscription_arn, with_subscription_arn },
    }
}

impl UnsubscribeRequest {
    pub fn new(subscription_arn: impl Into<String>) -> Self {
        Self::default().with_subscription_arn(subscription_arn)
    }
}

shape! {
    pub struct GetSubscriptionAttributesRequest {
        subscription_arn: text = "SubscriptionArn" { set_subscription_arn, with_subscription_arn },
    }
}

impl GetSubscriptionAttributesRequest {
    pub fn new(subscription_arn: impl Into<String>) -> Self {
        Self::default().with_subscription_arn(subscription_arn)
    }
}

shape! {
    pub struct GetSubscriptionAttributesResult {
        attributes: map(String) = "Attributes" {
            set_attributes, with_attributes, attributes_mut,
            add_attributes_entry, clear_attributes_entries
        },
    }
}

shape! {
    pub struct SetSubscriptionAttributesRequest {
        subscription_arn: text = "SubscriptionArn" { set_subscription_arn, with_subscription_arn },
        attribute_name: text = "AttributeName" { set_attribute_name, with_attribute_name },
        attribute_value: text = "AttributeValue" { set_attribute_value, with_attribute_value },
    }
}

impl SetSubscriptionAttributesRequest {
    pub fn new(
        subscription_arn: impl Into<String>,
        attribute_name: impl Into<String>,
        attribute_value: impl Into<String>,
    ) -> Self {
        Self::default()
            .with_subscription_arn(subscription_arn)
            .with_attribute_name(attribute_name)
            .with_attribute_value(attribute_value)
    }
}

shape! {
    pub struct ListSubscriptionsRequest {
        next_token: text = "NextToken" { set_next_token, with_next_token },
    }
}

impl ListSubscriptionsRequest {
    pub fn new(next_token: impl Into<String>) -> Self {
        Self::default().with_next_token(next_token)
    }
}

shape! {
    pub struct ListSubscriptionsResult {
        subscriptions: list(Subscription) = "Subscriptions" {
            set_subscriptions, with_subscriptions, subscriptions_mut, push_subscriptions
        },
        next_token: text = "NextToken" { set_next_token, with_next_token },
    }
}

shape! {
    pub struct ListSubscriptionsByTopicRequest {
        topic_arn: text = "TopicArn" { set_topic_arn, with_topic_arn },
        next_token: text = "NextToken" { set_next_token, with_next_token },
    }
}

impl ListSubscriptionsByTopicRequest {
    pub fn new(topic_arn: impl Into<String>) -> Self {
        Self::default().with_topic_arn(topic_arn)
    }
}

shape! {
    pub struct ListSubscriptionsByTopicResult {
        subscriptions: list(Subscription) = "Subscriptions" {
            set_subscriptions, with_subscriptions, subscriptions_mut, push_subscriptions
        },
        next_token: text = "NextToken" { set_next_token, with_next_token },
    }
}

shape! {
    /// One subscription as listed by the service.
    pub struct Subscription {
        /// `PendingConfirmation` until the endpoint confirms.
        subscription_arn: text = "SubscriptionArn" { set_subscription_arn, with_subscription_arn },
        owner: text = "Owner" { set_owner, with_owner },
        protocol: text = "Protocol" { set_protocol, with_protocol },
        endpoint: text = "Endpoint" { set_endpoint, with_endpoint },
        topic_arn: text = "TopicArn" { set_topic_arn, with_topic_arn },
    }
}
