//! Names of the attributes the service understands. Attribute maps accept any
//! key; these are only the ones documented for each resource.

pub mod topic {
    pub const TOPIC_ARN: &str = "TopicArn";
    pub const OWNER: &str = "Owner";
    pub const DISPLAY_NAME: &str = "DisplayName";
    pub const POLICY: &str = "Policy";
    pub const DELIVERY_POLICY: &str = "DeliveryPolicy";
    pub const EFFECTIVE_DELIVERY_POLICY: &str = "EffectiveDeliveryPolicy";
    pub const TRACING_CONFIG: &str = "TracingConfig";
    pub const KMS_MASTER_KEY_ID: &str = "KmsMasterKeyId";
    pub const FIFO_TOPIC: &str = "FifoTopic";
    pub const CONTENT_BASED_DEDUPLICATION: &str = "ContentBasedDeduplication";
    pub const SUBSCRIPTIONS_CONFIRMED: &str = "SubscriptionsConfirmed";
    pub const SUBSCRIPTIONS_PENDING: &str = "SubscriptionsPending";
    pub const SUBSCRIPTIONS_DELETED: &str = "SubscriptionsDeleted";

    /// Attributes `SetTopicAttributes` may change.
    pub const SETTABLE: &[&str] = &[
        DISPLAY_NAME,
        POLICY,
        DELIVERY_POLICY,
        TRACING_CONFIG,
        KMS_MASTER_KEY_ID,
        CONTENT_BASED_DEDUPLICATION,
    ];
}

pub mod subscription {
    pub const SUBSCRIPTION_ARN: &str = "SubscriptionArn";
    pub const TOPIC_ARN: &str = "TopicArn";
    pub const OWNER: &str = "Owner";
    pub const PROTOCOL: &str = "Protocol";
    pub const ENDPOINT: &str = "Endpoint";
    pub const DELIVERY_POLICY: &str = "DeliveryPolicy";
    pub const FILTER_POLICY: &str = "FilterPolicy";
    pub const FILTER_POLICY_SCOPE: &str = "FilterPolicyScope";
    pub const RAW_MESSAGE_DELIVERY: &str = "RawMessageDelivery";
    pub const REDRIVE_POLICY: &str = "RedrivePolicy";
    pub const SUBSCRIPTION_ROLE_ARN: &str = "SubscriptionRoleArn";
    pub const PENDING_CONFIRMATION: &str = "PendingConfirmation";
    pub const CONFIRMATION_WAS_AUTHENTICATED: &str = "ConfirmationWasAuthenticated";

    pub const SETTABLE: &[&str] = &[
        DELIVERY_POLICY,
        FILTER_POLICY,
        FILTER_POLICY_SCOPE,
        RAW_MESSAGE_DELIVERY,
        REDRIVE_POLICY,
        SUBSCRIPTION_ROLE_ARN,
    ];
}

pub mod endpoint {
    pub const CUSTOM_USER_DATA: &str = "CustomUserData";
    pub const ENABLED: &str = "Enabled";
    pub const TOKEN: &str = "Token";
}

pub mod platform_application {
    pub const PLATFORM_CREDENTIAL: &str = "PlatformCredential";
    pub const PLATFORM_PRINCIPAL: &str = "PlatformPrincipal";
    pub const EVENT_ENDPOINT_CREATED: &str = "EventEndpointCreated";
    pub const EVENT_ENDPOINT_DELETED: &str = "EventEndpointDeleted";
    pub const EVENT_ENDPOINT_UPDATED: &str = "EventEndpointUpdated";
    pub const EVENT_DELIVERY_FAILURE: &str = "EventDeliveryFailure";
    pub const SUCCESS_FEEDBACK_ROLE_ARN: &str = "SuccessFeedbackRoleArn";
    pub const FAILURE_FEEDBACK_ROLE_ARN: &str = "FailureFeedbackRoleArn";
    pub const SUCCESS_FEEDBACK_SAMPLE_RATE: &str = "SuccessFeedbackSampleRate";
}

pub mod sms {
    pub const MONTHLY_SPEND_LIMIT: &str = "MonthlySpendLimit";
    pub const DELIVERY_STATUS_IAM_ROLE: &str = "DeliveryStatusIAMRole";
    pub const DELIVERY_STATUS_SUCCESS_SAMPLING_RATE: &str = "DeliveryStatusSuccessSamplingRate";
    pub const DEFAULT_SENDER_ID: &str = "DefaultSenderID";
    pub const DEFAULT_SMS_TYPE: &str = "DefaultSMSType";
    pub const USAGE_REPORT_S3_BUCKET: &str = "UsageReportS3Bucket";
}
