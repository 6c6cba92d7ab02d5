use crate::config::ClientConfig;
use crate::error::Error;
use crate::model::*;
use crate::operation::Operation;
use crate::transport::{Reply, Transport};

/// Sends typed requests through a [`Transport`].
///
/// The client adds no retries; a fault from the service is returned as is.
pub struct Client<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ClientConfig::default())
    }

    pub fn with_config(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn send<O: Operation>(&self, operation: O) -> Result<O::Output, Error> {
        self.send_with_metadata(operation).await.map(|(output, _)| output)
    }

    pub async fn send_with_metadata<O: Operation>(
        &self,
        operation: O,
    ) -> Result<(O::Output, ResponseMetadata), Error> {
        let action = O::ACTION;
        tracing::debug!(action, "sending request");

        let call = self.transport.invoke(operation.into_request());
        let reply = match self.config.timeout {
            Some(timeout) => match tokio::time::timeout(timeout, call).await {
                Ok(reply) => reply,
                Err(_) => {
                    tracing::warn!(action, ?timeout, "request timed out");
                    return Err(Error::Timeout { action, timeout });
                }
            },
            None => call.await,
        };

        let Reply { response, metadata } = match reply {
            Ok(reply) => reply,
            Err(Error::Service(fault)) => {
                tracing::warn!(
                    action,
                    code = %fault.code,
                    request_id = fault.request_id.as_deref().unwrap_or_default(),
                    "service fault: {}",
                    fault.message
                );
                return Err(Error::Service(fault));
            }
            Err(e) => return Err(e),
        };

        let received = response.action();
        let output = O::from_response(response).ok_or(Error::UnexpectedResponse {
            expected: action,
            received,
        })?;
        tracing::debug!(action, request_id = %metadata.request_id, "request completed");
        Ok((output, metadata))
    }

    pub async fn create_topic(&self, name: impl Into<String>) -> Result<CreateTopicResult, Error> {
        self.send(CreateTopicRequest::new(name)).await
    }

    pub async fn delete_topic(&self, topic_arn: impl Into<String>) -> Result<(), Error> {
        self.send(DeleteTopicRequest::new(topic_arn)).await
    }

    pub async fn get_topic_attributes(
        &self,
        topic_arn: impl Into<String>,
    ) -> Result<GetTopicAttributesResult, Error> {
        self.send(GetTopicAttributesRequest::new(topic_arn)).await
    }

    pub async fn set_topic_attributes(
        &self,
        topic_arn: impl Into<String>,
        attribute_name: impl Into<String>,
        attribute_value: impl Into<String>,
    ) -> Result<(), Error> {
        self.send(SetTopicAttributesRequest::new(
            topic_arn,
            attribute_name,
            attribute_value,
        ))
        .await
    }

    /// Lists one page of topics; pass the previous page's token to continue.
    pub async fn list_topics(&self, next_token: Option<String>) -> Result<ListTopicsResult, Error> {
        let mut request = ListTopicsRequest::default();
        request.set_next_token(next_token);
        self.send(request).await
    }

    pub async fn subscribe(
        &self,
        topic_arn: impl Into<String>,
        protocol: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<SubscribeResult, Error> {
        self.send(SubscribeRequest::new(topic_arn, protocol, endpoint))
            .await
    }

    pub async fn confirm_subscription(
        &self,
        topic_arn: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<ConfirmSubscriptionResult, Error> {
        self.send(ConfirmSubscriptionRequest::new(topic_arn, token))
            .await
    }

    /// Confirms a subscription and, when `authenticate_on_unsubscribe` is set,
    /// restricts unsubscribing to the topic owner and the subscription owner.
    pub async fn confirm_subscription_with_authentication(
        &self,
        topic_arn: impl Into<String>,
        token: impl Into<String>,
        authenticate_on_unsubscribe: bool,
    ) -> Result<ConfirmSubscriptionResult, Error> {
        let request = ConfirmSubscriptionRequest::new(topic_arn, token)
            .with_authenticate_on_unsubscribe(authenticate_on_unsubscribe.to_string());
        self.send(request).await
    }

    pub async fn unsubscribe(&self, subscription_arn: impl Into<String>) -> Result<(), Error> {
        self.send(UnsubscribeRequest::new(subscription_arn)).await
    }

    pub async fn get_subscription_attributes(
        &self,
        subscription_arn: impl Into<String>,
    ) -> Result<GetSubscriptionAttributesResult, Error> {
        self.send(GetSubscriptionAttributesRequest::new(subscription_arn))
            .await
    }

    pub async fn set_subscription_attributes(
        &self,
        subscription_arn: impl Into<String>,
        attribute_name: impl Into<String>,
        attribute_value: impl Into<String>,
    ) -> Result<(), Error> {
        self.send(SetSubscriptionAttributesRequest::new(
            subscription_arn,
            attribute_name,
            attribute_value,
        ))
        .await
    }

    pub async fn list_subscriptions(
        &self,
        next_token: Option<String>,
    ) -> Result<ListSubscriptionsResult, Error> {
        let mut request = ListSubscriptionsRequest::default();
        request.set_next_token(next_token);
        self.send(request).await
    }

    pub async fn list_subscriptions_by_topic(
        &self,
        topic_arn: impl Into<String>,
        next_token: Option<String>,
    ) -> Result<ListSubscriptionsByTopicResult, Error> {
        let mut request = ListSubscriptionsByTopicRequest::new(topic_arn);
        request.set_next_token(next_token);
        self.send(request).await
    }

    pub async fn publish(
        &self,
        topic_arn: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<PublishResult, Error> {
        self.send(PublishRequest::new(topic_arn, message)).await
    }

    pub async fn publish_with_subject(
        &self,
        topic_arn: impl Into<String>,
        message: impl Into<String>,
        subject: impl Into<String>,
    ) -> Result<PublishResult, Error> {
        self.send(PublishRequest::new(topic_arn, message).with_subject(subject))
            .await
    }

    pub async fn add_permission<A, N>(
        &self,
        topic_arn: impl Into<String>,
        label: impl Into<String>,
        aws_account_ids: impl IntoIterator<Item = A>,
        action_names: impl IntoIterator<Item = N>,
    ) -> Result<(), Error>
    where
        A: Into<String>,
        N: Into<String>,
    {
        self.send(AddPermissionRequest::new(
            topic_arn,
            label,
            aws_account_ids,
            action_names,
        ))
        .await
    }

    pub async fn remove_permission(
        &self,
        topic_arn: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<(), Error> {
        self.send(RemovePermissionRequest::new(topic_arn, label))
            .await
    }

    pub async fn list_platform_applications(
        &self,
        next_token: Option<String>,
    ) -> Result<ListPlatformApplicationsResult, Error> {
        let mut request = ListPlatformApplicationsRequest::default();
        request.set_next_token(next_token);
        self.send(request).await
    }
}
