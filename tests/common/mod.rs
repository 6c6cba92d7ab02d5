#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use sns_model::arn::Arn;
use sns_model::attributes;
use sns_model::*;

#[ctor::ctor]
fn init() {
    let _ = tracing_subscriber::fmt().try_init();
}

#[derive(Debug, Clone)]
pub struct TopicRecord {
    pub name: String,
    pub arn: String,
    pub attributes: BTreeMap<String, String>,
    pub tags: Vec<Tag>,
    pub subscriptions: Vec<SubscriptionRecord>,
    pub messages: Vec<Message>,
    /// Policy statements keyed by label.
    pub permissions: BTreeMap<String, PermissionRecord>,
}

#[derive(Debug, Clone)]
pub struct SubscriptionRecord {
    pub endpoint: String,
    pub protocol: String,
    pub topic_arn: String,
    pub subscription_arn: String,
    pub attributes: BTreeMap<String, String>,
    /// Set until the endpoint confirms.
    pub confirmation_token: Option<String>,
    pub authenticated: bool,
}

#[derive(Debug, Clone)]
pub struct PermissionRecord {
    pub account_ids: Vec<String>,
    pub action_names: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PlatformApplicationRecord {
    pub arn: String,
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub subject: Option<String>,
    pub body: String,
    pub group_id: Option<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// An in-memory notification service. Validation happens here, the way the
/// real service does it, never in the request types.
pub struct FakeSns {
    config: ClientConfig,
    topics: DashMap<String, TopicRecord>,
    applications: DashMap<String, PlatformApplicationRecord>,
    sequence: AtomicU64,
}

impl FakeSns {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            topics: DashMap::new(),
            applications: DashMap::new(),
            sequence: AtomicU64::new(0),
        }
    }

    pub fn topic(&self, name: &str) -> Option<TopicRecord> {
        self.topics.get(name).map(|topic| topic.clone())
    }

    pub fn messages(&self, name: &str) -> Vec<Message> {
        self.topic(name).map(|topic| topic.messages).unwrap_or_default()
    }

    /// The token the service would have sent to a pending endpoint.
    pub fn confirmation_token(&self, subscription_arn: &str) -> Option<String> {
        self.with_subscription(subscription_arn, |s| s.confirmation_token.clone())
            .ok()
            .flatten()
    }

    fn create_topic(&self, params: CreateTopicRequest) -> Result<CreateTopicResult, ServiceError> {
        let name = required(params.name(), "Missing Topic Name")?;
        let fifo = params
            .attributes()
            .and_then(|a| a.get(attributes::topic::FIFO_TOPIC))
            .is_some_and(|v| v == "true");
        if fifo != name.ends_with(".fifo") {
            return Err(invalid("Fifo Topic names must end with .fifo"));
        }

        let arn = self.config.topic_arn(name);
        self.topics
            .entry(name.to_string())
            .or_insert_with(|| TopicRecord {
                name: name.to_string(),
                arn: arn.clone(),
                attributes: params.attributes().cloned().unwrap_or_default(),
                tags: params.tags().map(<[Tag]>::to_vec).unwrap_or_default(),
                subscriptions: vec![],
                messages: vec![],
                permissions: BTreeMap::new(),
            });
        Ok(CreateTopicResult::default().with_topic_arn(arn))
    }

    fn delete_topic(&self, params: DeleteTopicRequest) -> Result<(), ServiceError> {
        let topic_arn = required(params.topic_arn(), "Missing Topic ARN")?;
        self.topics.remove(&topic_name(topic_arn)?);
        Ok(())
    }

    fn list_topics(&self) -> ListTopicsResult {
        let mut arns: Vec<String> = self
            .topics
            .iter()
            .map(|topic_ref| topic_ref.value().arn.clone())
            .collect();
        arns.sort();
        ListTopicsResult::default().with_topics(arns.into_iter().map(Topic::new))
    }

    fn set_topic_attributes(&self, params: SetTopicAttributesRequest) -> Result<(), ServiceError> {
        let topic_arn = required(params.topic_arn(), "Missing Topic ARN")?;
        let attribute_name = required(params.attribute_name(), "Missing Attribute Name")?;
        if !attributes::topic::SETTABLE.contains(&attribute_name) {
            return Err(invalid("Attribute not supported"));
        }

        let mut topic = self
            .topics
            .get_mut(&topic_name(topic_arn)?)
            .ok_or_else(|| not_found("Topic not found"))?;
        match params.attribute_value() {
            Some(value) => topic
                .attributes
                .insert(attribute_name.to_string(), value.to_string()),
            None => topic.attributes.remove(attribute_name),
        };
        Ok(())
    }

    fn get_topic_attributes(
        &self,
        params: GetTopicAttributesRequest,
    ) -> Result<GetTopicAttributesResult, ServiceError> {
        let topic_arn = required(params.topic_arn(), "Missing Topic ARN")?;
        let topic = self
            .topics
            .get(&topic_name(topic_arn)?)
            .ok_or_else(|| not_found("Topic not found"))?;

        let mut result = GetTopicAttributesResult::default().with_attributes(topic.attributes.clone());
        let entries = result.attributes_mut();
        entries.insert(attributes::topic::TOPIC_ARN.to_string(), topic.arn.clone());
        entries.insert(attributes::topic::OWNER.to_string(), self.config.account_id.clone());
        let pending = topic
            .subscriptions
            .iter()
            .filter(|s| s.confirmation_token.is_some())
            .count();
        entries.insert(
            attributes::topic::SUBSCRIPTIONS_CONFIRMED.to_string(),
            (topic.subscriptions.len() - pending).to_string(),
        );
        entries.insert(attributes::topic::SUBSCRIPTIONS_PENDING.to_string(), pending.to_string());
        entries.insert(attributes::topic::SUBSCRIPTIONS_DELETED.to_string(), "0".to_string());
        Ok(result)
    }

    fn subscribe(&self, params: SubscribeRequest) -> Result<SubscribeResult, ServiceError> {
        let topic_arn = required(params.topic_arn(), "Missing Topic ARN")?;
        let endpoint = required(params.endpoint(), "Missing endpoint")?;
        let protocol = required(params.protocol(), "Missing protocol")?;

        for name in params.attributes().into_iter().flat_map(|a| a.keys()) {
            if !attributes::subscription::SETTABLE.contains(&name.as_str()) {
                return Err(invalid("Attribute not supported"));
            }
        }

        let subscription_arn = format!("{}:{}", topic_arn, Uuid::new_v4());
        let needs_confirmation = ![protocol::SQS, protocol::LAMBDA, protocol::FIREHOSE]
            .contains(&protocol);
        let subscription = SubscriptionRecord {
            endpoint: endpoint.to_string(),
            protocol: protocol.to_string(),
            topic_arn: topic_arn.to_string(),
            subscription_arn: subscription_arn.clone(),
            attributes: params.attributes().cloned().unwrap_or_default(),
            confirmation_token: needs_confirmation.then(|| Uuid::new_v4().simple().to_string()),
            authenticated: false,
        };

        let mut topic = self
            .topics
            .get_mut(&topic_name(topic_arn)?)
            .ok_or_else(|| not_found("Topic not found"))?;
        topic.subscriptions.push(subscription);

        if needs_confirmation && params.return_subscription_arn() != Some(true) {
            return Ok(SubscribeResult::default().with_subscription_arn("pending confirmation"));
        }
        Ok(SubscribeResult::default().with_subscription_arn(subscription_arn))
    }

    fn confirm_subscription(
        &self,
        params: ConfirmSubscriptionRequest,
    ) -> Result<ConfirmSubscriptionResult, ServiceError> {
        let topic_arn = required(params.topic_arn(), "Missing Topic ARN")?;
        let token = required(params.token(), "Missing token")?;

        let mut topic = self
            .topics
            .get_mut(&topic_name(topic_arn)?)
            .ok_or_else(|| not_found("Topic not found"))?;
        let subscription = topic
            .subscriptions
            .iter_mut()
            .find(|s| s.confirmation_token.as_deref() == Some(token))
            .ok_or_else(|| invalid("Invalid token"))?;
        subscription.confirmation_token = None;
        subscription.authenticated = params.authenticate_on_unsubscribe() == Some("true");
        Ok(ConfirmSubscriptionResult::default()
            .with_subscription_arn(&subscription.subscription_arn))
    }

    fn with_subscription<R>(
        &self,
        subscription_arn: &str,
        f: impl FnOnce(&mut SubscriptionRecord) -> R,
    ) -> Result<R, ServiceError> {
        let topic_arn = Arn::parse(subscription_arn)
            .and_then(|arn| arn.parent())
            .ok_or_else(|| invalid("Invalid Subscription ARN"))?;
        let mut topic = self
            .topics
            .get_mut(topic_arn.topic_name())
            .ok_or_else(|| not_found("Subscription does not exist"))?;
        let subscription = topic
            .subscriptions
            .iter_mut()
            .find(|s| s.subscription_arn == subscription_arn)
            .ok_or_else(|| not_found("Subscription does not exist"))?;
        Ok(f(subscription))
    }

    fn get_subscription_attributes(
        &self,
        params: GetSubscriptionAttributesRequest,
    ) -> Result<GetSubscriptionAttributesResult, ServiceError> {
        let subscription_arn = required(params.subscription_arn(), "Missing Subscription ARN")?;
        let account_id = self.config.account_id.clone();
        self.with_subscription(subscription_arn, |s| {
            let mut result =
                GetSubscriptionAttributesResult::default().with_attributes(s.attributes.clone());
            let entries = result.attributes_mut();
            let mut put = |name: &str, value: String| entries.insert(name.to_string(), value);
            put(attributes::subscription::SUBSCRIPTION_ARN, s.subscription_arn.clone());
            put(attributes::subscription::TOPIC_ARN, s.topic_arn.clone());
            put(attributes::subscription::OWNER, account_id);
            put(attributes::subscription::PROTOCOL, s.protocol.clone());
            put(attributes::subscription::ENDPOINT, s.endpoint.clone());
            put(
                attributes::subscription::PENDING_CONFIRMATION,
                s.confirmation_token.is_some().to_string(),
            );
            put(
                attributes::subscription::CONFIRMATION_WAS_AUTHENTICATED,
                s.authenticated.to_string(),
            );
            result
        })
    }

    fn set_subscription_attributes(
        &self,
        params: SetSubscriptionAttributesRequest,
    ) -> Result<(), ServiceError> {
        let subscription_arn = required(params.subscription_arn(), "Missing Subscription ARN")?;
        let attribute_name = required(params.attribute_name(), "Missing Attribute Name")?;
        if !attributes::subscription::SETTABLE.contains(&attribute_name) {
            return Err(invalid("Attribute not supported"));
        }
        self.with_subscription(subscription_arn, |s| match params.attribute_value() {
            Some(value) => s.attributes.insert(attribute_name.to_string(), value.to_string()),
            None => s.attributes.remove(attribute_name),
        })?;
        Ok(())
    }

    fn unsubscribe(&self, params: UnsubscribeRequest) -> Result<(), ServiceError> {
        let subscription_arn = required(params.subscription_arn(), "Missing Subscription ARN")?;
        let topic_arn = Arn::parse(subscription_arn)
            .and_then(|arn| arn.parent())
            .ok_or_else(|| invalid("Invalid Subscription ARN"))?;

        let mut topic = self
            .topics
            .get_mut(topic_arn.topic_name())
            .ok_or_else(|| not_found("Topic not found"))?;
        topic
            .subscriptions
            .retain(|s| s.subscription_arn != subscription_arn);
        Ok(())
    }

    fn list_subscriptions_by_topic(
        &self,
        params: ListSubscriptionsByTopicRequest,
    ) -> Result<ListSubscriptionsByTopicResult, ServiceError> {
        let topic_arn = required(params.topic_arn(), "Missing Topic ARN")?;
        let topic = self
            .topics
            .get(&topic_name(topic_arn)?)
            .ok_or_else(|| not_found("Topic not found"))?;
        let subscriptions = topic.subscriptions.iter().map(|s| self.describe(s));
        Ok(ListSubscriptionsByTopicResult::default().with_subscriptions(subscriptions))
    }

    fn list_subscriptions(&self) -> ListSubscriptionsResult {
        let mut subscriptions: Vec<Subscription> = self
            .topics
            .iter()
            .flat_map(|topic_ref| {
                topic_ref
                    .value()
                    .subscriptions
                    .iter()
                    .map(|s| self.describe(s))
                    .collect::<Vec<_>>()
            })
            .collect();
        subscriptions.sort_by(|a, b| a.topic_arn().cmp(&b.topic_arn()));
        ListSubscriptionsResult::default().with_subscriptions(subscriptions)
    }

    fn describe(&self, s: &SubscriptionRecord) -> Subscription {
        let subscription_arn = match s.confirmation_token {
            Some(_) => attributes::subscription::PENDING_CONFIRMATION,
            None => s.subscription_arn.as_str(),
        };
        Subscription::default()
            .with_subscription_arn(subscription_arn)
            .with_owner(&self.config.account_id)
            .with_protocol(&s.protocol)
            .with_endpoint(&s.endpoint)
            .with_topic_arn(&s.topic_arn)
    }

    fn publish(&self, params: PublishRequest) -> Result<PublishResult, ServiceError> {
        let topic_arn = required(params.topic_arn(), "Missing Topic ARN")?;
        let body = required(params.message(), "Missing message")?;
        let (message_id, sequence_number) = self.deliver(
            topic_arn,
            body,
            params.subject(),
            params.message_group_id(),
        )?;

        let mut result = PublishResult::default().with_message_id(message_id);
        result.set_sequence_number(sequence_number);
        Ok(result)
    }

    fn publish_batch(&self, params: PublishBatchRequest) -> Result<PublishBatchResult, ServiceError> {
        let topic_arn = required(params.topic_arn(), "Missing Topic ARN")?;
        let mut result = PublishBatchResult::default();
        for entry in params.publish_batch_request_entries().unwrap_or_default() {
            let id = entry.id().unwrap_or_default();
            let outcome = required(entry.message(), "Missing message").and_then(|body| {
                self.deliver(topic_arn, body, entry.subject(), entry.message_group_id())
            });
            match outcome {
                Ok((message_id, sequence_number)) => {
                    let mut success = PublishBatchResultEntry::default()
                        .with_id(id)
                        .with_message_id(message_id);
                    success.set_sequence_number(sequence_number);
                    result.push_successful(success);
                }
                Err(fault) => {
                    result.push_failed(
                        BatchResultErrorEntry::default()
                            .with_id(id)
                            .with_code(fault.code.as_str())
                            .with_message(fault.message)
                            .with_sender_fault(true),
                    );
                }
            }
        }
        Ok(result)
    }

    fn deliver(
        &self,
        topic_arn: &str,
        body: &str,
        subject: Option<&str>,
        group_id: Option<&str>,
    ) -> Result<(String, Option<String>), ServiceError> {
        let mut topic = self
            .topics
            .get_mut(&topic_name(topic_arn)?)
            .ok_or_else(|| not_found("Topic does not exist"))?;

        let fifo = topic.name.ends_with(".fifo");
        if fifo && group_id.is_none() {
            return Err(invalid("The MessageGroupId parameter is required for FIFO topics"));
        }

        let message = Message {
            id: Uuid::new_v4().to_string(),
            subject: subject.map(str::to_string),
            body: body.to_string(),
            group_id: group_id.map(str::to_string),
            timestamp: chrono::Utc::now(),
        };
        let confirmed = topic
            .subscriptions
            .iter()
            .filter(|s| s.confirmation_token.is_none());
        for subscription in confirmed {
            tracing::info!(
                "Sending message {:?} to endpoint {}",
                message,
                subscription.endpoint
            );
        }

        let sequence_number = fifo.then(|| {
            self.sequence
                .fetch_add(1, Ordering::SeqCst)
                .to_string()
        });
        let message_id = message.id.clone();
        topic.messages.push(message);
        Ok((message_id, sequence_number))
    }

    fn add_permission(&self, params: AddPermissionRequest) -> Result<(), ServiceError> {
        let topic_arn = required(params.topic_arn(), "Missing Topic ARN")?;
        let label = required(params.label(), "Missing Label")?;
        let account_ids = params.aws_account_ids().unwrap_or_default();
        let action_names = params.action_names().unwrap_or_default();
        if account_ids.is_empty() || action_names.is_empty() {
            return Err(invalid("Missing AWSAccountId or ActionName"));
        }

        let mut topic = self
            .topics
            .get_mut(&topic_name(topic_arn)?)
            .ok_or_else(|| not_found("Topic not found"))?;
        if topic.permissions.contains_key(label) {
            return Err(invalid("Statement already exists"));
        }
        topic.permissions.insert(
            label.to_string(),
            PermissionRecord {
                account_ids: account_ids.to_vec(),
                action_names: action_names.to_vec(),
            },
        );
        Ok(())
    }

    fn remove_permission(&self, params: RemovePermissionRequest) -> Result<(), ServiceError> {
        let topic_arn = required(params.topic_arn(), "Missing Topic ARN")?;
        let label = required(params.label(), "Missing Label")?;
        let mut topic = self
            .topics
            .get_mut(&topic_name(topic_arn)?)
            .ok_or_else(|| not_found("Topic not found"))?;
        topic
            .permissions
            .remove(label)
            .map(|_| ())
            .ok_or_else(|| invalid("Statement does not exist"))
    }

    fn create_platform_application(
        &self,
        params: CreatePlatformApplicationRequest,
    ) -> Result<CreatePlatformApplicationResult, ServiceError> {
        let name = required(params.name(), "Missing Name")?;
        let platform = required(params.platform(), "Missing Platform")?;
        let entries = params.attributes().cloned().unwrap_or_default();
        if !entries.contains_key(attributes::platform_application::PLATFORM_CREDENTIAL) {
            return Err(invalid("PlatformCredential attribute is required"));
        }

        let arn = format!(
            "arn:aws:sns:{}:{}:app/{}/{}",
            self.config.region, self.config.account_id, platform, name
        );
        self.applications
            .entry(arn.clone())
            .or_insert_with(|| PlatformApplicationRecord {
                arn: arn.clone(),
                attributes: entries,
            });
        Ok(CreatePlatformApplicationResult::default().with_platform_application_arn(arn))
    }

    fn get_platform_application_attributes(
        &self,
        params: GetPlatformApplicationAttributesRequest,
    ) -> Result<GetPlatformApplicationAttributesResult, ServiceError> {
        let arn = required(params.platform_application_arn(), "Missing PlatformApplicationArn")?;
        let application = self
            .applications
            .get(arn)
            .ok_or_else(|| not_found("PlatformApplication does not exist"))?;
        Ok(GetPlatformApplicationAttributesResult::default()
            .with_attributes(application.attributes.clone()))
    }

    fn delete_platform_application(
        &self,
        params: DeletePlatformApplicationRequest,
    ) -> Result<(), ServiceError> {
        let arn = required(params.platform_application_arn(), "Missing PlatformApplicationArn")?;
        self.applications.remove(arn);
        Ok(())
    }

    fn list_platform_applications(&self) -> ListPlatformApplicationsResult {
        let mut applications: Vec<PlatformApplication> = self
            .applications
            .iter()
            .map(|app_ref| {
                PlatformApplication::default()
                    .with_platform_application_arn(&app_ref.value().arn)
                    .with_attributes(app_ref.value().attributes.clone())
            })
            .collect();
        applications.sort_by(|a, b| a.platform_application_arn().cmp(&b.platform_application_arn()));
        ListPlatformApplicationsResult::default().with_platform_applications(applications)
    }

    fn tag_resource(&self, params: TagResourceRequest) -> Result<(), ServiceError> {
        let resource_arn = required(params.resource_arn(), "Missing Resource ARN")?;
        let mut topic = self
            .topics
            .get_mut(&topic_name(resource_arn)?)
            .ok_or_else(|| not_found("Resource not found"))?;
        for tag in params.tags().unwrap_or_default() {
            topic.tags.retain(|existing| existing.key() != tag.key());
            topic.tags.push(tag.clone());
        }
        Ok(())
    }

    fn list_tags_for_resource(
        &self,
        params: ListTagsForResourceRequest,
    ) -> Result<ListTagsForResourceResult, ServiceError> {
        let resource_arn = required(params.resource_arn(), "Missing Resource ARN")?;
        let topic = self
            .topics
            .get(&topic_name(resource_arn)?)
            .ok_or_else(|| not_found("Resource not found"))?;
        Ok(ListTagsForResourceResult::default().with_tags(topic.tags.clone()))
    }
}

#[async_trait]
impl Transport for FakeSns {
    async fn invoke(&self, request: Request) -> Result<Reply, Error> {
        let request_id = Uuid::new_v4().to_string();
        let response = match request {
            Request::CreateTopic(params) => self.create_topic(params).map(Response::CreateTopic),
            Request::DeleteTopic(params) => self.delete_topic(params).map(Response::DeleteTopic),
            Request::ListTopics(_) => Ok(Response::ListTopics(self.list_topics())),
            Request::Subscribe(params) => self.subscribe(params).map(Response::Subscribe),
            Request::Unsubscribe(params) => self.unsubscribe(params).map(Response::Unsubscribe),
            Request::ConfirmSubscription(params) => self
                .confirm_subscription(params)
                .map(Response::ConfirmSubscription),
            Request::GetSubscriptionAttributes(params) => self
                .get_subscription_attributes(params)
                .map(Response::GetSubscriptionAttributes),
            Request::SetSubscriptionAttributes(params) => self
                .set_subscription_attributes(params)
                .map(Response::SetSubscriptionAttributes),
            Request::ListSubscriptions(_) => {
                Ok(Response::ListSubscriptions(self.list_subscriptions()))
            }
            Request::ListSubscriptionsByTopic(params) => self
                .list_subscriptions_by_topic(params)
                .map(Response::ListSubscriptionsByTopic),
            Request::Publish(params) => self.publish(params).map(Response::Publish),
            Request::PublishBatch(params) => self.publish_batch(params).map(Response::PublishBatch),
            Request::GetTopicAttributes(params) => self
                .get_topic_attributes(params)
                .map(Response::GetTopicAttributes),
            Request::SetTopicAttributes(params) => self
                .set_topic_attributes(params)
                .map(Response::SetTopicAttributes),
            Request::AddPermission(params) => {
                self.add_permission(params).map(Response::AddPermission)
            }
            Request::RemovePermission(params) => self
                .remove_permission(params)
                .map(Response::RemovePermission),
            Request::CreatePlatformApplication(params) => self
                .create_platform_application(params)
                .map(Response::CreatePlatformApplication),
            Request::GetPlatformApplicationAttributes(params) => self
                .get_platform_application_attributes(params)
                .map(Response::GetPlatformApplicationAttributes),
            Request::DeletePlatformApplication(params) => self
                .delete_platform_application(params)
                .map(Response::DeletePlatformApplication),
            Request::ListPlatformApplications(_) => Ok(Response::ListPlatformApplications(
                self.list_platform_applications(),
            )),
            Request::TagResource(params) => self.tag_resource(params).map(Response::TagResource),
            Request::ListTagsForResource(params) => self
                .list_tags_for_resource(params)
                .map(Response::ListTagsForResource),
            _ => Err(ServiceError::new(
                ErrorCode::Other("InvalidAction".to_string()),
                "Action not supported",
            )),
        };

        match response {
            Ok(response) => Ok(Reply::new(response, ResponseMetadata::new(request_id))),
            Err(fault) => Err(fault.with_request_id(request_id).into()),
        }
    }
}

fn required<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, ServiceError> {
    value.ok_or_else(|| invalid(message))
}

fn topic_name(arn: &str) -> Result<String, ServiceError> {
    Arn::parse(arn)
        .map(|arn| arn.topic_name().to_string())
        .ok_or_else(|| invalid("Invalid ARN"))
}

fn invalid(message: &str) -> ServiceError {
    ServiceError::new(ErrorCode::InvalidParameter, message)
}

fn not_found(message: &str) -> ServiceError {
    ServiceError::new(ErrorCode::NotFound, message)
}
