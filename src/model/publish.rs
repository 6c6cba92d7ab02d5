use std::collections::BTreeMap;

use super::common::MessageAttributeValue;
use crate::error::Error;

/// `MessageStructure` value selecting per-protocol message bodies.
pub const JSON_MESSAGE_STRUCTURE: &str = "json";

/// Key of the fallback body in a per-protocol message document.
pub const DEFAULT_PROTOCOL_KEY: &str = "default";

shape! {
    /// Sends a message to a topic, a mobile endpoint or a phone number.
    ///
    /// Exactly one of `topic_arn`, `target_arn` and `phone_number` should be
    /// set; the service rejects anything else.
    pub struct PublishRequest {
        topic_arn: text = "TopicArn" { set_topic_arn, with_topic_arn },
        target_arn: text = "TargetArn" { set_target_arn, with_target_arn },
        /// E.164 number for direct SMS.
        phone_number: text = "PhoneNumber" { set_phone_number, with_phone_number },
        message: text = "Message" { set_message, with_message },
        /// Used as the email subject line.
        subject: text = "Subject" { set_subject, with_subject },
        message_structure: text = "MessageStructure" { set_message_structure, with_message_structure },
        message_attributes: map(MessageAttributeValue) = "MessageAttributes" {
            set_message_attributes, with_message_attributes, message_attributes_mut,
            add_message_attributes_entry, clear_message_attributes_entries
        },
        /// FIFO topics only.
        message_deduplication_id: text = "MessageDeduplicationId" {
            set_message_deduplication_id, with_message_deduplication_id
        },
        /// FIFO topics only.
        message_group_id: text = "MessageGroupId" { set_message_group_id, with_message_group_id },
    }
}

impl PublishRequest {
    pub fn new(topic_arn: impl Into<String>, message: impl Into<String>) -> Self {
        Self::default().with_topic_arn(topic_arn).with_message(message)
    }

    /// Sets a different body per protocol and switches the structure to
    /// `json`. The service requires a [`DEFAULT_PROTOCOL_KEY`] entry.
    pub fn with_protocol_messages<K, V>(
        self,
        messages: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let document = render_protocol_messages(messages)?;
        Ok(self
            .with_message(document)
            .with_message_structure(JSON_MESSAGE_STRUCTURE))
    }
}

fn render_protocol_messages<K, V>(
    messages: impl IntoIterator<Item = (K, V)>,
) -> Result<String, Error>
where
    K: Into<String>,
    V: Into<String>,
{
    let messages: BTreeMap<String, String> = messages
        .into_iter()
        .map(|(protocol, body)| (protocol.into(), body.into()))
        .collect();
    if !messages.contains_key(DEFAULT_PROTOCOL_KEY) {
        tracing::debug!("per-protocol message document has no default body");
    }
    Ok(serde_json::to_string(&messages)?)
}

shape! {
    pub struct PublishResult {
        message_id: text = "MessageId" { set_message_id, with_message_id },
        /// FIFO topics only.
        sequence_number: text = "SequenceNumber" { set_sequence_number, with_sequence_number },
    }
}

shape! {
    /// Publishes up to ten messages to one topic.
    pub struct PublishBatchRequest {
        topic_arn: text = "TopicArn" { set_topic_arn, with_topic_arn },
        /// Results are reported per entry `id`.
        publish_batch_request_entries: list(PublishBatchRequestEntry) = "PublishBatchRequestEntries" {
            set_publish_batch_request_entries, with_publish_batch_request_entries,
            publish_batch_request_entries_mut, push_publish_batch_request_entries
        },
    }
}

impl PublishBatchRequest {
    pub fn new(topic_arn: impl Into<String>) -> Self {
        Self::default().with_topic_arn(topic_arn)
    }
}

shape! {
    pub struct PublishBatchRequestEntry {
        /// Unique within the batch.
        id: text = "Id" { set_id, with_id },
        message: text = "Message" { set_message, with_message },
        subject: text = "Subject" { set_subject, with_subject },
        message_structure: text = "MessageStructure" { set_message_structure, with_message_structure },
        message_attributes: map(MessageAttributeValue) = "MessageAttributes" {
            set_message_attributes, with_message_attributes, message_attributes_mut,
            add_message_attributes_entry, clear_message_attributes_entries
        },
        message_deduplication_id: text = "MessageDeduplicationId" {
            set_message_deduplication_id, with_message_deduplication_id
        },
        message_group_id: text = "MessageGroupId" { set_message_group_id, with_message_group_id },
    }
}

impl PublishBatchRequestEntry {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::default().with_id(id).with_message(message)
    }

    pub fn with_protocol_messages<K, V>(
        self,
        messages: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let document = render_protocol_messages(messages)?;
        Ok(self
            .with_message(document)
            .with_message_structure(JSON_MESSAGE_STRUCTURE))
    }
}

shape! {
    pub struct PublishBatchResult {
        successful: list(PublishBatchResultEntry) = "Successful" {
            set_successful, with_successful, successful_mut, push_successful
        },
        failed: list(BatchResultErrorEntry) = "Failed" {
            set_failed, with_failed, failed_mut, push_failed
        },
    }
}

shape! {
    pub struct PublishBatchResultEntry {
        id: text = "Id" { set_id, with_id },
        message_id: text = "MessageId" { set_message_id, with_message_id },
        sequence_number: text = "SequenceNumber" { set_sequence_number, with_sequence_number },
    }
}

shape! {
    /// Why one batch entry was not published.
    pub struct BatchResultErrorEntry {
        id: text = "Id" { set_id, with_id },
        code: text = "Code" { set_code, with_code },
        message: text = "Message" { set_message, with_message },
        /// Whether the caller, rather than the service, caused the failure.
        sender_fault: flag = "SenderFault" { set_sender_fault, with_sender_fault },
    }
}
