use std::fmt;

use serde::{Deserialize, Serialize};

shape! {
    /// A key/value label attached to a topic.
    pub struct Tag {
        key: text = "Key" { set_key, with_key },
        value: text = "Value" { set_value, with_value },
    }
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::default().with_key(key).with_value(value)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Tag {
    fn from((key, value): (K, V)) -> Self {
        Tag::new(key, value)
    }
}

pub mod data_type {
    pub const STRING: &str = "String";
    pub const STRING_ARRAY: &str = "String.Array";
    pub const NUMBER: &str = "Number";
    pub const BINARY: &str = "Binary";
}

/// The typed value of one message attribute.
///
/// `data_type` is one of the [`data_type`] names, optionally followed by a
/// custom suffix (`"Number.float"`). Either `string_value` or `binary_value`
/// carries the payload; nothing here checks that they agree with the type.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageAttributeValue {
    #[serde(rename = "DataType", default, skip_serializing_if = "Option::is_none")]
    data_type: Option<String>,
    #[serde(rename = "StringValue", default, skip_serializing_if = "Option::is_none")]
    string_value: Option<String>,
    #[serde(rename = "BinaryValue", default, skip_serializing_if = "Option::is_none")]
    binary_value: Option<Vec<u8>>,
}

impl MessageAttributeValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self::default()
            .with_data_type(data_type::STRING)
            .with_string_value(value)
    }

    /// Numbers travel as strings; the service parses them.
    pub fn number(value: impl ToString) -> Self {
        Self::default()
            .with_data_type(data_type::NUMBER)
            .with_string_value(value.to_string())
    }

    pub fn binary(value: impl Into<Vec<u8>>) -> Self {
        Self::default()
            .with_data_type(data_type::BINARY)
            .with_binary_value(value)
    }

    /// Renders `values` as the JSON array the service expects.
    pub fn string_array<I, S>(values: I) -> Result<Self, serde_json::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        Ok(Self::default()
            .with_data_type(data_type::STRING_ARRAY)
            .with_string_value(serde_json::to_string(&values)?))
    }

    pub fn data_type(&self) -> Option<&str> {
        self.data_type.as_deref()
    }

    pub fn set_data_type(&mut self, value: Option<String>) -> &mut Self {
        self.data_type = value;
        self
    }

    pub fn with_data_type(mut self, value: impl Into<String>) -> Self {
        self.data_type = Some(value.into());
        self
    }

    pub fn string_value(&self) -> Option<&str> {
        self.string_value.as_deref()
    }

    pub fn set_string_value(&mut self, value: Option<String>) -> &mut Self {
        self.string_value = value;
        self
    }

    pub fn with_string_value(mut self, value: impl Into<String>) -> Self {
        self.string_value = Some(value.into());
        self
    }

    pub fn binary_value(&self) -> Option<&[u8]> {
        self.binary_value.as_deref()
    }

    pub fn set_binary_value(&mut self, value: Option<Vec<u8>>) -> &mut Self {
        self.binary_value = value;
        self
    }

    pub fn with_binary_value(mut self, value: impl Into<Vec<u8>>) -> Self {
        self.binary_value = Some(value.into());
        self
    }
}

impl From<&str> for MessageAttributeValue {
    fn from(value: &str) -> Self {
        MessageAttributeValue::string(value)
    }
}

impl From<String> for MessageAttributeValue {
    fn from(value: String) -> Self {
        MessageAttributeValue::string(value)
    }
}

impl fmt::Debug for MessageAttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("MessageAttributeValue");
        if let Some(data_type) = &self.data_type {
            out.field("data_type", data_type);
        }
        if let Some(string_value) = &self.string_value {
            out.field("string_value", string_value);
        }
        if let Some(binary_value) = &self.binary_value {
            out.field("binary_value", &format_args!("<{} bytes>", binary_value.len()));
        }
        out.finish()
    }
}

/// Metadata the service attaches to every reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseMetadata {
    pub request_id: String,
}

impl ResponseMetadata {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}
