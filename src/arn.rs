use std::fmt;

/// The parts of an ARN such as `arn:aws:sns:us-east-1:000000000000:orders`.
///
/// Nothing is validated beyond the number of `:` separated parts; the
/// service stays the judge of what a valid identifier is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arn {
    pub partition: String,
    pub service: String,
    pub region: String,
    pub account: String,
    /// Everything after the account, colons included. For a subscription this
    /// is `topic:subscription-id`.
    pub resource: String,
}

impl Arn {
    pub fn parse(value: &str) -> Option<Arn> {
        let mut parts = value.splitn(6, ':');
        if parts.next()? != "arn" {
            return None;
        }
        Some(Arn {
            partition: parts.next()?.to_string(),
            service: parts.next()?.to_string(),
            region: parts.next()?.to_string(),
            account: parts.next()?.to_string(),
            resource: parts.next()?.to_string(),
        })
    }

    pub fn topic(region: &str, account: &str, name: &str) -> Arn {
        Arn {
            partition: "aws".to_string(),
            service: "sns".to_string(),
            region: region.to_string(),
            account: account.to_string(),
            resource: name.to_string(),
        }
    }

    /// The first segment of the resource: the topic name for both topic and
    /// subscription ARNs.
    pub fn topic_name(&self) -> &str {
        self.resource.split(':').next().unwrap_or_default()
    }

    /// Strips the last resource segment, turning a subscription ARN into the
    /// ARN of its topic.
    pub fn parent(&self) -> Option<Arn> {
        let (parent, _) = self.resource.rsplit_once(':')?;
        Some(Arn {
            resource: parent.to_string(),
            ..self.clone()
        })
    }
}

impl fmt::Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}",
            self.partition, self.service, self.region, self.account, self.resource
        )
    }
}
