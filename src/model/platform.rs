//! Mobile push: platform applications (APNS, FCM, ...) and the device
//! endpoints registered under them.

shape! {
    pub struct CreatePlatformApplicationRequest {
        name: text = "Name" { set_name, with_name },
        /// `ADM`, `APNS`, `APNS_SANDBOX`, `GCM`, `BAIDU`, `MPNS` or `WNS`.
        platform: text = "Platform" { set_platform, with_platform },
        /// Must carry the platform credential and principal, see
        /// [`crate::attributes::platform_application`].
        attributes: map(String) = "Attributes" {
            set_attributes, with_attributes, attributes_mut,
            add_attributes_entry, clear_attributes_entries
        },
    }
}

shape! {
    pub struct CreatePlatformApplicationResult {
        platform_application_arn: text = "PlatformApplicationArn" {
            set_platform_application_arn, with_platform_application_arn
        },
    }
}

shape! {
    pub struct DeletePlatformApplicationRequest {
        platform_application_arn: text = "PlatformApplicationArn" {
            set_platform_application_arn, with_platform_application_arn
        },
    }
}

shape! {
    pub struct GetPlatformApplicationAttributesRequest {
        platform_application_arn: text = "PlatformApplicationArn" {
            set_platform_application_arn, with_platform_application_arn
        },
    }
}

shape! {
    pub struct GetPlatformApplicationAttributesResult {
        attributes: map(String) = "Attributes" {
            set_attributes, with_attributes, attributes_mut,
            add_attributes_entry, clear_attributes_entries
        },
    }
}

shape! {
    pub struct SetPlatformApplicationAttributesRequest {
        platform_application_arn: text = "PlatformApplicationArn" {
            set_platform_application_arn, with_platform_application_arn
        },
        attributes: map(String) = "Attributes" {
            set_attributes, with_attributes, attributes_mut,
            add_attributes_entry, clear_attributes_entries
        },
    }
}

shape! {
    pub struct ListPlatformApplicationsRequest {
        next_token: text = "NextToken" { set_next_token, with_next_token },
    }
}

shape! {
    pub struct ListPlatformApplicationsResult {
        platform_applications: list(PlatformApplication) = "PlatformApplications" {
            set_platform_applications, with_platform_applications,
            platform_applications_mut, push_platform_applications
        },
        next_token: text = "NextToken" { set_next_token, with_next_token },
    }
}

shape! {
    pub struct PlatformApplication {
        platform_application_arn: text = "PlatformApplicationArn" {
            set_platform_application_arn, with_platform_application_arn
        },
        attributes: map(String) = "Attributes" {
            set_attributes, with_attributes, attributes_mut,
            add_attributes_entry, clear_attributes_entries
        },
    }
}

shape! {
    /// Registers a device token under a platform application.
    pub struct CreatePlatformEndpointRequest {
        platform_application_arn: text = "PlatformApplicationArn" {
            set_platform_application_arn, with_platform_application_arn
        },
        /// Device token or registration id issued by the push platform.
        token: text = "Token" { set_token, with_token },
        /// Arbitrary data kept with the endpoint, up to 2KB of UTF-8.
        custom_user_data: text = "CustomUserData" { set_custom_user_data, with_custom_user_data },
        attributes: map(String) = "Attributes" {
            set_attributes, with_attributes, attributes_mut,
            add_attributes_entry, clear_attributes_entries
        },
    }
}

shape! {
    pub struct CreatePlatformEndpointResult {
        endpoint_arn: text = "EndpointArn" { set_endpoint_arn, with_endpoint_arn },
    }
}

shape! {
    pub struct DeleteEndpointRequest {
        endpoint_arn: text = "EndpointArn" { set_endpoint_arn, with_endpoint_arn },
    }
}

impl DeleteEndpointRequest {
    pub fn new(endpoint_arn: impl Into<String>) -> Self {
        Self::default().with_endpoint_arn(endpoint_arn)
    }
}

shape! {
    pub struct GetEndpointAttributesRequest {
        endpoint_arn: text = "EndpointArn" { set_endpoint_arn, with_endpoint_arn },
    }
}

shape! {
    pub struct GetEndpointAttributesResult {
        attributes: map(String) = "Attributes" {
            set_attributes, with_attributes, attributes_mut,
            add_attributes_entry, clear_attributes_entries
        },
    }
}

shape! {
    pub struct SetEndpointAttributesRequest {
        endpoint_arn: text = "EndpointArn" { set_endpoint_arn, with_endpoint_arn },
        attributes: map(String) = "Attributes" {
            set_attributes, with_attributes, attributes_mut,
            add_attributes_entry, clear_attributes_entries
        },
    }
}

shape! {
    pub struct ListEndpointsByPlatformApplicationRequest {
        platform_application_arn: text = "PlatformApplicationArn" {
            set_platform_application_arn, with_platform_application_arn
        },
        next_token: text = "NextToken" { set_next_token, with_next_token },
    }
}

shape! {
    pub struct ListEndpointsByPlatformApplicationResult {
        endpoints: list(Endpoint) = "Endpoints" {
            set_endpoints, with_endpoints, endpoints_mut, push_endpoints
        },
        next_token: text = "NextToken" { set_next_token, with_next_token },
    }
}

shape! {
    /// A device endpoint and its attributes.
    pub struct Endpoint {
        endpoint_arn: text = "EndpointArn" { set_endpoint_arn, with_endpoint_arn },
        attributes: map(String) = "Attributes" {
            set_attributes, with_attributes, attributes_mut,
            add_attributes_entry, clear_attributes_entries
        },
    }
}
