use crate::model::*;

/// Ties a request type to its action name and its result type.
pub trait Operation: Sized + Send {
    type Output: Send;

    /// The action name as the service spells it, e.g. `CreateTopic`.
    const ACTION: &'static str;

    fn into_request(self) -> Request;

    /// Takes the output out of a reply, or `None` if the reply belongs to a
    /// different operation.
    fn from_response(response: Response) -> Option<Self::Output>;
}

macro_rules! operations {
    ($($action:ident($request:ty) -> $output:ty;)*) => {
        /// A request for any operation.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Request {
            $($action($request),)*
        }

        /// The output of any operation.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Response {
            $($action($output),)*
        }

        impl Request {
            pub fn action(&self) -> &'static str {
                match self {
                    $(Request::$action(_) => stringify!($action),)*
                }
            }
        }

        impl Response {
            pub fn action(&self) -> &'static str {
                match self {
                    $(Response::$action(_) => stringify!($action),)*
                }
            }
        }

        $(
            impl Operation for $request {
                type Output = $output;

                const ACTION: &'static str = stringify!($action);

                fn into_request(self) -> Request {
                    Request::$action(self)
                }

                fn from_response(response: Response) -> Option<$output> {
                    match response {
                        Response::$action(output) => Some(output),
                        _ => None,
                    }
                }
            }

            impl From<$request> for Request {
                fn from(request: $request) -> Self {
                    Request::$action(request)
                }
            }
        )*
    };
}

operations! {
    AddPermission(AddPermissionRequest) -> ();
    CheckIfPhoneNumberIsOptedOut(CheckIfPhoneNumberIsOptedOutRequest) -> CheckIfPhoneNumberIsOptedOutResult;
    ConfirmSubscription(ConfirmSubscriptionRequest) -> ConfirmSubscriptionResult;
    CreatePlatformApplication(CreatePlatformApplicationRequest) -> CreatePlatformApplicationResult;
    CreatePlatformEndpoint(CreatePlatformEndpointRequest) -> CreatePlatformEndpointResult;
    CreateTopic(CreateTopicRequest) -> CreateTopicResult;
    DeleteEndpoint(DeleteEndpointRequest) -> ();
    DeletePlatformApplication(DeletePlatformApplicationRequest) -> ();
    DeleteTopic(DeleteTopicRequest) -> ();
    GetEndpointAttributes(GetEndpointAttributesRequest) -> GetEndpointAttributesResult;
    GetPlatformApplicationAttributes(GetPlatformApplicationAttributesRequest) -> GetPlatformApplicationAttributesResult;
    GetSMSAttributes(GetSMSAttributesRequest) -> GetSMSAttributesResult;
    GetSubscriptionAttributes(GetSubscriptionAttributesRequest) -> GetSubscriptionAttributesResult;
    GetTopicAttributes(GetTopicAttributesRequest) -> GetTopicAttributesResult;
    ListEndpointsByPlatformApplication(ListEndpointsByPlatformApplicationRequest) -> ListEndpointsByPlatformApplicationResult;
    ListPhoneNumbersOptedOut(ListPhoneNumbersOptedOutRequest) -> ListPhoneNumbersOptedOutResult;
    ListPlatformApplications(ListPlatformApplicationsRequest) -> ListPlatformApplicationsResult;
    ListSubscriptions(ListSubscriptionsRequest) -> ListSubscriptionsResult;
    ListSubscriptionsByTopic(ListSubscriptionsByTopicRequest) -> ListSubscriptionsByTopicResult;
    ListTagsForResource(ListTagsForResourceRequest) -> ListTagsForResourceResult;
    ListTopics(ListTopicsRequest) -> ListTopicsResult;
    OptInPhoneNumber(OptInPhoneNumberRequest) -> ();
    Publish(PublishRequest) -> PublishResult;
    PublishBatch(PublishBatchRequest) -> PublishBatchResult;
    RemovePermission(RemovePermissionRequest) -> ();
    SetEndpointAttributes(SetEndpointAttributesRequest) -> ();
    SetPlatformApplicationAttributes(SetPlatformApplicationAttributesRequest) -> ();
    SetSMSAttributes(SetSMSAttributesRequest) -> ();
    SetSubscriptionAttributes(SetSubscriptionAttributesRequest) -> ();
    SetTopicAttributes(SetTopicAttributesRequest) -> ();
    Subscribe(SubscribeRequest) -> SubscribeResult;
    TagResource(TagResourceRequest) -> ();
    Unsubscribe(UnsubscribeRequest) -> ();
    UntagResource(UntagResourceRequest) -> ();
}
