use async_trait::async_trait;

use crate::error::Error;
use crate::model::ResponseMetadata;
use crate::operation::{Request, Response};

/// What a transport hands back for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub response: Response,
    pub metadata: ResponseMetadata,
}

impl Reply {
    pub fn new(response: Response, metadata: ResponseMetadata) -> Self {
        Self { response, metadata }
    }
}

/// Carries a request to the service and brings back its reply.
///
/// Encoding, signing and retries all belong to the implementation. A fault
/// returned by the service must come back as [`Error::Service`]; a call that
/// never got an answer (connection, encoding or I/O failure) comes back as
/// [`Error::Transport`] wrapping the cause.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn invoke(&self, request: Request) -> Result<Reply, Error>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn invoke(&self, request: Request) -> Result<Reply, Error> {
        (**self).invoke(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn invoke(&self, request: Request) -> Result<Reply, Error> {
        (**self).invoke(request).await
    }
}
