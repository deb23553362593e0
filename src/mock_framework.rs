//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_list`] or [`expect_update`] to assert behavior.

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response, UpdateOutcome};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends into a channel the test owns instead of a running
/// `ResourceActor`, so each reply (success, failure, dropped responder)
/// is chosen by the test.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<Response<Vec<T>, T::Error>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Patch, Response<UpdateOutcome<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { patch, respond_to }) => Some((patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Clear request
pub async fn expect_clear<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<Response<(), T::Error>> {
    match receiver.recv().await {
        Some(ResourceRequest::Clear { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::CartClient;
    use crate::domain::seed_items;

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client(10);
        let client = CartClient::new(inner);

        let list_task = tokio::spawn(async move { client.get_items().await });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        responder.send(Ok(seed_items())).unwrap();

        let result = list_task.await.unwrap();
        assert_eq!(result.map(|items| items.len()), Ok(4));
    }
}
