use std::collections::{HashSet, VecDeque};
use tokio::sync::mpsc;

use crate::api::{CampsiteClient, NewComment};
use crate::messages::{Msg, Resource};
use crate::model::FetchFailure;

/// Unique identifier for deduplicating requests
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum RequestKey {
    Fetch(Resource),
    /// Writes never deduplicate; each gets its own serial
    Write(u64),
}

/// API request types
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    /// Load one backend collection
    Fetch(Resource),

    /// Create a comment
    PostComment(NewComment),
}

/// Internal message for tracking completed requests
pub(crate) enum InternalMessage {
    Completed(RequestKey),
}

/// API service worker that runs backend requests in the background
pub struct ApiService {
    client: CampsiteClient,
    request_queue: VecDeque<(ApiRequest, RequestKey)>,
    in_flight: HashSet<RequestKey>,
    response_tx: mpsc::UnboundedSender<Msg>,
    completion_tx: mpsc::UnboundedSender<InternalMessage>,
    max_concurrent: usize,
    next_write: u64,
}

impl ApiService {
    pub(crate) fn new(
        client: CampsiteClient,
        response_tx: mpsc::UnboundedSender<Msg>,
        completion_tx: mpsc::UnboundedSender<InternalMessage>,
    ) -> Self {
        Self {
            client,
            request_queue: VecDeque::new(),
            in_flight: HashSet::new(),
            response_tx,
            completion_tx,
            max_concurrent: 4,
            next_write: 0,
        }
    }

    fn key_for(&mut self, request: &ApiRequest) -> RequestKey {
        match request {
            ApiRequest::Fetch(resource) => RequestKey::Fetch(*resource),
            ApiRequest::PostComment(_) => {
                self.next_write += 1;
                RequestKey::Write(self.next_write)
            }
        }
    }

    /// Add a request to the queue; returns false if an identical fetch is pending
    fn enqueue(&mut self, request: ApiRequest) -> bool {
        let key = self.key_for(&request);

        let pending = self.in_flight.contains(&key)
            || self.request_queue.iter().any(|(_, queued)| *queued == key);
        if pending {
            log::debug!("Skipping duplicate request {:?}", key);
            return false;
        }

        self.request_queue.push_back((request, key));
        true
    }

    /// Start queued requests up to the concurrency limit
    fn process_queue(&mut self) {
        while self.in_flight.len() < self.max_concurrent {
            let Some((request, key)) = self.request_queue.pop_front() else {
                return;
            };
            self.in_flight.insert(key.clone());

            let client = self.client.clone();
            let response_tx = self.response_tx.clone();
            let completion_tx = self.completion_tx.clone();

            tokio::spawn(async move {
                let response = Self::execute_request(&client, request).await;
                let _ = response_tx.send(response);
                let _ = completion_tx.send(InternalMessage::Completed(key));
            });
        }
    }

    /// Execute an API request and return the message for the reducer
    async fn execute_request(client: &CampsiteClient, request: ApiRequest) -> Msg {
        match request {
            ApiRequest::Fetch(Resource::Campsites) => {
                Msg::CampsitesLoaded(client.get_campsites().await.map_err(|e| failure(&e)))
            }
            ApiRequest::Fetch(Resource::Comments) => {
                Msg::CommentsLoaded(client.get_comments().await.map_err(|e| failure(&e)))
            }
            ApiRequest::Fetch(Resource::Promotions) => {
                Msg::PromotionsLoaded(client.get_promotions().await.map_err(|e| failure(&e)))
            }
            ApiRequest::Fetch(Resource::Partners) => {
                Msg::PartnersLoaded(client.get_partners().await.map_err(|e| failure(&e)))
            }
            ApiRequest::PostComment(comment) => {
                Msg::CommentPosted(client.post_comment(&comment).await.map_err(|e| failure(&e)))
            }
        }
    }
}

fn failure(error: &anyhow::Error) -> FetchFailure {
    log::warn!("API request failed: {:#}", error);
    FetchFailure::from(error)
}

/// Spawn the API service worker
pub fn spawn_api_service(
    client: CampsiteClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<Msg>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<Msg>();
    let (completion_tx, mut completion_rx) = mpsc::unbounded_channel::<InternalMessage>();

    tokio::spawn(async move {
        let mut service = ApiService::new(client, response_tx, completion_tx);

        loop {
            tokio::select! {
                request = request_rx.recv() => {
                    match request {
                        Some(request) => {
                            service.enqueue(request);
                            service.process_queue();
                        }
                        // All senders dropped: app is shutting down
                        None => break,
                    }
                }

                Some(InternalMessage::Completed(key)) = completion_rx.recv() => {
                    service.in_flight.remove(&key);
                    service.process_queue();
                }
            }
        }
    });

    (request_tx, response_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ApiService {
        let (response_tx, _response_rx) = mpsc::unbounded_channel();
        let (completion_tx, _completion_rx) = mpsc::unbounded_channel();
        ApiService::new(
            CampsiteClient::new("http://127.0.0.1:9/".to_string()),
            response_tx,
            completion_tx,
        )
    }

    fn comment() -> NewComment {
        NewComment {
            campsite_id: 1,
            rating: 5,
            author: "a".to_string(),
            text: "b".to_string(),
            date: "2026-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_duplicate_fetch_is_skipped() {
        let mut service = service();
        assert!(service.enqueue(ApiRequest::Fetch(Resource::Campsites)));
        assert!(!service.enqueue(ApiRequest::Fetch(Resource::Campsites)));
        assert!(service.enqueue(ApiRequest::Fetch(Resource::Comments)));
        assert_eq!(service.request_queue.len(), 2);
    }

    #[test]
    fn test_in_flight_fetch_is_skipped() {
        let mut service = service();
        service.in_flight.insert(RequestKey::Fetch(Resource::Partners));
        assert!(!service.enqueue(ApiRequest::Fetch(Resource::Partners)));
    }

    #[test]
    fn test_writes_never_deduplicate() {
        let mut service = service();
        assert!(service.enqueue(ApiRequest::PostComment(comment())));
        assert!(service.enqueue(ApiRequest::PostComment(comment())));
        assert_eq!(service.request_queue.len(), 2);
    }
}
