//! Homework statuses repository

use async_trait::async_trait;
use hwbot_client::{PracticumClient, Result};
use serde_json::Value;

/// Repository trait for reading homework statuses
#[async_trait]
pub trait HomeworkRepository: Send + Sync {
    /// Fetches the raw statuses payload for homeworks updated since `from_date`
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value>;
}

/// HTTP implementation of HomeworkRepository
pub struct HttpHomeworkRepository {
    client: PracticumClient,
}

impl HttpHomeworkRepository {
    /// Creates a new HTTP homework repository
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HomeworkRepository for HttpHomeworkRepository {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value> {
        self.client.homework_statuses(from_date).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_statuses_passes_cursor() {
        let server = MockServer::start().await;
        let body = json!({"homeworks": [], "current_date": 20});

        Mock::given(method("GET"))
            .and(query_param("from_date", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&server)
            .await;

        let repository = HttpHomeworkRepository::new(PracticumClient::new(server.uri(), "token"));
        assert_eq!(repository.fetch_statuses(10).await.unwrap(), body);
    }
}
