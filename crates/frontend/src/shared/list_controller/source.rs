use contracts::shared::list_query::{ErrorEnvelope, ListResult, ListScreen, QueryRequest};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::api_utils::query_url;

/// Ошибка загрузки страницы списка
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Ошибка сети: {0}")]
    Network(String),

    #[error("Ошибка сервера ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Некорректный ответ сервера: {0}")]
    Decode(String),
}

/// Откуда контроллер списка берёт страницы
#[allow(async_fn_in_trait)]
pub trait ListSource<T> {
    async fn fetch(&self, request: &QueryRequest) -> Result<ListResult<T>, FetchError>;
}

/// Списочный endpoint backend'а
#[derive(Debug, Clone, Copy)]
pub struct HttpListSource {
    endpoint: &'static str,
}

impl HttpListSource {
    pub fn new(endpoint: &'static str) -> Self {
        Self { endpoint }
    }

    pub fn for_screen(screen: &'static ListScreen) -> Self {
        Self::new(screen.endpoint)
    }

    pub fn url(&self, request: &QueryRequest) -> String {
        query_url(self.endpoint, request)
    }
}

impl<T: DeserializeOwned> ListSource<T> for HttpListSource {
    async fn fetch(&self, request: &QueryRequest) -> Result<ListResult<T>, FetchError> {
        let url = self.url(request);
        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, must-revalidate")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let status_text = response.status_text();
            let message = match response.json::<ErrorEnvelope>().await {
                Ok(envelope) => envelope.message,
                Err(_) => status_text,
            };
            return Err(FetchError::Server { status, message });
        }

        response
            .json::<ListResult<T>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
