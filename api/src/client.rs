use std::rc::Rc;

use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{ApiConfig, ApiError, CredentialStore};

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Shared HTTP client. Cheap to clone; all clones share the credential store.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    credentials: Rc<dyn CredentialStore>,
}

impl ApiClient {
    /// `config` must already be absolute (see [`ApiConfig::resolve`]).
    pub fn new(config: ApiConfig, credentials: Rc<dyn CredentialStore>) -> Self {
        Self {
            http: Client::new(),
            config,
            credentials,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn credentials(&self) -> Rc<dyn CredentialStore> {
        self.credentials.clone()
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let request = self.http.get(self.config.endpoint(path)).query(query);
        self.send(request).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(self.config.endpoint(path)).json(body);
        self.send(request).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.put(self.config.endpoint(path)).json(body);
        self.send(request).await
    }

    pub(crate) async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.patch(self.config.endpoint(path)).json(body);
        self.send(request).await
    }

    /// DELETE whose response body is not needed.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.http.delete(self.config.endpoint(path));
        self.dispatch(request).await.map(|_| ())
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.dispatch(request).await?;
        let envelope: Envelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    async fn dispatch(&self, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let request = match self.credentials.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "api response");

        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        warn!(status = status.as_u16(), ?message, "api request rejected");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
