use api_types::{auth, record::ErrorBody};
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Result, TransportError};

/// Thin typed wrapper over the remote ledger service HTTP API.
///
/// The injected [`reqwest::Client`] carries whatever transport policy the
/// host wants (there is none by default: no timeout, no retries). Protected
/// requests attach the supplied token as a bearer credential; the service
/// answers a missing or rejected token with a 401, surfaced like any other
/// non-success status.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Exchanges credentials for a token. The caller stores it in the
    /// session; this client holds no authentication state of its own.
    pub async fn login(&self, email: &str, password: &str) -> Result<String> {
        let payload = auth::Login {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self
            .client
            .post(self.url("auth/login"))
            .json(&payload)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(service_error(resp).await);
        }
        let body = resp.json::<auth::TokenResponse>().await?;
        Ok(body.token)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        token: Option<&str>,
        path: &str,
    ) -> Result<T> {
        let mut req = self.client.get(self.url(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        if resp.status().is_success() {
            return Ok(resp.json::<T>().await?);
        }
        Err(service_error(resp).await)
    }

    pub(crate) async fn post_json_unit<B: Serialize + ?Sized>(
        &self,
        token: Option<&str>,
        path: &str,
        body: &B,
    ) -> Result<()> {
        let mut req = self.client.post(self.url(path)).json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        if resp.status().is_success() {
            return Ok(());
        }
        Err(service_error(resp).await)
    }

    pub(crate) async fn delete_unit(&self, token: Option<&str>, path: &str) -> Result<()> {
        let mut req = self.client.delete(self.url(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        if resp.status().is_success() {
            return Ok(());
        }
        Err(service_error(resp).await)
    }

    pub(crate) async fn get_bytes(&self, token: Option<&str>, path: &str) -> Result<Vec<u8>> {
        let mut req = self.client.get(self.url(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        if !resp.status().is_success() {
            return Err(service_error(resp).await);
        }
        Ok(resp.bytes().await?.to_vec())
    }
}

async fn service_error(resp: reqwest::Response) -> TransportError {
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => "server error".to_string(),
    };
    TransportError::Service { status, message }
}
