//! Raw HTTP client for the Sourcify repository and server endpoints.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use veristats_core::{Chain, ChainId, ChainRegistry, StatsSnapshot, VeristatsError};

/// Repository host serving the aggregate `stats.json` document.
pub const DEFAULT_REPO_URL: &str = "https://repo.sourcify.dev/";
/// Server host exposing the chain listing.
pub const DEFAULT_SERVER_URL: &str = "https://sourcify.dev/server/";

const CONNECTOR: &str = "veristats-sourcify";

/// One entry of the server's chain listing.
///
/// The listing carries more fields than we consume; unknown fields are
/// ignored on deserialization.
#[derive(Debug, Deserialize)]
struct RawChain {
    #[serde(rename = "chainId")]
    chain_id: ChainId,
    name: Option<String>,
    title: String,
}

/// Thin HTTP client over the two Sourcify endpoints the connector consumes.
#[derive(Debug, Clone)]
pub struct SourcifyClient {
    http: reqwest::Client,
    repo_url: Url,
    server_url: Url,
}

/// Builder for a [`SourcifyClient`] with overridable endpoints.
#[derive(Debug, Default)]
pub struct SourcifyClientBuilder {
    http: Option<reqwest::Client>,
    repo_url: Option<String>,
    server_url: Option<String>,
}

impl SourcifyClientBuilder {
    /// Use a caller-provided `reqwest::Client` instead of a fresh one.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Override the repository base URL (the host serving `stats.json`).
    #[must_use]
    pub fn repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into());
        self
    }

    /// Override the server base URL (the host serving the chain listing).
    #[must_use]
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `InvalidArg` if an overridden base URL does not parse.
    pub fn build(self) -> Result<SourcifyClient, VeristatsError> {
        let repo_url = match self.repo_url.as_deref() {
            Some(raw) => parse_base(raw)?,
            None => default_base(DEFAULT_REPO_URL),
        };
        let server_url = match self.server_url.as_deref() {
            Some(raw) => parse_base(raw)?,
            None => default_base(DEFAULT_SERVER_URL),
        };
        Ok(SourcifyClient {
            http: self.http.unwrap_or_default(),
            repo_url,
            server_url,
        })
    }
}

fn default_base(raw: &'static str) -> Url {
    Url::parse(raw).expect("default base url is valid")
}

/// Parse a base URL, ensuring a trailing slash so endpoint joins append
/// instead of replacing the last path segment.
fn parse_base(raw: &str) -> Result<Url, VeristatsError> {
    let normalized = if raw.ends_with('/') {
        raw.to_owned()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized)
        .map_err(|e| VeristatsError::InvalidArg(format!("invalid base url {raw:?}: {e}")))
}

impl SourcifyClient {
    /// Client against the public Sourcify endpoints with a fresh HTTP client.
    #[must_use]
    pub fn new_default() -> Self {
        Self {
            http: reqwest::Client::new(),
            repo_url: default_base(DEFAULT_REPO_URL),
            server_url: default_base(DEFAULT_SERVER_URL),
        }
    }

    /// Start building a client with custom endpoints or HTTP client.
    #[must_use]
    pub fn builder() -> SourcifyClientBuilder {
        SourcifyClientBuilder::default()
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T, VeristatsError> {
        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| VeristatsError::connector(CONNECTOR, format!("GET {url}: {e}")))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(VeristatsError::not_found(what.to_string()));
        }
        let resp = resp
            .error_for_status()
            .map_err(|e| VeristatsError::connector(CONNECTOR, e.to_string()))?;

        resp.json::<T>()
            .await
            .map_err(|e| VeristatsError::Data(format!("{what}: {e}")))
    }

    /// Fetch the aggregate verification count snapshot.
    ///
    /// # Errors
    /// `Connector` on transport or HTTP-status failure, `NotFound` when the
    /// document is missing, `Data` when the body does not match the
    /// snapshot shape.
    pub async fn stats(&self) -> Result<StatsSnapshot, VeristatsError> {
        let url = endpoint(&self.repo_url, "stats.json")?;
        self.get_json(url, "stats document").await
    }

    /// Fetch the chain listing and fold it into a registry, preserving the
    /// server's ordering as the known-chain order.
    ///
    /// # Errors
    /// Same taxonomy as [`stats`](Self::stats).
    pub async fn chains(&self) -> Result<ChainRegistry, VeristatsError> {
        let url = endpoint(&self.server_url, "chains")?;
        let raw: Vec<RawChain> = self.get_json(url, "chain listing").await?;
        Ok(raw
            .into_iter()
            .map(|c| Chain {
                id: c.chain_id,
                name: c.name,
                title: c.title,
            })
            .collect())
    }
}

fn endpoint(base: &Url, path: &str) -> Result<Url, VeristatsError> {
    base.join(path)
        .map_err(|e| VeristatsError::InvalidArg(format!("invalid endpoint {path:?}: {e}")))
}
