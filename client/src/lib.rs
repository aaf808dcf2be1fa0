pub use auction_api_types as api_types;
use {
    auction_api_types::{
        auction::{
            self,
            CreateAuction,
        },
        AccessLevel,
        ErrorBodyResponse,
        RouteTrait,
    },
    reqwest::Response,
    serde::Serialize,
    url::Url,
};

/// Header carrying the pre-encoded identity payload the auction service
/// expects on authenticated routes.
pub const AUTH_HEADER: &str = "x-jwt-payload";

#[derive(Clone)]
pub struct Client {
    http_url:   Url,
    auth_token: Option<String>,
    client:     reqwest::Client,
}

pub struct ClientConfig {
    pub http_url:   String,
    pub auth_token: Option<String>,
}

#[derive(Debug)]
pub enum ClientError {
    InvalidHttpUrl(String),
    RequestFailed(reqwest::Error),
    RequestError(String),
    DecodeResponseFailed(reqwest::Error),
    AuthenticationRequired,
}

impl Client {
    async fn decode(response: Response) -> Result<(), ClientError> {
        if response.status().is_success() {
            return Ok(());
        }
        match response.json::<ErrorBodyResponse>().await {
            Ok(body) => Err(ClientError::RequestError(body.error)),
            Err(e) => Err(ClientError::DecodeResponseFailed(e)),
        }
    }

    async fn send<T: Serialize>(
        &self,
        route: impl RouteTrait,
        body: Option<T>,
    ) -> Result<(), ClientError> {
        if self.auth_token.is_none() && route.access_level() != AccessLevel::Public {
            return Err(ClientError::AuthenticationRequired);
        }

        let url = self
            .http_url
            .join(route.full_path().as_str())
            .map_err(|e| ClientError::InvalidHttpUrl(e.to_string()))?;
        let mut request = self.client.request(route.method(), url);
        if let Some(token) = &self.auth_token {
            request = request.header(AUTH_HEADER, token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await.map_err(ClientError::RequestFailed)?;
        Client::decode(response).await
    }

    pub fn try_new(config: ClientConfig) -> Result<Self, ClientError> {
        let http_url = Url::parse(config.http_url.as_str())
            .map_err(|e| ClientError::InvalidHttpUrl(e.to_string()))?;

        if http_url.scheme() != "http" && http_url.scheme() != "https" {
            return Err(ClientError::InvalidHttpUrl("Invalid scheme".to_string()));
        }

        Ok(Self {
            http_url,
            auth_token: config.auth_token,
            client: reqwest::Client::new(),
        })
    }

    /// Creates an auction. The service's success body is not interpreted;
    /// failures surface the service's error message when one is present.
    pub async fn create_auction(&self, auction: CreateAuction) -> Result<(), ClientError> {
        self.send(auction::Route::CreateAuction, Some(auction)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(http_url: &str, auth_token: Option<&str>) -> Result<Client, ClientError> {
        Client::try_new(ClientConfig {
            http_url:   http_url.to_string(),
            auth_token: auth_token.map(str::to_string),
        })
    }

    #[test]
    fn test_try_new_rejects_malformed_url() {
        assert!(matches!(
            client("not a url", None),
            Err(ClientError::InvalidHttpUrl(_))
        ));
    }

    #[test]
    fn test_try_new_rejects_non_http_scheme() {
        assert!(matches!(
            client("ftp://auction-server:9000", None),
            Err(ClientError::InvalidHttpUrl(_))
        ));
        assert!(client("https://auction-server:9000", None).is_ok());
    }

    #[tokio::test]
    async fn test_create_auction_requires_token() {
        let client = client("http://auction-server:9000", None).unwrap();
        let window = api_types::auction::AuctionWindow::starting_at(
            time::OffsetDateTime::now_utc(),
        );
        let auction = CreateAuction::new(window, "Some auction".to_string(), "VAC".to_string());
        assert!(matches!(
            client.create_auction(auction).await,
            Err(ClientError::AuthenticationRequired)
        ));
    }
}
