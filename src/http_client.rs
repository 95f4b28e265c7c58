//! Outbound HTTP client for the knowledge API
//!
//! A plain `reqwest` client wrapped in `reqwest-middleware` so every call is
//! logged with its status and latency. Failed calls are not retried.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Middleware, Next};
use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::{Result, TravelError};

/// Calls slower than this are logged at warn level
const SLOW_CALL: Duration = Duration::from_secs(5);

/// Logs method, URL, status and elapsed time of each outbound request
pub struct RequestLogger;

#[async_trait]
impl Middleware for RequestLogger {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let method = req.method().clone();
        let url = req.url().clone();
        let start = Instant::now();

        let result = next.run(req, extensions).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(response) => {
                debug!(
                    "{method} {url} -> {} in {:.3}s",
                    response.status(),
                    elapsed.as_secs_f64()
                );
                if elapsed > SLOW_CALL {
                    warn!("Slow knowledge API response: {:.3}s", elapsed.as_secs_f64());
                }
            }
            Err(e) => warn!(
                "{method} {url} failed after {:.3}s: {e}",
                elapsed.as_secs_f64()
            ),
        }

        result
    }
}

/// Build the shared client: fixed User-Agent, optional timeout, request logging
pub fn build_client(config: &SearchConfig) -> Result<ClientWithMiddleware> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
    if let Some(seconds) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }

    let client = builder
        .build()
        .map_err(|e| TravelError::config(format!("Failed to create HTTP client: {e}")))?;

    Ok(ClientBuilder::new(client).with(RequestLogger).build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_with_defaults() {
        assert!(build_client(&SearchConfig::default()).is_ok());
    }

    #[test]
    fn test_build_client_with_timeout() {
        let config = SearchConfig {
            timeout_seconds: Some(15),
            ..SearchConfig::default()
        };
        assert!(build_client(&config).is_ok());
    }
}
