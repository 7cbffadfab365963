//! HTTP prober backed by reqwest

use async_trait::async_trait;
use reqwest::{redirect, Client};

use super::{Prober, UrlTemplate};
use crate::error::{Result, SweepError};

/// Issues one GET per handle and keeps only the status code
///
/// Redirects are not followed: the service answers suspended profiles with
/// a 302, which must reach the classifier as-is. No timeout is set.
pub struct HttpProber {
    client: Client,
    template: UrlTemplate,
}

impl HttpProber {
    pub fn new(template: UrlTemplate) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("name-sweep/", env!("CARGO_PKG_VERSION")))
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| SweepError::network(e.to_string(), None))?;

        Ok(Self { client, template })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, name: &str) -> Result<u16> {
        let url = self.template.render(name);
        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::debug!(name = %name, url = %url, error = %e, "Probe failed");
            SweepError::from(e)
        })?;

        let status = response.status().as_u16();
        tracing::debug!(name = %name, status, "Probe completed");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned response per connection and return the bound address
    async fn serve(status_line: &'static str, connections: usize) -> std::net::SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            for _ in 0..connections {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 {}\r\nLocation: /account/suspended\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                    status_line
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        addr
    }

    #[tokio::test]
    async fn test_redirect_is_not_followed() {
        let addr = serve("302 Found", 1).await;
        let template = UrlTemplate::new(format!("http://{}/{{name}}", addr)).unwrap();
        let prober = HttpProber::new(template).unwrap();
        assert_eq!(prober.probe("A").await.unwrap(), 302);
    }

    #[tokio::test]
    async fn test_status_passthrough() {
        let addr = serve("404 Not Found", 1).await;
        let template = UrlTemplate::new(format!("http://{}/{{name}}", addr)).unwrap();
        let prober = HttpProber::new(template).unwrap();
        assert_eq!(prober.probe("ZZ").await.unwrap(), 404);
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let template = UrlTemplate::new(format!("http://{}/{{name}}", addr)).unwrap();
        let prober = HttpProber::new(template).unwrap();
        let err = prober.probe("A").await.unwrap_err();
        assert!(matches!(err, SweepError::Network { .. }));
    }
}
