//! A throwaway HTTP registry on 127.0.0.1 for exercising the remote transport

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use crate::registry::RegistryClient;

type Routes = Arc<HashMap<String, (u16, String)>>;

/// Serves fixed responses keyed by request path until dropped.
///
/// Paths without a route answer `404 Not Found`. Every connection is closed
/// after one response.
pub struct HttpRegistry {
    base_url: String,
    server: JoinHandle<()>,
}

impl HttpRegistry {
    /// Bind an ephemeral port and serve `routes` of `(path, status, body)`,
    /// where `path` is relative to the registry base (`registry.json`,
    /// `hooks/use-toggle.json`).
    pub async fn serve(routes: &[(&str, u16, &str)]) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("Failed to bind test registry listener")?;
        let addr = listener.local_addr()?;

        let routes: Routes = Arc::new(
            routes
                .iter()
                .map(|(path, status, body)| (format!("/{path}"), (*status, (*body).to_string())))
                .collect(),
        );

        let server = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let routes = Arc::clone(&routes);
                tokio::spawn(async move {
                    let _ = respond(stream, &routes).await;
                });
            }
        });

        Ok(Self {
            base_url: format!("http://{addr}"),
            server,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Client for this registry that never goes through a system proxy.
    pub fn client(&self) -> Result<RegistryClient> {
        let http = reqwest::Client::builder().no_proxy().build()?;
        Ok(RegistryClient::new(&self.base_url).with_http_client(http))
    }
}

impl Drop for HttpRegistry {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn respond(mut stream: TcpStream, routes: &Routes) -> std::io::Result<()> {
    let mut request = Vec::new();
    let mut chunk = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            return Ok(());
        }
        request.extend_from_slice(&chunk[..read]);
    }

    let head = String::from_utf8_lossy(&request);
    let path = head.split_whitespace().nth(1).unwrap_or("/");
    let (status, body) = routes.get(path).cloned().unwrap_or((404, "not found".to_string()));
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    };

    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}
