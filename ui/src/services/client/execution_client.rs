use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};
use tracing::{error, info, instrument};

use super::errors::{ClientError, ClientResult};
use super::traits::ExecutionTransport;
use super::types::{ExecutionFailure, ExecutionResponse, ResponseBody};
use crate::features::execution::ExecutionRequest;
use crate::services::config::AdminConfig;

/// Browser client for the execution admin endpoints
#[derive(Clone)]
pub struct ExecutionClient {
    pub(crate) http_client: Client,
    pub(crate) base_url: Url,
    pub(crate) endpoint_prefix: String,
    pub(crate) content_type: String,
}

impl ExecutionClient {
    /// Create a client that resolves endpoints the way the admin page would
    pub fn new(config: &AdminConfig) -> ClientResult<Self> {
        let base_url = config.resolve_base_url()?;
        Self::with_base_url(config, base_url)
    }

    pub fn with_base_url(config: &AdminConfig, base_url: Url) -> ClientResult<Self> {
        let http_client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ClientError::ClientSetup {
                message: e.to_string(),
            })?;

        info!("Execution client ready, endpoints resolve against {}", base_url);

        Ok(Self {
            http_client,
            base_url,
            endpoint_prefix: config.endpoint_prefix.clone(),
            content_type: config.content_type.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl ExecutionTransport for ExecutionClient {
    #[instrument(skip(self, request), fields(endpoint = request.endpoint.name()))]
    async fn send(&self, request: &ExecutionRequest) -> Result<ExecutionResponse, ExecutionFailure> {
        let url = request.url(&self.base_url, &self.endpoint_prefix)?;
        info!("{} {}", request.method(), url);

        let mut builder = self
            .http_client
            .request(request.method(), url)
            .header(CONTENT_TYPE, self.content_type.as_str());
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(|e| {
            error!("Execution request failed: {}", e);
            ExecutionFailure::network(format!("Request failed: {}", e))
        })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let raw = response.text().await.map_err(|e| {
            error!("Failed to read execution response body: {}", e);
            ExecutionFailure::network(format!("Failed to read response: {}", e))
        })?;

        classify(status, content_type.as_deref(), raw)
    }
}

/// Sort a completed exchange into success or one of the failure kinds.
///
/// Non-2xx is an HTTP failure. A 2xx body declared as JSON must parse, except
/// on 204 where there is no body to parse.
fn classify(
    status: StatusCode,
    content_type: Option<&str>,
    raw: String,
) -> Result<ExecutionResponse, ExecutionFailure> {
    if !status.is_success() {
        error!("Execution endpoint answered {}", status);
        return Err(ExecutionFailure::http(
            status.as_u16(),
            status.canonical_reason().unwrap_or("HTTP error"),
            Some(raw),
        ));
    }

    if status == StatusCode::NO_CONTENT {
        info!("Execution endpoint answered {}", status);
        return Ok(ExecutionResponse::new(status.as_u16(), ResponseBody::Text(raw)));
    }

    match ResponseBody::from_content(content_type, raw.clone()) {
        Ok(body) => {
            info!("Execution endpoint answered {}", status);
            Ok(ExecutionResponse::new(status.as_u16(), body))
        }
        Err(e) => {
            error!("Execution response is not valid JSON: {}", e);
            Err(ExecutionFailure::parse(
                status.as_u16(),
                format!("Invalid JSON response: {}", e),
                raw,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::execution::ExecutionForm;
    use crate::services::client::FailureKind;
    use serde_json::json;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Answer one HTTP request with a canned response; the handle yields the raw request
    fn serve_once(response: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut received = Vec::new();
            let mut chunk = [0u8; 1024];

            loop {
                let read = stream.read(&mut chunk).unwrap();
                received.extend_from_slice(&chunk[..read]);
                let text = String::from_utf8_lossy(&received).to_string();
                if let Some(end) = text.find("\r\n\r\n") {
                    let content_length = text[..end]
                        .lines()
                        .filter_map(|line| line.split_once(':'))
                        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                        .map(|(_, value)| value.trim().parse::<usize>().unwrap())
                        .unwrap_or(0);
                    if received.len() >= end + 4 + content_length {
                        break;
                    }
                }
                if read == 0 {
                    break;
                }
            }

            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            String::from_utf8_lossy(&received).to_string()
        });

        let base = Url::parse(&format!("http://127.0.0.1:{}/admin/execution", port)).unwrap();
        (base, handle)
    }

    fn client_for(base: Url) -> ExecutionClient {
        ExecutionClient::with_base_url(&AdminConfig::default(), base).unwrap()
    }

    fn march_2024() -> ExecutionForm {
        ExecutionForm {
            month: "03".to_string(),
            year: "2024".to_string(),
            ingresos: "1000".to_string(),
            gastos: "500".to_string(),
            inversiones: "0".to_string(),
            ingresos_eliminaciones_bruto: "0".to_string(),
            gastos_eliminaciones_bruto: "0".to_string(),
        }
    }

    #[test]
    fn test_classify_json_success() {
        let response = classify(
            StatusCode::OK,
            Some("application/json"),
            r#"{"status":"loaded"}"#.to_string(),
        )
        .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, ResponseBody::Json(json!({"status": "loaded"})));
    }

    #[test]
    fn test_classify_server_error() {
        let failure = classify(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some("text/plain"),
            "boom".to_string(),
        )
        .unwrap_err();
        assert_eq!(
            failure,
            ExecutionFailure::http(500, "Internal Server Error", Some("boom".to_string()))
        );
    }

    #[test]
    fn test_classify_error_status_wins_over_valid_json() {
        let failure = classify(
            StatusCode::BAD_REQUEST,
            Some("application/json"),
            r#"{"error":"no data"}"#.to_string(),
        )
        .unwrap_err();
        assert_eq!(failure.kind, FailureKind::Http);
        assert_eq!(failure.status, Some(400));
    }

    #[test]
    fn test_classify_unparseable_json() {
        let failure = classify(StatusCode::OK, Some("application/json"), "<html>".to_string())
            .unwrap_err();
        assert_eq!(failure.kind, FailureKind::Parse);
        assert_eq!(failure.status, Some(200));
        assert_eq!(failure.body.as_deref(), Some("<html>"));
    }

    #[test]
    fn test_classify_empty_json_body_fails() {
        let failure = classify(StatusCode::OK, Some("application/json"), String::new()).unwrap_err();
        assert_eq!(failure.kind, FailureKind::Parse);
    }

    #[test]
    fn test_classify_no_content_succeeds() {
        let response = classify(StatusCode::NO_CONTENT, Some("application/json"), String::new())
            .unwrap();
        assert_eq!(response.status, 204);
        assert_eq!(response.body, ResponseBody::Text(String::new()));
    }

    #[test]
    fn test_classify_plain_text_success() {
        let response = classify(StatusCode::OK, Some("text/html"), "<p>ok</p>".to_string()).unwrap();
        assert_eq!(response.body, ResponseBody::Text("<p>ok</p>".to_string()));
    }

    #[tokio::test]
    async fn test_manual_download_server_error() {
        let (base, server) = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Type: text/plain\r\nContent-Length: 4\r\nConnection: close\r\n\r\nboom",
        );
        let request = ExecutionRequest::manual_download(&march_2024()).unwrap();

        let failure = client_for(base).send(&request).await.unwrap_err();
        let received = server.join().unwrap();

        assert_eq!(
            failure,
            ExecutionFailure::http(500, "Internal Server Error", Some("boom".to_string()))
        );
        assert!(received.starts_with(
            "POST /admin/execution/retrieve_manual?month=03&year=2024&scrap=false HTTP/1.1"
        ));
        assert!(received
            .to_ascii_lowercase()
            .contains("content-type: application/json; charset=utf-8"));
        assert!(received.ends_with(
            r#"{"ingresos":"1000","gastos":"500","inversiones":"0","ingresosEliminacionesBruto":"0","gastosEliminacionesBruto":"0"}"#
        ));
    }

    #[tokio::test]
    async fn test_review_sends_json_content_type() {
        let (base, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 15\r\nConnection: close\r\n\r\n{\"status\":\"ok\"}",
        );

        let response = client_for(base).send(&ExecutionRequest::review()).await.unwrap();
        let received = server.join().unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, ResponseBody::Json(json!({"status": "ok"})));
        assert!(received.starts_with("GET /admin/execution/review HTTP/1.1"));
        assert!(received
            .to_ascii_lowercase()
            .contains("content-type: application/json; charset=utf-8"));
    }

    #[tokio::test]
    async fn test_empty_json_response_is_a_parse_failure() {
        let (base, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );

        let failure = client_for(base).send(&ExecutionRequest::load()).await.unwrap_err();
        server.join().unwrap();

        assert_eq!(failure.kind, FailureKind::Parse);
        assert_eq!(failure.status, Some(200));
    }

    #[tokio::test]
    async fn test_refused_connection_is_a_network_failure() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let base = Url::parse(&format!("http://127.0.0.1:{}/admin/execution", port)).unwrap();

        let failure = client_for(base).send(&ExecutionRequest::review()).await.unwrap_err();

        assert_eq!(failure.kind, FailureKind::Network);
        assert_eq!(failure.status, None);
    }

    #[test]
    fn test_client_keeps_config() {
        let config = AdminConfig {
            endpoint_prefix: "payments".to_string(),
            ..AdminConfig::default()
        };
        let base = Url::parse("https://presupuestos.example.org/admin/payments").unwrap();
        let client = ExecutionClient::with_base_url(&config, base.clone()).unwrap();

        assert_eq!(client.base_url(), &base);
        assert_eq!(client.endpoint_prefix, "payments");
        assert_eq!(client.content_type, "application/json; charset=utf-8");
    }

    #[test]
    fn test_new_uses_explicit_base_url() {
        let config = AdminConfig {
            base_url: Some("http://localhost:8000/admin/execution".to_string()),
            ..AdminConfig::default()
        };
        let client = ExecutionClient::new(&config).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/admin/execution");
    }
}
