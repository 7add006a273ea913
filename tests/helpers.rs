// Shared test helpers for mock upstreams and a live inference server.
//
// Every upstream the engine talks to (DoH resolver, range lists, the probed
// origin) is a wiremock server on 127.0.0.1, so no test touches the network.

#![allow(dead_code)] // Each test file uses a different subset

use std::sync::Arc;
use std::time::Duration;

use cdn_inference::{build_router, Config, InferenceEngine};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock DoH resolver plus range-list host.
pub struct Upstream {
    pub server: MockServer,
}

impl Upstream {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Config pointing every endpoint at this upstream, with a short timeout.
    pub fn config(&self) -> Config {
        Config {
            timeout_seconds: 3,
            user_agent: "cdn_inference_test/1.0".to_string(),
            doh_endpoint: format!("{}/dns-query", self.server.uri()),
            ipv4_ranges_url: format!("{}/ips-v4", self.server.uri()),
            ipv6_ranges_url: format!("{}/ips-v6", self.server.uri()),
            ..Default::default()
        }
    }

    /// Answers `name`/`record_type` with the given DoH JSON body.
    pub async fn mount_doh(&self, name: &str, record_type: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path("/dns-query"))
            .and(query_param("name", name))
            .and(query_param("type", record_type))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answers every DoH query with `status`.
    pub async fn mount_doh_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/dns-query"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Answers every DoH query with an empty answer set after `delay`.
    pub async fn mount_doh_delayed(&self, delay: Duration) {
        Mock::given(method("GET"))
            .and(path("/dns-query"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"Status": 0}))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// A records answer for `name`.
    pub async fn mount_a(&self, name: &str, ips: &[&str]) {
        let answers: Vec<Value> = ips
            .iter()
            .map(|ip| json!({"name": name, "type": 1, "TTL": 300, "data": ip}))
            .collect();
        self.mount_doh(name, "A", json!({"Status": 0, "Answer": answers}))
            .await;
    }

    /// NS records answer for `name`.
    pub async fn mount_ns(&self, name: &str, nameservers: &[&str]) {
        let answers: Vec<Value> = nameservers
            .iter()
            .map(|ns| json!({"name": name, "type": 2, "TTL": 86400, "data": ns}))
            .collect();
        self.mount_doh(name, "NS", json!({"Status": 0, "Answer": answers}))
            .await;
    }

    /// NXDOMAIN-style answers (no `Answer` field) for both record types.
    pub async fn mount_no_records(&self, name: &str) {
        self.mount_doh(name, "A", json!({"Status": 3})).await;
        self.mount_doh(name, "NS", json!({"Status": 3})).await;
    }

    pub async fn mount_ranges(&self, ipv4: &str, ipv6: &str) {
        Mock::given(method("GET"))
            .and(path("/ips-v4"))
            .respond_with(ResponseTemplate::new(200).set_body_string(ipv4))
            .mount(&self.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/ips-v6"))
            .respond_with(ResponseTemplate::new(200).set_body_string(ipv6))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_ranges_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/ips-v4"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/ips-v6"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}

/// Starts a plain-HTTP origin answering HEAD with the given headers.
///
/// Returns the server and its `host:port`, which is used as the domain under
/// test. The HTTPS probe against it fails, so the HTTP fallback is exercised.
pub async fn start_origin(status: u16, headers: &[(&str, &str)]) -> (MockServer, String) {
    let origin = MockServer::start().await;
    let mut template = ResponseTemplate::new(status);
    for (name, value) in headers {
        template = template.insert_header(*name, *value);
    }
    Mock::given(method("HEAD"))
        .respond_with(template)
        .mount(&origin)
        .await;
    let host = origin.uri().trim_start_matches("http://").to_string();
    (origin, host)
}

/// `host:port` on which nothing listens.
pub fn unreachable_host() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("Failed to read address").port();
    drop(listener);
    format!("127.0.0.1:{port}")
}

/// Runs the inference router on an ephemeral port and returns its base URL.
pub async fn spawn_app(config: &Config) -> String {
    let engine = Arc::new(InferenceEngine::new(config).expect("Failed to build engine"));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read address");
    tokio::spawn(async move {
        axum::serve(listener, build_router(engine))
            .await
            .expect("Test server failed");
    });
    format!("http://{addr}")
}
