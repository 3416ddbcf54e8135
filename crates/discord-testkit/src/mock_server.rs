//! Mock Discord API server.
//!
//! Wraps wiremock with helpers for the response shapes Discord produces:
//! JSON bodies, empty 204s, error objects, and rate limit headers.

use std::time::Duration;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A mock Discord API for testing the REST client.
pub struct MockApiServer {
    server: MockServer,
}

/// A request received by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: String,
    /// Request path, percent-encoded as sent
    pub path: String,
    /// Query string
    pub query: Option<String>,
    /// Raw request body
    pub body: Vec<u8>,
    /// Request headers, names lowercased
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    /// Look up a header by lowercase name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Body decoded as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body should be JSON")
    }

    /// Body as lossy UTF-8, for inspecting multipart payloads.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn json_response(status: u16, body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .set_body_json(body)
        .insert_header("content-type", "application/json")
}

impl MockApiServer {
    /// Start a new mock server.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to configure the client with.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Response Setup
    // ─────────────────────────────────────────────────────────────────────────────

    /// Respond to `verb request_path` with `status` and a JSON body.
    pub async fn expect_route(
        &self,
        verb: &str,
        request_path: &str,
        status: u16,
        response: serde_json::Value,
    ) {
        Mock::given(method(verb))
            .and(path(request_path))
            .respond_with(json_response(status, response))
            .mount(&self.server)
            .await;
    }

    /// Expect a GET request and respond with JSON.
    pub async fn expect_get(&self, request_path: &str, response: serde_json::Value) {
        self.expect_route("GET", request_path, 200, response).await;
    }

    /// Expect a POST request and respond with JSON.
    pub async fn expect_post(&self, request_path: &str, response: serde_json::Value) {
        self.expect_route("POST", request_path, 200, response).await;
    }

    /// Expect a PATCH request and respond with JSON.
    pub async fn expect_patch(&self, request_path: &str, response: serde_json::Value) {
        self.expect_route("PATCH", request_path, 200, response).await;
    }

    /// Expect a DELETE request and respond with JSON.
    pub async fn expect_delete(&self, request_path: &str, response: serde_json::Value) {
        self.expect_route("DELETE", request_path, 200, response).await;
    }

    /// Expect a request and respond with `204 No Content`.
    pub async fn expect_no_content(&self, verb: &str, request_path: &str) {
        Mock::given(method(verb))
            .and(path(request_path))
            .respond_with(ResponseTemplate::new(204))
            .mount(&self.server)
            .await;
    }

    /// Expect a GET request with a query parameter.
    pub async fn expect_get_with_query(
        &self,
        request_path: &str,
        param_name: &str,
        param_value: &str,
        response: serde_json::Value,
    ) {
        Mock::given(method("GET"))
            .and(path(request_path))
            .and(query_param(param_name, param_value))
            .respond_with(json_response(200, response))
            .mount(&self.server)
            .await;
    }

    /// Expect a request carrying a specific header.
    pub async fn expect_with_header(
        &self,
        verb: &str,
        request_path: &str,
        header_name: &str,
        header_value: &str,
        response: serde_json::Value,
    ) {
        Mock::given(method(verb))
            .and(path(request_path))
            .and(header(header_name, header_value))
            .respond_with(json_response(200, response))
            .mount(&self.server)
            .await;
    }

    /// Respond with a Discord error object, `{"code": .., "message": ..}`.
    pub async fn expect_error(&self, request_path: &str, status: u16, code: i32, message: &str) {
        Mock::given(path(request_path))
            .respond_with(json_response(
                status,
                crate::fixtures::api_error(code, message),
            ))
            .mount(&self.server)
            .await;
    }

    /// Respond with a 429 and the matching headers.
    pub async fn expect_rate_limited(&self, request_path: &str, retry_after: f64, global: bool) {
        let mut template = json_response(
            429,
            serde_json::json!({
                "message": "You are being rate limited.",
                "retry_after": retry_after,
                "global": global,
            }),
        )
        .insert_header("retry-after", format!("{}", retry_after.ceil()))
        .insert_header("x-ratelimit-scope", if global { "global" } else { "user" });
        if global {
            template = template.insert_header("x-ratelimit-global", "true");
        }

        Mock::given(path(request_path))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    /// Respond with JSON plus arbitrary response headers, verbatim.
    pub async fn expect_with_response_headers(
        &self,
        verb: &str,
        request_path: &str,
        response: serde_json::Value,
        headers: &[(&str, &str)],
    ) {
        let template = headers
            .iter()
            .fold(json_response(200, response), |template, (name, value)| {
                template.insert_header(*name, *value)
            });

        Mock::given(method(verb))
            .and(path(request_path))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    /// Respond with JSON and report the route's bucket state in headers.
    pub async fn expect_with_bucket(
        &self,
        verb: &str,
        request_path: &str,
        response: serde_json::Value,
        limit: u32,
        remaining: u32,
        reset_after: Duration,
    ) {
        let limit = limit.to_string();
        let remaining = remaining.to_string();
        let reset_after = format!("{:.3}", reset_after.as_secs_f64());

        self.expect_with_response_headers(
            verb,
            request_path,
            response,
            &[
                ("x-ratelimit-limit", limit.as_str()),
                ("x-ratelimit-remaining", remaining.as_str()),
                ("x-ratelimit-reset-after", reset_after.as_str()),
                ("x-ratelimit-bucket", "mock-bucket"),
            ],
        )
        .await;
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Verification
    // ─────────────────────────────────────────────────────────────────────────────

    /// All received requests, oldest first.
    pub async fn recorded(&self) -> Vec<RecordedRequest> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|r| RecordedRequest {
                method: r.method.to_string(),
                path: r.url.path().to_string(),
                query: r.url.query().map(ToString::to_string),
                headers: r
                    .headers
                    .iter()
                    .map(|(k, v)| {
                        (
                            k.as_str().to_ascii_lowercase(),
                            String::from_utf8_lossy(v.as_bytes()).into_owned(),
                        )
                    })
                    .collect(),
                body: r.body,
            })
            .collect()
    }

    /// The most recent request.
    ///
    /// # Panics
    ///
    /// Panics if nothing was received.
    pub async fn last_request(&self) -> RecordedRequest {
        self.recorded()
            .await
            .pop()
            .expect("mock server received no requests")
    }

    /// Verify that a specific number of requests were received.
    ///
    /// # Panics
    ///
    /// Panics if the count doesn't match.
    pub async fn assert_request_count(&self, expected: usize) {
        let received = self.recorded().await;
        assert_eq!(
            received.len(),
            expected,
            "Expected {} requests but received {}",
            expected,
            received.len()
        );
    }

    /// Verify that `verb request_path` was received at least once.
    ///
    /// # Panics
    ///
    /// Panics if no matching request was found.
    pub async fn assert_received(&self, verb: &str, request_path: &str) {
        let received = self.recorded().await;
        let found = received
            .iter()
            .any(|r| r.method == verb && r.path == request_path);
        assert!(
            found,
            "No {verb} request received to '{request_path}'. Received: {:?}",
            received
                .iter()
                .map(|r| format!("{} {}", r.method, r.path))
                .collect::<Vec<_>>()
        );
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_expect_get_and_record() {
        let mock = MockApiServer::start().await;
        mock.expect_get("/users/@me", serde_json::json!({"id": "1"}))
            .await;

        let response = reqwest::Client::new()
            .get(format!("{}/users/@me?with=query", mock.base_url()))
            .header("Authorization", "Bot token")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let last = mock.last_request().await;
        assert_eq!(last.method, "GET");
        assert_eq!(last.path, "/users/@me");
        assert_eq!(last.query.as_deref(), Some("with=query"));
        assert_eq!(last.header("authorization"), Some("Bot token"));
        mock.assert_received("GET", "/users/@me").await;
    }

    #[tokio::test]
    async fn test_no_content() {
        let mock = MockApiServer::start().await;
        mock.expect_no_content("DELETE", "/channels/1/pins/2").await;

        let response = reqwest::Client::new()
            .delete(format!("{}/channels/1/pins/2", mock.base_url()))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 204);
        mock.assert_request_count(1).await;
    }

    #[tokio::test]
    async fn test_rate_limited_headers() {
        let mock = MockApiServer::start().await;
        mock.expect_rate_limited("/channels/1/messages", 1.5, true)
            .await;

        let response = reqwest::Client::new()
            .post(format!("{}/channels/1/messages", mock.base_url()))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 429);
        assert_eq!(response.headers()["retry-after"], "2");
        assert_eq!(response.headers()["x-ratelimit-global"], "true");
    }
}
