//! Tests for HTTP request/response types and errors.

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};
use std::time::Duration;

fn test_url() -> url::Url {
    url::Url::parse("https://track.customer.io/api/v1/customers/42").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let req = HttpRequest::new(http::Method::PATCH, test_url());

        assert_eq!(req.method, http::Method::PATCH);
        assert_eq!(req.url, test_url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
        assert!(req.timeout.is_none());
    }

    #[test]
    fn shorthand_constructors_set_method() {
        assert_eq!(HttpRequest::put(test_url()).method, http::Method::PUT);
        assert_eq!(HttpRequest::post(test_url()).method, http::Method::POST);
        assert_eq!(HttpRequest::delete(test_url()).method, http::Method::DELETE);
    }

    #[test]
    fn with_body_sets_body() {
        let req = HttpRequest::put(test_url()).with_body(b"email=a%40example.com".to_vec());

        assert_eq!(req.body, Some(b"email=a%40example.com".to_vec()));
    }

    #[test]
    fn with_header_appends_multiple_values_for_same_name() {
        let req = HttpRequest::post(test_url())
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/html"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }

    #[test]
    fn with_timeout_sets_timeout() {
        let req = HttpRequest::post(test_url()).with_timeout(Duration::from_secs(3));
        assert_eq!(req.timeout, Some(Duration::from_secs(3)));
    }
}

mod http_response {
    use super::*;

    #[test]
    fn new_creates_response_with_all_fields() {
        let resp = HttpResponse::new(
            http::StatusCode::NOT_FOUND,
            http::HeaderMap::new(),
            b"missing".to_vec(),
        );

        assert_eq!(resp.status, http::StatusCode::NOT_FOUND);
        assert!(resp.headers.is_empty());
        assert_eq!(resp.body, b"missing".to_vec());
    }

    #[test]
    fn body_text_returns_valid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            b"{}".to_vec(),
        );

        assert_eq!(resp.body_text(), Some("{}"));
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            vec![0xFF, 0xFE],
        );

        assert!(resp.body_text().is_none());
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_displays_and_preserves_source() {
        let error = HttpError::Connection(Box::new(std::io::Error::other("connection refused")));

        assert!(error.to_string().contains("Connection error"));
        assert!(error.message().contains("connection refused"));
        assert!(error.source().is_some());
    }

    #[test]
    fn timeout_displays_message() {
        assert_eq!(HttpError::Timeout.message(), "Request timed out");
        assert!(HttpError::Timeout.source().is_none());
    }

    #[test]
    fn invalid_url_displays_reason() {
        let error = HttpError::InvalidUrl("missing scheme".to_string());
        assert_eq!(error.message(), "Invalid URL: missing scheme");
    }

    #[test]
    fn codes_are_distinct_per_kind() {
        let connection = HttpError::Connection(Box::new(std::io::Error::other("x")));

        assert_eq!(connection.code(), HttpError::CODE_CONNECTION);
        assert_eq!(HttpError::Timeout.code(), HttpError::CODE_TIMEOUT);
        assert_eq!(
            HttpError::InvalidUrl(String::new()).code(),
            HttpError::CODE_INVALID_URL
        );
        assert_ne!(HttpError::CODE_CONNECTION, HttpError::CODE_TIMEOUT);
        assert_ne!(HttpError::CODE_TIMEOUT, HttpError::CODE_INVALID_URL);
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
    }
}

mod http_client_trait {
    use super::*;

    struct FixedClient {
        response: HttpResponse,
    }

    impl HttpClient for FixedClient {
        async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            Ok(self.response.clone())
        }
    }

    struct TimingOutClient;

    impl HttpClient for TimingOutClient {
        async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
            Err(HttpError::Timeout)
        }
    }

    #[tokio::test]
    async fn implementation_returns_configured_response() {
        let client = FixedClient {
            response: HttpResponse::new(
                http::StatusCode::CREATED,
                http::HeaderMap::new(),
                b"created".to_vec(),
            ),
        };

        let result = client.request(HttpRequest::post(test_url())).await.unwrap();

        assert_eq!(result.status, http::StatusCode::CREATED);
        assert_eq!(result.body, b"created".to_vec());
    }

    #[tokio::test]
    async fn implementation_returns_transport_error() {
        let result = TimingOutClient
            .request(HttpRequest::post(test_url()))
            .await;

        assert!(matches!(result, Err(HttpError::Timeout)));
    }
}
