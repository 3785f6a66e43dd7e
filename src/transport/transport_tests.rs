use std::sync::Arc;

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method, StatusCode};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

fn url(path: &str) -> url::Url {
    url::Url::parse("https://api.swervpay.co/api/v1/")
        .unwrap()
        .join(path)
        .unwrap()
}

mod request {
    use super::*;

    #[test]
    fn starts_bare() {
        let req = HttpRequest::new(Method::GET, url("banks"));

        assert_eq!(req.url.as_str(), "https://api.swervpay.co/api/v1/banks");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn json_body_sets_content_type() {
        let req = HttpRequest::new(Method::POST, url("cards/card_1/fund"))
            .with_json(br#"{"amount":1000.0}"#.to_vec());

        assert_eq!(req.body.as_deref(), Some(&br#"{"amount":1000.0}"#[..]));
        assert_eq!(req.header(&CONTENT_TYPE), Some("application/json"));
    }

    #[test]
    fn setting_a_header_replaces_it() {
        let mut req = HttpRequest::new(Method::GET, url("wallets"))
            .with_header(AUTHORIZATION, HeaderValue::from_static("Bearer stale"));

        req.set_header(AUTHORIZATION, HeaderValue::from_static("Bearer fresh"));

        assert_eq!(req.headers.get_all(AUTHORIZATION).iter().count(), 1);
        assert_eq!(req.header(&AUTHORIZATION), Some("Bearer fresh"));
    }

    #[test]
    fn non_ascii_header_reads_as_none() {
        let req = HttpRequest::new(Method::GET, url("wallets")).with_header(
            AUTHORIZATION,
            HeaderValue::from_bytes("Bearer caf\u{e9}".as_bytes()).unwrap(),
        );

        assert_eq!(req.header(&AUTHORIZATION), None);
    }

    #[test]
    fn clones_compare_equal() {
        let req = HttpRequest::new(Method::POST, url("payouts")).with_json(b"{}".to_vec());

        assert_eq!(req.clone(), req);
    }
}

mod response {
    use super::*;

    #[test]
    fn success_covers_every_2xx() {
        assert!(HttpResponse::json(StatusCode::OK, "{}").is_success());
        assert!(HttpResponse::json(StatusCode::CREATED, "{}").is_success());
        assert!(!HttpResponse::json(StatusCode::UNAUTHORIZED, "").is_success());
    }

    #[test]
    fn no_content_has_no_body_even_with_bytes() {
        let response = HttpResponse::json(StatusCode::NO_CONTENT, "ignored");

        assert!(response.has_no_body());
    }

    #[test]
    fn whitespace_body_counts_as_empty() {
        assert!(HttpResponse::json(StatusCode::OK, " \n\t").has_no_body());
        assert!(!HttpResponse::json(StatusCode::OK, "null").has_no_body());
    }

    #[test]
    fn json_sets_content_type() {
        let response = HttpResponse::json(StatusCode::OK, "[]");

        assert_eq!(
            response.headers.get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(response.body, b"[]");
    }
}

mod shared_client {
    use super::*;

    struct Echo;

    impl HttpClient for Echo {
        async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
            Ok(HttpResponse::json(
                StatusCode::OK,
                req.url.path().as_bytes().to_vec(),
            ))
        }
    }

    #[tokio::test]
    async fn arc_delegates_to_inner_client() {
        let client = Arc::new(Echo);

        let response = client
            .request(HttpRequest::new(Method::GET, url("business")))
            .await
            .unwrap();

        assert_eq!(response.body, b"/api/v1/business");
    }
}

mod error {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn timeout_has_no_source() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
        assert!(HttpError::Timeout.source().is_none());
    }

    #[test]
    fn connection_keeps_cause() {
        let error = HttpError::Connection(Box::new(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "refused",
        )));

        assert_eq!(error.to_string(), "Connection error: refused");
        assert!(error.source().is_some());
    }
}
