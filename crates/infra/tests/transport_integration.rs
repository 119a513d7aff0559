//! End-to-end transport tests
//!
//! Drives the full stack (facade, transport, authenticator) against a mock
//! HTTP server and asserts on the wire-level requests.

use std::sync::Arc;

use reelgrid_core::{Authenticator, CacheDirective, FetchOptions, PlatformClient, Transport};
use reelgrid_domain::{AuthenticatedAccount, ClientConfig, ReelgridError, Video};
use reelgrid_infra::{HttpTransport, TokenAuthenticator};
use serde_json::json;
use tokio::sync::oneshot;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_against(server: &MockServer) -> (PlatformClient, Arc<TokenAuthenticator>) {
    let config = ClientConfig::new("id", "secret").with_base_url(server.uri());
    let transport = HttpTransport::new(&config).expect("transport");
    let authenticator = Arc::new(TokenAuthenticator::new());
    let client = PlatformClient::new(
        Arc::new(transport) as Arc<dyn Transport>,
        Arc::clone(&authenticator) as Arc<dyn Authenticator>,
        &config,
    );
    (client, authenticator)
}

#[tokio::test]
async fn fetch_sends_auth_and_accept_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos/1"))
        .and(header("authorization", "Basic aWQ6c2VjcmV0"))
        .and(header("accept", "application/vnd.reelgrid.*+json;version=3.4"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "uri": "/videos/1", "name": "Reel" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _auth) = client_against(&server);
    let (tx, rx) = oneshot::channel();
    client.fetch_video("/videos/1", FetchOptions::new(), move |result| {
        tx.send(result).ok();
    });

    let video: Video = rx.await.unwrap().expect("video");
    assert_eq!(video.name.as_deref(), Some("Reel"));
}

#[tokio::test]
async fn signed_in_account_switches_to_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("authorization", "Bearer token-xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "uri": "/users/42" })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, auth) = client_against(&server);
    auth.sign_in(AuthenticatedAccount::from_token("token-xyz"));

    let (tx, rx) = oneshot::channel();
    client.fetch_current_user(FetchOptions::new(), move |result| {
        tx.send(result).ok();
    });

    let user = rx.await.unwrap().expect("user");
    assert_eq!(user.uri.as_deref(), Some("/users/42"));
}

#[tokio::test]
async fn query_and_cache_directive_reach_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me/videos"))
        .and(query_param("fields", "uri,name"))
        .and(query_param("per_page", "5"))
        .and(header("cache-control", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total": 0, "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _auth) = client_against(&server);
    let options = FetchOptions::new()
        .fields("uri,name")
        .query_param("per_page", "5")
        .cache(CacheDirective::NoCache);

    let (tx, rx) = oneshot::channel();
    client.fetch_video_list("/me/videos", options, move |result| {
        tx.send(result).ok();
    });

    let page = rx.await.unwrap().expect("page");
    assert_eq!(page.total, Some(0));
}

#[tokio::test]
async fn empty_success_body_decodes_unit_responses() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/videos/1/likes"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _auth) = client_against(&server);
    let (tx, rx) = oneshot::channel();
    client.update_like("/videos/1/likes", true, None, move |result| {
        tx.send(result).ok();
    });

    rx.await.unwrap().expect("toggle");
}

#[tokio::test]
async fn unauthorized_maps_to_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos/1"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
        .mount(&server)
        .await;

    let (client, _auth) = client_against(&server);
    let (tx, rx) = oneshot::channel();
    client.fetch_video("/videos/1", FetchOptions::new(), move |result| {
        tx.send(result).ok();
    });

    match rx.await.unwrap() {
        Err(ReelgridError::Auth(msg)) => assert!(msg.contains("token expired")),
        other => panic!("expected auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn platform_failures_carry_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos/404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let (client, _auth) = client_against(&server);
    let (tx, rx) = oneshot::channel();
    client.fetch_video("/videos/404", FetchOptions::new(), move |result| {
        tx.send(result).ok();
    });

    match rx.await.unwrap() {
        Err(ReelgridError::Api { status, body }) => {
            assert_eq!(status, 404);
            assert_eq!(body, "not found");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn edit_sends_the_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/videos/7"))
        .and(wiremock::matchers::body_json(json!({ "name": "Cut two" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "uri": "/videos/7", "name": "Cut two" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _auth) = client_against(&server);
    let params = reelgrid_core::client::VideoEditParams {
        name: Some("Cut two".into()),
        ..Default::default()
    };

    let (tx, rx) = oneshot::channel();
    client.edit_video("/videos/7", params, move |result| {
        tx.send(result).ok();
    });

    let video = rx.await.unwrap().expect("video");
    assert_eq!(video.name.as_deref(), Some("Cut two"));
}
