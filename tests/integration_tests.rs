//! Integration tests for the `Webflow` facade.

use std::sync::Arc;

use serde_json::json;
use webflow_api::clients::{MockTransport, Transport};
use webflow_api::resources::{Domains, Meta};
use webflow_api::{Webflow, WebflowConfig, DEFAULT_BASE_URL};

#[test]
fn test_new_sets_options() {
    let webflow = Webflow::new("apikey_123");

    assert_eq!(webflow.config().api_key().as_ref(), "apikey_123");
    assert_eq!(webflow.config().base_url().as_ref(), DEFAULT_BASE_URL);
    assert_eq!(DEFAULT_BASE_URL, "https://api.webflow.com");
}

#[test]
fn test_webflow_is_send_sync_and_clone() {
    fn assert_send_sync<T: Send + Sync + Clone>() {}
    assert_send_sync::<Webflow>();
}

#[tokio::test]
async fn test_rebinding_transport_rebinds_every_accessor() {
    let x = Arc::new(MockTransport::new());
    let y = Arc::new(
        MockTransport::new()
            .respond_with(json!({"_id": "info"}))
            .respond_with(json!([]))
            .respond_with(json!([])),
    );

    let webflow = Webflow::new("apikey_123")
        .with_shared_transport(x.clone())
        .with_shared_transport(y.clone());

    assert_eq!(webflow.config(), &WebflowConfig::new("apikey_123"));

    webflow.meta().get_info().await.unwrap();
    webflow.domains().get_list("site").await.unwrap();
    webflow.sites().get_list().await.unwrap();

    assert!(x.calls().is_empty());
    let urls: Vec<String> = y.calls().into_iter().map(|call| call.url).collect();
    assert_eq!(
        urls,
        vec![
            "https://api.webflow.com/info",
            "https://api.webflow.com/sites/site/domains",
            "https://api.webflow.com/sites",
        ]
    );
}

#[tokio::test]
async fn test_with_transport_takes_owned_transport() {
    let webflow = Webflow::new("apikey_123")
        .with_transport(MockTransport::new().respond_with(json!({"user": {"email": "a@b.c"}})));

    let user = webflow.meta().get_user().await.unwrap();

    assert_eq!(user.user.email, "a@b.c");
}

#[tokio::test]
async fn test_clones_share_transport() {
    let mock = Arc::new(
        MockTransport::new()
            .respond_with(json!([]))
            .respond_with(json!([])),
    );
    let webflow = Webflow::new("apikey_123").with_shared_transport(mock.clone());
    let clone = webflow.clone();

    webflow.sites().get_list().await.unwrap();
    clone.sites().get_list().await.unwrap();

    assert_eq!(mock.calls().len(), 2);
}

#[tokio::test]
async fn test_accessors_can_be_built_directly() {
    let config = WebflowConfig::new("apikey_123");
    let mock = MockTransport::new()
        .respond_with(json!({"_id": "abc"}))
        .respond_with(json!([{"_id": "d1", "name": "example.com"}]));
    let transport: &dyn Transport = &mock;

    let info = Meta::new(&config, transport).get_info().await.unwrap();
    let domains = Domains::new(&config, transport).get_list("s1").await.unwrap();

    assert_eq!(info.id, "abc");
    assert_eq!(domains[0].name, "example.com");
}
