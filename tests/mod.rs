use std::net::SocketAddr;
use std::time::Duration;

use tokio::sync::mpsc;
use warp::Filter;

use kubenotify::enums::delivery_error_policy::DeliveryErrorPolicy;
use kubenotify::enums::event_type::EventType;
use kubenotify::enums::notif_type::NotifType;
use kubenotify::errors::NotifyError;
use kubenotify::services::notifiers::webhook::WebhookNotifier;
use kubenotify::structs::config::config::Config;
use kubenotify::structs::event::Event;
use kubenotify::traits::notifier::Notifier;

struct CapturedRequest {
    content_type: Option<String>,
    body: String,
}

/// Local listener that records every POST and answers with a fixed status.
fn spawn_capture_server(
    status: warp::http::StatusCode,
) -> (SocketAddr, mpsc::UnboundedReceiver<CapturedRequest>) {
    let (tx, rx) = mpsc::unbounded_channel();

    let route = warp::post()
        .and(warp::header::optional::<String>("content-type"))
        .and(warp::body::bytes())
        .map(move |content_type: Option<String>, body: bytes::Bytes| {
            let _ = tx.send(CapturedRequest {
                content_type,
                body: String::from_utf8_lossy(&body).to_string(),
            });
            warp::reply::with_status(warp::reply(), status)
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    (addr, rx)
}

fn webhook_config(url: String, notif_type: Option<NotifType>, policy: DeliveryErrorPolicy) -> Config {
    let mut config = Config::default();
    config.communications.webhook.enabled = true;
    config.communications.webhook.url = url;
    config.communications.webhook.notif_type = notif_type;
    config.communications.webhook.delivery_error_policy = policy;
    config.settings.cluster_name = "test-cluster".to_string();
    config
}

fn pod_created() -> Event {
    Event {
        kind: "Pod".to_string(),
        name: "nginx".to_string(),
        namespace: "default".to_string(),
        cluster: "somebody-elses-cluster".to_string(),
        event_type: EventType::Create,
        ..Event::default()
    }
}

async fn next_request(rx: &mut mpsc::UnboundedReceiver<CapturedRequest>) -> CapturedRequest {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("no request captured in time")
        .expect("capture channel closed")
}

#[tokio::test]
async fn full_shape_end_to_end() {
    let (addr, mut rx) = spawn_capture_server(warp::http::StatusCode::OK);
    let config = webhook_config(
        format!("http://{}/hook", addr),
        Some(NotifType::Long),
        DeliveryErrorPolicy::Propagate,
    );
    let notifier = WebhookNotifier::new(&config);

    notifier.send_event(pod_created()).await.unwrap();

    let request = next_request(&mut rx).await;
    assert_eq!(request.content_type.as_deref(), Some("application/json"));

    let json: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(json["meta"]["kind"], "Pod");
    assert_eq!(json["meta"]["name"], "nginx");
    assert_eq!(json["meta"]["namespace"], "default");
    assert_eq!(json["status"]["type"], "create");
    assert!(json["summary"].as_str().unwrap().contains("Pod/nginx"));
    let raw_timestamp = json["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(raw_timestamp).is_ok());
}

#[tokio::test]
async fn cluster_name_is_always_taken_from_config() {
    let (addr, mut rx) = spawn_capture_server(warp::http::StatusCode::OK);
    let config = webhook_config(
        format!("http://{}/hook", addr),
        None,
        DeliveryErrorPolicy::Propagate,
    );
    let notifier = WebhookNotifier::new(&config);

    // The event arrives claiming a different cluster.
    notifier.send_event(pod_created()).await.unwrap();

    let request = next_request(&mut rx).await;
    let json: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(json["meta"]["cluster"], "test-cluster");
    assert!(json["summary"].as_str().unwrap().contains("test-cluster"));
}

#[tokio::test]
async fn short_shape_is_a_single_text_field() {
    let (addr, mut rx) = spawn_capture_server(warp::http::StatusCode::OK);
    let config = webhook_config(
        format!("http://{}/hook", addr),
        Some(NotifType::Short),
        DeliveryErrorPolicy::Propagate,
    );
    let notifier = WebhookNotifier::new(&config);

    notifier.send_event(pod_created()).await.unwrap();

    let request = next_request(&mut rx).await;
    let json: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object["text"].as_str().unwrap().contains("Pod/nginx"));
}

#[tokio::test]
async fn unset_notiftype_selects_full_shape() {
    let (addr, mut rx) = spawn_capture_server(warp::http::StatusCode::OK);
    let config = webhook_config(
        format!("http://{}/hook", addr),
        None,
        DeliveryErrorPolicy::Propagate,
    );
    let notifier = WebhookNotifier::new(&config);

    notifier.send_event(pod_created()).await.unwrap();

    let request = next_request(&mut rx).await;
    let json: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert!(json.get("meta").is_some());
    assert!(json.get("text").is_none());
}

#[tokio::test]
async fn non_200_response_fails_post_but_log_policy_swallows_it() {
    let (addr, _rx) = spawn_capture_server(warp::http::StatusCode::INTERNAL_SERVER_ERROR);
    let config = webhook_config(
        format!("http://{}/hook", addr),
        None,
        DeliveryErrorPolicy::Log,
    );
    let notifier = WebhookNotifier::new(&config);

    let payload = serde_json::to_vec(&serde_json::json!({"text": "probe"})).unwrap();
    let err = notifier.post_webhook(payload).await.unwrap_err();
    match err {
        NotifyError::DeliveryStatus { status, .. } => assert_eq!(status, 500),
        other => panic!("expected DeliveryStatus error, got {other:?}"),
    }

    // Under the log policy the caller still observes success.
    assert!(notifier.send_event(pod_created()).await.is_ok());
}

#[tokio::test]
async fn propagate_policy_surfaces_delivery_failures() {
    let (addr, _rx) = spawn_capture_server(warp::http::StatusCode::INTERNAL_SERVER_ERROR);
    let config = webhook_config(
        format!("http://{}/hook", addr),
        None,
        DeliveryErrorPolicy::Propagate,
    );
    let notifier = WebhookNotifier::new(&config);

    let err = notifier.send_event(pod_created()).await.unwrap_err();
    match &err {
        NotifyError::DeliveryStatus { status, .. } => assert_eq!(*status, 500),
        other => panic!("expected DeliveryStatus error, got {other:?}"),
    }
    // The status code is rendered as a decimal number.
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn transport_failures_are_delivery_errors() {
    let config = webhook_config(
        "http://127.0.0.1:1/hook".to_string(),
        None,
        DeliveryErrorPolicy::Propagate,
    );
    let notifier = WebhookNotifier::new(&config);

    let err = notifier.send_event(pod_created()).await.unwrap_err();
    assert!(matches!(err, NotifyError::Delivery(_)));
}

#[tokio::test]
async fn send_message_is_a_no_op_for_webhooks() {
    let (addr, mut rx) = spawn_capture_server(warp::http::StatusCode::OK);
    let config = webhook_config(
        format!("http://{}/hook", addr),
        None,
        DeliveryErrorPolicy::Propagate,
    );
    let notifier = WebhookNotifier::new(&config);

    notifier.send_message("hello operators").await.unwrap();

    // Nothing was posted.
    assert!(rx.try_recv().is_err());
}
