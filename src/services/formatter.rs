use crate::enums::event_type::EventType;
use crate::structs::event::Event;
use crate::structs::payload::event_meta::EventMeta;
use crate::structs::payload::event_status::EventStatus;
use crate::structs::payload::short_webhook_payload::ShortWebhookPayload;
use crate::structs::payload::webhook_payload::WebhookPayload;

/// One-line human readable summary of an event. Deterministic for a given
/// event, so downstream consumers can dedup on it.
pub fn format_short_message(event: &Event) -> String {
    let object = if event.namespace.is_empty() {
        format!("{}/{}", event.kind, event.name)
    } else {
        format!("{}/{} in namespace {}", event.kind, event.name, event.namespace)
    };

    let action = match event.event_type {
        EventType::Create => "has been created",
        EventType::Update => "has been updated",
        EventType::Delete => "has been deleted",
        EventType::Error => "is in an error state",
        EventType::Warning => "raised a warning",
        _ => "reported an event",
    };

    let mut summary = if event.cluster.is_empty() {
        format!("{} {}", object, action)
    } else {
        format!("{} {} in cluster {}", object, action, event.cluster)
    };

    let detail = if event.messages.is_empty() {
        event.reason.clone()
    } else {
        event.messages.join(" ")
    };
    if !detail.is_empty() {
        summary.push_str(": ");
        summary.push_str(&detail);
    }

    summary
}

/// Compact payload: the summary line and nothing else.
pub fn short_payload(event: &Event) -> ShortWebhookPayload {
    ShortWebhookPayload {
        event_summary: format_short_message(event),
    }
}

/// Full payload: meta and status sections, the quick-glance summary line,
/// timestamp, and the optional recommendation/warning lists.
pub fn full_payload(event: &Event) -> WebhookPayload {
    WebhookPayload {
        meta: EventMeta {
            kind: event.kind.clone(),
            name: event.name.clone(),
            namespace: event.namespace.clone(),
            cluster: event.cluster.clone(),
        },
        status: EventStatus {
            event_type: event.event_type,
            level: event.level,
            reason: event.reason.clone(),
            error: event.error.clone(),
            messages: event.messages.clone(),
        },
        summary: format_short_message(event),
        timestamp: event.time_stamp,
        recommendations: event.recommendations.clone(),
        warnings: event.warnings.clone(),
    }
}
