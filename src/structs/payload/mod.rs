pub mod event_meta;
pub mod event_status;
pub mod short_webhook_payload;
pub mod webhook_payload;
