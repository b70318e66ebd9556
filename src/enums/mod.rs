pub mod commands;
pub mod delivery_error_policy;
pub mod event_type;
pub mod level;
pub mod notif_type;
