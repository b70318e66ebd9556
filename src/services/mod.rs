pub mod dispatcher;
pub mod formatter;
pub mod notifiers;
