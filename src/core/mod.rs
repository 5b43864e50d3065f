pub mod action_bindings;
pub mod app;
pub mod event;
pub mod event_queue;
pub mod form_engine;
pub mod form_event;
pub mod node;
pub mod profile;
pub mod reducer;
pub mod search;
pub mod state;
pub mod step;
pub mod validation;
