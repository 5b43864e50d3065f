pub mod core;
pub mod data;
pub mod input;
pub mod terminal;
pub mod ui;

pub use crate::core::action_bindings;
pub use crate::core::app;
pub use crate::core::event;
pub use crate::core::event_queue;
pub use crate::core::form_engine;
pub use crate::core::form_event;
pub use crate::core::node;
pub use crate::core::profile;
pub use crate::core::reducer;
pub use crate::core::search;
pub use crate::core::state;
pub use crate::core::step;
pub use crate::core::validation;

pub use input::date_input;
pub use input::dropdown_input;
pub use input::number_input;
pub use input::picker_input;
pub use input::select_input;
pub use input::text_input;
pub use input::validators;

pub use terminal::input_event;
pub use terminal::terminal_event;

pub use ui::frame;
pub use ui::highlight;
pub use ui::layout;
pub use ui::renderer;
pub use ui::span;
pub use ui::style;
pub use ui::theme;
