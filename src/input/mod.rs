pub mod date_input;
pub mod dropdown_input;
pub mod input;
pub mod number_input;
pub mod picker_input;
pub mod select_input;
pub mod text_input;
pub mod validators;

pub use input::{Input, InputBase, InputCaps, KeyResult, NodeId};
