use crate::core::form_engine::FormEngine;
use crate::core::step::Step;

/// Everything the reducer reads and mutates.
pub struct AppState {
    pub step: Step,
    pub engine: FormEngine,
    pub should_exit: bool,
    pub completed: bool,
}

impl AppState {
    pub fn new(mut step: Step) -> Self {
        let engine = FormEngine::from_nodes(&mut step.nodes);
        Self {
            step,
            engine,
            should_exit: false,
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::node::Node;
    use crate::text_input::TextInput;

    #[test]
    fn new_state_focuses_first_input() {
        let step = Step {
            prompt: "Profile".to_string(),
            hint: None,
            nodes: vec![
                Node::text("intro"),
                Node::input(TextInput::new("name", "Name")),
            ],
        };
        let state = AppState::new(step);
        assert_eq!(state.engine.focused_id().map(String::as_str), Some("name"));
        assert!(!state.should_exit);
        assert!(!state.completed);
    }
}
