use std::time::Duration;

use crate::core::event::Action;
use crate::core::event_queue::AppEvent;
use crate::core::form_event::FormEvent;
use crate::core::state::AppState;
use crate::core::validation;

/// Side effects the reducer asks the event loop to perform.
#[derive(Debug, Clone)]
pub enum Effect {
    Emit(AppEvent),
    EmitAfter(AppEvent, Duration),
    CancelClearError(String),
}

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, action: Action, error_timeout: Duration) -> Vec<Effect> {
        match action {
            Action::Exit | Action::Cancel => {
                state.should_exit = true;
                vec![]
            }
            Action::NextInput => {
                let events = state.engine.move_focus(&mut state.step.nodes, 1);
                Self::effects_from(state, events, error_timeout)
            }
            Action::PrevInput => {
                let events = state.engine.move_focus(&mut state.step.nodes, -1);
                Self::effects_from(state, events, error_timeout)
            }
            Action::DeleteWord => {
                let events = state.engine.handle_delete_word(&mut state.step.nodes, false);
                Self::effects_from(state, events, error_timeout)
            }
            Action::DeleteWordForward => {
                let events = state.engine.handle_delete_word(&mut state.step.nodes, true);
                Self::effects_from(state, events, error_timeout)
            }
            Action::InputKey(key) => {
                let events = state.engine.handle_key(&mut state.step.nodes, key);
                Self::effects_from(state, events, error_timeout)
            }
            Action::Submit => Self::submit(state, error_timeout),
            Action::ClearErrorMessage(id) => {
                state.engine.clear_error(&mut state.step.nodes, &id);
                vec![]
            }
        }
    }

    fn effects_from(
        state: &mut AppState,
        events: Vec<FormEvent>,
        error_timeout: Duration,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();
        for event in events {
            match event {
                FormEvent::InputChanged { id, value } => {
                    effects.push(Effect::Emit(AppEvent::InputChanged { id, value }));
                }
                FormEvent::FocusChanged { from, to } => {
                    effects.push(Effect::Emit(AppEvent::FocusChanged { from, to }));
                }
                FormEvent::ErrorCancelled { id } => {
                    effects.push(Effect::CancelClearError(id));
                }
                FormEvent::SubmitRequested => {
                    effects.extend(Self::submit(state, error_timeout));
                }
            }
        }
        effects
    }

    /// Enter on a field: validate it, then either advance the focus or,
    /// from the last field, validate the whole step and finish.
    fn submit(state: &mut AppState, error_timeout: Duration) -> Vec<Effect> {
        let mut effects = Vec::new();

        if let Err((id, _)) = state.engine.validate_focused(&mut state.step.nodes) {
            effects.push(Effect::CancelClearError(id.clone()));
            effects.push(Effect::EmitAfter(
                AppEvent::Action(Action::ClearErrorMessage(id)),
                error_timeout,
            ));
            return effects;
        }

        let mut focus_events = Vec::new();
        if state
            .engine
            .advance_focus(&mut state.step.nodes, &mut focus_events)
        {
            for event in focus_events {
                if let FormEvent::FocusChanged { from, to } = event {
                    effects.push(Effect::Emit(AppEvent::FocusChanged { from, to }));
                }
            }
            return effects;
        }

        let errors = validation::validate_step(&state.step);
        if errors.is_empty() {
            state.completed = true;
            state.should_exit = true;
            effects.push(Effect::Emit(AppEvent::Submitted));
            return effects;
        }

        let scheduled = state.engine.apply_errors(&mut state.step.nodes, &errors);
        for id in scheduled {
            effects.push(Effect::CancelClearError(id.clone()));
            effects.push(Effect::EmitAfter(
                AppEvent::Action(Action::ClearErrorMessage(id)),
                error_timeout,
            ));
        }

        // Jump back to the first offending field.
        if let Some((first_id, _)) = errors.first() {
            if let Some(index) = state.engine.find_index_by_id(first_id) {
                let mut events = Vec::new();
                state
                    .engine
                    .set_focus(&mut state.step.nodes, Some(index), &mut events);
                for event in events {
                    if let FormEvent::FocusChanged { from, to } = event {
                        effects.push(Effect::Emit(AppEvent::FocusChanged { from, to }));
                    }
                }
            }
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::node::{Node, find_input};
    use crate::core::step::Step;
    use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
    use crate::text_input::TextInput;
    use crate::validators;

    const TIMEOUT: Duration = Duration::from_secs(2);

    fn state() -> AppState {
        AppState::new(Step {
            prompt: "Profile".to_string(),
            hint: None,
            nodes: vec![
                Node::input(
                    TextInput::new("name", "Name").with_validator(validators::required()),
                ),
                Node::input(TextInput::new("email", "Email")),
            ],
        })
    }

    #[test]
    fn exit_action_sets_should_exit() {
        let mut state = state();
        Reducer::reduce(&mut state, Action::Exit, TIMEOUT);
        assert!(state.should_exit);
        assert!(!state.completed);
    }

    #[test]
    fn submit_on_invalid_field_schedules_error_clear() {
        let mut state = state();
        let effects = Reducer::reduce(&mut state, Action::Submit, TIMEOUT);

        let name = find_input(&state.step.nodes, "name").unwrap();
        assert_eq!(name.error(), Some("This field is required"));
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::EmitAfter(AppEvent::Action(Action::ClearErrorMessage(id)), _) if id == "name"
        )));
        assert!(!state.should_exit);
    }

    #[test]
    fn submit_on_valid_field_advances_focus() {
        let mut state = state();
        Reducer::reduce(
            &mut state,
            Action::InputKey(KeyEvent::new(KeyCode::Char('K'), KeyModifiers::NONE)),
            TIMEOUT,
        );
        let effects = Reducer::reduce(&mut state, Action::Submit, TIMEOUT);

        assert_eq!(
            state.engine.focused_id().map(String::as_str),
            Some("email")
        );
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::Emit(AppEvent::FocusChanged { .. }))));
    }

    #[test]
    fn submit_from_last_field_completes_when_step_is_valid() {
        let mut state = state();
        Reducer::reduce(
            &mut state,
            Action::InputKey(KeyEvent::new(KeyCode::Char('K'), KeyModifiers::NONE)),
            TIMEOUT,
        );
        Reducer::reduce(&mut state, Action::Submit, TIMEOUT);
        let effects = Reducer::reduce(&mut state, Action::Submit, TIMEOUT);

        assert!(state.completed);
        assert!(state.should_exit);
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::Emit(AppEvent::Submitted))));
    }

    #[test]
    fn submit_from_last_field_returns_to_first_error() {
        let mut state = state();
        Reducer::reduce(&mut state, Action::NextInput, TIMEOUT);
        // name is now marked invalid from the blur validation
        state.engine.clear_error(&mut state.step.nodes, "name");

        let effects = Reducer::reduce(&mut state, Action::Submit, TIMEOUT);

        assert_eq!(state.engine.focused_id().map(String::as_str), Some("name"));
        assert!(!state.completed);
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::CancelClearError(id) if id == "name"
        )));
    }

    #[test]
    fn typing_clears_and_cancels_pending_error() {
        let mut state = state();
        Reducer::reduce(&mut state, Action::Submit, TIMEOUT);

        let effects = Reducer::reduce(
            &mut state,
            Action::InputKey(KeyEvent::new(KeyCode::Char('K'), KeyModifiers::NONE)),
            TIMEOUT,
        );

        let name = find_input(&state.step.nodes, "name").unwrap();
        assert_eq!(name.error(), None);
        assert!(effects.iter().any(|e| matches!(
            e,
            Effect::CancelClearError(id) if id == "name"
        )));
    }
}
