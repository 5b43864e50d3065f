use crate::action_bindings::ActionBindings;
use crate::core::event::Action;
use crate::core::event_queue::{AppEvent, EventQueue};
use crate::core::node::Node;
use crate::core::reducer::{Effect, Reducer};
use crate::core::state::AppState;
use crate::core::step::Step;
use crate::data;
use crate::date_input::DateInput;
use crate::dropdown_input::DropdownInput;
use crate::number_input::NumberInput;
use crate::picker_input::PickerInput;
use crate::select_input::SelectInput;
use crate::terminal::{KeyEvent, Terminal};
use crate::text_input::TextInput;
use crate::ui::renderer::Renderer;
use crate::ui::theme::Theme;
use crate::validators;
use std::io;
use std::time::{Duration, Instant};

const ERROR_TIMEOUT: Duration = Duration::from_secs(2);

pub struct App {
    pub state: AppState,
    pub renderer: Renderer,
    action_bindings: ActionBindings,
    event_queue: EventQueue,
    theme: Theme,
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::new(build_step()),
            renderer: Renderer::new(),
            action_bindings: ActionBindings::new(),
            event_queue: EventQueue::new(),
            theme: Theme::default_theme(),
        }
    }

    pub fn tick(&mut self) -> bool {
        let mut processed_any = false;
        loop {
            let now = Instant::now();
            let Some(event) = self.event_queue.next_ready(now) else {
                break;
            };
            self.dispatch_event(event);
            processed_any = true;
        }
        processed_any
    }

    pub fn render(&mut self, terminal: &mut Terminal) -> io::Result<()> {
        self.renderer.render(&self.state.step, &self.theme, terminal)
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) {
        self.event_queue.emit(AppEvent::Key(key_event));
    }

    pub fn should_exit(&self) -> bool {
        self.state.should_exit
    }

    pub fn completed(&self) -> bool {
        self.state.completed
    }

    fn dispatch_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key_event) => {
                // The focused input may claim keys like Tab or Esc
                // ahead of the global bindings.
                let captured = self
                    .state
                    .engine
                    .focused_caps(&self.state.step.nodes)
                    .map(|caps| caps.captures_key(key_event.code, key_event.modifiers))
                    .unwrap_or(false);

                if !captured {
                    if let Some(action) = self.action_bindings.handle_key(&key_event) {
                        let effects = Reducer::reduce(&mut self.state, action, ERROR_TIMEOUT);
                        self.apply_effects(effects);
                        return;
                    }
                }

                let effects =
                    Reducer::reduce(&mut self.state, Action::InputKey(key_event), ERROR_TIMEOUT);
                self.apply_effects(effects);
            }
            AppEvent::Action(action) => {
                let effects = Reducer::reduce(&mut self.state, action, ERROR_TIMEOUT);
                self.apply_effects(effects);
            }
            AppEvent::InputChanged { .. } | AppEvent::FocusChanged { .. } | AppEvent::Submitted => {
            }
        }
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Emit(event) => self.event_queue.emit(event),
                Effect::EmitAfter(event, delay) => self.event_queue.emit_after(event, delay),
                Effect::CancelClearError(id) => self.event_queue.cancel_clear_error_message(&id),
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn build_step() -> Step {
    Step {
        prompt: "Rapper profile".to_string(),
        hint: Some("Tab/Shift+Tab to move, Enter to confirm a field, Esc to quit".to_string()),
        nodes: vec![
            Node::input(SelectInput::new(
                "top_rapper",
                "Top Rapper",
                data::rappers(),
            )),
            Node::input(
                TextInput::new("rap_name", "Rap Name")
                    .with_value("Killer Mike")
                    .with_validator(validators::required())
                    .with_validator(validators::min_length(2)),
            ),
            Node::input(
                NumberInput::new("album_sales", "Album Sales")
                    .with_value(4_200_000)
                    .with_step(1000),
            ),
            Node::input(
                TextInput::new("email", "Email")
                    .with_value("snoop@dogg.pound")
                    .with_validator(validators::required())
                    .with_validator(validators::email()),
            ),
            Node::input(
                SelectInput::new("job", "Job", data::jobs()).with_placeholder("Select Job"),
            ),
            Node::input(
                DropdownInput::new("top_album", "Top Album", data::snoop_albums())
                    .with_placeholder("Select Top Album"),
            ),
            Node::input(PickerInput::new("country", "Country", data::countries())),
            Node::input(DateInput::new("start_date", "Rapping Since", "DD/MM/YYYY")),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::node::find_input;
    use crate::terminal::{KeyCode, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        app.tick();
    }

    #[test]
    fn starts_on_the_top_rapper_field() {
        let app = App::new();
        assert_eq!(
            app.state.engine.focused_id().map(String::as_str),
            Some("top_rapper")
        );
        assert!(!app.should_exit());
    }

    #[test]
    fn defaults_match_the_profile_preset() {
        let app = App::new();
        let nodes = &app.state.step.nodes;
        assert_eq!(find_input(nodes, "rap_name").unwrap().value(), "Killer Mike");
        assert_eq!(find_input(nodes, "album_sales").unwrap().value(), "4200000");
        assert_eq!(find_input(nodes, "email").unwrap().value(), "snoop@dogg.pound");
        assert_eq!(find_input(nodes, "job").unwrap().value(), "");
        assert_eq!(find_input(nodes, "country").unwrap().value(), "");
    }

    #[test]
    fn tab_moves_to_the_next_field() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        assert_eq!(
            app.state.engine.focused_id().map(String::as_str),
            Some("rap_name")
        );
    }

    #[test]
    fn esc_exits_without_completing() {
        let mut app = App::new();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_exit());
        assert!(!app.completed());
    }

    #[test]
    fn ctrl_c_exits() {
        let mut app = App::new();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        app.tick();
        assert!(app.should_exit());
    }

    #[test]
    fn tab_is_captured_while_country_suggestions_are_open() {
        let mut app = App::new();
        let index = app.state.engine.find_index_by_id("country").unwrap();
        let mut events = Vec::new();
        app.state
            .engine
            .set_focus(&mut app.state.step.nodes, Some(index), &mut events);

        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('r'));
        // Tab autocompletes inside the picker instead of changing focus
        press(&mut app, KeyCode::Tab);
        assert_eq!(
            app.state.engine.focused_id().map(String::as_str),
            Some("country")
        );
    }
}
