use crate::core::event::Action;
use crate::terminal::KeyEvent;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum AppEvent {
    Key(KeyEvent),
    Action(Action),
    InputChanged {
        id: String,
        value: String,
    },
    FocusChanged {
        from: Option<String>,
        to: Option<String>,
    },
    Submitted,
}

#[derive(Debug, Clone)]
struct ScheduledEvent {
    due: Instant,
    event: AppEvent,
}

pub struct EventQueue {
    queue: VecDeque<AppEvent>,
    scheduled: Vec<ScheduledEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            scheduled: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: AppEvent) {
        self.queue.push_back(event);
    }

    pub fn emit_after(&mut self, event: AppEvent, delay: Duration) {
        self.scheduled.push(ScheduledEvent {
            due: Instant::now() + delay,
            event,
        });
    }

    /// Drops any pending or scheduled error-clear for the given input,
    /// so a fresh error keeps its full display window.
    pub fn cancel_clear_error_message(&mut self, id: &str) {
        self.queue.retain(|queued| match queued {
            AppEvent::Action(Action::ClearErrorMessage(queued_id)) => queued_id != id,
            _ => true,
        });
        self.scheduled.retain(|scheduled| match &scheduled.event {
            AppEvent::Action(Action::ClearErrorMessage(scheduled_id)) => scheduled_id != id,
            _ => true,
        });
    }

    pub fn next_ready(&mut self, now: Instant) -> Option<AppEvent> {
        self.move_due_to_queue(now);
        self.queue.pop_front()
    }

    fn move_due_to_queue(&mut self, now: Instant) {
        let mut due = Vec::new();
        self.scheduled.retain(|scheduled| {
            if scheduled.due <= now {
                due.push(scheduled.event.clone());
                false
            } else {
                true
            }
        });
        self.queue.extend(due);
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emitted_events_come_back_in_order() {
        let mut queue = EventQueue::new();
        queue.emit(AppEvent::Submitted);
        queue.emit(AppEvent::Action(Action::Exit));
        assert!(matches!(
            queue.next_ready(Instant::now()),
            Some(AppEvent::Submitted)
        ));
        assert!(matches!(
            queue.next_ready(Instant::now()),
            Some(AppEvent::Action(Action::Exit))
        ));
        assert!(queue.next_ready(Instant::now()).is_none());
    }

    #[test]
    fn scheduled_events_wait_for_their_due_time() {
        let mut queue = EventQueue::new();
        queue.emit_after(AppEvent::Submitted, Duration::from_secs(60));
        assert!(queue.next_ready(Instant::now()).is_none());
        let later = Instant::now() + Duration::from_secs(120);
        assert!(matches!(queue.next_ready(later), Some(AppEvent::Submitted)));
    }

    #[test]
    fn cancel_removes_matching_error_clears_only() {
        let mut queue = EventQueue::new();
        queue.emit(AppEvent::Action(Action::ClearErrorMessage("email".into())));
        queue.emit_after(
            AppEvent::Action(Action::ClearErrorMessage("email".into())),
            Duration::from_millis(1),
        );
        queue.emit(AppEvent::Action(Action::ClearErrorMessage("name".into())));

        queue.cancel_clear_error_message("email");

        let later = Instant::now() + Duration::from_secs(1);
        match queue.next_ready(later) {
            Some(AppEvent::Action(Action::ClearErrorMessage(id))) => assert_eq!(id, "name"),
            other => panic!("unexpected event: {:?}", other.is_some()),
        }
        assert!(queue.next_ready(later).is_none());
    }
}
