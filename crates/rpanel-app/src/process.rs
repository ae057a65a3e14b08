//! Message processing - runs messages through the TEA update function

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::scheduler::Scheduler;
use crate::state::AppState;

/// Process a message through the TEA update function, executing any
/// resulting action and draining follow-up messages.
pub fn process_message(state: &mut AppState, message: Message, scheduler: &mut Scheduler) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, scheduler);
        }

        msg = result.message;
    }
}
