/*!
General callbacks associated with a knowledge base.

# Callback types

Callbacks may be mutable functions.
As queries take a shared reference to a knowledge base, a callback is held in a [RefCell](std::cell::RefCell) and borrowed for the duration of each call.
*/

use crate::normal::Normalizer;

use super::GenericKnowledgeBase;

/// Terminates a query, if true.
///
/// Checked once before each pass through the working set.
pub type CallbackTerminate = dyn FnMut() -> bool;

impl<N: Normalizer> GenericKnowledgeBase<N> {
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        *self.callback_terminate.get_mut() = Some(callback);
    }

    pub fn clear_callback_terminate(&mut self) {
        *self.callback_terminate.get_mut() = None;
    }

    pub fn check_callback_terminate(&self) -> bool {
        if let Some(callback) = self.callback_terminate.borrow_mut().as_mut() {
            callback()
        } else {
            false
        }
    }
}
