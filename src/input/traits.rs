//! Host-facing widget trait.

use super::command::Command;

/// Event entry points shared by the input widgets.
///
/// Each call runs to completion synchronously and returns the command the
/// host should dispatch, if any.
pub trait InputWidget {
    /// Handle an input-change event carrying the current field text.
    fn on_input(&mut self, text: &str) -> Option<Command>;

    /// Handle the field gaining focus.
    fn on_focus(&mut self) -> Option<Command>;

    /// Handle the field losing focus.
    fn on_blur(&mut self) -> Option<Command>;

    /// The text currently shown in the field.
    fn value(&self) -> &str;
}
