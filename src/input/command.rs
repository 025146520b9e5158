//! Commands returned to the host by widget entry points.

use serde::Serialize;

/// Side effect the host should dispatch after a widget entry point.
///
/// Widgets never emit events themselves; each entry point returns the
/// commands it produced and the host forwards them to its own event bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// The field value changed as a result of user action.
    Change { value: String },
}

impl Command {
    /// Build a change notification.
    pub fn change(value: impl Into<String>) -> Self {
        Command::Change {
            value: value.into(),
        }
    }

    /// The value carried by a change notification.
    pub fn value(&self) -> &str {
        match self {
            Command::Change { value } => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_serializes_tagged() {
        let json = serde_json::to_string(&Command::change("+44")).unwrap();
        assert_eq!(json, r#"{"type":"change","value":"+44"}"#);
    }

    #[test]
    fn test_value() {
        assert_eq!(Command::change("+1 618").value(), "+1 618");
    }
}
