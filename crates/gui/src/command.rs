//! JSON command protocol for scripted driving of a session.
//!
//! Each command does exactly what the matching UI gesture does, so a
//! script replays a user session step by step.

use serde::{Deserialize, Serialize};
use shared::ControlKind;

use crate::coordinator::ResizeOutcome;
use crate::state::Session;

/// A command a script can execute
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ConfigCommand {
    /// Move a slider; the value is truncated to whole centimeters
    SetControl { control: ControlKind, value_cm: f64 },
    /// Click on the module at `index`
    Select { index: usize },
    /// Click at normalized device coordinates (-1..1, y up)
    PickAt { x: f32, y: f32 },
    /// Dump the chain, selection and slider values
    Inspect,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("invalid command JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("module index {index} out of range (chain length {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(error: &CommandError) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            data: None,
        }
    }
}

/// Execute a single command on the session.
pub fn execute_command(session: &mut Session, cmd: ConfigCommand) -> CommandResponse {
    match cmd {
        ConfigCommand::SetControl { control, value_cm } => {
            let outcome = session.set_control(control, value_cm);
            let data = match outcome {
                ResizeOutcome::Resized { index } => {
                    serde_json::json!({ "resized": index, "appended": null })
                }
                ResizeOutcome::Split { index, appended } => {
                    serde_json::json!({ "resized": index, "appended": appended })
                }
                ResizeOutcome::Ignored => {
                    serde_json::json!({ "resized": null, "appended": null })
                }
            };
            CommandResponse::ok_with_data(data)
        }

        ConfigCommand::Select { index } => {
            let len = session.chain.len();
            if index >= len {
                return CommandResponse::err(&CommandError::IndexOutOfRange { index, len });
            }
            let selected = session.pick_index(index);
            CommandResponse::ok_with_data(serde_json::json!({ "selected": selected }))
        }

        ConfigCommand::PickAt { x, y } => {
            let selected = session.pick_at([x, y]);
            CommandResponse::ok_with_data(serde_json::json!({ "selected": selected }))
        }

        ConfigCommand::Inspect => match serde_json::to_value(session.snapshot()) {
            Ok(data) => CommandResponse::ok_with_data(data),
            Err(e) => CommandResponse::err(&CommandError::InvalidJson(e)),
        },
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(session: &mut Session, json: &str) -> Result<CommandResponse, CommandError> {
    let cmd: ConfigCommand = serde_json::from_str(json)?;
    Ok(execute_command(session, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    session: &mut Session,
    json: &str,
) -> Result<Vec<CommandResponse>, CommandError> {
    let cmds: Vec<ConfigCommand> = serde_json::from_str(json)?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(session, cmd))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::settings::ControlSettings;

    fn session() -> Session {
        Session::with_seed(&ControlSettings::default(), 17)
    }

    #[test]
    fn test_command_serde_set_control() {
        let json = r#"{"command": "set_control", "control": "width", "value_cm": 75}"#;
        let cmd: ConfigCommand = serde_json::from_str(json).unwrap();
        match cmd {
            ConfigCommand::SetControl { control, value_cm } => {
                assert_eq!(control, ControlKind::Width);
                assert_eq!(value_cm, 75.0);
            }
            _ => panic!("Expected SetControl"),
        }
    }

    #[test]
    fn test_command_serde_inspect() {
        let cmd: ConfigCommand = serde_json::from_str(r#"{"command": "inspect"}"#).unwrap();
        assert!(matches!(cmd, ConfigCommand::Inspect));
    }

    #[test]
    fn test_execute_split_reports_appended() {
        let mut s = session();
        let json = r#"{"command": "set_control", "control": "width", "value_cm": 90}"#;
        let resp = execute_json(&mut s, json).unwrap();
        assert!(resp.success);
        let data = resp.data.unwrap();
        assert_eq!(data["resized"], 0);
        assert_eq!(data["appended"], 1);
    }

    #[test]
    fn test_execute_select_out_of_range() {
        let mut s = session();
        let resp = execute_json(&mut s, r#"{"command": "select", "index": 5}"#).unwrap();
        assert!(!resp.success);
        assert!(resp.error.unwrap().contains("out of range"));
        assert_eq!(s.chain.selected_index(), Some(0));
    }

    #[test]
    fn test_execute_invalid_json() {
        let mut s = session();
        let err = execute_json(&mut s, r#"{"command": "explode"}"#).unwrap_err();
        assert!(matches!(err, CommandError::InvalidJson(_)));
    }

    #[test]
    fn test_execute_inspect() {
        let mut s = session();
        let resp = execute_json(&mut s, r#"{"command": "inspect"}"#).unwrap();
        let data = resp.data.unwrap();
        assert_eq!(data["modules"].as_array().unwrap().len(), 1);
        assert_eq!(data["controls_cm"], serde_json::json!([60, 60, 60]));
    }
}
