use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::DrawCommand;

pub const DRAW_COMMAND_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope for forwarding a draw command to an out-of-process or
/// foreign-runtime plotting backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommandJsonContractV1 {
    pub schema_version: u32,
    #[serde(flatten)]
    pub command: DrawCommand,
}

impl DrawCommand {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = DrawCommandJsonContractV1 {
            schema_version: DRAW_COMMAND_JSON_SCHEMA_V1,
            command: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize draw command contract v1: {e}"))
        })
    }

    /// Parses either a versioned envelope or a bare draw command.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse draw command json payload: {e}"))
        })?;
        let command = if value.get("schema_version").is_some() {
            let payload: DrawCommandJsonContractV1 = serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse draw command contract: {e}"))
            })?;
            if payload.schema_version != DRAW_COMMAND_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported draw command schema version: {}",
                    payload.schema_version
                )));
            }
            payload.command
        } else {
            serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse draw command json: {e}"))
            })?
        };
        command.validate()?;
        Ok(command)
    }
}
