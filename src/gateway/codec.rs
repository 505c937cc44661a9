//! Wire codec for the engine's line-delimited JSON protocol.
//!
//! Requests are `{"command": <name>, "params": {...}}` on one line; `params` is
//! left out entirely when empty. Replies are one JSON object per line carrying
//! at least a boolean `success` flag.

use super::catalog::OperationKind;
use super::error::{GatewayError, GatewayResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A single command bound for the engine
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    kind: OperationKind,
    params: Map<String, Value>,
}

impl Command {
    /// Create a command from a name and its parameter mapping.
    pub fn new(kind: OperationKind, params: Map<String, Value>) -> Self {
        Self { kind, params }
    }

    /// Operation this command invokes
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Wire name
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Parameter mapping
    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }
}

#[derive(Serialize)]
struct Envelope<'a> {
    command: &'a str,
    #[serde(skip_serializing_if = "Map::is_empty")]
    params: &'a Map<String, Value>,
}

/// Serialize a command into one newline-terminated JSON line.
pub fn encode(command: &Command) -> GatewayResult<Vec<u8>> {
    let envelope = Envelope {
        command: command.name(),
        params: &command.params,
    };
    // serde_json never emits raw newlines; string contents are escaped.
    let mut payload = serde_json::to_vec(&envelope)
        .map_err(|err| GatewayError::Validation(format!("unencodable parameters: {err}")))?;
    payload.push(b'\n');
    Ok(payload)
}

/// Decoded engine reply
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    success: bool,
    fields: Map<String, Value>,
}

impl Reply {
    /// Whether the engine reported success
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Look up a single field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Take ownership of the command-specific fields.
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// Convert a failed reply into `EngineRejected`, pass a successful one through.
    pub fn into_result(self, command: OperationKind) -> GatewayResult<Reply> {
        if self.success {
            return Ok(self);
        }
        // Non-string error payloads are carried as their JSON text.
        let message = match self.fields.get("error") {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Null) | None => {
                "engine reported failure without an error message".to_string()
            }
            Some(other) => other.to_string(),
        };
        Err(GatewayError::EngineRejected {
            command: command.as_str().to_string(),
            message,
        })
    }

    /// Deserialize the command-specific fields into a typed result.
    pub fn parse<T: DeserializeOwned>(self, command: OperationKind) -> GatewayResult<T> {
        serde_json::from_value(Value::Object(self.fields)).map_err(|err| {
            GatewayError::Decode(format!("{} reply: {err}", command.as_str()))
        })
    }
}

/// Parse one reply line.
pub fn decode(line: &[u8]) -> GatewayResult<Reply> {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);

    let value: Value = serde_json::from_slice(line)?;
    let Value::Object(mut fields) = value else {
        return Err(GatewayError::Decode("reply is not a JSON object".into()));
    };

    let success = match fields.remove("success") {
        Some(Value::Bool(flag)) => flag,
        Some(other) => {
            return Err(GatewayError::Decode(format!(
                "reply success flag is not a boolean: {other}"
            )));
        }
        None => return Err(GatewayError::Decode("reply missing success flag".into())),
    };

    Ok(Reply { success, fields })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn encode_omits_empty_params() {
        let command = Command::new(OperationKind::GetSceneInfo, Map::new());
        let bytes = encode(&command).unwrap();
        assert_eq!(bytes, b"{\"command\":\"get_scene_info\"}\n");
    }

    #[test]
    fn encode_is_single_line() {
        let command = Command::new(
            OperationKind::ImportAsset,
            params(json!({"file_path": "/tmp/a\nb.png", "asset_name": "tex"})),
        );
        let bytes = encode(&command).unwrap();
        assert_eq!(bytes.iter().filter(|b| **b == b'\n').count(), 1);
        assert_eq!(bytes.last(), Some(&b'\n'));

        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["command"], "import_asset");
        assert_eq!(value["params"]["asset_name"], "tex");
    }

    #[test]
    fn decode_splits_success_from_fields() {
        let reply = decode(b"{\"success\":true,\"actor_id\":\"Cube_1\"}\n").unwrap();
        assert!(reply.is_success());
        assert_eq!(reply.get("actor_id"), Some(&json!("Cube_1")));
        assert!(reply.get("success").is_none());
    }

    #[test]
    fn decode_rejects_non_objects() {
        assert!(matches!(decode(b"[1,2]\n"), Err(GatewayError::Decode(_))));
        assert!(matches!(decode(b"not json\n"), Err(GatewayError::Decode(_))));
        assert!(matches!(decode(b"{\"actor_id\":1}\n"), Err(GatewayError::Decode(_))));
        assert!(matches!(
            decode(b"{\"success\":\"yes\"}\n"),
            Err(GatewayError::Decode(_))
        ));
    }

    #[test]
    fn failed_reply_becomes_engine_rejected() {
        let reply = decode(b"{\"success\": false, \"error\": \"actor not found\"}\r\n").unwrap();
        let err = reply.into_result(OperationKind::DeleteActor).unwrap_err();
        match err {
            GatewayError::EngineRejected { command, message } => {
                assert_eq!(command, "delete_actor");
                assert_eq!(message, "actor not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn structured_error_payload_is_kept() {
        let reply =
            decode(b"{\"success\": false, \"error\": {\"reason\": \"locked\", \"level\": 2}}\n")
                .unwrap();
        let err = reply.into_result(OperationKind::SetTransform).unwrap_err();
        assert_eq!(err.engine_message(), Some(r#"{"level":2,"reason":"locked"}"#));
    }

    #[test]
    fn missing_error_text_gets_placeholder() {
        let reply = decode(b"{\"success\": false, \"error\": null}\n").unwrap();
        let err = reply.into_result(OperationKind::DeleteActor).unwrap_err();
        assert_eq!(
            err.engine_message(),
            Some("engine reported failure without an error message")
        );
    }
}
