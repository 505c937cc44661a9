//! NDJSON tool service in front of the gateway.
//!
//! Each line on the reader is a request envelope
//! `{"id": .., "command": "<tool>", "params": {..}, "timeout_ms": n}`; each
//! reply is written as one line `{"id": .., "result": {..}}` or
//! `{"id": .., "error": {"code": .., "message": ..}}`. Requests run
//! concurrently, so replies may come back in a different order than the
//! requests and are matched by `id`.

use crate::gateway::{Gateway, GatewayError, Operation, OperationKind};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::io;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

/// Command that lists the available tools instead of invoking one
pub const LIST_TOOLS: &str = "list_tools";

/// Tool front end over a shared [`Gateway`]
#[derive(Debug, Clone)]
pub struct ToolService {
    gateway: Gateway,
}

impl ToolService {
    /// Wrap a gateway.
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Consume request lines from `reader` until EOF, writing replies to `writer`.
    ///
    /// Lines that are not valid JSON (including invalid UTF-8) get a
    /// `parse_error` reply. Returns once every in-flight request has been
    /// answered, or as soon as writing a reply fails.
    pub async fn run<R, W>(&self, reader: R, mut writer: W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<ResponseEnvelope>();

        let gateway = self.gateway.clone();
        let read_loop = async move {
            let mut reader = reader;
            let mut line = Vec::new();
            loop {
                line.clear();
                // A failed writer closes the channel; stop issuing commands then.
                let read = tokio::select! {
                    read = reader.read_until(b'\n', &mut line) => read?,
                    () = tx.closed() => break,
                };
                if read == 0 {
                    break;
                }
                if line.trim_ascii().is_empty() {
                    continue;
                }
                let request = line.clone();
                let tx = tx.clone();
                let gateway = gateway.clone();
                tokio::spawn(async move {
                    let response = handle_line(&gateway, &request).await;
                    let _ = tx.send(response);
                });
            }
            Ok::<(), io::Error>(())
        };

        let write_loop = async move {
            while let Some(response) = rx.recv().await {
                let mut line = serde_json::to_vec(&response)?;
                line.push(b'\n');
                writer.write_all(&line).await?;
                writer.flush().await?;
            }
            Ok::<(), io::Error>(())
        };

        let (read, write) = tokio::join!(read_loop, write_loop);
        read?;
        write
    }
}

/// Description of one callable tool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    /// Tool name (the wire command name)
    pub name: &'static str,
    /// What the tool does
    pub description: &'static str,
    /// JSON Schema of the tool arguments
    pub parameters: Value,
}

/// Descriptors for every catalog operation.
pub fn tool_descriptors() -> Vec<ToolDescriptor> {
    OperationKind::ALL
        .iter()
        .map(|kind| ToolDescriptor {
            name: kind.as_str(),
            description: kind.description(),
            parameters: kind.parameters_schema(),
        })
        .collect()
}

async fn handle_line(gateway: &Gateway, line: &[u8]) -> ResponseEnvelope {
    let request: RequestEnvelope = match serde_json::from_slice(line) {
        Ok(request) => request,
        Err(err) => {
            return ResponseEnvelope::from_error(Value::Null, ServiceError::Parse(err.to_string()));
        }
    };

    match dispatch(gateway, &request).await {
        Ok(result) => ResponseEnvelope::success(request.id, result),
        Err(err) => ResponseEnvelope::from_error(request.id, err),
    }
}

async fn dispatch(gateway: &Gateway, request: &RequestEnvelope) -> Result<Value, ServiceError> {
    if request.command == LIST_TOOLS {
        return Ok(json!({ "tools": tool_descriptors() }));
    }

    let kind: OperationKind = request
        .command
        .parse()
        .map_err(|_| ServiceError::Unsupported(request.command.clone()))?;
    let operation = Operation::from_arguments(kind, &request.params)?;
    let timeout = request
        .timeout_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| gateway.timeout());

    let reply = gateway.execute_with_timeout(operation, timeout).await?;
    Ok(Value::Object(reply.into_fields()))
}

#[derive(Debug)]
enum ServiceError {
    Parse(String),
    Unsupported(String),
    Gateway(GatewayError),
}

impl From<GatewayError> for ServiceError {
    fn from(err: GatewayError) -> Self {
        ServiceError::Gateway(err)
    }
}

#[derive(Deserialize)]
struct RequestEnvelope {
    #[serde(default)]
    id: Value,
    command: String,
    #[serde(default)]
    params: Value,
    #[serde(default)]
    timeout_ms: Option<u64>,
}

#[derive(Serialize)]
struct ResponseEnvelope {
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorEnvelope>,
}

impl ResponseEnvelope {
    fn success(id: Value, result: Value) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    fn from_error(id: Value, error: ServiceError) -> Self {
        Self {
            id,
            result: None,
            error: Some(ErrorEnvelope::from(error)),
        }
    }
}

#[derive(Serialize)]
struct ErrorEnvelope {
    code: String,
    message: String,
}

impl From<ServiceError> for ErrorEnvelope {
    fn from(error: ServiceError) -> Self {
        match error {
            ServiceError::Parse(message) => ErrorEnvelope {
                code: "parse_error".into(),
                message,
            },
            ServiceError::Unsupported(command) => ErrorEnvelope {
                code: "unsupported_command".into(),
                message: format!("Command '{command}' is not supported"),
            },
            ServiceError::Gateway(err) => {
                let message = match &err {
                    GatewayError::EngineRejected { message, .. } => message.clone(),
                    other => other.to_string(),
                };
                ErrorEnvelope {
                    code: err.code().into(),
                    message,
                }
            }
        }
    }
}
