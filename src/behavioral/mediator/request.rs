//! Mediator: typed requests
//!
//! Handlers register per request type; sending a request awaits the one
//! handler for its type.

use crate::config::PatternsConfig;
use crate::error::{PatternError, Result};
use futures::future::BoxFuture;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

pub trait Request: Send + 'static {
    type Response: Send + 'static;
}

pub trait RequestHandler<R: Request>: Send + Sync {
    fn handle(&self, request: R) -> BoxFuture<'_, R::Response>;
}

/// Routes each request type to the single handler registered for it.
/// Senders only know the request and response types.
#[derive(Default)]
pub struct Mediator {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Mediator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `R`, replacing any previous one.
    pub fn register<R, H>(&mut self, handler: H) -> &mut Self
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let handler: Arc<dyn RequestHandler<R>> = Arc::new(handler);
        self.handlers.insert(TypeId::of::<R>(), Box::new(handler));
        tracing::debug!("Registered handler for {}", type_name::<R>());
        self
    }

    pub fn has_handler<R: Request>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<R>())
    }

    pub async fn send<R: Request>(&self, request: R) -> Result<R::Response> {
        let handler = self
            .handlers
            .get(&TypeId::of::<R>())
            .and_then(|h| h.downcast_ref::<Arc<dyn RequestHandler<R>>>())
            .cloned()
            .ok_or(PatternError::NoHandler(type_name::<R>()))?;
        Ok(handler.handle(request).await)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PongResponse {
    pub timestamp: SystemTime,
}

impl PongResponse {
    pub fn unix_seconds(&self) -> u64 {
        self.timestamp
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct PingCommand;

impl Request for PingCommand {
    type Response = PongResponse;
}

pub struct PingCommandHandler;

impl RequestHandler<PingCommand> for PingCommandHandler {
    fn handle(&self, _request: PingCommand) -> BoxFuture<'_, PongResponse> {
        Box::pin(async {
            PongResponse {
                timestamp: SystemTime::now(),
            }
        })
    }
}

#[derive(Debug, Clone)]
pub struct ShoutRequest {
    pub text: String,
}

impl Request for ShoutRequest {
    type Response = String;
}

pub struct ShoutHandler;

impl RequestHandler<ShoutRequest> for ShoutHandler {
    fn handle(&self, request: ShoutRequest) -> BoxFuture<'_, String> {
        Box::pin(async move { format!("{}!", request.text.to_uppercase()) })
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let mut mediator = Mediator::new();
    mediator
        .register::<PingCommand, _>(PingCommandHandler)
        .register::<ShoutRequest, _>(ShoutHandler);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let (pong, shout) = runtime.block_on(async {
        let pong = mediator.send(PingCommand).await?;
        let shout = mediator
            .send(ShoutRequest {
                text: "hello mediator".to_string(),
            })
            .await?;
        Ok::<_, PatternError>((pong, shout))
    })?;

    writeln!(out, "We got a pong at {} (unix seconds)", pong.unix_seconds())?;
    writeln!(out, "Shout handler replied: {shout}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping_pong() {
        let mut mediator = Mediator::new();
        mediator.register::<PingCommand, _>(PingCommandHandler);
        let before = SystemTime::now();
        let pong = mediator.send(PingCommand).await.unwrap();
        assert!(pong.timestamp >= before);
    }

    #[tokio::test]
    async fn test_missing_handler() {
        let mediator = Mediator::new();
        assert!(!mediator.has_handler::<PingCommand>());
        let err = mediator.send(PingCommand).await.unwrap_err();
        assert!(matches!(err, PatternError::NoHandler(name) if name.ends_with("PingCommand")));
    }

    #[tokio::test]
    async fn test_routes_by_request_type() {
        let mut mediator = Mediator::new();
        mediator
            .register::<ShoutRequest, _>(ShoutHandler)
            .register::<PingCommand, _>(PingCommandHandler);
        let reply = mediator
            .send(ShoutRequest {
                text: "quiet".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(reply, "QUIET!");
        assert!(mediator.has_handler::<PingCommand>());
    }
}
