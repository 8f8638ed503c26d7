//! Factory: async initialisation
//!
//! The constructor is private, so an object is only ever seen after its
//! async `init` has run.

use crate::config::PatternsConfig;
use crate::error::Result;
use futures::future::join_all;
use std::io::Write;
use std::time::Duration;

/// Can only be obtained fully initialised, through `create`.
#[derive(Debug)]
pub struct AsyncFactory {
    id: usize,
    initialized: bool,
}

impl AsyncFactory {
    fn new(id: usize) -> Self {
        Self {
            id,
            initialized: false,
        }
    }

    async fn init(mut self, delay: Duration) -> Self {
        tokio::time::sleep(delay).await;
        self.initialized = true;
        tracing::debug!("AsyncFactory {} initialised after {:?}", self.id, delay);
        self
    }

    pub async fn create(id: usize, delay: Duration) -> Self {
        Self::new(id).init(delay).await
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

pub fn run(out: &mut dyn Write, config: &PatternsConfig) -> Result<()> {
    let delay = Duration::from_millis(config.factory.init_delay_ms);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let factories = runtime.block_on(async {
        // Three at once cost one delay, not three.
        join_all((1..=3).map(|id| AsyncFactory::create(id, delay))).await
    });

    for factory in &factories {
        writeln!(
            out,
            "AsyncFactory {} ready: {}",
            factory.id(),
            factory.is_initialized()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_create_initialises() {
        let factory = AsyncFactory::create(7, Duration::from_millis(1)).await;
        assert!(factory.is_initialized());
        assert_eq!(factory.id(), 7);
    }

    #[tokio::test]
    async fn test_concurrent_creation_overlaps() {
        let start = Instant::now();
        let made = join_all((0..4).map(|id| AsyncFactory::create(id, Duration::from_millis(50)))).await;
        assert_eq!(made.len(), 4);
        assert!(start.elapsed() < Duration::from_millis(190));
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "AsyncFactory 1 ready: true\nAsyncFactory 2 ready: true\nAsyncFactory 3 ready: true\n"
        );
    }
}
