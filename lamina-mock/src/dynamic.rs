use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use lamina_core::{LaminaError, RawSpan, SpanSource};

/// Instruction for how `annotate` should behave.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(LaminaError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    behavior: Option<MockBehavior<Vec<RawSpan>>>,
    requests: Vec<String>,
    shutdowns: usize,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for subsequent `annotate` calls.
    pub async fn set_behavior(&self, behavior: MockBehavior<Vec<RawSpan>>) {
        let mut guard = self.state.lock().await;
        guard.behavior = Some(behavior);
    }

    /// Return a copy of every text the source was asked to annotate.
    pub async fn requests(&self) -> Vec<String> {
        let guard = self.state.lock().await;
        guard.requests.clone()
    }

    /// Number of times `shutdown` was called.
    pub async fn shutdowns(&self) -> usize {
        let guard = self.state.lock().await;
        guard.shutdowns
    }

    /// Clear the configured behavior and request log.
    pub async fn clear(&self) {
        let mut guard = self.state.lock().await;
        guard.behavior = None;
        guard.requests.clear();
        guard.shutdowns = 0;
    }
}

/// A source that defers all behavior to an external controller.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn SpanSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn SpanSource>, controller)
    }
}

#[async_trait]
impl SpanSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn annotate(&self, text: &str) -> Result<Vec<RawSpan>, LaminaError> {
        // Snapshot behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push(text.to_string());
            guard.behavior.clone()
        };

        match behavior {
            Some(MockBehavior::Return(spans)) => Ok(spans),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Ok(Vec::new()),
        }
    }

    async fn shutdown(&self) {
        let mut guard = self.state.lock().await;
        guard.shutdowns += 1;
    }
}
