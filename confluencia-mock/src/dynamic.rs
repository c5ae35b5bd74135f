use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use confluencia_core::{
    AnalysisConnector, AnalysisRequest, ApiKey, ConfluenciaError, Symbol, Timeframe, Verdict,
};

/// Instruction for how a call should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Return the provided value after sleeping (tokio time) for the duration.
    Delay(Duration, T),
    /// Fail immediately with the provided error.
    Fail(ConfluenciaError),
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

/// One recorded Analysis Port call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Symbol passed to the connector.
    pub symbol: Symbol,
    /// Timeframe passed to the connector.
    pub timeframe: Timeframe,
    /// Credential passed to the connector.
    pub api_key: ApiKey,
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<(Symbol, Timeframe), MockBehavior<Verdict>>,
    requests: Vec<RecordedRequest>,
    completed: usize,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `analyze` calls on one symbol and timeframe.
    pub async fn set_behavior(
        &self,
        symbol: Symbol,
        timeframe: Timeframe,
        behavior: MockBehavior<Verdict>,
    ) {
        let mut guard = self.state.lock().await;
        guard.rules.insert((symbol, timeframe), behavior);
    }

    /// Set the same behavior for every timeframe of `symbol`.
    pub async fn set_all_timeframes(&self, symbol: &Symbol, behavior: MockBehavior<Verdict>) {
        let mut guard = self.state.lock().await;
        for tf in Timeframe::ALL {
            guard.rules.insert((symbol.clone(), tf), behavior.clone());
        }
    }

    /// Return a copy of the request log, in call order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().await.requests.clone()
    }

    /// Number of calls that ran to completion (success or failure).
    pub async fn completed_calls(&self) -> usize {
        self.state.lock().await.completed
    }

    /// Clear all configured behaviors and request logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.requests.clear();
        guard.completed = 0;
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Unscripted (symbol, timeframe) pairs answer `NotFound`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn AnalysisConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn AnalysisConnector>, controller)
    }

    async fn mark_completed(&self) {
        self.state.lock().await.completed += 1;
    }
}

#[async_trait]
impl AnalysisConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn analyze(&self, req: AnalysisRequest<'_>) -> Result<Verdict, ConfluenciaError> {
        // Record and snapshot the behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push(RecordedRequest {
                symbol: req.symbol.clone(),
                timeframe: req.timeframe,
                api_key: req.api_key.clone(),
            });
            guard
                .rules
                .get(&(req.symbol.clone(), req.timeframe))
                .cloned()
        };

        let out = match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Delay(d, v)) => {
                tokio::time::sleep(d).await;
                Ok(v)
            }
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(ConfluenciaError::not_found(format!(
                "analysis for {}",
                req.describe()
            ))),
        };
        self.mark_completed().await;
        out
    }
}
