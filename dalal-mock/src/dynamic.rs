use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use dalal_core::connector::{
    CompanyInfoProvider, DalalConnector, HistoryProvider, SnapshotProvider,
};
use dalal_core::{
    Capability, CompanyInfo, DalalError, HistorySpan, PricePoint, Symbol, TickerSnapshot,
};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(DalalError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    snapshot_rules: HashMap<Symbol, MockBehavior<TickerSnapshot>>,
    company_info_rules: HashMap<Symbol, MockBehavior<CompanyInfo>>,
    history_rules: HashMap<Symbol, MockBehavior<Vec<PricePoint>>>,
    calls: HashMap<(Capability, Symbol), usize>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `snapshot` calls for a specific symbol.
    pub async fn set_snapshot_behavior(
        &self,
        symbol: Symbol,
        behavior: MockBehavior<TickerSnapshot>,
    ) {
        let mut guard = self.state.lock().await;
        guard.snapshot_rules.insert(symbol, behavior);
    }

    /// Set the behavior for `company_info` calls for a specific symbol.
    pub async fn set_company_info_behavior(
        &self,
        symbol: Symbol,
        behavior: MockBehavior<CompanyInfo>,
    ) {
        let mut guard = self.state.lock().await;
        guard.company_info_rules.insert(symbol, behavior);
    }

    /// Set the behavior for `history` calls for a specific symbol.
    pub async fn set_history_behavior(
        &self,
        symbol: Symbol,
        behavior: MockBehavior<Vec<PricePoint>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.history_rules.insert(symbol, behavior);
    }

    /// Number of calls seen for `capability` on `symbol`.
    pub async fn calls(&self, capability: Capability, symbol: &Symbol) -> usize {
        let guard = self.state.lock().await;
        guard
            .calls
            .get(&(capability, symbol.clone()))
            .copied()
            .unwrap_or_default()
    }

    /// Number of calls seen for `capability` across all symbols.
    pub async fn total_calls(&self, capability: Capability) -> usize {
        let guard = self.state.lock().await;
        guard
            .calls
            .iter()
            .filter(|((cap, _), _)| *cap == capability)
            .map(|(_, n)| *n)
            .sum()
    }

    /// Clear all configured behaviors and call counters.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.snapshot_rules.clear();
        guard.company_info_rules.clear();
        guard.history_rules.clear();
        guard.calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn DalalConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn DalalConnector>, controller)
    }

    /// Record the call and snapshot the configured behavior without holding
    /// the lock across await points.
    async fn behavior<T: Clone>(
        &self,
        capability: Capability,
        symbol: &Symbol,
        rules: impl FnOnce(&InternalState) -> Option<&MockBehavior<T>>,
    ) -> Option<MockBehavior<T>> {
        let mut guard = self.state.lock().await;
        *guard.calls.entry((capability, symbol.clone())).or_default() += 1;
        rules(&*guard).cloned()
    }
}

async fn play<T>(behavior: Option<MockBehavior<T>>, capability: Capability) -> Result<T, DalalError> {
    match behavior {
        Some(MockBehavior::Return(v)) => Ok(v),
        Some(MockBehavior::Fail(e)) => Err(e),
        Some(MockBehavior::Hang) => {
            std::future::pending::<()>().await;
            unreachable!()
        }
        None => Err(DalalError::unsupported(capability.as_str())),
    }
}

impl DalalConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_snapshot_provider(&self) -> Option<&dyn SnapshotProvider> {
        Some(self as &dyn SnapshotProvider)
    }

    fn as_company_info_provider(&self) -> Option<&dyn CompanyInfoProvider> {
        Some(self as &dyn CompanyInfoProvider)
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
}

#[async_trait]
impl SnapshotProvider for DynamicMockConnector {
    async fn snapshot(&self, symbol: &Symbol) -> Result<TickerSnapshot, DalalError> {
        let behavior = self
            .behavior(Capability::Snapshot, symbol, |s| s.snapshot_rules.get(symbol))
            .await;
        play(behavior, Capability::Snapshot).await
    }
}

#[async_trait]
impl CompanyInfoProvider for DynamicMockConnector {
    async fn company_info(&self, symbol: &Symbol) -> Result<CompanyInfo, DalalError> {
        let behavior = self
            .behavior(Capability::CompanyInfo, symbol, |s| {
                s.company_info_rules.get(symbol)
            })
            .await;
        play(behavior, Capability::CompanyInfo).await
    }
}

#[async_trait]
impl HistoryProvider for DynamicMockConnector {
    async fn history(
        &self,
        symbol: &Symbol,
        _span: HistorySpan,
    ) -> Result<Vec<PricePoint>, DalalError> {
        let behavior = self
            .behavior(Capability::History, symbol, |s| s.history_rules.get(symbol))
            .await;
        play(behavior, Capability::History).await
    }
}
