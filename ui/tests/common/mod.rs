use std::sync::Arc;

use egui_kittest::Harness;
use roster_business::test_utils::MockGateway;
use roster_ui::pages::patients_page;
use roster_ui::state::State;

/// Frames to step so that queued completions are applied and rendered.
const SETTLE_STEPS: usize = 4;

pub struct TestCtx<'a> {
    gateway: Arc<MockGateway>,
    harness: Harness<'a, State>,
}

impl<'a> TestCtx<'a> {
    /// Page harness over `gateway`. The initial load is issued before the first frame.
    pub fn new(gateway: MockGateway) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let gateway = Arc::new(gateway);
        let mut state = State::test(gateway.clone());
        state.controller.refetch();

        let harness = Harness::new_ui_state(
            |ui, state: &mut State| {
                patients_page(state, ui);
            },
            state,
        );

        let mut ctx = Self { gateway, harness };
        ctx.settle();
        ctx
    }

    pub fn gateway(&self) -> &MockGateway {
        &self.gateway
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, State> {
        &mut self.harness
    }

    pub fn settle(&mut self) {
        for _ in 0..SETTLE_STEPS {
            self.harness.step();
        }
    }
}
