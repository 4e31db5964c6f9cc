//! The eframe app issues the initial load on its own.

use std::sync::Arc;

use egui_kittest::Harness;
use kittest::Queryable;
use roster_business::test_utils::{MockGateway, page};
use roster_ui::RosterApp;
use roster_ui::state::State;

#[test]
fn app_loads_first_page_on_start() {
    let _ = env_logger::builder().is_test(true).try_init();
    let gateway = Arc::new(MockGateway::new());
    gateway.push_list(Ok(page(1..=5, Some("c1"))));

    let state = State::test(gateway.clone());
    let mut harness = Harness::new_eframe(|_| RosterApp::new(state));
    for _ in 0..4 {
        harness.step();
    }

    let requests = gateway.list_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].limit, Some(10));
    assert_eq!(requests[0].cursor, None);

    harness.get_by_label("Patients");
    harness.get_by_label("Load More");
}
