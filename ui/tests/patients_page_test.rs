//! Patient list page driven through egui_kittest with a mock gateway.

mod common;

use common::TestCtx;
use kittest::Queryable;
use roster_business::test_utils::{MockGateway, page};
use roster_business::{GatewayError, PatientListResponse, PatientStatus, format_encounter_date};
use roster_ui::pages::LOAD_MORE_LABEL;
use roster_ui::state::DELETE_SUCCESS_MESSAGE;
use roster_ui::widgets::{
    CONFIRM_DELETE_LABEL, DELETE_BUTTON_LABEL, DELETE_DIALOG_TITLE, DISMISS_LABEL, RETRY_LABEL,
};

fn gateway_with(pages: Vec<PatientListResponse>) -> MockGateway {
    let gateway = MockGateway::new();
    for response in pages {
        gateway.push_list(Ok(response));
    }
    gateway
}

fn name_of(ctx: &mut TestCtx<'_>, index: usize) -> String {
    ctx.harness_mut().state().controller.records()[index].name.clone()
}

#[test]
fn renders_first_page_rows_and_headers() {
    let mut ctx = TestCtx::new(gateway_with(vec![page(1..=3, None)]));
    let first = name_of(&mut ctx, 0);
    let harness = ctx.harness_mut();
    let first_date = format_encounter_date(&harness.state().controller.records()[0].date);

    harness.get_by_label("Patient's Name");
    harness.get_by_label("Collaborators");
    harness.get_by_label(&first);
    harness.get_by_label(&first_date);
    assert!(
        harness.query_by_label(LOAD_MORE_LABEL).is_none(),
        "no next page, no load more"
    );
}

#[test]
fn shows_empty_state_when_no_records() {
    let mut ctx = TestCtx::new(gateway_with(vec![page(1..=0, None)]));

    ctx.harness_mut().get_by_label("No patients found");
}

#[test]
fn shows_loading_state_before_first_page() {
    let mut ctx = TestCtx::new(MockGateway::deferred());

    ctx.harness_mut().get_by_label("Loading patients...");
    assert!(ctx.harness_mut().state().controller.is_loading());
}

#[test]
fn load_more_appends_next_page() {
    let mut ctx = TestCtx::new(gateway_with(vec![
        page(1..=10, Some("c1")),
        page(11..=20, None),
    ]));

    ctx.harness_mut().get_by_label(LOAD_MORE_LABEL).click();
    ctx.settle();

    let requests = ctx.gateway().list_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].cursor.as_deref(), Some("c1"));

    let records = ctx.harness_mut().state().controller.records();
    assert_eq!(records.len(), 20);
    assert_eq!(records.first().map(|p| p.id), Some(1));
    assert_eq!(records.last().map(|p| p.id), Some(20));
    assert!(ctx.harness_mut().query_by_label(LOAD_MORE_LABEL).is_none());
}

#[test]
fn only_rows_near_the_viewport_are_rendered() {
    let mut ctx = TestCtx::new(gateway_with(vec![page(1..=100, None)]));
    let first = name_of(&mut ctx, 0);
    let last = name_of(&mut ctx, 99);

    let harness = ctx.harness_mut();
    harness.get_by_label(&first);
    assert!(harness.query_by_label(&last).is_none());
    assert!(harness.query_all_by_label(DELETE_BUTTON_LABEL).count() < 100);
}

#[test]
fn filter_change_replaces_records() {
    let mut ctx = TestCtx::new(gateway_with(vec![
        page(1..=10, Some("c1")),
        page(40..=41, None),
    ]));

    ctx.harness_mut()
        .state_mut()
        .controller
        .filter_by_status(Some(PatientStatus::Ready));
    ctx.settle();

    let last_request = ctx.gateway().list_requests().pop().expect("filter issues a request");
    assert_eq!(last_request.status, Some(PatientStatus::Ready));
    assert_eq!(last_request.cursor, None);

    let ids: Vec<u64> = ctx
        .harness_mut()
        .state()
        .controller
        .records()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![40, 41]);
    ctx.harness_mut().get_by_label("Status:");
}

#[test]
fn confirmed_delete_removes_row_and_notifies() {
    let gateway = gateway_with(vec![page(1..=3, None)]);
    gateway.push_delete(Ok(()));
    let mut ctx = TestCtx::new(gateway);

    ctx.harness_mut()
        .query_all_by_label(DELETE_BUTTON_LABEL)
        .next()
        .expect("rows have delete buttons")
        .click();
    ctx.settle();

    ctx.harness_mut().get_by_label(DELETE_DIALOG_TITLE);
    ctx.harness_mut()
        .get_by_label_contains("Are you sure you want to delete");

    ctx.harness_mut().get_by_label(CONFIRM_DELETE_LABEL).click();
    ctx.settle();

    let deleted = ctx.gateway().delete_requests();
    assert_eq!(deleted.len(), 1);
    let records = ctx.harness_mut().state().controller.records();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|p| p.id != deleted[0]));

    ctx.harness_mut().get_by_label(DELETE_SUCCESS_MESSAGE);
    assert!(ctx.harness_mut().query_by_label(DELETE_DIALOG_TITLE).is_none());
}

#[test]
fn cancelled_delete_has_no_side_effects() {
    let mut ctx = TestCtx::new(gateway_with(vec![page(1..=3, None)]));

    ctx.harness_mut()
        .query_all_by_label(DELETE_BUTTON_LABEL)
        .next()
        .expect("rows have delete buttons")
        .click();
    ctx.settle();
    ctx.harness_mut().get_by_label("Cancel").click();
    ctx.settle();

    assert!(ctx.gateway().delete_requests().is_empty());
    assert_eq!(ctx.harness_mut().state().controller.records().len(), 3);
    assert!(ctx.harness_mut().query_by_label(DELETE_DIALOG_TITLE).is_none());
    assert!(ctx.harness_mut().state().confirm_delete.is_none());
}

#[test]
fn failed_delete_keeps_rows_and_notifies() {
    let gateway = gateway_with(vec![page(1..=3, None)]);
    gateway.push_delete(Err(GatewayError::Status(500)));
    let mut ctx = TestCtx::new(gateway);

    ctx.harness_mut()
        .query_all_by_label(DELETE_BUTTON_LABEL)
        .next()
        .expect("rows have delete buttons")
        .click();
    ctx.settle();
    ctx.harness_mut().get_by_label(CONFIRM_DELETE_LABEL).click();
    ctx.settle();

    assert_eq!(ctx.harness_mut().state().controller.records().len(), 3);
    ctx.harness_mut()
        .get_by_label("Failed to delete patient. Please try again.");
}

#[test]
fn list_failure_shows_banner_and_retry_recovers() {
    let gateway = MockGateway::new();
    gateway.push_list(Err(GatewayError::Transport("connection refused".to_owned())));
    gateway.push_list(Ok(page(1..=2, None)));
    let mut ctx = TestCtx::new(gateway);

    ctx.harness_mut()
        .get_by_label("Failed to load patient data. Please try again later.");

    ctx.harness_mut().get_by_label(RETRY_LABEL).click();
    ctx.settle();

    assert_eq!(ctx.harness_mut().state().controller.records().len(), 2);
    assert!(
        ctx.harness_mut()
            .query_by_label("Failed to load patient data. Please try again later.")
            .is_none()
    );
}

#[test]
fn dismissing_list_error_hides_banner_without_refetch() {
    let gateway = MockGateway::new();
    gateway.push_list(Err(GatewayError::Status(503)));
    let mut ctx = TestCtx::new(gateway);

    ctx.harness_mut()
        .get_by_label("Failed to load patient data. Please try again later.");

    ctx.harness_mut().get_by_label(DISMISS_LABEL).click();
    ctx.settle();

    assert!(ctx.harness_mut().state().controller.error().is_none());
    assert!(
        ctx.harness_mut()
            .query_by_label("Failed to load patient data. Please try again later.")
            .is_none()
    );
    assert_eq!(ctx.gateway().list_requests().len(), 1);
}
