use ubclubs::fixtures;
use ubclubs::models::{Club, Request, RequestStatus, RequestType, Role};
use ubclubs::requests::{Decision, RequestFilter, RequestOperations, STUDENT_ID_FIELD, Selection};
use ubclubs::storage::{CollectionView, MemoryStore};
use ubclubs::{DataStore, Session};

fn seeded_store() -> DataStore {
    let store = DataStore::new(MemoryStore::new());
    store.initialize();
    store
}

#[test]
fn join_request_into_empty_collection() {
    let store = DataStore::new(MemoryStore::new());
    store.write::<Request>(&[]);
    let ops = RequestOperations::new(store.clone());

    let club = Club {
        id: "acm".into(),
        name: "ACM".into(),
        ..Default::default()
    };
    ops.submit_join_request(&club, "2025123456", "Jane Doe")
        .unwrap();

    let requests = store.read::<Request>();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].status, RequestStatus::Pending);
    assert_eq!(requests[0].kind, RequestType::Join);
    assert_eq!(requests[0].club_id, "acm");
    assert_eq!(requests[0].student_id, "2025123456");
    assert_eq!(requests[0].student_name, "Jane Doe");
}

#[test]
fn malformed_ids_never_reach_storage() {
    let store = seeded_store();
    let ops = RequestOperations::new(store.clone());
    let club = store.find::<Club>("robotics").unwrap();

    for id in ["12345", "12345678901", "abcdefghij"] {
        let errors = ops.submit_join_request(&club, id, "Jane Doe").unwrap_err();
        assert!(errors.contains(STUDENT_ID_FIELD), "{id}");
    }
    assert_eq!(store.read::<Request>(), fixtures::requests());
}

#[test]
fn admin_bulk_approves_filtered_selection() {
    let store = seeded_store();
    let mut session = Session::restore(store.clone());
    session.login(Role::Admin);
    assert!(session.is_admin());

    let ops = RequestOperations::new(session.store().clone());
    let mut view = CollectionView::<Request>::new(session.store().clone());
    let filter = RequestFilter {
        types: vec![RequestType::Join],
        ..Default::default()
    };
    let mut selection = Selection::new();

    let visible = filter.apply(view.records());
    selection.select_all(&visible, true);
    selection.set("req-unknown", true);
    assert_eq!(selection.len(), 3);

    let ids = selection.take();
    view.apply(|_| ops.set_status_bulk(&ids, Decision::Approve));

    let records = view.records();
    let status = |id: &str| records.iter().find(|r| r.id == id).map(|r| r.status);
    assert_eq!(status("req-1"), Some(RequestStatus::Approved));
    assert_eq!(status("req-2"), Some(RequestStatus::Approved));
    assert_eq!(status("req-5"), Some(RequestStatus::Denied));
    assert_eq!(status("req-4"), Some(RequestStatus::Pending));
    assert_eq!(records.len(), fixtures::requests().len());
    assert!(selection.is_empty());
}

#[test]
fn approval_leaves_club_membership_untouched() {
    let store = seeded_store();
    let ops = RequestOperations::new(store.clone());
    let before = store.find::<Club>("acm").unwrap();

    ops.set_status("req-1", Decision::Approve);

    assert_eq!(store.find::<Club>("acm").unwrap(), before);
}

#[test]
fn reset_discards_review_decisions() {
    let store = seeded_store();
    let ops = RequestOperations::new(store.clone());
    ops.set_status_bulk(["req-1", "req-2", "req-4", "req-6"], Decision::Deny);
    assert_eq!(ops.pending_count(), 0);

    store.reset();

    assert_eq!(store.read::<Request>(), fixtures::requests());
    assert_eq!(store.read::<Club>(), fixtures::clubs());
}

#[test]
fn second_view_sees_writes_after_rereading() {
    let backend = MemoryStore::new();
    let first = DataStore::new(backend.clone());
    let second = DataStore::new(backend);
    first.initialize();

    let mut stale = CollectionView::<Request>::new(second.clone());
    assert!(stale.records()[0].is_pending());

    RequestOperations::new(first).set_status("req-1", Decision::Deny);
    assert!(stale.records()[0].is_pending());

    stale.invalidate();
    assert_eq!(stale.records()[0].status, RequestStatus::Denied);
}
