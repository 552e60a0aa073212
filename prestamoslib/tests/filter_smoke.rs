use prestamoslib::{
    model::{OperationKind, TransactionRecord},
    store::{AreaFilter, RecordStore},
};

fn record(area: &str, reference: &str) -> TransactionRecord {
    TransactionRecord::from_input(
        OperationKind::Request,
        "2026-08-01",
        "ACME",
        area,
        "USD",
        "10",
        "",
        "",
        reference,
    )
}

fn sample_store() -> RecordStore {
    let mut store = RecordStore::new();
    store.append(record("Treasury", "A"));
    store.append(record("Investments", "B"));
    store.append(record("Treasury", "C"));
    store.append(record("treasury", "D"));
    store
}

#[test]
fn area_filter_is_exact_and_order_preserving() {
    let store = sample_store();
    let selector = AreaFilter::parse("Treasury");

    let refs: Vec<&str> = store.filter(&selector).map(|r| r.reference.as_str()).collect();
    // lowercase "treasury" differs, so it must not match
    assert_eq!(refs, ["A", "C"]);
    assert_eq!(store.len(), 4);
}

#[test]
fn all_sentinel_returns_everything_in_order() {
    let store = sample_store();
    assert_eq!(AreaFilter::parse("all"), AreaFilter::All);
    assert_eq!(AreaFilter::parse("todas"), AreaFilter::All);

    let refs: Vec<&str> = store
        .filter(&AreaFilter::All)
        .map(|r| r.reference.as_str())
        .collect();
    assert_eq!(refs, ["A", "B", "C", "D"]);
}

#[test]
fn filter_is_restartable() {
    let store = sample_store();
    let selector = AreaFilter::parse("Investments");

    let first: Vec<&str> = store.filter(&selector).map(|r| r.reference.as_str()).collect();
    let second: Vec<&str> = store.filter(&selector).map(|r| r.reference.as_str()).collect();
    assert_eq!(first, second);
    assert_eq!(first, ["B"]);
}

#[test]
fn unknown_area_matches_nothing() {
    let store = sample_store();
    let selector = AreaFilter::parse("Recursos Humanos");
    assert_eq!(store.filter(&selector).count(), 0);
}
