use prestamoslib::{
    balance::{compute_balances, INVESTMENTS, TREASURY},
    model::{OperationKind, TransactionRecord},
    store::RecordStore,
};
use rust_decimal::Decimal;

fn record(kind: OperationKind, area: &str, amount: &str) -> TransactionRecord {
    TransactionRecord::from_input(
        kind,
        "2026-08-01",
        "ACME Holdings",
        area,
        "USD",
        amount,
        "CFO",
        "Operaciones",
        "REF-1",
    )
}

#[test]
fn request_debits_and_return_credits() {
    let mut store = RecordStore::new();
    store.append(record(OperationKind::Request, TREASURY, "100"));
    store.append(record(OperationKind::Return, TREASURY, "30"));

    let b = compute_balances(&store);
    assert_eq!(b.treasury, Decimal::from(-70));
    assert_eq!(b.investments, Decimal::ZERO);
    assert_eq!(b.total(), Decimal::from(-70));

    let report = b.report();
    assert_eq!(report.treasury, "-70.00");
    assert_eq!(report.investments, "0.00");
    assert_eq!(report.total, "-70.00");
}

#[test]
fn unnamed_areas_do_not_feed_the_kpis() {
    let mut store = RecordStore::new();
    store.append(record(OperationKind::Return, INVESTMENTS, "50"));
    store.append(record(OperationKind::Request, "Marketing", "9999"));

    let b = compute_balances(&store);
    assert_eq!(b.treasury, Decimal::ZERO);
    assert_eq!(b.investments, Decimal::from(50));
    assert_eq!(b.total(), Decimal::from(50));
}

#[test]
fn balances_are_insertion_order_independent() {
    let records = vec![
        record(OperationKind::Request, TREASURY, "100.25"),
        record(OperationKind::Return, TREASURY, "1,000.00"),
        record(OperationKind::Return, INVESTMENTS, "42.42"),
        record(OperationKind::Request, "Legal", "77"),
    ];

    let mut forward = RecordStore::new();
    for r in records.clone() {
        forward.append(r);
    }
    let mut backward = RecordStore::new();
    for r in records.into_iter().rev() {
        backward.append(r);
    }

    assert_eq!(compute_balances(&forward), compute_balances(&backward));
}

#[test]
fn balances_match_the_sum_of_signed_contributions() {
    let records = vec![
        record(OperationKind::Request, TREASURY, "10.50"),
        record(OperationKind::Return, TREASURY, "4.25"),
        record(OperationKind::Return, INVESTMENTS, "100"),
        record(OperationKind::Request, INVESTMENTS, "33.33"),
        record(OperationKind::Return, "Marketing", "500"),
    ];
    let expected: Decimal = records
        .iter()
        .filter(|r| r.area == TREASURY || r.area == INVESTMENTS)
        .map(|r| r.signed_contribution())
        .sum();

    let store = RecordStore::from_records(records);
    assert_eq!(compute_balances(&store).total(), expected);
}

#[test]
fn malformed_amounts_contribute_zero() {
    let mut store = RecordStore::new();
    store.append(record(OperationKind::Request, TREASURY, "no es un número"));
    assert_eq!(compute_balances(&store).treasury, Decimal::ZERO);
}
