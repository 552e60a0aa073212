use prestamoslib::{
    balance::compute_balances,
    formats::csv::Csv,
    model::{OperationKind, TransactionRecord},
    store::RecordStore,
    traits::WriteFormat,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Demo: dos operaciones de Tesorería y el CSV resultante por stdout
    let mut store = RecordStore::new();
    store.append(TransactionRecord::from_input(
        OperationKind::Request,
        "2026-08-01",
        "ACME Holdings",
        "Treasury",
        "USD",
        "100",
        "CFO",
        "Operaciones",
        "REF-1",
    ));
    store.append(TransactionRecord::from_input(
        OperationKind::Return,
        "2026-08-05",
        "ACME Holdings",
        "Treasury",
        "USD",
        "30",
        "CFO",
        "Operaciones",
        "REF-2",
    ));

    let report = compute_balances(&store).report();
    eprintln!(
        "Treasury {} / Investments {} / Total {}",
        report.treasury, report.investments, report.total
    );

    Csv::write(std::io::stdout(), store.records())?;
    Ok(())
}
