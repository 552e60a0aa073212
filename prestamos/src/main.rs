use clap::{Parser, Subcommand, ValueEnum};
use prestamoslib::{
    balance::compute_balances,
    error::Result,
    formats::{
        csv::{Csv, EXPORT_FILE_NAME},
        json::{Json, BASE_FILE_NAME},
    },
    model::{OperationKind, TransactionRecord},
    store::{AreaFilter, RecordStore},
    theme::ThemeStore,
    traits::{ReadFormat, WriteFormat},
};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Kind {
    /// Solicitud de préstamo (resta del saldo del área)
    Solicitud,
    /// Devolución (suma al saldo del área)
    Devolucion,
}

impl From<Kind> for OperationKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Solicitud => OperationKind::Request,
            Kind::Devolucion => OperationKind::Return,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "prestamos", version, about = "Registro de préstamos internos entre áreas")]
struct Cli {
    /// Base JSON con el historial de registros
    #[arg(long = "base", global = true, default_value = BASE_FILE_NAME)]
    base: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Registra una operación y muestra los saldos actualizados
    Add {
        #[arg(long, value_enum)]
        kind: Kind,
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        company: String,
        #[arg(long)]
        area: String,
        #[arg(long, default_value = "")]
        currency: String,
        /// Monto tal como se escribió; separadores permitidos, un valor
        /// inválido cuenta como cero
        #[arg(long, default_value = "")]
        amount: String,
        #[arg(long = "approved-by", default_value = "")]
        approved_by: String,
        #[arg(long, default_value = "")]
        responsible: String,
        #[arg(long, default_value = "")]
        reference: String,
    },
    /// Lista las operaciones registradas, opcionalmente filtradas por área
    List {
        /// Nombre exacto del área, o "todas"/"all" para ver todo
        #[arg(long, default_value = "all")]
        area: String,
    },
    /// Muestra los saldos KPI (Treasury, Investments, total)
    Balance,
    /// Exporta el historial como CSV
    Export {
        /// Archivo de salida
        #[arg(short = 'o', long, default_value = EXPORT_FILE_NAME)]
        output: PathBuf,
    },
    /// Reemplaza la base con los registros de un archivo JSON
    Import {
        /// Archivo de entrada (stdin si se omite)
        #[arg(short = 'i', long)]
        input: Option<PathBuf>,
    },
    /// Muestra el tema persistido
    Theme {
        /// Invierte el tema antes de mostrarlo
        #[arg(long)]
        toggle: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    tracing::debug!(base = %cli.base.display(), "using base file");
    match cli.command {
        Command::Add {
            kind,
            date,
            company,
            area,
            currency,
            amount,
            approved_by,
            responsible,
            reference,
        } => cmd_add(
            &cli.base,
            TransactionRecord::from_input(
                kind.into(),
                &date,
                &company,
                &area,
                &currency,
                &amount,
                &approved_by,
                &responsible,
                &reference,
            ),
        ),
        Command::List { area } => cmd_list(&cli.base, &area),
        Command::Balance => cmd_balance(&cli.base),
        Command::Export { output } => cmd_export(&cli.base, &output),
        Command::Import { input } => cmd_import(&cli.base, input.as_deref()),
        Command::Theme { toggle } => cmd_theme(toggle),
    }
}

/// An absent base file is an empty store, not an error.
fn load_base(path: &Path) -> Result<RecordStore> {
    if !path.exists() {
        return Ok(RecordStore::new());
    }
    let records = Json::read(BufReader::new(File::open(path)?))?;
    Ok(RecordStore::from_records(records))
}

fn save_base(path: &Path, store: &RecordStore) -> Result<()> {
    Json::write(File::create(path)?, store.records())
}

fn print_balances(store: &RecordStore) {
    let report = compute_balances(store).report();
    println!("Treasury:    {}", report.treasury);
    println!("Investments: {}", report.investments);
    println!("Total:       {}", report.total);
}

fn cmd_add(base: &Path, record: TransactionRecord) -> Result<()> {
    let mut store = load_base(base)?;
    store.append(record);
    save_base(base, &store)?;
    println!("Operación guardada ({} registros en {}).", store.len(), base.display());
    print_balances(&store);
    Ok(())
}

fn cmd_list(base: &Path, area: &str) -> Result<()> {
    let store = load_base(base)?;
    let selector = AreaFilter::parse(area);

    let mut count = 0usize;
    for r in store.filter(&selector) {
        count += 1;
        println!(
            "{} | {} | {} | {} | {} | {} | {} | {} | {}",
            r.kind.label(),
            r.date,
            r.company,
            r.area,
            r.currency,
            r.amount_display,
            r.approved_by,
            r.responsible,
            r.reference,
        );
    }
    if count == 0 {
        println!("No hay registros para el filtro seleccionado.");
    }
    println!("{} registro{}", count, if count == 1 { "" } else { "s" });
    Ok(())
}

fn cmd_balance(base: &Path) -> Result<()> {
    let store = load_base(base)?;
    print_balances(&store);
    Ok(())
}

fn cmd_export(base: &Path, output: &Path) -> Result<()> {
    let store = load_base(base)?;
    // Checked before the output file is created, so an empty export leaves
    // nothing behind.
    if store.is_empty() {
        return Err(prestamoslib::error::LedgerError::EmptyStore);
    }
    Csv::write(File::create(output)?, store.records())?;
    println!("Exportado a {}.", output.display());
    Ok(())
}

fn cmd_import(base: &Path, input: Option<&Path>) -> Result<()> {
    let reader: Box<dyn Read> = match input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    // Fully parsed before the base is touched; a malformed file leaves the
    // prior base intact.
    let records = Json::read(BufReader::new(reader))?;
    let store = RecordStore::from_records(records);
    save_base(base, &store)?;
    println!("Base cargada correctamente ({} registros).", store.len());
    print_balances(&store);
    Ok(())
}

fn cmd_theme(toggle: bool) -> Result<()> {
    let store = ThemeStore::default_location();
    let theme = if toggle { store.toggle()? } else { store.load() };
    println!("{}", theme.as_str());
    Ok(())
}
