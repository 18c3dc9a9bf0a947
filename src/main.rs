use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use finance_tracker::cli::{
    handle_budget_command, handle_categories_command, handle_dashboard_command,
    handle_transaction_command, BudgetCommands, TransactionCommands,
};
use finance_tracker::config::{Settings, TrackerPaths};
use finance_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker: transactions, budgets and a dashboard",
    long_about = "fintrack records income and expenses, tracks per-category \
                  spending limits and summarizes everything on a dashboard. \
                  Data is kept as JSON under the directory named by \
                  FINTRACK_DATA_DIR, or the user config directory."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show totals, spending by category, recent activity and budgets
    #[command(alias = "dash")]
    Dashboard,

    /// List the allowed categories for each transaction type
    Categories,

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the config file for editing
        #[arg(long)]
        init: bool,
    },
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings);

    tracing::debug!(base_dir = %paths.base_dir().display(), "paths resolved");

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            let mut storage = Storage::open(&paths)?;
            handle_transaction_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            let mut storage = Storage::open(&paths)?;
            handle_budget_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Dashboard) => {
            let storage = Storage::open(&paths)?;
            handle_dashboard_command(&storage, &settings)?;
        }
        Some(Commands::Categories) => {
            handle_categories_command(&settings)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Date format:          {}", settings.date_format);
            println!("  Recent transactions:  {}", settings.recent_transactions);
            println!("  Budget warning at:    {}%", settings.budget_warning_percent);
            println!("  Log level:            {}", settings.log_level);
        }
        None => {
            println!("fintrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack dashboard' for an overview.");
        }
    }

    Ok(())
}
