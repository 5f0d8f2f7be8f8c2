use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use match_sheet_uploader::config::{CredentialSource, DEFAULT_TAB, UploadTarget};
use match_sheet_uploader::layout::Layout;
use match_sheet_uploader::upload::{self, WriteStrategy};
use match_sheet_uploader::{export, load_table, preview};

#[derive(Parser, Debug)]
#[command(
    name = "match-sheet-uploader",
    about = "Upload match scoreboards to Google Sheets",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print both sorted groups without uploading
    Preview {
        /// Match JSON file
        file: PathBuf,

        #[arg(long, value_enum, default_value_t)]
        layout: Layout,
    },

    /// Write the upload payload to a local CSV file
    Export {
        /// Match JSON file
        file: PathBuf,

        #[arg(long)]
        out: PathBuf,

        #[arg(long, value_enum, default_value_t)]
        layout: Layout,
    },

    /// Overwrite the configured Google Sheets tab with the match table
    Upload {
        /// Match JSON file
        file: PathBuf,

        #[arg(long, value_enum, default_value_t)]
        layout: Layout,

        #[arg(long, value_enum, default_value_t)]
        strategy: WriteStrategy,

        /// Link to the spreadsheet (e.g., https://docs.google.com/spreadsheets/d/<id>/edit)
        #[arg(long = "sheet-link", env = "SHEET_LINK")]
        sheet_link: String,

        /// Worksheet tab to overwrite
        #[arg(long = "tab", env = "SHEET_TAB", default_value = DEFAULT_TAB)]
        tab_name: String,

        /// Service account key file; falls back to GOOGLE_SERVICE_ACCOUNT_JSON or GOOGLE_APPLICATION_CREDENTIALS
        #[arg(long)]
        credentials: Option<PathBuf>,
    },
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    init_logging();

    let args = Cli::parse();

    if let Err(err) = run(args.command).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Preview { file, layout } => {
            let table = load_table(&file, layout)?;
            print!("{}", preview::render(&table));
        }
        Command::Export { file, out, layout } => {
            let table = load_table(&file, layout)?;
            let rows = export::export_csv(&table, &out).map_err(|err| anyhow!("{}", err))?;
            println!("Wrote {} rows to {}", rows, out.display());
        }
        Command::Upload {
            file,
            layout,
            strategy,
            sheet_link,
            tab_name,
            credentials,
        } => {
            let table = load_table(&file, layout)?;
            print!("{}", preview::render(&table));

            let target = UploadTarget::new(sheet_link, tab_name);
            let credentials = CredentialSource::resolve(credentials)?;

            log::info!(
                "Uploading {} players to '{}' ({:?})",
                table.player_count(),
                target.tab_name,
                strategy
            );
            let report = upload::upload_to_google(&table, &target, &credentials, strategy).await?;
            log::info!("Wrote {} rows to {}", report.rows_written, report.range);

            println!(
                "Data successfully updated in '{}' of linked sheet!",
                report.tab_name
            );
        }
    }

    Ok(())
}
