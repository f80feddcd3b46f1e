use anyhow::Result;
use cardledger_core::{RangeBand, Row};
use cardledger_finance::{
    CategorySummary, ConvertTargets, RowFilter, SortKey, convert_statement_pdf, default_csv_path,
    export_statement_csv, sort_rows, statement_rows, summarize,
};
use cardledger_ingest::{PdfExtractPages, convert_pdf_to_txt, default_txt_path};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod logging;

use config::Config;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CARDLEDGER_GIT_REVISION"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "cardledger",
    version = VERSION,
    about = "Credit card statement PDF to categorized expense CSV"
)]
struct Cli {
    /// Config file (default: ./cardledger.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract the transaction table of a statement PDF into line-pair text
    PdfToTxt {
        /// Statement PDF
        pdf: PathBuf,

        /// Output text file (default: the PDF path with .txt)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Categorize line-pair statement text into the expense CSV
    ToCsv {
        /// Statement text produced by pdf-to-txt
        txt: PathBuf,

        /// Keyword map JSON (default: from config, else map.json)
        #[arg(long, value_name = "FILE")]
        map: Option<PathBuf>,

        /// Output CSV (default: the text path with .csv)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Run both stages: statement PDF straight to CSV
    Convert {
        /// Statement PDF
        pdf: PathBuf,

        /// Keyword map JSON (default: from config, else map.json)
        #[arg(long, value_name = "FILE")]
        map: Option<PathBuf>,

        /// Output CSV (default: the PDF path with .csv)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Also write the intermediate text next to the PDF
        #[arg(long)]
        keep_txt: bool,
    },

    /// Print spend totals per category
    Summary {
        /// Statement text produced by pdf-to-txt
        txt: PathBuf,

        /// Keyword map JSON (default: from config, else map.json)
        #[arg(long, value_name = "FILE")]
        map: Option<PathBuf>,

        #[command(flatten)]
        filter: FilterArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print categorized rows, filtered and sorted
    List {
        /// Statement text produced by pdf-to-txt
        txt: PathBuf,

        /// Keyword map JSON (default: from config, else map.json)
        #[arg(long, value_name = "FILE")]
        map: Option<PathBuf>,

        #[command(flatten)]
        filter: FilterArgs,

        /// Sort by item, category, price or range (default: statement order)
        #[arg(long, value_name = "KEY")]
        sort: Option<SortKey>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write a default cardledger.toml (or the --config path)
    InitConfig,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Keep rows whose item or category contains TEXT (any case)
    #[arg(long, value_name = "TEXT")]
    search: Option<String>,

    /// Keep only this category (repeatable)
    #[arg(long = "category", value_name = "NAME")]
    categories: Vec<String>,

    /// Keep only this band: L, H or M (repeatable)
    #[arg(long = "range", value_name = "BAND")]
    ranges: Vec<RangeBand>,

    /// Smallest spend to keep
    #[arg(long, value_name = "AMOUNT")]
    min_price: Option<Decimal>,

    /// Largest spend to keep
    #[arg(long, value_name = "AMOUNT")]
    max_price: Option<Decimal>,
}

impl From<FilterArgs> for RowFilter {
    fn from(args: FilterArgs) -> Self {
        RowFilter {
            search: args.search,
            categories: args.categories,
            ranges: args.ranges,
            min_price: args.min_price,
            max_price: args.max_price,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}

/// One-line error with its context chain
fn error_line(err: &anyhow::Error) -> String {
    format!("Error: {err:#}")
}

fn run(cli: Cli) -> Result<()> {
    // init-config may target a --config path that does not exist yet
    let cfg = match cli.command {
        Command::InitConfig => Config::default(),
        _ => config::load_config(cli.config.as_deref())?,
    };
    tracing::debug!(?cfg, "loaded config");

    match cli.command {
        Command::InitConfig => {
            let path = cli
                .config
                .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));
            config::init_config(&path)?;
        }

        Command::PdfToTxt { pdf, out } => {
            let out = out.unwrap_or_else(|| default_txt_path(&pdf));
            let count = convert_pdf_to_txt(&pdf, &out, &PdfExtractPages, &cfg.statement)?;
            println!("Wrote: {} ({} transactions)", out.display(), count);
        }

        Command::ToCsv { txt, map, out } => {
            let map = cfg.map_path(map);
            let out = out.unwrap_or_else(|| default_csv_path(&txt));
            let rows = export_statement_csv(&txt, &map, &out, &cfg.category_order())?;
            println!("Wrote: {} ({} rows)", out.display(), rows.len());
        }

        Command::Convert {
            pdf,
            map,
            out,
            keep_txt,
        } => {
            let map = cfg.map_path(map);
            let out = out.unwrap_or_else(|| default_csv_path(&pdf));
            let txt = keep_txt.then(|| default_txt_path(&pdf));
            let conversion = convert_statement_pdf(
                &pdf,
                &map,
                ConvertTargets {
                    csv: &out,
                    txt: txt.as_deref(),
                },
                &PdfExtractPages,
                &cfg.statement,
                &cfg.category_order(),
            )?;
            if let Some(txt) = &txt {
                println!(
                    "Wrote: {} ({} transactions)",
                    txt.display(),
                    conversion.transactions
                );
            }
            println!("Wrote: {} ({} rows)", out.display(), conversion.rows.len());
        }

        Command::Summary {
            txt,
            map,
            filter,
            json,
        } => {
            let map = cfg.map_path(map);
            let order = cfg.category_order();
            let rows = RowFilter::from(filter).apply(&statement_rows(&txt, &map, &order)?);
            let summary = summarize(&rows, &order);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
        }

        Command::List {
            txt,
            map,
            filter,
            sort,
            desc,
            json,
        } => {
            let map = cfg.map_path(map);
            let mut rows =
                RowFilter::from(filter).apply(&statement_rows(&txt, &map, &cfg.category_order())?);
            if let Some(key) = sort {
                sort_rows(&mut rows, key, desc);
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print_rows(&rows);
            }
        }
    }

    Ok(())
}

fn print_rows(rows: &[Row]) {
    println!("{:<40} {:<18} {:>12} {:>5}", "Item", "Category", "Price", "Range");
    for row in rows {
        println!(
            "{:<40} {:<18} {:>12} {:>5}",
            row.item,
            row.category,
            row.price_text(),
            row.range.as_str()
        );
    }
    println!("{} transactions", rows.len());
}

fn print_summary(summary: &CategorySummary) {
    println!("{:<24} {:>6} {:>12}", "Category", "Count", "Total");
    for c in &summary.categories {
        println!(
            "{:<24} {:>6} {:>12}",
            c.category,
            c.count,
            format!("{:.2}", c.total)
        );
    }
    println!(
        "{:<24} {:>6} {:>12}",
        "food (range H)",
        "",
        format!("{:.2}", summary.food_range_h)
    );
    println!(
        "{:<24} {:>6} {:>12}",
        "Total",
        summary.rows,
        format!("{:.2}", summary.total)
    );
}
