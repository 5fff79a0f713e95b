//! Knit CLI — the knitting helpers without an MCP client.
//!
//! Usage:
//!   knit chart seed -w 30 -H 20 --markdown
//!   knit gauge 20 28 50 30
//!   knit abbrev "K, YO, p2tog"
//!   knit pattern scarf_seed
//!   knit table

use anyhow::Result;
use clap::Parser;

use knit::cli::{Cli, Commands};
use knit::config::KnitConfig;
use knit::{
    abbreviation_table, export_markdown, gauge_calc, generate_chart, pattern, translate_abbrev,
    AbbrevQuery, StitchPattern,
};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = KnitConfig::load(&cli.config);
    knit::logging::init(None, "warn");

    match cli.command {
        Commands::Chart {
            pattern,
            width,
            height,
            markdown,
            title,
        } => {
            let result = generate_chart(&pattern, width, height)?;
            if markdown {
                let title = title.as_deref().unwrap_or(&config.export.default_title);
                print!("{}", export_markdown(&result, Some(title)));
            } else {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }

        Commands::Pattern { name } => {
            print!("{}", pattern(&name)?);
        }

        Commands::Patterns => {
            for p in StitchPattern::ALL {
                println!("{}", p);
            }
        }

        Commands::Abbrev { items } => {
            let query = if items.len() == 1 {
                AbbrevQuery::Delimited(items[0].clone())
            } else {
                AbbrevQuery::Tokens(items)
            };
            for (abbrev, meaning) in translate_abbrev(&query) {
                println!("{:<8} {}", abbrev, meaning);
            }
        }

        Commands::Table => {
            print!("{}", abbreviation_table());
        }

        Commands::Gauge {
            sts,
            rows,
            width,
            height,
        } => {
            let result = gauge_calc(sts, rows, width, height)?;
            println!("Cast on:   {} stitches", result.cast_on);
            println!("Knit:      {} rows", result.row_count);
            println!(
                "Gauge:     {} sts / {} rows per unit",
                result.stitches_per_unit, result.rows_per_unit
            );
        }
    }

    Ok(())
}
