//! WiFi Insights — segment synthetic venue visitors and suggest marketing
//! actions per segment.

use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use insights_core::config::{AppConfig, OutputFormat};
use insights_core::types::{
    parse_timestamp, AreaOfInterest, MealPreference, RestaurantVisit, SupermarketVisit, VisitTime,
};
use insights_core::{Domain, InsightsError, VisitorRecord};
use insights_reporting::export::to_csv;
use insights_reporting::{JsonSink, SuggestionCatalog, TerminalSink};
use insights_segmentation::RuleSet;
use insights_showcase::{present, Showcase};

#[derive(Parser, Debug)]
#[command(name = "wifi-insights")]
#[command(about = "Segment synthetic venue WiFi visitors and suggest marketing actions")]
#[command(version)]
struct Cli {
    /// TOML config file, layered under WIFI_INSIGHTS__* variables
    #[arg(short, long, global = true, env = "WIFI_INSIGHTS_CONFIG")]
    config: Option<PathBuf>,

    /// Random seed (overrides config)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Emit logs as JSON (overrides config)
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the narrated showcase for one venue or both
    Run {
        /// restaurant, supermarket or all
        #[arg(short, long, default_value = "all")]
        domain: Venues,

        /// Output format: text or json (overrides config)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Rows shown in each data preview (overrides config)
        #[arg(long)]
        preview_rows: Option<usize>,
    },

    /// Classify one hand-built visitor and show the winning rule
    Classify {
        #[command(subcommand)]
        visitor: VisitorArgs,
    },

    /// List the segment rules in evaluation order
    Rules {
        /// restaurant, supermarket or all
        #[arg(short, long, default_value = "all")]
        domain: Venues,
    },

    /// Write a generated, classified visitor table as CSV
    Export {
        /// restaurant or supermarket
        #[arg(short, long)]
        domain: Domain,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum VisitorArgs {
    Restaurant {
        /// Returning visitor
        #[arg(long, default_value_t = false)]
        frequent: bool,

        /// Lunch, Dinner or Breakfast
        #[arg(long)]
        time: VisitTime,

        /// Local, Continental or Both
        #[arg(long)]
        meal: MealPreference,

        #[arg(long, default_value_t = 45)]
        duration: u32,
    },
    Supermarket {
        /// Returning visitor
        #[arg(long, default_value_t = false)]
        frequent: bool,

        /// Produce, Groceries, Electronics, "Home Goods" or Snacks
        #[arg(long)]
        area: AreaOfInterest,

        #[arg(long)]
        duration: u32,
    },
}

/// Venue selection for commands that can cover both venues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Venues {
    All,
    One(Domain),
}

impl Venues {
    fn domains(self) -> Vec<Domain> {
        match self {
            Venues::All => Domain::ALL.to_vec(),
            Venues::One(domain) => vec![domain],
        }
    }
}

impl FromStr for Venues {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Venues::All)
        } else {
            s.parse().map(Venues::One)
        }
    }
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "wifi_insights=info,insights_showcase=info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = AppConfig::load(cli.config.as_deref());
    let json_logs = loaded.as_ref().map_or(false, |c| c.logging.json);
    init_tracing(cli.log_json || json_logs);

    // An explicit config file must load; environment-only problems fall back.
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) if cli.config.is_some() => return Err(e.into()),
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            AppConfig::default()
        }
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    info!(
        seed = config.seed,
        restaurant_visitors = config.restaurant.visitors,
        supermarket_visitors = config.supermarket.visitors,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Run {
            domain,
            format,
            preview_rows,
        } => {
            if let Some(format) = format {
                config.output.format = format;
            }
            if let Some(rows) = preview_rows {
                config.output.preview_rows = rows;
            }
            cmd_run(&config, domain)
        }
        Commands::Classify { visitor } => cmd_classify(&config, visitor),
        Commands::Rules { domain } => cmd_rules(&config, domain),
        Commands::Export { domain, output } => cmd_export(&config, domain, output),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_run(config: &AppConfig, venues: Venues) -> anyhow::Result<()> {
    let showcase = Showcase::from_config(config)?;
    let domains = venues.domains();
    let stdout = std::io::stdout();

    match config.output.format {
        OutputFormat::Text => {
            let mut sink = TerminalSink::new(stdout.lock());
            present(&showcase, &domains, config.output.preview_rows, &mut sink)?;
            sink.into_inner().flush()?;
        }
        OutputFormat::Json => {
            let mut sink = JsonSink::new();
            present(&showcase, &domains, config.output.preview_rows, &mut sink)?;
            sink.write_to(stdout.lock())?;
        }
    }
    Ok(())
}

fn cmd_classify(config: &AppConfig, visitor: VisitorArgs) -> anyhow::Result<()> {
    let showcase = Showcase::from_config(config)?;

    match visitor {
        VisitorArgs::Restaurant {
            frequent,
            time,
            meal,
            duration,
        } => {
            let record = RestaurantVisit {
                visitor_id: 1,
                arrival_time: parse_timestamp(&config.restaurant.base_time)?,
                duration_minutes: duration,
                frequent_visitor: frequent,
                meal_preference: meal,
                time_of_visit: time,
            };
            explain(&record, showcase.rules(Domain::Restaurant))
        }
        VisitorArgs::Supermarket {
            frequent,
            area,
            duration,
        } => {
            let record = SupermarketVisit {
                visitor_id: 1,
                arrival_time: parse_timestamp(&config.supermarket.base_time)?,
                duration_minutes: duration,
                frequent_visitor: frequent,
                area_of_interest: area,
            };
            explain(&record, showcase.rules(Domain::Supermarket))
        }
    }
}

fn explain<R: VisitorRecord>(record: &R, rules: &RuleSet) -> anyhow::Result<()> {
    let catalog = SuggestionCatalog::for_domain(rules.domain());
    let segment = rules.classify(record);
    let suggestion = catalog.lookup(segment)?;

    println!("Segment: {segment}");
    match rules.matching_rule(record) {
        Some(index) => {
            let rule = &rules.rules()[index];
            println!("  Matched rule {}: {}", index + 1, rule.criteria.describe());
        }
        None => println!("  No rule matched; default segment"),
    }
    println!("  Suggestion: {}", suggestion.suggestion);
    println!("  Example:    '{}'", suggestion.example);
    Ok(())
}

fn cmd_rules(config: &AppConfig, venues: Venues) -> anyhow::Result<()> {
    let showcase = Showcase::from_config(config)?;

    for domain in venues.domains() {
        let rules = showcase.rules(domain);
        println!("{} rules (first match wins):", domain.title());
        for (i, rule) in rules.rules().iter().enumerate() {
            println!("  {}. {}", i + 1, rule.label);
            println!("     when {}", rule.criteria.describe());
            if let Some(description) = &rule.description {
                println!("     {description}");
            }
        }
        println!(
            "  {}. {} (default)",
            rules.rules().len() + 1,
            rules.default_label()
        );
        println!();
    }
    Ok(())
}

fn cmd_export(config: &AppConfig, domain: Domain, output: Option<PathBuf>) -> anyhow::Result<()> {
    let showcase = Showcase::from_config(config)?;
    let csv = match domain {
        Domain::Restaurant => to_csv(&showcase.restaurant_report()?.records),
        Domain::Supermarket => to_csv(&showcase.supermarket_report()?.records),
    };

    if let Some(path) = output {
        std::fs::write(&path, &csv)?;
        info!(path = %path.display(), %domain, "Classified table exported");
    } else {
        print!("{csv}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_venues_parse() {
        assert_eq!("all".parse::<Venues>().unwrap(), Venues::All);
        assert_eq!(
            "Supermarket".parse::<Venues>().unwrap(),
            Venues::One(Domain::Supermarket)
        );
        assert!("bakery".parse::<Venues>().is_err());
    }

    #[test]
    fn test_classify_arguments() {
        let cli = Cli::parse_from([
            "wifi-insights",
            "classify",
            "supermarket",
            "--area",
            "Electronics",
            "--duration",
            "45",
        ]);
        match cli.command {
            Commands::Classify {
                visitor: VisitorArgs::Supermarket { frequent, area, duration },
            } => {
                assert!(!frequent);
                assert_eq!(area, AreaOfInterest::Electronics);
                assert_eq!(duration, 45);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_run_overrides() {
        let cli = Cli::parse_from([
            "wifi-insights",
            "--seed",
            "7",
            "run",
            "--domain",
            "restaurant",
            "--format",
            "json",
        ]);
        assert_eq!(cli.seed, Some(7));
        match cli.command {
            Commands::Run { domain, format, preview_rows } => {
                assert_eq!(domain, Venues::One(Domain::Restaurant));
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(preview_rows, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
