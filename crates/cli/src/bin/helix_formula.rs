use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{ArgAction, Parser};
use log::info;
use nested_helix::config::load_parameter_sets;
use nested_helix::formula::{self, HelixFormulas, HelixRequest};
use nested_helix::report;
use nested_helix::session::Session;

/// Generate equation-driven-curve formulas for a nested tapered helix.
///
/// Without arguments the parameters are prompted for interactively.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Nested tapered helix formula generator",
    allow_negative_numbers = true
)]
struct Cli {
    /// YAML list, TOML record, or directory of TOML records to generate in batch
    #[arg(
        long,
        conflicts_with_all = [
            "r0",
            "r1",
            "height",
            "turns",
            "rs0",
            "rs1",
            "secondary_turns",
            "t1",
            "t2"
        ]
    )]
    params: Option<PathBuf>,

    /// Initial radius of the primary helix
    #[arg(long)]
    r0: Option<f64>,

    /// Final radius of the primary helix
    #[arg(long)]
    r1: Option<f64>,

    /// Height of the primary helix
    #[arg(long)]
    height: Option<f64>,

    /// Number of full turns of the primary helix
    #[arg(long)]
    turns: Option<f64>,

    /// Initial radius of the secondary helix
    #[arg(long)]
    rs0: Option<f64>,

    /// Final radius of the secondary helix
    #[arg(long)]
    rs1: Option<f64>,

    /// Number of full turns of the secondary helix
    #[arg(long)]
    secondary_turns: Option<f64>,

    /// Start of the parameter t
    #[arg(long)]
    t1: Option<f64>,

    /// End of the parameter t
    #[arg(long)]
    t2: Option<f64>,

    /// Print results as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Request assembled from the inline flags; `None` when no flag was given.
    fn inline_request(&self) -> anyhow::Result<Option<HelixRequest>> {
        let values = [
            ("--r0", self.r0),
            ("--r1", self.r1),
            ("--height", self.height),
            ("--turns", self.turns),
            ("--rs0", self.rs0),
            ("--rs1", self.rs1),
            ("--secondary-turns", self.secondary_turns),
            ("--t1", self.t1),
            ("--t2", self.t2),
        ];
        if values.iter().all(|(_, v)| v.is_none()) {
            return Ok(None);
        }
        let missing: Vec<&str> = values
            .iter()
            .filter(|(_, v)| v.is_none())
            .map(|(flag, _)| *flag)
            .collect();
        if !missing.is_empty() {
            bail!("missing parameters: {}", missing.join(", "));
        }
        let [r0, r1, h, n, rs0, rs1, m, t1, t2] = values.map(|(_, v)| v.unwrap_or_default());
        Ok(Some(HelixRequest {
            r0,
            r1,
            h,
            n,
            rs0,
            rs1,
            m,
            t1,
            t2,
        }))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = &cli.params {
        let sets = load_parameter_sets(path)
            .with_context(|| format!("loading parameter sets from {}", path.display()))?;
        info!("loaded {} parameter set(s) from {}", sets.len(), path.display());
        let mut results: Vec<HelixFormulas> = Vec::with_capacity(sets.len());
        for (idx, set) in sets.iter().enumerate() {
            let label = set.name.clone().unwrap_or_else(|| format!("#{}", idx + 1));
            info!("generating parameter set {label}");
            let formulas = formula::generate(&HelixRequest::from(set))
                .with_context(|| format!("parameter set {label}"))?;
            if !cli.json {
                writeln!(out, "\n=== {label} ===")?;
                report::write_report(&mut out, &formulas)?;
            }
            results.push(formulas);
        }
        if cli.json {
            report::write_json(&mut out, &results)?;
        }
        return Ok(());
    }

    if let Some(request) = cli.inline_request()? {
        let formulas = formula::generate(&request)?;
        if cli.json {
            report::write_json(&mut out, &formulas)?;
        } else {
            report::write_report(&mut out, &formulas)?;
        }
        return Ok(());
    }

    if cli.json {
        bail!("--json needs --params or the full set of inline parameters");
    }
    let stdin = io::stdin();
    Session::new(stdin.lock(), out).run()?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
