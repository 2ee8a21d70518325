//! `snake-cube`: print every solution of the snake cube and the count.

use clap::Parser;
use snake::prelude::*;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "snake=info,snake_search=info";

#[derive(Parser, Debug)]
#[command(name = "snake-cube", about = "Exhaustive snake cube solver")]
struct Args {
    /// Search from this cell only, as X,Y,Z with components in 0..=2
    #[arg(long, value_name = "X,Y,Z", conflicts_with = "exhaustive")]
    seed: Option<Coord3>,

    /// Search from all 27 cells instead of the 4 symmetry-distinct seeds
    #[arg(long)]
    exhaustive: bool,

    /// Count solutions without printing them
    #[arg(long)]
    quiet: bool,

    /// Print search counters after the count
    #[arg(long)]
    stats: bool,
}

impl Args {
    fn config(&self) -> SearchConfig {
        let seeds = match (self.seed, self.exhaustive) {
            (Some(coord), _) => SeedSelection::Single(coord),
            (None, true) => SeedSelection::Exhaustive,
            (None, false) => SeedSelection::Canonical,
        };
        SearchConfig {
            seeds,
            report_solutions: !self.quiet,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let stdout = io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "search failed");
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.config();
    let summary = run_search(&config, WriterReporter::new(&mut *out))?;

    writeln!(out, "Found {} solutions", summary.total())?;
    if args.stats {
        print_stats(out, &summary)?;
    }
    out.flush()?;
    Ok(())
}

fn print_stats(out: &mut impl Write, summary: &SearchSummary) -> io::Result<()> {
    writeln!(out)?;
    for outcome in &summary.outcomes {
        writeln!(
            out,
            "{:<6} {}  x{:<2}  solutions={:<6} frames={}",
            outcome.seed.label,
            outcome.seed.coord,
            outcome.seed.multiplicity,
            outcome.solutions,
            outcome.stats.frames,
        )?;
    }
    writeln!(
        out,
        "over all 27 start cells: {} solutions",
        summary.weighted_total()
    )?;
    let stats = &summary.stats;
    writeln!(
        out,
        "frames={} tried={} pruned={} ({:.1}%) deepest={}",
        stats.frames,
        stats.branches_tried,
        stats.branches_pruned,
        stats.prune_ratio() * 100.0,
        stats.deepest_segment,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("snake-cube").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_to_canonical_with_reporting() {
        let config = parse(&[]).config();
        assert_eq!(config.seeds, SeedSelection::Canonical);
        assert!(config.report_solutions);
    }

    #[test]
    fn seed_flag_parses_coordinate() {
        let config = parse(&["--seed", "0,1,2", "--quiet"]).config();
        assert_eq!(config.seeds, SeedSelection::Single(Coord3::new(0, 1, 2)));
        assert!(!config.report_solutions);
    }

    #[test]
    fn exhaustive_flag() {
        assert_eq!(parse(&["--exhaustive"]).config().seeds, SeedSelection::Exhaustive);
    }

    #[test]
    fn malformed_seed_is_rejected() {
        assert!(Args::try_parse_from(["snake-cube", "--seed", "1,2"]).is_err());
        assert!(Args::try_parse_from(["snake-cube", "--seed", "1,1,1", "--exhaustive"]).is_err());
    }

    fn render(argv: &[&str]) -> String {
        let mut buf = Vec::new();
        run(&parse(argv), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn default_run_reports_plain_sum_over_seeds() {
        let text = render(&[]);
        assert_eq!(text.lines().last(), Some("Found 6 solutions"));
        assert_eq!(text.matches("1. Start at (0, 0, 0)").count(), 6);
    }

    #[test]
    fn quiet_run_prints_only_the_count() {
        assert_eq!(render(&["--quiet"]), "Found 6 solutions\n");
    }

    #[test]
    fn stats_show_weighted_count_after_found_line() {
        let text = render(&["--quiet", "--stats"]);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Found 6 solutions"));
        assert!(text.contains("over all 27 start cells: 48 solutions"));
    }

    #[test]
    fn stats_block_lists_every_seed() {
        let config = SearchConfig {
            seeds: SeedSelection::Canonical,
            report_solutions: false,
        };
        let summary = run_search(&config, NullReporter).unwrap();
        let mut buf = Vec::new();
        print_stats(&mut buf, &summary).unwrap();
        let text = String::from_utf8(buf).unwrap();
        for seed in CANONICAL_SEEDS {
            assert!(text.contains(seed.label));
        }
        assert!(text.contains("frames="));
    }
}
