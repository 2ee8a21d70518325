//! Running the engine over a set of seed cells.

use crate::config::SearchConfig;
use crate::engine::SearchEngine;
use crate::error::SearchError;
use crate::report::{NullReporter, SolutionReporter};
use crate::seeds::SeedPosition;
use crate::stats::SearchStats;
use snake_core::Coord3;
use snake_lattice::Lattice;

/// Result of exhausting one seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedOutcome {
    /// The seed that was searched.
    pub seed: SeedPosition,
    /// Solutions found from it.
    pub solutions: u64,
    /// Engine counters for this seed alone.
    pub stats: SearchStats,
}

/// Result of a whole run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchSummary {
    /// One entry per seed, in run order.
    pub outcomes: Vec<SeedOutcome>,
    /// Counters merged across all seeds.
    pub stats: SearchStats,
}

impl SearchSummary {
    /// Solutions found, summed over the seeds actually searched.
    pub fn total(&self) -> u64 {
        self.outcomes.iter().map(|o| o.solutions).sum()
    }

    /// Solutions over every start cell the seeds stand for.
    ///
    /// Equal to [`total`](Self::total) for exhaustive and single-cell runs.
    pub fn weighted_total(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|o| o.solutions * o.seed.multiplicity)
            .sum()
    }
}

/// Validate `config` and search every seed it selects.
///
/// Solutions go to `reporter` when `config.report_solutions` is set and are
/// only counted otherwise.
pub fn run_search<R: SolutionReporter>(
    config: &SearchConfig,
    reporter: R,
) -> Result<SearchSummary, SearchError> {
    config.validate()?;
    let seeds = config.seeds.seeds();
    tracing::info!(
        seeds = seeds.len(),
        report = config.report_solutions,
        "starting search"
    );

    let summary = if config.report_solutions {
        run_seeds(&mut SearchEngine::new(reporter), &seeds)?
    } else {
        run_seeds(&mut SearchEngine::new(NullReporter), &seeds)?
    };

    tracing::info!(
        total = summary.total(),
        weighted_total = summary.weighted_total(),
        frames = summary.stats.frames,
        "search complete"
    );
    Ok(summary)
}

/// Search each seed in turn on one shared lattice.
///
/// The lattice is fully restored between seeds.
pub fn run_seeds<R: SolutionReporter>(
    engine: &mut SearchEngine<'_, R>,
    seeds: &[SeedPosition],
) -> Result<SearchSummary, SearchError> {
    let mut lattice = Lattice::new();
    let mut summary = SearchSummary::default();

    for &seed in seeds {
        let _span = tracing::info_span!("seed", label = seed.label, coord = %seed.coord).entered();

        let solutions = engine.run_from_seed(&mut lattice, seed.coord)?;
        let stats = engine.take_stats();
        debug_assert!(lattice.is_empty(), "lattice not restored after {}", seed.coord);

        tracing::info!(solutions, "seed exhausted");
        tracing::debug!(
            frames = stats.frames,
            branches_tried = stats.branches_tried,
            branches_pruned = stats.branches_pruned,
            prune_ratio = stats.prune_ratio(),
            "seed stats"
        );

        summary.stats.merge(&stats);
        summary.outcomes.push(SeedOutcome {
            seed,
            solutions,
            stats,
        });
    }
    Ok(summary)
}

/// Count solutions from one seed over the fixed segment sequence.
pub fn run_search_from_seed<R: SolutionReporter>(
    seed: Coord3,
    reporter: R,
) -> Result<u64, SearchError> {
    let mut lattice = Lattice::new();
    SearchEngine::new(reporter).run_from_seed(&mut lattice, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, SeedSelection};
    use crate::seeds::CANONICAL_SEEDS;

    #[test]
    fn weighted_total_scales_by_multiplicity() {
        let outcome = |seed: SeedPosition, solutions| SeedOutcome {
            seed,
            solutions,
            stats: SearchStats::default(),
        };
        let summary = SearchSummary {
            outcomes: vec![
                outcome(CANONICAL_SEEDS[0], 2),
                outcome(CANONICAL_SEEDS[1], 1),
                outcome(CANONICAL_SEEDS[3], 5),
            ],
            stats: SearchStats::default(),
        };
        assert_eq!(summary.total(), 8);
        assert_eq!(summary.weighted_total(), 2 * 8 + 12 + 5);
    }

    #[test]
    fn invalid_config_is_rejected_before_searching() {
        let config = SearchConfig {
            seeds: SeedSelection::Single(Coord3::new(5, 5, 5)),
            report_solutions: false,
        };
        let err = run_search(&config, NullReporter).unwrap_err();
        assert!(matches!(
            err,
            SearchError::Config(ConfigError::SeedOutOfBounds { .. })
        ));
    }

    #[test]
    fn run_seeds_records_each_seed() {
        let segments = [3];
        let mut engine = SearchEngine::with_segments(&segments, NullReporter).unwrap();
        let summary = run_seeds(&mut engine, &CANONICAL_SEEDS).unwrap();
        let counts: Vec<u64> = summary.outcomes.iter().map(|o| o.solutions).collect();
        // Corner: 3 directions fit. Edge (0,0,1): only right and up.
        // Face (0,1,1): only right. Centre: a 3-long run always leaves.
        assert_eq!(counts, [3, 2, 1, 0]);
        assert_eq!(summary.total(), 6);
        assert_eq!(summary.stats.solutions, 6);
    }
}
