use chromatch_engine::MAX_FITNESS;

use crate::command::GaArg;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct RunArg {
    #[clap(flatten)]
    ga: GaArg,
    /// Number of generations to evolve
    #[clap(long, default_value_t = 100)]
    generations: u64,
}

pub(crate) fn run(arg: &RunArg) -> anyhow::Result<()> {
    let RunArg { ga, generations } = arg;

    let mut engine = ga.build_engine()?;
    eprintln!("Target: {}", engine.target());

    for _ in 0..*generations {
        let summary = engine.advance();
        eprintln!(
            "Generation #{}: best {} (fitness {}/{MAX_FITNESS})",
            summary.generation, summary.best, summary.best_fitness,
        );
        if summary.best_fitness == MAX_FITNESS {
            eprintln!("Matched the target after {} generations", summary.generation);
            break;
        }
    }

    Ok(())
}
