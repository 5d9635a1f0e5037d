use clap::Parser;
use penney::analysis::heatmap::Heatmap;
use penney::cards::shuffle::Shuffler;
use penney::save::records::Records;
use penney::simulation::aggregate::Aggregator;
use penney::simulation::report::Report;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Command {
    #[command(about = "Shuffle seeded decks and persist them", alias = "gen")]
    Shuffle {
        #[arg(long, default_value_t = 100_000)]
        n: usize,
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(long)]
        path: Option<String>,
    },
    #[command(about = "Score persisted decks into probability matrices", alias = "proc")]
    Process {
        #[arg(required = true)]
        decks: String,
        #[arg(long, default_value = Report::PATH)]
        out: String,
    },
    #[command(about = "Render saved results as heatmaps", alias = "viz")]
    Render {
        #[arg(long, default_value = Report::PATH)]
        results: String,
        #[arg(long, default_value = "term")]
        format: String,
    },
    #[command(about = "Shuffle, score, and render in one in-memory pass")]
    Run {
        #[arg(long, default_value_t = 100_000)]
        n: usize,
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(long, default_value = Report::PATH)]
        out: String,
    },
}

impl Command {
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Shuffle { n, seed, path } => {
                let path = path.unwrap_or_else(|| Records::path(n));
                Records::save(&path, Shuffler::decks(seed, n), n)
            }
            Command::Process { decks, out } => {
                let decks = Records::load(&decks)?;
                let aggregator = Aggregator::default();
                aggregator.report(&decks)?.save(&out)
            }
            Command::Render { results, format } => {
                let report = Report::load(&results)?;
                Self::render(&report, &format)
            }
            Command::Run { n, seed, out } => {
                let aggregator = Aggregator::default();
                let tally = aggregator.simulate(seed, n)?;
                let report = Report::try_from(&tally)?.complete(aggregator.pairs())?;
                report.save(&out)?;
                Self::render(&report, "term")
            }
        }
    }

    fn render(report: &Report, format: &str) -> anyhow::Result<()> {
        match format {
            "term" => {
                println!("{}", Heatmap::cards(report).ansi());
                println!("{}", Heatmap::tricks(report).ansi());
                Ok(())
            }
            "html" => {
                Heatmap::cards(report).save("results/cards.html")?;
                Heatmap::tricks(report).save("results/tricks.html")
            }
            _ => anyhow::bail!("unknown format: {} (expected term or html)", format),
        }
    }
}

fn main() -> anyhow::Result<()> {
    penney::log();
    Command::parse().run()
}
