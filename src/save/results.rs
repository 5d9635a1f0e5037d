use crate::simulation::report::Report;

/// results.json persistence. the completed report is the run's final
/// artifact and is written exactly once.
impl Report {
    pub const PATH: &'static str = "results/results.json";

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        serde_json::to_writer(std::io::BufWriter::new(std::fs::File::create(path)?), self)?;
        log::info!("{:<32}{:<16}", "saved results", path);
        Ok(())
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let report = serde_json::from_reader::<_, Self>(std::io::BufReader::new(
            std::fs::File::open(path)?,
        ))?;
        log::info!("{:<32}{:<16}", "loaded results", report.n);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::pair::Pair;
    use crate::simulation::aggregate::Aggregator;

    #[test]
    fn round_trip_keeps_the_null_diagonal() {
        let aggregator = Aggregator::from(Pair::unique());
        let tally = aggregator.simulate(1, 20).unwrap();
        let report = Report::try_from(&tally)
            .unwrap()
            .complete(aggregator.pairs())
            .unwrap();
        let path = std::env::temp_dir()
            .join(format!("penney_results_{}.json", std::process::id()))
            .to_string_lossy()
            .into_owned();
        report.save(&path).unwrap();
        let back = Report::load(&path).unwrap();
        assert_eq!(back.n, 20);
        assert!(back.cards.get(3, 3).is_nan());
        assert_eq!(back.cards.get(0, 7), report.cards.get(0, 7));
        std::fs::remove_file(&path).unwrap();
    }
}
