use crate::cards::deck::Deck;
use crate::simulation::progress::Progress;
use serde::Deserialize;
use serde::Serialize;
use std::io::BufRead;
use std::io::Write;

/// one persisted shuffle: the seed that produced it and the deck in
/// its '0'/'1' wire form. decks live as line-delimited JSON so a
/// million-deck file can be streamed record by record.
#[derive(Debug, Serialize, Deserialize)]
pub struct Record {
    pub seed: u64,
    pub deck: String,
}

pub struct Records;

impl Records {
    /// timestamped data file for a batch of n decks
    pub fn path(n: usize) -> String {
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time moves slow")
            .as_secs();
        format!("data/decks_{}_{}.jsonl", n, time)
    }

    /// persist seeded decks, one JSON record per line
    pub fn save(path: &str, decks: impl Iterator<Item = (u64, Deck)>, n: usize) -> anyhow::Result<()> {
        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut progress = Progress::new(n);
        let ref mut writer = std::io::BufWriter::new(std::fs::File::create(path)?);
        for (seed, deck) in decks {
            let record = Record {
                seed,
                deck: deck.to_string(),
            };
            serde_json::to_writer(&mut *writer, &record)?;
            writeln!(writer)?;
            progress.tick();
        }
        writer.flush()?;
        log::info!("{:<32}{:<16}", "saved decks", path);
        Ok(())
    }

    /// load a deck collection back, fail fast on any malformed line or
    /// deck: one corrupt deck poisons the whole aggregate
    pub fn load(path: &str) -> anyhow::Result<Vec<Deck>> {
        let reader = std::io::BufReader::new(std::fs::File::open(path)?);
        let decks = reader
            .lines()
            .map(|line| {
                let record = serde_json::from_str::<Record>(&line?)?;
                Deck::try_from(record.deck.as_str())
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        log::info!("{:<32}{:<16}", "loaded decks", decks.len());
        Ok(decks)
    }
}
