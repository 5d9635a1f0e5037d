use crate::N_SEQUENCES;
use crate::Probability;
use crate::cards::sequence::Sequence;
use crate::simulation::matrix::Matrix;
use crate::simulation::report::Report;
use colored::Colorize;

/// heatmap rendering of one scoring rule's win/tie matrices, in two
/// styles: an ANSI grid for the terminal and a standalone HTML table.
/// rows are my sequence, columns the opponent's; cells annotate
/// "win(tie)" as integer percents on a blue scale, and the diagonal is
/// left blank.
pub struct Heatmap<'a> {
    wins: &'a Matrix,
    ties: &'a Matrix,
    title: String,
}

impl<'a> Heatmap<'a> {
    pub fn cards(report: &'a Report) -> Self {
        Self {
            wins: &report.cards,
            ties: &report.cards_ties,
            title: format!(
                "My Chance of Winning by Cards (from {} Random Decks) [Win(Tie)]",
                report.n
            ),
        }
    }
    pub fn tricks(report: &'a Report) -> Self {
        Self {
            wins: &report.tricks,
            ties: &report.tricks_ties,
            title: format!(
                "My Chance of Winning by Tricks (from {} Random Decks) [Win(Tie)]",
                report.n
            ),
        }
    }

    fn labels() -> impl Iterator<Item = String> {
        Sequence::all().map(|s| s.to_string())
    }
    /// "win(tie)" in integer percents, blank on the diagonal
    fn annot(&self, row: usize, col: usize) -> String {
        match row == col {
            true => String::new(),
            false => format!(
                "{:.0}({:.0})",
                self.wins.get(row, col) * 100.,
                self.ties.get(row, col) * 100.,
            ),
        }
    }
    /// matplotlib Blues endpoints, interpolated by win probability
    fn shade(p: Probability) -> (u8, u8, u8) {
        let t = p.clamp(0., 1.);
        (
            (247. - 239. * t) as u8,
            (251. - 203. * t) as u8,
            (255. - 148. * t) as u8,
        )
    }

    /// terminal rendering
    pub fn ansi(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", self.title.bold()));
        out.push_str(&format!("{:>6}", "me\\op"));
        for label in Self::labels() {
            out.push_str(&format!("{:>8}", label));
        }
        out.push('\n');
        for (i, label) in Self::labels().enumerate() {
            out.push_str(&format!("{:>6}", label));
            for j in 0..N_SEQUENCES {
                let cell = format!("{:>8}", self.annot(i, j));
                let cell = match i == j {
                    true => cell.on_truecolor(211, 211, 211),
                    false => {
                        let p = self.wins.get(i, j);
                        let (r, g, b) = Self::shade(p);
                        match p > 0.5 {
                            true => cell.white().on_truecolor(r, g, b),
                            false => cell.black().on_truecolor(r, g, b),
                        }
                    }
                };
                out.push_str(&cell.to_string());
            }
            out.push('\n');
        }
        out
    }

    /// standalone page rendering
    pub fn html(&self) -> String {
        let mut rows = String::new();
        rows.push_str("<tr><th>me \\ opponent</th>");
        for label in Self::labels() {
            rows.push_str(&format!("<th>{}</th>", label));
        }
        rows.push_str("</tr>\n");
        for (i, label) in Self::labels().enumerate() {
            rows.push_str(&format!("<tr><th>{}</th>", label));
            for j in 0..N_SEQUENCES {
                let style = match i == j {
                    true => "background:lightgray".to_string(),
                    false => {
                        let p = self.wins.get(i, j);
                        let (r, g, b) = Self::shade(p);
                        let fg = match p > 0.5 {
                            true => "white",
                            false => "black",
                        };
                        format!("background:rgb({},{},{});color:{}", r, g, b, fg)
                    }
                };
                rows.push_str(&format!("<td style=\"{}\">{}</td>", style, self.annot(i, j)));
            }
            rows.push_str("</tr>\n");
        }
        format!(
            "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><title>{title}</title>\
             <style>table{{border-collapse:collapse;font-family:monospace}}\
             td,th{{border:1px solid white;padding:6px 10px;text-align:center}}</style>\
             </head><body><h3>{title}</h3>\n<table>\n{rows}</table></body></html>\n",
            title = self.title,
            rows = rows,
        )
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        if let Some(parent) = std::path::Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.html())?;
        log::info!("{:<32}{:<16}", "saved heatmap", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::pair::Pair;
    use crate::simulation::aggregate::Aggregator;

    fn report() -> Report {
        let aggregator = Aggregator::from(Pair::unique());
        let tally = aggregator.simulate(1, 50).unwrap();
        Report::try_from(&tally)
            .unwrap()
            .complete(aggregator.pairs())
            .unwrap()
    }

    #[test]
    fn annotations_blank_the_diagonal() {
        let report = report();
        let heatmap = Heatmap::cards(&report);
        assert_eq!(heatmap.annot(2, 2), "");
        assert!(!heatmap.annot(2, 3).is_empty());
    }

    #[test]
    fn html_carries_labels_and_count() {
        let report = report();
        let html = Heatmap::tricks(&report).html();
        assert!(html.contains("BBB"));
        assert!(html.contains("RRR"));
        assert!(html.contains("50 Random Decks"));
        assert!(html.contains("Tricks"));
    }

    #[test]
    fn ansi_renders_every_row() {
        let report = report();
        let grid = Heatmap::cards(&report).ansi();
        for label in ["BBB", "BBR", "BRB", "BRR", "RBB", "RBR", "RRB", "RRR"] {
            assert!(grid.contains(label));
        }
    }
}
