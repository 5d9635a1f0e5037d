use std::time::Instant;

/// periodic progress logging for long sequential runs, such as deck
/// generation. ticks once per item and logs every 1% of the total.
pub struct Progress {
    total: usize,
    check: usize,
    ticks: usize,
    begin: Instant,
    delta: Instant,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        let check = (total / 100).max(1);
        let now = Instant::now();
        Self {
            total,
            check,
            ticks: 0,
            begin: now,
            delta: now,
        }
    }
    pub fn tick(&mut self) {
        self.ticks += 1;
        if self.ticks % self.check == 0 {
            let now = Instant::now();
            let total_t = now.duration_since(self.begin);
            let delta_t = now.duration_since(self.delta);
            self.delta = now;
            log::info!(
                "{:>6.2}% {:>10} of {:<10} {:6.0?} elapsed   {:6.0}/s",
                self.ticks as f32 / self.total as f32 * 100f32,
                self.ticks,
                self.total,
                total_t,
                self.check as f32 / delta_t.as_secs_f32(),
            );
        }
    }
}
