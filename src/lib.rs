pub mod analysis;
pub mod cards;
pub mod game;
pub mod save;
pub mod simulation;

/// probability of an event, in [0, 1]
pub type Probability = f64;
/// accumulated outcome counter
pub type Count = u64;

/// cards in a full deck
pub const N_CARDS: usize = 52;
/// cards of each color in a full deck
pub const N_PER_COLOR: usize = 26;
/// cards in a player's committed pattern
pub const N_PATTERN: usize = 3;
/// distinct patterns of N_PATTERN two-color cards
pub const N_SEQUENCES: usize = 1 << N_PATTERN;
/// pile value before any card of a scan is dealt.
/// house rule inherited from the source game: the counter seeds at 2,
/// so the earliest possible trick awards exactly 3 cards.
pub const BASE_PILE: u16 = 2;

/// dual logging. timestamped files and terminal output
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
