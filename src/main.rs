use autosweeper::{
    Autoplayer, CountingSolver, DeductionMode, DriverConfig, Game, GameConfig, GameError,
    GameState, GameStats,
};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

/// Plays minesweeper with certain deductions, guessing only when stuck
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Board size and mine count to use unless --width/--height/--mines are given
    #[arg(long, value_enum, default_value_t = Preset::Beginner)]
    preset: Preset,

    #[arg(long, requires_all = ["height", "mines"])]
    width: Option<u32>,

    #[arg(long, requires = "width")]
    height: Option<u32>,

    #[arg(long, requires = "width")]
    mines: Option<u32>,

    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: usize,

    /// Seed for mine placement and guesses
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 10_000)]
    max_turns: usize,

    /// Do not count a cell as discovered until the board itself reports it
    #[arg(long)]
    snapshot_authoritative: bool,

    /// Stop instead of guessing when nothing is certain
    #[arg(long)]
    no_guess: bool,

    /// Print the board after each game
    #[arg(long)]
    show: bool,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        match (self.width, self.height, self.mines) {
            (Some(width), Some(height), Some(mines)) => GameConfig::new(width, height, mines),
            _ => match self.preset {
                Preset::Beginner => GameConfig::beginner(),
                Preset::Intermediate => GameConfig::intermediate(),
                Preset::Expert => GameConfig::expert(),
            },
        }
    }

    fn mode(&self) -> DeductionMode {
        if self.snapshot_authoritative {
            DeductionMode::SnapshotAuthoritative
        } else {
            DeductionMode::SelfAuthoritative
        }
    }

    fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            max_turns: self.max_turns,
            guess_when_stuck: !self.no_guess,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Game error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: &Verbosity<InfoLevel>) {
    let default_level = verbose.log_level_filter().to_string().to_lowercase();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), GameError> {
    let config = cli.game_config();
    config.validate()?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let guess_rng = StdRng::seed_from_u64(rng.gen());
    let solver = CountingSolver::new(cli.mode());
    let mut player = Autoplayer::new(solver, guess_rng, cli.driver_config());

    log::info!(
        "playing {} game(s) on {}x{} with {} mines",
        cli.games,
        config.width,
        config.height,
        config.mines
    );

    let mut all_stats = Vec::with_capacity(cli.games);
    for number in 1..=cli.games {
        let mut game = Game::new(config, &mut rng)?;
        let stats = player.play(&mut game)?;
        println!(
            "Game {}: {} after {} turns ({} certain reveals, {} flags, {} guesses)",
            number,
            describe(&stats),
            stats.turns,
            stats.certain_reveals,
            stats.flags,
            stats.guesses
        );
        if cli.show {
            print_board(&game);
        }
        all_stats.push(stats);
    }

    print_summary(&all_stats);
    Ok(())
}

fn describe(stats: &GameStats) -> &'static str {
    match stats.outcome {
        Some(GameState::Won) => "won",
        Some(GameState::Lost) => "lost",
        Some(GameState::Running) | None => "unfinished",
    }
}

fn print_summary(all_stats: &[GameStats]) {
    if all_stats.is_empty() {
        return;
    }
    let games = all_stats.len() as f64;
    let won = all_stats.iter().filter(|s| s.won()).count();
    let guesses: usize = all_stats.iter().map(|s| s.guesses).sum();

    println!();
    println!(
        "Success rate: {:.1}% ({}/{})",
        won as f64 / games * 100.0,
        won,
        all_stats.len()
    );
    println!("Average guesses per game: {:.2}", guesses as f64 / games);
}

fn print_board(game: &Game) {
    let board = game.board();
    let (width, _) = board.dimensions();

    // Print column numbers
    print!("   ");
    for x in 0..width {
        print!("{} ", x % 10);
    }

    for (i, cell) in board.cells().enumerate() {
        if i % width as usize == 0 {
            println!();
            print!("{:2} ", cell.position().y);
        }
        if cell.is_flagged() {
            print!("⚑ ");
        } else if !cell.is_revealed() {
            print!("□ ");
        } else if cell.is_mine() {
            print!("* ");
        } else {
            match board.adjacent_mine_count(cell) {
                0 => print!("  "),
                n => print!("{} ", n),
            }
        }
    }
    println!();
}
