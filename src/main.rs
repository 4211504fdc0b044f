use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use reflex::{
    app::{Action, App},
    audio::open_cue,
    config::{Config, ConfigStore, FileConfigStore},
    logging::{default_log_path, init_file_logging},
    round::RoundController,
    runtime::{CrosstermEventSource, FixedTicker, GameEvent, Runner},
    sign::{Catalog, Difficulty},
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::{Duration, Instant},
};
use tracing::{error, info, warn};

/// press the key for the sign before the ring runs out
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal reflex game: a sign appears, press its key before the per-sign timer expires. Correct presses score and bring up a new sign until the session clock runs out."
)]
pub struct Cli {
    /// difficulty preselected on the start screen
    #[clap(short = 'd', long, value_enum)]
    difficulty: Option<Difficulty>,

    /// length of a round in seconds
    #[clap(short = 's', long)]
    session_secs: Option<u32>,

    /// seconds allowed per sign before it changes on its own
    #[clap(long)]
    sign_secs: Option<u32>,

    /// disable the sign-change sound
    #[clap(long)]
    mute: bool,

    /// fixed random seed, for reproducible sign sequences
    #[clap(long)]
    seed: Option<u64>,

    /// write the log here instead of the state directory
    #[clap(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Command line flags win over stored settings.
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(d) = self.difficulty {
            cfg.difficulty = d;
        }
        if let Some(s) = self.session_secs {
            cfg.session_secs = s;
        }
        if let Some(s) = self.sign_secs {
            cfg.sign_secs = s;
        }
        if self.mute {
            cfg.mute = true;
        }
        cfg
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = cli.log_file.clone().or_else(default_log_path) {
        // best effort; the terminal is still ours to print on here
        if let Err(err) = init_file_logging(&path) {
            eprintln!("reflex: logging disabled: {err}");
        }
    }

    let store = FileConfigStore::new();
    let stored = store.load();
    let cfg = cli.apply(stored.clone());
    cfg.validate()?;

    let catalog = Catalog::standard().inspect_err(|err| error!(%err, "invalid sign table"))?;
    let round = match cli.seed {
        Some(seed) => RoundController::with_seed(catalog, cfg.session_config(), seed),
        None => RoundController::from_entropy(catalog, cfg.session_config()),
    };
    let cue = open_cue(cfg.mute);
    let mut app = App::new(
        round,
        cfg.difficulty,
        cue,
        Duration::from_millis(cfg.feedback_ms),
        Instant::now(),
    );

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(difficulty = %cfg.difficulty, "starting");
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    if app.selected != stored.difficulty {
        let remembered = Config {
            difficulty: app.selected,
            ..stored
        };
        let path = store.path().display();
        match store.save(&remembered) {
            Ok(()) => info!(%path, difficulty = %app.selected, "difficulty saved"),
            Err(err) => warn!(%err, %path, "could not save config"),
        }
    }

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::default());

    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        match runner.step() {
            GameEvent::Tick => app.on_tick(Instant::now()),
            GameEvent::Resize => {}
            GameEvent::Key(key) => {
                if app.on_key(key, Instant::now()) == Action::Quit {
                    break;
                }
            }
        }
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["reflex"]);

        assert_eq!(cli.difficulty, None);
        assert_eq!(cli.session_secs, None);
        assert_eq!(cli.sign_secs, None);
        assert!(!cli.mute);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_cli_difficulty() {
        let cli = Cli::parse_from(["reflex", "-d", "hard"]);
        assert_eq!(cli.difficulty, Some(Difficulty::Hard));

        let cli = Cli::parse_from(["reflex", "--difficulty", "normal"]);
        assert_eq!(cli.difficulty, Some(Difficulty::Normal));
    }

    #[test]
    fn test_cli_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["reflex", "-d", "insane"]).is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "reflex",
            "-s",
            "30",
            "--sign-secs",
            "4",
            "--mute",
            "-d",
            "hard",
        ]);
        let cfg = cli.apply(Config::default());

        assert_eq!(cfg.session_secs, 30);
        assert_eq!(cfg.sign_secs, 4);
        assert!(cfg.mute);
        assert_eq!(cfg.difficulty, Difficulty::Hard);
        assert_eq!(cfg.feedback_ms, 200);
    }

    #[test]
    fn test_cli_keeps_stored_values_when_absent() {
        let stored = Config {
            difficulty: Difficulty::Hard,
            mute: true,
            ..Config::default()
        };
        let cfg = Cli::parse_from(["reflex"]).apply(stored.clone());
        assert_eq!(cfg, stored);
    }

    #[test]
    fn test_cli_zero_seconds_fails_validation() {
        let cfg = Cli::parse_from(["reflex", "-s", "0"]).apply(Config::default());
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_ui_renders_through_terminal() {
        use ratatui::backend::TestBackend;

        let round = RoundController::with_seed(
            Catalog::standard().unwrap(),
            Config::default().session_config(),
            1,
        );
        let mut app = App::new(
            round,
            Difficulty::Normal,
            open_cue(true),
            Duration::from_millis(200),
            Instant::now(),
        );

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| f.render_widget(&app, f.area()))
            .unwrap();
        app.start_round(Instant::now());
        terminal
            .draw(|f| f.render_widget(&app, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Score"));
    }
}
