use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use escape_earth::build_info;
use escape_earth::cli::{self, Command, RunOptions};
use escape_earth::core::{FixedStep, GameConfig};
use escape_earth::flow::{FlowController, FlowState};
use escape_earth::input;
use escape_earth::logging;
use escape_earth::persistence::BestScoreStore;
use escape_earth::settings::Settings;
use escape_earth::ui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;

fn main() -> io::Result<()> {
    let options = match cli::parse(std::env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            println!("{}", cli::USAGE);
            std::process::exit(0);
        }
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'escape-earth --help' for usage.");
            std::process::exit(1);
        }
    };

    // A broken log file shouldn't stop the game.
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }
    log::info!(
        "Starting escape-earth {} ({})",
        env!("CARGO_PKG_VERSION"),
        build_info::BUILD_COMMIT
    );

    let mut settings = Settings::load_or_default();
    if let Some(fps) = options.frame_rate {
        settings.frame_rate = fps;
    }

    let store = open_store(&options);
    log::info!(
        "Best score {} from {}",
        store.best(),
        store.path().display()
    );

    let mut rng = match options.seed.or(settings.seed) {
        Some(seed) => {
            log::info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut flow = FlowController::new(GameConfig::default(), store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut flow, &settings, &mut rng);

    // Cleanup terminal, even when the loop failed.
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("Game loop failed: {}", e);
    }
    result
}

fn open_store(options: &RunOptions) -> BestScoreStore {
    match &options.score_file {
        Some(path) => BestScoreStore::open(path.clone()),
        None => BestScoreStore::open_default(),
    }
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    flow: &mut FlowController,
    settings: &Settings,
    rng: &mut StdRng,
) -> io::Result<()> {
    let frame_budget = settings.frame_duration();
    let mut clock = FixedStep::new();
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        let state = flow.state();

        let area = terminal.size()?;
        let buttons = ui::screen_buttons(state, area);
        let triggers = input::drain_events(state, &buttons)?;

        let ticks = if state == FlowState::Playing {
            clock.advance(frame_start.duration_since(last_frame))
        } else {
            0
        };
        last_frame = frame_start;

        flow.update(&triggers, ticks, rng)?;

        if flow.state() == FlowState::Exit {
            return Ok(());
        }
        if flow.state() == FlowState::Playing && state != FlowState::Playing {
            // Time spent on the menu must not turn into a burst of ticks.
            clock.reset();
        }

        terminal.draw(|frame| ui::draw(frame, flow, settings.backdrop))?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }
}
