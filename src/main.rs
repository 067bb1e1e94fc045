use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use vocab_trainer::{
    handle_key, logger, vocabulary, App, AppConfig, CommandSpeaker, LearnedSet, Speaker,
    SpeechHandle,
};

const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> io::Result<()> {
    let config = AppConfig::from_env();
    logger::init(&config.log_file);
    logger::log("Starting vocab-trainer");
    for warning in &config.warnings {
        logger::warn(warning);
    }

    let (words, vocabulary_notice) = vocabulary::load_or_builtin(config.vocabulary_file.as_deref())
        .map_err(|e| {
            logger::warn(&format!("Built-in vocabulary is invalid: {}", e));
            io::Error::new(io::ErrorKind::InvalidData, e)
        })?;
    let (learned, storage_notice) = LearnedSet::open(&config.data_dir);

    let speaker = CommandSpeaker::detect(config.speech_command.as_deref());
    match &speaker {
        Some(s) => logger::log(&format!("Using {} for pronunciation", s.program().display())),
        None => logger::log("No text-to-speech program found"),
    }
    let speech = SpeechHandle::start(speaker.map(|s| Box::new(s) as Box<dyn Speaker>));

    let mut app = App::new(words, learned, speech).with_quiz_length(config.quiz_length);
    let load_warning = app.learned.take_warning();
    app.notice = join_notices([vocabulary_notice, storage_notice, load_warning]);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::warn(&format!("Exiting with error: {}", e));
    }
    logger::log("Exiting vocab-trainer");
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| vocab_trainer::draw(f, app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_key(app, key);
        }

        app.poll_background();

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Startup notices share the single notice line.
fn join_notices(notices: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    let notices: Vec<String> = notices.into_iter().flatten().collect();
    (!notices.is_empty()).then(|| notices.join("; "))
}
