use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use scout_core::{update, Effect, FormState, Msg};
use scout_engine::{EngineError, EngineHandle};
use scout_logging::{scout_info, scout_warn};
use thiserror::Error;

use super::config::{self, API_BASE_URL_ENV, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;
use super::ui::render::RenderOptions;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("terminal output failed: {0}")]
    Io(#[from] io::Error),
}

/// Everything the event loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    /// One line typed at the prompt: fill the input, then press the trigger.
    Line(String),
    /// A core message produced outside the loop (engine completions).
    Core(Msg),
    /// Stdin reached EOF.
    InputClosed,
}

pub fn run_app() -> Result<(), AppError> {
    let loaded = config::load(Path::new(CONFIG_FILENAME));
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(err) => (config::AppConfig::default(), Some(err)),
    };
    let config = config.with_env_override(std::env::var(API_BASE_URL_ENV).ok());

    logging::initialize(if config.log_to_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    });
    if let Some(err) = config_error {
        scout_warn!("{}; using defaults", err);
    }

    let engine = EngineHandle::new(config.client_settings())?;
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(engine, event_tx.clone());
    spawn_input_reader(event_tx);

    let mut controller = Controller::new(RenderOptions {
        hyperlinks: config.terminal_hyperlinks,
    });
    let mut out = io::stdout().lock();
    write_lines(&mut out, &ui::layout::initial_lines())?;
    write!(out, "{}", ui::constants::PROMPT)?;
    out.flush()?;

    while let Ok(event) = event_rx.recv() {
        let step = controller.handle(event);
        runner.enqueue(step.effects);
        write_lines(&mut out, &step.lines)?;
        if step.finished {
            break;
        }
        if step.show_prompt {
            write!(out, "{}", ui::constants::PROMPT)?;
        }
        out.flush()?;
    }

    scout_info!("Front end finished");
    out.flush()?;
    Ok(())
}

fn spawn_input_reader(events: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if events.send(AppEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = events.send(AppEvent::InputClosed);
    });
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Result of handling one event: IO for the loop to perform.
#[derive(Debug, Default)]
pub(crate) struct Step {
    pub effects: Vec<Effect>,
    pub lines: Vec<String>,
    pub show_prompt: bool,
    pub finished: bool,
}

/// Owns the form state and turns events into effects and screen output.
pub(crate) struct Controller {
    state: FormState,
    options: RenderOptions,
    input_closed: bool,
}

impl Controller {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            state: FormState::new(),
            options,
            input_closed: false,
        }
    }

    pub fn handle(&mut self, event: AppEvent) -> Step {
        let mut step = Step::default();
        match event {
            AppEvent::Line(text) => {
                self.dispatch(Msg::InputChanged(text), &mut step.effects);
                // A disabled trigger cannot be pressed.
                if self.state.view().submit_enabled {
                    self.dispatch(Msg::SubmitClicked, &mut step.effects);
                } else {
                    step.lines.push(ui::constants::BUSY_NOTICE.to_string());
                }
            }
            AppEvent::Core(msg) => self.dispatch(msg, &mut step.effects),
            AppEvent::InputClosed => self.input_closed = true,
        }

        let view = self.state.view();
        if self.state.consume_dirty() && step.lines.is_empty() {
            step.lines = ui::render::render(&view, self.options);
        }
        step.show_prompt = view.submit_enabled && !self.input_closed;
        step.finished = self.input_closed && !view.loading;
        step
    }

    fn dispatch(&mut self, msg: Msg, effects: &mut Vec<Effect>) {
        let state = std::mem::take(&mut self.state);
        let (state, new_effects) = update(state, msg);
        self.state = state;
        effects.extend(new_effects);
    }
}
