use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use leadcard_core::{update, AppState, Msg};
use leadcard_engine::DatasetLoader;
use leadcard_logging::{lead_debug, lead_info};

use super::config::AppConfig;
use super::effects::{map_load_event, EffectRunner};
use super::ui::commands::{parse_command, Command};
use super::ui::constants::HELP_TEXT;
use super::{logging, persistence, ui};

enum AppEvent {
    Line(String),
    InputClosed,
    Tick,
}

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    logging::initialize(config.log, config.log_level);
    lead_info!("Starting leadcard with source {}", config.source.describe());

    let mut store = persistence::open_store(&config.store);
    if config.reset {
        persistence::reset_store(store.as_mut());
    }
    let startup = persistence::startup_state(store.as_ref(), &config.location);

    let stdout = io::stdout();
    let mut dashboard = Dashboard::new(EffectRunner::new(store, config.location), stdout.lock());
    dashboard.dispatch(Msg::Restore(startup))?;

    let loader = DatasetLoader::spawn(config.source, config.fetch);

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    spawn_input_reader(event_tx.clone());

    // Background tick so a finished load is picked up without user input.
    thread::spawn(move || {
        let interval = Duration::from_millis(50);
        while event_tx.send(AppEvent::Tick).is_ok() {
            thread::sleep(interval);
        }
    });

    let mut input_closed = false;
    while let Ok(event) = event_rx.recv() {
        if let Some(load_event) = loader.try_recv() {
            dashboard.deliver_dataset(map_load_event(load_event))?;
        }
        match event {
            AppEvent::Tick => {}
            AppEvent::InputClosed => {
                if !dashboard.state.is_hydrated() {
                    lead_info!("Input closed, waiting for the dataset before exiting");
                }
                input_closed = true;
            }
            AppEvent::Line(line) => match parse_command(&line) {
                Command::Dispatch(msgs) => dashboard.submit(msgs)?,
                Command::Redraw => dashboard.render()?,
                Command::Help => dashboard.print(HELP_TEXT)?,
                Command::Quit => break,
                Command::Unknown(text) => {
                    dashboard.print(&format!("Unknown command {text:?}. Type 'h' for help."))?;
                }
            },
        }
        if input_closed && dashboard.state.is_hydrated() {
            break;
        }
    }

    // Dropping the loader cancels a load that is still running.
    drop(loader);
    lead_info!("Leadcard exiting");
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if event_tx.send(AppEvent::Line(line)).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}

/// Owns the state and routes every message through `update`.
struct Dashboard<W: Write> {
    state: AppState,
    effects: EffectRunner,
    /// User messages received before hydration, replayed in order after it.
    pending: Vec<Msg>,
    out: W,
}

impl<W: Write> Dashboard<W> {
    fn new(effects: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(),
            effects,
            pending: Vec::new(),
            out,
        }
    }

    fn dispatch(&mut self, msg: Msg) -> anyhow::Result<()> {
        lead_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.effects.apply(effects);
        if was_dirty {
            self.render()?;
        }
        Ok(())
    }

    fn submit(&mut self, msgs: Vec<Msg>) -> anyhow::Result<()> {
        if !self.state.is_hydrated() {
            self.pending.extend(msgs);
            return self.print("Still loading leads; the command will run once they arrive.");
        }
        for msg in msgs {
            self.dispatch(msg)?;
        }
        Ok(())
    }

    fn deliver_dataset(&mut self, msg: Msg) -> anyhow::Result<()> {
        self.dispatch(msg)?;
        if self.state.is_hydrated() && !self.pending.is_empty() {
            lead_debug!("replaying {} queued message(s)", self.pending.len());
            for msg in std::mem::take(&mut self.pending) {
                self.dispatch(msg)?;
            }
        }
        Ok(())
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let view = self.state.view();
        let lines = ui::render::render(&view, self.effects.location());
        writeln!(self.out)?;
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush().context("failed to write to terminal")
    }

    fn print(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush().context("failed to write to terminal")
    }
}
