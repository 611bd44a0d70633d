use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use reader_core::{update, AppState, Msg, ReaderRoute};
use reader_engine::{ApiRoutes, EngineHandle, LogPageViewReporter, ReqwestEpisodeSource};
use reader_logging::{reader_info, reader_warn};

use super::config::Args;
use super::effects::EffectRunner;
use super::persistence::StateStore;
use super::ui::input::{parse_command, Input};
use super::{logging, ui};

pub fn run_app() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::initialize(args.log, &args.state_dir);

    let routes = args.api_routes();
    reader_info!("Using API at {}", routes.api_base());
    let source = ReqwestEpisodeSource::new(routes.clone(), args.fetch_settings())
        .context("building http client")?;
    let engine = EngineHandle::new(Arc::new(source)).context("starting engine runtime")?;
    let store = StateStore::open(&args.state_dir);
    let remembered = store.remembered().clone();
    let effects = EffectRunner::new(engine, Box::new(LogPageViewReporter), store);

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(parse_command(&line)).is_err() {
                return;
            }
        }
        let _ = input_tx.send(Input::Quit);
    });

    let mut app = ReaderApp::new(routes, effects);
    app.dispatch(Msg::RestoreSettings(remembered.settings));

    let start = args.location.or(remembered.last_location);
    match start.as_deref().map(|raw| (raw, ReaderRoute::parse(raw))) {
        Some((_, Some(route))) => app.dispatch(Msg::Open(route)),
        Some((raw, None)) => {
            reader_warn!("Ignoring invalid start location {}", raw);
            app.print(&[format!("Not a reader location: {raw}")]);
            app.render();
        }
        None => app.render(),
    }
    app.print(ui::HELP);

    loop {
        while let Some(msg) = app.effects.poll_engine() {
            app.dispatch(msg);
        }
        match input_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(Input::Reader(msg)) => app.dispatch(msg),
            Ok(Input::Open(raw)) => match ReaderRoute::parse(&raw) {
                Some(route) => app.dispatch(Msg::Open(route)),
                None => app.print(&[format!("Not a reader location: {raw}")]),
            },
            Ok(Input::Help) => app.print(ui::HELP),
            Ok(Input::Quit) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }
    }

    app.dispatch(Msg::Close);
    reader_info!("Reader closed");
    Ok(())
}

struct ReaderApp {
    state: AppState,
    routes: ApiRoutes,
    effects: EffectRunner,
}

impl ReaderApp {
    fn new(routes: ApiRoutes, effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            routes,
            effects,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.effects.run(effects);
        if was_dirty {
            self.render();
        }
    }

    fn render(&self) {
        let lines = ui::render::render(&self.state.view(), &self.routes, self.effects.location());
        self.print(&lines);
    }

    fn print<S: AsRef<str>>(&self, lines: &[S]) {
        let mut out = io::stdout().lock();
        for line in lines {
            let _ = writeln!(out, "{}", line.as_ref());
        }
        let _ = out.flush();
    }
}
