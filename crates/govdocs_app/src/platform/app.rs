use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use govdocs_client::ClientHandle;
use govdocs_core::{update, AppState, Msg};
use govdocs_logging::{govdocs_info, govdocs_warn};

use super::config::{self, Args};
use super::effects::{EffectRunner, MsgSink};
use super::ui::input::{parse_line, InputAction};
use super::ui::render;

/// Everything the main loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Core(Msg),
    Line(String),
    InputClosed,
}

pub fn run_app(args: Args) -> anyhow::Result<()> {
    govdocs_logging::initialize(args.log.into(), args.log_level());

    let file_config = config::load_file_config(&args.config);
    let config = config::resolve(&args, file_config)?;
    govdocs_info!(
        "Starting against {} (mode={})",
        config.client.base_url,
        config.retrieval_mode
    );

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let client = ClientHandle::connect(config.client, Arc::new(MsgSink::new(event_tx.clone())))
        .context("failed to start the service client")?;
    let runner = EffectRunner::new(client);

    spawn_stdin_reader(event_tx)?;

    let mut app = MainLoop {
        state: AppState::with_retrieval_mode(config.retrieval_mode),
        runner,
    };

    print_block(&render::render_status(&app.state.view(), &timestamp()));
    print_block("Type `help` for commands.");
    app.dispatch(Msg::Started);
    prompt();

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Core(msg) => {
                if app.dispatch(msg) {
                    prompt();
                }
            }
            AppEvent::Line(line) => {
                if !app.handle_line(&line) {
                    break;
                }
                prompt();
            }
            AppEvent::InputClosed => break,
        }
    }

    govdocs_info!("Exiting");
    Ok(())
}

struct MainLoop {
    state: AppState,
    runner: EffectRunner,
}

impl MainLoop {
    /// Runs messages through the reducer and redraws once if the state
    /// changed. Returns whether anything was printed.
    fn dispatch_all(&mut self, msgs: Vec<Msg>) -> bool {
        let mut state = std::mem::take(&mut self.state);
        for msg in msgs {
            let (next, effects) = update(state, msg);
            self.runner.enqueue(effects);
            state = next;
        }
        let was_dirty = state.consume_dirty();
        self.state = state;
        if was_dirty {
            print_block(&render::render_status(&self.state.view(), &timestamp()));
        }
        was_dirty
    }

    fn dispatch(&mut self, msg: Msg) -> bool {
        self.dispatch_all(vec![msg])
    }

    /// Returns false when the user asked to quit.
    fn handle_line(&mut self, line: &str) -> bool {
        let awaiting = self.state.view().awaiting_clear_confirmation;
        match parse_line(line, awaiting) {
            InputAction::Dispatch(msgs) => {
                if !self.dispatch_all(msgs) {
                    print_block("(nothing changed)");
                }
            }
            InputAction::Help => print_block(render::HELP),
            InputAction::ListSources => print_block(&render::render_sources()),
            InputAction::ShowDocuments => {
                print_block(&render::render_documents(&self.state.view()))
            }
            InputAction::Status => {
                print_block(&render::render_status(&self.state.view(), &timestamp()))
            }
            InputAction::Invalid(reason) => print_block(&reason),
            InputAction::Empty => {}
            InputAction::Quit => return false,
        }
        true
    }
}

fn spawn_stdin_reader(tx: mpsc::Sender<AppEvent>) -> anyhow::Result<()> {
    thread::Builder::new()
        .name("govdocs-stdin".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(AppEvent::Line(line)).is_err() {
                            return;
                        }
                    }
                    Err(err) => {
                        govdocs_warn!("Failed to read stdin: {}", err);
                        break;
                    }
                }
            }
            let _ = tx.send(AppEvent::InputClosed);
        })
        .context("failed to spawn stdin reader")?;
    Ok(())
}

fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

fn print_block(text: &str) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{}", text.trim_end());
    let _ = out.flush();
}

fn prompt() {
    let mut out = io::stdout().lock();
    let _ = write!(out, "govdocs> ");
    let _ = out.flush();
}
