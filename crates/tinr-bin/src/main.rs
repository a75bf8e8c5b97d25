//! TINR entrypoint.
use anyhow::Result;
use clap::Parser;
use core_actions::dispatcher::command::open_into;
use core_actions::{CommandOutcome, FrameOutcome, step};
use core_config::{Config, load_from};
use core_input::TerminalInput;
use core_render::{FrameContext, RenderEngine};
use core_state::EditorState;
use core_terminal::{CrosstermBackend, TerminalBackend};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE_NAME: &str = "tinr.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "tinr", version, about = "TINR - TIN Reborn")]
struct Args {
    /// Optional file to open at startup. If omitted the editor starts empty.
    pub path: Option<PathBuf>,
    /// Optional configuration file path (overrides discovery of `tinr.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE_NAME);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }

    /// Run the editor until a quit command. The terminal is restored before
    /// this returns, on success and on error alike.
    fn run(&mut self, args: Args) -> Result<()> {
        let config = load_from(args.config.clone())?;
        let mut state = bootstrap_state(&config, args.path.as_deref());
        info!(
            target: "runtime.startup",
            path = args.path.as_ref().map(|p| p.display().to_string()).as_deref(),
            config = config.source.as_ref().map(|p| p.display().to_string()).as_deref(),
            "bootstrap_complete"
        );

        let mut guard = self.backend.enter_guard()?;
        guard.backend().set_title(&config.file.ui.title)?;
        let mut runtime = EditorRuntime {
            config: &config,
            engine: RenderEngine::new(),
            input: TerminalInput::new(),
        };
        let result = runtime.run(guard.backend(), &mut state);
        guard.release()?;
        info!(target: "runtime.shutdown", frames = runtime.engine.frames(), "shutdown");
        result
    }
}

/// Initial state: the startup tip, or the file given on the command line.
fn bootstrap_state(config: &Config, path: Option<&Path>) -> EditorState {
    let mut state = EditorState::new(config.file.ui.tip.clone());
    if let Some(path) = path {
        if open_into(&mut state, path) == CommandOutcome::Aborted {
            error!(target: "runtime.startup", file = %path.display(), "startup_open_failed");
        }
    }
    state
}

struct EditorRuntime<'a> {
    config: &'a Config,
    engine: RenderEngine,
    input: TerminalInput,
}

impl EditorRuntime<'_> {
    fn run(&mut self, backend: &mut CrosstermBackend, state: &mut EditorState) -> Result<()> {
        let limits = self.config.file.input;
        loop {
            state.begin_frame();
            let (columns, rows) = backend.size()?;
            self.engine.render(
                state,
                FrameContext {
                    title: &self.config.file.ui.title,
                    columns,
                    rows,
                },
            )?;
            // Idle frames (scroll keys that changed nothing) read again without a redraw.
            loop {
                match step(state, &mut self.input, &limits)? {
                    FrameOutcome::Redraw => break,
                    FrameOutcome::Idle => continue,
                    FrameOutcome::Quit => return Ok(()),
                }
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    startup.configure_logging()?;
    AppStartup::install_panic_hook();
    info!(target: "runtime", "startup");

    let result = startup.run(args);
    if let Err(e) = &result {
        error!(target: "runtime", error = %e, "fatal");
    }
    result
}
