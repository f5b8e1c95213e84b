use std::io::{BufRead, BufReader, Read, Write};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use postwin::cli::{CliArgs, StartupConfig};
use postwin::config::PostConfig;
use postwin::config_watcher::ConfigWatcher;
use postwin::keymap::{load_default_keymap, load_keymap_file, merge_bindings, Command as Action};
use postwin::model::PostWindow;
use postwin::runtime::{Runtime, SystemHost};

/// How long the loop waits for output before checking the child and watcher
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    postwin::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow!(e))?;

    let config_path = startup
        .config_path
        .clone()
        .or_else(postwin::config_paths::config_file);
    let mut config = config_path
        .as_deref()
        .map(PostConfig::load_from)
        .unwrap_or_default();
    startup.apply_overrides(&mut config);

    let mut runtime = build_runtime(&startup, config, config_path.clone())?;
    let watcher = start_watcher(&startup, config_path);

    let mut child = spawn_interpreter(&startup)?;
    let (line_tx, line_rx) = mpsc::channel();
    let readers = spawn_readers(&mut child, line_tx)?;

    let status = run_loop(
        &mut runtime,
        &mut child,
        &line_rx,
        watcher.as_ref(),
        &startup,
    )?;

    for reader in readers {
        let _ = reader.join();
    }
    tracing::info!(
        "{} exited with {}; {} lines kept",
        startup.program,
        status,
        runtime.model().document.line_count()
    );

    std::process::exit(status.code().unwrap_or(1));
}

fn build_runtime(
    startup: &StartupConfig,
    config: PostConfig,
    config_path: Option<PathBuf>,
) -> Result<Runtime<SystemHost>> {
    let mut bindings = load_default_keymap();
    if let Some(path) = &startup.keymap_path {
        let user = load_keymap_file(path)
            .with_context(|| format!("loading keymap {}", path.display()))?;
        bindings = merge_bindings(bindings, user);
    }

    let host = SystemHost::new(config_path, &config);
    let mut model = PostWindow::new(config, bindings);
    if !startup.auto_scroll {
        model.actions.set_checked(Action::AutoScroll, false);
    }

    Ok(Runtime::new(model, host))
}

fn start_watcher(startup: &StartupConfig, config_path: Option<PathBuf>) -> Option<ConfigWatcher> {
    if !startup.watch_config {
        return None;
    }
    let path = config_path?;
    match ConfigWatcher::new(path) {
        Ok(watcher) => Some(watcher),
        Err(e) => {
            tracing::warn!("Config changes will not be picked up: {}", e);
            None
        }
    }
}

fn spawn_interpreter(startup: &StartupConfig) -> Result<Child> {
    tracing::info!("Starting {} {:?}", startup.program, startup.args);
    Command::new(&startup.program)
        .args(&startup.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("starting {}", startup.program))
}

/// Forward the child's stdout and stderr line by line
fn spawn_readers(child: &mut Child, tx: Sender<String>) -> Result<Vec<JoinHandle<()>>> {
    let stdout = child.stdout.take().context("child stdout not captured")?;
    let stderr = child.stderr.take().context("child stderr not captured")?;

    Ok(vec![
        spawn_reader("stdout", stdout, tx.clone()),
        spawn_reader("stderr", stderr, tx),
    ])
}

fn spawn_reader<R: Read + Send + 'static>(
    name: &'static str,
    stream: R,
    tx: Sender<String>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        loop {
            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {
                    if tx.send(line.clone()).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("Reading interpreter {} failed: {}", name, e);
                    break;
                }
            }
        }
        tracing::debug!("Interpreter {} closed", name);
    })
}

fn run_loop(
    runtime: &mut Runtime<SystemHost>,
    child: &mut Child,
    lines: &Receiver<String>,
    watcher: Option<&ConfigWatcher>,
    startup: &StartupConfig,
) -> Result<std::process::ExitStatus> {
    let stdout = std::io::stdout();
    let mut streams_open = true;

    loop {
        if streams_open {
            match lines.recv_timeout(POLL_INTERVAL) {
                Ok(text) => {
                    echo(&mut stdout.lock(), &text)?;
                    runtime.post(text);
                    while let Ok(text) = lines.try_recv() {
                        echo(&mut stdout.lock(), &text)?;
                        runtime.post(text);
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => streams_open = false,
            }
        } else {
            std::thread::sleep(POLL_INTERVAL);
        }

        if let Some(config) = watcher.and_then(ConfigWatcher::poll) {
            runtime.dispatch(startup.settings_msg(config));
        }

        runtime.turn();

        if !streams_open {
            if let Some(status) = child.try_wait().context("waiting for interpreter")? {
                // Settle the last deferred scroll
                runtime.turn();
                return Ok(status);
            }
        }
    }
}

fn echo(out: &mut impl Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
