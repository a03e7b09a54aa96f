//! The watch session: subscription, input handling, serial rebuilds

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, terminal};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::builder;
use crate::error::{ConveyorError, ConveyorResult};
use crate::models::UnitAddress;
use crate::ui::context::UiContext;
use crate::ui::live_region::LiveRegion;
use crate::ui::views;
use crate::ui::widgets::spinner::Spinner;

use super::event::{WatchEvent, WatchOptions, POLL_INTERVAL_MS};

/// One dispatched unit of work for the session loop
#[derive(Debug)]
pub enum SessionEvent {
    /// Paths delivered by a single filesystem notification
    Changed(Vec<PathBuf>),
    /// Quit keystroke or interrupt signal
    Quit,
    /// Nothing arrived within the poll interval
    Tick,
}

/// Map a keystroke to a session event. Only `q` and Ctrl+C quit.
pub fn key_to_event(key: KeyEvent) -> Option<SessionEvent> {
    match key.code {
        KeyCode::Char('q') => Some(SessionEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(SessionEvent::Quit)
        }
        _ => None,
    }
}

/// Where a changed path leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeRoute {
    /// Hidden entry somewhere in the path, dropped without output
    Ignore,
    /// Exactly namespace/filename below the source root
    Unit(UnitAddress),
    /// Any other shape: reported and skipped
    Unexpected,
}

/// Classify a source-root-relative path.
pub fn route_change(relative: &Path) -> ChangeRoute {
    let hidden = relative.components().any(|component| {
        component
            .as_os_str()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
    });
    if hidden {
        return ChangeRoute::Ignore;
    }

    match UnitAddress::from_relative(relative) {
        Some(unit) => ChangeRoute::Unit(unit),
        None => ChangeRoute::Unexpected,
    }
}

/// A running watch session.
///
/// Lifecycle: validate the source root and subscribe on construction,
/// then `run` drives the event loop until a quit keystroke or an
/// interrupt, tearing the terminal down on every exit path.
pub struct WatchSession {
    options: WatchOptions,
    ui: UiContext,
    interrupted: Arc<AtomicBool>,
    fs_events: Receiver<Vec<PathBuf>>,
    // Dropping the watcher ends event delivery, so it lives here even
    // though nothing reads it after construction.
    _watcher: RecommendedWatcher,
    canonical_source: PathBuf,
    raw_mode: bool,
    started: bool,
    busy: LiveRegion,
    spinner: Spinner,
}

impl WatchSession {
    /// Validate the source root and start the filesystem subscription.
    ///
    /// The interrupt flag is owned by the caller so signal handling
    /// stays a process-level concern.
    pub fn new(
        options: WatchOptions,
        ui: UiContext,
        interrupted: Arc<AtomicBool>,
    ) -> ConveyorResult<Self> {
        if !options.source.is_dir() {
            return Err(ConveyorError::SourceRootNotFound {
                path: options.source.clone(),
            });
        }

        let canonical_source = options
            .source
            .canonicalize()
            .unwrap_or_else(|_| options.source.clone());

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<notify::Event, notify::Error>| {
                if let Ok(event) = res {
                    // Editors save as either an in-place modify or a
                    // create-and-rename; both count as a change.
                    if matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
                        let _ = tx.send(event.paths);
                    }
                }
            },
            notify::Config::default(),
        )
        .map_err(|e| ConveyorError::Io(io::Error::other(e.to_string())))?;

        watcher
            .watch(&options.source, RecursiveMode::Recursive)
            .map_err(|e| ConveyorError::Io(io::Error::other(e.to_string())))?;

        Ok(Self {
            options,
            ui,
            interrupted,
            fs_events: rx,
            _watcher: watcher,
            canonical_source,
            raw_mode: false,
            started: false,
            busy: LiveRegion::new(),
            spinner: Spinner::new("Waiting for changes"),
        })
    }

    /// Run the session to completion. Returns the process exit code;
    /// a clean quit is 0 regardless of how many rebuilds failed.
    pub fn run(&mut self) -> ConveyorResult<i32> {
        let outcome = self.startup().and_then(|_| self.event_loop());
        let teardown = self.teardown();
        outcome?;
        teardown?;
        Ok(0)
    }

    fn startup(&mut self) -> ConveyorResult<()> {
        let source = self.options.source.display().to_string();

        if self.options.json {
            self.emit(WatchEvent::WatchStarted { source })?;
            self.started = true;
            return Ok(());
        }

        let header = views::watch::render_watch_header(
            &self.options.source,
            &self.options.output,
            self.ui.color,
            self.ui.unicode,
        );
        print!("{header}");
        io::stdout().flush()?;

        self.emit(WatchEvent::WatchStarted { source })?;

        if self.ui.caps.is_tty {
            terminal::enable_raw_mode()?;
            execute!(io::stdout(), cursor::Hide)?;
            self.raw_mode = true;
            self.print_line(&views::watch::render_keys_hint(self.ui.color), false)?;
        } else {
            self.print_line(
                &views::watch::render_no_tty_warning(self.ui.color, self.ui.unicode),
                false,
            )?;
        }

        self.started = true;
        Ok(())
    }

    fn event_loop(&mut self) -> ConveyorResult<()> {
        loop {
            match self.next_event()? {
                SessionEvent::Quit => return Ok(()),
                SessionEvent::Changed(paths) => self.handle_changes(paths)?,
                SessionEvent::Tick => self.handle_tick()?,
            }
        }
    }

    /// Keystrokes and the interrupt flag are checked before filesystem
    /// events so quit stays responsive under a stream of changes.
    fn next_event(&mut self) -> ConveyorResult<SessionEvent> {
        if self.interrupted.load(Ordering::SeqCst) {
            return Ok(SessionEvent::Quit);
        }

        if self.raw_mode && event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(session_event) = key_to_event(key) {
                        return Ok(session_event);
                    }
                }
            }
        }

        match self
            .fs_events
            .recv_timeout(Duration::from_millis(POLL_INTERVAL_MS))
        {
            Ok(paths) => Ok(SessionEvent::Changed(paths)),
            Err(RecvTimeoutError::Timeout) => Ok(SessionEvent::Tick),
            Err(RecvTimeoutError::Disconnected) => Ok(SessionEvent::Quit),
        }
    }

    /// Route and rebuild every path of one notification, in order.
    /// Each delivered change triggers its own rebuild; rapid repeated
    /// saves are not coalesced.
    fn handle_changes(&mut self, paths: Vec<PathBuf>) -> ConveyorResult<()> {
        for path in paths {
            let Some(relative) = self.relative_to_source(&path) else {
                continue;
            };

            match route_change(&relative) {
                ChangeRoute::Ignore => {}
                ChangeRoute::Unexpected => {
                    self.emit(WatchEvent::FileChanged {
                        path: relative.display().to_string(),
                    })?;
                    self.emit(WatchEvent::Skipped {
                        path: relative.display().to_string(),
                        reason: "unexpected path".to_string(),
                    })?;
                }
                ChangeRoute::Unit(unit) => {
                    self.emit(WatchEvent::FileChanged {
                        path: relative.display().to_string(),
                    })?;
                    self.rebuild(unit)?;
                }
            }
        }
        Ok(())
    }

    fn rebuild(&mut self, unit: UnitAddress) -> ConveyorResult<()> {
        self.show_busy(&format!("Building {}", unit))?;
        let outcome = builder::build_unit(&self.options.source, &self.options.output, &unit);

        match outcome {
            Ok(Some(built)) => {
                self.emit(WatchEvent::UnitBuilt {
                    unit: built.unit.to_string(),
                    artifacts: 2,
                })?;
            }
            Ok(None) => {
                // Terminals get the same Done! as a real build; JSON
                // consumers get the real outcome.
                if self.options.json {
                    self.emit(WatchEvent::Skipped {
                        path: unit.to_string(),
                        reason: "no buildable suffix".to_string(),
                    })?;
                } else {
                    self.emit(WatchEvent::UnitBuilt {
                        unit: unit.to_string(),
                        artifacts: 0,
                    })?;
                }
            }
            Err(err) => {
                self.emit(WatchEvent::BuildFailed {
                    unit: err.unit.to_string(),
                    message: err.cause.to_string(),
                })?;
            }
        }

        self.spinner.set_message("Waiting for changes");
        Ok(())
    }

    fn handle_tick(&mut self) -> ConveyorResult<()> {
        if self.ui.animation && !self.options.json {
            self.spinner.tick();
            let line = self.spinner.render(self.ui.unicode);
            self.busy.update(&mut io::stdout(), &line)?;
        }
        Ok(())
    }

    fn show_busy(&mut self, message: &str) -> ConveyorResult<()> {
        self.spinner.set_message(message);
        if self.ui.animation && !self.options.json {
            self.spinner.tick();
            let line = self.spinner.render(self.ui.unicode);
            self.busy.update(&mut io::stdout(), &line)?;
        }
        Ok(())
    }

    fn relative_to_source(&self, path: &Path) -> Option<PathBuf> {
        path.strip_prefix(&self.options.source)
            .or_else(|_| path.strip_prefix(&self.canonical_source))
            .ok()
            .map(Path::to_path_buf)
    }

    fn emit(&mut self, event: WatchEvent) -> ConveyorResult<()> {
        if self.options.json {
            println!("{}", event.to_json());
            return Ok(());
        }

        let timestamp = Local::now().format("%H:%M:%S").to_string();
        let rendered =
            views::watch::render_watch_event(&timestamp, &event, self.ui.color, self.ui.unicode);

        let to_stderr = matches!(event, WatchEvent::BuildFailed { .. });
        self.print_line(&rendered, to_stderr)
    }

    /// Print a permanent line above the live region. Raw mode needs
    /// explicit carriage returns.
    fn print_line(&mut self, rendered: &str, to_stderr: bool) -> ConveyorResult<()> {
        self.busy.clear(&mut io::stdout())?;
        io::stdout().flush()?;

        let text = if self.raw_mode {
            rendered.replace('\n', "\r\n")
        } else {
            rendered.to_string()
        };

        if to_stderr {
            eprint!("{text}");
            io::stderr().flush()?;
        } else {
            print!("{text}");
            io::stdout().flush()?;
        }
        Ok(())
    }

    fn teardown(&mut self) -> ConveyorResult<()> {
        if self.raw_mode {
            let mut out = io::stdout();
            self.busy.clear(&mut out)?;
            execute!(out, cursor::Show)?;
            terminal::disable_raw_mode()?;
            self.raw_mode = false;
        }

        if self.started {
            self.emit(WatchEvent::Shutdown)?;
        }
        Ok(())
    }
}
