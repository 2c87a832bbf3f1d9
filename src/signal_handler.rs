use std::io;
use std::sync::{Arc, Mutex};

/// What the interactive loop is doing when SIGINT arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Blocked at the prompt
    WaitingForInput,
    /// A command is running in one of the directories
    ExecutingCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptAction {
    /// Leave the read loop and exit with status 0
    Quit,
    /// Let the running command finish; the child gets its own SIGINT from the terminal
    Ignore,
}

impl AppState {
    pub fn interrupt_action(self) -> InterruptAction {
        match self {
            AppState::WaitingForInput => InterruptAction::Quit,
            AppState::ExecutingCommand => InterruptAction::Ignore,
        }
    }
}

/// Signal handler for Ctrl+C in interactive mode
pub struct SignalHandler {
    app_state: Arc<Mutex<AppState>>,
    #[cfg(unix)]
    handle: Option<signal_hook::iterator::Handle>,
}

impl SignalHandler {
    /// Start listening for SIGINT on a background thread.
    ///
    /// While waiting for input, an interrupt runs `on_quit` and exits the
    /// process with status 0.
    #[cfg(unix)]
    pub fn start<F>(on_quit: F) -> io::Result<Self>
    where
        F: Fn() + Send + 'static,
    {
        use signal_hook::consts::SIGINT;
        use signal_hook::iterator::Signals;

        let mut signals = Signals::new([SIGINT])?;
        let handle = signals.handle();
        let app_state = Arc::new(Mutex::new(AppState::WaitingForInput));
        let state = Arc::clone(&app_state);

        std::thread::spawn(move || {
            for _ in signals.forever() {
                let current = state
                    .lock()
                    .map(|s| *s)
                    .unwrap_or(AppState::WaitingForInput);

                match current.interrupt_action() {
                    InterruptAction::Quit => {
                        on_quit();
                        std::process::exit(0);
                    }
                    InterruptAction::Ignore => {
                        log::debug!("Interrupt while a command runs, waiting for it to finish");
                    }
                }
            }
        });

        Ok(Self {
            app_state,
            handle: Some(handle),
        })
    }

    /// No SIGINT routing on this platform; Ctrl+C keeps its default behaviour
    #[cfg(not(unix))]
    pub fn start<F>(_on_quit: F) -> io::Result<Self>
    where
        F: Fn() + Send + 'static,
    {
        Ok(Self {
            app_state: Arc::new(Mutex::new(AppState::WaitingForInput)),
        })
    }

    pub fn set_app_state(&self, state: AppState) {
        if let Ok(mut current) = self.app_state.lock() {
            *current = state;
        }
    }

    pub fn app_state(&self) -> AppState {
        self.app_state
            .lock()
            .map(|state| *state)
            .unwrap_or(AppState::WaitingForInput)
    }
}

#[cfg(unix)]
impl Drop for SignalHandler {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.close();
        }
    }
}
