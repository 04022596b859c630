//! TUI application state and event loop.
//!
//! Design: the event loop owns the simulator and the seat board outright —
//! one logical thread mutates all view state. The only thing that leaves the
//! loop is an insight request: the gateway's blocking call runs on a worker
//! thread so the UI never freezes, and its result lands in a shared slot the
//! loop picks up on the next frame. Quitting drops the loop (and with it all
//! tick scheduling); a still-running worker only ever writes into the shared
//! slot, never into the torn-down view.

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use ratatui::widgets::TableState;

use humanize_core::{
    GatewayConfig, InsightGateway, InsightResult, Metric, SeatBoard, TelemetrySimulator,
};

/// Points of live AQI history kept for the chart.
const MAX_HISTORY: usize = 120;

/// What the keyboard currently drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigating seats and toggling flags.
    #[default]
    Normal,
    /// Typing a question for the AI planner.
    Editing,
}

/// Slot the gateway worker writes into.
#[derive(Default)]
struct SharedState {
    result: Option<InsightResult>,
    sending: bool,
}

pub struct App {
    sim: TelemetrySimulator,
    pub board: SeatBoard,
    gateway: Option<Arc<InsightGateway>>,
    shared: Arc<Mutex<SharedState>>,
    pub cursor: usize,
    pub input: String,
    pub input_mode: InputMode,
    pub table_state: TableState,
    pub aqi_history: VecDeque<u64>,
    /// Last resolved insight, mirrored out of the shared slot for rendering.
    pub last_result: Option<InsightResult>,
    pub sending: bool,
    running: bool,
}

impl App {
    pub fn new() -> Self {
        // A gateway that cannot be constructed (bad TLS setup etc.) leaves the
        // planner panel disabled; the rest of the dashboard still works.
        let gateway = match InsightGateway::from_config(GatewayConfig::from_env()) {
            Ok(g) => Some(Arc::new(g)),
            Err(e) => {
                log::warn!("insight gateway unavailable: {e}");
                None
            }
        };

        let sim = TelemetrySimulator::new();
        let mut aqi_history = VecDeque::with_capacity(MAX_HISTORY);
        aqi_history.push_back(sim.snapshot().air_quality_index as u64);

        Self {
            sim,
            board: SeatBoard::default(),
            gateway,
            shared: Arc::new(Mutex::new(SharedState::default())),
            cursor: 0,
            input: String::new(),
            input_mode: InputMode::default(),
            table_state: TableState::default().with_selected(Some(0)),
            aqi_history,
            last_result: None,
            sending: false,
            running: true,
        }
    }

    pub fn snapshot(&self) -> &humanize_core::MetricSnapshot {
        self.sim.snapshot()
    }

    pub fn planner_enabled(&self) -> bool {
        self.gateway.is_some()
    }

    pub fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Restore the terminal before any panic message is printed.
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
            original_hook(info);
        }));

        let result = self.run_loop(&mut terminal);

        let _ = std::panic::take_hook();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        result
    }

    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        while self.running {
            self.sync_shared();
            terminal.draw(|f| super::ui::draw(f, self))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            let applied = self.sim.tick_due(Instant::now());
            if applied.contains(&Metric::AirQuality) {
                if self.aqi_history.len() == MAX_HISTORY {
                    self.aqi_history.pop_front();
                }
                self.aqi_history
                    .push_back(self.sim.snapshot().air_quality_index as u64);
            }
        }
        Ok(())
    }

    /// Mirror the worker's slot into render state.
    fn sync_shared(&mut self) {
        if let Ok(mut shared) = self.shared.lock() {
            self.sending = shared.sending;
            if let Some(result) = shared.result.take() {
                self.last_result = Some(result);
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Editing => self.handle_editing_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Up | KeyCode::Char('k') => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.table_state.select(Some(self.cursor));
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor < self.board.zones().len().saturating_sub(1) {
                    self.cursor += 1;
                    self.table_state.select(Some(self.cursor));
                }
            }
            KeyCode::Char('f') => {
                if let Some(id) = self.selected_zone_id() {
                    self.board.toggle_fold(&id);
                }
            }
            KeyCode::Char('s') => {
                if let Some(id) = self.selected_zone_id() {
                    self.board.toggle_shade(&id);
                }
            }
            KeyCode::Char('i') | KeyCode::Char('/') => {
                if self.planner_enabled() {
                    self.input_mode = InputMode::Editing;
                }
            }
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => self.submit_insight(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) => self.input.push(c),
            _ => {}
        }
    }

    fn selected_zone_id(&self) -> Option<String> {
        self.board.zones().get(self.cursor).map(|z| z.id.clone())
    }

    /// Hand the current prompt to the gateway on a worker thread. While one
    /// request is in flight further submissions are ignored, matching the
    /// gateway's own reject policy.
    fn submit_insight(&mut self) {
        let Some(gateway) = &self.gateway else { return };
        if self.input.trim().is_empty() || gateway.is_sending() {
            return;
        }

        let prompt = std::mem::take(&mut self.input);
        self.input_mode = InputMode::Normal;

        let gateway = Arc::clone(gateway);
        let shared = Arc::clone(&self.shared);
        let snapshot = self.sim.snapshot().clone();

        if let Ok(mut s) = shared.lock() {
            s.sending = true;
        }
        thread::spawn(move || {
            let result = gateway.request_insight(&prompt, &snapshot);
            if let Ok(mut s) = shared.lock() {
                s.sending = false;
                if result.is_some() {
                    s.result = result;
                }
            }
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
