use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use kpidash_core::{Completion, Slot};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar, toasts::Toasts};
use crate::config::DashboardConfig;
use crate::platform::{RequestWorker, not_started};
use crate::screens::{analysis::AnalysisScreen, weights::WeightsScreen};
use crate::state::{AppState, TabId};

/// How long the loop waits for input before polling the worker again
const TICK: Duration = Duration::from_millis(50);

/// Composition root: owns the state, both pages and the request worker.
pub struct App<W> {
    state: AppState,
    worker: W,
    tab_bar: TabBar,
    status_bar: StatusBar,
    toasts: Toasts,
    analysis_screen: AnalysisScreen,
    weights_screen: WeightsScreen,
}

impl<W: RequestWorker> App<W> {
    pub fn new(config: &DashboardConfig, worker: W) -> Self {
        Self {
            state: AppState::new(config),
            worker,
            tab_bar: TabBar,
            status_bar: StatusBar,
            toasts: Toasts,
            analysis_screen: AnalysisScreen::new(),
            weights_screen: WeightsScreen::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn worker(&self) -> &W {
        &self.worker
    }

    pub fn worker_mut(&mut self) -> &mut W {
        &mut self.worker
    }

    /// Issue the requests every session starts with: health check, demo data
    /// for the form and the weights page.
    pub fn start(&mut self) {
        let health = self.state.analysis.check_health();
        self.state.queue(health);
        let demo = self.state.analysis.load_demo_data();
        self.state.queue(demo);
        let weights = self.state.weights.load();
        self.state.queue(weights);
        self.dispatch_pending();
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.start();

        while !self.state.exit {
            self.tick(Instant::now());
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(TICK)? {
                if let Event::Key(key_event) = event::read()? {
                    if key_event.kind == KeyEventKind::Press {
                        self.handle_key_event(key_event);
                    }
                }
            }
        }

        Ok(())
    }

    /// Send queued requests, apply finished ones and expire toasts.
    pub fn tick(&mut self, now: Instant) {
        self.dispatch_pending();
        self.process_completions(now);
        self.state.analysis.expire_notifications(now);
    }

    fn dispatch_pending(&mut self) {
        for ticket in self.state.take_pending() {
            tracing::debug!(slot = ?ticket.token.slot, seq = ticket.token.seq, "Dispatching request");
            if !self.worker.send(ticket.clone()) {
                // Surface the failure through the owning controller
                let completion = not_started(&ticket);
                self.route(completion, Instant::now());
            }
        }
    }

    fn process_completions(&mut self, now: Instant) {
        while let Some(completion) = self.worker.try_recv() {
            self.route(completion, now);
        }
    }

    fn route(&mut self, completion: Completion, now: Instant) {
        match completion.token.slot {
            Slot::Weights => {
                self.state.weights.apply(completion);
            }
            Slot::Health | Slot::DemoData | Slot::Analysis | Slot::Comparison => {
                self.state.analysis.apply(completion, now);
            }
        }
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
        self.toasts.render(frame, chunks[1], &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Analysis => self.analysis_screen.render(frame, area, &self.state),
            TabId::Weights => self.weights_screen.render(frame, area, &self.state),
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.exit = true;
            return;
        }

        // Field editing owns every other key
        if self.state.editing {
            self.analysis_screen.handle_key(key_event, &mut self.state);
            return;
        }

        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        let result = self.tab_bar.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        let result = match self.state.active_tab {
            TabId::Analysis => self.analysis_screen.handle_key(key_event, &mut self.state),
            TabId::Weights => self.weights_screen.handle_key(key_event, &mut self.state),
        };
        if result == EventResult::NotHandled {
            tracing::trace!(key = ?key_event.code, "Unbound key");
        }
    }
}
