use std::io;

use crossterm::{
    event::{Event, EventStream, KeyEvent, KeyEventKind},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use futures::{Stream, StreamExt};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::config::{Config, KeyCombo, KeyContext};
use crate::ui::action::Action;
use crate::ui::components::{
    BarChart, ControlBar, GlobalFooter, HelpDialog, StatusBar, TEXT_FAINT, TEXT_SECONDARY,
};
use crate::ui::events::{AppEvent, InputMode};
use crate::ui::terminal_guard::TerminalGuard;
use crate::visualizer::{PlaybackTick, Visualizer};

/// Main application state
pub struct App {
    /// Application configuration
    config: Config,
    /// Whether the app should quit
    should_quit: bool,
    /// Current input mode
    input_mode: InputMode,
    /// Array, recording and playback
    visualizer: Visualizer,
    /// Ticks from the playback timer
    tick_rx: mpsc::UnboundedReceiver<PlaybackTick>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let visualizer = Visualizer::new(config.visualizer, tick_tx);

        Self {
            config,
            should_quit: false,
            input_mode: InputMode::Normal,
            visualizer,
            tick_rx,
        }
    }

    pub fn visualizer(&self) -> &Visualizer {
        &self.visualizer
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut guard = TerminalGuard::new();
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Clear screen
        terminal.clear()?;

        // Main event loop
        let result = self.event_loop(&mut terminal).await;

        // No ticks may outlive the view
        self.visualizer.shutdown();

        guard.cleanup()?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut input = EventStream::new();
        self.drive(&mut input, |app| {
            terminal.draw(|f| app.draw(f))?;
            Ok(())
        })
        .await
    }

    /// Render, then wait for the next input event or playback tick, until quit
    /// or until the input stream ends.
    ///
    /// Input and ticks are separate branches; pending input is always taken
    /// first, so keys stay live however fast the timer ticks.
    pub async fn drive<S, R>(&mut self, input: &mut S, mut render: R) -> anyhow::Result<()>
    where
        S: Stream<Item = io::Result<Event>> + Unpin,
        R: FnMut(&App) -> anyhow::Result<()>,
    {
        loop {
            render(self)?;

            tokio::select! {
                biased;

                // Terminal input events
                maybe_event = input.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_app_event(AppEvent::Input(event)),
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },

                // Playback timer ticks
                Some(tick) = self.tick_rx.recv() => {
                    self.handle_app_event(AppEvent::Playback(tick));
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(Event::Key(key)) => self.handle_key_event(key),
            AppEvent::Input(_) => {}
            AppEvent::Playback(tick) => {
                self.visualizer.on_tick(tick);
            }
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let combo = KeyCombo::from_key_event(&key);
        let context = KeyContext::from_input_mode(self.input_mode);
        if let Some(action) = self.config.keybindings.get_action(&combo, context).cloned() {
            self.dispatch(action);
        }
    }

    /// Apply a single action. Actions that are disabled in the current state do nothing.
    pub fn dispatch(&mut self, action: Action) {
        let applied = match &action {
            Action::Quit => {
                self.should_quit = true;
                true
            }
            Action::ShowHelp => {
                self.input_mode = InputMode::ShowingHelp;
                true
            }
            Action::CloseHelp => {
                self.input_mode = InputMode::Normal;
                true
            }
            Action::NewArray => self.visualizer.new_array(),
            Action::RunSort => self.visualizer.run_sort(),
            Action::GrowArray(n) => self.visualizer.adjust_size(isize::from(*n)),
            Action::ShrinkArray(n) => self.visualizer.adjust_size(-isize::from(*n)),
            Action::Play => self.visualizer.play(),
            Action::Pause => self.visualizer.pause(),
            Action::TogglePlay => self.visualizer.toggle_play(),
            Action::Stop => self.visualizer.stop(),
            Action::StepForward => self.visualizer.step_forward(),
            Action::StepBackward => self.visualizer.step_backward(),
            Action::Faster => self.visualizer.adjust_interval(-1),
            Action::Slower => self.visualizer.adjust_interval(1),
        };

        tracing::debug!(?action, applied, state = ?self.visualizer.state(), "Dispatched action");
    }

    pub fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Controls
                Constraint::Min(3),    // Chart
                Constraint::Length(1), // Status
                Constraint::Length(1), // Footer
            ])
            .split(f.area());

        ControlBar::new(self.visualizer.controls(), &self.config.keybindings)
            .render(chunks[0], f.buffer_mut());

        let block = Block::default()
            .title(" Bubble Sort ")
            .title_style(Style::default().fg(TEXT_SECONDARY))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(TEXT_FAINT));
        let chart_area = block.inner(chunks[1]);
        f.render_widget(block, chunks[1]);
        BarChart::new(self.visualizer.display(), self.config.palette)
            .render(chart_area, f.buffer_mut());

        StatusBar::from_visualizer(&self.visualizer).render(chunks[2], f.buffer_mut());
        GlobalFooter::from_state(
            self.input_mode,
            self.visualizer.state(),
            &self.config.keybindings,
        )
        .render(chunks[3], f.buffer_mut());

        if self.input_mode == InputMode::ShowingHelp {
            HelpDialog::new(&self.config.keybindings).render(f.area(), f.buffer_mut());
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.visualizer.shutdown();
    }
}
