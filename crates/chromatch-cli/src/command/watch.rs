use std::time::Duration;

use chromatch_engine::{Command, EvolutionEngine, GenerationSummary, MAX_FITNESS};
use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use crate::{
    command::GaArg,
    tui::{App, Tui},
    ui::widgets::{PopulationDisplay, SwatchDisplay},
};

/// Minimum delay between generational transitions during auto-play.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct WatchArg {
    #[clap(flatten)]
    ga: GaArg,
}

pub(crate) fn run(arg: &WatchArg) -> anyhow::Result<()> {
    let engine = arg.ga.build_engine()?;
    let mut app = WatchApp::new(engine);
    Tui::new().run(&mut app)?;
    Ok(())
}

/// Interactive evolution viewer.
///
/// Forwards key events to the engine in arrival order and renders the
/// population as a grid of colour swatches below the current goal.
#[derive(Debug)]
struct WatchApp {
    engine: EvolutionEngine,
    last_summary: Option<GenerationSummary>,
    is_exiting: bool,
}

impl WatchApp {
    fn new(engine: EvolutionEngine) -> Self {
        Self {
            engine,
            last_summary: None,
            is_exiting: false,
        }
    }

    fn apply(&mut self, command: Command) {
        if let Some(summary) = self.engine.apply(command) {
            self.last_summary = Some(summary);
        }
    }

    fn status_line(&self) -> String {
        let play_state = if self.engine.is_playing() {
            "Playing"
        } else {
            "Paused"
        };
        match &self.last_summary {
            Some(summary) => format!(
                "Generation {} | Best {} (fitness {}/{MAX_FITNESS}) | {play_state}",
                self.engine.generation(),
                summary.best,
                summary.best_fitness,
            ),
            None => format!("Generation {} | {play_state}", self.engine.generation()),
        }
    }
}

impl App for WatchApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_interval(Some(TICK_INTERVAL));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Right => self.apply(Command::Advance),
                KeyCode::Char('n') => self.apply(Command::Retarget),
                KeyCode::Char(' ') => self.apply(Command::TogglePlay),
                KeyCode::Char('q') => self.is_exiting = true,
                _ => {}
            }
        }
    }

    fn update(&mut self, _tui: &mut Tui) {
        if let Some(summary) = self.engine.tick() {
            self.last_summary = Some(summary);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let [goal_area, grid_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas::<4>(frame.area());

        let [label_area, swatch_area, _] = Layout::horizontal([
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .areas::<3>(goal_area);

        let goal_label = Text::from("Current goal:")
            .style(Style::default().fg(Color::Gray))
            .right_aligned();
        frame.render_widget(goal_label, label_area);
        frame.render_widget(SwatchDisplay::new(self.engine.target()), swatch_area);

        frame.render_widget(PopulationDisplay::new(self.engine.population()), grid_area);

        let status = Text::from(self.status_line())
            .style(Style::default().fg(Color::Gray))
            .centered();
        frame.render_widget(status, status_area);

        let help = Text::from("Controls: → (Step) | N (New Target) | Space (Play/Pause) | Q (Quit)")
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(help, help_area);
    }
}
