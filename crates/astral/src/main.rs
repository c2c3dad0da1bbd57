use std::time::{Duration, Instant};

use astral_config::Config;
use astral_core::Variant;
use astral_field::{Debouncer, RESIZE_DEBOUNCE, Starfield};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load();
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
struct App {
    /// Is the application running?
    running: bool,
    /// Current scene.
    variant: Variant,
    /// Frame pacing from the configured fps.
    tick_interval: Duration,
    /// Pinned RNG seed, if the config asked for one.
    seed: Option<u64>,
    /// The animator instance.
    field: Starfield,
    /// Debounced resize events.
    debouncer: Debouncer<(u32, u32)>,
}

impl App {
    /// Construct a new instance of [`App`]. The animator starts disabled
    /// and is rebuilt once the terminal size is known.
    fn new(config: Config) -> Self {
        Self {
            running: false,
            variant: config.variant,
            tick_interval: config.tick_interval(),
            seed: config.seed,
            field: Starfield::new(config.variant, 0, 0, 0),
            debouncer: Debouncer::new(RESIZE_DEBOUNCE),
        }
    }

    /// Run the application's main loop.
    fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let size = terminal.size()?;
        self.rebuild(u32::from(size.width), u32::from(size.height) * 2);

        let mut last_tick = Instant::now();
        while self.running {
            let timeout = self.tick_interval.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                    Event::Resize(cols, rows) => {
                        self.debouncer
                            .push((u32::from(cols), u32::from(rows) * 2), Instant::now());
                    }
                    _ => {}
                }
            }
            if last_tick.elapsed() >= self.tick_interval {
                if let Some((w, h)) = self.debouncer.poll(Instant::now()) {
                    self.field.resize(w, h);
                }
                self.field.tick();
                terminal.draw(|frame| self.render(frame))?;
                last_tick = Instant::now();
            }
        }
        Ok(())
    }

    /// Blit the animator surface: each cell carries two vertical pixels
    /// via the upper-half block, fg for the top pixel and bg for the
    /// bottom one.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let surface = self.field.surface();
        let lines: Vec<Line> = (0..area.height)
            .map(|row| {
                let spans: Vec<Span> = (0..area.width)
                    .map(|col| {
                        let x = u32::from(col);
                        let top = surface.pixel(x, u32::from(row) * 2);
                        let bottom = surface.pixel(x, u32::from(row) * 2 + 1);
                        Span::styled(
                            "▀",
                            Style::new().fg(top.as_color()).bg(bottom.as_color()),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('v')) => {
                self.variant = self.variant.toggle();
                self.restart();
            }
            (_, KeyCode::Char('r')) => self.restart(),
            _ => {}
        }
    }

    /// Rebuild the animator at the current surface size (replays the
    /// warp intro for the hero scene).
    fn restart(&mut self) {
        let surface = self.field.surface();
        let (w, h) = (surface.width(), surface.height());
        self.rebuild(w, h);
    }

    fn rebuild(&mut self, width: u32, height: u32) {
        let seed = self.seed.unwrap_or_else(rand::random);
        self.field = Starfield::new(self.variant, width, height, seed);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
