use std::future::Future;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::DefaultTerminal;
use tokio::runtime::Handle;

use footer::{Footer, StreamingClient};

use crate::views::footer_bar;

const TICK: Duration = Duration::from_millis(100);
pub const VOLUME_STEP: i16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterCommand {
    TogglePlayPause,
    SkipNext,
    SkipPrevious,
    VolumeUp,
    VolumeDown,
    Quit,
}

pub fn command_for(key_event: KeyEvent) -> Option<FooterCommand> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    match key_event.code {
        KeyCode::Char(' ') => Some(FooterCommand::TogglePlayPause),
        KeyCode::Char('n') | KeyCode::Right => Some(FooterCommand::SkipNext),
        KeyCode::Char('p') | KeyCode::Left => Some(FooterCommand::SkipPrevious),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => Some(FooterCommand::VolumeUp),
        KeyCode::Char('-') | KeyCode::Down => Some(FooterCommand::VolumeDown),
        KeyCode::Char('q') | KeyCode::Esc => Some(FooterCommand::Quit),
        _ => None,
    }
}

pub struct App<C: StreamingClient + 'static> {
    footer: Arc<Footer<C>>,
    runtime: Handle,
    exit: bool,
}

impl<C: StreamingClient + 'static> App<C> {
    pub fn new(footer: Arc<Footer<C>>, runtime: Handle) -> Self {
        Self {
            footer,
            runtime,
            exit: false,
        }
    }

    /// Load the current playback status in the background
    pub fn mount(&self) {
        self.spawn(|footer| async move { footer.initialize().await });
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        while !self.exit {
            let now_playing = self.footer.now_playing();
            terminal.draw(|frame| footer_bar::draw(frame, &now_playing))?;

            if event::poll(TICK)? {
                if let Event::Key(key_event) = event::read()? {
                    self.handle_key(key_event);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if let Some(command) = command_for(key_event) {
            log::debug!("Key {:?} mapped to {:?}", key_event.code, command);
            self.execute(command);
        }
    }

    pub fn execute(&mut self, command: FooterCommand) {
        match command {
            FooterCommand::TogglePlayPause => {
                self.spawn(|footer| async move { footer.toggle_play_pause().await })
            }
            FooterCommand::SkipNext => self.spawn(|footer| async move { footer.skip_next().await }),
            FooterCommand::SkipPrevious => {
                self.spawn(|footer| async move { footer.skip_previous().await })
            }
            FooterCommand::VolumeUp => self.nudge_volume(VOLUME_STEP),
            FooterCommand::VolumeDown => self.nudge_volume(-VOLUME_STEP),
            FooterCommand::Quit => self.exit = true,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    fn nudge_volume(&self, delta: i16) {
        let level = self.footer.volume().step(delta);
        self.footer.on_slider_change(f64::from(level.percent()));
    }

    // Errors are already logged by the footer and never shown to the user.
    fn spawn<F, Fut>(&self, operation: F)
    where
        F: FnOnce(Arc<Footer<C>>) -> Fut,
        Fut: Future<Output = footer::Result<()>> + Send + 'static,
    {
        let operation = operation(Arc::clone(&self.footer));
        self.runtime.spawn(async move {
            let _ = operation.await;
        });
    }
}
