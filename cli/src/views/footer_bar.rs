use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use footer::NowPlaying;

const BAR_HEIGHT: u16 = 5;

/// Draw the playback bar along the bottom of the frame
pub fn draw(frame: &mut Frame, now_playing: &NowPlaying) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(BAR_HEIGHT)])
        .split(frame.area());
    let bar = chunks[1];

    let block = Block::default()
        .borders(Borders::TOP)
        .title(" Now Playing ");
    let inner = block.inner(bar);
    frame.render_widget(block, bar);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(inner);

    frame.render_widget(track_info(now_playing), columns[0]);
    frame.render_widget(transport(now_playing), columns[1]);
    frame.render_widget(volume_gauge(now_playing), centered_row(columns[2]));
}

fn track_info(now_playing: &NowPlaying) -> Paragraph<'static> {
    let title_style = if now_playing.has_track {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Paragraph::new(Text::from(vec![
        Line::from(Span::styled(now_playing.title.clone(), title_style)),
        Line::from(now_playing.artists.clone()),
    ]))
}

fn transport(now_playing: &NowPlaying) -> Paragraph<'static> {
    Paragraph::new(transport_line(now_playing.playing)).alignment(Alignment::Center)
}

/// Shuffle, previous, play/pause, next, repeat
pub fn transport_line(playing: bool) -> String {
    let play_pause = if playing { "||" } else { ">" };
    format!("~  |<  {}  >|  @", play_pause)
}

fn volume_gauge(now_playing: &NowPlaying) -> Gauge<'static> {
    Gauge::default()
        .gauge_style(Style::default().fg(Color::Green))
        .label(format!("vol {}", now_playing.volume))
        .percent(u16::from(now_playing.volume.percent()))
}

fn centered_row(area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1)])
        .split(area)[0]
}
