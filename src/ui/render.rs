use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use super::view::{Tone, View, ViewLine};

/// Per-position option colours on the rating screen.
pub const OPTION_COLORS: [Color; 3] = [Color::LightGreen, Color::LightBlue, Color::LightYellow];

const HEADING_TOP: u16 = 2;
const OPTION_TOP: u16 = 7;
const OPTION_HEIGHT: u16 = 5;
const OPTION_GAP: u16 = 2;
const CAPTURE_TOP_RATIO: u16 = 3; // heading sits at a third of the height

pub fn tone_style(tone: Tone) -> Style {
    let color = match tone {
        Tone::Normal => Color::White,
        Tone::Input => Color::Yellow,
        Tone::Confirm => Color::Green,
        Tone::Option(i) => OPTION_COLORS[i % OPTION_COLORS.len()],
    };
    Style::default().fg(color)
}

/// Configured viewport centred in `area`, never larger than it.
pub fn viewport(area: Rect, size: (u16, u16)) -> Rect {
    let width = size.0.min(area.width);
    let height = size.1.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn draw(frame: &mut Frame, view: &View, size: (u16, u16)) {
    let full = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(Color::Black)), full);

    let area = viewport(full, size);
    let lines = view.lines();

    match view {
        View::Rating { .. } => draw_rating(frame, area, &lines),
        View::Capture { .. } => draw_capture(frame, area, &lines),
        _ => {
            for line in &lines {
                draw_centered(frame, area, line);
            }
        }
    }
}

fn paragraph(line: &ViewLine) -> Paragraph<'_> {
    Paragraph::new(Text::raw(line.text.as_str()))
        .style(tone_style(line.tone))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
}

fn draw_centered(frame: &mut Frame, area: Rect, line: &ViewLine) {
    let height = (wrapped_rows(&line.text, area.width) + 1).min(area.height);
    let rect = Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    };
    frame.render_widget(paragraph(line), rect);
}

fn draw_capture(frame: &mut Frame, area: Rect, lines: &[ViewLine]) {
    let top = area.y + area.height / CAPTURE_TOP_RATIO;
    if let Some((heading, rest)) = lines.split_first() {
        frame.render_widget(paragraph(heading), clamp(area, top, 2));
        for line in rest {
            frame.render_widget(paragraph(line), clamp(area, top + 3, area.height));
        }
    }
}

fn draw_rating(frame: &mut Frame, area: Rect, lines: &[ViewLine]) {
    if let Some((heading, options)) = lines.split_first() {
        frame.render_widget(paragraph(heading), clamp(area, area.y + HEADING_TOP, 2));
        for (i, line) in options.iter().enumerate() {
            let top = area.y + OPTION_TOP + i as u16 * (OPTION_HEIGHT + OPTION_GAP);
            frame.render_widget(paragraph(line), clamp(area, top, OPTION_HEIGHT));
        }
    }
}

/// Rough row count of `text` wrapped at `width` columns.
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    text.lines()
        .map(|l| l.chars().count().div_ceil(width).max(1))
        .sum::<usize>()
        .min(usize::from(u16::MAX)) as u16
}

/// Row band starting at `top`, cut to what is left of `area`.
fn clamp(area: Rect, top: u16, height: u16) -> Rect {
    let bottom = area.y + area.height;
    let top = top.min(bottom);
    Rect {
        y: top,
        height: height.min(bottom - top),
        ..area
    }
}
