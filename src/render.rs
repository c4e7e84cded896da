use crate::game::grid::PixelRect;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    style::{Color, Style},
    backend::Backend,
    widgets::Widget,
    Terminal,
};

/// How to draw a shape or a piece of text
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Paint {
    pub(crate) color: Color,
}

/// A frame being drawn.  Coordinates are in pixels from the top-left corner.
pub(crate) trait Surface {
    fn draw_background(&mut self, color: Color);
    fn draw_text(&mut self, text: &str, x: u32, y: u32, paint: Paint);
    fn draw_rect(&mut self, rect: PixelRect, paint: Paint);
}

/// Something that frames can be drawn onto
pub(crate) trait RenderSink: Send {
    type Surface: Surface;

    /// Acquire a surface to draw the next frame on, or `None` if there is
    /// nowhere to draw right now
    fn begin_frame(&mut self) -> Option<Self::Surface>;

    /// Present a finished frame & release its surface
    fn end_frame(&mut self, surface: Self::Surface);
}

/// An in-memory frame of `width` × `height` pixels
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    texts: Vec<(String, u32, u32, Paint)>,
}

impl PixelCanvas {
    pub(crate) fn new(width: u32, height: u32) -> PixelCanvas {
        let len = usize::try_from(u64::from(width) * u64::from(height)).unwrap_or(0);
        PixelCanvas {
            width,
            height,
            pixels: vec![Color::Reset; len],
            texts: Vec::new(),
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            usize::try_from(u64::from(y) * u64::from(self.width) + u64::from(x)).ok()
        } else {
            None
        }
    }

    pub(crate) fn pixel(&self, x: u32, y: u32) -> Color {
        self.index(x, y)
            .and_then(|i| self.pixels.get(i).copied())
            .unwrap_or(Color::Reset)
    }

    /// Size of the canvas in terminal cells.  Each cell is one pixel wide
    /// and two pixels tall.
    pub(crate) fn cell_size(&self) -> Size {
        Size {
            width: u16::try_from(self.width).unwrap_or(u16::MAX),
            height: u16::try_from(self.height.div_ceil(2)).unwrap_or(u16::MAX),
        }
    }
}

impl Surface for PixelCanvas {
    fn draw_background(&mut self, color: Color) {
        self.pixels.fill(color);
        self.texts.clear();
    }

    fn draw_text(&mut self, text: &str, x: u32, y: u32, paint: Paint) {
        self.texts.push((text.to_owned(), x, y, paint));
    }

    fn draw_rect(&mut self, rect: PixelRect, paint: Paint) {
        for y in rect.top..rect.bottom.min(self.height) {
            for x in rect.left..rect.right.min(self.width) {
                if let Some(i) = self.index(x, y) {
                    self.pixels[i] = paint.color;
                }
            }
        }
    }
}

impl Widget for &PixelCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (row, ty) in (0..self.height.div_ceil(2)).zip(area.top()..area.bottom()) {
            for (col, tx) in (0..self.width).zip(area.left()..area.right()) {
                let upper = self.pixel(col, row * 2);
                let lower = self.pixel(col, row * 2 + 1);
                if let Some(cell) = buf.cell_mut((tx, ty)) {
                    cell.set_char('▀');
                    cell.set_style(Style::new().fg(upper).bg(lower));
                }
            }
        }
        for (text, x, y, paint) in &self.texts {
            let (Ok(dx), Ok(dy)) = (u16::try_from(*x), u16::try_from(*y / 2)) else {
                continue;
            };
            let tx = area.x.saturating_add(dx);
            let ty = area.y.saturating_add(dy);
            if tx < area.right() && ty < area.bottom() {
                let width = usize::from(area.right() - tx);
                let _ = buf.set_stringn(tx, ty, text, width, Style::new().fg(paint.color));
            }
        }
    }
}

/// Draws frames in the terminal, centered in the window
#[derive(Debug)]
pub(crate) struct TerminalSink<B: Backend> {
    terminal: Terminal<B>,
    width_px: u32,
    height_px: u32,
}

impl<B: Backend> TerminalSink<B> {
    pub(crate) fn new(terminal: Terminal<B>, (width_px, height_px): (u32, u32)) -> Self {
        TerminalSink {
            terminal,
            width_px,
            height_px,
        }
    }
}

impl<B: Backend + Send> RenderSink for TerminalSink<B> {
    type Surface = PixelCanvas;

    fn begin_frame(&mut self) -> Option<PixelCanvas> {
        let canvas = PixelCanvas::new(self.width_px, self.height_px);
        let needed = canvas.cell_size();
        match self.terminal.size() {
            Ok(size) if size.width >= needed.width && size.height >= needed.height => Some(canvas),
            Ok(size) => {
                log::trace!(
                    "Terminal is {}x{}, too small for a {}x{} frame; skipping draw",
                    size.width,
                    size.height,
                    needed.width,
                    needed.height
                );
                None
            }
            Err(e) => {
                log::warn!("Failed to get terminal size: {e}");
                None
            }
        }
    }

    fn end_frame(&mut self, canvas: PixelCanvas) {
        let r = self.terminal.draw(|frame| {
            let area = center_rect(frame.area(), canvas.cell_size());
            frame.render_widget(&canvas, area);
        });
        if let Err(e) = r {
            log::warn!("Failed to draw frame: {e}");
        }
    }
}

/// A sink that keeps every finished frame, and can be told to have no
/// surface available
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub(crate) unavailable: bool,
    pub(crate) begun: usize,
    pub(crate) frames: Vec<Vec<DrawOp>>,
}

#[cfg(test)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum DrawOp {
    Background(Color),
    Text(String, u32, u32, Paint),
    Rect(PixelRect, Paint),
}

#[cfg(test)]
impl Surface for Vec<DrawOp> {
    fn draw_background(&mut self, color: Color) {
        self.push(DrawOp::Background(color));
    }

    fn draw_text(&mut self, text: &str, x: u32, y: u32, paint: Paint) {
        self.push(DrawOp::Text(text.to_owned(), x, y, paint));
    }

    fn draw_rect(&mut self, rect: PixelRect, paint: Paint) {
        self.push(DrawOp::Rect(rect, paint));
    }
}

#[cfg(test)]
impl RenderSink for RecordingSink {
    type Surface = Vec<DrawOp>;

    fn begin_frame(&mut self) -> Option<Vec<DrawOp>> {
        self.begun += 1;
        (!self.unavailable).then(Vec::new)
    }

    fn end_frame(&mut self, surface: Vec<DrawOp>) {
        self.frames.push(surface);
    }
}
