//! Canvas drawing for media tiles
//!
//! Film strips and the breeds marquee are a horizontal track of equally wide
//! tiles translated by an offset and clipped to the canvas bounds. Images are
//! drawn with cover fit; videos show their poster with a play marker.

use iced::widget::canvas;
use iced::{Color, Element, Fill, Point, Rectangle, Renderer, Size, Theme, mouse};

use crate::features::carousel::MediaItem;
use crate::ui::theme;

/// Rectangle covering `cell` while keeping the image aspect ratio
pub fn cover_rect(image_size: Option<(u32, u32)>, cell: Rectangle) -> Rectangle {
    let Some((w, h)) = image_size.filter(|(w, h)| *w > 0 && *h > 0) else {
        return cell;
    };

    let (img_w, img_h) = (w as f32, h as f32);
    let scale = (cell.width / img_w).max(cell.height / img_h);
    let (final_w, final_h) = (img_w * scale, img_h * scale);

    Rectangle::new(
        Point::new(
            cell.x + (cell.width - final_w) / 2.0,
            cell.y + (cell.height - final_h) / 2.0,
        ),
        Size::new(final_w, final_h),
    )
}

/// Draw one media item into `cell`
pub fn draw_tile(frame: &mut canvas::Frame, item: &MediaItem, cell: Rectangle, theme: &Theme) {
    frame.with_clip(cell, |frame| {
        let local = Rectangle::new(Point::ORIGIN, cell.size());

        match item.still_image() {
            Some(path) => {
                frame.draw_image(cover_rect(item.size, local), canvas::Image::new(path));
            }
            None => {
                frame.fill_rectangle(Point::ORIGIN, local.size(), theme::placeholder_bg(theme));
            }
        }

        if item.is_video() {
            draw_play_marker(frame, local);
        }
    });
}

fn draw_play_marker(frame: &mut canvas::Frame, cell: Rectangle) {
    let center = cell.center();
    let radius = (cell.width.min(cell.height) * 0.12).clamp(10.0, 28.0);

    frame.fill(
        &canvas::Path::circle(center, radius),
        Color::from_rgba(0.0, 0.0, 0.0, 0.45),
    );

    let triangle = canvas::Path::new(|p| {
        p.move_to(Point::new(center.x - radius * 0.35, center.y - radius * 0.5));
        p.line_to(Point::new(center.x + radius * 0.55, center.y));
        p.line_to(Point::new(center.x - radius * 0.35, center.y + radius * 0.5));
        p.close();
    });
    frame.fill(&triangle, Color::WHITE);
}

struct TrackProgram<'a> {
    items: &'a [MediaItem],
    item_width: f32,
    track_width: f32,
    offset: f32,
}

impl<'a, Message> canvas::Program<Message> for TrackProgram<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Backing sheet under the whole track
        frame.fill_rectangle(
            Point::new(self.offset, 0.0),
            Size::new(self.track_width, bounds.height),
            theme::surface(theme),
        );

        if self.item_width > 0.0 {
            let laid_out = (self.track_width / self.item_width).round() as usize;
            for (i, item) in self.items.iter().take(laid_out).enumerate() {
                let x = self.offset + i as f32 * self.item_width;
                // Skip tiles outside the viewport
                if x + self.item_width < 0.0 || x > bounds.width {
                    continue;
                }
                let cell = Rectangle::new(
                    Point::new(x, 0.0),
                    Size::new(self.item_width, bounds.height),
                );
                draw_tile(&mut frame, item, cell, theme);
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Build a clipped track of media tiles translated by `offset`
///
/// Tiles are laid out over `track_width`; anything past it is not drawn.
pub fn view<'a, Message: 'a>(
    items: &'a [MediaItem],
    item_width: f32,
    track_width: f32,
    offset: f32,
    height: f32,
) -> Element<'a, Message> {
    canvas(TrackProgram {
        items,
        item_width,
        track_width,
        offset,
    })
    .width(Fill)
    .height(height)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_fills_cell_and_keeps_ratio() {
        let cell = Rectangle::new(Point::ORIGIN, Size::new(250.0, 200.0));
        let rect = cover_rect(Some((1000, 500)), cell);

        assert_eq!(rect.height, 200.0);
        assert_eq!(rect.width, 400.0);
        assert_eq!(rect.x, -75.0);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn unknown_size_stretches_to_cell() {
        let cell = Rectangle::new(Point::new(10.0, 0.0), Size::new(250.0, 200.0));
        assert_eq!(cover_rect(None, cell), cell);
        assert_eq!(cover_rect(Some((0, 100)), cell), cell);
    }
}
