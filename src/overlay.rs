use raylib::prelude::*;

use crate::constants::*;
use crate::engine::Surface;

const LINE_GAP: i32 = 18;     // Pixels between lines
const SECTION_GAP: i32 = 48;  // Pixels above the tagline

#[derive(Debug, Clone)]
pub struct PlacedLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub font_size: i32,
    pub color: Color,
}

/// Static copy drawn over the background: headline, countdown, tagline and links.
pub struct Overlay {
    lines: Vec<(String, i32, Color)>,
}

impl Overlay {
    pub fn new(headline: String, countdown: &str) -> Self {
        let mut lines = vec![
            (headline, HEADLINE_FONT_SIZE, Color::RAYWHITE),
            (countdown.to_string(), COUNTDOWN_FONT_SIZE, Color::GOLD),
            (TAGLINE.to_string(), BODY_FONT_SIZE, Color::LIGHTGRAY),
        ];
        lines.extend(
            LINKS
                .iter()
                .map(|(label, url)| (format!("{}: {}", label, url), BODY_FONT_SIZE, Color::SKYBLUE)),
        );
        Self { lines }
    }

    /// Centres every line horizontally and the block vertically.
    /// `measure` returns the pixel width of a string at a font size.
    pub fn layout<F>(&self, surface: Surface, measure: F) -> Vec<PlacedLine>
    where
        F: Fn(&str, i32) -> i32,
    {
        let gaps: Vec<i32> = (0..self.lines.len())
            .map(|i| match i {
                0 => 0,
                2 => SECTION_GAP, // Tagline starts the second block
                _ => LINE_GAP,
            })
            .collect();
        let block_height: i32 = self.lines.iter().map(|(_, size, _)| *size).sum::<i32>() + gaps.iter().sum::<i32>();

        let mut y = (surface.height - block_height) / 2;
        self.lines
            .iter()
            .zip(gaps)
            .map(|((text, size, color), gap)| {
                y += gap;
                let placed = PlacedLine {
                    text: text.clone(),
                    x: (surface.width - measure(text, *size)) / 2,
                    y,
                    font_size: *size,
                    color: *color,
                };
                y += size;
                placed
            })
            .collect()
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, surface: Surface) {
        for line in self.layout(surface, measure_text) {
            d.draw_text(&line.text, line.x, line.y, line.font_size, line.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fixed-width stand-in for the default font.
    fn measure(text: &str, size: i32) -> i32 {
        text.len() as i32 * size / 2
    }

    #[test]
    fn headline_then_countdown_then_copy() {
        let overlay = Overlay::new("L3ak CTF starts in".to_string(), "1 Day, 0 Hours, 0 Minutes, and 0 Seconds");
        let lines = overlay.layout(Surface::new(1920, 1080), measure);

        assert_eq!(lines.len(), 3 + LINKS.len());
        assert_eq!(lines[0].text, "L3ak CTF starts in");
        assert_eq!(lines[1].font_size, COUNTDOWN_FONT_SIZE);
        assert_eq!(lines[2].text, TAGLINE);
        assert!(lines.last().is_some_and(|l| l.text.ends_with(LINKS[LINKS.len() - 1].1)));
    }

    #[test]
    fn lines_are_centred_and_stacked() {
        let overlay = Overlay::new("Soon".to_string(), "0 Days");
        let surface = Surface::new(1000, 800);
        let lines = overlay.layout(surface, measure);

        for line in &lines {
            let width = measure(&line.text, line.font_size);
            assert!((line.x * 2 + width - surface.width).abs() <= 1);
        }
        for pair in lines.windows(2) {
            assert!(pair[1].y >= pair[0].y + pair[0].font_size);
        }

        let top = lines[0].y;
        let bottom = lines.last().map(|l| l.y + l.font_size).unwrap_or(top);
        assert!(((surface.height - bottom) - top).abs() <= 1);
    }
}
