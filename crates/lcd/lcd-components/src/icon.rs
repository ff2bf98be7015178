//! Menu icons
//!
//! The product's menu shows a pictogram per entry. On a 1-bit panel those
//! are vector-drawn from primitives, not font glyphs.

// Icon geometry is fixed-size (10×10 by default); coordinate arithmetic
// cannot overflow i32.
#![allow(clippy::cast_possible_wrap, clippy::arithmetic_side_effects)]

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle},
};

/// Icon types
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IconKind {
    /// Person silhouette
    Contacts,
    /// Gamepad
    Games,
    /// Envelope
    Messages,
    /// Handset
    Dialer,
    /// Key grid
    Calculator,
    /// Clock face
    Alarm,
    /// Gear
    Settings,
    /// The snake itself, for the game splash
    Snake,
}

/// Vector-drawn icon
pub struct Icon {
    kind: IconKind,
    size: u32,
    color: BinaryColor,
}

impl Icon {
    /// Create a new icon. `size` is the bounding square's edge in pixels.
    pub fn new(kind: IconKind, size: u32) -> Self {
        Self {
            kind,
            size,
            color: BinaryColor::On,
        }
    }

    /// Set icon color
    pub fn color(mut self, color: BinaryColor) -> Self {
        self.color = color;
        self
    }

    /// Get icon dimensions
    pub fn dimensions(&self) -> Size {
        Size::new(self.size, self.size)
    }

    /// Render icon with its top-left corner at `position`
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        match self.kind {
            IconKind::Contacts => self.render_contacts(display, position),
            IconKind::Games => self.render_games(display, position),
            IconKind::Messages => self.render_messages(display, position),
            IconKind::Dialer => self.render_dialer(display, position),
            IconKind::Calculator => self.render_calculator(display, position),
            IconKind::Alarm => self.render_alarm(display, position),
            IconKind::Settings => self.render_settings(display, position),
            IconKind::Snake => self.render_snake(display, position),
        }
    }

    fn stroke(&self) -> PrimitiveStyle<BinaryColor> {
        PrimitiveStyle::with_stroke(self.color, 1)
    }

    fn fill(&self) -> PrimitiveStyle<BinaryColor> {
        PrimitiveStyle::with_fill(self.color)
    }

    fn px(&self, num: u32, den: u32) -> i32 {
        (self.size * num / den) as i32
    }

    // Head circle over a shoulder slab.
    fn render_contacts<D>(&self, display: &mut D, p: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let head = self.size / 2;
        Circle::new(p + Point::new(self.px(1, 4), 0), head)
            .into_styled(self.stroke())
            .draw(display)?;
        Rectangle::new(
            p + Point::new(0, self.px(3, 5)),
            Size::new(self.size, self.size - self.size * 3 / 5),
        )
        .into_styled(self.fill())
        .draw(display)?;
        Ok(())
    }

    // Pad body with a cross on the left, button dot on the right.
    fn render_games<D>(&self, display: &mut D, p: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        Rectangle::new(
            p + Point::new(0, self.px(1, 4)),
            Size::new(self.size, self.size / 2),
        )
        .into_styled(self.stroke())
        .draw(display)?;
        let mid_y = self.px(1, 2);
        Line::new(
            p + Point::new(self.px(1, 8), mid_y),
            p + Point::new(self.px(3, 8), mid_y),
        )
        .into_styled(self.stroke())
        .draw(display)?;
        Line::new(
            p + Point::new(self.px(1, 4), self.px(3, 8)),
            p + Point::new(self.px(1, 4), self.px(5, 8)),
        )
        .into_styled(self.stroke())
        .draw(display)?;
        Rectangle::new(p + Point::new(self.px(3, 4), mid_y - 1), Size::new(2, 2))
            .into_styled(self.fill())
            .draw(display)?;
        Ok(())
    }

    // Envelope: outline plus the flap diagonals.
    fn render_messages<D>(&self, display: &mut D, p: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        Rectangle::new(
            p + Point::new(0, self.px(1, 5)),
            Size::new(self.size, self.size - self.size * 2 / 5),
        )
        .into_styled(self.stroke())
        .draw(display)?;
        let top = self.px(1, 5);
        let mid = Point::new(self.px(1, 2), self.px(1, 2));
        Line::new(p + Point::new(0, top), p + mid)
            .into_styled(self.stroke())
            .draw(display)?;
        Line::new(p + Point::new(self.size as i32 - 1, top), p + mid)
            .into_styled(self.stroke())
            .draw(display)?;
        Ok(())
    }

    // Handset: earpiece and mouthpiece joined by the grip.
    fn render_dialer<D>(&self, display: &mut D, p: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let lug = self.size * 3 / 10;
        Rectangle::new(p, Size::new(lug, lug))
            .into_styled(self.fill())
            .draw(display)?;
        Rectangle::new(
            p + Point::new(self.size as i32 - lug as i32, self.size as i32 - lug as i32),
            Size::new(lug, lug),
        )
        .into_styled(self.fill())
        .draw(display)?;
        Line::new(
            p + Point::new(self.px(1, 8), self.px(1, 8)),
            p + Point::new(self.px(7, 8), self.px(7, 8)),
        )
        .into_styled(PrimitiveStyle::with_stroke(self.color, 2))
        .draw(display)?;
        Ok(())
    }

    // Four-key grid.
    fn render_calculator<D>(&self, display: &mut D, p: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        Rectangle::new(p, Size::new(self.size, self.size))
            .into_styled(self.stroke())
            .draw(display)?;
        let mid = self.px(1, 2);
        Line::new(p + Point::new(mid, 0), p + Point::new(mid, self.size as i32 - 1))
            .into_styled(self.stroke())
            .draw(display)?;
        Line::new(p + Point::new(0, mid), p + Point::new(self.size as i32 - 1, mid))
            .into_styled(self.stroke())
            .draw(display)?;
        Ok(())
    }

    // Clock face showing roughly seven o'clock.
    fn render_alarm<D>(&self, display: &mut D, p: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        Circle::new(p, self.size)
            .into_styled(self.stroke())
            .draw(display)?;
        let center = p + Point::new(self.px(1, 2), self.px(1, 2));
        Line::new(center, center + Point::new(0, -self.px(1, 3)))
            .into_styled(self.stroke())
            .draw(display)?;
        Line::new(center, center + Point::new(self.px(1, 4), self.px(1, 8)))
            .into_styled(self.stroke())
            .draw(display)?;
        Ok(())
    }

    // Gear: hub circle with four teeth.
    fn render_settings<D>(&self, display: &mut D, p: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let inset = self.px(1, 5);
        Circle::new(p + Point::new(inset, inset), self.size - self.size * 2 / 5)
            .into_styled(self.stroke())
            .draw(display)?;
        let mid = self.px(1, 2);
        let last = self.size as i32 - 1;
        for (a, b) in [
            (Point::new(mid, 0), Point::new(mid, inset)),
            (Point::new(mid, last - inset), Point::new(mid, last)),
            (Point::new(0, mid), Point::new(inset, mid)),
            (Point::new(last - inset, mid), Point::new(last, mid)),
        ] {
            Line::new(p + a, p + b)
                .into_styled(self.stroke())
                .draw(display)?;
        }
        Ok(())
    }

    // Zigzag body with an arrowhead.
    fn render_snake<D>(&self, display: &mut D, p: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let s = self.size as i32;
        let quarter = self.px(1, 4);
        let segments = [
            (Point::new(0, s - 1), Point::new(0, quarter * 3)),
            (Point::new(0, quarter * 3), Point::new(quarter * 2, quarter * 3)),
            (Point::new(quarter * 2, quarter * 3), Point::new(quarter * 2, quarter)),
            (Point::new(quarter * 2, quarter), Point::new(s - 1, quarter)),
        ];
        for (a, b) in segments {
            Line::new(p + a, p + b)
                .into_styled(PrimitiveStyle::with_stroke(self.color, 2))
                .draw(display)?;
        }
        Triangle::new(
            p + Point::new(s - 3, quarter - 2),
            p + Point::new(s - 3, quarter + 2),
            p + Point::new(s - 1, quarter),
        )
        .into_styled(self.fill())
        .draw(display)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Icon, IconKind};
    use embedded_graphics::{mock_display::MockDisplay, pixelcolor::BinaryColor, prelude::*};

    fn draws_something(kind: IconKind) -> bool {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        display.set_allow_overdraw(true);
        Icon::new(kind, 10)
            .render(&mut display, Point::new(2, 2))
            .is_ok()
            && display.affected_area().size != Size::zero()
    }

    #[test]
    fn test_every_icon_draws_pixels() {
        for kind in [
            IconKind::Contacts,
            IconKind::Games,
            IconKind::Messages,
            IconKind::Dialer,
            IconKind::Calculator,
            IconKind::Alarm,
            IconKind::Settings,
            IconKind::Snake,
        ] {
            assert!(draws_something(kind), "{kind:?} drew nothing");
        }
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(Icon::new(IconKind::Alarm, 12).dimensions(), Size::new(12, 12));
    }
}
