//! Canvas implementation drawing onto a Cairo context

use crate::bitmap::Bitmap;
use crate::canvas::{Canvas, Paint};
use crate::geometry::{IndicatorPath, Rect, TimeArc};

pub struct CairoCanvas<'a> {
    cr: &'a cairo::Context,
}

impl<'a> CairoCanvas<'a> {
    pub fn new(cr: &'a cairo::Context) -> Self {
        Self { cr }
    }

    fn apply_paint(&self, paint: &Paint) -> Result<(), cairo::Error> {
        let cr = self.cr;
        cr.set_line_width(paint.stroke_width);
        cr.set_line_cap(cairo::LineCap::Butt);
        cr.set_antialias(if paint.anti_alias {
            cairo::Antialias::Default
        } else {
            cairo::Antialias::None
        });

        match &paint.shader {
            Some(texture) => {
                let pattern = cairo::SurfacePattern::create(texture.surface());
                pattern.set_extend(cairo::Extend::Pad);
                cr.set_source(&pattern)?;
            }
            None => paint.color.apply_to_cairo(cr),
        }

        Ok(())
    }
}

impl Canvas for CairoCanvas<'_> {
    type Error = cairo::Error;

    fn clear(&mut self) -> Result<(), cairo::Error> {
        let cr = self.cr;
        cr.save()?;
        cr.set_operator(cairo::Operator::Clear);
        cr.paint()?;
        cr.restore()?;
        Ok(())
    }

    fn stroke_path(&mut self, path: &IndicatorPath, paint: &Paint) -> Result<(), cairo::Error> {
        let cr = self.cr;
        cr.save()?;
        self.apply_paint(paint)?;

        cr.new_path();
        for segment in path.segments() {
            cr.move_to(segment.from.x, segment.from.y);
            cr.line_to(segment.to.x, segment.to.y);
        }
        cr.stroke()?;

        cr.restore()?;
        Ok(())
    }

    fn stroke_arc(&mut self, bounds: &Rect, arc: &TimeArc, paint: &Paint) -> Result<(), cairo::Error> {
        let radius_x = bounds.width() / 2.0;
        let radius_y = bounds.height() / 2.0;
        if radius_x <= 0.0 || radius_y <= 0.0 {
            return Ok(());
        }

        let cr = self.cr;
        let center = bounds.center();
        cr.save()?;
        self.apply_paint(paint)?;

        // Trace the arc on a unit circle scaled to the bounds, then stroke with
        // the unscaled matrix so the line width stays uniform
        cr.new_path();
        cr.save()?;
        cr.translate(center.x, center.y);
        cr.scale(radius_x, radius_y);
        cr.arc(
            0.0,
            0.0,
            1.0,
            arc.start_deg.to_radians(),
            arc.end_deg().to_radians(),
        );
        cr.restore()?;
        cr.stroke()?;

        cr.restore()?;
        Ok(())
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, x: f64, y: f64) -> Result<(), cairo::Error> {
        let cr = self.cr;
        cr.save()?;
        cr.set_source_surface(bitmap.surface(), x, y)?;
        cr.paint()?;
        cr.restore()?;
        Ok(())
    }
}
