use crate::layout::AxisConfig;
use crate::model::{Mark, RinkDiagram};

/// Axes are configured once before any mark is drawn; marks arrive in paint
/// order and carry their own styling.
pub trait Canvas {
    fn configure_axes(&mut self, axes: &AxisConfig);
    fn draw(&mut self, mark: &Mark);
}

impl RinkDiagram {
    pub fn render_to<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.configure_axes(&self.axes);
        for mark in &self.marks {
            canvas.draw(mark);
        }
    }
}
