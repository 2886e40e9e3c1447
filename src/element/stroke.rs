use egui::{Color32, Pos2, Rect};

use super::{Element, ElementId};
use crate::element::common;
use crate::surface::Surface;

/// Freehand pen mark: a polyline with a fixed thickness and color.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: ElementId,
    points: Vec<Pos2>,
    thickness: f32,
    color: Color32,
}

impl Stroke {
    /// Create a sealed stroke
    pub fn new(points: Vec<Pos2>, thickness: f32, color: Color32) -> Self {
        Self {
            id: ElementId::new_v4(),
            points,
            thickness,
            color,
        }
    }

    /// Get the points that make up this stroke
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

impl Element for Stroke {
    fn id(&self) -> ElementId {
        self.id
    }

    fn element_type(&self) -> &'static str {
        "stroke"
    }

    fn rect(&self) -> Rect {
        common::calculate_bounds(&self.points, self.thickness / 2.0)
    }

    fn draw(&self, surface: &mut dyn Surface) {
        draw_polyline(surface, &self.points, self.thickness, self.color);
    }
}

/// A stroke that is still being drawn.
///
/// Points can only be appended; [`StrokeBuilder::seal`] turns it into an
/// immutable [`Stroke`].
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeBuilder {
    points: Vec<Pos2>,
    thickness: f32,
    color: Color32,
}

impl StrokeBuilder {
    /// Start a stroke at the pointer-down position
    pub fn new(start: Pos2, thickness: f32, color: Color32) -> Self {
        Self {
            points: vec![start],
            thickness,
            color,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        draw_polyline(surface, &self.points, self.thickness, self.color);
    }

    pub fn seal(self) -> Stroke {
        Stroke::new(self.points, self.thickness, self.color)
    }
}

// A single point leaves no mark.
fn draw_polyline(surface: &mut dyn Surface, points: &[Pos2], thickness: f32, color: Color32) {
    if points.len() < 2 {
        return;
    }
    surface.stroke_polyline(points, thickness, color);
}
