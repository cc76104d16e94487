use color_lib::color::{sRGB, to_string};
use hemicycle::Point;
use svg::node::element::{Circle, Group, Rectangle};
use svg::Document;

use crate::{Background, Canvas};

/// SVG counterpart of [`crate::RasterCanvas`]. Consecutive circles of the
/// same color share one `<g fill=...>`, so a chamber comes out as one group
/// per party.
pub struct VectorCanvas {
    width: u32,
    height: u32,
    background: Background,
    groups: Vec<(sRGB, Vec<Circle>)>,
}

impl VectorCanvas {
    pub fn new(width: u32, height: u32, background: Background) -> Self {
        Self {
            width,
            height,
            background,
            groups: Vec::new(),
        }
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn into_document(self) -> Document {
        let document = Document::new()
            .set("width", self.width)
            .set("height", self.height)
            .set("viewBox", (0, 0, self.width, self.height));
        let document = match self.background {
            Background::Solid(c) => document.add(
                Rectangle::new()
                    .set("width", self.width)
                    .set("height", self.height)
                    .set("fill", to_string(&c)),
            ),
            Background::Transparent => document,
        };
        self.groups
            .into_iter()
            .fold(document, |doc, (color, circles)| {
                let group = circles
                    .into_iter()
                    .fold(Group::new().set("fill", to_string(&color)), |g, c| g.add(c));
                doc.add(group)
            })
    }
}

impl Canvas for VectorCanvas {
    fn fill_circle(&mut self, center: Point, diameter: f64, color: &sRGB) {
        let circle = Circle::new()
            .set("cx", center.x)
            .set("cy", center.y)
            .set("r", diameter / 2.0);
        if let Some((last, circles)) = self.groups.last_mut() {
            if *last == *color {
                circles.push(circle);
                return;
            }
        }
        self.groups.push((*color, vec![circle]));
    }
}
