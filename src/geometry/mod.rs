mod point;
mod polygon;

pub use point::Point;
pub use polygon::PerimeterPolygon;
