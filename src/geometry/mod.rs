pub mod circle;
pub mod rect;

pub use circle::Circle;
pub use rect::Rect;
