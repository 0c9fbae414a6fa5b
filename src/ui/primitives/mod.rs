pub mod icon;
pub mod text;

pub use icon::Icon;
pub use text::ColoredText;
