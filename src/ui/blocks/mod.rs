pub mod header;
pub mod item;
pub mod summary;
