pub mod circle;
pub mod detection;
pub mod object_locator;
