//! Request and response models for the platform API
//!
//! Responses mirror the platform's JSON faithfully, including its habit
//! of rendering numbers as strings and of wrapping lists in single-key
//! objects.

mod foods;
mod image;
mod method;
mod nlp;
mod recipes;
mod shared;

pub use foods::*;
pub use image::*;
pub use method::ApiMethod;
pub use nlp::*;
pub use recipes::*;
pub use shared::*;
