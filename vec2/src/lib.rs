#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod math;
pub mod matrix;
pub mod parse;
pub mod vector;

pub use math::{Exact, Fast, Math};
pub use matrix::{Elements, Matrix};
pub use parse::ParseVector2Error;
pub use vector::{add, angle, angle_with, cross, dot, max, min, mul, perp_dot, sub, Vector2};
