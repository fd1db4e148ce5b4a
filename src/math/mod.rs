pub mod alt_sqrt;
pub mod bit_math;
pub mod newton;
pub mod sqrt;
