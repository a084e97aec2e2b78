pub mod auction;
pub mod safe_math;
