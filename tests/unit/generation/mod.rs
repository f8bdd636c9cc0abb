pub mod dual;
pub mod seed;
pub mod transform;
