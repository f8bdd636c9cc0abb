pub mod ordering;
pub mod polygon;
pub mod vector;
