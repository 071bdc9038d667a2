pub mod coordinate;
pub mod travel;
