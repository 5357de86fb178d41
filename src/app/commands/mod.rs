pub mod copy;
pub mod generate;
