pub mod disaster;
pub mod sample;
