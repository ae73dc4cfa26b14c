pub mod practice;
pub mod summation;
