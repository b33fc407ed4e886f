pub mod category;
pub mod reading;
pub mod score;
pub mod session;
