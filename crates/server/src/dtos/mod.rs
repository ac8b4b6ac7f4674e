pub mod guest;
pub mod movie;
pub mod reservation;
