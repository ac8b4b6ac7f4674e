pub mod guest;
pub mod health;
pub mod movie;
pub mod reservation;
pub mod root;
