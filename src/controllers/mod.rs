pub mod booking;
pub mod home;
