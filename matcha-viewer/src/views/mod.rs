pub mod header;
pub mod home;
pub mod users;
