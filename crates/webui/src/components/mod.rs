pub mod hanabi_view;
pub mod home_view;
pub mod not_found;
