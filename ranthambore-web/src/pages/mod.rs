pub mod chambal;
pub mod home;
pub mod hotel_booking;
pub mod hotels;
pub mod not_found;
pub mod package_booking;
pub mod packages;
pub mod safari;
pub mod safari_booking;
pub mod shared;
