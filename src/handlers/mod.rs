pub mod bookings;
pub mod guides;
pub mod packages;
pub mod reviews;
pub mod session;
pub mod story;
pub mod users;
pub mod wishlist;
