//! Booking constants shared by every flow.

// Pricing
pub const TAX_RATE_BP: u32 = 1_200;
pub const BASIS_POINTS: i64 = 10_000;
pub const USD_TO_INR: i64 = 75;
pub const DYNAMIC_HOTEL_USD_DEFAULT: i64 = 199;
pub const DELUXE_MULTIPLIER_BP: u32 = 13_000;
pub const SUITE_MULTIPLIER_BP: u32 = 20_000;
pub const HOTEL_INCLUDED_GUESTS: u32 = 2;
pub const HOTEL_EXTRA_GUEST_NIGHTLY: i64 = 500;
pub const HOTEL_MAX_GUESTS: u32 = 6;

// Passenger list
pub const MAX_PASSENGERS: usize = 6;
pub const PASSENGER_AGE_MIN: u32 = 1;
pub const PASSENGER_AGE_MAX: u32 = 120;

// Jungle safari payment, whatever the vehicle or party
pub const SAFARI_BOOKING_AMOUNT: i64 = 5_000;

// Field rules
pub const NAME_MIN_LEN: usize = 3;
pub const ADDRESS_MIN_LEN: usize = 15;
pub const SAFARI_ADDRESS_MIN_LEN: usize = 10;
pub const PHONE_DIGITS: usize = 10;

// Simulated round trips (milliseconds)
pub const PAYMENT_DELAY_MS: u32 = 2_000;
pub const REDIRECT_DELAY_MS: u32 = 1_500;
pub const TOAST_MS: u32 = 3_000;
pub const CHAMBAL_TOAST_MS: u32 = 4_000;
pub const SAFARI_TOAST_MS: u32 = 5_000;
pub const HOTEL_CONFIRMATION_AUTO_CLOSE_MS: u32 = 30_000;

// Contact
pub const WHATSAPP_NUMBER: &str = "918076438491";
pub const SUPPORT_PHONE: &str = "8076438491";
pub const SUPPORT_EMAIL: &str = "info@ranthambore360.com";
pub const BRAND_NAME: &str = "Ranthambore 360";

// Browser-local store
pub const STORAGE_NAMESPACE: &str = "rb360";

// Display fallbacks
pub const MISSING_VALUE: &str = "N/A";
pub const DEFAULT_GUEST_NAME: &str = "Guest";
pub const NOT_PROVIDED: &str = "Not provided";
pub const NOT_SPECIFIED: &str = "Not specified";
