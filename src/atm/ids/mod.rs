mod pin;
mod user_id;

pub use pin::{Pin, PinError};
pub use user_id::UserId;
