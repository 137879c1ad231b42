mod badge_token;
mod employee;
mod reading;
mod roster;

pub use badge_token::*;
pub use employee::*;
pub use reading::*;
pub use roster::*;
