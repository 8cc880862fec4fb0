//! Model to entity mappers
//!
//! Row models convert into domain entities. Badge rows carry tier and
//! category as text, so those conversions are fallible.

mod badge;
mod notification;
mod progress;
mod user_badge;
