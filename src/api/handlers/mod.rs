pub mod booking;
pub mod health;
pub mod management;
pub mod schedule;
pub mod slot;
pub mod template;
