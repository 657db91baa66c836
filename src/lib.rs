//! Booking desk: a controlled-form engine, an availability calendar and a
//! booking store, with the terminal UI that drives them.

pub mod app;
pub mod booking;
pub mod calendar;
pub mod config;
pub mod form;
pub mod state;
pub mod ui;
