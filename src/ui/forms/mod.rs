//! Form rendering module
//!
//! - `field_renderer`: single field boxes with cursor and error line
//! - `booking_form`: the booking details pane

mod booking_form;
mod field_renderer;

pub use booking_form::draw_booking_form;
