pub mod channel;
pub mod price_reading;
pub mod rendered_message;
