pub mod colour;
pub mod palette;
pub mod pixel_buffer;
pub mod viewport;
