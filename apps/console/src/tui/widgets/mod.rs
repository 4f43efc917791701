mod input_buffer;

pub use input_buffer::InputBuffer;
