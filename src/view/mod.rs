mod log_sink;
mod memory;
mod sink;

pub use log_sink::LogSink;
pub use memory::MemorySink;
pub use sink::{Control, ControlState, Field, RenderSink};
