pub mod debug_logger;

pub use debug_logger::{hex_dump, PacketDebugLogger};
