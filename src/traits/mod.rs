pub mod sink;

pub use sink::{BoxedSink, MsgSink};
