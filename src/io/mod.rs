pub mod case_reader;
pub use case_reader::*;
pub mod cost_writer;
pub use cost_writer::CostWriter;
pub mod instance_writer;
pub use instance_writer::InstanceWriter;
