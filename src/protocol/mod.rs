pub mod labels;
pub mod modes;
pub mod command;
pub mod transport;
