pub mod driver;
pub mod scheduler;
pub mod scorer;
pub mod sequencer;
pub mod session;
