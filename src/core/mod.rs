pub mod simulator;
pub mod config;

pub use self::simulator::Simulator;
pub use self::config::SimulatorConfig;
