mod climate;
mod environment;
mod horizon;
mod occupancy;
mod readings;
mod simulator;

pub use climate::*;
pub use environment::*;
pub use horizon::*;
pub use occupancy::*;
pub use readings::*;
pub use simulator::*;
