pub mod config;
pub mod control;
pub mod logging;
pub mod packet;
pub mod propagator;
pub mod symbols;
