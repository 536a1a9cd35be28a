pub mod arguments;
pub mod connection;
pub mod networks;

pub use {
    alloy::providers::DynProvider as AlloyProvider,
    arguments::Arguments,
    connection::{Connection, ConnectionError},
    networks::Network,
};
