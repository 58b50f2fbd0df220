/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod build_component_tree_port;

pub use build_component_tree_port::BuildComponentTreePort;
