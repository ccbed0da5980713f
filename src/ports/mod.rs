/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains the outbound ports (driven ports): the
/// infrastructure interfaces the application core depends on.
pub mod outbound;
