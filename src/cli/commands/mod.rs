//! CLI command implementations.

pub mod p2p;
pub mod pfs;
pub mod publish;
