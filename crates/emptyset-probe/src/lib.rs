//! Data-source adapters for the emptyset probes.
//!
//! Each adapter drives one external control-plane tool and turns its raw
//! output into the flat entry list the evaluation core works on.

pub mod bird;
pub mod exec;
pub mod nftables;

pub use bird::RouteTableProbe;
pub use exec::{Invoker, SystemInvoker};
pub use nftables::NftSetProbe;
