//! Two-party computation of garbled circuits: the generator garbles and
//! transfers labels, the evaluator obtains its input labels by 1-out-of-2
//! oblivious transfer and evaluates.

pub mod ot;
pub mod twopc_prot;

pub use ot::*;
pub use twopc_prot::*;
