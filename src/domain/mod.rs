mod car;
mod employee;
mod ledger;
mod money;
mod reports;
mod sale;

pub use car::*;
pub use employee::*;
pub use ledger::*;
pub use money::*;
pub use reports::*;
pub use sale::*;
