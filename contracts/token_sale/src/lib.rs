#![no_std]

#[cfg(test)]
extern crate std;

mod contract;
mod errors;
mod events;
mod phase;
mod pricing;
mod storage;
mod types;


pub use contract::{TokenSaleContract, TokenSaleContractClient};
pub use errors::SaleError;
pub use phase::Phase;
pub use types::{SaleConfig, SaleParams, SaleSchedule};
