// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Single-owner access control for the registry contracts.
//!
//! [`Ownable`] is a storage component meant to be embedded in an entrypoint
//! struct. The owner is written once by the embedding contract's constructor
//! and never changes afterwards, so there is no transfer or renounce.
//!
//! ```ignore
//! #[storage]
//! #[entrypoint]
//! pub struct Contract {
//!     ownable: Ownable,
//! }
//!
//! #[public]
//! impl Contract {
//!     #[constructor]
//!     pub fn constructor(&mut self) {
//!         let deployer = self.vm().tx_origin();
//!         self.ownable.initialize(deployer);
//!     }
//!
//!     pub fn privileged(&mut self) -> Result<(), ContractError> {
//!         self.ownable.only_owner(self.vm().msg_sender())?;
//!         Ok(())
//!     }
//! }
//! ```

extern crate alloc;

use alloy_primitives::Address;
use alloy_sol_types::sol;
use stylus_sdk::{prelude::*, storage::StorageAddress};

sol! {
    /// The caller is not the contract owner.
    #[derive(Debug)]
    error NotOwner();
}

/// Holds the owner of a contract.
#[storage]
pub struct Ownable {
    owner: StorageAddress,
}

impl Ownable {
    /// Records the owner. Only constructors should call this.
    pub fn initialize(&mut self, owner: Address) {
        self.owner.set(owner);
    }

    pub fn owner(&self) -> Address {
        self.owner.get()
    }

    pub fn is_owner(&self, account: Address) -> bool {
        self.owner.get() == account
    }

    /// Fails with [`NotOwner`] unless `caller` is the owner.
    pub fn only_owner(&self, caller: Address) -> Result<(), NotOwner> {
        if !self.is_owner(caller) {
            return Err(NotOwner {});
        }
        Ok(())
    }
}
