// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
#![cfg_attr(feature = "contract-client-gen", allow(unused_imports))]

extern crate alloc;

use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use ownership::{NotOwner, Ownable};
use stylus_sdk::{console, prelude::*, storage::StorageU256};

sol! {
    event ValueStored(address indexed by, uint256 new_value);
}

#[derive(SolidityError, Debug)]
pub enum SimpleStorageError {
    NotOwner(NotOwner),
}

/// A single number that only the owner may change.
#[storage]
#[entrypoint]
pub struct SimpleStorage {
    ownable: Ownable,
    value: StorageU256,
}

#[public]
impl SimpleStorage {
    /// The account that deployed the contract becomes its owner.
    #[constructor]
    pub fn constructor(&mut self) {
        // Deployment goes through a factory contract, so the sender is not the deployer.
        let owner = self.vm().tx_origin();
        self.ownable.initialize(owner);
    }

    pub fn owner(&self) -> Address {
        self.ownable.owner()
    }

    pub fn retrieve(&self) -> U256 {
        self.value.get()
    }

    /// Replaces the stored number. Owner only.
    pub fn store(&mut self, new_value: U256) -> Result<(), SimpleStorageError> {
        let caller = self.vm().msg_sender();
        self.ownable.only_owner(caller)?;

        self.value.set(new_value);
        self.vm().log(ValueStored {
            by: caller,
            new_value,
        });
        console!("value set to {new_value} by {caller}");
        Ok(())
    }
}
