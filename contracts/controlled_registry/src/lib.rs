// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
#![cfg_attr(feature = "contract-client-gen", allow(unused_imports))]

extern crate alloc;

use alloy_primitives::Address;
use alloy_sol_types::sol;
use ownership::{NotOwner, Ownable};
use stylus_sdk::{
    console,
    prelude::*,
    storage::{StorageBool, StorageMap},
};

sol! {
    event UserRegistered(address indexed user);

    #[derive(Debug)]
    error UserAlreadyRegistered(address user);
}

#[derive(SolidityError, Debug)]
pub enum RegistryError {
    NotOwner(NotOwner),
    UserAlreadyRegistered(UserAlreadyRegistered),
}

/// A set of addresses that only the owner can add to.
#[storage]
#[entrypoint]
pub struct ControlledRegistry {
    ownable: Ownable,
    registered: StorageMap<Address, StorageBool>,
}

#[public]
impl ControlledRegistry {
    #[constructor]
    pub fn constructor(&mut self) {
        // Use tx_origin instead of msg_sender because we use a factory contract in deployment.
        let owner = self.vm().tx_origin();
        self.ownable.initialize(owner);
    }

    pub fn owner(&self) -> Address {
        self.ownable.owner()
    }

    pub fn is_registered(&self, user: Address) -> bool {
        self.registered.get(user)
    }

    /// Adds `target` to the registry. Owner only, and each address only once.
    pub fn register(&mut self, target: Address) -> Result<(), RegistryError> {
        self.ownable.only_owner(self.vm().msg_sender())?;
        if self.registered.get(target) {
            return Err(UserAlreadyRegistered { user: target }.into());
        }

        self.registered.setter(target).set(true);
        self.vm().log(UserRegistered { user: target });
        console!("registered {target}");
        Ok(())
    }
}
