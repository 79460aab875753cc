// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! An owner-controlled registry whose members manage their own number.
//!
//! The owner admits addresses with [`ControlledRegistryWithActions::register`].
//! Each admitted address starts at the deployment's default value and may then
//! change its own number through [`ControlledRegistryWithActions::update_value`],
//! as long as every update actually changes it. Membership is permanent.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
#![cfg_attr(feature = "contract-client-gen", allow(unused_imports))]

extern crate alloc;

use alloy_primitives::{Address, U256};
use alloy_sol_types::sol;
use ownership::{NotOwner, Ownable};
use stylus_sdk::{
    console,
    prelude::*,
    storage::{StorageBool, StorageMap, StorageU256},
};

sol! {
    event Registered(address indexed user, uint256 default_value);
    event ValueUpdated(address indexed user, uint256 new_value);

    #[derive(Debug)]
    error UserAlreadyRegistered(address user);
    #[derive(Debug)]
    error UserNotRegistered(address user);
    #[derive(Debug)]
    error NewNumberMustDifferFromOldNumber(uint256 number);
}

#[derive(SolidityError, Debug)]
pub enum RegistryWithActionsError {
    NotOwner(NotOwner),
    UserAlreadyRegistered(UserAlreadyRegistered),
    UserNotRegistered(UserNotRegistered),
    NewNumberMustDifferFromOldNumber(NewNumberMustDifferFromOldNumber),
}

/// Per-address state. `registered` is kept apart from `value` so a stored
/// zero is distinguishable from an address that was never admitted.
#[storage]
pub struct RegistryEntry {
    registered: StorageBool,
    value: StorageU256,
}

#[storage]
#[entrypoint]
pub struct ControlledRegistryWithActions {
    ownable: Ownable,
    /// Value given to every newly registered address.
    default_value: StorageU256,
    entries: StorageMap<Address, RegistryEntry>,
}

#[public]
impl ControlledRegistryWithActions {
    /// Makes the deployer the owner and fixes the registration default.
    #[constructor]
    pub fn constructor(&mut self, default_value: U256) {
        // Use tx_origin instead of msg_sender because we use a factory contract in deployment.
        let owner = self.vm().tx_origin();
        self.ownable.initialize(owner);
        self.default_value.set(default_value);
    }

    pub fn owner(&self) -> Address {
        self.ownable.owner()
    }

    pub fn default_value(&self) -> U256 {
        self.default_value.get()
    }

    pub fn is_registered(&self, user: Address) -> bool {
        self.entries.get(user).registered.get()
    }

    /// Zero for addresses that were never registered.
    pub fn value_of(&self, user: Address) -> U256 {
        self.entries.get(user).value.get()
    }

    /// Returns `(registered, value)` in one call.
    pub fn entry_of(&self, user: Address) -> (bool, U256) {
        let entry = self.entries.get(user);
        (entry.registered.get(), entry.value.get())
    }

    /// Admits `target` with the default value.
    ///
    /// Fails with `NotOwner` for any caller but the owner, and with
    /// `UserAlreadyRegistered` if `target` is already a member.
    pub fn register(&mut self, target: Address) -> Result<(), RegistryWithActionsError> {
        self.ownable.only_owner(self.vm().msg_sender())?;
        if self.is_registered(target) {
            return Err(UserAlreadyRegistered { user: target }.into());
        }

        let default_value = self.default_value.get();
        {
            let mut entry = self.entries.setter(target);
            entry.registered.set(true);
            entry.value.set(default_value);
        }

        self.vm().log(Registered {
            user: target,
            default_value,
        });
        console!("registered {target} with {default_value}");
        Ok(())
    }

    /// Changes the caller's own number.
    ///
    /// Fails with `UserNotRegistered` if the caller was never admitted, and
    /// with `NewNumberMustDifferFromOldNumber` if `new_value` equals the
    /// stored one.
    pub fn update_value(&mut self, new_value: U256) -> Result<(), RegistryWithActionsError> {
        let caller = self.vm().msg_sender();
        let (registered, current) = self.entry_of(caller);
        if !registered {
            return Err(UserNotRegistered { user: caller }.into());
        }
        if new_value == current {
            return Err(NewNumberMustDifferFromOldNumber { number: new_value }.into());
        }

        self.entries.setter(caller).value.set(new_value);

        self.vm().log(ValueUpdated {
            user: caller,
            new_value,
        });
        console!("{caller} updated {current} -> {new_value}");
        Ok(())
    }
}
