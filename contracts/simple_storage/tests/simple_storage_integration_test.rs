// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

#[cfg(feature = "integration-tests")]
mod integration_test {
    use alloy::{
        primitives::{address, U256},
        signers::local::PrivateKeySigner,
        sol,
    };
    use eyre::{bail, Result};
    use stylus_tools::devnet::{Node, DEVNET_PRIVATE_KEY};

    sol! {
        #[sol(rpc)]
        interface ISimpleStorage {
            function owner() external view returns (address);
            function retrieve() external view returns (uint256);
            function store(uint256 new_value) external;
            error NotOwner();
        }
    }

    const EXPECTED_ABI: &str = "\
interface ISimpleStorage {
    function owner() external view returns (address);

    function retrieve() external view returns (uint256);

    function store(uint256 new_value) external;

    error NotOwner();
}";

    #[tokio::test]
    async fn simple_storage() -> Result<()> {
        let exporter = stylus_tools::Exporter::builder().build();
        assert_eq!(exporter.export_abi()?, EXPECTED_ABI);

        let devnode = Node::new().await?;
        let rpc = devnode.rpc();
        println!("Deploying contract to Nitro ({rpc})...");
        let (address, _, _) = stylus_tools::Deployer::builder()
            .rpc(rpc)
            .constructor_args(Vec::<String>::new())
            .build()
            .deploy()?;
        println!("Deployed contract to {address}");
        let provider = devnode.create_provider().await?;
        let contract = ISimpleStorage::ISimpleStorageInstance::new(address, provider);

        let deployer = DEVNET_PRIVATE_KEY.parse::<PrivateKeySigner>()?.address();
        assert_eq!(contract.owner().call().await?, deployer);
        assert_eq!(contract.retrieve().call().await?, U256::ZERO);

        let estimate = contract.store(U256::from(7)).estimate_gas().await?;
        contract
            .store(U256::from(7))
            .gas((11 * estimate) / 10)
            .send()
            .await?
            .watch()
            .await?;
        assert_eq!(contract.retrieve().call().await?, U256::from(7));

        let stranger = address!("0xfafafafafafafafafafafafafafafafafafafafa");
        let Err(err) = contract.store(U256::from(8)).from(stranger).call().await else {
            bail!("store from a non-owner should revert");
        };
        let err = err.as_decoded_interface_error::<ISimpleStorage::ISimpleStorageErrors>();
        assert!(matches!(
            err,
            Some(ISimpleStorage::ISimpleStorageErrors::NotOwner(..))
        ));
        assert_eq!(contract.retrieve().call().await?, U256::from(7));

        Ok(())
    }
}
