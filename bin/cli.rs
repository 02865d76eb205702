use wenft_launchpad::launchpad::{
    LaunchpadSetConfig, WenftLaunchpadFactory, WenftLaunchpadFactoryInitArgs,
};
use wenft_launchpad::nft::{
    LaunchpadSaleFactory, NftCollectionFactory, NftContractFactory, NftContractFactoryInitArgs,
    PayoutVaultFactory,
};
use odra::prelude::{Address, Addressable};
use odra::host::{HostEnv, NoArgs};
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};
use std::fs::File;
use std::io::Write;

/// Deploys the contract factory and the launchpad factory, then links them
pub struct DeployLaunchpadScript;

impl DeployScript for DeployLaunchpadScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        // 1. Deploy child factories
        println!("==> Deploying child factories");
        let collection_factory = NftCollectionFactory::load_or_deploy(
            &env,
            NoArgs,
            container,
            750_000_000_000
        )?;
        println!("   # NftCollectionFactory: {:?} #", collection_factory.address());

        let sale_factory = LaunchpadSaleFactory::load_or_deploy(
            &env,
            NoArgs,
            container,
            750_000_000_000
        )?;
        println!("   # LaunchpadSaleFactory: {:?} #", sale_factory.address());

        let vault_factory = PayoutVaultFactory::load_or_deploy(
            &env,
            NoArgs,
            container,
            750_000_000_000
        )?;
        println!("   # PayoutVaultFactory: {:?} #", vault_factory.address());

        // 2. Deploy NftContractFactory
        println!("==> Deploying NftContractFactory");
        let nft_contract_factory = NftContractFactory::load_or_deploy(
            &env,
            NftContractFactoryInitArgs {
                collection_factory: collection_factory.address().clone(),
                sale_factory: sale_factory.address().clone(),
                vault_factory: vault_factory.address().clone(),
            },
            container,
            500_000_000_000
        )?;
        println!("   # NftContractFactory: {:?} #", nft_contract_factory.address());

        // 3. Deploy WenftLaunchpadFactory
        println!("==> Deploying WenftLaunchpadFactory");
        let mut launchpad_factory = WenftLaunchpadFactory::load_or_deploy(
            &env,
            WenftLaunchpadFactoryInitArgs {
                factory_contract: None,
            },
            container,
            500_000_000_000
        )?;
        println!("   # WenftLaunchpadFactory: {:?} #", launchpad_factory.address());

        // 4. Link the contract factory
        env.set_gas(50_000_000_000);
        launchpad_factory.try_set_factory_contract(nft_contract_factory.address().clone())?;
        println!("   #    setFactoryContract: {:?} #", nft_contract_factory.address());

        // Contracts are deployed by now; keep the printed addresses usable.
        if let Err(err) = write_env_file(container) {
            eprintln!("ERROR: scripts/deploy.out.env was NOT written: {}", err);
            eprintln!("ERROR: copy the addresses printed above by hand");
        }

        Ok(())
    }
}

/// Scenario to generate a new launchpad set.
pub struct GenerateLaunchpadSetScenario;

impl Scenario for GenerateLaunchpadSetScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new("name", "Collection name", NamedCLType::String),
            CommandArg::new("symbol", "Collection symbol", NamedCLType::String),
            CommandArg::new("base_uri", "Content URI template", NamedCLType::String),
            CommandArg::new("mint_enabled", "Open minting right away", NamedCLType::Bool),
            CommandArg::new("beneficiary", "Receiver of the proceeds", NamedCLType::Key),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut launchpad = container.contract_ref::<WenftLaunchpadFactory>(env)?;
        let name = args.get_single::<String>("name")?;
        let symbol = args.get_single::<String>("symbol")?;
        let base_uri = args.get_single::<String>("base_uri")?;
        let mint_enabled = args.get_single::<bool>("mint_enabled")?;
        let beneficiary = args.get_single::<Address>("beneficiary")?;

        let config = LaunchpadSetConfig::new(&name, &symbol, &base_uri, beneficiary)
            .with_mint_enabled(mint_enabled);

        env.set_gas(1_500_000_000_000); // three contract deployments
        let key = launchpad.try_generate_launchpad_set(config)?;
        let (collection, sale, vault) = launchpad.try_get_launchpad_set(key)?;

        println!("Launchpad set created: {}", to_hex(&key));
        println!("  collection: {:?}", collection);
        println!("  sale:       {:?}", sale);
        println!("  vault:      {:?}", vault);
        Ok(())
    }
}

impl ScenarioMetadata for GenerateLaunchpadSetScenario {
    const NAME: &'static str = "generate-launchpad-set";
    const DESCRIPTION: &'static str = "Creates a new launchpad set (collection, sale and vault)";
}

/// Scenario to print the launchpad set created at a given position.
pub struct GetLaunchpadSetScenario;

impl Scenario for GetLaunchpadSetScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "index",
            "Creation index of the launchpad set",
            NamedCLType::U64,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let launchpad = container.contract_ref::<WenftLaunchpadFactory>(env)?;
        let index = args.get_single::<u64>("index")?;

        match launchpad.launchpad_key_at(index) {
            Some(key) => {
                let (collection, sale, vault) = launchpad.try_get_launchpad_set(key)?;
                println!("Launchpad set #{}: {}", index, to_hex(&key));
                println!("  collection: {:?}", collection);
                println!("  sale:       {:?}", sale);
                println!("  vault:      {:?}", vault);
            }
            None => println!(
                "No launchpad set at index {} ({} created)",
                index,
                launchpad.launchpad_set_count()
            ),
        }
        Ok(())
    }
}

impl ScenarioMetadata for GetLaunchpadSetScenario {
    const NAME: &'static str = "get-launchpad-set";
    const DESCRIPTION: &'static str = "Prints the members of a launchpad set";
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn write_env_file(container: &DeployedContractsContainer) -> std::io::Result<()> {
    println!("==> Generating scripts/deploy.out.env");
    let chain_name = std::env::var("ODRA_CASPER_LIVENET_CHAIN_NAME")
        .or_else(|_| std::env::var("CHAIN_NAME"))
        .unwrap_or_else(|_| "casper-test".to_string());

    std::fs::create_dir_all("scripts")?;
    let mut file = File::create("scripts/deploy.out.env")?;
    writeln!(file, "CHAIN_NAME={}", chain_name)?;

    let mappings = vec![
        ("NftCollectionFactory", "NFT_COLLECTION_FACTORY"),
        ("LaunchpadSaleFactory", "LAUNCHPAD_SALE_FACTORY"),
        ("PayoutVaultFactory", "PAYOUT_VAULT_FACTORY"),
        ("NftContractFactory", "NFT_CONTRACT_FACTORY"),
        ("WenftLaunchpadFactory", "WENFT_LAUNCHPAD_FACTORY"),
    ];

    for (contract_name, env_prefix) in mappings {
        if let Some(address) = container.address_by_name(contract_name) {
            // format: Contract(ContractPackageHash(hex))
            let hex_part = address
                .to_string()
                .replace("Contract(ContractPackageHash(", "")
                .replace("))", "");
            writeln!(file, "{}_PACKAGE_HASH=hash-{}", env_prefix, hex_part)?;
        }
    }
    Ok(())
}

pub fn main() {
    OdraCli::new()
        .about("CLI tool for WeNFT launchpad contracts")
        // Deploy scripts
        .deploy(DeployLaunchpadScript)
        // Contract references
        .contract::<NftCollectionFactory>()
        .contract::<LaunchpadSaleFactory>()
        .contract::<PayoutVaultFactory>()
        .contract::<NftContractFactory>()
        .contract::<WenftLaunchpadFactory>()
        // Scenarios
        .scenario(GenerateLaunchpadSetScenario)
        .scenario(GetLaunchpadSetScenario)
        .build()
        .run();
}
