//! CLI tool for deploying and interacting with the dividend distribution contracts.

use fractional_dividends::distributor::DividendDistributor;
use fractional_dividends::registry::DistributorRegistry;
use fractional_dividends::token::ShareToken;
use odra::casper_types::{U256, U512};
use odra::host::HostEnv;
use odra::prelude::{Address, Addressable};
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};

/// Share units minted for a freshly fractionalized asset
const TOTAL_SUPPLY: u64 = 1_000_000;

/// Deploys the share token.
pub struct ShareTokenDeployScript;

impl DeployScript for ShareTokenDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use fractional_dividends::token::ShareTokenInitArgs;

        let _token = ShareToken::load_or_deploy(
            &env,
            ShareTokenInitArgs {
                name: String::from("Fractional Shares"),
                symbol: String::from("FRAC"),
                decimals: 0,
            },
            container,
            300_000_000_000
        )?;

        Ok(())
    }
}

/// Deploys the dividend distributor.
/// Requires the share token to be deployed first.
pub struct DistributorDeployScript;

impl DeployScript for DistributorDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use fractional_dividends::distributor::dividend_distributor::DividendDistributorInitArgs;

        let token = container.contract_ref::<ShareToken>(env)?;

        let _distributor = DividendDistributor::load_or_deploy(
            &env,
            DividendDistributorInitArgs {
                balance_oracle: token.address().clone(),
                total_supply: U256::from(TOTAL_SUPPLY),
                owner: env.caller(),
            },
            container,
            500_000_000_000
        )?;

        Ok(())
    }
}

/// Deploys the distributor registry.
pub struct RegistryDeployScript;

impl DeployScript for RegistryDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use fractional_dividends::registry::distributor_registry::DistributorRegistryInitArgs;

        let _registry = DistributorRegistry::load_or_deploy(
            &env,
            DistributorRegistryInitArgs {
                owner: env.caller(),
            },
            container,
            400_000_000_000
        )?;

        Ok(())
    }
}

/// Deploys the complete system (share token + distributor + registry).
pub struct FullDeployScript;

impl DeployScript for FullDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        ShareTokenDeployScript.deploy(env, container)?;
        DistributorDeployScript.deploy(env, container)?;
        RegistryDeployScript.deploy(env, container)?;

        Ok(())
    }
}

/// Scenario to mint share units to a holder.
pub struct MintSharesScenario;

impl Scenario for MintSharesScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new("to", "Holder receiving the shares", NamedCLType::Key),
            CommandArg::new("amount", "Share units to mint", NamedCLType::U256),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut token = container.contract_ref::<ShareToken>(env)?;
        let to = args.get_single::<Address>("to")?;
        let amount = args.get_single::<U256>("amount")?;

        env.set_gas(100_000_000_000);
        token.try_mint(to, amount)?;

        println!("Minted {} shares", amount);
        Ok(())
    }
}

impl ScenarioMetadata for MintSharesScenario {
    const NAME: &'static str = "mint-shares";
    const DESCRIPTION: &'static str = "Mints share units to a holder";
}

/// Scenario to register the deployed distributor for an asset.
pub struct RegisterDistributorScenario;

impl Scenario for RegisterDistributorScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "asset",
            "Address of the fractionalized asset",
            NamedCLType::Key,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut registry = container.contract_ref::<DistributorRegistry>(env)?;
        let token = container.contract_ref::<ShareToken>(env)?;
        let distributor = container.contract_ref::<DividendDistributor>(env)?;
        let asset = args.get_single::<Address>("asset")?;

        env.set_gas(200_000_000_000);
        let count = registry.try_register_distributor(
            asset,
            token.address().clone(),
            distributor.address().clone(),
        )?;

        println!("Distributor registered ({} in total)", count);
        Ok(())
    }
}

impl ScenarioMetadata for RegisterDistributorScenario {
    const NAME: &'static str = "register-distributor";
    const DESCRIPTION: &'static str = "Registers the deployed distributor for an asset";
}

/// Scenario to deposit CSPR for all share holders.
pub struct DepositScenario;

impl Scenario for DepositScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "amount",
            "Amount of CSPR to deposit, in motes",
            NamedCLType::U512,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut distributor = container.contract_ref::<DividendDistributor>(env)?;
        let amount = args.get_single::<U512>("amount")?;

        env.set_gas(200_000_000_000);
        let accumulated = distributor.with_tokens(amount).try_deposit_native()?;

        println!("Deposited {} motes, accumulated per share is now {}", amount, accumulated);
        Ok(())
    }
}

impl ScenarioMetadata for DepositScenario {
    const NAME: &'static str = "deposit";
    const DESCRIPTION: &'static str = "Deposits CSPR rewards for all share holders";
}

/// Scenario to claim the caller's pending CSPR reward.
pub struct ClaimScenario;

impl Scenario for ClaimScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        _args: Args
    ) -> Result<(), Error> {
        let mut distributor = container.contract_ref::<DividendDistributor>(env)?;

        env.set_gas(200_000_000_000);
        let claimed = distributor.try_claim_native()?;

        println!("Claimed {} motes", claimed);
        Ok(())
    }
}

impl ScenarioMetadata for ClaimScenario {
    const NAME: &'static str = "claim";
    const DESCRIPTION: &'static str = "Claims the caller's pending CSPR reward";
}

/// Scenario to read an account's pending reward.
pub struct PendingScenario;

impl Scenario for PendingScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "account",
            "Holder to query",
            NamedCLType::Key,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let distributor = container.contract_ref::<DividendDistributor>(env)?;
        let account = args.get_single::<Address>("account")?;

        let balance = distributor.try_holder_balance(account)?;
        let pending = distributor.try_pending_reward(account)?;

        println!("Shares: {}", balance);
        println!("Pending reward: {} motes", pending);
        Ok(())
    }
}

impl ScenarioMetadata for PendingScenario {
    const NAME: &'static str = "pending";
    const DESCRIPTION: &'static str = "Shows an account's shares and pending reward";
}

/// Scenario to change the deposit denominator.
pub struct UpdateSupplyScenario;

impl Scenario for UpdateSupplyScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "new_supply",
            "Total share supply used for future deposits",
            NamedCLType::U256,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut distributor = container.contract_ref::<DividendDistributor>(env)?;
        let new_supply = args.get_single::<U256>("new_supply")?;

        env.set_gas(100_000_000_000);
        distributor.try_update_total_supply(new_supply)?;

        println!("Total supply set to {}", new_supply);
        Ok(())
    }
}

impl ScenarioMetadata for UpdateSupplyScenario {
    const NAME: &'static str = "update-supply";
    const DESCRIPTION: &'static str = "Updates the total supply used for future deposits";
}

/// Scenario to pause or unpause deposits and claims.
pub struct SetPausedScenario;

impl Scenario for SetPausedScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "paused",
            "true to pause, false to resume",
            NamedCLType::Bool,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut distributor = container.contract_ref::<DividendDistributor>(env)?;
        let paused = args.get_single::<bool>("paused")?;

        env.set_gas(100_000_000_000);
        distributor.try_set_paused(paused)?;

        println!("Paused: {}", paused);
        Ok(())
    }
}

impl ScenarioMetadata for SetPausedScenario {
    const NAME: &'static str = "set-paused";
    const DESCRIPTION: &'static str = "Pauses or resumes deposits and claims";
}

/// Scenario to flag a CEP-18 token as a payout token.
pub struct EnablePayoutTokenScenario;

impl Scenario for EnablePayoutTokenScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new("token", "Address of the CEP-18 token", NamedCLType::Key),
            CommandArg::new("enabled", "Eligibility flag", NamedCLType::Bool),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut distributor = container.contract_ref::<DividendDistributor>(env)?;
        let token = args.get_single::<Address>("token")?;
        let enabled = args.get_single::<bool>("enabled")?;

        env.set_gas(100_000_000_000);
        distributor.try_set_payout_token(token, enabled)?;

        println!("Payout token updated");
        Ok(())
    }
}

impl ScenarioMetadata for EnablePayoutTokenScenario {
    const NAME: &'static str = "enable-payout-token";
    const DESCRIPTION: &'static str = "Enables or disables a CEP-18 payout token";
}

/// Scenario to print the distributor's accounting snapshot.
pub struct StatsScenario;

impl Scenario for StatsScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        _args: Args
    ) -> Result<(), Error> {
        let distributor = container.contract_ref::<DividendDistributor>(env)?;
        let stats = distributor.try_reward_stats()?;

        println!("Accumulated per share: {}", stats.accumulated_per_share);
        println!("Total distributed: {} motes", stats.total_distributed);
        println!("Total claimed: {} motes", stats.total_claimed);
        println!("Total supply: {}", stats.total_supply);
        println!("Recorded dust: {} motes", stats.recorded_dust);
        println!("Contract balance: {} motes", stats.native_balance);
        println!("Paused: {}", stats.paused);
        Ok(())
    }
}

impl ScenarioMetadata for StatsScenario {
    const NAME: &'static str = "stats";
    const DESCRIPTION: &'static str = "Prints the distributor's accounting snapshot";
}

/// Main function to run the CLI tool.
pub fn main() {
    OdraCli::new()
        .about("CLI tool for fractional dividend distribution contracts")
        // Deploy scripts
        .deploy(ShareTokenDeployScript)
        .deploy(DistributorDeployScript)
        .deploy(RegistryDeployScript)
        .deploy(FullDeployScript)
        // Contract references
        .contract::<ShareToken>()
        .contract::<DividendDistributor>()
        .contract::<DistributorRegistry>()
        // Scenarios
        .scenario(MintSharesScenario)
        .scenario(RegisterDistributorScenario)
        .scenario(DepositScenario)
        .scenario(ClaimScenario)
        .scenario(PendingScenario)
        .scenario(UpdateSupplyScenario)
        .scenario(SetPausedScenario)
        .scenario(EnablePayoutTokenScenario)
        .scenario(StatsScenario)
        .build()
        .run();
}
