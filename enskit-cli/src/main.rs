//! enskit CLI
//!
//! Command-line interface for reading and writing ENS records.

use std::path::PathBuf;

use alloy::primitives::{Address, B256};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use enskit_contracts::ChainContracts;
use enskit_core::{
    get_name_type, labelhash, namehash, normalize, AbiEncodeAs, ContractType, Expiry, Fuses,
    SimpleTransactionRequest, DEFAULT_ETH_RPC_URL, MAINNET_CHAIN_ID,
};
use enskit_public::EnsPublicClient;
use enskit_rpc::{RpcClient, RpcConfig};
use enskit_wallet::{
    encode_abi, random_secret, CommitName, CreateSubname, CreateSubnameParams, DeleteSubname,
    DeleteSubnameParams, EncodeAbiInput, EnsWalletClient, EnsWriteFunction, RecordOptions,
    RegistrationParameters, SetAbiRecord, SetAbiRecordParams, TextRecord,
};

/// enskit - Ethereum Name Service client
#[derive(Parser)]
#[command(name = "enskit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Ethereum RPC URL
    #[arg(long, global = true, env = "ETH_RPC_URL", default_value = DEFAULT_ETH_RPC_URL)]
    rpc_url: String,

    /// Chain id (skips eth_chainId; also selects contracts for unsent transactions)
    #[arg(long, global = true, env = "ENS_CHAIN_ID")]
    chain_id: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

/// How a write command delivers its transaction.
#[derive(Args, Debug)]
struct SendArgs {
    /// Submit the transaction instead of printing it
    #[arg(long)]
    send: bool,

    /// Account to send from (must be unlocked on the node)
    #[arg(long, env = "ENS_FROM", required_if_eq("send", "true"))]
    from: Option<Address>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the namehash of a name
    Namehash {
        /// ENS name
        name: String,
    },

    /// Classify a name (root, tld, eth-2ld, ...)
    NameType {
        /// ENS name
        name: String,
    },

    /// Read the ABI record of a name
    Abi {
        /// ENS name
        name: String,
    },

    /// Read the fuses of a wrapped name
    Fuses {
        /// ENS name
        name: String,
    },

    /// Find the resolver of a name
    Resolver {
        /// ENS name
        name: String,
    },

    /// Look up the primary name of an address
    Name {
        /// Ethereum address
        address: Address,
    },

    /// Delete a subname
    DeleteSubname {
        /// Subname to delete
        name: String,
        /// Contract holding the subname (registry | nameWrapper)
        #[arg(long, default_value = "nameWrapper")]
        contract: ContractType,
        /// Delete as the owner of the subname rather than of its parent
        #[arg(long)]
        as_owner: bool,
        #[command(flatten)]
        tx: SendArgs,
    },

    /// Create a subname
    CreateSubname {
        /// Subname to create
        name: String,
        /// Owner of the new subname
        #[arg(long)]
        owner: Address,
        /// Contract holding the parent (registry | nameWrapper)
        #[arg(long, default_value = "nameWrapper")]
        contract: ContractType,
        /// Resolver to set (defaults to the PublicResolver)
        #[arg(long)]
        resolver: Option<Address>,
        /// Expiry: unix seconds or RFC 3339 (NameWrapper only)
        #[arg(long)]
        expiry: Option<String>,
        /// Fuses to burn, e.g. "cannotUnwrap|cannotTransfer" (NameWrapper only)
        #[arg(long)]
        fuses: Option<Fuses>,
        #[command(flatten)]
        tx: SendArgs,
    },

    /// Commit to registering a .eth name
    Commit {
        /// Name to register
        name: String,
        /// Owner of the registered name
        #[arg(long)]
        owner: Address,
        /// Registration length in seconds
        #[arg(long, default_value = "31536000")]
        duration: u64,
        /// Commitment secret (random if omitted)
        #[arg(long)]
        secret: Option<B256>,
        /// Resolver to set during registration
        #[arg(long)]
        resolver: Option<Address>,
        /// Text records to set, as key=value
        #[arg(long = "text", value_parser = parse_text_record)]
        texts: Vec<TextRecord>,
        /// Also set the owner's primary name
        #[arg(long)]
        reverse_record: bool,
        /// Owner-controlled fuses to burn
        #[arg(long)]
        fuses: Option<Fuses>,
        #[command(flatten)]
        tx: SendArgs,
    },

    /// Set or clear the ABI record of a name
    SetAbi {
        /// ENS name
        name: String,
        /// Resolver the name uses
        #[arg(long)]
        resolver: Address,
        /// File holding the ABI JSON
        #[arg(long, conflicts_with_all = ["uri", "clear"])]
        file: Option<PathBuf>,
        /// URI pointing to the ABI
        #[arg(long, conflicts_with = "clear")]
        uri: Option<String>,
        /// Storage format for --file (json | zlib | cbor)
        #[arg(long, default_value = "json")]
        encode_as: AbiEncodeAs,
        /// Clear the record
        #[arg(long)]
        clear: bool,
        #[command(flatten)]
        tx: SendArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "enskit=debug,info"
    } else {
        "enskit=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let session = Session::new(cli.rpc_url, cli.chain_id);

    match cli.command {
        Commands::Namehash { name } => cmd_namehash(&name),
        Commands::NameType { name } => cmd_name_type(&name),
        Commands::Abi { name } => cmd_abi(&session, &name).await,
        Commands::Fuses { name } => cmd_fuses(&session, &name).await,
        Commands::Resolver { name } => cmd_resolver(&session, &name).await,
        Commands::Name { address } => cmd_name(&session, address).await,
        Commands::DeleteSubname {
            name,
            contract,
            as_owner,
            tx,
        } => {
            let params = DeleteSubnameParams {
                name: normalize(&name)?,
                contract,
                as_owner,
            };
            session.write::<DeleteSubname>(&params, &tx).await
        }
        Commands::CreateSubname {
            name,
            owner,
            contract,
            resolver,
            expiry,
            fuses,
            tx,
        } => {
            let params = CreateSubnameParams {
                name: normalize(&name)?,
                owner,
                contract,
                resolver_address: resolver,
                expiry: expiry.map(Expiry::Text),
                fuses,
            };
            session.write::<CreateSubname>(&params, &tx).await
        }
        Commands::Commit {
            name,
            owner,
            duration,
            secret,
            resolver,
            texts,
            reverse_record,
            fuses,
            tx,
        } => {
            let secret = match secret {
                Some(secret) => secret,
                None => {
                    let secret = random_secret();
                    println!("{} {}", "🔐 Secret:".yellow().bold(), secret);
                    println!("   Keep it: registration needs the same secret.");
                    secret
                }
            };
            let records = (!texts.is_empty()).then(|| RecordOptions {
                texts,
                ..Default::default()
            });
            let params = RegistrationParameters {
                name: normalize(&name)?,
                owner,
                duration,
                secret,
                resolver_address: resolver,
                records,
                reverse_record,
                fuses,
            };
            session.write::<CommitName>(&params, &tx).await
        }
        Commands::SetAbi {
            name,
            resolver,
            file,
            uri,
            encode_as,
            clear,
            tx,
        } => {
            let encoded_abi = match (file, uri, clear) {
                (_, _, true) => None,
                (Some(path), None, false) => {
                    let raw = std::fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    let data: serde_json::Value =
                        serde_json::from_str(&raw).context("ABI file is not valid JSON")?;
                    Some(encode_abi(&EncodeAbiInput { encode_as, data })?)
                }
                (None, Some(uri), false) => Some(encode_abi(&EncodeAbiInput {
                    encode_as: AbiEncodeAs::Uri,
                    data: serde_json::Value::String(uri),
                })?),
                _ => bail!("Pass one of --file, --uri or --clear"),
            };
            let params = SetAbiRecordParams {
                name: normalize(&name)?,
                encoded_abi,
                resolver_address: resolver,
            };
            session.write::<SetAbiRecord>(&params, &tx).await
        }
    }
}

/// Connection settings shared by every command.
struct Session {
    rpc_url: String,
    chain_id: Option<u64>,
}

impl Session {
    fn new(rpc_url: String, chain_id: Option<u64>) -> Self {
        Self { rpc_url, chain_id }
    }

    fn rpc_client(&self) -> Result<RpcClient> {
        let mut config = RpcConfig::new(self.rpc_url.clone());
        if let Some(chain_id) = self.chain_id {
            config = config.with_chain_id(chain_id);
        }
        debug!(rpc_url = %config.rpc_url, "Using RPC endpoint");
        RpcClient::with_config(config).context("Invalid RPC configuration")
    }

    async fn public_client(&self) -> Result<EnsPublicClient<RpcClient>> {
        EnsPublicClient::connect(self.rpc_client()?)
            .await
            .context("Failed to connect to RPC")
    }

    /// Builds a write against `--chain-id` (mainnet if unset) without touching the node.
    fn unsent_request<F: EnsWriteFunction>(
        &self,
        params: &F::Params,
    ) -> Result<SimpleTransactionRequest> {
        let contracts = ChainContracts::for_chain(self.chain_id.unwrap_or(MAINNET_CHAIN_ID))?;
        Ok(F::make_function_data(&contracts, params)?)
    }

    /// Prints the transaction, or sends it when `--send` is given.
    async fn write<F: EnsWriteFunction>(&self, params: &F::Params, tx: &SendArgs) -> Result<()> {
        if !tx.send {
            print_transaction(&self.unsent_request::<F>(params)?)?;
            return Ok(());
        }

        let Some(from) = tx.from else {
            bail!("--send requires --from");
        };

        let wallet = EnsWalletClient::connect(self.rpc_client()?, from)
            .await
            .context("Failed to connect to RPC")?;
        let hash = wallet
            .send::<F>(params)
            .await
            .context("Failed to send transaction")?;

        println!("{} {}", "✅ Transaction sent:".green().bold(), hash);
        Ok(())
    }
}

fn print_transaction(request: &SimpleTransactionRequest) -> Result<()> {
    println!("{}", "📝 Transaction (not sent):".cyan().bold());
    println!("{}", serde_json::to_string_pretty(&request.to_json())?);
    Ok(())
}

fn parse_text_record(s: &str) -> std::result::Result<TextRecord, String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    Ok(TextRecord {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Print namehash and labelhash
fn cmd_namehash(name: &str) -> Result<()> {
    let normalized = normalize(name)?;
    let first_label = normalized.split('.').next().unwrap_or_default();

    println!("{} {}", "Name:".dimmed(), normalized);
    println!("{} {}", "Namehash:".dimmed(), namehash(&normalized));
    println!("{} {}", "Labelhash:".dimmed(), labelhash(first_label));
    Ok(())
}

/// Print name type
fn cmd_name_type(name: &str) -> Result<()> {
    let normalized = if name.is_empty() {
        String::new()
    } else {
        normalize(name)?
    };
    println!("{}", get_name_type(&normalized));
    Ok(())
}

/// Read ABI record
async fn cmd_abi(session: &Session, name: &str) -> Result<()> {
    println!("{} {}", "🔍 ABI record for:".cyan().bold(), name);

    let client = session.public_client().await?;
    match client
        .get_abi_record(name)
        .await
        .context("Failed to read ABI record")?
    {
        Some(abi) => println!("{}", serde_json::to_string_pretty(&abi)?),
        None => println!("{}", "No ABI record found".yellow()),
    }
    Ok(())
}

/// Read fuses
async fn cmd_fuses(session: &Session, name: &str) -> Result<()> {
    println!("{} {}", "🔍 Fuses for:".cyan().bold(), name);

    let client = session.public_client().await?;
    let Some(fuses) = client.get_fuses(name).await.context("Failed to read fuses")? else {
        println!("{}", "Name is not wrapped or fuses could not be read".yellow());
        return Ok(());
    };

    println!("   {} {}", "Raw:".dimmed(), fuses.raw);
    for (fuse, burned) in &fuses.fuses {
        let mark = if *burned { "burned".red() } else { "-".dimmed() };
        println!("   {fuse:<24} {mark}");
    }
    println!("   {} {:?}", "Vulnerability:".dimmed(), fuses.vulnerability);
    Ok(())
}

/// Find resolver
async fn cmd_resolver(session: &Session, name: &str) -> Result<()> {
    let client = session.public_client().await?;
    match client
        .get_resolver(name)
        .await
        .context("Failed to find resolver")?
    {
        Some(resolver) => println!("{} {}", "✅ Resolver:".green().bold(), resolver),
        None => println!("{}", "No resolver set".yellow()),
    }
    Ok(())
}

/// Primary name lookup
async fn cmd_name(session: &Session, address: Address) -> Result<()> {
    let client = session.public_client().await?;
    let Some(result) = client
        .get_name(address)
        .await
        .context("Failed to read primary name")?
    else {
        println!("{}", "No primary name set".yellow());
        return Ok(());
    };

    println!("{} {}", "✅ Primary name:".green().bold(), result.name);
    if !result.is_match {
        println!(
            "{}",
            "⚠️  The name does not resolve back to this address".red().bold()
        );
    }
    println!("   {} {}", "Resolver:".dimmed(), result.resolver_address);
    println!(
        "   {} {}",
        "Reverse resolver:".dimmed(),
        result.reverse_resolver_address
    );
    Ok(())
}
