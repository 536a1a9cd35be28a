use {
    crate::config_file,
    alloy_primitives::Address,
    entity_api::Filter,
    ethrpc::arguments::{display_option, display_secret_option},
    std::{
        fmt::{self, Display, Formatter},
        path::PathBuf,
    },
    url::Url,
};

#[derive(clap::Parser)]
#[clap(name = "deployer", about = "Deploys token contracts and writes their configuration")]
pub struct Arguments {
    #[clap(
        long,
        env,
        default_value = "warn,deployer=info,contracts=info,ethrpc=info,entity_api=info"
    )]
    pub log_filter: String,

    /// Emit log lines as JSON objects.
    #[clap(long, env)]
    pub use_json_logs: bool,

    #[clap(subcommand)]
    pub command: Command,
}

impl Arguments {
    /// Logs go to stderr so that stdout only carries the command's JSON
    /// result.
    pub fn observe_config(&self) -> observe::Config {
        observe::Config::new(&self.log_filter, observe::Output::Stderr, self.use_json_logs)
    }
}

#[derive(clap::Subcommand)]
pub enum Command {
    /// Deploys contracts whose constructors take no arguments, one after the
    /// other, and logs their addresses.
    Tokens(TokensArguments),
    /// Deploys the T-REX security token suite and writes the factory
    /// configuration file.
    Trex(TrexArguments),
    /// Reads the name and optionally a balance of a deployed token.
    TokenInfo(TokenInfoArguments),
    /// Lists entity instances matching a filter.
    ListInstances(ListInstancesArguments),
    /// Prints the claim topics used by the identity registry.
    ClaimTopics,
}

#[derive(clap::Parser)]
#[group(skip)]
pub struct DeployArguments {
    #[clap(flatten)]
    pub chain: ethrpc::Arguments,

    /// Directory holding the compiled contract artifacts.
    #[clap(long, env, default_value = "artifacts")]
    pub artifacts_dir: PathBuf,
}

#[derive(clap::Parser)]
pub struct TokensArguments {
    #[clap(flatten)]
    pub deploy: DeployArguments,

    /// Contract names to deploy, in order.
    #[clap(
        long,
        env = "TOKEN_NAMES",
        value_delimiter = ',',
        default_value = "GOLD,SILVER,RARE"
    )]
    pub names: Vec<String>,
}

#[derive(clap::Parser)]
pub struct TrexArguments {
    #[clap(flatten)]
    pub deploy: DeployArguments,

    /// Where the factory configuration is written.
    #[clap(long, env, default_value = config_file::FILE_NAME)]
    pub config_factory_path: PathBuf,

    /// Identity registry agent. Defaults to the deployer.
    #[clap(long, env = "TREX_IR_AGENT")]
    pub ir_agent: Option<Address>,

    /// Token agent. Defaults to the deployer.
    #[clap(long, env = "TREX_TOKEN_AGENT")]
    pub token_agent: Option<Address>,

    /// Investor account used by the frontend. Defaults to the secondary key,
    /// or the deployer if there is none.
    #[clap(long, env = "TREX_USER")]
    pub user: Option<Address>,

    /// Management key of the claim issuer. Defaults to the secondary key, or
    /// the deployer if there is none.
    #[clap(long, env = "TREX_CLAIM_ISSUER")]
    pub claim_issuer: Option<Address>,

    /// Allow anyone to deploy token suites through the gateway.
    #[clap(long, env)]
    pub public_deployment: bool,
}

#[derive(clap::Parser)]
pub struct TokenInfoArguments {
    #[clap(flatten)]
    pub chain: ethrpc::Arguments,

    /// Address of the token contract.
    #[clap(long)]
    pub token: Address,

    /// Account whose balance is read.
    #[clap(long)]
    pub holder: Option<Address>,
}

#[derive(clap::Parser)]
pub struct ListInstancesArguments {
    #[clap(flatten)]
    pub http_client: entity_api::http_client::Arguments,

    /// Base URL of the entity instance service.
    #[clap(long, env)]
    pub entity_api_url: Url,

    /// Bearer token sent with every request.
    #[clap(long, env, hide_env_values = true)]
    pub entity_api_token: Option<String>,

    #[clap(long)]
    pub schema_id: String,

    /// JSON object forwarded as the filter.
    #[clap(long, default_value = "{}", value_parser = parse_filter)]
    pub filter: Filter,

    #[clap(long)]
    pub page_size: Option<u32>,
}

fn parse_filter(value: &str) -> Result<Filter, String> {
    serde_json::from_str(value).map_err(|err| format!("filter must be a JSON object: {err}"))
}

impl Display for Arguments {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self {
            log_filter,
            use_json_logs,
            command,
        } = self;

        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "use_json_logs: {use_json_logs}")?;
        match command {
            Command::Tokens(args) => write!(f, "command: tokens\n{args}"),
            Command::Trex(args) => write!(f, "command: trex\n{args}"),
            Command::TokenInfo(args) => write!(f, "command: token-info\n{args}"),
            Command::ListInstances(args) => write!(f, "command: list-instances\n{args}"),
            Command::ClaimTopics => writeln!(f, "command: claim-topics"),
        }
    }
}

impl Display for DeployArguments {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self {
            chain,
            artifacts_dir,
        } = self;

        write!(f, "{chain}")?;
        writeln!(f, "artifacts_dir: {}", artifacts_dir.display())
    }
}

impl Display for TokensArguments {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self { deploy, names } = self;

        write!(f, "{deploy}")?;
        writeln!(f, "names: {names:?}")
    }
}

impl Display for TrexArguments {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self {
            deploy,
            config_factory_path,
            ir_agent,
            token_agent,
            user,
            claim_issuer,
            public_deployment,
        } = self;

        write!(f, "{deploy}")?;
        writeln!(f, "config_factory_path: {}", config_factory_path.display())?;
        display_option(f, "ir_agent", ir_agent)?;
        display_option(f, "token_agent", token_agent)?;
        display_option(f, "user", user)?;
        display_option(f, "claim_issuer", claim_issuer)?;
        writeln!(f, "public_deployment: {public_deployment}")
    }
}

impl Display for TokenInfoArguments {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self {
            chain,
            token,
            holder,
        } = self;

        write!(f, "{chain}")?;
        writeln!(f, "token: {token}")?;
        display_option(f, "holder", holder)
    }
}

impl Display for ListInstancesArguments {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self {
            http_client,
            entity_api_url,
            entity_api_token,
            schema_id,
            filter,
            page_size,
        } = self;

        write!(f, "{http_client}")?;
        writeln!(f, "entity_api_url: {entity_api_url}")?;
        display_secret_option(f, "entity_api_token", entity_api_token)?;
        writeln!(f, "schema_id: {schema_id}")?;
        writeln!(f, "filter: {}", serde_json::Value::Object(filter.clone()))?;
        display_option(f, "page_size", page_size)
    }
}
