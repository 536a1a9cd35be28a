pub mod arguments;
pub mod config_file;
pub mod record;
pub mod scripts;

use {
    arguments::{Arguments, Command},
    scripts::{Session, trex::Roles},
    serde::Serialize,
};

pub async fn run(args: Arguments) -> anyhow::Result<()> {
    match args.command {
        Command::Tokens(args) => {
            let session = Session::connect(&args.deploy).await?;
            print(&scripts::tokens::run(&session, &args.names).await?)
        }
        Command::Trex(args) => {
            let session = Session::connect(&args.deploy).await?;
            let roles = Roles::resolve(&args, session.deployer, session.secondary);
            let (record, _) = scripts::trex::run(
                &session,
                roles,
                args.public_deployment,
                &args.config_factory_path,
            )
            .await?;
            print(&record)
        }
        Command::TokenInfo(args) => print(&scripts::token_info::run(&args).await?),
        Command::ListInstances(args) => print(&scripts::list_instances::run(&args).await?),
        Command::ClaimTopics => print(&scripts::claim_topics::run()),
    }
}

/// Results go to stdout as JSON so they can be piped into other tools. Logs
/// stay separate.
fn print(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
