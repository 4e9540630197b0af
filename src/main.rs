//! sc - command line client for the SafetyCulture inspection platform

use clap::Parser;

use safetyculture::cli::{
    self, ActionCommands, AuditCommands, Cli, Commands, ExportProfileCommands, GlobalOptions,
    GroupCommands, ResponseSetCommands, TemplateCommands, UserCommands,
};
use safetyculture::error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("sc version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Template(cmd) => match cmd {
            TemplateCommands::List {
                modified_after,
                modified_before,
            } => {
                cli::template::list(&opts, modified_after.as_deref(), modified_before.as_deref())
                    .await
            }
        },
        Commands::Audit(cmd) => match cmd {
            AuditCommands::List {
                template,
                modified_after,
                completed,
            } => cli::audit::list(&opts, &template, modified_after.as_deref(), completed).await,
            AuditCommands::Get { audit_id } => cli::audit::get(&opts, &audit_id).await,
            AuditCommands::WebReport { audit_id } => cli::audit::web_report(&opts, &audit_id).await,
            AuditCommands::Media {
                audit_id,
                media_id,
                output_dir,
            } => cli::audit::media(&opts, &audit_id, &media_id, &output_dir).await,
        },
        Commands::Export(args) => cli::export::run(&opts, &args).await,
        Commands::ExportProfile(cmd) => match cmd {
            ExportProfileCommands::List { template } => {
                cli::export_profile::list(&opts, template.as_deref()).await
            }
            ExportProfileCommands::Get { profile_id } => {
                cli::export_profile::get(&opts, &profile_id).await
            }
        },
        Commands::Action(cmd) => match cmd {
            ActionCommands::List { modified_after } => {
                cli::action::list(&opts, &modified_after).await
            }
        },
        Commands::ResponseSet(cmd) => match cmd {
            ResponseSetCommands::List => cli::response_set::list(&opts).await,
            ResponseSetCommands::Get { response_set_id } => {
                cli::response_set::get(&opts, &response_set_id).await
            }
            ResponseSetCommands::Create { name, response } => {
                cli::response_set::create(&opts, &name, &response).await
            }
            ResponseSetCommands::AddResponse {
                response_set_id,
                label,
            } => cli::response_set::add_response(&opts, &response_set_id, &label).await,
            ResponseSetCommands::DeleteResponse {
                response_set_id,
                response_id,
            } => cli::response_set::delete_response(&opts, &response_set_id, &response_id).await,
        },
        Commands::Group(cmd) => match cmd {
            GroupCommands::List => cli::group::list(&opts).await,
            GroupCommands::Users { group_id } => cli::group::users(&opts, &group_id).await,
        },
        Commands::Org => cli::group::org(&opts).await,
        Commands::User(cmd) => match cmd {
            UserCommands::Add { data } => cli::user::add(&opts, &data).await,
            UserCommands::AddToGroup { group_id, data } => {
                cli::user::add_to_group(&opts, &group_id, &data).await
            }
            UserCommands::Update { user_id, data } => {
                cli::user::update(&opts, &user_id, &data).await
            }
            UserCommands::Remove { role_id, user_id } => {
                cli::user::remove(&opts, &role_id, &user_id).await
            }
        },
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
