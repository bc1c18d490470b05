use adoul_cms::{cli, commands, config, error, file_store, logging};
use adoul_cms_common::{Fabric, FabricDraft, QuoteRequest, RecordStore, SharedPassword, Work, WorkDraft, messages};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use file_store::FileStore;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("✖ {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load_or_default();

    let store_path = match cli.store {
        Some(path) => path,
        None => config.store_path()?,
    };
    log::debug!("storage: {}", store_path.display());
    let store = RecordStore::new(FileStore::new(store_path));

    match cli.command {
        Commands::Fabrics => {
            println!("{}", commands::show_catalog::<Fabric, _>(&store));
        }

        Commands::Works => {
            println!("{}", commands::show_catalog::<Work, _>(&store));
        }

        Commands::Options => {
            println!("{}", commands::show_fabric_options(&store));
        }

        Commands::AddFabric { name, code, fabric_type, notes, image, password } => {
            commands::authorize(SharedPassword::new(config.admin_password()), password)?;

            let draft = FabricDraft { name, code, fabric_type, notes };
            let fabric = commands::add_record(&store, draft, image).await?;
            println!("✔ {} (id: {})", messages::FABRIC_ADDED, fabric.id);
        }

        Commands::AddWork { title, description, image, password } => {
            commands::authorize(SharedPassword::new(config.admin_password()), password)?;

            let draft = WorkDraft { title, description };
            let work = commands::add_record(&store, draft, image).await?;
            println!("✔ {} (id: {})", messages::WORK_ADDED, work.id);
        }

        Commands::Quote { item, fabric, dimensions, city, phone } => {
            let request = QuoteRequest { item, fabric, dimensions, city, phone };
            println!("{}", commands::quote(request)?);
        }

        Commands::Config { set_password, show } => {
            let mut config = config;

            if let Some(password) = set_password {
                config.set_admin_password(password)?;
                println!("✔ 管理パスワードを設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  ストレージ: {}", config.store_path()?.display());
                println!(
                    "  管理パスワード: {}",
                    if config.admin_password.is_some() { "設定済み" } else { "既定値" }
                );
            }
        }
    }

    Ok(())
}
