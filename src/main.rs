use clap::Parser;
use hospital_queue::utils::{logger, validation::Validate};
use hospital_queue::{CliConfig, DepartmentRegistry, FormSession};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置 (日誌格式取決於配置，所以先於日誌初始化)
    let config = match cli.load_app_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 驗證配置 (logging.level 必須合法才能建立日誌過濾器)
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 初始化日誌 (--verbose 已經把 logging.level 改成 debug)
    if config.json_logs() {
        logger::init_json_logger(&config.logging.level);
    } else {
        logger::init_cli_logger(&config.logging.level);
    }

    tracing::info!("🏥 Starting hospital-queue");
    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("App config: {:?}", config);

    let mut form = FormSession::new(DepartmentRegistry::with_name(config.hospital.name.clone()));
    let mut stdout = tokio::io::stdout();

    let handled = match &cli.script {
        Some(path) => {
            tracing::info!("📜 Running script {}", path.display());
            let file = tokio::fs::File::open(path).await?;
            form.run(BufReader::new(file), &mut stdout, false).await?
        }
        None => {
            println!("Hospital Queue Management System");
            println!("Type 'help' for commands.");
            form.run(BufReader::new(tokio::io::stdin()), &mut stdout, true).await?
        }
    };

    tracing::info!(
        "✅ Session closed after {} commands, {} patients still waiting",
        handled,
        form.registry().total_waiting()
    );
    Ok(())
}
