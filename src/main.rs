use allergy_guard::{cli, config, error, lookup, store};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use store::RiskTableStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Add { allergen, tier } => {
            let store = RiskTableStore::new(&config);
            store.upsert(&allergen, tier).await?;
            println!("알레르기 정보가 추가되었습니다! ({} → {})", allergen, tier);
        }

        Commands::Delete { allergen } => {
            let store = RiskTableStore::new(&config);
            store.delete(&allergen).await?;
            println!("{} 항목이 삭제되었습니다!", allergen);
        }

        Commands::List => {
            let store = RiskTableStore::new(&config);
            // 갱신 플래그 없이 매번 저장소에서 새로 계산한다
            let grouped = store.list_grouped().await?;

            for (tier, records) in &grouped {
                println!("### {}", tier);
                if records.is_empty() {
                    println!("해당 그룹에 저장된 알레르기 정보가 없습니다.");
                } else {
                    for record in records {
                        println!(" - {}", record.allergen);
                    }
                }
                println!();
            }
        }

        Commands::Lookup { quiet } => {
            lookup::run_loop(&config, quiet).await?;
        }
    }

    Ok(())
}
