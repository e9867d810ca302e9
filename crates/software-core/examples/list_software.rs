//! List software example - print the merged catalog and install state

use anyhow::Result;
use software_core::{AppDirs, SoftwareRegistry};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .compact()
        .init();

    // Get core dir from args or use current directory
    let core_dir = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let mut builder = SoftwareRegistry::builder(&core_dir);
    if let Some(user_dir) = std::env::args().nth(2) {
        builder = builder.user_core_dir(user_dir);
    }
    let registry = builder.build()?;

    if !registry.dir_exists().await {
        println!(
            "Software directory {} does not exist yet.",
            registry.app_dirs().software_root_dir().display()
        );
    }

    let list = registry.get_list().await?;
    println!("Found {} software entries:", list.len());
    for item in list {
        let state = if registry.is_installed(item).await {
            "installed"
        } else {
            "missing"
        };
        println!(
            "  - {} [{}] {} ({})",
            item.name,
            item.software_type,
            registry.get_path(item).display(),
            state
        );
        if let Ok(conf) = registry.get_server_conf_path(item) {
            println!("      server config: {}", conf.display());
        }
    }

    Ok(())
}
