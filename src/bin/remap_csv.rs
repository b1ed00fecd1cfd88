use anyhow::Context;
use clap::Parser;
use lead_clean::config::remap_config::RemapConfig;
use lead_clean::core::remap::{default_lead_mapping, remap_table};
use lead_clean::core::{Storage, Table};
use lead_clean::utils::{logger, validation::Validate};
use lead_clean::LocalStorage;

#[derive(Parser)]
#[command(name = "remap-csv")]
#[command(about = "Project and rename columns of a lead export CSV")]
struct Args {
    /// Input CSV file
    input: String,

    /// Output CSV file
    output: String,

    /// TOML mapping file; omit to use the built-in lead-export mapping
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    // 載入欄位映射
    let mappings = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading column mapping from: {}", path);
            let config = RemapConfig::from_file(path)
                .with_context(|| format!("failed to load mapping file '{}'", path))?;
            config.validate().context("invalid mapping file")?;
            config.mappings()
        }
        None => {
            tracing::info!("Using built-in lead-export column mapping");
            default_lead_mapping()
        }
    };

    let storage = LocalStorage::new(".".to_string());

    if !storage.exists(&args.input).await {
        eprintln!("❌ Input file not found: {}", args.input);
        std::process::exit(1);
    }

    println!("📥 Reading CSV file...");
    let bytes = storage
        .read_file(&args.input)
        .await
        .context("failed to read input file")?;
    let table = Table::from_csv_bytes(&bytes).context("failed to parse input CSV")?;
    println!(
        "Found {} columns and {} data rows",
        table.column_count(),
        table.row_count()
    );

    let remapped = remap_table(&table, &mappings);

    println!("📝 Writing new CSV...");
    storage
        .write_file(&args.output, &remapped.to_csv_bytes()?)
        .await
        .context("failed to write output file")?;

    println!("✅ Success!");
    println!("📊 Transformed {} rows", remapped.row_count());
    println!("📋 New columns: {}", remapped.column_count());
    println!("📁 Output: {}", args.output);

    Ok(())
}
