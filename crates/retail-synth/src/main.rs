use std::fs;
use std::path::Path;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use retail_synth::catalog::{builtin, Catalog};
use retail_synth::cli::{Args, CatalogArgs, Command, GenerateArgs};
use retail_synth::error::{SynthError, SynthResult};
use retail_synth::output::{
    write_catalog_csvs, write_summary, SalesWriter, SALES_FILE,
};
use retail_synth::session::{GenerationSession, GenerationSummary};

fn main() -> SynthResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match args.command {
        Command::Generate(generate) => run_generate(&args.out_dir, &generate),
        Command::Catalog(catalog) => run_catalog_dump(&catalog),
    }
}

fn run_generate(out_dir: &Path, args: &GenerateArgs) -> SynthResult<()> {
    let config = args.session_config()?;

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => {
            // Store placement gets its own stream so catalog synthesis never
            // shifts the record stream's draw order.
            let mut catalog_rng = match config.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            builtin::builtin_catalog(args.stores, &mut catalog_rng)?
        }
    };

    let sales_path = out_dir.join(SALES_FILE);
    if sales_path.exists() && !args.force {
        return Err(SynthError::InvalidArgument(format!(
            "'{}' already exists; pass --force to overwrite",
            sales_path.display()
        )));
    }
    fs::create_dir_all(out_dir)?;

    write_catalog_csvs(out_dir, &catalog)?;

    let mut summary = GenerationSummary::new(&catalog, &config);
    let mut writer = SalesWriter::create(&sales_path)?;
    let session = GenerationSession::new(&catalog, &config)?;
    for drawn in session {
        let record = drawn?;
        writer.write_record(&record)?;
        summary.observe(&record);
        if summary.records % config.progress_interval == 0 {
            info!(records = summary.records, "generated");
        }
    }
    writer.finish()?;
    write_summary(out_dir, &summary)?;

    info!(
        records = summary.records,
        campaign_records = summary.campaign_records,
        stores = summary.stores,
        products = summary.products,
        total_revenue = summary.total_revenue,
        "dataset written to {}",
        out_dir.display()
    );
    Ok(())
}

fn run_catalog_dump(args: &CatalogArgs) -> SynthResult<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let catalog = builtin::builtin_catalog(args.stores, &mut rng)?;
    let yaml = catalog.to_yaml()?;
    match &args.out {
        Some(path) => {
            fs::write(path, yaml)?;
            info!("catalog written to {}", path.display());
        }
        None => print!("{yaml}"),
    }
    Ok(())
}
