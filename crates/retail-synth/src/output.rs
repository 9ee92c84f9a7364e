use std::fs;
use std::io::Write;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::SynthResult;
use crate::record::SalesRecord;
use crate::session::GenerationSummary;

pub const SALES_FILE: &str = "sales.csv";
pub const CATEGORIES_FILE: &str = "categories.csv";
pub const PRODUCTS_FILE: &str = "products.csv";
pub const STORES_FILE: &str = "stores.csv";
pub const SUMMARY_FILE: &str = "summary.json";

/// Streams sales records to CSV one row at a time; money is fixed to two
/// decimals and timestamps are ISO-8601.
pub struct SalesWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl SalesWriter<fs::File> {
    pub fn create(path: impl AsRef<Path>) -> SynthResult<Self> {
        Self::from_writer(fs::File::create(path)?)
    }
}

impl<W: Write> SalesWriter<W> {
    pub fn from_writer(inner: W) -> SynthResult<Self> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record([
            "date",
            "time",
            "product_name",
            "unit_price",
            "quantity",
            "revenue",
            "store_name",
            "campaign",
        ])?;
        Ok(Self { writer })
    }

    pub fn write_record(&mut self, record: &SalesRecord) -> SynthResult<()> {
        self.writer.write_record([
            record.date.to_string(),
            record.time.format("%H:%M:%S").to_string(),
            record.product_name.clone(),
            format!("{:.2}", record.unit_price),
            record.quantity.to_string(),
            format!("{:.2}", record.revenue),
            record.store_name.clone(),
            record.campaign.clone(),
        ])?;
        Ok(())
    }

    pub fn finish(mut self) -> SynthResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub fn write_catalog_csvs(out_dir: impl AsRef<Path>, catalog: &Catalog) -> SynthResult<()> {
    let out_dir = out_dir.as_ref();

    let mut categories = csv::Writer::from_path(out_dir.join(CATEGORIES_FILE))?;
    categories.write_record(["category_id", "category_name"])?;
    for category in &catalog.categories {
        categories.write_record([category.id.to_string(), category.name.clone()])?;
    }
    categories.flush()?;

    let mut products = csv::Writer::from_path(out_dir.join(PRODUCTS_FILE))?;
    products.write_record([
        "product_id",
        "product_name",
        "category_id",
        "min_price",
        "max_price",
    ])?;
    for product in &catalog.products {
        products.write_record([
            product.id.to_string(),
            product.name.clone(),
            product.category_id.to_string(),
            format!("{:.2}", product.min_price),
            format!("{:.2}", product.max_price),
        ])?;
    }
    products.flush()?;

    let mut stores = csv::Writer::from_path(out_dir.join(STORES_FILE))?;
    stores.write_record(["store_name", "city", "state", "country", "continent"])?;
    for store in &catalog.stores {
        stores.write_record([
            store.name.clone(),
            store.city.clone(),
            store.state.clone(),
            store.country.clone(),
            store.continent.clone(),
        ])?;
    }
    stores.flush()?;

    Ok(())
}

pub fn write_summary(out_dir: impl AsRef<Path>, summary: &GenerationSummary) -> SynthResult<()> {
    let path = out_dir.as_ref().join(SUMMARY_FILE);
    fs::write(path, serde_json::to_vec_pretty(summary)?)?;
    Ok(())
}
