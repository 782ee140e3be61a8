use super::{decode, encode, ProductSlot, SLOT_NAME};
use crate::error::{Result, StockError};
use crate::model::Product;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileSlot {
    root: PathBuf,
}

impl FileSlot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(format!("{}.json", SLOT_NAME))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StockError::Io)?;
        }
        Ok(())
    }
}

impl ProductSlot for FileSlot {
    fn save(&mut self, products: &[Product]) -> Result<()> {
        self.ensure_dir()?;
        let content = encode(products)?;

        // Write beside the slot, then swap it in, so readers never see half a file
        let path = self.path();
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(StockError::Io)?;
        fs::rename(&tmp, &path).map_err(StockError::Io)?;

        debug!(path = %path.display(), count = products.len(), "saved products");
        Ok(())
    }

    fn load(&self) -> Result<Vec<Product>> {
        let path = self.path();
        if !path.exists() {
            debug!(path = %path.display(), "no slot yet, starting empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(StockError::Io)?;
        let products = decode(&content, path.display().to_string())?;
        debug!(path = %path.display(), count = products.len(), "loaded products");
        Ok(products)
    }

    fn location(&self) -> String {
        self.path().display().to_string()
    }
}
