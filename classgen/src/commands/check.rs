use std::path::PathBuf;

use clap::Args;
use classgen_codegen::Generator;
use classgen_model::ModelCache;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the profile model file
    pub model: PathBuf,
}

impl CheckCommand {
    /// Validate the model and run a full render without writing output.
    pub fn run(&self) -> Result<()> {
        let mut cache = ModelCache::new();
        let model = cache.load(&self.model).unwrap_or_exit();
        let module = Generator::new(&model).preview().unwrap_or_exit();

        println!(
            "{}: {} class(es), {} import(s)",
            self.model.display(),
            module.report.emitted.len(),
            module.report.imported.len()
        );
        for diagnostic in &module.report.diagnostics {
            println!("{}", diagnostic);
        }

        Ok(())
    }
}
