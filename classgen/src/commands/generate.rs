use std::path::PathBuf;

use clap::Args;
use classgen_codegen::{GenerateReport, Generator, check_overrides};
use classgen_model::ModelCache;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the profile model file
    pub model: PathBuf,

    /// Output file for the generated module (defaults to ./model.py)
    #[arg(short, long, default_value = "model.py")]
    pub output: PathBuf,

    /// Per-class overrides file (reserved; accepted but not applied yet)
    #[arg(long)]
    pub overrides: Option<PathBuf>,

    /// Print the generated module without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        check_overrides(self.overrides.as_deref()).unwrap_or_exit();

        let mut cache = ModelCache::new();
        let model = cache.load(&self.model).unwrap_or_exit();
        let generator = Generator::new(&model);

        if self.dry_run {
            let module = generator.preview().unwrap_or_exit();
            println!("{}", module.source);
            Self::print_diagnostics(&module.report);
            return Ok(());
        }

        let report = generator.generate(&self.output).unwrap_or_exit();

        println!("Generated: {}", self.output.display());
        if !report.imported.is_empty() {
            println!();
            println!("Imports ({}):", report.imported.len());
            for name in &report.imported {
                println!("  {}", name);
            }
        }
        println!();
        println!("Classes ({}):", report.emitted.len());
        for name in &report.emitted {
            println!("  {}", name);
        }
        Self::print_diagnostics(&report);

        Ok(())
    }

    fn print_diagnostics(report: &GenerateReport) {
        if report.diagnostics.is_empty() {
            return;
        }
        println!();
        for diagnostic in &report.diagnostics {
            println!("{}", diagnostic);
        }
    }
}
