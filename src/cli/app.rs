use clap::{Args, Parser, Subcommand};

use crate::units::Category;

#[derive(Parser)]
#[command(name = "plantlog")]
#[command(about = "A CLI tool for recording factory-floor maintenance data")]
pub struct Cli {
    /// Launches the interactive dashboard when no command is given
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a maintenance work order with a generated one-line report
    Report(ReportArgs),
    /// Record LT panel readings for all panels
    Panel(PanelArgs),
    /// Record compressor readings for all units
    Compressor(CompressorArgs),
    /// Record chiller readings for all chillers
    Chiller(ChillerArgs),
    /// Show saved entries for a category
    History(HistoryArgs),
    /// Copy a category's workbook file to another location
    Export(ExportArgs),
}

/// Prefill arguments for the work order form; missing fields are prompted.
#[derive(Args, Default)]
pub struct ReportArgs {
    /// Unit where the issue occurred (e.g. "Unit 5")
    #[arg(long)]
    pub unit: Option<String>,
    /// Machine name (e.g. "Compressor A1")
    #[arg(long)]
    pub machine: Option<String>,
    /// Technician who handled the issue
    #[arg(long)]
    pub technician: Option<String>,
    /// Issue reported
    #[arg(long)]
    pub issue: Option<String>,
}

#[derive(Args, Default)]
pub struct PanelArgs {
    /// Technician name / reader
    #[arg(long)]
    pub technician: Option<String>,
}

#[derive(Args, Default)]
pub struct CompressorArgs {}

#[derive(Args, Default)]
pub struct ChillerArgs {}

#[derive(Args)]
pub struct HistoryArgs {
    /// Data category to display
    #[arg(value_enum)]
    pub category: Category,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Data category to export
    #[arg(value_enum)]
    pub category: Category,
    /// Destination path (defaults to the workbook's file name in the current directory)
    #[arg(long)]
    pub to: Option<std::path::PathBuf>,
}
