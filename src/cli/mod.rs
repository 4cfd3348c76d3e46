mod app;

pub use app::{
    ChillerArgs, Cli, Commands, CompressorArgs, ExportArgs, HistoryArgs, PanelArgs, ReportArgs,
};
