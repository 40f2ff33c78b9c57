pub mod cli;
pub mod color;
pub mod logging;
pub mod pipeline;
pub mod report;
pub mod scheme;
pub mod tui;
