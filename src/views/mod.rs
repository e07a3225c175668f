mod report;
mod table;

pub use report::render_report;
