mod data_source;
mod local;
mod reports;
mod static_source;

pub use data_source::{
    DataSource,
    MoveTable,
};
pub use local::LocalDataSource;
pub use reports::ReportDataSource;
pub use static_source::StaticDataSource;
