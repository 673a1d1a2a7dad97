pub mod deleter;
pub mod fsops;
pub mod report;
