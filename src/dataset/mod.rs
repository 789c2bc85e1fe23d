pub mod builder;
pub mod labels;
pub mod margins;
pub mod point;
pub mod series;
pub mod units;
