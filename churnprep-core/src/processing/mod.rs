//! Preprocessing steps.
//!
//! Each step takes the data frame by value and hands back the transformed one:
//! clean, select, bin, encode. [`pipeline`] drives them in that order between
//! loading and saving.

pub mod binning;
pub mod clean;
pub mod encoding;
pub mod pipeline;
pub mod select;

pub use binning::{BinEdges, Binner, feature_engineering};
pub use clean::{CleanStats, clean_data};
pub use encoding::{
    CategoricalEncoder, EncodingMode, EncodingReport, LabelEncoder, MappingEncoder, MappingTable,
    encode_data,
};
pub use pipeline::{PreprocessReport, preprocess, run_pipeline};
pub use select::select_features;
