mod convert_options;

pub use convert_options::ConvertOptions;
