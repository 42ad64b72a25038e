//! Registry persistence adapters

mod yaml;

pub use yaml::YamlRegistryRepository;
