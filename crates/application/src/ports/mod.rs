mod random_source;
mod srv_resolver;

pub use random_source::RandomSource;
pub use srv_resolver::SrvResolver;
