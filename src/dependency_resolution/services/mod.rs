mod direct_dependency_query;
mod graph_builder;
mod graph_file_parser;
mod index_decoder;
mod package_filter;
mod record_parser;
mod transitive_resolver;

pub use direct_dependency_query::DirectDependencyQuery;
pub use graph_builder::GraphBuilder;
pub use graph_file_parser::GraphFileParser;
pub use index_decoder::IndexDecoder;
pub use package_filter::PackageFilter;
pub use record_parser::RecordParser;
pub use transitive_resolver::TransitiveResolver;
