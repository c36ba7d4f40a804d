/// CycloneDX JSON decoding into policy-engine components
mod sbom_parser;

pub use sbom_parser::CycloneDxParser;
