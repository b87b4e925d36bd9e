pub mod error;
pub mod page_loader;
pub mod table_extractor;

#[cfg(test)]
pub(crate) mod fixtures;
