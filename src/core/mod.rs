pub mod analyzer;

pub mod reader;

pub mod record;

pub mod summary;
