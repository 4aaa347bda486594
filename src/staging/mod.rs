// ABOUTME: Core staging engine for rendering model templates per iteration
// ABOUTME: Exports the input file map, symbol table, renderer, and template builder

pub mod builder;
pub mod error;
pub mod input_map;
pub mod renderer;
pub mod symbols;

pub use builder::TemplateFileBuilder;
pub use error::{Result, StagingError};
pub use input_map::{InputFileMap, InputFileRecord};
pub use renderer::TemplateRenderer;
pub use symbols::OtherSymbolTable;
