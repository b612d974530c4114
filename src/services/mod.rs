pub mod command_renderer;
pub mod list_translator;
pub mod translation_index;
