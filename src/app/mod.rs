pub(crate) mod exit_handler;
pub(crate) mod input_processor;
pub(crate) mod output;
pub(crate) mod progress_manager;
pub(crate) mod runtime;
pub(crate) mod terminal;
