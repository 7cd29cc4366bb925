#[allow(non_snake_case)]
pub mod Translator;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
pub mod settings;
