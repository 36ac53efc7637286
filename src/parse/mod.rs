pub mod intent_parser;

pub use intent_parser::{ParseError, ScriptLine, parse_intent, parse_script};
