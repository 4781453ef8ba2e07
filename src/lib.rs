//! MoonLang frontend: alias loading, lexing, and parsing.
//!
//! ```no_run
//! use moonc::alias::AliasMap;
//! use moonc::lexer::Lexer;
//! use moonc::parser::Parser;
//!
//! let source = "x = 1 + 2\n";
//! let tokens = Lexer::new(source, None).tokenize().unwrap();
//! let program = Parser::new(tokens).parse().unwrap();
//! assert_eq!(program.statements.len(), 1);
//! let _ = AliasMap::default();
//! ```

pub mod alias;
pub mod ast;
pub mod diagnostics;
pub mod driver;
pub mod lexer;
pub mod parser;
pub mod token;
