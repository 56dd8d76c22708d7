//! Integration tests for Layer 2: Parser
//!
//! Tests for tokenizing, parsing, and verb/direction lookup.

mod parser_tests;
mod tokenizer_tests;
mod vocabulary_tests;
