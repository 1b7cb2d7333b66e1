mod parse_real;
mod tokenize;

pub use tokenize::Tokenizer;
pub use tokenize::Word;
