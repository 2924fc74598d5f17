pub mod normalize;
pub mod stem;
pub mod token;

pub use normalize::{count_words, normalize, normalize_with, truncate_words};
pub use stem::{english, EnglishStemmer, IdentityStemmer, Stem};
pub use token::Token;
