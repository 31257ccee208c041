mod learnset_text;

pub use learnset_text::parse_learnset_text;
