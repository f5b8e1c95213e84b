//! Utility modules

pub mod text;

pub use text::{
    char_col_to_visual_col, extend_for_env_var, is_word_char, word_at, word_at_with,
    word_range_at, DEFAULT_EXTRA_WORD_CHARS,
};
