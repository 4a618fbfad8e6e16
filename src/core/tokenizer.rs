//! Tokenizer resolution - Maps a model name to a tiktoken encoding
//!
//! Resolution happens once per run, before traversal starts:
//! - A model name tiktoken recognizes (gpt-4o, gpt-4, text-davinci-003, ...)
//!   selects that model's encoding.
//! - Any other name falls back to o200k_base and the result is flagged so the
//!   caller can tell the user.
//! - If the BPE tables for the chosen encoding cannot be built, resolution
//!   fails with [`TokenizerError::Unavailable`].
//!
//! Usage:
//! ```rust,ignore
//! let resolved = resolve_tokenizer("gpt-4o")?;
//! let tokens = resolved.handle.count("Hello world");
//! ```

use std::fmt;
use thiserror::Error;
use tiktoken_rs::tokenizer::{get_tokenizer, Tokenizer};
use tiktoken_rs::{get_bpe_from_tokenizer, CoreBPE};

/// Encoding used when the requested model is unknown to tiktoken
pub const FALLBACK_ENCODING: Tokenizer = Tokenizer::O200kBase;

#[derive(Debug, Error)]
pub enum TokenizerError {
    #[error("tokenizer unavailable: failed to load {encoding} encoding: {reason}")]
    Unavailable { encoding: String, reason: String },
}

/// Canonical tiktoken name of an encoding
#[allow(unreachable_patterns)]
pub fn encoding_name(encoding: Tokenizer) -> String {
    match encoding {
        Tokenizer::O200kBase => "o200k_base".to_string(),
        Tokenizer::Cl100kBase => "cl100k_base".to_string(),
        Tokenizer::P50kBase => "p50k_base".to_string(),
        Tokenizer::P50kEdit => "p50k_edit".to_string(),
        Tokenizer::R50kBase => "r50k_base".to_string(),
        Tokenizer::Gpt2 => "gpt2".to_string(),
        other => format!("{:?}", other).to_lowercase(),
    }
}

/// A loaded encoding, ready to count tokens
pub struct TokenizerHandle {
    bpe: CoreBPE,
    encoding: String,
}

impl TokenizerHandle {
    /// Build the BPE tables for an encoding
    pub fn load(encoding: Tokenizer) -> Result<Self, TokenizerError> {
        let name = encoding_name(encoding);
        let bpe = get_bpe_from_tokenizer(encoding).map_err(|e| TokenizerError::Unavailable {
            encoding: name.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            bpe,
            encoding: name,
        })
    }

    /// Name of the encoding backing this handle
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Count the tokens in `text`
    ///
    /// Special token literals such as `<|endoftext|>` are encoded as the
    /// single token they stand for instead of being rejected.
    pub fn count(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        self.bpe.encode_with_special_tokens(text).len()
    }
}

impl fmt::Debug for TokenizerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenizerHandle")
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

/// Outcome of resolving a model name
#[derive(Debug)]
pub struct ResolvedTokenizer {
    pub handle: TokenizerHandle,
    /// The model name as requested
    pub model: String,
    /// True when the model was unknown and [`FALLBACK_ENCODING`] was used
    pub fell_back: bool,
}

/// Resolve a model name to a loaded tokenizer
pub fn resolve_tokenizer(model: &str) -> Result<ResolvedTokenizer, TokenizerError> {
    let (encoding, fell_back) = match get_tokenizer(model) {
        Some(encoding) => (encoding, false),
        None => (FALLBACK_ENCODING, true),
    };

    Ok(ResolvedTokenizer {
        handle: TokenizerHandle::load(encoding)?,
        model: model.to_string(),
        fell_back,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_model() {
        let resolved = resolve_tokenizer("gpt-4o").unwrap();
        assert!(!resolved.fell_back);
        assert_eq!(resolved.model, "gpt-4o");
        assert_eq!(resolved.handle.encoding(), "o200k_base");
    }

    #[test]
    fn test_resolve_model_with_other_encoding() {
        let resolved = resolve_tokenizer("gpt-4").unwrap();
        assert!(!resolved.fell_back);
        assert_eq!(resolved.handle.encoding(), "cl100k_base");
    }

    #[test]
    fn test_resolve_unknown_model_falls_back() {
        let resolved = resolve_tokenizer("definitely-not-a-model").unwrap();
        assert!(resolved.fell_back);
        assert_eq!(resolved.model, "definitely-not-a-model");
        assert_eq!(resolved.handle.encoding(), "o200k_base");
    }

    #[test]
    fn test_count_empty() {
        let handle = TokenizerHandle::load(FALLBACK_ENCODING).unwrap();
        assert_eq!(handle.count(""), 0);
    }

    #[test]
    fn test_count_ascii() {
        let handle = TokenizerHandle::load(FALLBACK_ENCODING).unwrap();
        let tokens = handle.count("Hello, world!");
        assert!(tokens > 0 && tokens < 10);
    }

    #[test]
    fn test_count_cjk() {
        let handle = TokenizerHandle::load(FALLBACK_ENCODING).unwrap();
        assert!(handle.count("你好世界") > 0);
    }

    #[test]
    fn test_count_special_token_literal() {
        let handle = TokenizerHandle::load(Tokenizer::Cl100kBase).unwrap();
        assert_eq!(handle.count("<|endoftext|>"), 1);
    }

    #[test]
    fn test_count_matches_direct_encoding() {
        let handle = TokenizerHandle::load(Tokenizer::Cl100kBase).unwrap();
        let bpe = tiktoken_rs::cl100k_base().unwrap();
        let text = r#"fn main() { println!("Hello"); }"#;
        assert_eq!(handle.count(text), bpe.encode_with_special_tokens(text).len());
    }

    #[test]
    fn test_encoding_name() {
        assert_eq!(encoding_name(Tokenizer::O200kBase), "o200k_base");
        assert_eq!(encoding_name(Tokenizer::Cl100kBase), "cl100k_base");
        assert_eq!(encoding_name(Tokenizer::Gpt2), "gpt2");
    }

    #[test]
    fn test_handle_debug_hides_tables() {
        let handle = TokenizerHandle::load(FALLBACK_ENCODING).unwrap();
        let debug = format!("{:?}", handle);
        assert!(debug.contains("o200k_base"));
    }
}
