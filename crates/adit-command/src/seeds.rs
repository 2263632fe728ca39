//! Seed-stream argument parsing.

use adit_core::{SeedStream, ValidationError};

/// Parse the seed command's argument text into a validated stream.
///
/// Tokenizes on whitespace and parses every token as a signed integer.
/// Any unparsable token, fewer than two integers, or more than the
/// stream capacity rejects the whole command; no partial stream is ever
/// produced, so the engine's state is untouched on any failure.
pub fn parse_seed_stream(arg: &str) -> Result<SeedStream, ValidationError> {
    let mut seeds = Vec::new();
    for token in arg.split_whitespace() {
        let value: i64 = token
            .parse()
            .map_err(|_| ValidationError::Malformed {
                token: token.to_owned(),
            })?;
        seeds.push(value);
    }
    SeedStream::from_integers(seeds)
}
