//! Book id generation.
//!
//! Ids are 16-character random alphanumeric strings. Uniqueness is
//! collision-resistant, not guaranteed.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of generated book ids
pub const ID_LENGTH: usize = 16;

/// Generate a new random book id
pub fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_length() {
        assert_eq!(generate_id().len(), ID_LENGTH);
    }

    #[test]
    fn test_id_is_alphanumeric() {
        assert!(generate_id().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_ids_differ() {
        // Two draws colliding would mean a broken RNG, not bad luck
        assert_ne!(generate_id(), generate_id());
    }
}
