//! Invite-code generation.

use rand::Rng;

use gomoku_core::types::{INVITE_CODE_ALPHABET, INVITE_CODE_LEN, InviteCode};

/// Source of candidate invite codes.
///
/// The manager checks each candidate against active rooms and asks again
/// on collision, so implementations need not guarantee uniqueness.
pub trait CodeGenerator: Send + Sync + std::fmt::Debug {
    /// Produce one candidate code.
    fn generate(&self) -> InviteCode;
}

/// Uniformly random codes drawn from `[A-Z0-9]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl RandomCodeGenerator {
    /// Creates a new random code generator.
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> InviteCode {
        let mut rng = rand::thread_rng();
        let mut indices = [0usize; INVITE_CODE_LEN];
        for index in &mut indices {
            *index = rng.gen_range(0..INVITE_CODE_ALPHABET.len());
        }
        InviteCode::from_indices(indices)
    }
}
