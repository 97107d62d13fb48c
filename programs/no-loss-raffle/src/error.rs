use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Participant has no balance to withdraw")]
    ZeroBalance,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Supplied time is earlier than the participant's last checkpoint")]
    ClockRegression,

    #[msg("Yield venue did not complete the request")]
    VenueFailure,

    #[msg("Random number ceiling must be greater than zero")]
    InvalidCeiling,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Not authorized")]
    NotAuthorized,

    #[msg("Token mint does not match the pool")]
    MintMismatch,

    #[msg("Incorrect randomness account")]
    IncorrectRandomnessAccount,

    #[msg("Randomness already revealed")]
    RandomnessAlreadyRevealed,

    #[msg("Randomness not resolved")]
    RandomnessNotResolved,

    #[msg("A randomness commitment is already pending")]
    RandomnessAlreadyCommitted,
}
