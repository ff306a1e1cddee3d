use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Invalid amount: amount must be greater than zero")]
    InvalidAmount,
    #[msg("Account mismatch: supplied account does not match the escrow terms")]
    AccountMismatch,
    #[msg("Insufficient funds: source balance is below the required amount")]
    InsufficientFunds,
    #[msg("Unauthorized: only the seller may cancel the escrow")]
    Unauthorized,
}
