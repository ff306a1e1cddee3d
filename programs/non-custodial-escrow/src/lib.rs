use anchor_lang::prelude::*;

pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod non_custodial_escrow {
    use super::*;

    /// Create a new escrow: seller locks token X and sets the ask in token Y
    pub fn initialize(ctx: Context<Initialize>, x_amount: u64, y_amount: u64) -> Result<()> {
        instructions::initialize::handler(ctx, x_amount, y_amount)
    }

    /// Execute the trade: buyer sends token Y, receives the locked token X
    pub fn accept(ctx: Context<Accept>) -> Result<()> {
        instructions::accept::handler(ctx)
    }

    /// Cancel the escrow: seller reclaims the locked token X
    pub fn cancel(ctx: Context<Cancel>) -> Result<()> {
        instructions::cancel::handler(ctx)
    }
}
