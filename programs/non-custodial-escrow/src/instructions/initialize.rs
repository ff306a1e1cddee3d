use anchor_lang::prelude::*;
use anchor_spl::token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked};

use crate::errors::EscrowError;
use crate::state::Escrow;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The seller who sets the trade terms and locks token X
    #[account(mut)]
    pub seller: Signer<'info>,

    /// Mint of the token the seller will lock
    pub x_mint: Account<'info, Mint>,

    /// Mint of the token the seller wants in exchange
    pub y_mint: Account<'info, Mint>,

    /// Seller's token X account (source of the locked funds)
    #[account(
        mut,
        constraint = seller_x_token.mint == x_mint.key() @ EscrowError::AccountMismatch,
        constraint = seller_x_token.owner == seller.key() @ EscrowError::AccountMismatch,
    )]
    pub seller_x_token: Account<'info, TokenAccount>,

    /// Escrow record that stores the trade terms; the fixed seed tag
    /// allows one live escrow per seller
    #[account(
        init,
        payer = seller,
        space = 8 + Escrow::INIT_SPACE,
        seeds = [b"escrow", seller.key().as_ref()],
        bump,
    )]
    pub escrow: Account<'info, Escrow>,

    /// Vault holding the locked token X, authority is the escrow record
    #[account(
        init,
        payer = seller,
        token::mint = x_mint,
        token::authority = escrow,
        seeds = [b"vault", escrow.key().as_ref()],
        bump,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Write the trade terms into the escrow record
    pub fn init_escrow(&mut self, x_amount: u64, y_amount: u64, bumps: &InitializeBumps) -> Result<()> {
        self.escrow.set_inner(Escrow {
            seller: self.seller.key(),
            x_mint: self.x_mint.key(),
            y_mint: self.y_mint.key(),
            x_amount,
            y_amount,
            vault: self.vault.key(),
            bump: bumps.escrow,
        });
        Ok(())
    }

    /// Transfer token X from the seller into the vault
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.seller_x_token.to_account_info(),
            mint: self.x_mint.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.seller.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        transfer_checked(cpi_ctx, amount, self.x_mint.decimals)
    }
}

/// Handler for the initialize instruction
pub fn handler(ctx: Context<Initialize>, x_amount: u64, y_amount: u64) -> Result<()> {
    // Both legs of the trade must be non-zero
    require_gt!(x_amount, 0, EscrowError::InvalidAmount);
    require_gt!(y_amount, 0, EscrowError::InvalidAmount);

    // Reject before the record is written, so a failed lock leaves nothing behind
    require_gte!(
        ctx.accounts.seller_x_token.amount,
        x_amount,
        EscrowError::InsufficientFunds
    );

    // Persist the trade terms, then lock token X into the vault
    ctx.accounts.init_escrow(x_amount, y_amount, &ctx.bumps)?;
    ctx.accounts.deposit(x_amount)?;

    msg!(
        "Escrow created: seller {} locked {} of {}, asking {} of {}",
        ctx.accounts.seller.key(),
        x_amount,
        ctx.accounts.x_mint.key(),
        y_amount,
        ctx.accounts.y_mint.key(),
    );

    Ok(())
}
