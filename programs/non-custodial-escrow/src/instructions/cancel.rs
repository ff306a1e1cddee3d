use anchor_lang::prelude::*;
use anchor_spl::token::{
    close_account, transfer_checked, CloseAccount, Mint, Token, TokenAccount, TransferChecked,
};

use crate::errors::EscrowError;
use crate::state::Escrow;

#[derive(Accounts)]
pub struct Cancel<'info> {
    /// The seller who created the escrow; only they may cancel
    #[account(mut)]
    pub seller: Signer<'info>,

    /// Escrow record storing the trade terms (will be closed)
    ///
    /// Seeds come from the stored seller field, so a foreign signer
    /// surfaces Unauthorized instead of a seeds failure
    #[account(
        mut,
        close = seller,
        constraint = escrow.seller == seller.key() @ EscrowError::Unauthorized,
        has_one = x_mint @ EscrowError::AccountMismatch,
        has_one = vault @ EscrowError::AccountMismatch,
        seeds = [b"escrow", escrow.seller.as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, Escrow>,

    /// Mint of the locked token
    pub x_mint: Account<'info, Mint>,

    /// Vault holding the locked token X (authority is the escrow record)
    #[account(mut)]
    pub vault: Account<'info, TokenAccount>,

    /// Seller's token X account (receives the locked funds back)
    #[account(
        mut,
        constraint = seller_x_token.mint == x_mint.key() @ EscrowError::AccountMismatch,
        constraint = seller_x_token.owner == seller.key() @ EscrowError::AccountMismatch,
    )]
    pub seller_x_token: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Cancel<'info> {
    /// Return the full vault balance to the seller and close the vault
    pub fn refund_and_close_vault(&mut self) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            b"escrow",
            self.escrow.seller.as_ref(),
            &[self.escrow.bump],
        ]];

        // Transfer all locked token X back to the seller
        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.x_mint.to_account_info(),
            to: self.seller_x_token.to_account_info(),
            authority: self.escrow.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        transfer_checked(cpi_ctx, self.vault.amount, self.x_mint.decimals)?;

        // Close the vault account and return the rent to the seller
        let cpi_accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.seller.to_account_info(),
            authority: self.escrow.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        close_account(cpi_ctx)
    }
}

/// Handler for the cancel instruction
pub fn handler(ctx: Context<Cancel>) -> Result<()> {
    // Return the locked token X to the seller and close the vault
    ctx.accounts.refund_and_close_vault()?;

    msg!(
        "Escrow cancelled: seller {} reclaimed {} of {}",
        ctx.accounts.seller.key(),
        ctx.accounts.escrow.x_amount,
        ctx.accounts.x_mint.key(),
    );

    Ok(())
}
