use anchor_lang::prelude::*;
use anchor_spl::token::{
    close_account, transfer_checked, CloseAccount, Mint, Token, TokenAccount, TransferChecked,
};

use crate::errors::EscrowError;
use crate::state::Escrow;

#[derive(Accounts)]
pub struct Accept<'info> {
    /// The buyer who takes the trade; any wallet may accept
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// The seller who created the escrow (receives token Y and the rent)
    #[account(mut)]
    pub seller: SystemAccount<'info>,

    /// Escrow record storing the trade terms (will be closed)
    ///
    /// Seeds come from the stored seller field, so a mismatched seller
    /// account surfaces AccountMismatch instead of a seeds failure
    #[account(
        mut,
        close = seller,
        has_one = seller @ EscrowError::AccountMismatch,
        has_one = x_mint @ EscrowError::AccountMismatch,
        has_one = y_mint @ EscrowError::AccountMismatch,
        has_one = vault @ EscrowError::AccountMismatch,
        seeds = [b"escrow", escrow.seller.as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Box<Account<'info, Escrow>>,

    /// Mint of the locked token
    pub x_mint: Box<Account<'info, Mint>>,

    /// Mint of the payment token
    pub y_mint: Box<Account<'info, Mint>>,

    /// Vault holding the locked token X (authority is the escrow record)
    #[account(mut)]
    pub vault: Box<Account<'info, TokenAccount>>,

    /// Buyer's token X account (receives the locked funds)
    #[account(
        mut,
        constraint = buyer_x_token.mint == x_mint.key() @ EscrowError::AccountMismatch,
    )]
    pub buyer_x_token: Box<Account<'info, TokenAccount>>,

    /// Buyer's token Y account (source of the payment)
    #[account(
        mut,
        constraint = buyer_y_token.mint == y_mint.key() @ EscrowError::AccountMismatch,
        constraint = buyer_y_token.owner == buyer.key() @ EscrowError::AccountMismatch,
        constraint = buyer_y_token.amount >= escrow.y_amount @ EscrowError::InsufficientFunds,
    )]
    pub buyer_y_token: Box<Account<'info, TokenAccount>>,

    /// Seller's token Y account (receives the payment)
    #[account(
        mut,
        constraint = seller_y_token.mint == y_mint.key() @ EscrowError::AccountMismatch,
        constraint = seller_y_token.owner == seller.key() @ EscrowError::AccountMismatch,
    )]
    pub seller_y_token: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Accept<'info> {
    /// Transfer token Y from the buyer to the seller
    pub fn transfer_to_seller(&mut self) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.buyer_y_token.to_account_info(),
            mint: self.y_mint.to_account_info(),
            to: self.seller_y_token.to_account_info(),
            authority: self.buyer.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        transfer_checked(cpi_ctx, self.escrow.y_amount, self.y_mint.decimals)
    }

    /// Move the locked token X from the vault to the buyer, then close the vault
    pub fn withdraw_and_close_vault(&mut self) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            b"escrow",
            self.seller.key.as_ref(),
            &[self.escrow.bump],
        ]];

        // Transfer the full vault balance to the buyer
        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.x_mint.to_account_info(),
            to: self.buyer_x_token.to_account_info(),
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

/// Handler for the accept instruction
pub fn handler(ctx: Context<Accept>) -> Result<()> {
    // First, send the payment from buyer to seller
    ctx.accounts.transfer_to_seller()?;

    // Then, release the locked token X to the buyer and close the vault
    ctx.accounts.withdraw_and_close_vault()?;

    msg!(
        "Escrow accepted: buyer {} paid {} of {}, received {} of {}",
        ctx.accounts.buyer.key(),
        ctx.accounts.escrow.y_amount,
        ctx.accounts.y_mint.key(),
        ctx.accounts.escrow.x_amount,
        ctx.accounts.x_mint.key(),
    );

    Ok(())
}
