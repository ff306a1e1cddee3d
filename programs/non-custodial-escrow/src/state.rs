use anchor_lang::prelude::*;

/// Escrow record that stores all the trade terms
#[account]
#[derive(InitSpace)]
pub struct Escrow {
    /// The seller's wallet address (creator of the escrow, may cancel)
    pub seller: Pubkey,
    /// Mint of the token the seller locks
    pub x_mint: Pubkey,
    /// Mint of the token the seller wants in exchange
    pub y_mint: Pubkey,
    /// Amount of token X locked in the vault
    pub x_amount: u64,
    /// Amount of token Y the seller wants to receive
    pub y_amount: u64,
    /// Vault token account holding the locked token X
    pub vault: Pubkey,
    /// Bump seed for PDA derivation (cached for vault signing)
    pub bump: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_through_account_codec() {
        let escrow = Escrow {
            seller: Pubkey::new_unique(),
            x_mint: Pubkey::new_unique(),
            y_mint: Pubkey::new_unique(),
            x_amount: 40,
            y_amount: 40,
            vault: Pubkey::new_unique(),
            bump: 254,
        };

        let mut data = Vec::new();
        escrow.try_serialize(&mut data).unwrap();
        // 8-byte discriminator + fixed-size fields, no padding
        assert_eq!(data.len(), 8 + Escrow::INIT_SPACE);

        let decoded = Escrow::try_deserialize(&mut data.as_slice()).unwrap();
        assert_eq!(decoded.seller, escrow.seller);
        assert_eq!(decoded.x_mint, escrow.x_mint);
        assert_eq!(decoded.y_mint, escrow.y_mint);
        assert_eq!(decoded.x_amount, escrow.x_amount);
        assert_eq!(decoded.y_amount, escrow.y_amount);
        assert_eq!(decoded.vault, escrow.vault);
        assert_eq!(decoded.bump, escrow.bump);
    }

    #[test]
    fn record_rejects_foreign_account_data() {
        // Data written by some other account type must not deserialize
        let data = vec![0xffu8; 8 + Escrow::INIT_SPACE];
        assert!(Escrow::try_deserialize(&mut data.as_slice()).is_err());
    }
}
