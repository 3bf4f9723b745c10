use solana_program::hash::Hash;
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::message::Message;
use solana_program::pubkey::Pubkey;
use solana_program::system_program;

use crate::instruction::ClickerInstruction;
use crate::state::game_pda;

pub fn initialize(signer: Pubkey) -> Instruction {
    let game = game_pda(signer).0;
    Instruction {
        program_id: crate::ID,
        accounts: vec![
            AccountMeta::new(signer, true),
            AccountMeta::new(game, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: ClickerInstruction::Initialize.to_bytes(),
    }
}

pub fn click(signer: Pubkey, game: Pubkey) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: vec![AccountMeta::new(signer, true), AccountMeta::new(game, false)],
        data: ClickerInstruction::Click.to_bytes(),
    }
}

/// Serializes a legacy transaction with zeroed signature slots for the wallet to fill.
pub fn unsigned_transaction(instructions: &[Instruction], payer: &Pubkey, blockhash: &Hash) -> Vec<u8> {
    let message = Message::new_with_blockhash(instructions, Some(payer), blockhash);
    let signatures = message.header.num_required_signatures as u16;

    let mut tx = compact_u16(signatures);
    tx.extend(std::iter::repeat(0u8).take(64 * signatures as usize));
    tx.extend(message.serialize());
    tx
}

/// Encode u16 as Solana compact-u16 format
fn compact_u16(val: u16) -> Vec<u8> {
    if val < 0x80 {
        vec![val as u8]
    } else if val < 0x4000 {
        vec![(val & 0x7f) as u8 | 0x80, (val >> 7) as u8]
    } else {
        vec![(val & 0x7f) as u8 | 0x80, ((val >> 7) & 0x7f) as u8 | 0x80, (val >> 14) as u8]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_u16() {
        assert_eq!(compact_u16(0), vec![0]);
        assert_eq!(compact_u16(0x7f), vec![0x7f]);
        assert_eq!(compact_u16(0x80), vec![0x80, 0x01]);
        assert_eq!(compact_u16(0x3fff), vec![0xff, 0x7f]);
        assert_eq!(compact_u16(0x4000), vec![0x80, 0x80, 0x01]);
    }

    #[test]
    fn test_click_accounts() {
        let signer = Pubkey::new_unique();
        let game = game_pda(signer).0;
        let ix = click(signer, game);
        assert_eq!(ix.program_id, crate::ID);
        assert_eq!(ix.data, vec![1]);
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        assert_eq!(ix.accounts[1].pubkey, game);
        assert!(!ix.accounts[1].is_signer);
    }

    #[test]
    fn test_initialize_targets_game_pda() {
        let signer = Pubkey::new_unique();
        let ix = initialize(signer);
        assert_eq!(ix.data, vec![0]);
        assert_eq!(ix.accounts[1].pubkey, game_pda(signer).0);
        assert_eq!(ix.accounts[2].pubkey, system_program::ID);
    }

    #[test]
    fn test_unsigned_transaction_reserves_one_signature() {
        let signer = Pubkey::new_unique();
        let ix = click(signer, game_pda(signer).0);
        let tx = unsigned_transaction(&[ix.clone()], &signer, &Hash::default());
        let message = Message::new_with_blockhash(&[ix], Some(&signer), &Hash::default());

        assert_eq!(tx[0], 1);
        assert!(tx[1..65].iter().all(|b| *b == 0));
        assert_eq!(&tx[65..], &message.serialize()[..]);
        assert_eq!(&tx[69..101], signer.as_ref(), "fee payer is the first account");
    }
}
