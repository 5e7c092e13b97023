//! Owner-scoped access to position accounts.
//!
//! Positions are passed as raw accounts and resolved here, so a wrong
//! address, an account that was never created, a closed account, another
//! owner's position and an emptied position all read as `PositionNotFound`.

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{errors::StakingError, state::StakePosition};

pub fn load_position(
    info: &AccountInfo,
    ledger: &Pubkey,
    owner: &Pubkey,
    position_id: u64,
) -> Result<StakePosition> {
    let (expected, _) = StakePosition::address(ledger, owner, position_id);
    require_keys_eq!(info.key(), expected, StakingError::PositionNotFound);
    require!(
        info.owner == &crate::ID && !info.data_is_empty(),
        StakingError::PositionNotFound
    );

    let data = info.try_borrow_data()?;
    let position = StakePosition::try_deserialize(&mut &data[..])
        .map_err(|_| error!(StakingError::PositionNotFound))?;

    require!(
        position.is_owned_by(owner) && position.position_id == position_id,
        StakingError::PositionNotFound
    );
    Ok(position)
}

pub fn store_position(info: &AccountInfo, position: &StakePosition) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    position.try_serialize(&mut writer)
}

/// Refunds rent to `destination` and hands the account back to the system
/// program with no data.
pub fn close_position<'info>(info: &AccountInfo<'info>, destination: &AccountInfo<'info>) -> Result<()> {
    let refunded = destination
        .lamports()
        .checked_add(info.lamports())
        .ok_or(StakingError::MathOverflow)?;
    **destination.try_borrow_mut_lamports()? = refunded;
    **info.try_borrow_mut_lamports()? = 0;

    info.assign(&system_program::ID);
    info.realloc(0, false)?;
    Ok(())
}
