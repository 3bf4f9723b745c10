use num_enum::{IntoPrimitive, TryFromPrimitive};

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
pub enum ClickerInstruction {
    /// Creates the signer's game account.
    Initialize = 0,

    /// Adds one click to the signer's game account.
    Click = 1,
}

impl ClickerInstruction {
    /// Instructions carry no arguments beyond the discriminator byte.
    pub fn to_bytes(self) -> Vec<u8> {
        vec![self.into()]
    }
}
