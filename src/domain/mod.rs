pub mod fee;
pub mod staking;
pub mod token;
pub mod transfer;
