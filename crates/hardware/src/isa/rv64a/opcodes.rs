//! RISC-V Atomic Extension (A) Opcodes.

/// Atomic Memory Operation opcode (0b0101111).
/// Shared by every A-extension instruction (LR, SC, AMO*).
pub const OP_AMO: u32 = 0b0101111;
