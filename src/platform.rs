//! Per-target reads of the stack pointer and the current frame address
//!
//! Both functions are `#[inline(always)]` so the value observed belongs to the
//! caller's activation record, not to a helper frame.
//!
//! | target   | stack pointer | frame address |
//! |----------|---------------|---------------|
//! | x86_64   | `rsp`         | `rbp`         |
//! | aarch64  | `sp`          | `x29`         |
//! | riscv64  | `sp`          | `s0`          |
//! | other    | [`psm`]       | address of a local |
//!
//! The frame register only tracks the frame when frame pointers are kept
//! (`-C force-frame-pointers=yes`, set in `.cargo/config.toml`).

/// An opaque address on the call stack
pub type Address = usize;

/// Whether this target reads real registers for both values
pub const NATIVE: bool = cfg!(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "riscv64"
));

/// Current stack pointer
#[inline(always)]
pub fn current_stack_pointer() -> Address {
    #[cfg(target_arch = "x86_64")]
    {
        let sp: usize;
        // SAFETY: copies a register, touches no memory
        unsafe {
            core::arch::asm!("mov {}, rsp", out(reg) sp, options(nomem, nostack, preserves_flags));
        }
        sp
    }
    #[cfg(target_arch = "aarch64")]
    {
        let sp: usize;
        // SAFETY: copies a register, touches no memory
        unsafe {
            core::arch::asm!("mov {}, sp", out(reg) sp, options(nomem, nostack, preserves_flags));
        }
        sp
    }
    #[cfg(target_arch = "riscv64")]
    {
        let sp: usize;
        // SAFETY: copies a register, touches no memory
        unsafe {
            core::arch::asm!("mv {}, sp", out(reg) sp, options(nomem, nostack, preserves_flags));
        }
        sp
    }
    #[cfg(not(any(
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "riscv64"
    )))]
    {
        psm::stack_pointer() as Address
    }
}

/// Current frame address
#[inline(always)]
pub fn current_frame_address() -> Address {
    #[cfg(target_arch = "x86_64")]
    {
        let fp: usize;
        // SAFETY: copies a register, touches no memory
        unsafe {
            core::arch::asm!("mov {}, rbp", out(reg) fp, options(nomem, nostack, preserves_flags));
        }
        fp
    }
    #[cfg(target_arch = "aarch64")]
    {
        let fp: usize;
        // SAFETY: copies a register, touches no memory
        unsafe {
            core::arch::asm!("mov {}, x29", out(reg) fp, options(nomem, nostack, preserves_flags));
        }
        fp
    }
    #[cfg(target_arch = "riscv64")]
    {
        let fp: usize;
        // SAFETY: copies a register, touches no memory
        unsafe {
            core::arch::asm!("mv {}, s0", out(reg) fp, options(nomem, nostack, preserves_flags));
        }
        fp
    }
    #[cfg(not(any(
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "riscv64"
    )))]
    {
        let marker = 0u8;
        std::hint::black_box(&marker) as *const u8 as Address
    }
}

/// Human-readable name of the register pair in use
pub fn register_names() -> (&'static str, &'static str) {
    if cfg!(target_arch = "x86_64") {
        ("rsp", "rbp")
    } else if cfg!(target_arch = "aarch64") {
        ("sp", "x29")
    } else if cfg!(target_arch = "riscv64") {
        ("sp", "s0")
    } else {
        ("psm", "local")
    }
}
