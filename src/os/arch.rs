//! Process and operating-system bitness queries.

/// Whether the running process uses 64-bit pointers.
///
/// Fixed at compile time by the target the crate was built for.
pub const fn is_64bit_process() -> bool {
    cfg!(target_pointer_width = "64")
}

/// Whether the host operating system is 64-bit.
///
/// A 64-bit process can only run on a 64-bit OS; for a 32-bit process the host
/// is asked whether it is emulating a narrower architecture. Requires no
/// elevated privileges and performs no filesystem I/O.
#[cfg(windows)]
pub fn is_64bit_operating_system() -> bool {
    use windows_sys::Win32::Foundation::FALSE;
    use windows_sys::Win32::System::Threading::{GetCurrentProcess, IsWow64Process};

    if is_64bit_process() {
        return true;
    }
    let mut wow64 = FALSE;
    // SAFETY: GetCurrentProcess returns a pseudo handle that is always valid
    // for the calling process, and `wow64` outlives the call.
    let ok = unsafe { IsWow64Process(GetCurrentProcess(), &mut wow64) };
    // A 32-bit process under WOW64 emulation means the OS itself is 64-bit.
    ok != FALSE && wow64 != FALSE
}

/// Whether the host operating system is 64-bit.
///
/// A 64-bit process can only run on a 64-bit OS; for a 32-bit process the
/// kernel's machine name from `uname(2)` is inspected. Requires no elevated
/// privileges and performs no filesystem I/O.
#[cfg(unix)]
pub fn is_64bit_operating_system() -> bool {
    use std::ffi::CStr;
    use std::mem::MaybeUninit;

    if is_64bit_process() {
        return true;
    }
    let mut info = MaybeUninit::<libc::utsname>::uninit();
    // SAFETY: uname fills the struct on success and touches nothing on failure.
    if unsafe { libc::uname(info.as_mut_ptr()) } != 0 {
        return false;
    }
    // SAFETY: A zero return from uname guarantees the struct is initialised
    // with NUL-terminated fields.
    let info = unsafe { info.assume_init() };
    let machine = unsafe { CStr::from_ptr(info.machine.as_ptr()) };
    matches!(
        machine.to_str().unwrap_or(""),
        "x86_64"
            | "amd64"
            | "aarch64"
            | "arm64"
            | "ppc64"
            | "ppc64le"
            | "riscv64"
            | "s390x"
            | "sparc64"
            | "loongarch64"
            | "mips64"
    )
}

/// Whether the host operating system is 64-bit.
///
/// Without an OS query to ask, the pointer width of the process stands in.
#[cfg(not(any(unix, windows)))]
pub fn is_64bit_operating_system() -> bool {
    is_64bit_process()
}
