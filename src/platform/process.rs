// clog - platform/process.rs
//
// Host identity and capabilities consumed by the logger: process id,
// thread id, and whether colour output is on by default.

/// Whether ANSI colour is enabled when nothing else says otherwise.
///
/// On for Unix-like targets, off elsewhere (legacy Windows consoles print
/// the escape bytes literally).
pub fn color_default() -> bool {
    cfg!(unix)
}

/// Id of the current process.
pub fn process_id() -> u32 {
    std::process::id()
}

/// Kernel id of the calling thread.
#[cfg(target_os = "linux")]
pub fn thread_id() -> u64 {
    // SAFETY: gettid takes no arguments, cannot fail, and touches no memory.
    let tid = unsafe { libc::syscall(libc::SYS_gettid) };
    tid as u64
}

/// Numeric id of the calling thread.
///
/// std exposes no stable numeric accessor for `ThreadId`, so the value is
/// read back from its `Debug` form (`ThreadId(N)`).
#[cfg(not(target_os = "linux"))]
pub fn thread_id() -> u64 {
    let repr = format!("{:?}", std::thread::current().id());
    repr.trim_start_matches("ThreadId(")
        .trim_end_matches(')')
        .parse()
        .unwrap_or(0)
}
